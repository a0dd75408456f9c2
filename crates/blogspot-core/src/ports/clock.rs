use crate::domain::PostDate;

/// Source of "now" for id and date assignment.
pub trait Clock: Send + Sync {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;

    /// Today's date in the user's local calendar.
    fn today(&self) -> PostDate;
}
