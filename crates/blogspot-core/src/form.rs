//! Add/edit form state and required-field validation.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{Post, PostFields, PostId, PostStatus};
use crate::repository::PostRepository;

pub const REQUIRED: &str = "Required";
pub const INVALID_STATUS: &str = "Must be Draft or Published";

/// Editable form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Title,
    Author,
    Content,
    Status,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Title,
        FormField::Author,
        FormField::Content,
        FormField::Status,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Author => "author",
            FormField::Content => "content",
            FormField::Status => "status",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field error messages. Empty means the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<FormField, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    fn insert(&mut self, field: FormField, message: &str) {
        self.0.insert(field, message.to_string());
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|(field, msg)| format!("{field}: {msg}")).collect();
        f.write_str(&parts.join(", "))
    }
}

/// Raw form buffer, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostForm {
    pub title: String,
    pub author: String,
    pub content: String,
    pub status: String,
}

impl Default for PostForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            content: String::new(),
            status: PostStatus::Draft.as_str().to_string(),
        }
    }
}

impl PostForm {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Author => &self.author,
            FormField::Content => &self.content,
            FormField::Status => &self.status,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Title => self.title = value,
            FormField::Author => self.author = value,
            FormField::Content => self.content = value,
            FormField::Status => self.status = value,
        }
    }

    /// Validate and convert into committed fields.
    pub fn to_fields(&self) -> Result<PostFields, ValidationErrors> {
        let errors = validate(self);
        if !errors.is_empty() {
            return Err(errors);
        }

        let status = self.status.parse::<PostStatus>().map_err(|_| {
            let mut errors = ValidationErrors::default();
            errors.insert(FormField::Status, INVALID_STATUS);
            errors
        })?;

        Ok(PostFields {
            title: self.title.clone(),
            author: self.author.clone(),
            content: self.content.clone(),
            status,
        })
    }
}

impl From<PostFields> for PostForm {
    fn from(fields: PostFields) -> Self {
        Self {
            title: fields.title,
            author: fields.author,
            content: fields.content,
            status: fields.status.as_str().to_string(),
        }
    }
}

/// Every field that is empty after trimming maps to "Required".
pub fn validate(form: &PostForm) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    for field in FormField::ALL {
        if form.value(field).trim().is_empty() {
            errors.insert(field, REQUIRED);
        }
    }
    errors
}

/// Add/edit dialog controller.
///
/// Holds the buffer, the errors from the last submit, and the post being
/// edited (if any). A failed submit never touches the repository.
#[derive(Debug, Clone, Default)]
pub struct FormController {
    form: PostForm,
    errors: ValidationErrors,
    target: Option<PostId>,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &PostForm {
        &self.form
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn target(&self) -> Option<PostId> {
        self.target
    }

    pub fn is_editing(&self) -> bool {
        self.target.is_some()
    }

    /// Start a blank "add" form.
    pub fn open_new(&mut self) {
        self.reset();
    }

    /// Start editing `post`, copying its editable fields.
    pub fn open_edit(&mut self, post: &Post) {
        self.form = PostForm::from(post.fields());
        self.errors = ValidationErrors::default();
        self.target = Some(post.id);
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn cancel(&mut self) {
        self.reset();
    }

    /// Validate and commit. Returns the stored post, or `None` when the edit
    /// target disappeared in the meantime.
    pub async fn submit(
        &mut self,
        repo: &mut PostRepository,
    ) -> Result<Option<Post>, ValidationErrors> {
        let fields = match self.form.to_fields() {
            Ok(fields) => fields,
            Err(errors) => {
                tracing::debug!(errors = %errors, "Form rejected");
                self.errors = errors.clone();
                return Err(errors);
            }
        };

        let committed = match self.target {
            Some(id) => repo.update(id, fields).await,
            None => Some(repo.add(fields).await),
        };

        self.reset();
        Ok(committed)
    }

    fn reset(&mut self) {
        self.form = PostForm::default();
        self.errors = ValidationErrors::default();
        self.target = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FixedClock, MemoryPostStore};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn form(title: &str, author: &str, content: &str, status: &str) -> PostForm {
        PostForm {
            title: title.to_string(),
            author: author.to_string(),
            content: content.to_string(),
            status: status.to_string(),
        }
    }

    async fn repo() -> (Arc<MemoryPostStore>, PostRepository) {
        let store = Arc::new(MemoryPostStore::default());
        let repo = PostRepository::init(store.clone(), Arc::new(FixedClock::default())).await;
        (store, repo)
    }

    #[test]
    fn missing_title_only() {
        let errors = validate(&form("", "A", "C", "Draft"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FormField::Title), Some(REQUIRED));
    }

    #[test]
    fn whitespace_counts_as_empty() {
        let errors = validate(&form("  ", "\t", "C", ""));
        let fields: Vec<_> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec![FormField::Title, FormField::Author, FormField::Status]);
    }

    #[test]
    fn default_form_is_draft() {
        assert_eq!(PostForm::default().status, "Draft");
    }

    #[test]
    fn errors_serialize_by_field_name() {
        let errors = validate(&form("", "A", "", "Draft"));
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!({"title": "Required", "content": "Required"}));
    }

    #[test]
    fn unknown_status_is_rejected() {
        let errors = form("T", "A", "C", "Archived").to_fields().unwrap_err();
        assert_eq!(errors.get(FormField::Status), Some(INVALID_STATUS));
    }

    #[tokio::test]
    async fn invalid_submit_leaves_repository_untouched() {
        let (store, mut repo) = repo().await;
        let saves = store.save_count();
        let mut controller = FormController::new();
        controller.set_field(FormField::Title, "Only a title");

        let errors = controller.submit(&mut repo).await.unwrap_err();

        assert_eq!(errors.len(), 2);
        assert_eq!(controller.errors(), &errors);
        assert_eq!(controller.form().title, "Only a title");
        assert_eq!(repo.len(), 11);
        assert_eq!(store.save_count(), saves);
    }

    #[tokio::test]
    async fn submit_new_adds_and_resets() {
        let (_store, mut repo) = repo().await;
        let mut controller = FormController::new();
        controller.set_field(FormField::Title, "Beta");
        controller.set_field(FormField::Author, "X");
        controller.set_field(FormField::Content, "Y");

        let post = controller.submit(&mut repo).await.unwrap().unwrap();

        assert_eq!(post.title, "Beta");
        assert_eq!(post.status, PostStatus::Draft);
        assert_eq!(repo.len(), 12);
        assert_eq!(controller.form(), &PostForm::default());
        assert!(!controller.is_editing());
    }

    #[tokio::test]
    async fn submit_edit_updates_target() {
        let (_store, mut repo) = repo().await;
        let original = repo.get(PostId(4)).cloned().unwrap();
        let mut controller = FormController::new();
        controller.open_edit(&original);
        assert_eq!(controller.form().title, original.title);

        controller.set_field(FormField::Status, "Draft");
        let updated = controller.submit(&mut repo).await.unwrap().unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.date, original.date);
        assert_eq!(updated.status, PostStatus::Draft);
        assert_eq!(repo.len(), 11);
        assert!(controller.target().is_none());
    }

    #[tokio::test]
    async fn cancel_discards_buffer() {
        let (_store, repo) = repo().await;
        let original = repo.get(PostId(1)).cloned().unwrap();
        let mut controller = FormController::new();
        controller.open_edit(&original);
        controller.set_field(FormField::Title, "");
        controller.cancel();

        assert_eq!(controller.form(), &PostForm::default());
        assert_eq!(repo.get(PostId(1)), Some(&original));
    }
}
