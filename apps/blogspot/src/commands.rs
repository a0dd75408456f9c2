//! Command handlers. Each one drives the [`AdminSession`] the way the UI would:
//! open a dialog, fill the form, submit or confirm.

use blogspot_core::{
    AdminSession, DomainError, Dialog, FormField, PostId, SortDirection, SortState,
};
use blogspot_shared::{PostPage, PostView};

use crate::cli::{AddArgs, Commands, EditArgs, ListArgs, OutputFormat};
use crate::output;

pub async fn dispatch(
    command: Commands,
    session: &mut AdminSession,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match command {
        Commands::List(args) => list(session, args, format),
        Commands::Show { id } => show(session, id, format),
        Commands::Add(args) => add(session, args, format).await,
        Commands::Edit(args) => edit(session, args, format).await,
        Commands::Delete { id, yes } => delete(session, id, yes, format).await,
        Commands::Reset { yes } => reset(session, yes, format).await,
    }?;

    if let Some(error) = session.repository().persistence_error() {
        tracing::warn!(error = %error, "Changes were not saved");
        eprintln!("warning: changes could not be saved: {error}");
    }
    Ok(())
}

fn list(session: &mut AdminSession, args: ListArgs, format: OutputFormat) -> anyhow::Result<()> {
    let direction = if args.desc {
        SortDirection::Descending
    } else {
        SortDirection::Ascending
    };

    session.set_search_term(args.search);
    session.set_sort_state(SortState::new(args.sort, direction));
    if let Some(size) = args.page_size {
        session.set_page_size(usize::try_from(size)?);
    }
    session.set_page(usize::try_from(args.page - 1)?);

    let page = PostPage::from(&session.visible());
    output::print_page(&page, format)
}

fn show(session: &AdminSession, id: PostId, format: OutputFormat) -> anyhow::Result<()> {
    let post = session
        .repository()
        .get(id)
        .ok_or(DomainError::NotFound(id))?;
    output::print_post(&PostView::from(post), None, format)
}

async fn add(session: &mut AdminSession, args: AddArgs, format: OutputFormat) -> anyhow::Result<()> {
    session.open_add();
    session.set_field(FormField::Title, args.title);
    session.set_field(FormField::Author, args.author);
    session.set_field(FormField::Content, args.content);
    session.set_field(FormField::Status, args.status);

    let post = session
        .submit()
        .await
        .map_err(DomainError::Validation)?
        .ok_or_else(|| anyhow::anyhow!("new post was not stored"))?;

    tracing::info!(post_id = %post.id, "Post created");
    output::print_post(&PostView::from(&post), Some("Post created."), format)
}

async fn edit(session: &mut AdminSession, args: EditArgs, format: OutputFormat) -> anyhow::Result<()> {
    if !session.open_edit(args.id) {
        return Err(DomainError::NotFound(args.id).into());
    }

    let changes = [
        (FormField::Title, args.title),
        (FormField::Author, args.author),
        (FormField::Content, args.content),
        (FormField::Status, args.status),
    ];
    for (field, value) in changes {
        if let Some(value) = value {
            session.set_field(field, value);
        }
    }

    let post = session
        .submit()
        .await
        .map_err(DomainError::Validation)?
        .ok_or(DomainError::NotFound(args.id))?;

    tracing::info!(post_id = %post.id, "Post updated");
    output::print_post(&PostView::from(&post), Some("Post updated."), format)
}

async fn delete(
    session: &mut AdminSession,
    id: PostId,
    yes: bool,
    format: OutputFormat,
) -> anyhow::Result<()> {
    if !session.request_delete(id) {
        return Err(DomainError::NotFound(id).into());
    }

    if !yes {
        let prompt = match session.dialog() {
            Dialog::ConfirmDelete { title, .. } => {
                format!("Are you sure you want to delete \"{title}\"? Re-run with --yes to confirm.")
            }
            _ => String::new(),
        };
        session.cancel_dialog();
        return output::print_message(&prompt, format);
    }

    match session.confirm_delete().await {
        Some(post) => {
            tracing::info!(post_id = %post.id, "Post deleted");
            output::print_message(&format!("Deleted \"{}\".", post.title), format)
        }
        None => Err(DomainError::NotFound(id).into()),
    }
}

async fn reset(session: &mut AdminSession, yes: bool, format: OutputFormat) -> anyhow::Result<()> {
    if !yes {
        return output::print_message(
            "This restores the built-in posts and discards every change. Re-run with --yes to confirm.",
            format,
        );
    }

    session.reset().await;
    output::print_message(
        &format!("Restored {} built-in posts.", session.repository().len()),
        format,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, MEMORY_STORE};
    use crate::state::build_session;
    use blogspot_core::PostStatus;
    use blogspot_core::domain::builtin_posts;
    use std::path::PathBuf;

    async fn memory_session() -> AdminSession {
        let config = AppConfig::default().with_data_file(Some(PathBuf::from(MEMORY_STORE)));
        build_session(&config).await
    }

    #[tokio::test]
    async fn add_with_blank_title_is_a_validation_error() {
        let mut session = memory_session().await;
        let args = AddArgs {
            title: "  ".to_string(),
            author: "A".to_string(),
            content: "C".to_string(),
            status: "Draft".to_string(),
        };

        let err = add(&mut session, args, OutputFormat::Json).await.unwrap_err();

        let Some(DomainError::Validation(errors)) = err.downcast_ref::<DomainError>() else {
            panic!("expected validation error, got {err}");
        };
        assert_eq!(errors.get(FormField::Title), Some("Required"));
        assert_eq!(session.repository().len(), 11);
    }

    #[tokio::test]
    async fn edit_changes_only_given_fields() {
        let mut session = memory_session().await;
        let before = session.repository().get(PostId(5)).cloned().unwrap();
        let args = EditArgs {
            id: PostId(5),
            title: None,
            author: None,
            content: None,
            status: Some("published".to_string()),
        };

        edit(&mut session, args, OutputFormat::Json).await.unwrap();

        let after = session.repository().get(PostId(5)).unwrap();
        assert_eq!(after.status, PostStatus::Published);
        assert_eq!(after.title, before.title);
        assert_eq!(after.date, before.date);
    }

    #[tokio::test]
    async fn edit_unknown_id_is_not_found() {
        let mut session = memory_session().await;
        let args = EditArgs {
            id: PostId(404),
            title: Some("x".to_string()),
            author: None,
            content: None,
            status: None,
        };

        let err = edit(&mut session, args, OutputFormat::Json).await.unwrap_err();
        assert!(matches!(err.downcast_ref::<DomainError>(), Some(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_without_yes_keeps_the_post() {
        let mut session = memory_session().await;
        delete(&mut session, PostId(1), false, OutputFormat::Json).await.unwrap();
        assert!(session.repository().get(PostId(1)).is_some());
        assert_eq!(session.dialog(), &Dialog::Closed);

        delete(&mut session, PostId(1), true, OutputFormat::Json).await.unwrap();
        assert!(session.repository().get(PostId(1)).is_none());
    }

    #[tokio::test]
    async fn reset_needs_yes() {
        let mut session = memory_session().await;
        delete(&mut session, PostId(1), true, OutputFormat::Json).await.unwrap();

        reset(&mut session, false, OutputFormat::Json).await.unwrap();
        assert!(session.repository().get(PostId(1)).is_none());

        reset(&mut session, true, OutputFormat::Json).await.unwrap();
        assert_eq!(session.repository().posts(), builtin_posts().as_slice());
    }
}
