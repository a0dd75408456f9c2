//! Admin session - the state a front end renders and the actions it invokes.
//!
//! # Invariants
//! - The visible list is always recomputed from the repository
//!   (`filter -> sort -> paginate`), never patched in place.
//! - Changing the search term, the sort, or the page size returns to page 0.
//! - Closing a dialog without confirming never mutates the repository.

use serde::{Deserialize, Serialize};

use crate::domain::{Post, PostId};
use crate::form::{FormController, FormField, ValidationErrors};
use crate::pagination::{PageInfo, Pagination};
use crate::query::{self, SortKey, SortState};
use crate::repository::PostRepository;

/// Which modal, if any, is open.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Dialog {
    #[default]
    Closed,
    Editor { target: Option<PostId> },
    ConfirmDelete { id: PostId, title: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// One rendered page of the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisiblePage {
    pub posts: Vec<Post>,
    pub info: PageInfo,
    pub sort: SortState,
    pub search_term: String,
}

pub struct AdminSession {
    repo: PostRepository,
    search_term: String,
    sort: SortState,
    pagination: Pagination,
    form: FormController,
    dialog: Dialog,
    theme: ThemeMode,
}

impl AdminSession {
    pub fn new(repo: PostRepository) -> Self {
        Self::with_pagination(repo, Pagination::default())
    }

    pub fn with_pagination(repo: PostRepository, pagination: Pagination) -> Self {
        Self {
            repo,
            search_term: String::new(),
            sort: SortState::default(),
            pagination,
            form: FormController::new(),
            dialog: Dialog::Closed,
            theme: ThemeMode::default(),
        }
    }

    pub fn repository(&self) -> &PostRepository {
        &self.repo
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn errors(&self) -> &ValidationErrors {
        self.form.errors()
    }

    pub fn dialog(&self) -> &Dialog {
        &self.dialog
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.pagination.reset();
    }

    /// Header click: flips the active column or selects a new one ascending.
    pub fn set_sort(&mut self, key: SortKey) {
        self.sort.toggle(key);
        self.pagination.reset();
    }

    pub fn set_sort_state(&mut self, sort: SortState) {
        self.sort = sort;
        self.pagination.reset();
    }

    pub fn set_page(&mut self, page_index: usize) {
        self.pagination.set_page(page_index);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.pagination.set_page_size(page_size);
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Filtered and sorted posts, before pagination.
    pub fn filtered(&self) -> Vec<Post> {
        query::view(self.repo.posts(), &self.search_term, self.sort)
    }

    pub fn visible(&self) -> VisiblePage {
        let filtered = self.filtered();
        let info = self.pagination.info(filtered.len());
        VisiblePage {
            posts: self.pagination.apply(&filtered).to_vec(),
            info,
            sort: self.sort,
            search_term: self.search_term.clone(),
        }
    }

    pub fn open_add(&mut self) {
        self.form.open_new();
        self.dialog = Dialog::Editor { target: None };
    }

    /// Open the editor on post `id`. Returns false for an unknown id.
    pub fn open_edit(&mut self, id: PostId) -> bool {
        let Some(post) = self.repo.get(id) else {
            return false;
        };
        self.form.open_edit(post);
        self.dialog = Dialog::Editor { target: Some(id) };
        true
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set_field(field, value);
    }

    /// Commit the editor. The dialog stays open when validation fails.
    pub async fn submit(&mut self) -> Result<Option<Post>, ValidationErrors> {
        let committed = self.form.submit(&mut self.repo).await?;
        self.dialog = Dialog::Closed;
        Ok(committed)
    }

    /// Ask for confirmation before deleting post `id`. Returns false for an unknown id.
    pub fn request_delete(&mut self, id: PostId) -> bool {
        let Some(post) = self.repo.get(id) else {
            return false;
        };
        self.dialog = Dialog::ConfirmDelete {
            id,
            title: post.title.clone(),
        };
        true
    }

    /// Delete the post awaiting confirmation, if any.
    pub async fn confirm_delete(&mut self) -> Option<Post> {
        let Dialog::ConfirmDelete { id, .. } = self.dialog else {
            return None;
        };
        self.dialog = Dialog::Closed;
        let removed = self.repo.remove(id).await;
        self.clamp_page();
        removed
    }

    /// Dismiss whichever dialog is open without committing anything.
    pub fn cancel_dialog(&mut self) {
        if matches!(self.dialog, Dialog::Editor { .. }) {
            self.form.cancel();
        }
        self.dialog = Dialog::Closed;
    }

    pub async fn reset(&mut self) {
        self.repo.reset().await;
        self.pagination.reset();
    }

    fn clamp_page(&mut self) {
        let page_count = self.pagination.info(self.filtered().len()).page_count;
        if page_count > 0 && self.pagination.page_index() >= page_count {
            self.pagination.set_page(page_count - 1);
        }
    }
}
