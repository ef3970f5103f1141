//! List Screen Model
//!
//! State owned by one list screen: the loaded collection, the search query,
//! the open dialog and the pending notice. All methods are synchronous;
//! remote calls live in `commands` and write back through `ScreenState`.

use rest_collection::RecordId;

use crate::error::Notice;
use crate::models::{Editable, Listed};

/// Dialog state of a list screen.
///
/// Leaves `Idle` only through `request_delete`/`request_edit` and always
/// returns to `Idle` on confirm or cancel.
#[derive(Debug, Clone, PartialEq)]
pub enum ModalState<T> {
    Idle,
    ConfirmingDelete(RecordId),
    ConfirmingEdit { item: T, draft: String },
}

/// What activating a list row should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Record has no availability flag
    Ignored,
    /// Record is available, open the follow-on screen
    Proceed,
    /// Record is unavailable, a notice was raised
    Blocked,
}

/// Outcome of the screen's initial load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    Failed,
}

impl LoadStatus {
    pub fn from_result<R, E>(result: &Result<R, E>) -> Self {
        match result {
            Ok(_) => LoadStatus::Ready,
            Err(_) => LoadStatus::Failed,
        }
    }

    /// Placeholder shown in place of an empty list of `resource`
    pub fn empty_text(self, resource: &str, filtering: bool) -> String {
        match self {
            LoadStatus::Loading => format!("Loading {}...", resource),
            LoadStatus::Failed => format!("Could not load {}.", resource),
            LoadStatus::Ready if filtering => "No matches.".to_string(),
            LoadStatus::Ready => format!("No {} yet.", resource),
        }
    }
}

/// Items visible for `query`: case-insensitive substring match on the
/// record's search field. An empty query matches everything.
pub fn filter_records<'a, T: Listed>(items: &'a [T], query: &str) -> Vec<&'a T> {
    if query.is_empty() {
        return items.iter().collect();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.search_text().to_lowercase().contains(&needle))
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListModel<T> {
    items: Vec<T>,
    filter_text: String,
    modal: ModalState<T>,
    notice: Option<Notice>,
}

impl<T> Default for ListModel<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            filter_text: String::new(),
            modal: ModalState::Idle,
            notice: None,
        }
    }
}

impl<T: Listed> ListModel<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn modal(&self) -> &ModalState<T> {
        &self.modal
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    // ========================
    // Collection
    // ========================

    /// Replace the collection with a fresh server snapshot
    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items = items;
    }

    /// Append a record created elsewhere, unless its id is already present
    pub fn merge_created(&mut self, item: T) -> bool {
        if self.position(item.id()).is_some() {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Replace the record with the same id, keeping its position
    pub fn replace(&mut self, item: T) -> bool {
        match self.position(item.id()) {
            Some(idx) => {
                self.items[idx] = item;
                true
            }
            None => false,
        }
    }

    /// Remove the record with `id`; missing ids leave the list as is
    pub fn remove(&mut self, id: &RecordId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }

    fn position(&self, id: &RecordId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    // ========================
    // Search
    // ========================

    pub fn set_filter_text(&mut self, text: impl Into<String>) {
        self.filter_text = text.into();
    }

    /// Rows to render for the current query, in collection order
    pub fn visible(&self) -> Vec<T> {
        filter_records(&self.items, &self.filter_text)
            .into_iter()
            .cloned()
            .collect()
    }

    // ========================
    // Dialogs
    // ========================

    /// Ask for delete confirmation; ignored while another dialog is open
    pub fn request_delete(&mut self, id: RecordId) -> bool {
        if !matches!(self.modal, ModalState::Idle) {
            return false;
        }
        self.modal = ModalState::ConfirmingDelete(id);
        true
    }

    /// Leave `ConfirmingDelete`, yielding the id to delete
    pub fn take_pending_delete(&mut self) -> Option<RecordId> {
        match std::mem::replace(&mut self.modal, ModalState::Idle) {
            ModalState::ConfirmingDelete(id) => Some(id),
            other => {
                self.modal = other;
                None
            }
        }
    }

    pub fn cancel(&mut self) {
        self.modal = ModalState::Idle;
    }

    // ========================
    // Notices
    // ========================

    pub fn show_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Decide what activating `item` does; unavailable records raise a notice
    pub fn activate(&mut self, item: &T) -> Activation {
        match item.availability() {
            None => Activation::Ignored,
            Some(true) => Activation::Proceed,
            Some(false) => {
                self.show_notice(Notice::info(format!("This {} is closed.", T::NOUN)));
                Activation::Blocked
            }
        }
    }
}

impl<T: Editable> ListModel<T> {
    /// Open the edit dialog pre-filled with the record's current text
    pub fn request_edit(&mut self, item: T) -> bool {
        if !matches!(self.modal, ModalState::Idle) {
            return false;
        }
        let draft = item.edit_text().to_string();
        self.modal = ModalState::ConfirmingEdit { item, draft };
        true
    }

    pub fn set_edit_draft(&mut self, text: impl Into<String>) {
        if let ModalState::ConfirmingEdit { draft, .. } = &mut self.modal {
            *draft = text.into();
        }
    }

    /// Current draft of the edit dialog
    pub fn edit_draft(&self) -> Option<&str> {
        match &self.modal {
            ModalState::ConfirmingEdit { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// Leave `ConfirmingEdit`, yielding the record being edited
    pub fn take_pending_edit(&mut self) -> Option<T> {
        match std::mem::replace(&mut self.modal, ModalState::Idle) {
            ModalState::ConfirmingEdit { item, .. } => Some(item),
            other => {
                self.modal = other;
                None
            }
        }
    }
}
