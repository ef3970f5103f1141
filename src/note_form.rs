//! Note Form Model
//!
//! Draft state of the add-note screen.

use rest_collection::{Record, RecordId};

use crate::error::{AppError, Notice};

pub const EMPTY_CONTENT: &str = "Please enter some content for the note.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteForm {
    draft: String,
    notice: Option<Notice>,
}

impl NoteForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_content(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn clear(&mut self) {
        self.draft.clear();
    }

    /// Draft to submit, or a validation failure when it is blank
    pub fn validated(&self) -> Result<String, AppError> {
        if self.draft.trim().is_empty() {
            return Err(AppError::Validation(EMPTY_CONTENT.to_string()));
        }
        Ok(self.draft.clone())
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn show_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

/// Id for a new record: the last record's id plus one, `"1"` when empty.
///
/// Ids are read by their leading integer, sign included. When the last id
/// has none, the collection length plus one is used instead. Two clients
/// creating at the same time will pick the same id.
pub fn next_record_id<T: Record>(items: &[T]) -> RecordId {
    match items.last() {
        None => RecordId::from(1i64),
        Some(last) => {
            let next = match last.id().numeric_prefix() {
                Some(n) => n.saturating_add(1),
                None => items.len() as i64 + 1,
            };
            RecordId::from(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Note;

    #[test]
    fn test_next_id_after_last() {
        let items = vec![Note::new("1", "a"), Note::new("2", "b")];
        assert_eq!(next_record_id(&items), RecordId::from("3"));
    }

    #[test]
    fn test_next_id_empty_collection() {
        assert_eq!(next_record_id::<Note>(&[]), RecordId::from("1"));
    }

    #[test]
    fn test_next_id_uses_last_not_max() {
        let items = vec![Note::new("10", "a"), Note::new("4", "b")];
        assert_eq!(next_record_id(&items), RecordId::from("5"));
    }

    #[test]
    fn test_next_id_non_numeric_falls_back_to_len() {
        let items = vec![Note::new("1", "a"), Note::new("x9", "b")];
        assert_eq!(next_record_id(&items), RecordId::from("3"));
    }

    #[test]
    fn test_next_id_after_signed_last_id() {
        let items = vec![Note::new("5", "a"), Note::new("-1", "b")];
        assert_eq!(next_record_id(&items), RecordId::from("0"));

        let items = vec![Note::new("+3", "a")];
        assert_eq!(next_record_id(&items), RecordId::from("4"));
    }

    #[test]
    fn test_blank_draft_fails_validation() {
        let mut form = NoteForm::new();
        form.set_content("   \t");
        let err = form.validated().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(err.to_string(), EMPTY_CONTENT);
    }

    #[test]
    fn test_valid_draft_is_sent_untrimmed() {
        let mut form = NoteForm::new();
        form.set_content(" buy milk ");
        assert_eq!(form.validated().unwrap(), " buy milk ");
    }
}
