//! Command Tests
//!
//! Screen commands against an in-memory collection.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;
use rest_collection::{ApiError, ApiResult, CollectionClient, Record, RecordId};

use super::*;
use crate::error::{AppError, NoticeKind};
use crate::list_model::{ListModel, ModalState};
use crate::models::Note;
use crate::note_form::NoteForm;

/// Collection fake that records every call as `"METHOD path"`
struct MemoryCollection<T> {
    records: RefCell<Vec<T>>,
    calls: RefCell<Vec<String>>,
    sent: RefCell<Vec<String>>,
    failing: Cell<bool>,
}

impl<T: Record> MemoryCollection<T> {
    fn new(records: Vec<T>) -> Self {
        Self {
            records: RefCell::new(records),
            calls: RefCell::new(Vec::new()),
            sent: RefCell::new(Vec::new()),
            failing: Cell::new(false),
        }
    }

    fn failing(self) -> Self {
        self.failing.set(true);
        self
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record_call(&self, call: String) -> ApiResult<()> {
        self.calls.borrow_mut().push(call);
        if self.failing.get() {
            return Err(server_error(500));
        }
        Ok(())
    }
}

fn server_error(status: u16) -> ApiError {
    ApiError::Status {
        status,
        url: "http://localhost:5000".to_string(),
    }
}

#[async_trait(?Send)]
impl<T: Record> CollectionClient<T> for MemoryCollection<T> {
    async fn list(&self) -> ApiResult<Vec<T>> {
        self.record_call(format!("GET /{}", T::RESOURCE))?;
        Ok(self.records.borrow().clone())
    }

    async fn create(&self, record: &T) -> ApiResult<T> {
        self.record_call(format!("POST /{}", T::RESOURCE))?;
        self.sent.borrow_mut().push(serde_json::to_string(record)?);
        self.records.borrow_mut().push(record.clone());
        Ok(record.clone())
    }

    async fn update(&self, record: &T) -> ApiResult<T> {
        self.record_call(format!("PUT /{}/{}", T::RESOURCE, record.id()))?;
        self.sent.borrow_mut().push(serde_json::to_string(record)?);
        let mut records = self.records.borrow_mut();
        let slot = records
            .iter_mut()
            .find(|r| r.id() == record.id())
            .ok_or_else(|| server_error(404))?;
        *slot = record.clone();
        Ok(record.clone())
    }

    async fn delete(&self, id: &RecordId) -> ApiResult<()> {
        self.record_call(format!("DELETE /{}/{}", T::RESOURCE, id))?;
        let mut records = self.records.borrow_mut();
        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            return Err(server_error(404));
        }
        Ok(())
    }
}

fn notes(pairs: &[(&str, &str)]) -> Vec<Note> {
    pairs.iter().map(|(id, content)| Note::new(*id, *content)).collect()
}

fn list_state(items: Vec<Note>) -> Rc<RefCell<ListModel<Note>>> {
    let mut model = ListModel::new();
    model.replace_all(items);
    Rc::new(RefCell::new(model))
}

// ========================
// Load
// ========================

#[tokio::test]
async fn test_load_replaces_local_copy() {
    let server = MemoryCollection::new(notes(&[("1", "a"), ("2", "b")]));
    let state = list_state(notes(&[("9", "stale")]));

    let count = load_collection(&server, &state).await.expect("load failed");

    assert_eq!(count, 2);
    assert_eq!(state.borrow().items(), notes(&[("1", "a"), ("2", "b")]).as_slice());
    assert_eq!(server.calls(), vec!["GET /notes"]);
}

#[tokio::test]
async fn test_failed_load_keeps_prior_state() {
    let server = MemoryCollection::new(notes(&[("1", "a")])).failing();
    let state = list_state(notes(&[("9", "kept")]));

    let err = load_collection(&server, &state).await.unwrap_err();

    assert!(matches!(err, AppError::Network(_)));
    let model = state.borrow();
    assert_eq!(model.items(), notes(&[("9", "kept")]).as_slice());
    let notice = model.notice().expect("notice raised");
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.message, "Failed to fetch notes.");
}

#[tokio::test]
async fn test_load_merges_created_note() {
    let server = MemoryCollection::new(notes(&[("1", "a")]));
    let state = list_state(Vec::new());

    load_with_created(&server, &state, Some(Note::new("2", "new")))
        .await
        .expect("load failed");
    assert_eq!(state.borrow().items(), notes(&[("1", "a"), ("2", "new")]).as_slice());

    // Already on the server: not duplicated
    let state = list_state(Vec::new());
    load_with_created(&server, &state, Some(Note::new("1", "a")))
        .await
        .expect("load failed");
    assert_eq!(state.borrow().items().len(), 1);
}

#[tokio::test]
async fn test_result_dropped_after_screen_closed() {
    let server = MemoryCollection::new(notes(&[("1", "a")]));
    let state = list_state(Vec::new());
    let handle = Rc::downgrade(&state);
    drop(state);

    let count = load_collection(&server, &handle).await.expect("load failed");
    assert_eq!(count, 1);
}

// ========================
// Delete
// ========================

#[tokio::test]
async fn test_confirm_delete_removes_record() {
    let server = MemoryCollection::new(notes(&[("1", "a"), ("2", "b")]));
    let state = list_state(notes(&[("1", "a"), ("2", "b")]));
    state.borrow_mut().request_delete(RecordId::from("1"));

    confirm_delete(&server, &state).await;

    let model = state.borrow();
    assert_eq!(model.items(), notes(&[("2", "b")]).as_slice());
    assert!(model.notice().is_none());
    assert_eq!(model.modal(), &ModalState::Idle);
    assert_eq!(server.calls(), vec!["DELETE /notes/1"]);
}

#[tokio::test]
async fn test_failed_delete_leaves_state_identical() {
    let server = MemoryCollection::new(notes(&[("1", "a"), ("2", "b")])).failing();
    let state = list_state(notes(&[("1", "a"), ("2", "b")]));
    let before = state.borrow().items().to_vec();
    state.borrow_mut().request_delete(RecordId::from("2"));

    confirm_delete(&server, &state).await;

    let model = state.borrow();
    assert_eq!(model.notice().unwrap().kind, NoticeKind::Error);
    assert_eq!(model.items(), before.as_slice());
    assert_eq!(model.modal(), &ModalState::Idle);
    assert_eq!(model.notice().unwrap().message, "Failed to delete the note.");
}

#[tokio::test]
async fn test_delete_unknown_id_still_calls_server() {
    let server = MemoryCollection::new(notes(&[("1", "a")]));
    let state = list_state(notes(&[("1", "a")]));
    state.borrow_mut().request_delete(RecordId::from("42"));

    confirm_delete(&server, &state).await;

    assert_eq!(server.calls(), vec!["DELETE /notes/42"]);
    assert_eq!(state.borrow().items(), notes(&[("1", "a")]).as_slice());
    assert_eq!(
        state.borrow().notice().map(|n| n.kind),
        Some(NoticeKind::Error)
    );
}

#[tokio::test]
async fn test_confirm_delete_without_request_is_noop() {
    let server = MemoryCollection::new(notes(&[("1", "a")]));
    let state = list_state(notes(&[("1", "a")]));

    confirm_delete(&server, &state).await;
    assert!(server.calls().is_empty());
    assert!(state.borrow().notice().is_none());
}

// ========================
// Edit
// ========================

#[tokio::test]
async fn test_edit_scenario_milk_to_bread() {
    let server = MemoryCollection::new(notes(&[("1", "buy milk")]));
    let state = list_state(Vec::new());
    load_collection(&server, &state).await.expect("load failed");

    let note = state.borrow().items()[0].clone();
    state.borrow_mut().request_edit(note);
    state.borrow_mut().set_edit_draft("buy bread");
    let draft = state.borrow().edit_draft().unwrap().to_string();

    confirm_edit(&server, &state, draft).await;

    let model = state.borrow();
    assert_eq!(model.items(), notes(&[("1", "buy bread")]).as_slice());
    assert_eq!(model.modal(), &ModalState::Idle);
    assert_eq!(model.notice().unwrap().kind, NoticeKind::Success);
    assert_eq!(model.notice().unwrap().message, "Note updated successfully.");
    assert_eq!(server.calls(), vec!["GET /notes", "PUT /notes/1"]);
    assert_eq!(*server.sent.borrow(), vec![r#"{"id":"1","content":"buy bread"}"#.to_string()]);
}

#[tokio::test]
async fn test_edit_only_touches_target() {
    let server = MemoryCollection::new(notes(&[("1", "a"), ("2", "b")]));
    let state = list_state(notes(&[("1", "a"), ("2", "b")]));
    state.borrow_mut().request_edit(Note::new("2", "b"));

    confirm_edit(&server, &state, "z".to_string()).await;

    assert_eq!(state.borrow().items(), notes(&[("1", "a"), ("2", "z")]).as_slice());
}

#[tokio::test]
async fn test_failed_edit_keeps_old_content() {
    let server = MemoryCollection::new(notes(&[("1", "a")])).failing();
    let state = list_state(notes(&[("1", "a")]));
    state.borrow_mut().request_edit(Note::new("1", "a"));

    confirm_edit(&server, &state, "b".to_string()).await;

    let model = state.borrow();
    assert_eq!(model.notice().unwrap().kind, NoticeKind::Error);
    assert_eq!(model.items(), notes(&[("1", "a")]).as_slice());
    assert_eq!(model.modal(), &ModalState::Idle);
    assert_eq!(model.notice().unwrap().message, "Failed to update the note.");
}

// ========================
// Submit
// ========================

fn form_state(draft: &str) -> Rc<RefCell<NoteForm>> {
    let mut form = NoteForm::new();
    form.set_content(draft);
    Rc::new(RefCell::new(form))
}

#[tokio::test]
async fn test_blank_submit_never_calls_server() {
    let server: MemoryCollection<Note> = MemoryCollection::new(Vec::new());
    let form = form_state("   ");

    let err = submit_note(&server, &form).await.unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    assert!(server.calls().is_empty());
    assert!(server.records.borrow().is_empty());
    assert_eq!(
        form.borrow().notice().unwrap().message,
        "Please enter some content for the note."
    );
}

#[tokio::test]
async fn test_submit_assigns_next_id() {
    let server = MemoryCollection::new(notes(&[("1", "a"), ("2", "b")]));
    let form = form_state("walk the dog");

    let created = submit_note(&server, &form).await.expect("submit failed");

    assert_eq!(created, Note::new("3", "walk the dog"));
    assert_eq!(server.calls(), vec!["GET /notes", "POST /notes"]);
    assert_eq!(*server.sent.borrow(), vec![r#"{"id":"3","content":"walk the dog"}"#.to_string()]);
    assert_eq!(form.borrow().draft(), "");
}

#[tokio::test]
async fn test_first_note_gets_id_one() {
    let server: MemoryCollection<Note> = MemoryCollection::new(Vec::new());
    let form = form_state("first");

    let created = submit_note(&server, &form).await.expect("submit failed");
    assert_eq!(created.id, RecordId::from("1"));
}

#[tokio::test]
async fn test_failed_submit_keeps_draft() {
    let server = MemoryCollection::new(notes(&[("1", "a")])).failing();
    let form = form_state("retry me");

    let err = submit_note(&server, &form).await.unwrap_err();

    assert!(matches!(err, AppError::Network(_)));
    let form = form.borrow();
    assert_eq!(form.draft(), "retry me");
    assert_eq!(form.notice().unwrap().message, "Failed to add the note.");
}

#[test]
fn test_capitalized() {
    assert_eq!(capitalized("note"), "Note");
    assert_eq!(capitalized(""), "");
}
