//! Note Commands

use rest_collection::CollectionClient;

use crate::error::{AppError, Notice};
use crate::models::Note;
use crate::note_form::{next_record_id, NoteForm, EMPTY_CONTENT};
use crate::screen_state::ScreenState;

/// Create a note from the form draft.
///
/// Blank drafts never reach the server. On success the draft is cleared and
/// the stored note returned for the list screen; on failure the draft stays
/// for another try.
pub async fn submit_note<C, S>(client: &C, state: &S) -> Result<Note, AppError>
where
    C: CollectionClient<Note>,
    S: ScreenState<NoteForm>,
{
    let content = match state.inspect(NoteForm::validated) {
        Some(Ok(content)) => content,
        Some(Err(e)) => {
            log::warn!("[notes] submit rejected: {}", e);
            let notice = Notice::from(&e);
            state.apply(|form| form.show_notice(notice));
            return Err(e);
        }
        None => return Err(AppError::Validation(EMPTY_CONTENT.to_string())),
    };

    match create_next(client, content).await {
        Ok(note) => {
            log::info!("[notes] created {}", note.id);
            state.apply(|form| form.clear());
            Ok(note)
        }
        Err(e) => {
            log::error!("[notes] create failed: {}", e);
            state.apply(|form| form.show_notice(Notice::error("Failed to add the note.")));
            Err(e)
        }
    }
}

async fn create_next<C>(client: &C, content: String) -> Result<Note, AppError>
where
    C: CollectionClient<Note>,
{
    let existing = client.list().await?;
    let note = Note {
        id: next_record_id(&existing),
        content,
    };
    Ok(client.create(&note).await?)
}
