//! List Commands
//!
//! Load, delete and edit for list screens. Local state changes only after
//! the remote call succeeded.

use rest_collection::CollectionClient;

use super::capitalized;
use crate::error::{AppError, Notice};
use crate::list_model::ListModel;
use crate::models::{Editable, Listed};
use crate::screen_state::ScreenState;

fn screen_gone(resource: &str, action: &str) {
    log::debug!("[{}] screen closed before {} finished, result dropped", resource, action);
}

/// Fetch the whole collection and replace the screen's copy
pub async fn load_collection<T, C, S>(client: &C, state: &S) -> Result<usize, AppError>
where
    T: Listed,
    C: CollectionClient<T>,
    S: ScreenState<ListModel<T>>,
{
    match client.list().await {
        Ok(items) => {
            let count = items.len();
            log::info!("[{}] loaded {} records", T::RESOURCE, count);
            if state.apply(|model| model.replace_all(items)).is_none() {
                screen_gone(T::RESOURCE, "load");
            }
            Ok(count)
        }
        Err(e) => {
            log::error!("[{}] load failed: {}", T::RESOURCE, e);
            let notice = Notice::error(format!("Failed to fetch {}.", T::RESOURCE));
            state.apply(|model| model.show_notice(notice));
            Err(e.into())
        }
    }
}

/// Load, then merge a record handed over by the previous screen.
///
/// The record is merged even when the load fails, so the user still sees
/// what they just created.
pub async fn load_with_created<T, C, S>(
    client: &C,
    state: &S,
    created: Option<T>,
) -> Result<usize, AppError>
where
    T: Listed,
    C: CollectionClient<T>,
    S: ScreenState<ListModel<T>>,
{
    let loaded = load_collection(client, state).await;
    if let Some(record) = created {
        let id = record.id().clone();
        match state.apply(|model| model.merge_created(record)) {
            Some(true) => log::debug!("[{}] merged created record {}", T::RESOURCE, id),
            Some(false) => {}
            None => screen_gone(T::RESOURCE, "merge"),
        }
    }
    loaded
}

/// Delete the record awaiting confirmation.
///
/// The dialog closes whatever the outcome; a failure only shows up as the
/// screen's notice. An id missing locally still reaches the server.
pub async fn confirm_delete<T, C, S>(client: &C, state: &S)
where
    T: Listed,
    C: CollectionClient<T>,
    S: ScreenState<ListModel<T>>,
{
    let Some(id) = state.apply(|model| model.take_pending_delete()).flatten() else {
        return;
    };

    match client.delete(&id).await {
        Ok(()) => {
            log::info!("[{}] deleted {}", T::RESOURCE, id);
            if state.apply(|model| model.remove(&id)).is_none() {
                screen_gone(T::RESOURCE, "delete");
            }
        }
        Err(e) => {
            log::error!("[{}] delete {} failed: {}", T::RESOURCE, id, e);
            let notice = Notice::error(format!("Failed to delete the {}.", T::NOUN));
            state.apply(|model| model.show_notice(notice));
        }
    }
}

/// Save `new_value` into the record being edited.
///
/// The payload is the full record with the new text; `id` is taken from
/// the record as loaded and never from the server's answer. Success and
/// failure both end as the screen's notice.
pub async fn confirm_edit<T, C, S>(client: &C, state: &S, new_value: String)
where
    T: Editable,
    C: CollectionClient<T>,
    S: ScreenState<ListModel<T>>,
{
    let Some(item) = state.apply(|model| model.take_pending_edit()).flatten() else {
        return;
    };
    let updated = item.with_edit_text(new_value);

    match client.update(&updated).await {
        Ok(_) => {
            log::info!("[{}] updated {}", T::RESOURCE, updated.id());
            let notice = Notice::success(format!("{} updated successfully.", capitalized(T::NOUN)));
            let applied = state.apply(|model| {
                model.replace(updated);
                model.show_notice(notice);
            });
            if applied.is_none() {
                screen_gone(T::RESOURCE, "update");
            }
        }
        Err(e) => {
            log::error!("[{}] update {} failed: {}", T::RESOURCE, updated.id(), e);
            let notice = Notice::error(format!("Failed to update the {}.", T::NOUN));
            state.apply(|model| model.show_notice(notice));
        }
    }
}
