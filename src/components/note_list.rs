//! Note List Screen
//!
//! Searchable list of notes with per-row edit and delete. A note created
//! on the add screen arrives as `new_note` and is merged after loading.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::Route;
use crate::commands::{confirm_delete, confirm_edit, load_with_created, notes_client};
use crate::components::{ConfirmDialog, EditDialog, Greeting, NoticeDialog, SearchField};
use crate::context::use_app_context;
use crate::list_model::{ListModel, LoadStatus, ModalState};
use crate::models::Note;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn NoteList(user_name: String, new_note: Option<Note>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let model = RwSignal::new(ListModel::<Note>::new());
    let (status, set_status) = signal(LoadStatus::Loading);

    spawn_local(async move {
        let client = notes_client(&store.config().get_untracked());
        let loaded = load_with_created(&client, &model, new_note).await;
        set_status.try_set(LoadStatus::from_result(&loaded));
    });

    let visible = move || model.with(|m| m.visible());
    let deleting = Signal::derive(move || {
        model.with(|m| matches!(m.modal(), ModalState::ConfirmingDelete(_)))
    });
    let editing = Signal::derive(move || model.with(|m| m.edit_draft().is_some()));
    let draft = Signal::derive(move || {
        model.with(|m| m.edit_draft().unwrap_or_default().to_string())
    });

    let on_confirm_delete = move |_: ()| {
        spawn_local(async move {
            let client = notes_client(&store.config().get_untracked());
            confirm_delete(&client, &model).await;
        });
    };

    let on_confirm_edit = move |_: ()| {
        let Some(new_value) = model.with_untracked(|m| m.edit_draft().map(str::to_string)) else {
            return;
        };
        spawn_local(async move {
            let client = notes_client(&store.config().get_untracked());
            confirm_edit(&client, &model, new_value).await;
        });
    };

    let add_user = user_name.clone();

    view! {
        <div class="screen note-list-screen">
            <Greeting user_name=user_name />

            <SearchField
                value=Signal::derive(move || model.with(|m| m.filter_text().to_string()))
                on_input=move |text: String| model.update(|m| m.set_filter_text(text))
            />

            <ul class="note-list">
                <For
                    each=visible
                    key=|note| (note.id.clone(), note.content.clone())
                    children=move |note| {
                        let edit_note = note.clone();
                        let delete_id = note.id.clone();
                        view! {
                            <li class="note-row">
                                <span class="note-content">{note.content.clone()}</span>
                                <button
                                    class="icon-btn edit"
                                    title="Edit"
                                    on:click=move |_| {
                                        let item = edit_note.clone();
                                        model.update(|m| { m.request_edit(item); });
                                    }
                                >
                                    "✎"
                                </button>
                                <button
                                    class="icon-btn delete"
                                    title="Delete"
                                    on:click=move |_| {
                                        let id = delete_id.clone();
                                        model.update(|m| { m.request_delete(id); });
                                    }
                                >
                                    "🗑"
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
            <Show when=move || model.with(|m| m.visible().is_empty())>
                <p class="empty-list">
                    {move || {
                        let filtering = model.with(|m| !m.filter_text().is_empty());
                        status.get().empty_text("notes", filtering)
                    }}
                </p>
            </Show>

            <button
                class="fab"
                title="Add note"
                on:click=move |_| ctx.navigate(Route::AddNote { user_name: add_user.clone() })
            >
                "+"
            </button>

            <ConfirmDialog
                open=deleting
                message="Are you sure you want to delete this note?"
                on_confirm=on_confirm_delete
                on_cancel=move |_| model.update(|m| m.cancel())
            />
            <EditDialog
                open=editing
                title="Edit note"
                draft=draft
                on_input=move |text: String| model.update(|m| m.set_edit_draft(text))
                on_confirm=on_confirm_edit
                on_cancel=move |_| model.update(|m| m.cancel())
            />
            <NoticeDialog
                notice=Signal::derive(move || model.with(|m| m.notice().cloned()))
                on_close=move |_| model.update(|m| m.dismiss_notice())
            />
        </div>
    }
}
