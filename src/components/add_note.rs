//! Add Note Screen

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::Route;
use crate::commands::{notes_client, submit_note};
use crate::components::{Greeting, NoticeDialog};
use crate::context::use_app_context;
use crate::error::Notice;
use crate::note_form::NoteForm;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn AddNote(user_name: String) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let form = RwSignal::new(NoteForm::new());
    let (saving, set_saving) = signal(false);

    let back_user = user_name.clone();
    let submit_user = user_name.clone();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        set_saving.set(true);
        let user_name = submit_user.clone();
        spawn_local(async move {
            let client = notes_client(&store.config().get_untracked());
            let result = submit_note(&client, &form).await;
            // Left the screen while saving: stay where the user went
            if set_saving.try_set(false).is_some() {
                return;
            }
            if let Ok(note) = result {
                ctx.notify(Notice::success("Note added successfully."));
                ctx.navigate(Route::NoteList {
                    user_name,
                    new_note: Some(note),
                });
            }
        });
    };

    view! {
        <div class="screen add-note-screen">
            <button
                class="back-btn"
                on:click=move |_| ctx.navigate(Route::NoteList {
                    user_name: back_user.clone(),
                    new_note: None,
                })
            >
                "‹ Back"
            </button>

            <Greeting user_name=user_name />

            <form class="note-form" on:submit=on_submit>
                <textarea
                    class="note-input"
                    placeholder="Write your note"
                    prop:value=move || form.with(|f| f.draft().to_string())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        form.update(|f| f.set_content(text));
                    }
                />
                <button type="submit" class="primary-btn" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Add note" }}
                </button>
            </form>

            <NoticeDialog
                notice=Signal::derive(move || form.with(|f| f.notice().cloned()))
                on_close=move |_| form.update(|f| f.dismiss_notice())
            />
        </div>
    }
}
