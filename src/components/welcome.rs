//! Welcome Screen
//!
//! Asks for a display name and links to the other screens.

use leptos::prelude::*;

use crate::app::Route;
use crate::context::use_app_context;
use crate::store::{display_name, use_app_store, AppStateStoreFields};

#[component]
pub fn Welcome() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (name, set_name) = signal(store.user_name().get_untracked());

    let open_notes = move |_| {
        let user_name = display_name(&name.get_untracked());
        store.user_name().set(user_name.clone());
        ctx.navigate(Route::NoteList {
            user_name,
            new_note: None,
        });
    };

    view! {
        <div class="screen welcome-screen">
            <h1 class="welcome-title">"Welcome"</h1>
            <input
                type="text"
                class="name-input"
                placeholder="Your name"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <div class="welcome-actions">
                <button class="primary-btn" on:click=open_notes>"My notes"</button>
                <button class="primary-btn" on:click=move |_| ctx.navigate(Route::ShopsNearMe)>
                    "Shops near me"
                </button>
                <button class="link-btn" on:click=move |_| ctx.navigate(Route::Settings)>
                    "Settings"
                </button>
            </div>
        </div>
    }
}
