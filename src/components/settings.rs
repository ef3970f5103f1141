//! Settings Screen
//!
//! Edits the backend address. Applies to screens opened afterwards and is
//! saved to local storage for the next start.

use leptos::prelude::*;
use rest_collection::normalize_base_url;

use crate::app::Route;
use crate::config::ConfigError;
use crate::context::use_app_context;
use crate::error::Notice;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Settings() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (url, set_url) = signal(store.config().get_untracked().api_base_url);

    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let normalized = match normalize_base_url(&url.get_untracked()) {
            Ok(normalized) => normalized,
            Err(e) => {
                log::warn!("[config] rejected API URL: {}", e);
                ctx.notify(Notice::error(format!("Invalid server address: {}", e)));
                return;
            }
        };

        let mut config = store.config().get_untracked();
        config.api_base_url = normalized.clone();
        store.config().set(config.clone());
        set_url.set(normalized);

        match config.save() {
            Ok(()) => ctx.notify(Notice::success("Settings saved.")),
            Err(ConfigError::StorageUnavailable) => {
                log::warn!("[config] storage unavailable, settings kept for this session");
                ctx.notify(Notice::info("Settings apply until the app is closed."));
            }
            Err(e) => {
                log::error!("[config] save failed: {}", e);
                ctx.notify(Notice::error("Failed to save settings."));
            }
        }
    };

    view! {
        <div class="screen settings-screen">
            <div class="screen-header">
                <button class="back-btn" on:click=move |_| ctx.navigate(Route::Welcome)>
                    "‹"
                </button>
                <h2 class="screen-title">"Settings"</h2>
            </div>
            <form class="settings-form" on:submit=on_save>
                <label for="api-url">"Server address"</label>
                <input
                    id="api-url"
                    type="url"
                    class="url-input"
                    prop:value=move || url.get()
                    on:input=move |ev| set_url.set(event_target_value(&ev))
                />
                <button type="submit" class="primary-btn">"Save"</button>
            </form>
        </div>
    }
}
