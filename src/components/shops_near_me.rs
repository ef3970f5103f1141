//! Shops Near Me Screen
//!
//! Read-only shop list with name search. Open shops lead to the drinks
//! screen; closed shops only raise a notice.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::Route;
use crate::commands::{load_collection, shops_client};
use crate::components::{NoticeDialog, SearchField, ShopCard};
use crate::context::use_app_context;
use crate::list_model::{Activation, ListModel, LoadStatus};
use crate::models::Shop;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ShopsNearMe() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let model = RwSignal::new(ListModel::<Shop>::new());
    let (searching, set_searching) = signal(false);
    let (status, set_status) = signal(LoadStatus::Loading);

    spawn_local(async move {
        let client = shops_client(&store.config().get_untracked());
        let loaded = load_collection(&client, &model).await;
        set_status.try_set(LoadStatus::from_result(&loaded));
    });

    let on_select = move |shop: Shop| {
        let activation = model.try_update(|m| m.activate(&shop));
        if activation == Some(Activation::Proceed) {
            log::debug!("[shops] opening {}", shop.id);
            ctx.navigate(Route::Drinks);
        }
    };

    let toggle_search = move |_| {
        // Hiding the field also clears the query
        if searching.get_untracked() {
            model.update(|m| m.set_filter_text(""));
        }
        set_searching.update(|s| *s = !*s);
    };

    view! {
        <div class="screen shops-screen">
            <div class="screen-header">
                <button class="back-btn" on:click=move |_| ctx.navigate(Route::Welcome)>
                    "‹"
                </button>
                <h2 class="screen-title">"Shops near me"</h2>
                <button class="icon-btn" title="Search" on:click=toggle_search>"🔍"</button>
            </div>

            <Show when=move || searching.get()>
                <SearchField
                    value=Signal::derive(move || model.with(|m| m.filter_text().to_string()))
                    on_input=move |text: String| model.update(|m| m.set_filter_text(text))
                />
            </Show>

            <ul class="shop-list">
                <For
                    each=move || model.with(|m| m.visible())
                    key=|shop| shop.id.clone()
                    children=move |shop| view! { <ShopCard shop=shop on_select=on_select /> }
                />
            </ul>
            <Show when=move || model.with(|m| m.visible().is_empty())>
                <p class="empty-list">
                    {move || {
                        let filtering = model.with(|m| !m.filter_text().is_empty());
                        status.get().empty_text("shops", filtering)
                    }}
                </p>
            </Show>

            <NoticeDialog
                notice=Signal::derive(move || model.with(|m| m.notice().cloned()))
                on_close=move |_| model.update(|m| m.dismiss_notice())
            />
        </div>
    }
}
