//! Drinks screen reached from an open shop.

use leptos::prelude::*;

use crate::app::Route;
use crate::context::use_app_context;

#[component]
pub fn Drinks() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="screen drinks-screen">
            <div class="screen-header">
                <button class="back-btn" on:click=move |_| ctx.navigate(Route::ShopsNearMe)>
                    "‹"
                </button>
                <h2 class="screen-title">"Drinks"</h2>
            </div>
            <p class="placeholder">"Menu coming soon."</p>
        </div>
    }
}
