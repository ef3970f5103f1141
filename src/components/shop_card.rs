//! Shop Card Component

use leptos::prelude::*;

use crate::models::Shop;

#[component]
pub fn ShopCard(shop: Shop, #[prop(into)] on_select: Callback<Shop>) -> impl IntoView {
    let status_icon = if shop.is_available { "✔" } else { "🔒" };
    let selected = shop.clone();

    view! {
        <li
            class="shop-card"
            class:closed=!shop.is_available
            on:click=move |_| on_select.run(selected.clone())
        >
            <img class="shop-image" src=shop.image alt=shop.name.clone() />
            <div class="shop-info">
                <div class="shop-meta">
                    <span class="shop-status">{status_icon} " " {shop.status}</span>
                    <span class="shop-delivery">{shop.delivery_time}</span>
                </div>
                <h3 class="shop-name">{shop.name}</h3>
                <p class="shop-address">{shop.address}</p>
            </div>
        </li>
    }
}
