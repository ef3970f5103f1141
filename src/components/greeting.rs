//! Greeting header shown on the note screens.

use leptos::prelude::*;

#[component]
pub fn Greeting(#[prop(into)] user_name: String) -> impl IntoView {
    let initial = user_name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();

    view! {
        <div class="greeting-header">
            <div class="avatar">{initial}</div>
            <h2 class="greeting">"Hi " {user_name}</h2>
            <p class="sub-greeting">"Have a great day ahead!"</p>
        </div>
    }
}
