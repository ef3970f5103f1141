//! Search Field Component

use leptos::prelude::*;

/// Search input; every keystroke is reported through `on_input`
#[component]
pub fn SearchField(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    let (focused, set_focused) = signal(false);

    view! {
        <div class="search-container" class:focused=move || focused.get()>
            <span class="search-icon">"🔍"</span>
            <input
                type="search"
                class="search-input"
                placeholder="Search"
                autocomplete="off"
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:focus=move |_| set_focused.set(true)
                on:blur=move |_| set_focused.set(false)
            />
        </div>
    }
}
