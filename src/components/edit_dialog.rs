//! Edit Dialog Component
//!
//! Modal single-field editor.

use leptos::prelude::*;

#[component]
pub fn EditDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] draft: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop">
                <form
                    class="modal-view"
                    on:submit=move |ev: web_sys::SubmitEvent| {
                        ev.prevent_default();
                        on_confirm.run(());
                    }
                >
                    <p class="modal-text">{title.clone()}</p>
                    <input
                        type="text"
                        class="edit-input"
                        prop:value=move || draft.get()
                        on:input=move |ev| on_input.run(event_target_value(&ev))
                    />
                    <div class="modal-buttons">
                        <button
                            type="button"
                            class="modal-btn cancel"
                            on:click=move |_| on_cancel.run(())
                        >
                            "Cancel"
                        </button>
                        <button type="submit" class="modal-btn ok">"OK"</button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
