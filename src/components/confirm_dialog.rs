//! Confirm Dialog Component
//!
//! Modal yes/no confirmation used before destructive actions.

use leptos::prelude::*;

/// Modal confirmation with OK/Cancel
///
/// # Arguments
/// * `open` - Whether the dialog is shown
/// * `message` - Question shown to the user
/// * `on_confirm` - Runs when the user presses OK
/// * `on_cancel` - Runs when the user presses Cancel
#[component]
pub fn ConfirmDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] message: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop">
                <div class="modal-view">
                    <p class="modal-text">{message.clone()}</p>
                    <div class="modal-buttons">
                        <button
                            class="modal-btn cancel"
                            on:click=move |_| on_cancel.run(())
                        >
                            "Cancel"
                        </button>
                        <button
                            class="modal-btn ok"
                            on:click=move |_| on_confirm.run(())
                        >
                            "OK"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
