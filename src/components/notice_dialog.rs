//! Notice Dialog Component
//!
//! Shows a `Notice`. Errors and info stay until closed; success notices
//! close themselves after a short delay.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::error::{Notice, NoticeKind};

const AUTO_DISMISS_MS: u32 = 1800;

/// Counts notice changes so a pending timer can tell it is stale.
///
/// Every change bumps the count, even when the new notice equals the old
/// one, so a timer only closes the notice it was started for.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Generation(u64);

impl Generation {
    /// Start a new generation and return it
    fn advance(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(1);
        self.0
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.0 == ticket
    }
}

#[component]
pub fn NoticeDialog(
    #[prop(into)] notice: Signal<Option<Notice>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let generation = StoredValue::new(Generation::default());

    Effect::new(move |_| {
        let shown = notice.get();
        let Some(ticket) = generation.try_update_value(|g| g.advance()) else {
            return;
        };
        let Some(shown) = shown else { return };
        if shown.is_blocking() {
            return;
        }
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            // A newer notice restarted the countdown, or the screen is gone
            if generation.try_with_value(|g| g.is_current(ticket)) == Some(true) {
                on_close.run(());
            }
        });
    });

    view! {
        {move || notice.get().map(|n| {
            let class = match n.kind {
                NoticeKind::Success => "modal-view notice success",
                NoticeKind::Info => "modal-view notice info",
                NoticeKind::Error => "modal-view notice error",
            };
            view! {
                <div class="modal-backdrop">
                    <div class=class role="alertdialog">
                        <p class="modal-text">{n.message}</p>
                        <button class="modal-btn ok" on:click=move |_| on_close.run(())>
                            "Close"
                        </button>
                    </div>
                </div>
            }
        })}
    }
}
