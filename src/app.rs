//! Shop & Notes App
//!
//! Root component: one screen at a time, picked by `Route`.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AddNote, Drinks, NoteList, NoticeDialog, Settings, ShopsNearMe, Welcome};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::Notice;
use crate::models::Note;
use crate::store::AppState;

/// Screen selection plus the parameters handed across the transition
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Welcome,
    NoteList {
        user_name: String,
        /// Record just created on the add screen, merged without a reload
        new_note: Option<Note>,
    },
    AddNote {
        user_name: String,
    },
    ShopsNearMe,
    Drinks,
    Settings,
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Route::Welcome => "Welcome",
            Route::NoteList { .. } => "NoteList",
            Route::AddNote { .. } => "AddNote",
            Route::ShopsNearMe => "ShopsNearMe",
            Route::Drinks => "Drinks",
            Route::Settings => "Settings",
        }
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let (route, set_route) = signal(Route::Welcome);
    let (notice, set_notice) = signal::<Option<Notice>>(None);

    // Provide context to all children
    provide_context(Store::new(AppState::new(config)));
    let ctx = AppContext::new((route, set_route), (notice, set_notice));
    provide_context(ctx);

    view! {
        <div class="mobile-app-container">
            {move || match ctx.route.get() {
                Route::Welcome => view! { <Welcome /> }.into_any(),
                Route::NoteList { user_name, new_note } => view! {
                    <NoteList user_name=user_name new_note=new_note />
                }.into_any(),
                Route::AddNote { user_name } => {
                    view! { <AddNote user_name=user_name /> }.into_any()
                }
                Route::ShopsNearMe => view! { <ShopsNearMe /> }.into_any(),
                Route::Drinks => view! { <Drinks /> }.into_any(),
                Route::Settings => view! { <Settings /> }.into_any(),
            }}

            <NoticeDialog
                notice={Signal::<Option<Notice>>::from(ctx.notice)}
                on_close=move |_| ctx.dismiss_notice()
            />
        </div>
    }
}
