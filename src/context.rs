//! Application Context
//!
//! Navigation and app-wide notices, provided via Leptos Context API.

use leptos::prelude::*;

use crate::app::Route;
use crate::error::Notice;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Screen currently shown - read
    pub route: ReadSignal<Route>,
    /// Screen currently shown - write
    set_route: WriteSignal<Route>,
    /// Notice that outlives the screen that raised it - read
    pub notice: ReadSignal<Option<Notice>>,
    /// Notice that outlives the screen that raised it - write
    set_notice: WriteSignal<Option<Notice>>,
}

impl AppContext {
    pub fn new(
        route: (ReadSignal<Route>, WriteSignal<Route>),
        notice: (ReadSignal<Option<Notice>>, WriteSignal<Option<Notice>>),
    ) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
            notice: notice.0,
            set_notice: notice.1,
        }
    }

    /// Switch screens; the old screen and its state are dropped
    pub fn navigate(&self, route: Route) {
        log::debug!("[nav] -> {}", route.name());
        self.set_route.set(route);
    }

    pub fn notify(&self, notice: Notice) {
        self.set_notice.set(Some(notice));
    }

    pub fn dismiss_notice(&self) {
        self.set_notice.set(None);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
