//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::AppConfig;

/// Session state shared by every screen
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Active backend configuration
    pub config: AppConfig,
    /// Last display name entered on the welcome screen
    pub user_name: String,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Name shown in greetings; blank input falls back to "User"
pub fn display_name(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        "User".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("  Hai "), "Hai");
        assert_eq!(display_name("   "), "User");
    }
}
