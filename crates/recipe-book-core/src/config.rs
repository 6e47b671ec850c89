//! Controller Configuration

use crate::models::Theme;

/// Keys the session and favorites are stored under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub user: String,
    pub favorites: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            user: "user".to_string(),
            favorites: "favorites".to_string(),
        }
    }
}

/// Startup settings for `RecipeController`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControllerConfig {
    pub keys: StorageKeys,
    /// Theme applied before the user toggles it
    pub theme: Theme,
}
