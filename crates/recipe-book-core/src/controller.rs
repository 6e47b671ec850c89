//! Recipe Controller
//!
//! Single owner of the session, favorites and view state. Every change to
//! the user or favorites is written through to the key-value store; view
//! state stays in memory.

use crate::catalog::Catalog;
use crate::config::ControllerConfig;
use crate::error::{AuthError, ViewError};
use crate::filter;
use crate::models::{CategoryFilter, FavoriteSet, Modal, Page, Recipe, Theme, User, ViewState};
use crate::persist;
use crate::store::KeyValueStore;

/// Result of `toggle_favorite`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteOutcome {
    Added,
    AlreadyFavorite,
    /// No user signed in; the caller should prompt for login
    AuthRequired,
    UnknownRecipe,
}

/// Application state controller
#[derive(Debug)]
pub struct RecipeController<S: KeyValueStore> {
    store: S,
    config: ControllerConfig,
    catalog: Catalog,
    user: Option<User>,
    favorites: FavoriteSet,
    view: ViewState,
}

impl<S: KeyValueStore> RecipeController<S> {
    /// Restore user and favorites from the store
    pub fn new(store: S, catalog: Catalog, config: ControllerConfig) -> Self {
        let user = persist::load_user(&store, &config.keys.user);
        let mut favorites = persist::load_favorites(&store, &config.keys.favorites);

        let stored = favorites.len();
        favorites.retain(|id| catalog.contains(id));
        if favorites.len() != stored {
            log::warn!("[CTRL] dropped {} stored favorites not in catalog", stored - favorites.len());
        }

        log::debug!(
            "[CTRL] restored user={:?}, {} favorites",
            user.as_ref().map(|u| u.username.as_str()),
            favorites.len()
        );

        let view = ViewState {
            theme: config.theme,
            ..ViewState::default()
        };

        Self { store, config, catalog, user, favorites, view }
    }

    /// Built-in catalog with default keys
    pub fn with_defaults(store: S) -> Self {
        Self::new(store, Catalog::builtin(), ControllerConfig::default())
    }

    // ========================
    // Accessors
    // ========================

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    // ========================
    // Session
    // ========================

    /// Simulated login: any non-empty pair is accepted
    pub fn login(&mut self, username: &str, password: &str) -> Result<User, AuthError> {
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        let user = User::new(username);
        if let Err(e) = persist::save_user(&self.store, &self.config.keys.user, &user) {
            log::warn!("[CTRL] failed to persist user: {}", e);
        }
        log::info!("[CTRL] logged in as {}", user.username);
        self.user = Some(user.clone());
        Ok(user)
    }

    /// Same effect as `login`; there is no account store
    pub fn register(&mut self, username: &str, password: &str) -> Result<User, AuthError> {
        self.login(username, password)
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            log::info!("[CTRL] logged out {}", user.username);
        }
        if let Err(e) = persist::clear_user(&self.store, &self.config.keys.user) {
            log::warn!("[CTRL] failed to clear user: {}", e);
        }
    }

    // ========================
    // Favorites
    // ========================

    /// Add a recipe to favorites. Requires a signed-in user; never removes.
    pub fn toggle_favorite(&mut self, id: &str) -> FavoriteOutcome {
        if self.user.is_none() {
            return FavoriteOutcome::AuthRequired;
        }
        if !self.catalog.contains(id) {
            log::warn!("[CTRL] cannot favorite unknown recipe {}", id);
            return FavoriteOutcome::UnknownRecipe;
        }
        if !self.favorites.insert(id) {
            return FavoriteOutcome::AlreadyFavorite;
        }
        self.persist_favorites();
        FavoriteOutcome::Added
    }

    /// Remove a recipe from favorites; no sign-in needed.
    /// Returns whether anything was removed.
    pub fn remove_favorite(&mut self, id: &str) -> bool {
        let removed = self.favorites.remove(id);
        self.persist_favorites();
        removed
    }

    fn persist_favorites(&self) {
        if let Err(e) = persist::save_favorites(&self.store, &self.config.keys.favorites, &self.favorites) {
            log::warn!("[CTRL] failed to persist favorites: {}", e);
        }
    }

    // ========================
    // View state
    // ========================

    pub fn set_category_filter(&mut self, filter: CategoryFilter) -> Result<(), ViewError> {
        if let CategoryFilter::Category(name) = &filter {
            if !self.catalog.has_category(name) {
                return Err(ViewError::UnknownCategory(name.clone()));
            }
        }
        log::debug!("[CTRL] category -> {}", filter);
        self.view.category = filter;
        Ok(())
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.view.search = text.into();
    }

    pub fn navigate(&mut self, page: Page) {
        log::debug!("[CTRL] page -> {:?}", page);
        self.view.page = page;
    }

    pub fn show_details(&mut self, id: impl Into<String>) {
        self.navigate(Page::Details(id.into()));
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.view.theme = self.view.theme.toggled();
        self.view.theme
    }

    pub fn open_modal(&mut self, modal: Modal) {
        self.view.modal = modal;
    }

    pub fn close_modal(&mut self) {
        self.view.modal = Modal::None;
    }

    // ========================
    // Derived views
    // ========================

    /// Browse list for the current filter and search text
    pub fn visible_recipes(&self) -> Vec<&Recipe> {
        filter::compute_visible_items(&self.catalog, &self.view.category, &self.view.search)
    }

    /// Favorited recipes in catalog order
    pub fn favorite_recipes(&self) -> Vec<&Recipe> {
        self.catalog
            .recipes()
            .iter()
            .filter(|r| self.favorites.contains(&r.id))
            .collect()
    }

    /// Recipe shown on the details page; `None` off that page or for unknown ids
    pub fn detail_recipe(&self) -> Option<&Recipe> {
        match &self.view.page {
            Page::Details(id) => self.catalog.find(id),
            _ => None,
        }
    }

    pub fn categories(&self) -> Vec<CategoryFilter> {
        filter::categories(&self.catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn controller() -> RecipeController<MemoryStore> {
        RecipeController::with_defaults(MemoryStore::new())
    }

    #[test]
    fn test_initial_state() {
        let ctrl = controller();
        assert!(ctrl.user().is_none());
        assert!(ctrl.favorites().is_empty());
        assert_eq!(ctrl.view().page, Page::Browse);
        assert_eq!(ctrl.view().category, CategoryFilter::All);
        assert_eq!(ctrl.view().modal, Modal::None);
        assert_eq!(ctrl.view().theme, Theme::Light);
    }

    #[test]
    fn test_login_requires_both_fields() {
        let mut ctrl = controller();
        assert_eq!(ctrl.login("", "pw"), Err(AuthError::MissingCredentials));
        assert_eq!(ctrl.login("alice", ""), Err(AuthError::MissingCredentials));
        assert!(ctrl.user().is_none());

        let user = ctrl.login("alice", "pw").unwrap();
        assert_eq!(user.username, "alice");
        assert!(ctrl.is_logged_in());
    }

    #[test]
    fn test_register_logs_in() {
        let store = MemoryStore::new();
        let mut ctrl = RecipeController::with_defaults(store.clone());
        ctrl.register("bob", "secret").unwrap();
        assert_eq!(ctrl.user(), Some(&User::new("bob")));
        assert_eq!(store.get("user").unwrap().as_deref(), Some(r#"{"username":"bob"}"#));
    }

    #[test]
    fn test_remove_favorite_without_login() {
        let store = MemoryStore::new();
        let mut ctrl = RecipeController::with_defaults(store.clone());
        ctrl.login("a", "b").unwrap();
        ctrl.toggle_favorite("1");
        ctrl.logout();

        assert!(ctrl.remove_favorite("1"));
        assert!(!ctrl.remove_favorite("1"));
        assert!(!ctrl.is_favorite("1"));
        assert_eq!(store.get("favorites").unwrap().as_deref(), Some("[]"));

        let restarted = RecipeController::with_defaults(store);
        assert!(restarted.favorites().is_empty());
    }

    #[test]
    fn test_unknown_recipe_not_favorited() {
        let mut ctrl = controller();
        ctrl.login("a", "b").unwrap();
        assert_eq!(ctrl.toggle_favorite("99"), FavoriteOutcome::UnknownRecipe);
        assert!(ctrl.favorites().is_empty());
    }

    #[test]
    fn test_unknown_category_rejected() {
        let mut ctrl = controller();
        ctrl.set_category_filter(CategoryFilter::from_label("Bowl")).unwrap();
        let err = ctrl.set_category_filter(CategoryFilter::from_label("Soup"));
        assert_eq!(err, Err(ViewError::UnknownCategory("Soup".to_string())));
        assert_eq!(ctrl.view().category, CategoryFilter::from_label("Bowl"));
    }

    #[test]
    fn test_page_transitions() {
        let mut ctrl = controller();
        ctrl.show_details("2");
        assert_eq!(ctrl.detail_recipe().map(|r| r.name.as_str()), Some("Vegan Buddha Bowl"));

        ctrl.navigate(Page::Browse);
        assert!(ctrl.detail_recipe().is_none());

        ctrl.navigate(Page::Favorites);
        ctrl.show_details("42");
        assert_eq!(ctrl.view().page, Page::Details("42".to_string()));
        assert!(ctrl.detail_recipe().is_none());
    }

    #[test]
    fn test_favorite_recipes_in_catalog_order() {
        let mut ctrl = controller();
        ctrl.login("a", "b").unwrap();
        ctrl.toggle_favorite("3");
        ctrl.toggle_favorite("1");
        let names: Vec<&str> = ctrl.favorite_recipes().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(names, vec!["1", "3"]);
    }

    #[test]
    fn test_theme_and_modal() {
        let mut ctrl = controller();
        assert_eq!(ctrl.toggle_theme(), Theme::Dark);
        assert_eq!(ctrl.toggle_theme(), Theme::Light);

        ctrl.open_modal(Modal::Login);
        ctrl.open_modal(Modal::Register);
        assert_eq!(ctrl.view().modal, Modal::Register);
        ctrl.close_modal();
        assert_eq!(ctrl.view().modal, Modal::None);
    }

    #[test]
    fn test_stale_favorites_dropped_on_startup() {
        let store = MemoryStore::new();
        store.set("favorites", r#"["2","99","3"]"#).unwrap();
        let ctrl = RecipeController::with_defaults(store);
        assert_eq!(ctrl.favorites().iter().collect::<Vec<_>>(), vec!["2", "3"]);
    }

    #[test]
    fn test_duplicate_stored_favorites_collapsed() {
        let store = MemoryStore::new();
        store.set("favorites", r#"["2","2","3"]"#).unwrap();
        let mut ctrl = RecipeController::with_defaults(store.clone());
        assert_eq!(ctrl.favorites().len(), 2);

        ctrl.remove_favorite("3");
        assert_eq!(store.get("favorites").unwrap().as_deref(), Some(r#"["2"]"#));
    }

    #[test]
    fn test_configured_keys_and_theme() {
        let store = MemoryStore::new();
        let config = ControllerConfig {
            keys: crate::config::StorageKeys {
                user: "rb.user".to_string(),
                favorites: "rb.favorites".to_string(),
            },
            theme: Theme::Dark,
        };
        let mut ctrl = RecipeController::new(store.clone(), Catalog::builtin(), config);
        assert_eq!(ctrl.view().theme, Theme::Dark);

        ctrl.login("a", "b").unwrap();
        assert!(store.get("rb.user").unwrap().is_some());
        assert!(store.get("user").unwrap().is_none());
    }
}
