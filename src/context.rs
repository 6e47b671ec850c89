//! Application Context
//!
//! The recipe controller, held in a signal and provided via the Leptos
//! Context API. Components call these helpers instead of touching the
//! signal directly.

use leptos::prelude::*;
use recipe_book_core::{AuthError, CategoryFilter, FavoriteOutcome, Modal, Page, RecipeController};

use crate::storage::BrowserStorage;

pub type Controller = RecipeController<BrowserStorage>;

/// App-wide state handle
#[derive(Clone, Copy)]
pub struct AppContext {
    controller: RwSignal<Controller>,
}

impl AppContext {
    pub fn new(controller: Controller) -> Self {
        Self {
            controller: RwSignal::new(controller),
        }
    }

    /// Reactive read of the controller
    pub fn with<R>(&self, f: impl FnOnce(&Controller) -> R) -> R {
        self.controller.with(f)
    }

    /// Read without subscribing
    pub fn with_untracked<R>(&self, f: impl FnOnce(&Controller) -> R) -> R {
        self.controller.with_untracked(f)
    }

    fn update<R>(&self, f: impl FnOnce(&mut Controller) -> R) -> Option<R> {
        self.controller.try_update(f)
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.with(|c| c.is_favorite(id))
    }

    pub fn is_logged_in(&self) -> bool {
        self.with(|c| c.is_logged_in())
    }

    // ========================
    // Session
    // ========================

    /// Log in and close the modal on success
    pub fn login(&self, username: &str, password: &str) -> Result<(), AuthError> {
        settle(self.update(|c| {
            c.login(username, password)?;
            c.close_modal();
            Ok(())
        }))
    }

    /// Register and close the modal on success
    pub fn register(&self, username: &str, password: &str) -> Result<(), AuthError> {
        settle(self.update(|c| {
            c.register(username, password)?;
            c.close_modal();
            Ok(())
        }))
    }

    pub fn logout(&self) {
        self.update(|c| c.logout());
    }

    // ========================
    // Favorites
    // ========================

    /// Favorite a recipe; opens the login modal when signed out
    pub fn favorite(&self, id: &str) {
        self.update(|c| {
            if c.toggle_favorite(id) == FavoriteOutcome::AuthRequired {
                c.open_modal(Modal::Login);
            }
        });
    }

    pub fn remove_favorite(&self, id: &str) {
        self.update(|c| c.remove_favorite(id));
    }

    /// Star button: remove if favorited, otherwise favorite
    pub fn toggle_star(&self, id: &str) {
        if self.with_untracked(|c| c.is_favorite(id)) {
            self.remove_favorite(id);
        } else {
            self.favorite(id);
        }
    }

    // ========================
    // View state
    // ========================

    /// Sidebar click: apply the filter and go back to browsing
    pub fn select_category(&self, filter: CategoryFilter) {
        self.update(|c| {
            if let Err(e) = c.set_category_filter(filter) {
                log::warn!("[APP] {}", e);
            }
            c.navigate(Page::Browse);
        });
    }

    pub fn set_search_text(&self, text: String) {
        self.update(|c| c.set_search_text(text));
    }

    pub fn navigate(&self, page: Page) {
        self.update(|c| c.navigate(page));
    }

    pub fn show_details(&self, id: &str) {
        self.update(|c| c.show_details(id));
    }

    pub fn toggle_theme(&self) {
        self.update(|c| c.toggle_theme());
    }

    pub fn open_modal(&self, modal: Modal) {
        self.update(|c| c.open_modal(modal));
    }

    pub fn close_modal(&self) {
        self.update(|c| c.close_modal());
    }
}

/// Auth result of a controller update; a disposed signal counts as failure
fn settle(outcome: Option<Result<(), AuthError>>) -> Result<(), AuthError> {
    outcome.unwrap_or_else(|| {
        log::warn!("[APP] session update skipped: controller disposed");
        Err(AuthError::Unavailable)
    })
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
