//! UI Components
//!
//! Leptos views over the recipe controller.

mod auth_modal;
mod favorite_button;
mod favorites_page;
mod header;
mod recipe_details;
mod recipe_list;
mod search_bar;
mod sidebar;
mod theme_toggle;

pub use auth_modal::AuthModal;
pub use favorite_button::FavoriteButton;
pub use favorites_page::FavoritesPage;
pub use header::Header;
pub use recipe_details::RecipeDetails;
pub use recipe_list::RecipeList;
pub use search_bar::SearchBar;
pub use sidebar::Sidebar;
pub use theme_toggle::ThemeToggle;
