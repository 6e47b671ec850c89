//! Recipe Book Core
//!
//! Framework-free application state for the Recipe Book front end:
//! the built-in catalog, the filter pipeline, favorites and the simulated
//! session, mirrored into a key-value store.

mod catalog;
mod config;
mod controller;
mod error;
mod filter;
mod models;
mod persist;
mod store;


pub use catalog::Catalog;
pub use config::{ControllerConfig, StorageKeys};
pub use controller::{FavoriteOutcome, RecipeController};
pub use error::{AuthError, CatalogError, StorageError, StorageResult, ViewError};
pub use filter::{categories, compute_visible_items};
pub use models::{CategoryFilter, FavoriteSet, Modal, Page, Recipe, RecipeId, Theme, User, ViewState};
pub use store::{KeyValueStore, MemoryStore};
