//! Models
//!
//! Recipes, the session user, favorites and the transient view state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Recipe identifier
pub type RecipeId = String;

/// A recipe from the built-in catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub category: String,
    /// Image URL
    pub image: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub description: String,
}

/// Signed-in user (simulated session)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
}

impl User {
    pub fn new(username: impl Into<String>) -> Self {
        Self { username: username.into() }
    }
}

/// Favorite recipe ids in the order they were added.
///
/// Serializes as a plain JSON array of ids; duplicates in stored arrays
/// are collapsed on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<RecipeId>", into = "Vec<RecipeId>")]
pub struct FavoriteSet(Vec<RecipeId>);

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|fav| fav == id)
    }

    /// Add an id; returns false if it was already present
    pub fn insert(&mut self, id: impl Into<RecipeId>) -> bool {
        let id = id.into();
        if self.contains(&id) {
            return false;
        }
        self.0.push(id);
        true
    }

    /// Remove an id; returns false if it was absent
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|fav| fav != id);
        self.0.len() != before
    }

    /// Drop every id the predicate rejects
    pub fn retain(&mut self, keep: impl FnMut(&RecipeId) -> bool) {
        self.0.retain(keep);
    }

    pub fn iter(&self) -> impl Iterator<Item = &RecipeId> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<RecipeId>> FromIterator<S> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = FavoriteSet::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

impl From<Vec<RecipeId>> for FavoriteSet {
    fn from(ids: Vec<RecipeId>) -> Self {
        ids.into_iter().collect()
    }
}

impl From<FavoriteSet> for Vec<RecipeId> {
    fn from(set: FavoriteSet) -> Self {
        set.0
    }
}

/// Sidebar category filter
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Category(name) => name,
        }
    }

    /// Parse a sidebar label; "All" maps to the unfiltered view
    pub fn from_label(label: &str) -> Self {
        match label {
            "All" => CategoryFilter::All,
            other => CategoryFilter::Category(other.to_string()),
        }
    }

    pub fn accepts(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(name) => name == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Active page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Browse,
    Favorites,
    /// Recipe details; the id may not resolve (rendered as "not found")
    Details(RecipeId),
}

/// Which auth modal is open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    None,
    Login,
    Register,
}

/// Color theme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value for the document `data-theme` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Label of the toggle button, naming the theme it switches to
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Light => "🌙 Dark",
            Theme::Dark => "☀️ Light",
        }
    }

    pub fn toggle_aria_label(&self) -> String {
        format!("Switch to {} mode", self.toggled().as_str())
    }
}

/// Transient UI state, never persisted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub category: CategoryFilter,
    pub search: String,
    pub page: Page,
    pub modal: Modal,
    pub theme: Theme,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favorite_set_no_duplicates() {
        let mut favs = FavoriteSet::new();
        assert!(favs.insert("1"));
        assert!(!favs.insert("1"));
        assert!(favs.insert("3"));
        assert_eq!(favs.iter().collect::<Vec<_>>(), vec!["1", "3"]);
    }

    #[test]
    fn test_favorite_set_json_is_plain_array() {
        let favs: FavoriteSet = ["2", "3"].into_iter().collect();
        assert_eq!(serde_json::to_string(&favs).unwrap(), r#"["2","3"]"#);

        let user = User::new("x");
        assert_eq!(serde_json::to_string(&user).unwrap(), r#"{"username":"x"}"#);
    }

    #[test]
    fn test_favorite_set_json_drops_duplicates() {
        let favs: FavoriteSet = serde_json::from_str(r#"["2","2","3","2"]"#).unwrap();
        assert_eq!(favs.len(), 2);
        assert_eq!(serde_json::to_string(&favs).unwrap(), r#"["2","3"]"#);
    }

    #[test]
    fn test_category_filter_labels() {
        assert_eq!(CategoryFilter::from_label("All"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_label("Pizza").label(), "Pizza");
        assert!(CategoryFilter::All.accepts("Bowl"));
        assert!(!CategoryFilter::from_label("Pizza").accepts("Bowl"));
    }

    #[test]
    fn test_theme_toggle_labels() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggle_label(), "🌙 Dark");
        assert_eq!(Theme::Dark.toggle_aria_label(), "Switch to light mode");
    }
}
