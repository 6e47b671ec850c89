//! Filter Pipeline
//!
//! Category filter followed by a case-insensitive search over names and
//! ingredients. Recomputed on every read; catalog order is kept.

use crate::catalog::Catalog;
use crate::models::{CategoryFilter, Recipe};

/// Recipes visible for a category filter and search text
pub fn compute_visible_items<'a>(
    catalog: &'a Catalog,
    filter: &CategoryFilter,
    search: &str,
) -> Vec<&'a Recipe> {
    let query = search.trim();
    catalog
        .recipes()
        .iter()
        .filter(|r| filter.accepts(&r.category))
        .filter(|r| query.is_empty() || matches_search(r, query))
        .collect()
}

/// True if the query occurs in the name or any ingredient, ignoring case
fn matches_search(recipe: &Recipe, query: &str) -> bool {
    let query = query.to_lowercase();
    recipe.name.to_lowercase().contains(&query)
        || recipe
            .ingredients
            .iter()
            .any(|ing| ing.to_lowercase().contains(&query))
}

/// Sidebar entries: "All" then each catalog category
pub fn categories(catalog: &Catalog) -> Vec<CategoryFilter> {
    std::iter::once(CategoryFilter::All)
        .chain(
            catalog
                .category_names()
                .into_iter()
                .map(|name| CategoryFilter::Category(name.to_string())),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(recipes: &[&Recipe]) -> Vec<String> {
        recipes.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_all_no_search_returns_catalog() {
        let catalog = Catalog::builtin();
        let visible = compute_visible_items(&catalog, &CategoryFilter::All, "");
        assert_eq!(ids(&visible), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_whitespace_search_is_ignored() {
        let catalog = Catalog::builtin();
        let visible = compute_visible_items(&catalog, &CategoryFilter::All, "   ");
        assert_eq!(visible.len(), 3);
    }

    #[test]
    fn test_search_is_trimmed_and_case_insensitive() {
        let catalog = Catalog::builtin();
        let visible = compute_visible_items(&catalog, &CategoryFilter::All, "  CARBONARA ");
        assert_eq!(ids(&visible), vec!["3"]);
    }

    #[test]
    fn test_category_and_search_combine() {
        let catalog = Catalog::builtin();
        let pizza = CategoryFilter::from_label("Pizza");
        assert_eq!(ids(&compute_visible_items(&catalog, &pizza, "basil")), vec!["1"]);
        assert!(compute_visible_items(&catalog, &pizza, "bacon").is_empty());
    }

    #[test]
    fn test_matches_search_ignores_query_case() {
        let catalog = Catalog::builtin();
        let pizza = catalog.find("1").unwrap();
        assert!(matches_search(pizza, "BA"));
        assert!(matches_search(pizza, "Margherita"));
        assert!(!matches_search(pizza, "BACON"));
    }

    #[test]
    fn test_categories_start_with_all() {
        let labels: Vec<String> = categories(&Catalog::builtin())
            .iter()
            .map(|c| c.label().to_string())
            .collect();
        assert_eq!(labels, vec!["All", "Pizza", "Bowl", "Pasta"]);
    }
}
