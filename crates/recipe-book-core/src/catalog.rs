//! Recipe Catalog
//!
//! Read-only recipe list supplied at startup.

use std::collections::HashSet;

use crate::error::CatalogError;
use crate::models::Recipe;

/// Immutable, ordered recipe list with unique ids
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn new(recipes: Vec<Recipe>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for recipe in &recipes {
            if !seen.insert(recipe.id.as_str()) {
                return Err(CatalogError::DuplicateId(recipe.id.clone()));
            }
        }
        Ok(Self { recipes })
    }

    /// The recipes shipped with the app
    pub fn builtin() -> Self {
        Self {
            recipes: vec![
                recipe(
                    "1",
                    "Classic Margherita Pizza",
                    "Pizza",
                    "https://images.unsplash.com/photo-1504674900247-0877df9cc836?w=600&q=80",
                    &["flour", "tomatoes", "mozzarella", "basil", "olive oil"],
                    "1. Preheat oven to 475°F (245°C). 2. Spread pizza dough. 3. Apply tomato sauce, mozzarella, and basil. 4. Bake 10-12 min. 5. Drizzle with olive oil, serve.",
                    "A simple yet delicious pizza with fresh mozzarella and basil.",
                ),
                recipe(
                    "2",
                    "Vegan Buddha Bowl",
                    "Bowl",
                    "https://images.unsplash.com/photo-1512058564366-c9e3e0466c54?w=600&q=80",
                    &["quinoa", "chickpeas", "avocado", "spinach", "carrots", "sesame seeds"],
                    "1. Cook quinoa. 2. Roast chickpeas. 3. Assemble bowl: quinoa, veggies, avocado, chickpeas. 4. Top with sesame seeds.",
                    "A wholesome, plant-based bowl for a nutritious meal.",
                ),
                recipe(
                    "3",
                    "Spaghetti Carbonara",
                    "Pasta",
                    "https://images.unsplash.com/photo-1523987355523-c7b5b0723c6e?w=600&q=80",
                    &["spaghetti", "eggs", "bacon", "parmesan", "black pepper"],
                    "1. Boil spaghetti. 2. Cook bacon. 3. Mix eggs and cheese. 4. Combine all with hot pasta, toss quickly.",
                    "An Italian classic with creamy sauce and crispy bacon.",
                ),
            ],
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn find(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Distinct categories in first-appearance order
    pub fn category_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for recipe in &self.recipes {
            if !names.contains(&recipe.category.as_str()) {
                names.push(&recipe.category);
            }
        }
        names
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.recipes.iter().any(|r| r.category == category)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

fn recipe(
    id: &str,
    name: &str,
    category: &str,
    image: &str,
    ingredients: &[&str],
    instructions: &str,
    description: &str,
) -> Recipe {
    Recipe {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        image: image.to_string(),
        ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
        instructions: instructions.to_string(),
        description: description.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_ids_unique() {
        let builtin = Catalog::builtin();
        let rebuilt = Catalog::new(builtin.recipes().to_vec()).expect("builtin ids are unique");
        assert_eq!(rebuilt.len(), 3);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut recipes = Catalog::builtin().recipes().to_vec();
        recipes[2].id = "1".to_string();
        assert_eq!(Catalog::new(recipes), Err(CatalogError::DuplicateId("1".to_string())));
    }

    #[test]
    fn test_category_names_in_order() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.category_names(), vec!["Pizza", "Bowl", "Pasta"]);
        assert!(catalog.has_category("Bowl"));
        assert!(!catalog.has_category("Soup"));
    }

    #[test]
    fn test_find() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.find("3").map(|r| r.name.as_str()), Some("Spaghetti Carbonara"));
        assert!(catalog.find("42").is_none());
    }
}
