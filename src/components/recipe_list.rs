//! Recipe List Component
//!
//! Card grid for the browse page, filtered by category and search text.

use leptos::prelude::*;
use recipe_book_core::Recipe;

use crate::components::FavoriteButton;
use crate::context::use_app_context;

/// A single recipe card
#[component]
fn RecipeCard(recipe: Recipe) -> impl IntoView {
    let ctx = use_app_context();
    let id = StoredValue::new(recipe.id.clone());
    let open = move |_: web_sys::MouseEvent| id.with_value(|id| ctx.show_details(id));

    view! {
        <div class="recipe-card">
            <img src=recipe.image alt=recipe.name.clone() loading="lazy" on:click=open />
            <div class="recipe-card-body">
                <h2 class="recipe-card-title" on:click=open>{recipe.name}</h2>
                <div class="recipe-card-description">{recipe.description}</div>
                <div class="spacer"></div>
                <div class="recipe-card-footer">
                    <span class="category-badge">{recipe.category}</span>
                    <FavoriteButton recipe_id=recipe.id />
                </div>
            </div>
        </div>
    }
}

/// Browse grid
#[component]
pub fn RecipeList() -> impl IntoView {
    let ctx = use_app_context();
    let recipes = Memo::new(move |_| {
        ctx.with(|c| c.visible_recipes().into_iter().cloned().collect::<Vec<Recipe>>())
    });

    view! {
        <Show
            when=move || !recipes.with(|r| r.is_empty())
            fallback=|| view! { <div class="empty-message">"No recipes found."</div> }
        >
            <div class="recipe-list">
                <For
                    each=move || recipes.get()
                    key=|recipe| recipe.id.clone()
                    children=move |recipe| view! { <RecipeCard recipe=recipe /> }
                />
            </div>
        </Show>
    }
}
