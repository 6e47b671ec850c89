//! Favorites Page

use leptos::prelude::*;
use recipe_book_core::Recipe;

use crate::context::use_app_context;

#[component]
fn FavoriteCard(recipe: Recipe) -> impl IntoView {
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
                <button
                    class="btn btn-remove"
                    aria-label="Remove from favorites"
                    on:click=move |_| id.with_value(|id| ctx.remove_favorite(id))
                >
                    "Remove ★"
                </button>
            </div>
        </div>
    }
}

/// Favorited recipes in catalog order
#[component]
pub fn FavoritesPage() -> impl IntoView {
    let ctx = use_app_context();
    let recipes = Memo::new(move |_| {
        ctx.with(|c| c.favorite_recipes().into_iter().cloned().collect::<Vec<Recipe>>())
    });

    view! {
        <div class="favorites-page">
            <h2 class="favorites-title">"Your Favorites"</h2>
            <Show
                when=move || !recipes.with(|r| r.is_empty())
                fallback=|| view! { <p class="empty-message">"You have no favorite recipes yet."</p> }
            >
                <div class="recipe-list">
                    <For
                        each=move || recipes.get()
                        key=|recipe| recipe.id.clone()
                        children=move |recipe| view! { <FavoriteCard recipe=recipe /> }
                    />
                </div>
            </Show>
        </div>
    }
}
