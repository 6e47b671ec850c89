//! Recipe Details Component
//!
//! Full recipe view, or a "not found" fallback for unknown ids.

use leptos::prelude::*;
use recipe_book_core::Page;

use crate::components::FavoriteButton;
use crate::context::use_app_context;

#[component]
pub fn RecipeDetails() -> impl IntoView {
    let ctx = use_app_context();
    let recipe = Memo::new(move |_| ctx.with(|c| c.detail_recipe().cloned()));
    let back = move |_: web_sys::MouseEvent| ctx.navigate(Page::Browse);

    move || match recipe.get() {
        None => view! {
            <div class="recipe-details">
                <button class="btn" on:click=back>"← Back"</button>
                <div>"Recipe not found."</div>
            </div>
        }.into_any(),
        Some(recipe) => view! {
            <div class="recipe-details">
                <button class="btn" on:click=back>"← Back to list"</button>
                <div class="recipe-details-card">
                    <img class="recipe-details-image" src=recipe.image alt=recipe.name.clone() />
                    <div class="recipe-details-header">
                        <h1>{recipe.name}</h1>
                        <FavoriteButton recipe_id=recipe.id large=true />
                    </div>
                    <div class="recipe-details-category">{recipe.category}</div>
                    <div>
                        <strong>"Ingredients:"</strong>
                        <ul class="ingredient-list">
                            {recipe.ingredients.into_iter().map(|ingredient| view! {
                                <li>{ingredient}</li>
                            }).collect_view()}
                        </ul>
                    </div>
                    <div class="recipe-details-instructions">
                        <strong>"Instructions:"</strong>
                        <p>{recipe.instructions}</p>
                    </div>
                </div>
            </div>
        }.into_any(),
    }
}
