//! Favorite Star Button

use leptos::prelude::*;

use crate::context::use_app_context;

fn star_label(is_favorite: bool, logged_in: bool) -> &'static str {
    if is_favorite {
        "Remove from favorites"
    } else if logged_in {
        "Add to favorites"
    } else {
        "Log in to favorite"
    }
}

/// ★ removes, ☆ favorites (or asks for login when signed out)
#[component]
pub fn FavoriteButton(
    #[prop(into)] recipe_id: String,
    #[prop(optional)] large: bool,
) -> impl IntoView {
    let ctx = use_app_context();
    let id = StoredValue::new(recipe_id);

    let is_favorite = move || id.with_value(|id| ctx.is_favorite(id));
    let label = move || star_label(is_favorite(), ctx.is_logged_in());

    view! {
        <button
            class=move || match (is_favorite(), large) {
                (true, true) => "btn-fav large active",
                (true, false) => "btn-fav active",
                (false, true) => "btn-fav large",
                (false, false) => "btn-fav",
            }
            aria-label=label
            title=label
            on:click=move |ev| {
                ev.stop_propagation();
                id.with_value(|id| ctx.toggle_star(id));
            }
        >
            {move || if is_favorite() { "★" } else { "☆" }}
        </button>
    }
}
