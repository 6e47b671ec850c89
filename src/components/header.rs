//! Header Component
//!
//! Brand, page navigation and the session controls.

use leptos::prelude::*;
use recipe_book_core::{Modal, Page};

use crate::context::use_app_context;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();

    let username = move || ctx.with(|c| c.user().map(|u| u.username.clone()));
    let nav_class = move |target: Page| {
        move || {
            if ctx.with(|c| c.view().page == target) {
                "nav-btn active"
            } else {
                "nav-btn"
            }
        }
    };

    view! {
        <header class="navbar">
            <div class="brand">
                <span class="brand-recipe">"Recipe"</span>
                <span class="brand-book">"Book"</span>
            </div>
            <nav class="nav-links">
                <button class=nav_class(Page::Browse) on:click=move |_| ctx.navigate(Page::Browse)>
                    "Browse"
                </button>
                <button class=nav_class(Page::Favorites) on:click=move |_| ctx.navigate(Page::Favorites)>
                    "Favorites"
                </button>
            </nav>
            <div class="session">
                {move || match username() {
                    Some(name) => view! {
                        <span class="session-user">
                            {name}
                            <button class="btn-logout" on:click=move |_| ctx.logout()>
                                "Log out"
                            </button>
                        </span>
                    }.into_any(),
                    None => view! {
                        <button class="btn" on:click=move |_| ctx.open_modal(Modal::Login)>
                            "Log in"
                        </button>
                    }.into_any(),
                }}
            </div>
        </header>
    }
}
