//! Recipe Book App
//!
//! Root component: header, sidebar and the active page, plus the auth modal.

use leptos::prelude::*;
use recipe_book_core::{Page, RecipeController, Theme};

use crate::components::{
    AuthModal, FavoritesPage, Header, RecipeDetails, RecipeList, SearchBar, Sidebar, ThemeToggle,
};
use crate::context::AppContext;
use crate::storage::BrowserStorage;

/// Write the theme to the root element's `data-theme` attribute
fn apply_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        if let Err(e) = root.set_attribute("data-theme", theme.as_str()) {
            log::warn!("[APP] failed to set theme: {:?}", e);
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(RecipeController::with_defaults(BrowserStorage));
    provide_context(ctx);

    Effect::new(move |_| {
        let theme = ctx.with(|c| c.view().theme);
        log::debug!("[APP] theme -> {}", theme.as_str());
        apply_theme(theme);
    });

    let page = Memo::new(move |_| ctx.with(|c| c.view().page.clone()));

    view! {
        <div class="app">
            <Header />
            <ThemeToggle />
            <div class="main-layout">
                <Sidebar />
                <main class="main-content">
                    {move || match page.get() {
                        Page::Browse => view! {
                            <SearchBar />
                            <RecipeList />
                        }.into_any(),
                        Page::Favorites => view! { <FavoritesPage /> }.into_any(),
                        Page::Details(_) => view! { <RecipeDetails /> }.into_any(),
                    }}
                </main>
            </div>
            <AuthModal />
        </div>
    }
}
