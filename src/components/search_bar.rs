use leptos::prelude::*;

use crate::context::use_app_context;

/// Search input bound to the controller's search text
#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="search-bar">
            <input
                type="search"
                aria-label="Search recipes"
                placeholder="Search recipes or ingredients..."
                prop:value=move || ctx.with(|c| c.view().search.clone())
                on:input=move |ev| ctx.set_search_text(event_target_value(&ev))
            />
        </div>
    }
}
