//! Category Sidebar

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let categories = ctx.with_untracked(|c| c.categories());

    view! {
        <aside class="sidebar">
            <div class="sidebar-header">"Categories"</div>
            {categories.into_iter().map(|category| {
                let label = category.label().to_string();
                let selected = category.clone();
                let is_active = move || ctx.with(|c| c.view().category == selected);
                view! {
                    <button
                        class=move || if is_active() { "category-btn active" } else { "category-btn" }
                        on:click=move |_| ctx.select_category(category.clone())
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </aside>
    }
}
