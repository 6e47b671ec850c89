use leptos::prelude::*;

use crate::context::use_app_context;

/// Light/dark switch
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_app_context();
    let theme = Memo::new(move |_| ctx.with(|c| c.view().theme));

    view! {
        <button
            class="theme-toggle"
            aria-label=move || theme.get().toggle_aria_label()
            on:click=move |_| ctx.toggle_theme()
        >
            {move || theme.get().toggle_label()}
        </button>
    }
}
