//! Auth Modal Component
//!
//! Login and register dialogs. Both accept any non-empty credential pair;
//! they differ only in wording and in which dialog the footer link opens.

use leptos::prelude::*;
use recipe_book_core::Modal;

use crate::context::use_app_context;

/// Wording for one dialog
#[derive(Clone, Copy)]
struct DialogText {
    title: &'static str,
    submit: &'static str,
    empty_message: &'static str,
    switch_prompt: &'static str,
    switch_label: &'static str,
    switch_to: Modal,
}

fn dialog_text(modal: Modal) -> Option<DialogText> {
    match modal {
        Modal::None => None,
        Modal::Login => Some(DialogText {
            title: "Login",
            submit: "Log In",
            empty_message: "Enter username and password.",
            switch_prompt: "No account?",
            switch_label: "Register",
            switch_to: Modal::Register,
        }),
        Modal::Register => Some(DialogText {
            title: "Register",
            submit: "Register",
            empty_message: "Choose a username and password.",
            switch_prompt: "Already have an account?",
            switch_label: "Log in",
            switch_to: Modal::Login,
        }),
    }
}

/// Username/password form for the open dialog
#[component]
fn CredentialsDialog(modal: Modal, text: DialogText) -> impl IntoView {
    let ctx = use_app_context();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (message, set_message) = signal::<Option<String>>(None);

    let submit = move || {
        let user = username.get_untracked();
        let pass = password.get_untracked();
        if user.is_empty() || pass.is_empty() {
            set_message.set(Some(text.empty_message.to_string()));
            return;
        }
        let result = match modal {
            Modal::Register => ctx.register(&user, &pass),
            _ => ctx.login(&user, &pass),
        };
        if let Err(e) = result {
            log::warn!("[AUTH] {}", e);
            set_message.set(Some("Login failed.".to_string()));
        }
    };

    view! {
        <div class="modal-overlay">
            <div class="modal-box">
                <h2>{text.title}</h2>
                {move || message.get().map(|msg| view! { <div class="form-error">{msg}</div> })}
                <input
                    type="text"
                    placeholder="Username"
                    autofocus=true
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            submit();
                        }
                    }
                />
                <button class="btn btn-submit" on:click=move |_| submit()>
                    {text.submit}
                </button>
                <p class="modal-switch">
                    <span class="modal-switch-prompt">{text.switch_prompt}</span>
                    " "
                    <button class="btn-link" on:click=move |_| ctx.open_modal(text.switch_to)>
                        {text.switch_label}
                    </button>
                </p>
                <button class="modal-close" aria-label="Close" on:click=move |_| ctx.close_modal()>
                    "×"
                </button>
            </div>
        </div>
    }
}

/// Renders whichever auth dialog is open, if any
#[component]
pub fn AuthModal() -> impl IntoView {
    let ctx = use_app_context();
    let modal = Memo::new(move |_| ctx.with(|c| c.view().modal));

    move || {
        let open = modal.get();
        dialog_text(open).map(|text| view! { <CredentialsDialog modal=open text=text /> })
    }
}
