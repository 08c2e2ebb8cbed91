//! Login page: email + password against `/users/login`.
//!
//! On success the token and email are persisted, the current user is
//! fetched in the background and the visitor lands on `/home`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use records::forms::validate_login;
use records::{FieldError, LoginRequest};

use crate::components::form_field::TextField;
use crate::state::auth::AuthState;
use crate::state::notify::{NoticeState, notify_success};
use crate::util::task::spawn_browser;

/// Trimmed request, or the rules it breaks.
fn prepare_login(form: &LoginRequest) -> Result<LoginRequest, Vec<FieldError>> {
    let req = LoginRequest { email: form.email.trim().to_owned(), password: form.password.clone() };
    let errors = validate_login(&req);
    if errors.is_empty() { Ok(req) } else { Err(errors) }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();

    let form = RwSignal::new(LoginRequest::default());
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let req = match prepare_login(&form.get_untracked()) {
            Ok(req) => req,
            Err(list) => {
                errors.set(list);
                return;
            }
        };
        errors.set(Vec::new());
        message.set(String::new());
        busy.set(true);

        let navigate = navigate.clone();
        spawn_browser(async move {
            match crate::net::users::login(&req).await {
                Ok(token) => {
                    crate::util::storage::save_session(&token, &req.email);
                    auth.update(|a| a.sign_in(token, req.email.clone()));
                    crate::util::auth::load_current_user(auth);
                    notify_success(notices, "Login successful");
                    navigate("/home", NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("login failed: {e}");
                    message.set(e.body_or("Login failed"));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Research Portal"</h1>
                <p class="login-card__subtitle">"Sign in to your account"</p>
                <form class="login-form" on:submit=on_submit>
                    <TextField label="Email" field="email" kind="email" placeholder="you@example.com"
                        form=form errors=errors
                        read=|f: &LoginRequest| f.email.clone() write=|f: &mut LoginRequest, v| f.email = v />
                    <TextField label="Password" field="password" kind="password"
                        form=form errors=errors
                        read=|f: &LoginRequest| f.password.clone() write=|f: &mut LoginRequest, v| f.password = v />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Login" }}
                    </button>
                </form>
                <Show when=move || !message.get().is_empty()>
                    <p class="login-message">{move || message.get()}</p>
                </Show>
                <p class="login-card__subtitle">
                    "No account yet? "
                    <a href="/signup">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
