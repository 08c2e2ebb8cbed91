//! Registration page. A successful signup leads to `/login`; new accounts
//! start in the pending state until an administrator approves them.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use records::forms::{normalize_signup, validate_signup};
use records::{FieldError, SignupRequest};

use crate::components::form_field::TextField;
use crate::state::notify::{NoticeState, notify_success};
use crate::util::task::spawn_browser;

#[component]
pub fn SignupPage() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();

    let form = RwSignal::new(SignupRequest::default());
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let req = normalize_signup(form.get_untracked());
        let found = validate_signup(&req);
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(Vec::new());
        message.set(String::new());
        busy.set(true);

        let navigate = navigate.clone();
        spawn_browser(async move {
            match crate::net::users::signup(&req).await {
                Ok(reply) => {
                    let text = if reply.trim().is_empty() { "Signup successful".to_owned() } else { reply };
                    notify_success(notices, text);
                    navigate("/login", NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("signup failed: {e}");
                    message.set(e.body_or("Signup failed"));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card login-card--wide">
                <h1>"Create an account"</h1>
                <form class="login-form" on:submit=on_submit>
                    <div class="dialog__row">
                        <TextField label="First name" field="firstName" form=form errors=errors
                            read=|f: &SignupRequest| f.first_name.clone() write=|f: &mut SignupRequest, v| f.first_name = v />
                        <TextField label="Last name" field="lastName" form=form errors=errors
                            read=|f: &SignupRequest| f.last_name.clone() write=|f: &mut SignupRequest, v| f.last_name = v />
                    </div>
                    <TextField label="Email" field="email" kind="email" form=form errors=errors
                        read=|f: &SignupRequest| f.email.clone() write=|f: &mut SignupRequest, v| f.email = v />
                    <TextField label="Password" field="password" kind="password" form=form errors=errors
                        read=|f: &SignupRequest| f.password.clone() write=|f: &mut SignupRequest, v| f.password = v />
                    <div class="dialog__row">
                        <TextField label="Date of birth" field="dateOfBirth" kind="date" form=form errors=errors
                            read=|f: &SignupRequest| f.date_of_birth.clone() write=|f: &mut SignupRequest, v| f.date_of_birth = v />
                        <TextField label="Phone" field="phone" kind="tel" form=form errors=errors
                            read=|f: &SignupRequest| f.phone.clone() write=|f: &mut SignupRequest, v| f.phone = v />
                    </div>
                    <div class="dialog__row">
                        <TextField label="Grade" field="grade" form=form errors=errors
                            read=|f: &SignupRequest| f.grade.clone() write=|f: &mut SignupRequest, v| f.grade = v />
                        <TextField label="Institute" field="institute" form=form errors=errors
                            read=|f: &SignupRequest| f.institute.clone() write=|f: &mut SignupRequest, v| f.institute = v />
                    </div>
                    <div class="dialog__row">
                        <TextField label="Last diploma" field="lastDiploma" form=form errors=errors
                            read=|f: &SignupRequest| f.last_diploma.clone() write=|f: &mut SignupRequest, v| f.last_diploma = v />
                        <TextField label="Research area" field="researchArea" form=form errors=errors
                            read=|f: &SignupRequest| f.research_area.clone() write=|f: &mut SignupRequest, v| f.research_area = v />
                    </div>
                    <TextField label="LinkedIn URL (optional)" field="linkedInUrl" kind="url" form=form errors=errors
                        read=|f: &SignupRequest| f.linked_in_url.clone().unwrap_or_default()
                        write=|f: &mut SignupRequest, v| f.linked_in_url = Some(v) />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign up"
                    </button>
                </form>
                <Show when=move || !message.get().is_empty()>
                    <p class="login-message">{move || message.get()}</p>
                </Show>
                <p class="login-card__subtitle">
                    "Already registered? "
                    <a href="/login">"Log in"</a>
                </p>
            </div>
        </div>
    }
}
