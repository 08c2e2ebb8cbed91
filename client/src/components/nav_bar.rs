//! Top navigation bar shared by every route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `AuthState` from context so the links follow the session: visitors
//! see login and signup, members see their profile and logout, moderators
//! also get the admin console.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::sign_out;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let logged_in = move || auth.get().is_logged_in();
    let can_moderate = move || auth.get().can_moderate();
    let who = move || {
        let state = auth.get();
        state
            .user
            .as_ref()
            .map(records::display::format_user_name)
            .or_else(|| state.current_email())
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        sign_out(auth);
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <header class="toolbar nav-bar">
            <a class="nav-bar__brand" href="/home">"Research Portal"</a>
            <span class="toolbar__divider" aria-hidden="true"></span>
            <nav class="nav-bar__links">
                <a href="/home">"Home"</a>
                <a href="/events">"Events"</a>
                <a href="/projects">"Projects"</a>
                <a href="/files">"Files"</a>
                <Show when=logged_in>
                    <a href="/profile">"Profile"</a>
                </Show>
                <Show when=can_moderate>
                    <a href="/admin">"Admin"</a>
                </Show>
            </nav>
            <span class="toolbar__spacer"></span>
            <Show
                when=logged_in
                fallback=|| {
                    view! {
                        <a class="btn" href="/login">"Login"</a>
                        <a class="btn btn--primary" href="/signup">"Sign up"</a>
                    }
                }
            >
                <span class="toolbar__self">{who}</span>
                <button class="btn toolbar__logout" on:click=on_logout.clone() title="Logout">
                    "Logout"
                </button>
            </Show>
        </header>
    }
}
