//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{nav_bar::NavBar, toasts::Toasts};
use crate::pages::{
    admin::AdminPage, events::EventsPage, files::FilesPage, home::HomePage, login::LoginPage, profile::ProfilePage,
    projects::ProjectsPage, signup::SignupPage,
};
use crate::state::{auth::AuthState, notify::NoticeState};
use crate::util::auth::load_current_user;
use crate::util::config::{API_BASE_META, ApiBase, published_base};
use crate::util::storage;

/// HTML shell rendered on the server for SSR + hydration. The backend base
/// URL comes from the host's `ApiBase` context.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let api_base = published_base(use_context::<ApiBase>());
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META content=api_base/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides auth and notice contexts, restores the stored session once
/// hydrated and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::initial());
    let notices = RwSignal::new(NoticeState::default());
    provide_context(auth);
    provide_context(notices);

    // Effects only run in the browser, after hydration.
    Effect::new(move || {
        auth.set(AuthState::restore(storage::token(), storage::email()));
        load_current_user(auth);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/research-portal.css"/>
        <Title text="Research Portal"/>

        <Router>
            <NavBar/>
            <Toasts/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("home") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route path=StaticSegment("events") view=EventsPage/>
                    <Route path=StaticSegment("projects") view=ProjectsPage/>
                    <Route path=StaticSegment("files") view=FilesPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route path=(StaticSegment("profile"), ParamSegment("email")) view=ProfilePage/>
                    <Route path=StaticSegment("admin") view=AdminPage/>
                </Routes>
            </main>
        </Router>
    }
}
