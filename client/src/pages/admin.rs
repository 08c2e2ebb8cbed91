//! Administration console at `/admin`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reachable by moderating roles only. A counter strip (users per role,
//! files, projects) and the plain-text summary report sit above four tabs
//! that manage projects, events, users and files.
//!
//! DESIGN
//! ======
//! Each tab owns its `Collection`, modal and pending confirmation so tabs
//! stay independent; mutations patch the local collection in place.
//! Accounts cannot be deleted through the backend; declining is the
//! destructive action on the users tab.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use records::display::{format_user_name, role_display, short_date};
use records::forms::{EventForm, FileForm, ProjectForm, UploadRules, UserForm, prepare_upload};
use records::{ApiError, Event, FieldError, FileDocument, Project, Role, User, UserStatus};

use crate::components::confirm_dialog::{ConfirmDialog, PendingAction};
use crate::components::event_dialog::EventDialog;
use crate::components::file_dialog::FileDialog;
use crate::components::project_dialog::ProjectDialog;
use crate::components::user_dialog::UserDialog;
use crate::state::auth::AuthState;
use crate::state::collection::Collection;
use crate::state::modal::ModalState;
use crate::state::notify::{NoticeState, notify_error, notify_success};
use crate::util::auth::install_moderator_redirect;
use crate::util::download::download_document;
use crate::util::picked_file::PickedFile;
use crate::util::task::spawn_browser;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Projects,
    Events,
    Users,
    Files,
}

impl AdminTab {
    pub const ALL: [AdminTab; 4] = [Self::Projects, Self::Events, Self::Users, Self::Files];

    pub fn label(self) -> &'static str {
        match self {
            Self::Projects => "Projects",
            Self::Events => "Events",
            Self::Users => "Users",
            Self::Files => "Files",
        }
    }
}

/// Counter strip values. `None` marks a count the backend failed to give.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdminCounts {
    pub users_by_role: Vec<(Role, Option<u64>)>,
    pub files: Option<u64>,
    pub projects: Option<u64>,
}

impl AdminCounts {
    /// Counts from the individual calls, plus the first failure to report.
    pub fn collect(
        per_role: Vec<(Role, Result<u64, ApiError>)>,
        files: Result<u64, ApiError>,
        projects: Result<u64, ApiError>,
    ) -> (Self, Option<ApiError>) {
        let mut first_error = None;
        let mut keep = |result: Result<u64, ApiError>| match result {
            Ok(n) => Some(n),
            Err(e) => {
                first_error.get_or_insert(e);
                None
            }
        };
        let users_by_role = per_role.into_iter().map(|(role, n)| (role, keep(n))).collect();
        let files = keep(files);
        let projects = keep(projects);
        (Self { users_by_role, files, projects }, first_error)
    }

    /// Sum over every role, unknown when any role count is missing.
    pub fn total_users(&self) -> Option<u64> {
        self.users_by_role.iter().map(|(_, n)| *n).sum()
    }
}

/// Counter text; missing counts read `n/a`.
pub fn counter_text(value: Option<u64>) -> String {
    value.map_or_else(|| "n/a".to_owned(), |n| n.to_string())
}

/// Whether an account still awaits approval.
pub fn awaiting_review(user: &User) -> bool {
    user.status == UserStatus::Pending
}

/// Notification for a failed account creation; the backend answers 400 when
/// the email is taken.
pub fn create_user_error(err: &ApiError) -> String {
    match err.status() {
        Some(400) => "Email already in use".to_owned(),
        _ => err.user_message("create user"),
    }
}

/// Users with the given id replaced by `updated`; unknown ids append.
pub fn replace_user(users: &mut Vec<User>, updated: User) {
    match users.iter_mut().find(|u| u.id == updated.id || u.email == updated.email) {
        Some(slot) => *slot = updated,
        None => users.push(updated),
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    install_moderator_redirect(auth, notices, use_navigate());

    let tab = RwSignal::new(AdminTab::default());
    let counts = RwSignal::new(AdminCounts::default());
    let report = RwSignal::new(None::<String>);

    spawn_browser(async move {
        let roles = Role::assignable();
        let per_role = futures::future::join_all(roles.iter().map(crate::net::admin::count_users)).await;
        let (files, projects) =
            futures::future::join(crate::net::admin::count_files(), crate::net::projects::count()).await;
        let (loaded, failure) = AdminCounts::collect(roles.iter().cloned().zip(per_role).collect(), files, projects);
        if let Some(e) = failure {
            log::warn!("admin counters incomplete: {e}");
            notify_error(notices, e.user_message("load counts"));
        }
        counts.set(loaded);
    });

    let load_report = move |_| {
        spawn_browser(async move {
            match crate::net::admin::summary_report().await {
                Ok(text) => report.set(Some(text)),
                Err(e) => notify_error(notices, e.user_message("load report")),
            }
        });
    };

    view! {
        <div class="admin-page">
            <h1>"Administration"</h1>
            <section class="admin-page__counters">
                <div class="counter">
                    <span class="counter__value">{move || counter_text(counts.get().total_users())}</span>
                    <span class="counter__label">"Users"</span>
                </div>
                {move || {
                    counts
                        .get()
                        .users_by_role
                        .into_iter()
                        .map(|(role, n)| {
                            view! {
                                <div class="counter counter--minor">
                                    <span class="counter__value">{counter_text(n)}</span>
                                    <span class="counter__label">{role_display(&role).to_owned()}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <div class="counter">
                    <span class="counter__value">{move || counter_text(counts.get().files)}</span>
                    <span class="counter__label">"Files"</span>
                </div>
                <div class="counter">
                    <span class="counter__value">{move || counter_text(counts.get().projects)}</span>
                    <span class="counter__label">"Projects"</span>
                </div>
                <button class="btn" on:click=load_report>"Summary report"</button>
            </section>
            <Show when=move || report.get().is_some()>
                <pre class="admin-page__report">{move || report.get().unwrap_or_default()}</pre>
            </Show>

            <nav class="tabs">
                {AdminTab::ALL
                    .into_iter()
                    .map(|t| {
                        view! {
                            <button
                                class="tabs__tab"
                                class:tabs__tab--active=move || tab.get() == t
                                on:click=move |_| tab.set(t)
                            >
                                {t.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            {move || match tab.get() {
                AdminTab::Projects => view! { <ProjectsTab /> }.into_any(),
                AdminTab::Events => view! { <EventsTab /> }.into_any(),
                AdminTab::Users => view! { <UsersTab /> }.into_any(),
                AdminTab::Files => view! { <FilesTab /> }.into_any(),
            }}
        </div>
    }
}

/// Confirmation overlay for the tab's pending delete.
fn confirm_overlay(pending: RwSignal<Option<PendingAction>>, on_confirm: Callback<()>) -> impl IntoView {
    let on_cancel = Callback::new(move |()| pending.set(None));
    move || {
        pending.get().map(|action| {
            view! {
                <ConfirmDialog
                    title=action.title
                    message=action.message
                    confirm_label=action.confirm_label
                    on_confirm=on_confirm
                    on_cancel=on_cancel
                />
            }
        })
    }
}

#[component]
fn ProjectsTab() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let projects = RwSignal::new(Collection::<Project>::default());
    let modal = RwSignal::new(ModalState::<Project>::default());
    let form = RwSignal::new(ProjectForm::new_project());
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let saving = RwSignal::new(false);
    let pending = RwSignal::new(None::<PendingAction>);

    projects.update(Collection::begin_load);
    spawn_browser(async move {
        match crate::net::projects::list().await {
            Ok(list) => projects.update(|c| c.load(list)),
            Err(e) => {
                notify_error(notices, e.user_message("load projects"));
                projects.update(|c| c.fail("Failed to load projects".to_owned()));
            }
        }
    });

    let open_create = move |_| {
        form.set(ProjectForm::new_project());
        errors.set(Vec::new());
        modal.update(ModalState::open_create);
    };
    let save = Callback::new(move |()| {
        let base = modal.get_untracked().editing;
        let project = match form.get_untracked().to_project(base.as_ref()) {
            Ok(project) => project,
            Err(list) => {
                errors.set(list);
                return;
            }
        };
        saving.set(true);
        spawn_browser(async move {
            let editing_id = base.and_then(|p| p.id);
            let result = match editing_id.as_deref() {
                Some(id) => crate::net::projects::update(id, &project).await,
                None => crate::net::projects::create(&project).await,
            };
            match result {
                Ok(saved) => {
                    projects.update(|c| c.apply_saved(saved));
                    modal.update(ModalState::close);
                    let verb = if editing_id.is_some() { "updated" } else { "created" };
                    notify_success(notices, format!("Project {verb} successfully"));
                }
                Err(e) => notify_error(notices, e.user_message("save project")),
            }
            saving.set(false);
        });
    });
    let confirm_delete = Callback::new(move |()| {
        let Some(action) = pending.get_untracked() else {
            return;
        };
        spawn_browser(async move {
            match crate::net::projects::delete(&action.target).await {
                Ok(()) => {
                    projects.update(|c| c.apply_removed(&action.target));
                    notify_success(notices, "Project deleted successfully");
                }
                Err(e) => notify_error(notices, e.user_message("delete project")),
            }
        });
    });

    view! {
        <section class="admin-tab">
            <header class="admin-tab__header">
                <h2>"Projects"</h2>
                <button class="btn btn--primary" on:click=open_create>"+ New Project"</button>
            </header>
            <table class="admin-table">
                <thead>
                    <tr><th>"Name"</th><th>"Status"</th><th>"Budget"</th><th>"Start"</th><th>"End"</th><th></th></tr>
                </thead>
                <tbody>
                    {move || {
                        projects
                            .get()
                            .visible
                            .into_iter()
                            .map(|project| {
                                let id = project.id.clone().unwrap_or_default();
                                let editing = project.clone();
                                view! {
                                    <tr>
                                        <td>{project.project_name.clone()}</td>
                                        <td>{project.status.clone()}</td>
                                        <td>{format!("{:.2}", project.budget)}</td>
                                        <td>{short_date(&project.start_date)}</td>
                                        <td>{short_date(&project.end_date)}</td>
                                        <td class="admin-table__actions">
                                            <button class="btn" on:click=move |_| {
                                                form.set(ProjectForm::from_project(&editing));
                                                errors.set(Vec::new());
                                                modal.update(|m| m.open_edit(editing.clone()));
                                            }>"Edit"</button>
                                            <button class="btn btn--danger" on:click=move |_| {
                                                pending.set(Some(PendingAction::delete("project", id.clone())));
                                            }>"Delete"</button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
            <Show when=move || modal.get().open>
                <ProjectDialog form=form errors=errors editing=modal.get_untracked().is_editing() busy=saving
                    on_save=save on_cancel=Callback::new(move |()| modal.update(ModalState::close)) />
            </Show>
            {confirm_overlay(pending, confirm_delete)}
        </section>
    }
}

#[component]
fn EventsTab() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let events = RwSignal::new(Collection::<Event>::default());
    let modal = RwSignal::new(ModalState::<Event>::default());
    let form = RwSignal::new(EventForm::new_event());
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let saving = RwSignal::new(false);
    let pending = RwSignal::new(None::<PendingAction>);

    events.update(Collection::begin_load);
    spawn_browser(async move {
        match crate::net::events::list().await {
            Ok(list) => events.update(|c| c.load(list)),
            Err(e) => {
                notify_error(notices, e.user_message("load events"));
                events.update(|c| c.fail("Failed to load events".to_owned()));
            }
        }
    });

    let open_create = move |_| {
        form.set(EventForm::new_event());
        errors.set(Vec::new());
        modal.update(ModalState::open_create);
    };
    let save = Callback::new(move |()| {
        let event = match form.get_untracked().to_event() {
            Ok(event) => event,
            Err(list) => {
                errors.set(list);
                return;
            }
        };
        let editing_id = modal.get_untracked().editing.and_then(|e| e.id);
        saving.set(true);
        spawn_browser(async move {
            let result = match editing_id.as_deref() {
                Some(id) => crate::net::events::update(id, &event).await,
                None => crate::net::events::create(&event).await,
            };
            match result {
                Ok(saved) => {
                    events.update(|c| c.apply_saved(saved));
                    modal.update(ModalState::close);
                    let verb = if editing_id.is_some() { "updated" } else { "created" };
                    notify_success(notices, format!("Event {verb} successfully"));
                }
                Err(e) => notify_error(notices, e.user_message("save event")),
            }
            saving.set(false);
        });
    });
    let confirm_delete = Callback::new(move |()| {
        let Some(action) = pending.get_untracked() else {
            return;
        };
        spawn_browser(async move {
            match crate::net::events::delete(&action.target).await {
                Ok(()) => {
                    events.update(|c| c.apply_removed(&action.target));
                    notify_success(notices, "Event deleted successfully");
                }
                Err(e) => notify_error(notices, e.user_message("delete event")),
            }
        });
    });

    view! {
        <section class="admin-tab">
            <header class="admin-tab__header">
                <h2>"Events"</h2>
                <button class="btn btn--primary" on:click=open_create>"+ New Event"</button>
            </header>
            <table class="admin-table">
                <thead>
                    <tr><th>"Name"</th><th>"Location"</th><th>"Status"</th><th>"Places"</th><th>"Start"</th><th></th></tr>
                </thead>
                <tbody>
                    {move || {
                        events
                            .get()
                            .visible
                            .into_iter()
                            .map(|event| {
                                let id = event.id.clone().unwrap_or_default();
                                let places = format!(
                                    "{}/{}",
                                    event.available_places.unwrap_or(event.max_participants),
                                    event.max_participants
                                );
                                let editing = event.clone();
                                view! {
                                    <tr>
                                        <td>{event.event_name.clone()}</td>
                                        <td>{event.location.clone()}</td>
                                        <td>{event.status.clone()}</td>
                                        <td>{places}</td>
                                        <td>{short_date(&event.start_date)}</td>
                                        <td class="admin-table__actions">
                                            <button class="btn" on:click=move |_| {
                                                form.set(EventForm::from_event(&editing));
                                                errors.set(Vec::new());
                                                modal.update(|m| m.open_edit(editing.clone()));
                                            }>"Edit"</button>
                                            <button class="btn btn--danger" on:click=move |_| {
                                                pending.set(Some(PendingAction::delete("event", id.clone())));
                                            }>"Delete"</button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
            <Show when=move || modal.get().open>
                <EventDialog form=form errors=errors editing=modal.get_untracked().is_editing() busy=saving
                    on_save=save on_cancel=Callback::new(move |()| modal.update(ModalState::close)) />
            </Show>
            {confirm_overlay(pending, confirm_delete)}
        </section>
    }
}

/// Moderation decision awaiting confirmation on the users tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Review {
    Approve,
    Decline,
}

#[component]
fn UsersTab() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();
    let users = RwSignal::new(Vec::<User>::new());
    let loading = RwSignal::new(true);
    let modal = RwSignal::new(ModalState::<User>::default());
    let form = RwSignal::new(UserForm::default());
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let saving = RwSignal::new(false);
    let pending = RwSignal::new(None::<PendingAction>);
    let review = RwSignal::new(Review::Approve);

    spawn_browser(async move {
        match crate::net::admin::users().await {
            Ok(list) => users.set(list),
            Err(e) => {
                log::warn!("admin user list failed: {e}");
                notify_error(notices, "Failed to load users");
            }
        }
        loading.set(false);
    });

    let open_create = move |_| {
        form.set(UserForm { role: Role::User.as_str().to_owned(), status: "APPROVED".to_owned(), ..UserForm::default() });
        errors.set(Vec::new());
        modal.update(ModalState::open_create);
    };

    let save = Callback::new(move |()| {
        let editing = modal.get_untracked().editing;
        let current = form.get_untracked();
        match editing {
            None => {
                let req = match current.to_signup() {
                    Ok(req) => req,
                    Err(list) => {
                        errors.set(list);
                        return;
                    }
                };
                saving.set(true);
                spawn_browser(async move {
                    let created = match crate::net::users::signup(&req).await {
                        Ok(_) => crate::net::users::update_role(&req.email, &current.role).await,
                        Err(e) => Err(e),
                    };
                    match created {
                        Ok(user) => {
                            users.update(|list| replace_user(list, user));
                            modal.update(ModalState::close);
                            notify_success(notices, "User created successfully");
                        }
                        Err(e) => notify_error(notices, create_user_error(&e)),
                    }
                    saving.set(false);
                });
            }
            Some(original) => {
                let update = match current.to_update() {
                    Ok(update) => update,
                    Err(list) => {
                        errors.set(list);
                        return;
                    }
                };
                saving.set(true);
                spawn_browser(async move {
                    let saved = match crate::net::users::update(&original.email, &update).await {
                        Ok(user) if user.role.as_str() != current.role => {
                            crate::net::users::update_role(&user.email, &current.role).await
                        }
                        other => other,
                    };
                    match saved {
                        Ok(user) => {
                            users.update(|list| replace_user(list, user));
                            modal.update(ModalState::close);
                            notify_success(notices, "User updated successfully");
                        }
                        Err(e) => notify_error(notices, e.user_message("update user")),
                    }
                    saving.set(false);
                });
            }
        }
    });

    let confirm_review = Callback::new(move |()| {
        let Some(action) = pending.get_untracked() else {
            return;
        };
        let decision = review.get_untracked();
        spawn_browser(async move {
            let result = match decision {
                Review::Approve => crate::net::admin::approve(&action.target, &Role::Permanent).await,
                Review::Decline => crate::net::admin::decline(&action.target).await,
            };
            match result {
                Ok(user) => {
                    users.update(|list| replace_user(list, user));
                    let verb = if decision == Review::Approve { "approved" } else { "declined" };
                    notify_success(notices, format!("User {verb} successfully"));
                }
                Err(e) => notify_error(notices, e.user_message("update user status")),
            }
        });
    });

    let ask = move |decision: Review, email: String| {
        review.set(decision);
        let (title, verb, label) = match decision {
            Review::Approve => ("Approve user", "approve", "Approve"),
            Review::Decline => ("Decline user", "decline", "Decline"),
        };
        pending.set(Some(PendingAction {
            title: title.to_owned(),
            message: format!("Are you sure you want to {verb} {email}?"),
            confirm_label: label,
            target: email,
        }));
    };

    view! {
        <section class="admin-tab">
            <header class="admin-tab__header">
                <h2>"Users"</h2>
                <button class="btn btn--primary" on:click=open_create>"+ New User"</button>
            </header>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading users..."</p> }>
                <table class="admin-table">
                    <thead>
                        <tr><th>"Name"</th><th>"Email"</th><th>"Role"</th><th>"Status"</th><th></th></tr>
                    </thead>
                    <tbody>
                        {move || {
                            users
                                .get()
                                .into_iter()
                                .map(|user| {
                                    let pending_review = awaiting_review(&user);
                                    let approve_email = user.email.clone();
                                    let decline_email = user.email.clone();
                                    let editing = user.clone();
                                    view! {
                                        <tr>
                                            <td>{format_user_name(&user)}</td>
                                            <td>{user.email.clone()}</td>
                                            <td>{role_display(&user.role).to_owned()}</td>
                                            <td>{user.status.as_str().to_owned()}</td>
                                            <td class="admin-table__actions">
                                                {pending_review.then(|| view! {
                                                    <button class="btn btn--primary" on:click=move |_| ask(Review::Approve, approve_email.clone())>
                                                        "Approve"
                                                    </button>
                                                    <button class="btn btn--danger" on:click=move |_| ask(Review::Decline, decline_email.clone())>
                                                        "Decline"
                                                    </button>
                                                })}
                                                <button class="btn" on:click=move |_| {
                                                    form.set(UserForm::from_user(&editing));
                                                    errors.set(Vec::new());
                                                    modal.update(|m| m.open_edit(editing.clone()));
                                                }>"Edit"</button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </Show>
            <Show when=move || modal.get().open>
                <UserDialog form=form errors=errors editing=modal.get_untracked().is_editing() busy=saving
                    on_save=save on_cancel=Callback::new(move |()| modal.update(ModalState::close)) />
            </Show>
            {confirm_overlay(pending, confirm_review)}
        </section>
    }
}

#[component]
fn FilesTab() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let files = RwSignal::new(Collection::<FileDocument>::default());
    let types = RwSignal::new(Vec::<String>::new());
    let modal = RwSignal::new(ModalState::<FileDocument>::default());
    let form = RwSignal::new(FileForm::default());
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let picked = RwSignal::new_local(None::<PickedFile>);
    let saving = RwSignal::new(false);
    let pending = RwSignal::new(None::<PendingAction>);

    files.update(Collection::begin_load);
    spawn_browser(async move {
        let (list, kinds) = futures::future::join(crate::net::files::list(), crate::net::files::types()).await;
        types.set(kinds);
        match list {
            Ok(list) => files.update(|c| c.load(list)),
            Err(e) => {
                notify_error(notices, e.user_message("load files"));
                files.update(|c| c.fail("Failed to load files".to_owned()));
            }
        }
    });

    let open_upload = move |_| {
        form.set(FileForm::default());
        errors.set(Vec::new());
        picked.set(None);
        modal.update(ModalState::open_create);
    };
    let close = Callback::new(move |()| {
        picked.set(None);
        modal.update(ModalState::close);
    });

    let save = Callback::new(move |()| {
        let editing = modal.get_untracked().editing;
        let file = picked.get_untracked();
        let meta = match &editing {
            Some(_) => form.get_untracked().to_metadata(UploadRules::Library),
            None => prepare_upload(
                file.as_ref().map(|f| (f.mime.as_str(), f.size)),
                &form.get_untracked(),
                UploadRules::Library,
            ),
        };
        let meta = match meta {
            Ok(meta) => meta,
            Err(list) => {
                errors.set(list);
                return;
            }
        };
        let email = auth.get_untracked().current_email();
        if editing.is_none() && email.is_none() {
            notify_error(notices, ApiError::MissingSession.to_string());
            return;
        }
        saving.set(true);
        spawn_browser(async move {
            match (editing, file, email) {
                (Some(doc), _, _) => match crate::net::files::update(&doc.id, &meta).await {
                    Ok(saved) => {
                        files.update(|c| c.apply_updated(saved));
                        modal.update(ModalState::close);
                        notify_success(notices, "File updated successfully");
                    }
                    Err(e) => notify_error(notices, e.user_message("update file")),
                },
                (None, Some(file), Some(email)) => match crate::net::files::upload(&email, &file, &meta).await {
                    Ok(owner) => {
                        if let Some(doc) = owner.uploads.last().cloned() {
                            files.update(|c| c.apply_created(doc));
                        }
                        picked.set(None);
                        modal.update(ModalState::close);
                        notify_success(notices, "File uploaded successfully");
                    }
                    Err(e) => notify_error(notices, e.user_message("upload file")),
                },
                _ => {}
            }
            saving.set(false);
        });
    });

    let confirm_delete = Callback::new(move |()| {
        let Some(action) = pending.get_untracked() else {
            return;
        };
        spawn_browser(async move {
            match crate::net::files::delete(&action.target).await {
                Ok(()) => {
                    files.update(|c| c.apply_removed(&action.target));
                    notify_success(notices, "File deleted successfully");
                }
                Err(e) => notify_error(notices, e.user_message("delete file")),
            }
        });
    });

    view! {
        <section class="admin-tab">
            <header class="admin-tab__header">
                <h2>"Files"</h2>
                <button class="btn btn--primary" on:click=open_upload>"Upload"</button>
            </header>
            <table class="admin-table">
                <thead>
                    <tr><th>"Title"</th><th>"Type"</th><th>"Authors"</th><th>"Published"</th><th></th></tr>
                </thead>
                <tbody>
                    {move || {
                        files
                            .get()
                            .visible
                            .into_iter()
                            .map(|doc| {
                                let id = doc.id.clone();
                                let editing = doc.clone();
                                let target = doc.clone();
                                view! {
                                    <tr>
                                        <td>{doc.title.clone().unwrap_or_default()}</td>
                                        <td>{doc.file_type.clone().unwrap_or_default()}</td>
                                        <td>{doc.authors.join(", ")}</td>
                                        <td>{doc.publication_date.as_deref().map(short_date).unwrap_or_default()}</td>
                                        <td class="admin-table__actions">
                                            <button class="btn" on:click=move |_| download_document(target.clone(), notices)>
                                                "Download"
                                            </button>
                                            <button class="btn" on:click=move |_| {
                                                form.set(FileForm::from_document(&editing));
                                                errors.set(Vec::new());
                                                modal.update(|m| m.open_edit(editing.clone()));
                                            }>"Edit"</button>
                                            <button class="btn btn--danger" on:click=move |_| {
                                                pending.set(Some(PendingAction::delete("file", id.clone())));
                                            }>"Delete"</button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
            <Show when=move || modal.get().open>
                {move || {
                    if modal.get_untracked().is_editing() {
                        view! {
                            <FileDialog form=form errors=errors title="Edit File" types=types
                                busy=saving on_save=save on_cancel=close />
                        }
                        .into_any()
                    } else {
                        view! {
                            <FileDialog form=form errors=errors title="Upload File" types=types
                                picked=Some(picked) busy=saving on_save=save on_cancel=close />
                        }
                        .into_any()
                    }
                }}
            </Show>
            {confirm_overlay(pending, confirm_delete)}
        </section>
    }
}
