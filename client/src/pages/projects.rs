//! Projects listing: free-text and server-side search, membership and CRUD.
//!
//! Logged-in users may create projects and join them. Starting, editing and
//! deleting are reserved to moderators.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use leptos::prelude::*;
use records::forms::ProjectForm;
use records::model::PROJECT_STATUSES;
use records::search::{ProjectFilter, parse_budget_range};
use records::{FieldError, Project};

use crate::components::confirm_dialog::{ConfirmDialog, PendingAction};
use crate::components::form_field::{SelectField, TextField, options_of};
use crate::components::project_card::ProjectCard;
use crate::components::project_dialog::ProjectDialog;
use crate::state::auth::AuthState;
use crate::state::collection::Collection;
use crate::state::modal::ModalState;
use crate::state::notify::{NoticeState, notify_error, notify_success};
use crate::util::task::spawn_browser;

/// Status a project is moved to by the "Start" action.
pub const STARTED_STATUS: &str = "ACTIVE";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectSearchForm {
    pub text: String,
    pub status: String,
    pub budget_min: String,
    pub budget_max: String,
    pub start_after: String,
    pub end_before: String,
}

impl ProjectSearchForm {
    /// # Errors
    ///
    /// Returns the budget rule that the two budget inputs break.
    pub fn to_filter(&self) -> Result<ProjectFilter, FieldError> {
        Ok(ProjectFilter {
            text: self.text.trim().to_owned(),
            status: self.status.clone(),
            budget: parse_budget_range(&self.budget_min, &self.budget_max)?,
            start_after: self.start_after.clone(),
            end_before: self.end_before.clone(),
        })
    }
}

/// Copy of `project` moved to the started status.
pub fn started(project: &Project) -> Project {
    Project { status: STARTED_STATUS.to_owned(), ..project.clone() }
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let projects = RwSignal::new(Collection::<Project>::default());
    let search = RwSignal::new(ProjectSearchForm::default());
    let search_errors = RwSignal::new(Vec::<FieldError>::new());
    let modal = RwSignal::new(ModalState::<Project>::default());
    let form = RwSignal::new(ProjectForm::new_project());
    let form_errors = RwSignal::new(Vec::<FieldError>::new());
    let saving = RwSignal::new(false);
    let pending = RwSignal::new(None::<PendingAction>);

    projects.update(Collection::begin_load);
    spawn_browser(async move {
        match crate::net::projects::list().await {
            Ok(list) => projects.update(|c| c.load(list)),
            Err(e) => {
                log::warn!("project list failed: {e}");
                projects.update(|c| c.fail("Failed to load projects".to_owned()));
            }
        }
    });

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let filter = match search.get_untracked().to_filter() {
            Ok(filter) => filter,
            Err(err) => {
                search_errors.set(vec![err]);
                return;
            }
        };
        search_errors.set(Vec::new());
        projects.update(Collection::begin_load);
        spawn_browser(async move {
            let base = projects.get_untracked().all;
            match crate::net::search::apply_filter(&filter, &base).await {
                Ok(outcome) => projects.update(|c| c.show(outcome)),
                Err(e) => {
                    log::warn!("project search failed: {e}");
                    projects.update(|c| c.fail("Search failed.".to_owned()));
                }
            }
        });
    };
    let on_clear = move |_| {
        search.set(ProjectSearchForm::default());
        search_errors.set(Vec::new());
        projects.update(Collection::reset_filter);
    };

    let open_create = move |_| {
        form.set(ProjectForm::new_project());
        form_errors.set(Vec::new());
        modal.update(ModalState::open_create);
    };
    let open_edit = Callback::new(move |project: Project| {
        form.set(ProjectForm::from_project(&project));
        form_errors.set(Vec::new());
        modal.update(|m| m.open_edit(project));
    });
    let close_modal = Callback::new(move |()| modal.update(ModalState::close));

    let save = Callback::new(move |()| {
        if saving.get_untracked() {
            return;
        }
        let base = modal.get_untracked().editing;
        let project = match form.get_untracked().to_project(base.as_ref()) {
            Ok(project) => project,
            Err(list) => {
                form_errors.set(list);
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

    let start = Callback::new(move |project: Project| {
        let Some(id) = project.id.clone() else {
            return;
        };
        let next = started(&project);
        spawn_browser(async move {
            match crate::net::projects::update(&id, &next).await {
                Ok(saved) => {
                    projects.update(|c| c.apply_updated(saved));
                    notify_success(notices, "Project started");
                }
                Err(e) => notify_error(notices, e.user_message("start project")),
            }
        });
    });

    let join = Callback::new(move |project_id: String| {
        let Some(user_id) = auth.get_untracked().current_user_id() else {
            notify_error(notices, "Please log in to join a project.");
            return;
        };
        spawn_browser(async move {
            match crate::net::projects::add_member(&project_id, &user_id).await {
                Ok(saved) => {
                    projects.update(|c| c.apply_updated(saved));
                    notify_success(notices, "Joined project");
                }
                Err(e) => notify_error(notices, e.user_message("join project")),
            }
        });
    });

    let request_delete = Callback::new(move |id: String| pending.set(Some(PendingAction::delete("project", id))));
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
    let cancel_delete = Callback::new(move |()| pending.set(None));

    view! {
        <div class="listing-page projects-page">
            <header class="listing-page__header">
                <h1>"Projects"</h1>
                <Show when=move || auth.get().is_logged_in()>
                    <button class="btn btn--primary" on:click=open_create>"+ New Project"</button>
                </Show>
            </header>

            <form class="search-form" on:submit=on_search>
                <TextField label="Search" field="text" placeholder="Name, description or status"
                    form=search errors=search_errors
                    read=|f: &ProjectSearchForm| f.text.clone() write=|f: &mut ProjectSearchForm, v| f.text = v />
                <SelectField label="Status" field="status" form=search errors=search_errors
                    options=options_of(&PROJECT_STATUSES)
                    read=|f: &ProjectSearchForm| f.status.clone() write=|f: &mut ProjectSearchForm, v| f.status = v />
                <TextField label="Min budget" field="budgetMin" kind="number" form=search errors=search_errors
                    read=|f: &ProjectSearchForm| f.budget_min.clone() write=|f: &mut ProjectSearchForm, v| f.budget_min = v />
                <TextField label="Max budget" field="budgetMax" kind="number" form=search errors=search_errors
                    read=|f: &ProjectSearchForm| f.budget_max.clone() write=|f: &mut ProjectSearchForm, v| f.budget_max = v />
                <TextField label="Starts after" field="startAfter" kind="date" form=search errors=search_errors
                    read=|f: &ProjectSearchForm| f.start_after.clone() write=|f: &mut ProjectSearchForm, v| f.start_after = v />
                <TextField label="Ends before" field="endBefore" kind="date" form=search errors=search_errors
                    read=|f: &ProjectSearchForm| f.end_before.clone() write=|f: &mut ProjectSearchForm, v| f.end_before = v />
                <div class="search-form__actions">
                    <button type="submit" class="btn btn--primary">"Search"</button>
                    <button type="button" class="btn" on:click=on_clear>"Clear"</button>
                </div>
            </form>

            <Show when=move || projects.get().message.is_some()>
                <p class="listing-page__message">{move || projects.get().message.unwrap_or_default()}</p>
            </Show>
            <Show when=move || !projects.get().loading fallback=|| view! { <p>"Loading projects..."</p> }>
                <div class="card-grid">
                    {move || {
                        let session = auth.get();
                        let moderator = session.can_moderate();
                        let member = session.is_logged_in();
                        projects
                            .get()
                            .visible
                            .into_iter()
                            .map(|project| {
                                view! {
                                    <ProjectCard
                                        project=project
                                        on_start=moderator.then_some(start)
                                        on_join=member.then_some(join)
                                        on_edit=moderator.then_some(open_edit)
                                        on_delete=moderator.then_some(request_delete)
                                    />
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>

            <Show when=move || modal.get().open>
                <ProjectDialog
                    form=form
                    errors=form_errors
                    editing=modal.get_untracked().is_editing()
                    busy=saving
                    on_save=save
                    on_cancel=close_modal
                />
            </Show>
            {move || {
                pending
                    .get()
                    .map(|action| {
                        view! {
                            <ConfirmDialog
                                title=action.title
                                message=action.message
                                confirm_label=action.confirm_label
                                on_confirm=confirm_delete
                                on_cancel=cancel_delete
                            />
                        }
                    })
            }}
        </div>
    }
}
