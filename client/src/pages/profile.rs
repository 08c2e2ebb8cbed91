//! Profile page for `/profile` (own account) and `/profile/:email`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The own profile supports editing, photo replacement and document upload;
//! any profile lists the user's uploads for download together with the
//! events and projects they take part in.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};
use records::display::{format_user_name, role_color, role_display, status_color};
use records::forms::{FileForm, ProfileForm, UploadRules, check_photo, prepare_upload};
use records::{ApiError, Event, FieldError, FileDocument, Project, User};

use crate::components::file_card::FileCard;
use crate::components::file_dialog::FileDialog;
use crate::components::form_dialog::FormDialog;
use crate::components::form_field::TextField;
use crate::state::auth::AuthState;
use crate::state::notify::{NoticeState, notify_error, notify_success};
use crate::util::auth::install_unauth_redirect;
use crate::util::download::download_document;
use crate::util::picked_file::PickedFile;
use crate::util::task::spawn_browser;

/// Email whose profile is shown: the route parameter, else the session's.
pub fn target_email(param: Option<String>, session_email: Option<String>) -> Option<String> {
    param.filter(|p| !p.trim().is_empty()).or(session_email)
}

/// Whether `target` is the signed-in account.
pub fn is_own_profile(target: &str, session_email: Option<&str>) -> bool {
    session_email.is_some_and(|own| own.eq_ignore_ascii_case(target))
}

/// First failure among the enrolment lookups.
pub fn enrolment_error(events: &Result<Vec<Event>, ApiError>, projects: &Result<Vec<Project>, ApiError>) -> Option<ApiError> {
    events.as_ref().err().or(projects.as_ref().err()).cloned()
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();
    let params = use_params_map();

    install_unauth_redirect(auth, navigate.clone());

    let user = RwSignal::new(None::<User>);
    let events = RwSignal::new(Vec::<Event>::new());
    let projects = RwSignal::new(Vec::<Project>::new());
    let loading = RwSignal::new(true);

    let edit_open = RwSignal::new(false);
    let profile_form = RwSignal::new(ProfileForm::default());
    let profile_errors = RwSignal::new(Vec::<FieldError>::new());
    let upload_open = RwSignal::new(false);
    let upload_form = RwSignal::new(FileForm::default());
    let upload_errors = RwSignal::new(Vec::<FieldError>::new());
    let picked = RwSignal::new_local(None::<PickedFile>);
    let busy = RwSignal::new(false);

    let target = Memo::new(move |_| target_email(params.read().get("email"), auth.get().current_email()));
    let own = move || target.get().is_some_and(|t| is_own_profile(&t, auth.get().current_email().as_deref()));

    Effect::new(move || {
        let Some(email) = target.get() else {
            return;
        };
        loading.set(true);
        let navigate = navigate.clone();
        spawn_browser(async move {
            match crate::net::users::by_email(&email).await {
                Ok(found) => user.set(Some(found)),
                Err(e) => {
                    notify_error(notices, e.user_message("load profile"));
                    navigate("/home", NavigateOptions::default());
                }
            }
            loading.set(false);
            let (joined, member_of) = futures::future::join(
                crate::net::users::enrolled_events(&email),
                crate::net::users::enrolled_projects(&email),
            )
            .await;
            if let Some(e) = enrolment_error(&joined, &member_of) {
                log::warn!("enrolments for {email} failed: {e}");
                notify_error(notices, e.user_message("load enrolments"));
            }
            events.set(joined.unwrap_or_default());
            projects.set(member_of.unwrap_or_default());
        });
    });

    let replace_user = move |updated: User| {
        if own() {
            auth.update(|a| a.user = Some(updated.clone()));
        }
        user.set(Some(updated));
    };

    let open_edit = move |_| {
        if let Some(u) = user.get_untracked() {
            profile_form.set(ProfileForm::from_user(&u));
            profile_errors.set(Vec::new());
            edit_open.set(true);
        }
    };
    let save_profile = Callback::new(move |()| {
        let Some(email) = user.get_untracked().map(|u| u.email) else {
            return;
        };
        let update = match profile_form.get_untracked().to_update() {
            Ok(update) => update,
            Err(list) => {
                profile_errors.set(list);
                return;
            }
        };
        busy.set(true);
        spawn_browser(async move {
            match crate::net::users::update(&email, &update).await {
                Ok(updated) => {
                    replace_user(updated);
                    edit_open.set(false);
                    notify_success(notices, "Profile updated successfully!");
                }
                Err(e) => {
                    log::warn!("profile update failed: {e}");
                    notify_error(notices, "Failed to update profile. Please try again.");
                }
            }
            busy.set(false);
        });
    });

    let on_photo = move |ev: leptos::ev::Event| {
        let Some(file) = PickedFile::from_input_event(&ev) else {
            return;
        };
        if let Err(err) = check_photo(&file.mime, file.size) {
            notify_error(notices, err.message);
            return;
        }
        let Some(email) = user.get_untracked().map(|u| u.email) else {
            return;
        };
        busy.set(true);
        spawn_browser(async move {
            match crate::net::users::upload_photo(&email, &file).await {
                Ok(updated) => {
                    replace_user(updated);
                    notify_success(notices, "Profile photo updated successfully!");
                }
                Err(e) => {
                    log::warn!("photo upload failed: {e}");
                    notify_error(notices, "Failed to upload photo. Please try again.");
                }
            }
            busy.set(false);
        });
    };

    let open_upload = move |_| {
        upload_form.set(FileForm::default());
        upload_errors.set(Vec::new());
        picked.set(None);
        upload_open.set(true);
    };
    let close_upload = Callback::new(move |()| {
        picked.set(None);
        upload_open.set(false);
    });
    let save_upload = Callback::new(move |()| {
        let file = picked.get_untracked();
        let meta = match prepare_upload(
            file.as_ref().map(|f| (f.mime.as_str(), f.size)),
            &upload_form.get_untracked(),
            UploadRules::Profile,
        ) {
            Ok(meta) => meta,
            Err(list) => {
                upload_errors.set(list);
                return;
            }
        };
        let (Some(file), Some(email)) = (file, user.get_untracked().map(|u| u.email)) else {
            return;
        };
        busy.set(true);
        spawn_browser(async move {
            match crate::net::users::upload_document(&email, &file, &meta).await {
                Ok(updated) => {
                    replace_user(updated);
                    picked.set(None);
                    upload_open.set(false);
                    notify_success(notices, "Document uploaded successfully!");
                }
                Err(e) => {
                    log::warn!("document upload failed: {e}");
                    notify_error(notices, "Failed to upload document. Please try again.");
                }
            }
            busy.set(false);
        });
    });

    let download = Callback::new(move |doc: FileDocument| download_document(doc, notices));

    view! {
        <div class="profile-page">
            <Show
                when=move || user.get().is_some()
                fallback=move || {
                    view! { <p>{move || if loading.get() { "Loading profile..." } else { "Profile not available." }}</p> }
                }
            >
                {move || user.get().map(|u| {
                    let role_style = format!("background:{}", role_color(&u.role));
                    let status_style = format!("background:{}", status_color(&u.status));
                    let role = role_display(&u.role).to_owned();
                    let name = format_user_name(&u);
                    let initials: String = [&u.first_name, &u.last_name]
                        .iter()
                        .filter_map(|part| part.chars().next())
                        .collect();
                    view! {
                        <section class="profile-page__header">
                            {match u.image_url.clone().filter(|s| !s.is_empty()) {
                                Some(src) => view! { <img class="profile-page__photo" src=src alt=name.clone() /> }.into_any(),
                                None => view! { <span class="profile-page__photo profile-page__photo--empty">{initials}</span> }.into_any(),
                            }}
                            <div>
                                <h1>{name.clone()}</h1>
                                <p>{u.email.clone()}</p>
                                <span class="badge" style=role_style>{role}</span>
                                <span class="badge" style=status_style>{u.status.as_str().to_owned()}</span>
                            </div>
                        </section>
                        <dl class="profile-page__facts">
                            <dt>"Phone"</dt><dd>{u.phone.clone()}</dd>
                            <dt>"Grade"</dt><dd>{u.grade.clone()}</dd>
                            <dt>"Institute"</dt><dd>{u.institute.clone()}</dd>
                            <dt>"Last diploma"</dt><dd>{u.last_diploma.clone()}</dd>
                            <dt>"Research area"</dt><dd>{u.research_area.clone()}</dd>
                            <dt>"LinkedIn"</dt>
                            <dd>
                                {u.linked_in_url.clone().map(|url| {
                                    let href = url.clone();
                                    view! { <a href=href target="_blank" rel="noopener">{url}</a> }
                                })}
                            </dd>
                        </dl>
                    }
                })}
                <Show when=own>
                    <div class="profile-page__actions">
                        <button class="btn" on:click=open_edit>"Edit profile"</button>
                        <label class="btn">
                            "Change photo"
                            <input type="file" accept="image/*" class="visually-hidden" on:change=on_photo />
                        </label>
                        <button class="btn btn--primary" on:click=open_upload>"Upload document"</button>
                    </div>
                </Show>

                <section class="profile-page__section">
                    <h2>"Documents"</h2>
                    <div class="card-grid">
                        {move || {
                            user.get()
                                .map(|u| u.uploads)
                                .unwrap_or_default()
                                .into_iter()
                                .map(|doc| view! { <FileCard doc=doc on_download=download /> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </section>
                <section class="profile-page__section">
                    <h2>"Events"</h2>
                    <ul>
                        {move || events.get().into_iter().map(|e| view! { <li>{e.event_name}</li> }).collect::<Vec<_>>()}
                    </ul>
                </section>
                <section class="profile-page__section">
                    <h2>"Projects"</h2>
                    <ul>
                        {move || projects.get().into_iter().map(|p| view! { <li>{p.project_name}</li> }).collect::<Vec<_>>()}
                    </ul>
                </section>
            </Show>

            <Show when=move || edit_open.get()>
                <FormDialog title="Edit Profile".to_owned() busy=busy on_save=save_profile
                    on_cancel=Callback::new(move |()| edit_open.set(false))>
                    <div class="dialog__row">
                        <TextField label="First name" field="firstName" form=profile_form errors=profile_errors
                            read=|f: &ProfileForm| f.first_name.clone() write=|f: &mut ProfileForm, v| f.first_name = v />
                        <TextField label="Last name" field="lastName" form=profile_form errors=profile_errors
                            read=|f: &ProfileForm| f.last_name.clone() write=|f: &mut ProfileForm, v| f.last_name = v />
                    </div>
                    <TextField label="Phone" field="phone" kind="tel" form=profile_form errors=profile_errors
                        read=|f: &ProfileForm| f.phone.clone() write=|f: &mut ProfileForm, v| f.phone = v />
                    <div class="dialog__row">
                        <TextField label="Grade" field="grade" form=profile_form errors=profile_errors
                            read=|f: &ProfileForm| f.grade.clone() write=|f: &mut ProfileForm, v| f.grade = v />
                        <TextField label="Institute" field="institute" form=profile_form errors=profile_errors
                            read=|f: &ProfileForm| f.institute.clone() write=|f: &mut ProfileForm, v| f.institute = v />
                    </div>
                    <div class="dialog__row">
                        <TextField label="Last diploma" field="lastDiploma" form=profile_form errors=profile_errors
                            read=|f: &ProfileForm| f.last_diploma.clone() write=|f: &mut ProfileForm, v| f.last_diploma = v />
                        <TextField label="Research area" field="researchArea" form=profile_form errors=profile_errors
                            read=|f: &ProfileForm| f.research_area.clone() write=|f: &mut ProfileForm, v| f.research_area = v />
                    </div>
                    <TextField label="LinkedIn URL" field="linkedInUrl" kind="url" form=profile_form errors=profile_errors
                        read=|f: &ProfileForm| f.linked_in_url.clone() write=|f: &mut ProfileForm, v| f.linked_in_url = v />
                </FormDialog>
            </Show>
            <Show when=move || upload_open.get()>
                <FileDialog form=upload_form errors=upload_errors title="Upload Document"
                    types=Signal::derive(Vec::new) picked=Some(picked) busy=busy
                    on_save=save_upload on_cancel=close_upload />
            </Show>
        </div>
    }
}
