//! Events listing with multi-criteria search, enrollment and moderator CRUD.
//!
//! SYSTEM CONTEXT
//! ==============
//! Anyone may browse and search. Logged-in users get an "Enroll" action;
//! administrators additionally create, edit and delete events. Successful
//! mutations are applied to the local collection instead of refetching.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use leptos::prelude::*;
use records::forms::EventForm;
use records::model::EVENT_STATUSES;
use records::search::{EventFilter, parse_budget_range};
use records::{Event, FieldError};

use crate::components::confirm_dialog::{ConfirmDialog, PendingAction};
use crate::components::event_card::EventCard;
use crate::components::event_dialog::EventDialog;
use crate::components::form_field::{SelectField, TextField, options_of};
use crate::state::auth::AuthState;
use crate::state::collection::Collection;
use crate::state::modal::ModalState;
use crate::state::notify::{NoticeState, notify_error, notify_success};
use crate::util::task::spawn_browser;

/// Raw text of the search form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventSearchForm {
    pub name: String,
    pub location: String,
    pub status: String,
    pub budget_min: String,
    pub budget_max: String,
    pub start_after: String,
    pub end_before: String,
}

impl EventSearchForm {
    /// Filter for the current input.
    ///
    /// # Errors
    ///
    /// Returns the budget rule that the two budget inputs break.
    pub fn to_filter(&self) -> Result<EventFilter, FieldError> {
        Ok(EventFilter {
            name: self.name.trim().to_owned(),
            location: self.location.trim().to_owned(),
            status: self.status.clone(),
            budget: parse_budget_range(&self.budget_min, &self.budget_max)?,
            start_after: self.start_after.clone(),
            end_before: self.end_before.clone(),
        })
    }
}

#[component]
pub fn EventsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let events = RwSignal::new(Collection::<Event>::default());
    let search = RwSignal::new(EventSearchForm::default());
    let search_errors = RwSignal::new(Vec::<FieldError>::new());
    let modal = RwSignal::new(ModalState::<Event>::default());
    let form = RwSignal::new(EventForm::new_event());
    let form_errors = RwSignal::new(Vec::<FieldError>::new());
    let saving = RwSignal::new(false);
    let pending = RwSignal::new(None::<PendingAction>);

    events.update(Collection::begin_load);
    spawn_browser(async move {
        match crate::net::events::list().await {
            Ok(list) => events.update(|c| c.load(list)),
            Err(e) => {
                log::warn!("event list failed: {e}");
                events.update(|c| c.fail("Failed to load events".to_owned()));
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
        events.update(Collection::begin_load);
        spawn_browser(async move {
            let base = events.get_untracked().all;
            match crate::net::search::apply_filter(&filter, &base).await {
                Ok(outcome) => events.update(|c| c.show(outcome)),
                Err(e) => {
                    log::warn!("event search failed: {e}");
                    events.update(|c| c.fail("Search failed.".to_owned()));
                }
            }
        });
    };

    let on_clear = move |_| {
        search.set(EventSearchForm::default());
        search_errors.set(Vec::new());
        events.update(Collection::reset_filter);
    };

    let open_create = move |_| {
        form.set(EventForm::new_event());
        form_errors.set(Vec::new());
        modal.update(ModalState::open_create);
    };
    let open_edit = Callback::new(move |event: Event| {
        form.set(EventForm::from_event(&event));
        form_errors.set(Vec::new());
        modal.update(|m| m.open_edit(event));
    });
    let close_modal = Callback::new(move |()| modal.update(ModalState::close));

    let save = Callback::new(move |()| {
        if saving.get_untracked() {
            return;
        }
        let event = match form.get_untracked().to_event() {
            Ok(event) => event,
            Err(list) => {
                form_errors.set(list);
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

    let request_delete = Callback::new(move |id: String| pending.set(Some(PendingAction::delete("event", id))));
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
    let cancel_delete = Callback::new(move |()| pending.set(None));

    let enroll = Callback::new(move |event_id: String| {
        let Some(user_id) = auth.get_untracked().current_user_id() else {
            notify_error(notices, "Please log in to enroll.");
            return;
        };
        spawn_browser(async move {
            match crate::net::events::enroll(&event_id, &user_id).await {
                Ok(updated) => {
                    events.update(|c| c.apply_updated(updated));
                    notify_success(notices, "Enrolled in event");
                }
                Err(e) => notify_error(notices, e.user_message("enroll in event")),
            }
        });
    });

    let can_moderate = move || auth.get().can_moderate();

    view! {
        <div class="listing-page events-page">
            <header class="listing-page__header">
                <h1>"Events"</h1>
                <Show when=can_moderate>
                    <button class="btn btn--primary" on:click=open_create>"+ New Event"</button>
                </Show>
            </header>

            <form class="search-form" on:submit=on_search>
                <TextField label="Name" field="name" form=search errors=search_errors
                    read=|f: &EventSearchForm| f.name.clone() write=|f: &mut EventSearchForm, v| f.name = v />
                <TextField label="Location" field="location" form=search errors=search_errors
                    read=|f: &EventSearchForm| f.location.clone() write=|f: &mut EventSearchForm, v| f.location = v />
                <SelectField label="Status" field="status" form=search errors=search_errors
                    options=options_of(&EVENT_STATUSES)
                    read=|f: &EventSearchForm| f.status.clone() write=|f: &mut EventSearchForm, v| f.status = v />
                <TextField label="Min budget" field="budgetMin" kind="number" form=search errors=search_errors
                    read=|f: &EventSearchForm| f.budget_min.clone() write=|f: &mut EventSearchForm, v| f.budget_min = v />
                <TextField label="Max budget" field="budgetMax" kind="number" form=search errors=search_errors
                    read=|f: &EventSearchForm| f.budget_max.clone() write=|f: &mut EventSearchForm, v| f.budget_max = v />
                <TextField label="Starts after" field="startAfter" kind="date" form=search errors=search_errors
                    read=|f: &EventSearchForm| f.start_after.clone() write=|f: &mut EventSearchForm, v| f.start_after = v />
                <TextField label="Ends before" field="endBefore" kind="date" form=search errors=search_errors
                    read=|f: &EventSearchForm| f.end_before.clone() write=|f: &mut EventSearchForm, v| f.end_before = v />
                <div class="search-form__actions">
                    <button type="submit" class="btn btn--primary">"Search"</button>
                    <button type="button" class="btn" on:click=on_clear>"Clear"</button>
                </div>
            </form>

            <Show when=move || events.get().message.is_some()>
                <p class="listing-page__message">{move || events.get().message.unwrap_or_default()}</p>
            </Show>
            <Show when=move || !events.get().loading fallback=|| view! { <p>"Loading events..."</p> }>
                <div class="card-grid">
                    {move || {
                        let session = auth.get();
                        let moderator = session.can_moderate();
                        let member = session.is_logged_in();
                        events
                            .get()
                            .visible
                            .into_iter()
                            .map(|event| {
                                view! {
                                    <EventCard
                                        event=event
                                        on_enroll=member.then_some(enroll)
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
                <EventDialog
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
