//! Create/edit form for events, used by the events page and the admin console.

use leptos::prelude::*;
use records::FieldError;
use records::forms::EventForm;
use records::model::EVENT_STATUSES;

use super::form_dialog::FormDialog;
use super::form_field::{SelectField, TextAreaField, TextField, options_of};

#[component]
pub fn EventDialog(
    form: RwSignal<EventForm>,
    errors: RwSignal<Vec<FieldError>>,
    editing: bool,
    #[prop(optional, into)] busy: Signal<bool>,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let title = if editing { "Edit Event" } else { "Create Event" };
    let statuses = options_of(&EVENT_STATUSES);

    view! {
        <FormDialog title=title.to_owned() busy=busy on_save=on_save on_cancel=on_cancel>
            <TextField label="Event name" field="eventName" form=form errors=errors
                read=|f: &EventForm| f.event_name.clone() write=|f: &mut EventForm, v| f.event_name = v />
            <TextField label="Location" field="location" form=form errors=errors
                read=|f: &EventForm| f.location.clone() write=|f: &mut EventForm, v| f.location = v />
            <div class="dialog__row">
                <TextField label="Start date" field="startDate" kind="date" form=form errors=errors
                    read=|f: &EventForm| f.start_date.clone() write=|f: &mut EventForm, v| f.start_date = v />
                <TextField label="End date" field="endDate" kind="date" form=form errors=errors
                    read=|f: &EventForm| f.end_date.clone() write=|f: &mut EventForm, v| f.end_date = v />
            </div>
            <div class="dialog__row">
                <TextField label="Budget" field="budget" kind="number" form=form errors=errors
                    read=|f: &EventForm| f.budget.clone() write=|f: &mut EventForm, v| f.budget = v />
                <TextField label="Max participants" field="maxParticipants" kind="number" form=form errors=errors
                    read=|f: &EventForm| f.max_participants.clone() write=|f: &mut EventForm, v| f.max_participants = v />
                <TextField label="Available places" field="availablePlaces" kind="number" form=form errors=errors
                    read=|f: &EventForm| f.available_places.clone() write=|f: &mut EventForm, v| f.available_places = v />
            </div>
            <SelectField label="Status" field="status" form=form errors=errors options=statuses
                read=|f: &EventForm| f.status.clone() write=|f: &mut EventForm, v| f.status = v />
            <TextField label="Image URL" field="image" form=form errors=errors
                read=|f: &EventForm| f.image.clone() write=|f: &mut EventForm, v| f.image = v />
            <TextAreaField label="Description" field="description" form=form errors=errors
                read=|f: &EventForm| f.description.clone() write=|f: &mut EventForm, v| f.description = v />
        </FormDialog>
    }
}
