//! Create/edit form for projects.

use leptos::prelude::*;
use records::FieldError;
use records::forms::ProjectForm;
use records::model::PROJECT_STATUSES;

use super::form_dialog::FormDialog;
use super::form_field::{SelectField, TextAreaField, TextField, options_of};

#[component]
pub fn ProjectDialog(
    form: RwSignal<ProjectForm>,
    errors: RwSignal<Vec<FieldError>>,
    editing: bool,
    #[prop(optional, into)] busy: Signal<bool>,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let title = if editing { "Edit Project" } else { "Create Project" };

    view! {
        <FormDialog title=title.to_owned() busy=busy on_save=on_save on_cancel=on_cancel>
            <TextField label="Project name" field="projectName" form=form errors=errors
                read=|f: &ProjectForm| f.project_name.clone() write=|f: &mut ProjectForm, v| f.project_name = v />
            <TextAreaField label="Description" field="description" form=form errors=errors
                read=|f: &ProjectForm| f.description.clone() write=|f: &mut ProjectForm, v| f.description = v />
            <SelectField label="Status" field="status" form=form errors=errors options=options_of(&PROJECT_STATUSES)
                read=|f: &ProjectForm| f.status.clone() write=|f: &mut ProjectForm, v| f.status = v />
            <div class="dialog__row">
                <TextField label="Start date" field="startDate" kind="date" form=form errors=errors
                    read=|f: &ProjectForm| f.start_date.clone() write=|f: &mut ProjectForm, v| f.start_date = v />
                <TextField label="End date" field="endDate" kind="date" form=form errors=errors
                    read=|f: &ProjectForm| f.end_date.clone() write=|f: &mut ProjectForm, v| f.end_date = v />
            </div>
            <div class="dialog__row">
                <TextField label="Budget" field="budget" kind="number" form=form errors=errors
                    read=|f: &ProjectForm| f.budget.clone() write=|f: &mut ProjectForm, v| f.budget = v />
                <TextField label="Max team members" field="maxTeamMembers" kind="number" form=form errors=errors
                    read=|f: &ProjectForm| f.max_team_members.clone() write=|f: &mut ProjectForm, v| f.max_team_members = v />
            </div>
        </FormDialog>
    }
}
