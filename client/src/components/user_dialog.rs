//! Admin console form for creating and editing accounts.

use leptos::prelude::*;
use records::forms::UserForm;
use records::{FieldError, Role};

use super::form_dialog::FormDialog;
use super::form_field::{SelectField, TextField, options_of};

const USER_STATUSES: [&str; 3] = ["APPROVED", "PENDING", "DECLINED"];

#[component]
pub fn UserDialog(
    form: RwSignal<UserForm>,
    errors: RwSignal<Vec<FieldError>>,
    editing: bool,
    #[prop(optional, into)] busy: Signal<bool>,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let title = if editing { "Edit User" } else { "Create User" };
    let roles: Vec<String> = Role::assignable().iter().map(|r| r.as_str().to_owned()).collect();

    view! {
        <FormDialog title=title.to_owned() busy=busy on_save=on_save on_cancel=on_cancel>
            <div class="dialog__row">
                <TextField label="First name" field="firstName" form=form errors=errors
                    read=|f: &UserForm| f.first_name.clone() write=|f: &mut UserForm, v| f.first_name = v />
                <TextField label="Last name" field="lastName" form=form errors=errors
                    read=|f: &UserForm| f.last_name.clone() write=|f: &mut UserForm, v| f.last_name = v />
            </div>
            <TextField label="Email" field="email" kind="email" form=form errors=errors
                read=|f: &UserForm| f.email.clone() write=|f: &mut UserForm, v| f.email = v />
            {(!editing).then(|| view! {
                <TextField label="Password" field="password" kind="password" form=form errors=errors
                    read=|f: &UserForm| f.password.clone() write=|f: &mut UserForm, v| f.password = v />
            })}
            <div class="dialog__row">
                <SelectField label="Role" field="role" form=form errors=errors options=roles
                    read=|f: &UserForm| f.role.clone() write=|f: &mut UserForm, v| f.role = v />
                <SelectField label="Status" field="status" form=form errors=errors options=options_of(&USER_STATUSES)
                    read=|f: &UserForm| f.status.clone() write=|f: &mut UserForm, v| f.status = v />
            </div>
            <div class="dialog__row">
                <TextField label="Date of birth" field="dateOfBirth" kind="date" form=form errors=errors
                    read=|f: &UserForm| f.date_of_birth.clone() write=|f: &mut UserForm, v| f.date_of_birth = v />
                <TextField label="Phone" field="phone" kind="tel" form=form errors=errors
                    read=|f: &UserForm| f.phone.clone() write=|f: &mut UserForm, v| f.phone = v />
            </div>
            <div class="dialog__row">
                <TextField label="Grade" field="grade" form=form errors=errors
                    read=|f: &UserForm| f.grade.clone() write=|f: &mut UserForm, v| f.grade = v />
                <TextField label="Institute" field="institute" form=form errors=errors
                    read=|f: &UserForm| f.institute.clone() write=|f: &mut UserForm, v| f.institute = v />
            </div>
            <div class="dialog__row">
                <TextField label="Last diploma" field="lastDiploma" form=form errors=errors
                    read=|f: &UserForm| f.last_diploma.clone() write=|f: &mut UserForm, v| f.last_diploma = v />
                <TextField label="Research area" field="researchArea" form=form errors=errors
                    read=|f: &UserForm| f.research_area.clone() write=|f: &mut UserForm, v| f.research_area = v />
            </div>
        </FormDialog>
    }
}
