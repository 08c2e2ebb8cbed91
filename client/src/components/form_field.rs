//! Labeled form inputs bound to one field of a form struct.
//!
//! DESIGN
//! ======
//! A dialog keeps its whole form in one `RwSignal<F>`. Each input reads its
//! field through a plain `fn` getter and writes through a setter, so the
//! form structs from `records::forms` stay free of reactive types.
//! Validation errors are matched to inputs by wire field name.

#[cfg(test)]
#[path = "form_field_test.rs"]
mod form_field_test;

use leptos::prelude::*;
use records::FieldError;

/// First error message reported for `field`, if any.
pub fn field_message(errors: &[FieldError], field: &str) -> Option<String> {
    errors.iter().find(|e| e.field == field).map(|e| e.message.clone())
}

#[component]
fn FieldMessage(errors: RwSignal<Vec<FieldError>>, field: &'static str) -> impl IntoView {
    move || {
        errors
            .with(|list| field_message(list, field))
            .map(|message| view! { <span class="field__error">{message}</span> })
    }
}

/// Single-line input.
#[component]
pub fn TextField<F>(
    label: &'static str,
    field: &'static str,
    form: RwSignal<F>,
    read: fn(&F) -> String,
    write: fn(&mut F, String),
    errors: RwSignal<Vec<FieldError>>,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView
where
    F: Send + Sync + 'static,
{
    view! {
        <label class="dialog__label" class:field--invalid=move || errors.with(|e| field_message(e, field).is_some())>
            {label}
            <input
                class="dialog__input"
                type=kind
                name=field
                placeholder=placeholder
                prop:value=move || form.with(read)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| write(f, value));
                }
            />
            <FieldMessage errors=errors field=field />
        </label>
    }
}

/// Multi-line input.
#[component]
pub fn TextAreaField<F>(
    label: &'static str,
    field: &'static str,
    form: RwSignal<F>,
    read: fn(&F) -> String,
    write: fn(&mut F, String),
    errors: RwSignal<Vec<FieldError>>,
) -> impl IntoView
where
    F: Send + Sync + 'static,
{
    view! {
        <label class="dialog__label">
            {label}
            <textarea
                class="dialog__input dialog__input--area"
                name=field
                prop:value=move || form.with(read)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| write(f, value));
                }
            ></textarea>
            <FieldMessage errors=errors field=field />
        </label>
    }
}

/// Drop-down over `options`; the first entry is an empty "Select" choice.
#[component]
pub fn SelectField<F>(
    label: &'static str,
    field: &'static str,
    form: RwSignal<F>,
    read: fn(&F) -> String,
    write: fn(&mut F, String),
    errors: RwSignal<Vec<FieldError>>,
    #[prop(into)] options: Signal<Vec<String>>,
) -> impl IntoView
where
    F: Send + Sync + 'static,
{
    view! {
        <label class="dialog__label">
            {label}
            <select
                class="dialog__input"
                name=field
                prop:value=move || form.with(read)
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| write(f, value));
                }
            >
                <option value="">"Select"</option>
                {move || {
                    let current = form.with(read);
                    options
                        .get()
                        .into_iter()
                        .map(|opt| {
                            let selected = opt == current;
                            view! {
                                <option value=opt.clone() selected=selected>
                                    {opt.clone()}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </select>
            <FieldMessage errors=errors field=field />
        </label>
    }
}

/// Static option list helper for the status and role selects.
pub fn options_of(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}
