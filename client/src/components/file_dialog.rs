//! Upload and metadata-edit form for documents.
//!
//! The file picker is shown only when `picked` is given, i.e. for a new
//! upload. Choosing the `custom` type reveals a free-text type input.

use leptos::prelude::*;
use records::FieldError;
use records::forms::{CUSTOM_FILE_TYPE, FileForm};

use super::form_dialog::FormDialog;
use super::form_field::{SelectField, TextAreaField, TextField, field_message};
use crate::util::picked_file::PickedFile;

#[component]
pub fn FileDialog(
    form: RwSignal<FileForm>,
    errors: RwSignal<Vec<FieldError>>,
    #[prop(into)] title: String,
    #[prop(into)] types: Signal<Vec<String>>,
    #[prop(default = None)] picked: Option<RwSignal<Option<PickedFile>, LocalStorage>>,
    #[prop(optional, into)] busy: Signal<bool>,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let type_options = Signal::derive(move || {
        let mut options = types.get();
        options.push(CUSTOM_FILE_TYPE.to_owned());
        options
    });
    let custom_selected = move || form.with(|f| f.file_type == CUSTOM_FILE_TYPE);

    view! {
        <FormDialog title=title submit_label=if picked.is_some() { "Upload" } else { "Save" } busy=busy on_save=on_save on_cancel=on_cancel>
            {picked.map(|picked| {
                let chosen = move || picked.with(|p| p.as_ref().map(|f| format!("{} ({} bytes)", f.name, f.size)));
                view! {
                    <label class="dialog__label">
                        "File"
                        <input
                            class="dialog__input"
                            type="file"
                            name="file"
                            on:change=move |ev| picked.set(PickedFile::from_input_event(&ev))
                        />
                        <span class="dialog__hint">{chosen}</span>
                        {move || {
                            errors
                                .with(|e| field_message(e, "file"))
                                .map(|m| view! { <span class="field__error">{m}</span> })
                        }}
                    </label>
                }
            })}
            <TextField label="Title" field="title" form=form errors=errors
                read=|f: &FileForm| f.title.clone() write=|f: &mut FileForm, v| f.title = v />
            <TextField label="Authors (comma-separated)" field="authors" form=form errors=errors
                read=|f: &FileForm| f.authors.clone() write=|f: &mut FileForm, v| f.authors = v />
            <TextField label="Affiliations (comma-separated)" field="affiliations" form=form errors=errors
                read=|f: &FileForm| f.affiliations.clone() write=|f: &mut FileForm, v| f.affiliations = v />
            <TextField label="Keywords (comma-separated)" field="keywords" form=form errors=errors
                read=|f: &FileForm| f.keywords.clone() write=|f: &mut FileForm, v| f.keywords = v />
            <TextField label="Publication date" field="publicationDate" kind="date" form=form errors=errors
                read=|f: &FileForm| f.publication_date.clone() write=|f: &mut FileForm, v| f.publication_date = v />
            <TextField label="DOI" field="doi" form=form errors=errors
                read=|f: &FileForm| f.doi.clone() write=|f: &mut FileForm, v| f.doi = v />
            <SelectField label="File type" field="fileType" form=form errors=errors options=type_options
                read=|f: &FileForm| f.file_type.clone() write=|f: &mut FileForm, v| f.file_type = v />
            <Show when=custom_selected>
                <TextField label="Custom file type" field="customFileType" form=form errors=errors
                    read=|f: &FileForm| f.custom_file_type.clone() write=|f: &mut FileForm, v| f.custom_file_type = v />
            </Show>
            <TextAreaField label="Abstract" field="abstractText" form=form errors=errors
                read=|f: &FileForm| f.abstract_text.clone() write=|f: &mut FileForm, v| f.abstract_text = v />
        </FormDialog>
    }
}
