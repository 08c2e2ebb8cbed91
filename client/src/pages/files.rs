//! File library: search, download, upload for members, metadata edits and
//! deletion for moderators.
//!
//! SYSTEM CONTEXT
//! ==============
//! Uploads go through `/users/{email}/uploads`, which answers with the
//! owner's record; the new document is its last upload. Downloads resolve
//! the stored filename from the document and fetch `/users/uploads/{filename}`.

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

use leptos::prelude::*;
use records::forms::{FileForm, UploadRules, prepare_upload};
use records::search::FileFilter;
use records::{FieldError, FileDocument, User};

use crate::components::confirm_dialog::{ConfirmDialog, PendingAction};
use crate::components::file_card::FileCard;
use crate::components::file_dialog::FileDialog;
use crate::components::form_field::{SelectField, TextField};
use crate::state::auth::AuthState;
use crate::state::collection::Collection;
use crate::state::modal::ModalState;
use crate::state::notify::{NoticeState, notify_error, notify_success};
use crate::util::download::download_document;
use crate::util::picked_file::PickedFile;
use crate::util::task::spawn_browser;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileSearchForm {
    pub title: String,
    pub keyword: String,
    pub author: String,
    pub file_type: String,
    pub date_after: String,
    pub date_before: String,
}

impl FileSearchForm {
    pub fn to_filter(&self) -> FileFilter {
        FileFilter {
            title: self.title.trim().to_owned(),
            keyword: self.keyword.trim().to_owned(),
            author: self.author.trim().to_owned(),
            file_type: self.file_type.clone(),
            date_after: self.date_after.clone(),
            date_before: self.date_before.clone(),
        }
    }
}

/// Document just added by an upload: the owner's most recent upload.
pub fn uploaded_document(owner: &User) -> Option<FileDocument> {
    owner.uploads.last().cloned()
}

#[component]
pub fn FilesPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let files = RwSignal::new(Collection::<FileDocument>::default());
    let types = RwSignal::new(Vec::<String>::new());
    let search = RwSignal::new(FileSearchForm::default());
    let search_errors = RwSignal::new(Vec::<FieldError>::new());
    let modal = RwSignal::new(ModalState::<FileDocument>::default());
    let form = RwSignal::new(FileForm::default());
    let form_errors = RwSignal::new(Vec::<FieldError>::new());
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
                log::warn!("file list failed: {e}");
                files.update(|c| c.fail("Failed to load files".to_owned()));
            }
        }
    });

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let filter = search.get_untracked().to_filter();
        files.update(Collection::begin_load);
        spawn_browser(async move {
            let base = files.get_untracked().all;
            match crate::net::search::apply_filter(&filter, &base).await {
                Ok(outcome) => files.update(|c| c.show(outcome)),
                Err(e) => {
                    log::warn!("file search failed: {e}");
                    files.update(|c| c.fail("Search failed.".to_owned()));
                }
            }
        });
    };
    let on_clear = move |_| {
        search.set(FileSearchForm::default());
        files.update(Collection::reset_filter);
    };

    let open_upload = move |_| {
        if !auth.get_untracked().is_logged_in() {
            notify_error(notices, "Please log in to upload a file.");
            return;
        }
        form.set(FileForm::default());
        form_errors.set(Vec::new());
        picked.set(None);
        modal.update(ModalState::open_create);
    };
    let open_edit = Callback::new(move |doc: FileDocument| {
        form.set(FileForm::from_document(&doc));
        form_errors.set(Vec::new());
        modal.update(|m| m.open_edit(doc));
    });
    let close_modal = Callback::new(move |()| {
        picked.set(None);
        modal.update(ModalState::close);
    });

    let save_upload = Callback::new(move |()| {
        if saving.get_untracked() {
            return;
        }
        let file = picked.get_untracked();
        let meta = match prepare_upload(
            file.as_ref().map(|f| (f.mime.as_str(), f.size)),
            &form.get_untracked(),
            UploadRules::Library,
        ) {
            Ok(meta) => meta,
            Err(list) => {
                form_errors.set(list);
                return;
            }
        };
        let (Some(file), Some(email)) = (file, auth.get_untracked().current_email()) else {
            notify_error(notices, "User email not found. Please log in.");
            return;
        };
        saving.set(true);
        spawn_browser(async move {
            match crate::net::files::upload(&email, &file, &meta).await {
                Ok(owner) => {
                    if let Some(doc) = uploaded_document(&owner) {
                        files.update(|c| c.apply_created(doc));
                    }
                    picked.set(None);
                    modal.update(ModalState::close);
                    notify_success(notices, "File uploaded successfully");
                }
                Err(e) => notify_error(notices, e.user_message("upload file")),
            }
            saving.set(false);
        });
    });

    let save_edit = Callback::new(move |()| {
        if saving.get_untracked() {
            return;
        }
        let Some(id) = modal.get_untracked().editing.map(|d| d.id) else {
            return;
        };
        let meta = match form.get_untracked().to_metadata(UploadRules::Library) {
            Ok(meta) => meta,
            Err(list) => {
                form_errors.set(list);
                return;
            }
        };
        saving.set(true);
        spawn_browser(async move {
            match crate::net::files::update(&id, &meta).await {
                Ok(saved) => {
                    files.update(|c| c.apply_updated(saved));
                    modal.update(ModalState::close);
                    notify_success(notices, "File updated successfully");
                }
                Err(e) => notify_error(notices, e.user_message("update file")),
            }
            saving.set(false);
        });
    });

    let download = Callback::new(move |doc: FileDocument| download_document(doc, notices));

    let request_delete = Callback::new(move |id: String| pending.set(Some(PendingAction::delete("file", id))));
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
    let cancel_delete = Callback::new(move |()| pending.set(None));

    view! {
        <div class="listing-page files-page">
            <header class="listing-page__header">
                <h1>"Files"</h1>
                <button class="btn btn--primary" on:click=open_upload>"Upload"</button>
            </header>

            <form class="search-form" on:submit=on_search>
                <TextField label="Title" field="title" form=search errors=search_errors
                    read=|f: &FileSearchForm| f.title.clone() write=|f: &mut FileSearchForm, v| f.title = v />
                <TextField label="Keyword" field="keyword" form=search errors=search_errors
                    read=|f: &FileSearchForm| f.keyword.clone() write=|f: &mut FileSearchForm, v| f.keyword = v />
                <TextField label="Author" field="author" form=search errors=search_errors
                    read=|f: &FileSearchForm| f.author.clone() write=|f: &mut FileSearchForm, v| f.author = v />
                <SelectField label="Type" field="fileType" form=search errors=search_errors options=types
                    read=|f: &FileSearchForm| f.file_type.clone() write=|f: &mut FileSearchForm, v| f.file_type = v />
                <TextField label="Published after" field="dateAfter" kind="date" form=search errors=search_errors
                    read=|f: &FileSearchForm| f.date_after.clone() write=|f: &mut FileSearchForm, v| f.date_after = v />
                <TextField label="Published before" field="dateBefore" kind="date" form=search errors=search_errors
                    read=|f: &FileSearchForm| f.date_before.clone() write=|f: &mut FileSearchForm, v| f.date_before = v />
                <div class="search-form__actions">
                    <button type="submit" class="btn btn--primary">"Search"</button>
                    <button type="button" class="btn" on:click=on_clear>"Clear"</button>
                </div>
            </form>

            <Show when=move || files.get().message.is_some()>
                <p class="listing-page__message">{move || files.get().message.unwrap_or_default()}</p>
            </Show>
            <Show when=move || !files.get().loading fallback=|| view! { <p>"Loading files..."</p> }>
                <div class="card-grid">
                    {move || {
                        let moderator = auth.get().can_moderate();
                        files
                            .get()
                            .visible
                            .into_iter()
                            .map(|doc| {
                                view! {
                                    <FileCard
                                        doc=doc
                                        on_download=download
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
                {move || {
                    if modal.get_untracked().is_editing() {
                        view! {
                            <FileDialog form=form errors=form_errors title="Edit File" types=types
                                busy=saving on_save=save_edit on_cancel=close_modal />
                        }
                        .into_any()
                    } else {
                        view! {
                            <FileDialog form=form errors=form_errors title="Upload File" types=types
                                picked=Some(picked) busy=saving on_save=save_upload on_cancel=close_modal />
                        }
                        .into_any()
                    }
                }}
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
