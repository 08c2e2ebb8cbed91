//! Card for one document in the file library and on the profile page.

use leptos::prelude::*;
use records::FileDocument;
use records::display::{file_extension, short_date};

#[component]
pub fn FileCard(
    doc: FileDocument,
    on_download: Callback<FileDocument>,
    #[prop(default = None)] on_edit: Option<Callback<FileDocument>>,
    #[prop(default = None)] on_delete: Option<Callback<String>>,
) -> impl IntoView {
    let id = doc.id.clone();
    let ext = file_extension(doc.filename.as_deref().unwrap_or_default());
    let title = doc.title.clone().filter(|t| !t.is_empty()).or_else(|| doc.filename.clone()).unwrap_or_default();
    let authors = doc.authors.join(", ");
    let keywords = doc.keywords.join(", ");
    let published = doc.publication_date.as_deref().map(short_date).unwrap_or_default();
    let file_type = doc.file_type.clone().unwrap_or_default();
    let doi = doc.doi.clone().filter(|d| !d.is_empty());
    let summary = doc.abstract_text.clone().unwrap_or_default();
    let download_target = doc.clone();
    let edit_target = doc;

    view! {
        <article class="card file-card">
            <header class="card__header">
                <span class="file-card__ext">{ext}</span>
                <h3 class="card__title">{title}</h3>
                <span class="badge">{file_type}</span>
            </header>
            <p class="card__meta">{authors}</p>
            <p class="card__meta">{published}</p>
            {doi.map(|d| view! { <p class="card__meta">"DOI: "{d}</p> })}
            <p class="card__body">{summary}</p>
            <p class="card__meta file-card__keywords">{keywords}</p>
            <div class="card__actions">
                <button class="btn btn--primary" on:click=move |_| on_download.run(download_target.clone())>
                    "Download"
                </button>
                {on_edit.map(|cb| {
                    view! { <button class="btn" on:click=move |_| cb.run(edit_target.clone())>"Edit"</button> }
                })}
                {on_delete.map(|cb| {
                    view! { <button class="btn btn--danger" on:click=move |_| cb.run(id.clone())>"Delete"</button> }
                })}
            </div>
        </article>
    }
}
