//! Browser downloads: fetch stored documents and save bytes through a
//! temporary object URL and anchor click.

use leptos::prelude::RwSignal;
use records::FileDocument;
use records::display::download_error_message;

use crate::state::notify::{NoticeState, notify_error};
use crate::util::task::spawn_browser;

/// Offer `bytes` to the user as a file called `name`.
///
/// # Errors
///
/// Returns an error string when the browser refuses to build the blob or
/// the object URL.
pub fn save_bytes(name: &str, bytes: &[u8]) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let array = js_sys::Uint8Array::from(bytes);
        let parts = js_sys::Array::of1(&array);
        let blob = web_sys::Blob::new_with_u8_array_sequence(&parts).map_err(|e| format!("{e:?}"))?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| format!("{e:?}"))?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| "no document".to_owned())?;
        let anchor = document
            .create_element("a")
            .map_err(|e| format!("{e:?}"))?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| "anchor cast failed".to_owned())?;
        anchor.set_href(&url);
        anchor.set_download(name);
        anchor.click();
        let _ = web_sys::Url::revoke_object_url(&url);
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, bytes);
        Err("not available on server".to_owned())
    }
}

/// Fetch `doc` and offer it as a download. Failures become error notices.
pub fn download_document(doc: FileDocument, notices: RwSignal<NoticeState>) {
    spawn_browser(async move {
        let email = crate::util::storage::email();
        match crate::net::files::download(&doc, email.as_deref()).await {
            Ok((name, bytes)) => {
                if let Err(e) = save_bytes(&name, &bytes) {
                    notify_error(notices, format!("Failed to download file: {e}"));
                }
            }
            Err(e) => {
                log::warn!("download of {} failed: {e}", doc.id);
                notify_error(notices, download_error_message(&e));
            }
        }
    });
}
