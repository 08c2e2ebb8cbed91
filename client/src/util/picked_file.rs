//! File chosen through an `<input type="file">`.
//!
//! Name, MIME type and size are copied out so validation runs without
//! touching the DOM; the browser handle rides along for the upload itself.

/// A single selected file.
#[derive(Clone, Debug)]
pub struct PickedFile {
    pub name: String,
    pub mime: String,
    pub size: u64,
    #[cfg(feature = "hydrate")]
    pub(crate) handle: web_sys::File,
}

impl PickedFile {
    /// First file of the input that fired `ev`, if any.
    pub fn from_input_event(ev: &leptos::ev::Event) -> Option<Self> {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
            let file = input.files()?.get(0)?;
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let size = file.size() as u64;
            Some(Self { name: file.name(), mime: file.type_(), size, handle: file })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
            None
        }
    }
}
