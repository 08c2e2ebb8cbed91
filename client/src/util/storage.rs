//! Browser `localStorage` access for the session token and email.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token and email survive reloads under the `authToken` and `userEmail`
//! keys. Every request reads the token from here, so a logout in another tab
//! takes effect on the next call. SSR builds have no storage and read nothing.

use records::endpoints::{EMAIL_STORAGE_KEY, TOKEN_STORAGE_KEY};

/// Read a raw string value for `key`.
pub fn get_item(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten().filter(|v| !v.is_empty())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Store a raw string value for `key`.
pub fn set_item(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            log::warn!("localStorage write failed for {key}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

pub fn remove_item(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

/// Stored bearer token, if any.
pub fn token() -> Option<String> {
    get_item(TOKEN_STORAGE_KEY)
}

/// Stored login email, if any.
pub fn email() -> Option<String> {
    get_item(EMAIL_STORAGE_KEY)
}

/// Persist a fresh session.
pub fn save_session(token: &str, email: &str) {
    set_item(TOKEN_STORAGE_KEY, token);
    set_item(EMAIL_STORAGE_KEY, email);
}

/// Forget the stored session.
pub fn clear_session() {
    remove_item(TOKEN_STORAGE_KEY);
    remove_item(EMAIL_STORAGE_KEY);
}
