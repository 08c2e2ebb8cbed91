//! Browser-side background work.
//!
//! DESIGN
//! ======
//! Page and component handlers build their backend futures on every build,
//! so both renders type-check the same code. Only the hydrated browser runs
//! them; a server render drops the future unpolled and issues no calls.

#[cfg(test)]
#[path = "task_test.rs"]
mod task_test;

use std::future::Future;

/// Run `fut` on the browser's local executor.
pub fn spawn_browser<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(fut);
    #[cfg(not(feature = "hydrate"))]
    drop(fut);
}
