//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, listings, notices, modals) so pages and
//! components depend on small focused models provided through context.

pub mod auth;
pub mod collection;
pub mod modal;
pub mod notify;
