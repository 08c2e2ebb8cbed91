//! Shared portal records, REST endpoint descriptors and client-side rules.
//!
//! This crate owns the wire representation used by both `client` (browser)
//! and `cli` (terminal). It performs no I/O: callers execute the
//! [`endpoints::Endpoint`] descriptors with whatever HTTP stack they carry.

pub mod display;
pub mod endpoints;
pub mod error;
pub mod forms;
pub mod model;
pub mod search;
pub mod token;

pub use error::{ApiError, FieldError};
pub use model::{Event, FileDocument, LoginRequest, Project, Role, SignupRequest, User, UserStatus};
