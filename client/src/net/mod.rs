//! Networking modules for the portal REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` executes `records::endpoints` descriptors; the resource modules
//! (`users`, `events`, `projects`, `files`, `admin`) wrap them in typed
//! calls, and `search` runs the multi-criteria listing filters.

pub(crate) mod http;

pub mod admin;
pub mod events;
pub mod files;
pub mod projects;
pub mod search;
pub mod users;
