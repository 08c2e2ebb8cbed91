//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (loading, search, mutations)
//! and delegates rendering details to `components`.

pub mod admin;
pub mod events;
pub mod files;
pub mod home;
pub mod login;
pub mod profile;
pub mod projects;
pub mod signup;
