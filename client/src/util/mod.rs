//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, meta-tag
//! configuration, file pickers, downloads, browser-only tasks) from page and component logic.

pub mod auth;
pub mod config;
pub mod download;
pub mod picked_file;
pub mod storage;
pub mod task;
