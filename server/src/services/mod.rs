//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the delegated upstream calls so route handlers can
//! stay focused on protocol translation and cookie plumbing.

pub mod account;
pub mod catalog;
