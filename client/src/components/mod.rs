//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render storefront chrome while reading/writing shared state
//! from Leptos context providers.

pub mod menu;
