//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `menu`) so components can depend on
//! small focused models; the models themselves are plain data, wrapped in
//! `RwSignal`s by the components that own them.

pub mod auth;
pub mod menu;
