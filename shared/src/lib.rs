//! Shared DTOs for the storefront client/server boundary.
//!
//! This crate owns the wire representation used by both `server` and
//! `client`: the login credential, the client-safe user projection stored
//! in the `user` cookie, and the category records rendered by the menu.
//! Field names serialize in camelCase so payloads match the storefront
//! wire format (`firstName`, `subCategories`).

use serde::{Deserialize, Serialize};

/// One-time-password login credential.
///
/// Transient input to `POST /api/account/login`; never persisted beyond
/// the request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpLogin {
    /// Address the one-time code was issued to.
    pub email: String,
    /// The one-time code itself.
    pub otp: String,
}

/// Client-safe projection of a full user record.
///
/// Owned by whichever `user` cookie currently holds it; there is no
/// server-side session store behind it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SanitizedUser {
    /// Unique user identifier.
    pub id: String,
    /// Display name used by the menu greeting.
    pub first_name: String,
    /// Account email address, if exposed by the auth backend.
    #[serde(default)]
    pub email: Option<String>,
}

/// A product category as supplied by the commerce backend.
///
/// Read-only in this repository; sub-categories share the shape with one
/// level of nesting in practice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
    /// Unique category identifier.
    pub id: String,
    /// Category name, also the `/product-category/{name}` path segment.
    pub name: String,
    /// Image URLs for the category tile; the menu renders the first.
    #[serde(default)]
    pub images: Vec<String>,
    /// Nested sub-categories.
    #[serde(default)]
    pub sub_categories: Vec<MenuEntry>,
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
