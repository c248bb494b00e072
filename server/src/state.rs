//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! There is no database and no server-side session store: sessions live
//! entirely in the response cookies, so the state reduces to the upstream
//! commerce configuration and a shared HTTP client for delegated calls.

use crate::services::account::CommerceConfig;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — all inner fields are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Pooled HTTP client for upstream commerce calls.
    pub http: reqwest::Client,
    /// Upstream commerce backend configuration.
    pub commerce: CommerceConfig,
}

impl AppState {
    #[must_use]
    pub fn new(commerce: CommerceConfig) -> Self {
        Self { http: reqwest::Client::new(), commerce }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// Create a test `AppState` pointed at an unreachable upstream so
    /// delegated calls fail fast without touching the network.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(CommerceConfig { base_url: "http://127.0.0.1:9/api".to_owned() })
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
