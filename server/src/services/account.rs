//! Upstream account service — OTP login delegation and session revoke.

use shared::{OtpLogin, SanitizedUser};

/// Commerce backend configuration loaded from environment.
#[derive(Debug, Clone)]
pub struct CommerceConfig {
    pub base_url: String,
}

impl CommerceConfig {
    /// Load from `COMMERCE_API_URL`. Returns `None` if missing.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let base_url = std::env::var("COMMERCE_API_URL").ok()?;
        Some(Self { base_url })
    }

    /// Build an absolute upstream URL for the given path.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

/// Successful login payload returned by the auth backend.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct LoginSuccess {
    /// Opaque session token.
    pub token: String,
    /// Client-safe user projection to store in the `user` cookie.
    pub user: SanitizedUser,
}

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    /// The auth backend rejected the credential; the message is surfaced
    /// to the caller verbatim.
    #[error("{0}")]
    Rejected(String),
    #[error("auth service unreachable: {0}")]
    Upstream(String),
}

/// Message surfaced to the caller when the auth backend rejects a login.
pub(crate) fn rejection_message(status: u16, body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("login rejected: {status}")
    } else {
        trimmed.to_owned()
    }
}

/// Delegate an OTP login to the auth backend.
pub async fn login(
    http: &reqwest::Client,
    config: &CommerceConfig,
    credential: &OtpLogin,
) -> Result<LoginSuccess, AccountError> {
    let resp = http
        .post(config.endpoint("account/login"))
        .json(credential)
        .send()
        .await
        .map_err(|e| AccountError::Upstream(e.to_string()))?;

    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        return Err(AccountError::Rejected(rejection_message(status, &body)));
    }

    resp.json::<LoginSuccess>()
        .await
        .map_err(|e| AccountError::Upstream(e.to_string()))
}

/// Revoke the upstream session for the given token.
///
/// Callers treat this as best-effort; the local cookies are cleared
/// regardless of the outcome.
pub async fn sign_out(http: &reqwest::Client, config: &CommerceConfig, token: &str) -> Result<(), AccountError> {
    let resp = http
        .get(config.endpoint("account/sign-out"))
        .header("Authorization", format!("Bearer {token}"))
        .send()
        .await
        .map_err(|e| AccountError::Upstream(e.to_string()))?;

    if !resp.status().is_success() {
        return Err(AccountError::Upstream(format!("sign-out returned {}", resp.status())));
    }
    Ok(())
}

#[cfg(test)]
#[path = "account_test.rs"]
mod tests;
