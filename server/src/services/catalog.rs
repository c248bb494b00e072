//! Upstream catalog service — category menu fetch.
//!
//! The category tree is owned by the commerce backend; this module only
//! proxies it. Every fetch is fresh — the menu is small and the backend
//! already caches.

use shared::MenuEntry;

use super::account::CommerceConfig;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog service unreachable: {0}")]
    Upstream(String),
    #[error("catalog returned {0}")]
    Status(u16),
}

/// Fetch the current category menu from the commerce backend.
pub async fn fetch_menu(http: &reqwest::Client, config: &CommerceConfig) -> Result<Vec<MenuEntry>, CatalogError> {
    let resp = http
        .get(config.endpoint("catalog/menu"))
        .send()
        .await
        .map_err(|e| CatalogError::Upstream(e.to_string()))?;

    if !resp.status().is_success() {
        return Err(CatalogError::Status(resp.status().as_u16()));
    }

    resp.json::<Vec<MenuEntry>>()
        .await
        .map_err(|e| CatalogError::Upstream(e.to_string()))
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
