//! Environment helpers for the app shell.

use crate::core::config::DEFAULT_API_BASE_URL;
use gloo::utils::document;

/// `<meta name="...">` tag the host page may use to point at another API server.
pub(crate) const API_BASE_META: &str = "jam-api-base";

pub(crate) fn api_base_url() -> String {
    document()
        .query_selector(&format!("meta[name=\"{API_BASE_META}\"]"))
        .ok()
        .flatten()
        .and_then(|meta| meta.get_attribute("content"))
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

/// Ask the user to confirm a destructive action.
pub(crate) fn confirm(message: &str) -> bool {
    gloo::dialogs::confirm(message)
}
