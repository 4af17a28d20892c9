//! Pure URL and query helpers extracted from components for non-wasm testing.

/// Offset/limit pair sent with a collection page request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    /// Index of the first row.
    pub offset: u64,
    /// Maximum rows returned.
    pub limit: u32,
}

/// Join the API base URL and a path without doubling slashes.
#[must_use]
pub fn join_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// Path for listing collection metadata.
#[must_use]
pub const fn collections_path() -> &'static str {
    "/collections"
}

/// Path for one page of a collection.
#[must_use]
pub fn collection_page_path(collection_id: &str, window: PageWindow) -> String {
    format!(
        "/collections/{}?offset={}&limit={}",
        urlencoding::encode(collection_id),
        window.offset,
        window.limit
    )
}

/// Path for adding a company to a collection.
#[must_use]
pub fn membership_path(collection_id: &str) -> String {
    format!("/collections/{}/companies", urlencoding::encode(collection_id))
}

/// Path for removing one company from a collection.
#[must_use]
pub fn membership_item_path(collection_id: &str, company_id: i64) -> String {
    format!(
        "/collections/{}/companies/{company_id}",
        urlencoding::encode(collection_id)
    )
}

/// Path for polling a task.
#[must_use]
pub fn task_status_path(task_id: &str) -> String {
    format!("/actions/tasks/{}/status", urlencoding::encode(task_id))
}

/// Query parameter holding the selected collection.
pub const COLLECTION_QUERY_KEY: &str = "collection";

/// Build the `?collection=<id>` query string for a shareable link.
#[must_use]
pub fn collection_query_string(collection_id: &str) -> String {
    format!(
        "?{COLLECTION_QUERY_KEY}={}",
        urlencoding::encode(collection_id)
    )
}

/// Read the selected collection from a location query string.
///
/// Accepts the string with or without the leading `?`; empty values count as absent.
#[must_use]
pub fn parse_collection_query(query: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == COLLECTION_QUERY_KEY)
        .and_then(|(_, value)| {
            let value = value.replace('+', " ");
            urlencoding::decode(&value).ok().map(|decoded| decoded.into_owned())
        })
        .filter(|value| !value.trim().is_empty())
}
