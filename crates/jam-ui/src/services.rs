//! HTTP client for the collections API.

pub(crate) mod api;
