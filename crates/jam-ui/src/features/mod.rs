//! Feature slices: pure state per feature plus wasm-only views.

pub mod collections;
pub mod companies;
