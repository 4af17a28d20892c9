//! Collection sidebar: listing, selection, and whole-collection bulk actions.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
