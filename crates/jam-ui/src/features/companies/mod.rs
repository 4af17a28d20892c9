//! Company table feature: paginated members of one collection, selection, and row actions.

pub mod actions;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
