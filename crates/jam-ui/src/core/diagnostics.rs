//! Target-aware failure logging.
//!
//! The browser build writes to the devtools console; native builds (tests,
//! tooling) route through `tracing`.

use std::fmt::Display;

/// Log a recoverable failure with a short context label.
#[cfg(target_arch = "wasm32")]
pub fn log_failure(context: &'static str, detail: &dyn Display) {
    gloo::console::error!(context, detail.to_string());
}

/// Log a recoverable failure with a short context label.
#[cfg(not(target_arch = "wasm32"))]
pub fn log_failure(context: &'static str, detail: &dyn Display) {
    tracing::warn!(context, detail = %detail, "operation failed");
}
