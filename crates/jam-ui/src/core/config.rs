//! Fixed UI timings, page sizes, and well-known collection names.

/// Name of the collection used as the source for "move all".
pub const MY_LIST_NAME: &str = "My List";
/// Name of the collection that backs the per-row liked flag.
pub const LIKED_LIST_NAME: &str = "Liked Companies List";
/// Page sizes offered by the company table.
pub const PAGE_SIZES: [u32; 3] = [25, 50, 100];
/// Base URL used when the host page does not override it.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Timings shared by the task controller and views.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UiConfig {
    /// Interval between task status polls.
    pub poll_interval_ms: u32,
    /// Delay before the collection list reloads after a task finishes.
    pub refresh_delay_ms: u32,
    /// Display time for success toasts.
    pub success_toast_ms: u32,
    /// Display time for error toasts.
    pub failure_toast_ms: u32,
    /// Initial rows per page in the company table.
    pub default_page_size: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 2_000,
            refresh_delay_ms: 500,
            success_toast_ms: 4_000,
            failure_toast_ms: 6_000,
            default_page_size: PAGE_SIZES[0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_toasts_outlive_success_toasts() {
        let config = UiConfig::default();
        assert!(config.failure_toast_ms > config.success_toast_ms);
        assert_eq!(config.poll_interval_ms, 2_000);
    }

    #[test]
    fn default_page_size_is_offered() {
        assert!(PAGE_SIZES.contains(&UiConfig::default().default_page_size));
    }
}
