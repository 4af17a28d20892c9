//! UI-only view models shared by the store and components.

/// Toast variants used across the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Persistent progress toast for a running task.
    Loading,
    /// Success toast.
    Success,
    /// Error toast.
    Error,
}

impl ToastKind {
    /// CSS modifier class for the toast.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Toast payload used by the host and app state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic toast identifier.
    pub id: u64,
    /// Replacement key; a new toast with the same key takes this one's slot.
    pub key: Option<String>,
    /// Display message for the toast.
    pub message: String,
    /// Severity classification.
    pub kind: ToastKind,
    /// Auto-dismiss delay; `None` keeps the toast until it is dismissed.
    pub duration_ms: Option<u32>,
}
