//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - The task slice is a read-only mirror; only the task controller writes it.
//! - Toast reducers are plain functions so they are testable without a DOM.

use crate::core::task::TaskNotice;
use crate::models::{Toast, ToastKind};
use jam_api_models::{TaskState, TaskStatus};
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Eq, Store, Default)]
pub struct AppStore {
    /// Mirror of the tracked task.
    pub task: TaskSlice,
    /// Visible notifications.
    pub toasts: ToastState,
}

/// Snapshot of the tracked task.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskSlice {
    /// Latest task value, if any task was started this session.
    pub current: Option<TaskStatus>,
}

/// Ordered toast list plus the id counter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    /// Toasts in display order.
    pub items: Vec<Toast>,
    /// Next id handed out by [`push_toast`].
    pub next_id: u64,
}

/// Add a toast; a keyed toast replaces an existing toast with the same key in place.
pub fn push_toast(
    state: &mut ToastState,
    key: Option<String>,
    kind: ToastKind,
    message: String,
    duration_ms: Option<u32>,
) -> u64 {
    let id = state.next_id;
    state.next_id = state.next_id.wrapping_add(1);
    let toast = Toast {
        id,
        key,
        message,
        kind,
        duration_ms,
    };
    let existing = toast
        .key
        .as_deref()
        .and_then(|key| state.items.iter().position(|t| t.key.as_deref() == Some(key)));
    match existing {
        Some(index) => state.items[index] = toast,
        None => state.items.push(toast),
    }
    id
}

/// Remove the toast with `id`.
pub fn dismiss_toast(state: &mut ToastState, id: u64) {
    state.items.retain(|toast| toast.id != id);
}

/// Remove every toast carrying `key`.
pub fn dismiss_key(state: &mut ToastState, key: &str) {
    state.items.retain(|toast| toast.key.as_deref() != Some(key));
}

/// Show an error toast that is not tied to a task.
pub fn push_error(state: &mut ToastState, message: impl Into<String>, duration_ms: u32) -> u64 {
    push_toast(
        state,
        None,
        ToastKind::Error,
        message.into(),
        Some(duration_ms),
    )
}

/// Reflect a task notice in the toast list.
pub fn apply_notice(state: &mut ToastState, notice: TaskNotice) {
    match notice {
        TaskNotice::Loading { key, message } => {
            push_toast(state, Some(key), ToastKind::Loading, message, None);
        }
        TaskNotice::Succeeded {
            key,
            message,
            duration_ms,
        } => {
            dismiss_key(state, &key);
            push_toast(state, None, ToastKind::Success, message, Some(duration_ms));
        }
        TaskNotice::Failed {
            key,
            message,
            duration_ms,
        } => {
            dismiss_key(state, &key);
            push_toast(state, None, ToastKind::Error, message, Some(duration_ms));
        }
        TaskNotice::Rejected {
            message,
            duration_ms,
        } => {
            push_error(state, message, duration_ms);
        }
    }
}

/// Selector: whether bulk controls must be disabled.
#[must_use]
pub fn select_is_processing(store: &AppStore) -> bool {
    crate::core::task::is_processing(store.task.current.as_ref())
}

/// Selector: status of the tracked task, used to trigger refetches.
#[must_use]
pub fn select_task_state(store: &AppStore) -> Option<TaskState> {
    store.task.current.as_ref().map(|task| task.status)
}

/// Selector: the visible toasts.
#[must_use]
pub fn select_toasts(store: &AppStore) -> Vec<Toast> {
    store.toasts.items.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loading(key: &str, message: &str) -> TaskNotice {
        TaskNotice::Loading {
            key: key.into(),
            message: message.into(),
        }
    }

    #[test]
    fn loading_toasts_are_replaced_in_place() {
        let mut state = ToastState::default();
        push_error(&mut state, "earlier", 6000);
        apply_notice(&mut state, loading("t-1", "Starting task..."));
        apply_notice(&mut state, loading("t-1", "Moving 1 / 2 (50%)"));

        assert_eq!(state.items.len(), 2);
        let toast = &state.items[1];
        assert_eq!(toast.kind, ToastKind::Loading);
        assert_eq!(toast.message, "Moving 1 / 2 (50%)");
        assert_eq!(toast.duration_ms, None);
    }

    #[test]
    fn terminal_notice_dismisses_loading_toast() {
        let mut state = ToastState::default();
        apply_notice(&mut state, loading("t-1", "Starting task..."));
        apply_notice(
            &mut state,
            TaskNotice::Failed {
                key: "t-1".into(),
                message: "FAILED: Lost connection to task.".into(),
                duration_ms: 6000,
            },
        );

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].kind, ToastKind::Error);
        assert_eq!(state.items[0].key, None);
        assert_eq!(state.items[0].duration_ms, Some(6000));
    }

    #[test]
    fn dismiss_removes_by_id_only() {
        let mut state = ToastState::default();
        let first = push_error(&mut state, "one", 6000);
        let second = push_error(&mut state, "two", 6000);
        assert_ne!(first, second);

        dismiss_toast(&mut state, first);
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].id, second);
    }

    #[test]
    fn processing_selector_follows_mirror() {
        let mut store = AppStore::default();
        assert!(!select_is_processing(&store));
        assert_eq!(select_task_state(&store), None);

        store.task.current = Some(TaskStatus {
            task_id: "t-1".into(),
            status: TaskState::InProgress,
            progress: 1,
            total: 3,
            detail: String::new(),
        });
        assert!(select_is_processing(&store));
        assert_eq!(select_task_state(&store), Some(TaskState::InProgress));
    }
}
