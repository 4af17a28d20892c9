//! Tracked-task helpers and the notifications derived from task state.
//!
//! # Design
//! - Notifications are a pure function of the latest task snapshot.
//! - Loading notices are keyed by task id so hosts replace them in place.

use crate::core::config::UiConfig;
use crate::core::error::ApiError;
use jam_api_models::{TaskState, TaskStatus};

/// Detail adopted for a task that was just accepted.
pub const PENDING_DETAIL: &str = "Task is pending...";
/// Detail forced onto a task whose status can no longer be fetched.
pub const LOST_CONNECTION_DETAIL: &str = "Lost connection to task.";
/// Loading text while the task extent is unknown.
pub const STARTING_MESSAGE: &str = "Starting task...";
/// Fallback when a conflict response carries no detail.
pub const CONFLICT_FALLBACK: &str = "Another task is already in progress.";
/// Message for any other start failure.
pub const START_FAILED_MESSAGE: &str = "Failed to start the task.";

/// User-facing notification emitted by the task controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TaskNotice {
    /// Persistent progress notice for a running task.
    Loading {
        /// Task id; replaces any earlier notice with the same key.
        key: String,
        /// Progress text.
        message: String,
    },
    /// Task finished successfully.
    Succeeded {
        /// Task id whose loading notice is dismissed.
        key: String,
        /// Final text.
        message: String,
        /// Display time in milliseconds.
        duration_ms: u32,
    },
    /// Task finished with an error.
    Failed {
        /// Task id whose loading notice is dismissed.
        key: String,
        /// Final text.
        message: String,
        /// Display time in milliseconds.
        duration_ms: u32,
    },
    /// The server refused to start a task.
    Rejected {
        /// Error text.
        message: String,
        /// Display time in milliseconds.
        duration_ms: u32,
    },
}

impl TaskNotice {
    /// Derive the notice for the latest task snapshot.
    #[must_use]
    pub fn for_task(task: &TaskStatus, config: &UiConfig) -> Self {
        let key = task.task_id.clone();
        match task.status {
            TaskState::Pending | TaskState::InProgress => Self::Loading {
                key,
                message: progress_message(task),
            },
            TaskState::Success => Self::Succeeded {
                key,
                message: final_message(task),
                duration_ms: config.success_toast_ms,
            },
            TaskState::Failed => Self::Failed {
                key,
                message: final_message(task),
                duration_ms: config.failure_toast_ms,
            },
        }
    }

    /// Derive the notice for a refused start request.
    #[must_use]
    pub fn for_start_error(err: &ApiError, config: &UiConfig) -> Self {
        let message = if err.is_conflict() {
            err.detail().unwrap_or(CONFLICT_FALLBACK).to_string()
        } else {
            START_FAILED_MESSAGE.to_string()
        };
        Self::Rejected {
            message,
            duration_ms: config.failure_toast_ms,
        }
    }
}

/// Whether a task (if any) is still running.
#[must_use]
pub fn is_processing(task: Option<&TaskStatus>) -> bool {
    task.is_some_and(TaskStatus::is_processing)
}

/// Loading text: detail plus `progress / total (pct%)` once the extent is known.
#[must_use]
pub fn progress_message(task: &TaskStatus) -> String {
    if task.total == 0 {
        return STARTING_MESSAGE.to_string();
    }
    let detail = if task.detail.trim().is_empty() {
        "Processing..."
    } else {
        task.detail.as_str()
    };
    format!(
        "{detail} {} / {} ({}%)",
        task.progress,
        task.total,
        task.percent_complete()
    )
}

/// Final text shown when a task settles.
#[must_use]
pub fn final_message(task: &TaskStatus) -> String {
    format!("{}: {}", task.status.as_str(), task.detail)
}

/// Copy of `task` forced into the failed state after losing the status endpoint.
#[must_use]
pub fn lost_connection(task: &TaskStatus) -> TaskStatus {
    TaskStatus {
        status: TaskState::Failed,
        detail: LOST_CONNECTION_DETAIL.to_string(),
        ..task.clone()
    }
}
