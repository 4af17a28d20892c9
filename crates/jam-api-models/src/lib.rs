#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::multiple_crate_versions)]
//! Shared HTTP DTOs for the Jam collections API.
//!
//! The console encodes requests and decodes responses exclusively through
//! these types so the wire contract lives in one place. Field names follow the
//! server's snake-case JSON; Rust-side names are renamed where the wire name is
//! redundant (`collection_name` -> `name`).
use serde::{Deserialize, Serialize};

/// Error body returned by the API on non-2xx responses.
///
/// Conflict responses (HTTP 409) carry a human-readable `detail` that the
/// console surfaces verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Human-readable explanation of the failure, when provided.
    pub detail: Option<String>,
}

/// Summary row returned by `GET /collections`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CollectionMetadata {
    /// Opaque collection identifier.
    pub id: String,
    #[serde(rename = "collection_name")]
    /// Display name of the collection.
    pub name: String,
}

/// Company record as listed inside a collection page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Company {
    /// Stable company identifier.
    pub id: i64,
    #[serde(rename = "company_name")]
    /// Company display name.
    pub name: String,
    /// Whether the company is a member of the Liked collection.
    #[serde(default)]
    pub liked: bool,
}

/// One server-side page of a collection, returned by `GET /collections/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompanyPage {
    /// Companies in the requested window.
    #[serde(default)]
    pub companies: Vec<Company>,
    /// Total number of companies in the collection.
    #[serde(default)]
    pub total: u64,
}

/// Body for `POST /collections/{id}/companies`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MembershipRequest {
    /// Company to add to the collection.
    pub company_id: i64,
}

/// Body for `POST /actions/transfer-collection`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransferCollectionRequest {
    /// Collection whose members are copied.
    pub source_collection_id: String,
    /// Collection receiving the members.
    pub destination_collection_id: String,
}

/// Body for `POST /actions/transfer-selection`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransferSelectionRequest {
    /// Companies to copy into the destination.
    pub company_ids: Vec<i64>,
    /// Collection receiving the companies.
    pub destination_collection_id: String,
}

/// Body for `DELETE /actions/collection-contents`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteCollectionRequest {
    /// Collection to empty.
    pub collection_id: String,
}

/// Body for `POST /actions/delete-selection`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteSelectionRequest {
    /// Collection the companies are removed from.
    pub collection_id: String,
    /// Companies to remove.
    pub company_ids: Vec<i64>,
}

/// Lifecycle states of a server-side bulk task.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskState {
    /// Accepted but not yet picked up by the worker.
    Pending,
    /// Worker is processing items.
    InProgress,
    /// Finished without errors.
    Success,
    /// Aborted with an error.
    Failed,
}

impl TaskState {
    /// Whether the task is still running on the server.
    #[must_use]
    pub const fn is_processing(self) -> bool {
        matches!(self, Self::Pending | Self::InProgress)
    }

    /// Whether the task reached a final state.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !self.is_processing()
    }

    /// Wire label for the state.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::InProgress => "IN_PROGRESS",
            Self::Success => "SUCCESS",
            Self::Failed => "FAILED",
        }
    }
}

/// Handle returned when a bulk action is accepted (`202 Accepted`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskHandle {
    /// Opaque task identifier used for polling.
    pub task_id: String,
    /// Initial state, normally [`TaskState::Pending`].
    pub status: TaskState,
}

/// Snapshot returned by `GET /actions/tasks/{task_id}/status`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskStatus {
    /// Opaque task identifier.
    pub task_id: String,
    /// Current lifecycle state.
    pub status: TaskState,
    /// Items processed so far.
    #[serde(default)]
    pub progress: u64,
    /// Items to process; zero while the extent is unknown.
    #[serde(default)]
    pub total: u64,
    /// Human-readable progress or failure detail.
    #[serde(default)]
    pub detail: String,
}

impl TaskStatus {
    /// Build the initial snapshot for a freshly accepted task.
    #[must_use]
    pub fn from_handle(handle: TaskHandle, detail: impl Into<String>) -> Self {
        Self {
            task_id: handle.task_id,
            status: handle.status,
            progress: 0,
            total: 0,
            detail: detail.into(),
        }
    }

    /// Whether the task is still running on the server.
    #[must_use]
    pub const fn is_processing(&self) -> bool {
        self.status.is_processing()
    }

    /// Completion percentage rounded to the nearest integer.
    ///
    /// Returns 0 while `total` is unknown and never exceeds 100.
    #[must_use]
    pub fn percent_complete(&self) -> u64 {
        if self.total == 0 {
            return 0;
        }
        let scaled = self
            .progress
            .saturating_mul(100)
            .saturating_add(self.total / 2)
            / self.total;
        scaled.min(100)
    }
}
