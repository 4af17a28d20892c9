//! Bulk actions that start a server-side task.
//!
//! # Design
//! - One variant per start endpoint; each maps to exactly one method, path, and body.
//! - Keep request encoding here so views and the controller never build JSON by hand.

use jam_api_models::{
    DeleteCollectionRequest, DeleteSelectionRequest, TransferCollectionRequest,
    TransferSelectionRequest,
};
use serde::Serialize;

/// HTTP verb used to start an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionMethod {
    /// `POST` with a JSON body.
    Post,
    /// `DELETE` with a JSON body.
    Delete,
}

/// Long-running membership operation executed by the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BulkAction {
    /// Copy every member of one collection into another.
    TransferCollection {
        /// Collection whose members are copied.
        source_collection_id: String,
        /// Collection receiving the members.
        destination_collection_id: String,
    },
    /// Copy selected companies into a collection.
    TransferSelection {
        /// Companies to copy.
        company_ids: Vec<i64>,
        /// Collection receiving the companies.
        destination_collection_id: String,
    },
    /// Remove every member of a collection.
    DeleteCollection {
        /// Collection to empty.
        collection_id: String,
    },
    /// Remove selected companies from a collection.
    DeleteSelection {
        /// Collection the companies are removed from.
        collection_id: String,
        /// Companies to remove.
        company_ids: Vec<i64>,
    },
}

/// JSON body for a start request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ActionBody {
    /// Body for [`BulkAction::TransferCollection`].
    TransferCollection(TransferCollectionRequest),
    /// Body for [`BulkAction::TransferSelection`].
    TransferSelection(TransferSelectionRequest),
    /// Body for [`BulkAction::DeleteCollection`].
    DeleteCollection(DeleteCollectionRequest),
    /// Body for [`BulkAction::DeleteSelection`].
    DeleteSelection(DeleteSelectionRequest),
}

impl BulkAction {
    /// HTTP verb for the start endpoint.
    #[must_use]
    pub const fn method(&self) -> ActionMethod {
        match self {
            Self::DeleteCollection { .. } => ActionMethod::Delete,
            Self::TransferCollection { .. }
            | Self::TransferSelection { .. }
            | Self::DeleteSelection { .. } => ActionMethod::Post,
        }
    }

    /// Path of the start endpoint, relative to the API base URL.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::TransferCollection { .. } => "/actions/transfer-collection",
            Self::TransferSelection { .. } => "/actions/transfer-selection",
            Self::DeleteCollection { .. } => "/actions/collection-contents",
            Self::DeleteSelection { .. } => "/actions/delete-selection",
        }
    }

    /// Request body for the start endpoint.
    #[must_use]
    pub fn body(&self) -> ActionBody {
        match self {
            Self::TransferCollection {
                source_collection_id,
                destination_collection_id,
            } => ActionBody::TransferCollection(TransferCollectionRequest {
                source_collection_id: source_collection_id.clone(),
                destination_collection_id: destination_collection_id.clone(),
            }),
            Self::TransferSelection {
                company_ids,
                destination_collection_id,
            } => ActionBody::TransferSelection(TransferSelectionRequest {
                company_ids: company_ids.clone(),
                destination_collection_id: destination_collection_id.clone(),
            }),
            Self::DeleteCollection { collection_id } => {
                ActionBody::DeleteCollection(DeleteCollectionRequest {
                    collection_id: collection_id.clone(),
                })
            }
            Self::DeleteSelection {
                collection_id,
                company_ids,
            } => ActionBody::DeleteSelection(DeleteSelectionRequest {
                collection_id: collection_id.clone(),
                company_ids: company_ids.clone(),
            }),
        }
    }

    /// Short label used in logs.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::TransferCollection { .. } => "transfer collection",
            Self::TransferSelection { .. } => "transfer selection",
            Self::DeleteCollection { .. } => "delete collection contents",
            Self::DeleteSelection { .. } => "delete selection",
        }
    }
}
