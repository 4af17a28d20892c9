//! Error types surfaced by the API client and view-level validation.

use thiserror::Error;

/// HTTP status used by the server to reject overlapping bulk tasks.
pub const CONFLICT_STATUS: u16 = 409;

/// Failure talking to the collections API.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, aborted).
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("server responded with status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Optional `detail` field from the JSON error body.
        detail: Option<String>,
    },
    /// The response body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status, when the server responded at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }

    /// Whether the server rejected the request because another task is active.
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self.status(), Some(CONFLICT_STATUS))
    }

    /// Server-provided detail message, if any.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref().filter(|text| !text.trim().is_empty()),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }
}

/// Client-side precondition failures, raised before any request is made.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// "My List" or the Liked list is missing from the collection list.
    #[error("Could not find required collections.")]
    MissingWellKnownCollections,
    /// The target collection id could not be resolved.
    #[error("Collection ID not found.")]
    MissingCollectionId,
    /// The Liked list could not be resolved for a selection move.
    #[error("Could not find the 'Liked Companies List'.")]
    MissingLikedCollection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_is_detected_from_status() {
        let err = ApiError::Status {
            status: 409,
            detail: Some("A task is already running.".into()),
        };
        assert!(err.is_conflict());
        assert_eq!(err.detail(), Some("A task is already running."));
        assert!(!ApiError::Transport("offline".into()).is_conflict());
    }

    #[test]
    fn blank_detail_is_treated_as_missing() {
        let err = ApiError::Status {
            status: 409,
            detail: Some("  ".into()),
        };
        assert_eq!(err.detail(), None);
    }

    #[test]
    fn validation_messages_are_user_facing() {
        assert_eq!(
            ValidationError::MissingWellKnownCollections.to_string(),
            "Could not find required collections."
        );
    }
}
