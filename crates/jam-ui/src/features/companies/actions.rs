//! Toolbar and per-row actions for the company table.

use crate::core::actions::BulkAction;
use crate::core::error::ValidationError;
use crate::features::companies::state::SelectionSet;

/// Which bulk button the toolbar shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolbarMode {
    /// Nothing selected; the toolbar is hidden.
    Hidden,
    /// Viewing the Liked list: remove the selection from it.
    RemoveSelected,
    /// Viewing any other list: copy the selection into Liked.
    MoveToLiked,
}

/// Pick the toolbar for the current view.
#[must_use]
pub fn toolbar_mode(
    selection: &SelectionSet,
    current_collection_id: &str,
    liked_collection_id: Option<&str>,
) -> ToolbarMode {
    if selection.is_empty() {
        ToolbarMode::Hidden
    } else if liked_collection_id == Some(current_collection_id) {
        ToolbarMode::RemoveSelected
    } else {
        ToolbarMode::MoveToLiked
    }
}

/// Button text for a visible toolbar.
#[must_use]
pub fn toolbar_label(mode: ToolbarMode, count: usize) -> Option<String> {
    match mode {
        ToolbarMode::Hidden => None,
        ToolbarMode::RemoveSelected => Some(format!("Remove {count} Selected")),
        ToolbarMode::MoveToLiked => Some(format!("Move {count} to Liked")),
    }
}

/// Confirmation prompt for moving `count` companies into Liked.
#[must_use]
pub fn move_confirmation(count: usize) -> String {
    format!("Are you sure you want to move {count} companies to the Liked list?")
}

/// Confirmation prompt for removing `count` companies from the current list.
#[must_use]
pub fn remove_confirmation(count: usize) -> String {
    format!("Are you sure you want to remove {count} companies from this list?")
}

/// Build the toolbar's bulk action, asking `confirm` first.
///
/// Returns `Ok(None)` when the toolbar is hidden or the user declines.
///
/// # Errors
///
/// Returns [`ValidationError::MissingLikedCollection`] when moving without a
/// resolved Liked list; `confirm` is not called in that case.
pub fn plan_toolbar_action(
    selection: &SelectionSet,
    current_collection_id: &str,
    liked_collection_id: Option<&str>,
    confirm: impl FnOnce(&str) -> bool,
) -> Result<Option<BulkAction>, ValidationError> {
    let count = selection.len();
    match toolbar_mode(selection, current_collection_id, liked_collection_id) {
        ToolbarMode::Hidden => Ok(None),
        ToolbarMode::RemoveSelected => Ok(confirm(&remove_confirmation(count)).then(|| {
            BulkAction::DeleteSelection {
                collection_id: current_collection_id.to_string(),
                company_ids: selection.ids(),
            }
        })),
        ToolbarMode::MoveToLiked => {
            let liked = liked_collection_id.ok_or(ValidationError::MissingLikedCollection)?;
            Ok(
                confirm(&move_confirmation(count)).then(|| BulkAction::TransferSelection {
                    company_ids: selection.ids(),
                    destination_collection_id: liked.to_string(),
                }),
            )
        }
    }
}

/// Direct membership change for a single row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MembershipChange {
    /// Add the company to the Liked list.
    Like {
        /// Liked list id.
        collection_id: String,
        /// Company to add.
        company_id: i64,
    },
    /// Remove the company from the Liked list.
    Unlike {
        /// Liked list id.
        collection_id: String,
        /// Company to remove.
        company_id: i64,
    },
}

impl MembershipChange {
    /// Row whose spinner tracks this change.
    #[must_use]
    pub const fn company_id(&self) -> i64 {
        match self {
            Self::Like { company_id, .. } | Self::Unlike { company_id, .. } => *company_id,
        }
    }

    /// Short label used in logs.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Like { .. } => "like company",
            Self::Unlike { .. } => "unlike company",
        }
    }
}

/// The change a row button performs, given the row's current liked flag.
///
/// `None` when the Liked list is unknown.
#[must_use]
pub fn membership_change(
    liked_collection_id: Option<&str>,
    company_id: i64,
    currently_liked: bool,
) -> Option<MembershipChange> {
    let collection_id = liked_collection_id?.to_string();
    Some(if currently_liked {
        MembershipChange::Unlike {
            collection_id,
            company_id,
        }
    } else {
        MembershipChange::Like {
            collection_id,
            company_id,
        }
    })
}
