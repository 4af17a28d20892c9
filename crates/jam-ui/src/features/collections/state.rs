//! Pure collection-list helpers: well-known lookups, selection, and bulk-action planning.

use crate::core::actions::BulkAction;
use crate::core::config::{LIKED_LIST_NAME, MY_LIST_NAME};
use crate::core::error::ValidationError;
use jam_api_models::{CollectionMetadata, TaskState};
use serde::Serialize;

/// Prompt shown before emptying the Liked list.
pub const DELETE_ALL_CONFIRMATION: &str =
    "Are you sure you want to remove all companies from this list?";
/// Label of the whole-collection transfer button.
pub const TRANSFER_LABEL: &str = "Move All from 'My List' to 'Liked'";
/// Button label while a task is running.
pub const PROCESSING_LABEL: &str = "Processing...";
/// Inline error shown when the collection list fails to load.
pub const LOAD_ERROR: &str = "Error loading collections.";

/// Ids of the collections the console treats specially.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WellKnownCollections {
    /// Id of "My List".
    pub my_list: Option<String>,
    /// Id of "Liked Companies List".
    pub liked: Option<String>,
}

impl WellKnownCollections {
    /// Resolve ids by exact collection name.
    #[must_use]
    pub fn resolve(collections: &[CollectionMetadata]) -> Self {
        Self {
            my_list: find_by_name(collections, MY_LIST_NAME),
            liked: find_by_name(collections, LIKED_LIST_NAME),
        }
    }

    /// Whether `collection_id` is the Liked list.
    #[must_use]
    pub fn is_liked(&self, collection_id: &str) -> bool {
        self.liked.as_deref() == Some(collection_id)
    }
}

/// Id of the first collection named `name`.
#[must_use]
pub fn find_by_name(collections: &[CollectionMetadata], name: &str) -> Option<String> {
    collections
        .iter()
        .find(|collection| collection.name == name)
        .map(|collection| collection.id.clone())
}

/// Build the "move everything from My List to Liked" action.
///
/// # Errors
///
/// Returns [`ValidationError::MissingWellKnownCollections`] when either list is absent.
pub fn plan_collection_transfer(
    known: &WellKnownCollections,
) -> Result<BulkAction, ValidationError> {
    match (&known.my_list, &known.liked) {
        (Some(source), Some(destination)) => Ok(BulkAction::TransferCollection {
            source_collection_id: source.clone(),
            destination_collection_id: destination.clone(),
        }),
        _ => Err(ValidationError::MissingWellKnownCollections),
    }
}

/// Build the "remove every member" action, asking `confirm` first.
///
/// Returns `Ok(None)` when the user declines.
///
/// # Errors
///
/// Returns [`ValidationError::MissingCollectionId`] when no id is given; `confirm` is not called.
pub fn plan_delete_all(
    collection_id: Option<&str>,
    confirm: impl FnOnce(&str) -> bool,
) -> Result<Option<BulkAction>, ValidationError> {
    let collection_id = collection_id
        .filter(|id| !id.is_empty())
        .ok_or(ValidationError::MissingCollectionId)?;
    if !confirm(DELETE_ALL_CONFIRMATION) {
        return Ok(None);
    }
    Ok(Some(BulkAction::DeleteCollection {
        collection_id: collection_id.to_string(),
    }))
}

/// Selected collection: the URL value when present, else the first listed collection.
#[must_use]
pub fn effective_selection(
    from_url: Option<&str>,
    collections: &[CollectionMetadata],
) -> Option<String> {
    from_url
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .or_else(|| collections.first().map(|collection| collection.id.clone()))
}

/// Whether the collection list should reload for this task status.
#[must_use]
pub fn should_refresh_collections(status: Option<TaskState>) -> bool {
    status.is_some_and(TaskState::is_terminal)
}

/// Transfer button label for the current busy flag.
#[must_use]
pub const fn transfer_label(is_processing: bool) -> &'static str {
    if is_processing {
        PROCESSING_LABEL
    } else {
        TRANSFER_LABEL
    }
}

/// Query pushed onto the history stack when a collection is selected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CollectionQuery {
    /// Selected collection id.
    pub collection: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collections() -> Vec<CollectionMetadata> {
        vec![
            CollectionMetadata {
                id: "A".into(),
                name: MY_LIST_NAME.into(),
            },
            CollectionMetadata {
                id: "B".into(),
                name: LIKED_LIST_NAME.into(),
            },
        ]
    }

    #[test]
    fn transfer_resolves_well_known_ids() {
        let known = WellKnownCollections::resolve(&collections());
        let action = plan_collection_transfer(&known).expect("both lists present");
        assert_eq!(
            serde_json::to_value(action.body()).expect("serialize"),
            serde_json::json!({"source_collection_id": "A", "destination_collection_id": "B"})
        );
    }

    #[test]
    fn transfer_requires_both_lists() {
        let only_liked = &collections()[1..];
        let known = WellKnownCollections::resolve(only_liked);
        assert_eq!(
            plan_collection_transfer(&known),
            Err(ValidationError::MissingWellKnownCollections)
        );
        assert_eq!(
            ValidationError::MissingWellKnownCollections.to_string(),
            "Could not find required collections."
        );
    }

    #[test]
    fn delete_all_asks_before_acting() {
        let mut prompt = None;
        let planned = plan_delete_all(Some("B"), |text| {
            prompt = Some(text.to_string());
            true
        });
        assert_eq!(prompt.as_deref(), Some(DELETE_ALL_CONFIRMATION));
        assert_eq!(
            planned,
            Ok(Some(BulkAction::DeleteCollection {
                collection_id: "B".into()
            }))
        );

        assert_eq!(plan_delete_all(Some("B"), |_| false), Ok(None));
    }

    #[test]
    fn delete_all_without_id_skips_prompt() {
        let mut asked = false;
        let planned = plan_delete_all(None, |_| {
            asked = true;
            true
        });
        assert_eq!(planned, Err(ValidationError::MissingCollectionId));
        assert!(!asked);
    }

    #[test]
    fn url_selection_wins_over_first_collection() {
        let list = collections();
        assert_eq!(effective_selection(Some("B"), &list).as_deref(), Some("B"));
        assert_eq!(effective_selection(None, &list).as_deref(), Some("A"));
        assert_eq!(effective_selection(Some(""), &list).as_deref(), Some("A"));
        assert_eq!(effective_selection(None, &[]), None);
    }

    #[test]
    fn refresh_only_after_terminal_status() {
        assert!(!should_refresh_collections(None));
        assert!(!should_refresh_collections(Some(TaskState::Pending)));
        assert!(!should_refresh_collections(Some(TaskState::InProgress)));
        assert!(should_refresh_collections(Some(TaskState::Success)));
        assert!(should_refresh_collections(Some(TaskState::Failed)));
    }

    #[test]
    fn liked_lookup_matches_exact_name() {
        let known = WellKnownCollections::resolve(&collections());
        assert!(known.is_liked("B"));
        assert!(!known.is_liked("A"));
        assert_eq!(transfer_label(true), PROCESSING_LABEL);
        assert_eq!(transfer_label(false), TRANSFER_LABEL);
    }
}
