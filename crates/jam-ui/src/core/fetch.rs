//! Loading/data/error state for one remote read.
//!
//! # Design
//! - A reducer so the hook that drives it stays a thin wrapper around `use_reducer`.
//! - Failures keep the last good data so views can keep rendering it.

use std::rc::Rc;
use yew::functional::Reducible;

/// Message used when a failure carries no text.
pub const UNKNOWN_ERROR: &str = "An unknown error occurred";

/// Result of a remote read as seen by a view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchState<T> {
    /// Last successfully loaded value.
    pub data: Option<T>,
    /// A request is in flight.
    pub loading: bool,
    /// Last failure message, cleared when a request begins.
    pub error: Option<String>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
        }
    }
}

impl<T> FetchState<T> {
    /// Whether the first load has not produced data yet.
    #[must_use]
    pub const fn is_initial_load(&self) -> bool {
        self.loading && self.data.is_none()
    }
}

/// Transition applied to a [`FetchState`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchAction<T> {
    /// A request started.
    Begin,
    /// The request produced a value.
    Resolved(T),
    /// The request failed with a message.
    Failed(String),
}

impl<T: Clone> FetchState<T> {
    /// Apply `action`, returning the next state.
    #[must_use]
    pub fn apply(&self, action: FetchAction<T>) -> Self {
        match action {
            FetchAction::Begin => Self {
                data: self.data.clone(),
                loading: true,
                error: None,
            },
            FetchAction::Resolved(data) => Self {
                data: Some(data),
                loading: false,
                error: None,
            },
            FetchAction::Failed(message) => Self {
                data: self.data.clone(),
                loading: false,
                error: Some(if message.trim().is_empty() {
                    UNKNOWN_ERROR.to_string()
                } else {
                    message
                }),
            },
        }
    }
}

impl<T: Clone> Reducible for FetchState<T> {
    type Action = FetchAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}
