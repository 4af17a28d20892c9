//! Data-fetch hook shared by read views.
//!
//! # Design
//! - State transitions live in [`FetchState`]; the hook only schedules requests.
//! - Fetches run on mount and whenever `deps` change; `refetch` repeats the current fetch.
//! - Overlapping requests are not cancelled; the last response to land wins.

use crate::core::diagnostics::log_failure;
use crate::core::error::ApiError;
use crate::core::fetch::{FetchAction, FetchState};
use std::future::Future;
use std::rc::Rc;
use yew::functional::UseReducerDispatcher;
use yew::prelude::*;

/// Snapshot returned by [`use_api`].
#[derive(Clone, PartialEq)]
pub(crate) struct UseApiHandle<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
}

#[hook]
pub(crate) fn use_api<T, F, Fut, D>(context: &'static str, fetch: F, deps: D) -> UseApiHandle<T>
where
    T: Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
    D: PartialEq + 'static,
{
    let state = use_reducer(FetchState::<T>::default);
    let fetch = Rc::new(fetch);

    {
        let fetch = Rc::clone(&fetch);
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                spawn_fetch(context, &fetch, dispatcher);
                || ()
            },
            deps,
        );
    }

    let refetch = {
        let dispatcher = state.dispatcher();
        Callback::from(move |()| spawn_fetch(context, &fetch, dispatcher.clone()))
    };

    UseApiHandle {
        data: state.data.clone(),
        loading: state.loading,
        error: state.error.clone(),
        refetch,
    }
}

fn spawn_fetch<T, F, Fut>(
    context: &'static str,
    fetch: &Rc<F>,
    dispatcher: UseReducerDispatcher<FetchState<T>>,
) where
    T: Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    dispatcher.dispatch(FetchAction::Begin);
    let request = fetch();
    yew::platform::spawn_local(async move {
        match request.await {
            Ok(data) => dispatcher.dispatch(FetchAction::Resolved(data)),
            Err(err) => {
                log_failure(context, &err);
                dispatcher.dispatch(FetchAction::Failed(err.to_string()));
            }
        }
    });
}
