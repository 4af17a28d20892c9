//! Collections page: sidebar with whole-collection actions plus the company table.

use crate::app::hooks::use_api;
use crate::app::preferences::confirm;
use crate::app::{ApiCtx, Route, TaskCtx};
use crate::components::Loading;
use crate::core::diagnostics::log_failure;
use crate::core::logic::{collection_query_string, parse_collection_query};
use crate::core::store::{select_is_processing, select_task_state};
use crate::features::collections::state::{
    CollectionQuery, LOAD_ERROR, WellKnownCollections, effective_selection, plan_collection_transfer,
    plan_delete_all, should_refresh_collections, transfer_label,
};
use crate::features::companies::view::CompanyTable;
use gloo::timers::callback::Timeout;
use jam_api_models::{CollectionMetadata, TaskState};
use yew::prelude::*;
use yew_router::prelude::{use_location, use_navigator};
use yewdux::prelude::use_selector;

/// Sidebar and table for the selected collection.
#[function_component(CollectionsPage)]
pub(crate) fn collections_page() -> Html {
    match (use_context::<ApiCtx>(), use_context::<TaskCtx>()) {
        (Some(api), Some(task)) => html! { <CollectionsView {api} {task} /> },
        _ => html! {},
    }
}

#[derive(Properties, PartialEq)]
struct CollectionsViewProps {
    api: ApiCtx,
    task: TaskCtx,
}

#[function_component(CollectionsView)]
fn collections_view(props: &CollectionsViewProps) -> Html {
    let CollectionsViewProps { api, task } = props;

    let collections = {
        let client = api.client.clone();
        use_api(
            "load collections",
            move || {
                let client = client.clone();
                async move { client.fetch_collections().await }
            },
            (),
        )
    };

    let task_state = use_selector(select_task_state);
    let is_processing = *use_selector(select_is_processing);
    {
        let refetch = collections.refetch.clone();
        let delay = task.config.refresh_delay_ms;
        use_effect_with_deps(
            move |status: &Option<TaskState>| {
                let timer = should_refresh_collections(*status)
                    .then(|| Timeout::new(delay, move || refetch.emit(())));
                move || drop(timer)
            },
            *task_state,
        );
    }

    let navigator = use_navigator();
    let from_url = use_location().and_then(|location| parse_collection_query(location.query_str()));
    let list: Vec<CollectionMetadata> = collections.data.clone().unwrap_or_default();
    let selected = effective_selection(from_url.as_deref(), &list);
    let known = WellKnownCollections::resolve(&list);

    let on_select = Callback::from(move |id: String| {
        if let Some(navigator) = &navigator {
            let query = CollectionQuery { collection: id };
            if let Err(err) = navigator.push_with_query(&Route::Home, &query) {
                log_failure("select collection", &err);
            }
        }
    });

    let on_transfer = {
        let task = task.clone();
        let known = known.clone();
        Callback::from(move |_: MouseEvent| match plan_collection_transfer(&known) {
            Ok(action) => task.run(action),
            Err(err) => task.report(&err),
        })
    };

    let on_delete_all = {
        let task = task.clone();
        let liked = known.liked.clone();
        Callback::from(move |_: MouseEvent| match plan_delete_all(liked.as_deref(), confirm) {
            Ok(Some(action)) => task.run(action),
            Ok(None) => {}
            Err(err) => task.report(&err),
        })
    };

    let on_retry = {
        let refetch = collections.refetch.clone();
        Callback::from(move |_: MouseEvent| refetch.emit(()))
    };

    html! {
        <div class="collections-layout">
            <aside class="collections-sidebar">
                <p class="sidebar-title">{"Collections"}</p>
                {if collections.loading { html! { <Loading label="Loading collections" /> } } else { html! {} }}
                {collections.error.as_ref().map(|_| html! {
                    <div class="inline-error">
                        <p>{LOAD_ERROR}</p>
                        <button class="ghost" onclick={on_retry.clone()}>{"Retry"}</button>
                    </div>
                }).unwrap_or_default()}
                <ul class="collection-list">
                    {for list.iter().map(|collection| render_collection(
                        collection,
                        selected.as_deref() == Some(collection.id.as_str()),
                        known.is_liked(&collection.id),
                        is_processing,
                        &on_select,
                        &on_delete_all,
                    ))}
                </ul>
                <button class="btn btn-primary" disabled={is_processing} onclick={on_transfer}>
                    {transfer_label(is_processing)}
                </button>
            </aside>
            <section class="collections-main">
                {match selected {
                    Some(collection_id) if collections.data.is_some() => html! {
                        <CompanyTable
                            api={api.clone()}
                            task={task.clone()}
                            {collection_id}
                            liked_collection_id={known.liked.clone()}
                        />
                    },
                    _ => html! { <Loading /> },
                }}
            </section>
        </div>
    }
}

fn render_collection(
    collection: &CollectionMetadata,
    selected: bool,
    liked: bool,
    is_processing: bool,
    on_select: &Callback<String>,
    on_delete_all: &Callback<MouseEvent>,
) -> Html {
    let onclick = {
        let on_select = on_select.clone();
        let id = collection.id.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            on_select.emit(id.clone());
        })
    };
    html! {
        <li class={classes!("collection-item", selected.then_some("selected"))}>
            <a href={collection_query_string(&collection.id)} {onclick}>{collection.name.clone()}</a>
            {if liked {
                html! {
                    <button
                        class="btn btn-ghost btn-sm danger"
                        title="Remove all from this list"
                        disabled={is_processing}
                        onclick={on_delete_all.clone()}
                    >
                        {"🗑"}
                    </button>
                }
            } else {
                html! {}
            }}
        </li>
    }
}
