//! Company table for one collection: server-paginated rows, selection, and row actions.

use crate::app::hooks::use_api;
use crate::app::preferences::confirm;
use crate::app::{ApiCtx, TaskCtx};
use crate::components::{BulkActionBar, Checkbox, Loading, PaginationBar};
use crate::core::diagnostics::log_failure;
use crate::core::store::{select_is_processing, select_task_state};
use crate::features::companies::actions::{
    ToolbarMode, membership_change, plan_toolbar_action, toolbar_label, toolbar_mode,
};
use crate::features::companies::state::{CompanyTableState, TableAction, page_ids};
use jam_api_models::{Company, CompanyPage};
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub(crate) struct CompanyTableProps {
    pub api: ApiCtx,
    pub task: TaskCtx,
    pub collection_id: String,
    #[prop_or_default]
    pub liked_collection_id: Option<String>,
}

/// Paginated, selectable member table with like/unlike buttons.
#[function_component(CompanyTable)]
pub(crate) fn company_table(props: &CompanyTableProps) -> Html {
    let table = {
        let collection_id = props.collection_id.clone();
        let page_size = props.task.config.default_page_size;
        use_reducer(move || CompanyTableState::new(collection_id, page_size))
    };
    {
        let dispatcher = table.dispatcher();
        use_effect_with_deps(
            move |collection_id: &String| {
                dispatcher.dispatch(TableAction::SwitchCollection(collection_id.clone()));
                || ()
            },
            props.collection_id.clone(),
        );
    }

    let task_state = *use_selector(select_task_state);
    let is_processing = *use_selector(select_is_processing);

    let page = {
        let client = props.api.client.clone();
        let collection_id = table.collection_id.clone();
        let window = table.pagination.window();
        use_api(
            "load companies",
            move || {
                let client = client.clone();
                let collection_id = collection_id.clone();
                async move { client.fetch_collection_page(&collection_id, window).await }
            },
            (table.collection_id.clone(), table.pagination, task_state),
        )
    };

    let rows: Vec<Company> = page
        .data
        .as_ref()
        .map(|page: &CompanyPage| page.companies.clone())
        .unwrap_or_default();
    let total = page.data.as_ref().map_or(0, |page| page.total);
    let visible_ids = page_ids(&rows);
    let liked_id = props.liked_collection_id.clone();

    let on_toggle_like = {
        let client = props.api.client.clone();
        let dispatcher = table.dispatcher();
        let refetch = page.refetch.clone();
        let liked_id = liked_id.clone();
        Callback::from(move |(company_id, liked): (i64, bool)| {
            let Some(change) = membership_change(liked_id.as_deref(), company_id, liked) else {
                return;
            };
            let client = client.clone();
            let dispatcher = dispatcher.clone();
            let refetch = refetch.clone();
            dispatcher.dispatch(TableAction::RowBusy(company_id));
            yew::platform::spawn_local(async move {
                if let Err(err) = client.apply_membership(&change).await {
                    log_failure(change.label(), &err);
                }
                dispatcher.dispatch(TableAction::RowIdle(company_id));
                refetch.emit(());
            });
        })
    };

    let mode = toolbar_mode(&table.selection, &table.collection_id, liked_id.as_deref());
    let on_toolbar = {
        let task = props.task.clone();
        let selection = table.selection.clone();
        let collection_id = table.collection_id.clone();
        Callback::from(move |_: MouseEvent| {
            match plan_toolbar_action(&selection, &collection_id, liked_id.as_deref(), confirm) {
                Ok(Some(action)) => task.run(action),
                Ok(None) => {}
                Err(err) => task.report(&err),
            }
        })
    };
    let on_clear = {
        let dispatcher = table.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(TableAction::ClearSelection))
    };
    let on_toggle_page = {
        let dispatcher = table.dispatcher();
        let ids = visible_ids.clone();
        Callback::from(move |_: bool| dispatcher.dispatch(TableAction::TogglePage(ids.clone())))
    };
    let on_page = {
        let dispatcher = table.dispatcher();
        Callback::from(move |page: u32| dispatcher.dispatch(TableAction::SetPage(page)))
    };
    let on_page_size = {
        let dispatcher = table.dispatcher();
        Callback::from(move |size: u32| dispatcher.dispatch(TableAction::SetPageSize(size)))
    };

    html! {
        <div class="company-table">
            <BulkActionBar selected_count={table.selection.len()} {on_clear}>
                {toolbar_label(mode, table.selection.len()).map(|label| html! {
                    <button
                        class={classes!("btn", if mode == ToolbarMode::RemoveSelected { "btn-secondary" } else { "btn-primary" })}
                        disabled={is_processing}
                        onclick={on_toolbar.clone()}
                    >
                        {label}
                    </button>
                }).unwrap_or_default()}
            </BulkActionBar>
            {page.error.as_ref().map(|message| html! {
                <p class="inline-error">{message.clone()}</p>
            }).unwrap_or_default()}
            <table class="table">
                <thead>
                    <tr>
                        <th>
                            <Checkbox
                                label="Select page"
                                checked={table.selection.covers(&visible_ids)}
                                disabled={visible_ids.is_empty()}
                                onchange={on_toggle_page}
                            />
                        </th>
                        <th>{"Liked"}</th>
                        <th>{"ID"}</th>
                        <th>{"Company Name"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    {for rows.iter().map(|company| render_row(
                        company,
                        &table,
                        is_processing,
                        &on_toggle_like,
                    ))}
                </tbody>
            </table>
            {if page.loading { html! { <Loading label="Loading companies" /> } } else { html! {} }}
            <PaginationBar pagination={table.pagination} {total} {on_page} {on_page_size} />
        </div>
    }
}

fn render_row(
    company: &Company,
    table: &UseReducerHandle<CompanyTableState>,
    is_processing: bool,
    on_toggle_like: &Callback<(i64, bool)>,
) -> Html {
    let id = company.id;
    let liked = company.liked;
    let on_select = {
        let dispatcher = table.dispatcher();
        Callback::from(move |_: bool| dispatcher.dispatch(TableAction::ToggleRow(id)))
    };
    let on_like = {
        let on_toggle_like = on_toggle_like.clone();
        Callback::from(move |_: MouseEvent| on_toggle_like.emit((id, liked)))
    };

    html! {
        <tr key={id.to_string()}>
            <td>
                <Checkbox
                    label={format!("Select company {id}")}
                    checked={table.selection.contains(id)}
                    onchange={on_select}
                />
            </td>
            <td>{if liked { "✓" } else { "" }}</td>
            <td>{id}</td>
            <td>{company.name.clone()}</td>
            <td>
                {if table.is_row_busy(id) {
                    html! { <Loading small=true /> }
                } else if liked {
                    html! {
                        <button class="btn btn-outline btn-secondary btn-sm" disabled={is_processing} onclick={on_like}>
                            {"Unlike"}
                        </button>
                    }
                } else {
                    html! {
                        <button class="btn btn-outline btn-primary btn-sm" disabled={is_processing} onclick={on_like}>
                            {"Like"}
                        </button>
                    }
                }}
            </td>
        </tr>
    }
}
