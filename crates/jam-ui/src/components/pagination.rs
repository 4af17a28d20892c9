//! Server-side pagination footer: row range, page size picker, and prev/next.

use crate::core::config::PAGE_SIZES;
use crate::features::companies::state::Pagination;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PaginationBarProps {
    pub pagination: Pagination,
    pub total: u64,
    #[prop_or_default]
    pub on_page: Callback<u32>,
    #[prop_or_default]
    pub on_page_size: Callback<u32>,
}

#[function_component(PaginationBar)]
pub(crate) fn pagination_bar(props: &PaginationBarProps) -> Html {
    let page = props.pagination.page;
    let last_page = props.pagination.page_count(props.total).saturating_sub(1);
    let has_next = u64::from(page) < last_page;

    let go_prev = {
        let on_page = props.on_page.clone();
        Callback::from(move |_| {
            if page > 0 {
                on_page.emit(page - 1);
            }
        })
    };
    let go_next = {
        let on_page = props.on_page.clone();
        Callback::from(move |_| {
            if has_next {
                on_page.emit(page + 1);
            }
        })
    };
    let on_size = {
        let on_page_size = props.on_page_size.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>()
                && let Ok(size) = select.value().parse::<u32>()
            {
                on_page_size.emit(size);
            }
        })
    };

    let range = props.pagination.visible_range(props.total).map_or_else(
        || format!("0 of {}", props.total),
        |(first, last)| format!("{first}–{last} of {}", props.total),
    );

    html! {
        <div class="join pagination">
            <label class="muted">
                {"Rows per page"}
                <select class="select select-sm" onchange={on_size}>
                    {for PAGE_SIZES.iter().map(|size| html! {
                        <option value={size.to_string()} selected={*size == props.pagination.page_size}>
                            {size.to_string()}
                        </option>
                    })}
                </select>
            </label>
            <span class="muted">{range}</span>
            <button class="btn join-item" disabled={page == 0} onclick={go_prev}>{"«"}</button>
            <button class="btn join-item" disabled={!has_next} onclick={go_next}>{"»"}</button>
        </div>
    }
}
