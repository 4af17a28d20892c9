//! Toolbar shown above the company table while rows are selected.
//!
//! # Design
//! - Keep labels/counts and actions fully prop-driven.
//! - Render action buttons through child content.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct BulkActionBarProps {
    pub selected_count: usize,
    #[prop_or_default]
    pub on_clear: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(BulkActionBar)]
pub(crate) fn bulk_action_bar(props: &BulkActionBarProps) -> Html {
    if props.selected_count == 0 {
        return html! {};
    }
    html! {
        <div class="bulk-actions">
            <span class="muted">{format!("{} selected", props.selected_count)}</span>
            <button class="ghost" onclick={props.on_clear.clone()}>{"Clear"}</button>
            <div class="bulk-buttons">
                { for props.children.iter() }
            </div>
        </div>
    }
}
