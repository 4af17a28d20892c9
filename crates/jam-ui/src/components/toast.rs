//! Toast host with per-toast auto-dismiss.
//!
//! # Design
//! - Timers are keyed by toast id so replacing a loading toast does not restart others.
//! - Toasts without a duration stay until dismissed or replaced.

use crate::models::Toast;
use gloo::timers::callback::Timeout;
use std::collections::HashMap;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ToastHostProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u64>,
}

#[function_component(ToastHost)]
pub(crate) fn toast_host(props: &ToastHostProps) -> Html {
    let timers = use_mut_ref(HashMap::<u64, Timeout>::new);
    {
        let timers = timers.clone();
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |list: &Vec<Toast>| {
                let mut timers = timers.borrow_mut();
                timers.retain(|id, _| list.iter().any(|toast| toast.id == *id));
                for toast in list {
                    let Some(duration) = toast.duration_ms else {
                        continue;
                    };
                    let id = toast.id;
                    let on_dismiss = on_dismiss.clone();
                    timers
                        .entry(id)
                        .or_insert_with(|| Timeout::new(duration, move || on_dismiss.emit(id)));
                }
                || ()
            },
            props.toasts.clone(),
        );
    }
    {
        let timers = timers.clone();
        use_effect_with_deps(move |_| move || timers.borrow_mut().clear(), ());
    }

    html! {
        <div class="toast-host" aria-live="polite" aria-atomic="true">
            {for props.toasts.iter().map(|toast| render_toast(toast, props.on_dismiss.clone()))}
        </div>
    }
}

fn render_toast(toast: &Toast, on_dismiss: Callback<u64>) -> Html {
    let id = toast.id;
    let on_close = Callback::from(move |_| on_dismiss.emit(id));

    html! {
        <div class={classes!("toast", toast.kind.class())} role="status">
            {if toast.duration_ms.is_none() {
                html! { <span class="loading loading-spinner loading-sm" /> }
            } else {
                html! {}
            }}
            <span>{toast.message.clone()}</span>
            <button class="ghost" aria-label="Dismiss" onclick={on_close}>{"✕"}</button>
        </div>
    }
}
