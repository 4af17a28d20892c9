//! App shell: context providers, routing, toasts, and the task controller lifecycle.

use crate::components::ToastHost;
use crate::core::config::UiConfig;
use crate::core::store::{AppStore, dismiss_toast, select_toasts};
use crate::features::collections::view::CollectionsPage;
use crate::services::api::ApiClient;
use preferences::api_base_url;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

pub(crate) use routes::Route;
pub(crate) use task::TaskCtx;

pub(crate) mod hooks;
pub(crate) mod preferences;
mod routes;
mod runtime;
mod task;

/// Shared HTTP client for read views; compared by identity.
#[derive(Clone)]
pub(crate) struct ApiCtx {
    pub client: Rc<ApiClient>,
}

impl ApiCtx {
    fn connect(base_url: String) -> Self {
        Self {
            client: Rc::new(ApiClient::new(base_url)),
        }
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}

#[function_component(JamApp)]
pub(crate) fn jam_app() -> Html {
    let config = UiConfig::default();
    let api_ctx = use_memo(|_| ApiCtx::connect(api_base_url()), ());
    let task_ctx = {
        let client = api_ctx.client.clone();
        use_memo(move |_| TaskCtx::new(client, config), ())
    };
    {
        let controller = task_ctx.controller.clone();
        use_effect_with_deps(move |_| move || controller.teardown(), ());
    }

    let toasts = use_selector(select_toasts);
    let dismiss = Callback::from(|id: u64| {
        Dispatch::<AppStore>::new().reduce_mut(|store| dismiss_toast(&mut store.toasts, id));
    });

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <ContextProvider<TaskCtx> context={(*task_ctx).clone()}>
                <BrowserRouter>
                    <div class="app-shell">
                        <header class="app-title">{"Harmonic Jam"}</header>
                        <Switch<Route> render={switch} />
                    </div>
                    <ToastHost toasts={(*toasts).clone()} on_dismiss={dismiss} />
                </BrowserRouter>
            </ContextProvider<TaskCtx>>
        </ContextProvider<ApiCtx>>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <CollectionsPage /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

/// Mount the console into `#root`, or the document body when absent.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<JamApp>::with_root(root).render();
    } else {
        yew::Renderer::<JamApp>::new().render();
    }
}
