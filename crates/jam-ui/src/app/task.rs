//! Task controller context and the store observer that mirrors it.
//!
//! # Design
//! - One controller per app mount, shared through context.
//! - The observer is the only writer of the task slice in [`AppStore`].

use crate::app::runtime::BrowserRuntime;
use crate::core::actions::BulkAction;
use crate::core::config::UiConfig;
use crate::core::controller::{TaskController, TaskObserver};
use crate::core::store::{AppStore, apply_notice, push_error};
use crate::core::task::TaskNotice;
use crate::services::api::ApiClient;
use jam_api_models::TaskStatus;
use std::fmt::Display;
use std::rc::Rc;
use yewdux::prelude::Dispatch;

pub(crate) type AppTaskController = TaskController<Rc<ApiClient>, BrowserRuntime>;

struct StoreObserver {
    dispatch: Dispatch<AppStore>,
}

impl TaskObserver for StoreObserver {
    fn task_changed(&self, task: Option<&TaskStatus>) {
        let task = task.cloned();
        self.dispatch.reduce_mut(|store| store.task.current = task);
    }

    fn notify(&self, notice: TaskNotice) {
        self.dispatch
            .reduce_mut(|store| apply_notice(&mut store.toasts, notice));
    }
}

/// Context handed to every view that starts bulk actions.
#[derive(Clone)]
pub(crate) struct TaskCtx {
    pub controller: AppTaskController,
    pub config: UiConfig,
}

impl TaskCtx {
    pub(crate) fn new(client: Rc<ApiClient>, config: UiConfig) -> Self {
        let observer = Rc::new(StoreObserver {
            dispatch: Dispatch::<AppStore>::new(),
        });
        Self {
            controller: TaskController::new(client, BrowserRuntime, observer, config),
            config,
        }
    }

    /// Start `action` in the background; outcomes arrive through the store.
    pub(crate) fn run(&self, action: BulkAction) {
        let controller = self.controller.clone();
        yew::platform::spawn_local(async move {
            controller.start(&action).await;
        });
    }

    /// Show a client-side error without touching the tracked task.
    pub(crate) fn report(&self, message: &dyn Display) {
        let message = message.to_string();
        let duration_ms = self.config.failure_toast_ms;
        Dispatch::<AppStore>::new().reduce_mut(|store| {
            push_error(&mut store.toasts, message, duration_ms);
        });
    }
}

impl PartialEq for TaskCtx {
    fn eq(&self, other: &Self) -> bool {
        self.controller.ptr_eq(&other.controller) && self.config == other.config
    }
}
