//! Browser timers and spawning for the task controller.

use crate::core::controller::{LocalFuture, TaskRuntime};
use gloo_timers::callback::Interval;

/// [`TaskRuntime`] backed by `setInterval` and the yew local executor.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BrowserRuntime;

impl TaskRuntime for BrowserRuntime {
    type Timer = Interval;

    fn every(&self, period_ms: u32, tick: Box<dyn Fn()>) -> Self::Timer {
        Interval::new(period_ms, move || tick())
    }

    fn spawn_local(&self, future: LocalFuture) {
        yew::platform::spawn_local(future);
    }
}
