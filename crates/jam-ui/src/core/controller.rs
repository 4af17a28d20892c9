//! Single-task controller: starts bulk actions, polls their status, and
//! reports changes to the app shell.
//!
//! # Design
//! - Exactly one tracked task; the controller is its only writer.
//! - The poll timer lives next to the task it serves and is dropped (cancelled)
//!   whenever the task settles, is replaced, or the controller is torn down.
//! - At most one status request is in flight; ticks that land while one is
//!   outstanding are skipped.
//! - No `RefCell` borrow is held across an `.await`.

use crate::core::actions::BulkAction;
use crate::core::config::UiConfig;
use crate::core::diagnostics::log_failure;
use crate::core::error::ApiError;
use crate::core::task::{PENDING_DETAIL, TaskNotice, lost_connection};
use jam_api_models::{TaskHandle, TaskStatus};
use std::cell::{Cell, RefCell};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

/// Boxed single-threaded future handed to [`TaskRuntime::spawn_local`].
pub type LocalFuture = Pin<Box<dyn Future<Output = ()>>>;

/// Remote operations the controller needs.
pub trait TaskApi {
    /// Start a bulk action and return the accepted task handle.
    fn start_action(
        &self,
        action: &BulkAction,
    ) -> impl Future<Output = Result<TaskHandle, ApiError>>;

    /// Fetch the latest status of a task.
    fn task_status(&self, task_id: &str) -> impl Future<Output = Result<TaskStatus, ApiError>>;
}

impl<T: TaskApi> TaskApi for Rc<T> {
    fn start_action(
        &self,
        action: &BulkAction,
    ) -> impl Future<Output = Result<TaskHandle, ApiError>> {
        (**self).start_action(action)
    }

    fn task_status(&self, task_id: &str) -> impl Future<Output = Result<TaskStatus, ApiError>> {
        (**self).task_status(task_id)
    }
}

/// Timer and spawning primitives supplied by the host platform.
pub trait TaskRuntime {
    /// Repeating timer handle; dropping it cancels the timer.
    type Timer;

    /// Invoke `tick` every `period_ms` until the returned handle is dropped.
    fn every(&self, period_ms: u32, tick: Box<dyn Fn()>) -> Self::Timer;

    /// Run a future on the UI thread.
    fn spawn_local(&self, future: LocalFuture);
}

/// Receiver for task snapshots and notifications.
pub trait TaskObserver {
    /// The tracked task changed.
    fn task_changed(&self, task: Option<&TaskStatus>);

    /// A notification should be shown.
    fn notify(&self, notice: TaskNotice);
}

struct PollTimer<T> {
    task_id: String,
    _handle: T,
}

struct TaskSlot<T> {
    task: Option<TaskStatus>,
    timer: Option<PollTimer<T>>,
}

struct Inner<A, R: TaskRuntime> {
    api: A,
    runtime: R,
    observer: Rc<dyn TaskObserver>,
    config: UiConfig,
    slot: RefCell<TaskSlot<R::Timer>>,
    poll_in_flight: Cell<bool>,
    torn_down: Cell<bool>,
}

/// Shared handle to the task controller.
pub struct TaskController<A, R: TaskRuntime> {
    inner: Rc<Inner<A, R>>,
}

impl<A, R: TaskRuntime> Clone for TaskController<A, R> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<A, R> TaskController<A, R>
where
    A: TaskApi + 'static,
    R: TaskRuntime + 'static,
{
    /// Create a controller with no tracked task.
    #[must_use]
    pub fn new(api: A, runtime: R, observer: Rc<dyn TaskObserver>, config: UiConfig) -> Self {
        Self {
            inner: Rc::new(Inner {
                api,
                runtime,
                observer,
                config,
                slot: RefCell::new(TaskSlot {
                    task: None,
                    timer: None,
                }),
                poll_in_flight: Cell::new(false),
                torn_down: Cell::new(false),
            }),
        }
    }

    /// Snapshot of the tracked task.
    #[must_use]
    pub fn task(&self) -> Option<TaskStatus> {
        self.inner.slot.borrow().task.clone()
    }

    /// Whether the tracked task is pending or in progress.
    #[must_use]
    pub fn is_processing(&self) -> bool {
        self.inner
            .slot
            .borrow()
            .task
            .as_ref()
            .is_some_and(TaskStatus::is_processing)
    }

    /// Whether a poll timer is currently scheduled.
    #[must_use]
    pub fn is_polling(&self) -> bool {
        self.inner.slot.borrow().timer.is_some()
    }

    /// Whether two handles share the same controller.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Copy every member of `source` into `destination`.
    pub async fn start_transfer(&self, source: &str, destination: &str) {
        self.start(&BulkAction::TransferCollection {
            source_collection_id: source.to_string(),
            destination_collection_id: destination.to_string(),
        })
        .await;
    }

    /// Copy the selected companies into `destination`.
    pub async fn start_selection_transfer(&self, company_ids: Vec<i64>, destination: &str) {
        self.start(&BulkAction::TransferSelection {
            company_ids,
            destination_collection_id: destination.to_string(),
        })
        .await;
    }

    /// Remove every member of `collection_id`.
    pub async fn start_collection_delete(&self, collection_id: &str) {
        self.start(&BulkAction::DeleteCollection {
            collection_id: collection_id.to_string(),
        })
        .await;
    }

    /// Remove the selected companies from `collection_id`.
    pub async fn start_selection_delete(&self, collection_id: &str, company_ids: Vec<i64>) {
        self.start(&BulkAction::DeleteSelection {
            collection_id: collection_id.to_string(),
            company_ids,
        })
        .await;
    }

    /// Start `action` and adopt the returned task.
    ///
    /// Refusals (409 or otherwise) are surfaced as notices and leave the
    /// tracked task untouched.
    pub async fn start(&self, action: &BulkAction) {
        if self.inner.torn_down.get() {
            return;
        }
        let result = self.inner.api.start_action(action).await;
        if self.inner.torn_down.get() {
            return;
        }
        match result {
            Ok(handle) => self.adopt(TaskStatus::from_handle(handle, PENDING_DETAIL)),
            Err(err) => {
                log_failure(action.label(), &err);
                self.inner
                    .observer
                    .notify(TaskNotice::for_start_error(&err, &self.inner.config));
            }
        }
    }

    /// Fetch the status of `task_id` once and apply the result.
    ///
    /// Responses for a task that is no longer tracked are discarded. A failed
    /// request marks the task as failed and stops polling.
    pub async fn poll(&self, task_id: &str) {
        let result = self.inner.api.task_status(task_id).await;
        self.inner.poll_in_flight.set(false);
        if self.inner.torn_down.get() {
            return;
        }
        let current = {
            let slot = self.inner.slot.borrow();
            slot.task
                .as_ref()
                .filter(|task| task.task_id == task_id && task.is_processing())
                .cloned()
        };
        let Some(current) = current else {
            return;
        };
        match result {
            Ok(status) if status.task_id == task_id => self.adopt(status),
            Ok(status) => log_failure("task status for unexpected id", &status.task_id),
            Err(err) => {
                log_failure("task status", &err);
                self.adopt(lost_connection(&current));
            }
        }
    }

    /// Cancel polling and ignore any response still in flight.
    pub fn teardown(&self) {
        self.inner.torn_down.set(true);
        let timer = self.inner.slot.borrow_mut().timer.take();
        drop(timer);
    }

    fn adopt(&self, task: TaskStatus) {
        self.inner.slot.borrow_mut().task = Some(task.clone());
        self.sync_timer();
        self.inner.observer.task_changed(Some(&task));
        self.inner
            .observer
            .notify(TaskNotice::for_task(&task, &self.inner.config));
    }

    fn sync_timer(&self) {
        let wanted = {
            let slot = self.inner.slot.borrow();
            let wanted = slot
                .task
                .as_ref()
                .filter(|task| task.is_processing())
                .map(|task| task.task_id.clone());
            let current = slot.timer.as_ref().map(|timer| timer.task_id.as_str());
            if wanted.as_deref() == current {
                return;
            }
            wanted
        };
        let stale = self.inner.slot.borrow_mut().timer.take();
        drop(stale);
        if let Some(task_id) = wanted {
            let handle = self.schedule_poll();
            self.inner.slot.borrow_mut().timer = Some(PollTimer {
                task_id,
                _handle: handle,
            });
        }
    }

    fn schedule_poll(&self) -> R::Timer {
        let weak = Rc::downgrade(&self.inner);
        self.inner.runtime.every(
            self.inner.config.poll_interval_ms,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    Self { inner }.on_tick();
                }
            }),
        )
    }

    fn on_tick(&self) {
        if self.inner.torn_down.get() || self.inner.poll_in_flight.get() {
            return;
        }
        let task_id = {
            let slot = self.inner.slot.borrow();
            slot.task
                .as_ref()
                .filter(|task| task.is_processing())
                .map(|task| task.task_id.clone())
        };
        let Some(task_id) = task_id else {
            return;
        };
        self.inner.poll_in_flight.set(true);
        let controller = self.clone();
        self.inner.runtime.spawn_local(Box::pin(async move {
            controller.poll(&task_id).await;
        }));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::core::error::CONFLICT_STATUS;
    use crate::core::task::{CONFLICT_FALLBACK, START_FAILED_MESSAGE, STARTING_MESSAGE};
    use jam_api_models::TaskState;
    use std::collections::VecDeque;
    use std::future::ready;

    #[derive(Default)]
    struct ScriptedApi {
        starts: RefCell<VecDeque<Result<TaskHandle, ApiError>>>,
        statuses: RefCell<VecDeque<Result<TaskStatus, ApiError>>>,
        started: RefCell<Vec<BulkAction>>,
        polled: RefCell<Vec<String>>,
    }

    impl ScriptedApi {
        fn accept(&self, task_id: &str) {
            self.starts.borrow_mut().push_back(Ok(TaskHandle {
                task_id: task_id.into(),
                status: TaskState::Pending,
            }));
        }

        fn reject(&self, err: ApiError) {
            self.starts.borrow_mut().push_back(Err(err));
        }

        fn report(&self, task_id: &str, status: TaskState, progress: u64, total: u64) {
            self.statuses.borrow_mut().push_back(Ok(TaskStatus {
                task_id: task_id.into(),
                status,
                progress,
                total,
                detail: "Moving companies".into(),
            }));
        }

        fn fail_poll(&self) {
            self.statuses
                .borrow_mut()
                .push_back(Err(ApiError::Transport("connection refused".into())));
        }
    }

    impl TaskApi for ScriptedApi {
        fn start_action(
            &self,
            action: &BulkAction,
        ) -> impl Future<Output = Result<TaskHandle, ApiError>> {
            self.started.borrow_mut().push(action.clone());
            let next = self
                .starts
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Transport("unscripted start".into())));
            ready(next)
        }

        fn task_status(
            &self,
            task_id: &str,
        ) -> impl Future<Output = Result<TaskStatus, ApiError>> {
            self.polled.borrow_mut().push(task_id.to_string());
            let next = self
                .statuses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Transport("unscripted poll".into())));
            ready(next)
        }
    }

    struct TimerSlot {
        active: Cell<bool>,
        tick: Box<dyn Fn()>,
    }

    struct ManualTimer(Rc<TimerSlot>);

    impl Drop for ManualTimer {
        fn drop(&mut self) {
            self.0.active.set(false);
        }
    }

    #[derive(Default)]
    struct ManualRuntime {
        timers: RefCell<Vec<Rc<TimerSlot>>>,
        spawned: RefCell<VecDeque<LocalFuture>>,
    }

    impl ManualRuntime {
        fn active_timers(&self) -> usize {
            self.timers
                .borrow()
                .iter()
                .filter(|slot| slot.active.get())
                .count()
        }

        fn created_timers(&self) -> usize {
            self.timers.borrow().len()
        }

        fn fire(&self) {
            let timers: Vec<_> = self.timers.borrow().clone();
            for slot in timers.iter().filter(|slot| slot.active.get()) {
                (slot.tick)();
            }
        }

        async fn drain(&self) {
            loop {
                let next = self.spawned.borrow_mut().pop_front();
                match next {
                    Some(future) => future.await,
                    None => break,
                }
            }
        }

        async fn tick(&self) {
            self.fire();
            self.drain().await;
        }
    }

    impl TaskRuntime for Rc<ManualRuntime> {
        type Timer = ManualTimer;

        fn every(&self, _period_ms: u32, tick: Box<dyn Fn()>) -> Self::Timer {
            let slot = Rc::new(TimerSlot {
                active: Cell::new(true),
                tick,
            });
            self.timers.borrow_mut().push(Rc::clone(&slot));
            ManualTimer(slot)
        }

        fn spawn_local(&self, future: LocalFuture) {
            self.spawned.borrow_mut().push_back(future);
        }
    }

    #[derive(Default)]
    struct Recorder {
        snapshots: RefCell<Vec<Option<TaskStatus>>>,
        notices: RefCell<Vec<TaskNotice>>,
    }

    impl TaskObserver for Recorder {
        fn task_changed(&self, task: Option<&TaskStatus>) {
            self.snapshots.borrow_mut().push(task.cloned());
        }

        fn notify(&self, notice: TaskNotice) {
            self.notices.borrow_mut().push(notice);
        }
    }

    type Harness = (
        TaskController<Rc<ScriptedApi>, Rc<ManualRuntime>>,
        Rc<ScriptedApi>,
        Rc<ManualRuntime>,
        Rc<Recorder>,
    );

    fn harness() -> Harness {
        let api = Rc::new(ScriptedApi::default());
        let runtime = Rc::new(ManualRuntime::default());
        let recorder = Rc::new(Recorder::default());
        let controller = TaskController::new(
            Rc::clone(&api),
            Rc::clone(&runtime),
            Rc::clone(&recorder) as Rc<dyn TaskObserver>,
            UiConfig::default(),
        );
        (controller, api, runtime, recorder)
    }

    fn last_notice(recorder: &Recorder) -> TaskNotice {
        recorder
            .notices
            .borrow()
            .last()
            .cloned()
            .expect("a notice was emitted")
    }

    #[tokio::test]
    async fn accepted_start_is_adopted_and_polled() {
        let (controller, api, runtime, recorder) = harness();
        api.accept("t-1");

        controller.start_transfer("A", "B").await;

        let task = controller.task().expect("task adopted");
        assert_eq!(task.task_id, "t-1");
        assert_eq!(task.status, TaskState::Pending);
        assert_eq!((task.progress, task.total), (0, 0));
        assert_eq!(task.detail, PENDING_DETAIL);
        assert!(controller.is_processing());
        assert_eq!(runtime.active_timers(), 1);
        assert_eq!(
            api.started.borrow().as_slice(),
            &[BulkAction::TransferCollection {
                source_collection_id: "A".into(),
                destination_collection_id: "B".into(),
            }]
        );
        assert_eq!(
            last_notice(&recorder),
            TaskNotice::Loading {
                key: "t-1".into(),
                message: STARTING_MESSAGE.into(),
            }
        );
        assert_eq!(recorder.snapshots.borrow().len(), 1);
    }

    #[tokio::test]
    async fn polling_replaces_task_and_stops_on_success() {
        let (controller, api, runtime, recorder) = harness();
        api.accept("t-1");
        controller.start_collection_delete("B").await;

        api.report("t-1", TaskState::InProgress, 5, 10);
        runtime.tick().await;
        assert_eq!(controller.task().map(|task| task.progress), Some(5));
        assert_eq!(
            last_notice(&recorder),
            TaskNotice::Loading {
                key: "t-1".into(),
                message: "Moving companies 5 / 10 (50%)".into(),
            }
        );

        api.report("t-1", TaskState::Success, 10, 10);
        runtime.tick().await;
        assert!(!controller.is_processing());
        assert!(!controller.is_polling());
        assert_eq!(runtime.active_timers(), 0);
        assert!(matches!(last_notice(&recorder), TaskNotice::Succeeded { .. }));

        runtime.tick().await;
        runtime.tick().await;
        assert_eq!(api.polled.borrow().len(), 2);
    }

    #[tokio::test]
    async fn conflict_leaves_tracked_task_untouched() {
        let (controller, api, runtime, recorder) = harness();
        api.accept("t-1");
        controller.start_transfer("A", "B").await;
        let before = controller.task();

        api.reject(ApiError::Status {
            status: CONFLICT_STATUS,
            detail: Some("A task is already running.".into()),
        });
        controller.start_selection_transfer(vec![1, 2], "B").await;

        assert_eq!(controller.task(), before);
        assert_eq!(runtime.created_timers(), 1);
        assert_eq!(runtime.active_timers(), 1);
        assert!(matches!(
            last_notice(&recorder),
            TaskNotice::Rejected { message, .. } if message == "A task is already running."
        ));
        assert_eq!(recorder.snapshots.borrow().len(), 1);
    }

    #[tokio::test]
    async fn start_failures_pick_fallback_messages() {
        let (controller, api, runtime, recorder) = harness();
        api.reject(ApiError::Status {
            status: CONFLICT_STATUS,
            detail: None,
        });
        controller.start_collection_delete("B").await;
        assert!(matches!(
            last_notice(&recorder),
            TaskNotice::Rejected { message, .. } if message == CONFLICT_FALLBACK
        ));

        api.reject(ApiError::Status {
            status: 500,
            detail: Some("database down".into()),
        });
        controller.start_selection_delete("B", vec![3]).await;
        assert!(matches!(
            last_notice(&recorder),
            TaskNotice::Rejected { message, .. } if message == START_FAILED_MESSAGE
        ));

        assert_eq!(controller.task(), None);
        assert_eq!(runtime.created_timers(), 0);
    }

    #[tokio::test]
    async fn poll_transport_failure_forces_failed_and_stops() {
        let (controller, api, runtime, recorder) = harness();
        api.accept("t-1");
        controller.start_transfer("A", "B").await;

        api.fail_poll();
        runtime.tick().await;

        let task = controller.task().expect("task kept");
        assert_eq!(task.status, TaskState::Failed);
        assert!(task.detail.contains("Lost connection"));
        assert_eq!(runtime.active_timers(), 0);
        assert!(matches!(last_notice(&recorder), TaskNotice::Failed { .. }));

        runtime.tick().await;
        assert_eq!(api.polled.borrow().len(), 1);
    }

    #[tokio::test]
    async fn new_task_replaces_timer_instead_of_stacking() {
        let (controller, api, runtime, _recorder) = harness();
        api.accept("t-1");
        controller.start_transfer("A", "B").await;
        api.report("t-1", TaskState::Failed, 0, 4);
        runtime.tick().await;

        api.accept("t-2");
        controller.start_collection_delete("B").await;

        assert_eq!(runtime.created_timers(), 2);
        assert_eq!(runtime.active_timers(), 1);
        api.report("t-2", TaskState::InProgress, 1, 4);
        runtime.tick().await;
        assert_eq!(api.polled.borrow().as_slice(), &["t-1", "t-2"]);
    }

    #[tokio::test]
    async fn overlapping_ticks_issue_a_single_request() {
        let (controller, api, runtime, _recorder) = harness();
        api.accept("t-1");
        controller.start_transfer("A", "B").await;

        runtime.fire();
        runtime.fire();
        api.report("t-1", TaskState::InProgress, 1, 2);
        runtime.drain().await;

        assert_eq!(api.polled.borrow().len(), 1);
        assert!(controller.is_polling());
    }

    #[tokio::test]
    async fn teardown_cancels_timer_and_ignores_late_responses() {
        let (controller, api, runtime, recorder) = harness();
        api.accept("t-1");
        controller.start_transfer("A", "B").await;
        let notices_before = recorder.notices.borrow().len();

        runtime.fire();
        controller.teardown();
        api.report("t-1", TaskState::Success, 2, 2);
        runtime.drain().await;

        assert_eq!(runtime.active_timers(), 0);
        assert_eq!(controller.task().map(|task| task.status), Some(TaskState::Pending));
        assert_eq!(recorder.notices.borrow().len(), notices_before);

        api.accept("t-2");
        controller.start_transfer("A", "B").await;
        assert_eq!(api.started.borrow().len(), 1);
    }

    #[tokio::test]
    async fn mismatched_status_id_is_ignored() {
        let (controller, api, runtime, _recorder) = harness();
        api.accept("t-1");
        controller.start_transfer("A", "B").await;

        api.report("other", TaskState::Success, 1, 1);
        runtime.tick().await;

        assert!(controller.is_processing());
        assert_eq!(runtime.active_timers(), 1);
    }
}
