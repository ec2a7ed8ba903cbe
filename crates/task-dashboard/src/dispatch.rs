/*
[INPUT]:  AdvisorApi handle, request kind, task snapshot, current mode
[OUTPUT]: Exactly one completion Action per request
[POS]:    Controller layer - bridges async requests into reduce()
[UPDATE]: When request orchestration changes
*/

use std::sync::Arc;

use task_dashboard_adapter::{AdvisorApi, RequestKind, RequestMode, Task};
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::state::{Action, DashboardState, reduce};

/// Run one request and fold its outcome into a completion action.
pub async fn perform_request(
    api: &dyn AdvisorApi,
    kind: RequestKind,
    tasks: &[Task],
    mode: Option<RequestMode>,
) -> Action {
    info!(
        endpoint = kind.endpoint(),
        mode = mode.map(RequestMode::as_str).unwrap_or("-"),
        task_count = tasks.len(),
        "request started"
    );
    match api.request(kind, tasks, mode).await {
        Ok(outcome) => {
            info!(
                endpoint = kind.endpoint(),
                raw = outcome.is_raw(),
                "request finished"
            );
            Action::RequestSucceeded(outcome)
        }
        Err(err) => {
            warn!(
                endpoint = kind.endpoint(),
                status = err.status_code(),
                timeout = err.is_timeout(),
                error = %err,
                "request failed"
            );
            Action::RequestFailed(err.to_string())
        }
    }
}

/// Issues suggest/automate requests on behalf of the view state.
#[derive(Clone)]
pub struct Dispatcher {
    api: Arc<dyn AdvisorApi>,
    send_mode: bool,
}

impl Dispatcher {
    pub fn new(api: Arc<dyn AdvisorApi>, send_mode: bool) -> Self {
        Self { api, send_mode }
    }

    fn wire_mode(&self, mode: RequestMode) -> Option<RequestMode> {
        self.send_mode.then_some(mode)
    }

    /// Start a request against the current state.
    ///
    /// Returns the state after `RequestStarted` and whether a request was
    /// actually spawned. The completion action is sent on `completions`.
    pub fn start(
        &self,
        state: DashboardState,
        kind: RequestKind,
        completions: mpsc::UnboundedSender<Action>,
    ) -> (DashboardState, bool) {
        if !state.can_request() {
            return (state, false);
        }

        let state = reduce(state, Action::RequestStarted(kind));
        let tasks = state.tasks.clone();
        let mode = self.wire_mode(state.mode);
        let api = self.api.clone();

        tokio::spawn(async move {
            let action = perform_request(api.as_ref(), kind, &tasks, mode).await;
            if completions.send(action).is_err() {
                warn!("request completed after the UI loop stopped");
            }
        });

        (state, true)
    }

    /// Start a request and wait for it, for callers without an event loop.
    pub async fn run_to_completion(
        &self,
        state: DashboardState,
        kind: RequestKind,
    ) -> DashboardState {
        if !state.can_request() {
            return state;
        }
        let state = reduce(state, Action::RequestStarted(kind));
        let mode = self.wire_mode(state.mode);
        let action = perform_request(self.api.as_ref(), kind, &state.tasks, mode).await;
        reduce(state, action)
    }
}
