/*
[INPUT]:  Task lists and optional request mode
[OUTPUT]: Suggestion / automation outcomes
[POS]:    HTTP layer - /suggest and /auto endpoints
[UPDATE]: When adding endpoints or changing the request contract
*/

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use crate::http::{DashboardClient, Result};
use crate::types::{ApiOutcome, RequestKind, RequestMode, Task, TasksPayload};

/// Operations the dashboard needs from the remote service.
#[async_trait]
pub trait AdvisorApi: Send + Sync {
    async fn suggest(&self, tasks: &[Task], mode: Option<RequestMode>) -> Result<ApiOutcome>;

    async fn automate(&self, tasks: &[Task], mode: Option<RequestMode>) -> Result<ApiOutcome>;

    async fn request(
        &self,
        kind: RequestKind,
        tasks: &[Task],
        mode: Option<RequestMode>,
    ) -> Result<ApiOutcome> {
        match kind {
            RequestKind::Suggest => self.suggest(tasks, mode).await,
            RequestKind::Automate => self.automate(tasks, mode).await,
        }
    }
}

impl DashboardClient {
    /// POST the task list to the endpoint for `kind`
    ///
    /// POST /{suggest|auto}?mode={mode}
    /// `mode = None` leaves the query parameter off entirely.
    pub async fn post_tasks(
        &self,
        kind: RequestKind,
        tasks: &[Task],
        mode: Option<RequestMode>,
    ) -> Result<Value> {
        let mut builder = self
            .request(Method::POST, kind.endpoint())?
            .json(&TasksPayload::borrowed(tasks));
        if let Some(mode) = mode {
            builder = builder.query(&[("mode", mode.as_str())]);
        }

        tracing::debug!(
            endpoint = kind.endpoint(),
            mode = mode.map(RequestMode::as_str).unwrap_or("-"),
            task_count = tasks.len(),
            "posting tasks"
        );
        self.send_json(builder).await
    }
}

#[async_trait]
impl AdvisorApi for DashboardClient {
    /// POST /suggest
    async fn suggest(&self, tasks: &[Task], mode: Option<RequestMode>) -> Result<ApiOutcome> {
        let payload = self.post_tasks(RequestKind::Suggest, tasks, mode).await?;
        Ok(ApiOutcome::for_kind(payload, RequestKind::Suggest))
    }

    /// POST /auto
    async fn automate(&self, tasks: &[Task], mode: Option<RequestMode>) -> Result<ApiOutcome> {
        let payload = self.post_tasks(RequestKind::Automate, tasks, mode).await?;
        Ok(ApiOutcome::for_kind(payload, RequestKind::Automate))
    }
}
