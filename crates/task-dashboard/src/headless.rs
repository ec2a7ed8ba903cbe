/*
[INPUT]:  Seed tasks, request mode, Dispatcher
[OUTPUT]: One suggest/automate result as printable text
[POS]:    Headless CLI flow - no terminal UI
[UPDATE]: When changing headless output format
*/

use anyhow::{Result, anyhow};
use task_dashboard_adapter::RequestKind;
use tracing::info;

use crate::dispatch::Dispatcher;
use crate::markdown;
use crate::state::DashboardState;

/// Run a single request and return the text to print.
///
/// A failed request becomes an error carrying the reducer's message.
pub async fn run_once(
    dispatcher: &Dispatcher,
    state: DashboardState,
    kind: RequestKind,
    render_markdown: bool,
) -> Result<String> {
    info!(
        kind = kind.label(),
        mode = %state.mode,
        tasks = state.tasks.len(),
        "running headless request"
    );
    let state = dispatcher.run_to_completion(state, kind).await;

    if let Some(error) = state.error {
        return Err(anyhow!(error));
    }
    let text = state.result_text().unwrap_or_default();
    let is_raw = state.result.as_ref().is_some_and(|outcome| outcome.is_raw());
    if render_markdown && !is_raw {
        Ok(markdown::render_plain(&text))
    } else {
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;
    use task_dashboard_adapter::{ClientConfig, DashboardClient, RequestMode, Task};
    use tokio_test::assert_ok;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    async fn dispatcher_for(server: &MockServer) -> Dispatcher {
        let client =
            DashboardClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
                .expect("client");
        Dispatcher::new(Arc::new(client), true)
    }

    #[tokio::test]
    async fn test_run_once_renders_markdown_to_plain() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/suggest"))
            .and(query_param("mode", "heuristic"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"suggestion": "# Today\n- **Call** client"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let dispatcher = dispatcher_for(&server).await;
        let state = DashboardState::with_tasks(Task::starter_list(), RequestMode::Heuristic);
        let text = assert_ok!(run_once(&dispatcher, state, RequestKind::Suggest, true).await);
        assert!(text.contains("Today"));
        assert!(text.contains("Call client"));
        assert!(!text.contains("**"));
    }

    #[tokio::test]
    async fn test_run_once_surfaces_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auto"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let dispatcher = dispatcher_for(&server).await;
        let err = run_once(&dispatcher, DashboardState::default(), RequestKind::Automate, false)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("500"));
    }
}
