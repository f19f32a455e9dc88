use crate::client::AssistantsClient;
use crate::config::{AssistantConfig, PollPolicy};
use crate::error::{AssistantError, Result};
use crate::extract::extract_reply;
use crate::traits::AssistantsApi;
use crate::types::{Run, RunStatus};
use std::sync::Arc;
use tokio::time::Instant;

/// Steps of one query's trip through the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrchestrationState {
    Created,
    MessagePosted,
    RunQueued,
    RunPolling,
    RunCompleted,
    RunFailed,
}

/// Drives a single query from submission to the assistant's answer.
///
/// Each call to [`ask`](Self::ask) creates its own thread and run; nothing is
/// shared between calls. The thread never has more than one run.
pub struct ConversationOrchestrator {
    backend: Arc<dyn AssistantsApi>,
    assistant_id: String,
    poll: PollPolicy,
}

impl ConversationOrchestrator {
    pub fn new(
        backend: Arc<dyn AssistantsApi>,
        assistant_id: impl Into<String>,
        poll: PollPolicy,
    ) -> Self {
        Self {
            backend,
            assistant_id: assistant_id.into(),
            poll,
        }
    }

    /// Orchestrator backed by the HTTP assistants client
    pub fn from_config(config: &AssistantConfig) -> Result<Self> {
        let client = AssistantsClient::new(config).map_err(AssistantError::Client)?;
        Ok(Self::new(Arc::new(client), config.assistant_id.clone(), config.poll))
    }

    /// Submit `query` and wait for the assistant's reply.
    ///
    /// Returns an empty string when the run completed but produced no
    /// assistant text.
    #[tracing::instrument(name = "assistant.ask", skip_all, fields(query_len = query.len()))]
    pub async fn ask(&self, query: &str) -> Result<String> {
        let thread = self
            .backend
            .create_thread()
            .await
            .map_err(AssistantError::ThreadCreate)?;
        let thread_id = thread.id;
        trace_state(OrchestrationState::Created, &thread_id);

        self.backend
            .post_message(&thread_id, query)
            .await
            .map_err(AssistantError::MessagePost)?;
        trace_state(OrchestrationState::MessagePosted, &thread_id);

        let run = self
            .backend
            .create_run(&thread_id, &self.assistant_id)
            .await
            .map_err(AssistantError::RunCreate)?;
        trace_state(OrchestrationState::RunQueued, &thread_id);

        let run = self.await_run(&thread_id, run).await?;

        if run.status != RunStatus::Completed {
            tracing::warn!(
                state = ?OrchestrationState::RunFailed,
                thread_id = %thread_id,
                run_id = %run.id,
                status = %run.status,
                "Run ended without completing"
            );
            return Err(AssistantError::RunNotCompleted { status: run.status });
        }
        trace_state(OrchestrationState::RunCompleted, &thread_id);

        let messages = self
            .backend
            .list_messages(&thread_id)
            .await
            .map_err(AssistantError::MessageList)?;

        let reply = extract_reply(&messages.data);

        tracing::info!(
            thread_id = %thread_id,
            messages = messages.data.len(),
            reply_len = reply.len(),
            "Assistant reply ready"
        );

        Ok(reply)
    }

    /// Poll until the run leaves `queued`/`in_progress`.
    ///
    /// Always fetches at least once after creation. Sleeps never run past the
    /// deadline; once it has passed with the run still pending the call fails
    /// with [`AssistantError::RunTimeout`].
    async fn await_run(&self, thread_id: &str, mut run: Run) -> Result<Run> {
        let started = Instant::now();
        let deadline = started + self.poll.max_wait;
        let interval = self.poll.effective_interval();
        let mut polls: u32 = 0;

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            tokio::time::sleep(interval.min(remaining)).await;
            polls += 1;

            run = self
                .backend
                .get_run(thread_id, &run.id)
                .await
                .map_err(AssistantError::RunPoll)?;

            tracing::debug!(
                state = ?OrchestrationState::RunPolling,
                run_id = %run.id,
                status = %run.status,
                polls,
                "Polled run status"
            );

            if !run.status.is_pending() {
                return Ok(run);
            }

            if Instant::now() >= deadline {
                return Err(AssistantError::RunTimeout {
                    run_id: run.id,
                    status: run.status,
                    waited: started.elapsed(),
                });
            }
        }
    }
}

fn trace_state(state: OrchestrationState, thread_id: &str) {
    tracing::debug!(state = ?state, thread_id = %thread_id, "Orchestration step done");
}
