use justplay_assistant::{AssistantConfig, AssistantError, ConversationOrchestrator, PollPolicy};
use mockito::{Matcher, Server};
use serde_json::json;
use std::time::Duration;

fn config_for(server: &Server) -> AssistantConfig {
    AssistantConfig::new("sk-test")
        .with_base_url(server.url())
        .with_assistant_id("asst_test")
        .with_poll(PollPolicy::new(
            Duration::from_millis(1),
            Duration::from_millis(200),
        ))
}

#[tokio::test]
async fn test_full_conversation_against_http_backend() {
    let mut server = Server::new_async().await;

    let thread = server
        .mock("POST", "/threads")
        .match_header("authorization", "Bearer sk-test")
        .match_header("openai-beta", "assistants=v2")
        .match_body("")
        .with_status(200)
        .with_body(r#"{"id":"thread_1","object":"thread"}"#)
        .expect(1)
        .create_async()
        .await;

    let message = server
        .mock("POST", "/threads/thread_1/messages")
        .match_header("openai-beta", "assistants=v2")
        .match_body(Matcher::Json(json!({"role": "user", "content": "play one more time"})))
        .with_status(200)
        .with_body(r#"{"id":"msg_1"}"#)
        .expect(1)
        .create_async()
        .await;

    let run = server
        .mock("POST", "/threads/thread_1/runs")
        .match_body(Matcher::Json(json!({"assistant_id": "asst_test"})))
        .with_status(200)
        .with_body(r#"{"id":"run_1","status":"queued"}"#)
        .expect(1)
        .create_async()
        .await;

    let in_progress = server
        .mock("GET", "/threads/thread_1/runs/run_1")
        .match_header("authorization", "Bearer sk-test")
        .with_status(200)
        .with_body(r#"{"id":"run_1","status":"in_progress"}"#)
        .expect(1)
        .create_async()
        .await;

    let completed = server
        .mock("GET", "/threads/thread_1/runs/run_1")
        .with_status(200)
        .with_body(r#"{"id":"run_1","status":"completed"}"#)
        .expect(1)
        .create_async()
        .await;

    let messages = server
        .mock("GET", "/threads/thread_1/messages")
        .with_status(200)
        .with_body(
            json!({
                "object": "list",
                "data": [
                    {"role": "assistant", "content": [{"type": "text", "text": {"value": "Artist: Daft Punk\nSong: One More Time", "annotations": []}}]},
                    {"role": "user", "content": [{"type": "text", "text": {"value": "play one more time", "annotations": []}}]}
                ]
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let orchestrator = ConversationOrchestrator::from_config(&config_for(&server)).unwrap();
    let reply = orchestrator.ask("play one more time").await.unwrap();

    assert_eq!(reply, "Artist: Daft Punk\nSong: One More Time");

    thread.assert_async().await;
    message.assert_async().await;
    run.assert_async().await;
    in_progress.assert_async().await;
    completed.assert_async().await;
    messages.assert_async().await;
}

#[tokio::test]
async fn test_run_creation_failure_keeps_upstream_status() {
    let mut server = Server::new_async().await;

    server
        .mock("POST", "/threads")
        .with_status(200)
        .with_body(r#"{"id":"thread_1"}"#)
        .create_async()
        .await;
    server
        .mock("POST", "/threads/thread_1/messages")
        .with_status(200)
        .create_async()
        .await;
    server
        .mock("POST", "/threads/thread_1/runs")
        .with_status(404)
        .with_body(r#"{"error":{"message":"No assistant found with id 'asst_test'."}}"#)
        .create_async()
        .await;
    let poll = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let orchestrator = ConversationOrchestrator::from_config(&config_for(&server)).unwrap();
    let err = orchestrator.ask("hi").await.unwrap_err();

    assert!(matches!(err, AssistantError::RunCreate(_)));
    let msg = err.to_string();
    assert!(msg.starts_with("Error creating run:"));
    assert!(msg.contains("404"));
    assert!(msg.contains("No assistant found"));

    poll.assert_async().await;
}

#[tokio::test]
async fn test_expired_run_never_lists_messages() {
    let mut server = Server::new_async().await;

    server
        .mock("POST", "/threads")
        .with_status(200)
        .with_body(r#"{"id":"thread_1"}"#)
        .create_async()
        .await;
    server
        .mock("POST", "/threads/thread_1/messages")
        .with_status(200)
        .create_async()
        .await;
    server
        .mock("POST", "/threads/thread_1/runs")
        .with_status(200)
        .with_body(r#"{"id":"run_1","status":"queued"}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/threads/thread_1/runs/run_1")
        .with_status(200)
        .with_body(r#"{"id":"run_1","status":"expired"}"#)
        .create_async()
        .await;
    let list = server
        .mock("GET", "/threads/thread_1/messages")
        .expect(0)
        .create_async()
        .await;

    let orchestrator = ConversationOrchestrator::from_config(&config_for(&server)).unwrap();
    let err = orchestrator.ask("hi").await.unwrap_err();

    assert_eq!(err.to_string(), "Run finished with status: expired");
    list.assert_async().await;
}
