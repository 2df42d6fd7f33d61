//! Integration tests for the prompt enhancement form.
//!
//! These drive the public API end to end with offline adapters.

use std::sync::Arc;

use prompt_enhancer::connector::adapter::DEFAULT_MODEL;
use prompt_enhancer::{
    instruction_template, ChatRole, InMemoryClipboard, MediaMode, MockChatClient, Notification,
    OpenAiChatClient, PromptFormController, RecordingNotifier, RequestState, SubmissionStatus,
};

struct TestEnv {
    client: Arc<MockChatClient>,
    clipboard: Arc<InMemoryClipboard>,
    notifier: Arc<RecordingNotifier>,
    form: PromptFormController,
}

fn setup_test_env(client: MockChatClient) -> TestEnv {
    let client = Arc::new(client);
    let clipboard = Arc::new(InMemoryClipboard::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let form = PromptFormController::new(client.clone(), clipboard.clone(), notifier.clone());

    TestEnv {
        client,
        clipboard,
        notifier,
        form,
    }
}

#[tokio::test]
async fn test_empty_prompts_never_reach_the_network() {
    let env = setup_test_env(MockChatClient::replying("unused"));

    for prompt in ["", " ", "\t", "\n\n", "   \t  \n"] {
        env.form.update_prompt(prompt).await;
        let err = env.form.submit().await.expect_err("blank prompt must be rejected");
        assert!(err.is_validation_error());
    }

    assert_eq!(env.client.call_count().await, 0);
    assert_eq!(env.form.status().await, SubmissionStatus::Idle);
    assert!(env.form.response().await.is_none());
    assert!(env
        .notifier
        .notifications()
        .iter()
        .all(|n| *n == Notification::empty_prompt()));
}

#[tokio::test]
async fn test_one_call_per_submit_with_exact_messages() {
    let env = setup_test_env(MockChatClient::replying("a fluffy cat"));
    env.form.update_prompt("  a cat  ").await;
    env.form.update_mode(MediaMode::Video).await;
    env.form.update_output_length_bound(300).await;

    env.form.submit().await.expect("submit should succeed");
    env.form.submit().await.expect("resubmit should succeed");

    let requests = env.client.requests().await;
    assert_eq!(requests.len(), 2);

    let request = &requests[0];
    assert_eq!(request.max_tokens(), 300);
    assert_eq!(request.messages().len(), 2);
    assert_eq!(request.messages()[0].role(), ChatRole::System);
    assert_eq!(
        request.messages()[0].content(),
        instruction_template(MediaMode::Video)
    );
    assert_eq!(request.messages()[1].role(), ChatRole::User);
    assert_eq!(
        request.messages()[1].content(),
        "Create an imaginative video descriptive caption or modify an earlier caption in ENGLISH for the user input: \"a cat\""
    );
}

#[tokio::test]
async fn test_image_mode_request() {
    let env = setup_test_env(MockChatClient::replying("ok"));
    env.form.update_mode(MediaMode::Image).await;
    env.form.update_prompt("sunset over dunes").await;

    env.form.submit().await.expect("submit should succeed");

    let request = env.client.last_request().await.expect("one request");
    assert_eq!(
        request.content_of(ChatRole::System),
        Some(instruction_template(MediaMode::Image).as_str())
    );
    assert_eq!(
        request.content_of(ChatRole::User),
        Some("Create an imaginative image descriptive caption or modify an earlier caption in ENGLISH for the user input: \"sunset over dunes\"")
    );
}

#[tokio::test]
async fn test_edited_template_is_sent_until_mode_changes() {
    let env = setup_test_env(MockChatClient::replying("ok"));
    env.form.update_mode(MediaMode::Image).await;
    env.form.update_instruction_template("Only ever answer in haiku.").await;
    env.form.update_prompt("a cat").await;

    env.form.submit().await.expect("submit should succeed");
    let request = env.client.last_request().await.expect("request");
    assert_eq!(
        request.content_of(ChatRole::System),
        Some("Only ever answer in haiku.")
    );

    env.form.update_mode(MediaMode::Video).await;
    env.form.submit().await.expect("submit should succeed");
    let request = env.client.last_request().await.expect("request");
    assert_eq!(
        request.content_of(ChatRole::System),
        Some(instruction_template(MediaMode::Video).as_str())
    );
}

#[tokio::test]
async fn test_success_then_failure_then_success() {
    let env = setup_test_env(MockChatClient::replying("X"));
    env.form.update_prompt("a cat").await;

    env.form.submit().await.expect("first submit");
    assert_eq!(env.form.status().await, SubmissionStatus::Succeeded);
    assert_eq!(env.form.response().await.as_deref(), Some("X"));

    env.client.fail_with("HTTP 401 invalid api key").await;
    env.form.submit().await.expect_err("second submit fails");
    assert_eq!(env.form.status().await, SubmissionStatus::Failed);
    assert_eq!(env.form.response().await.as_deref(), Some("X"));

    env.client.reply_with("Y").await;
    env.form.submit().await.expect("third submit");
    assert_eq!(env.form.status().await, SubmissionStatus::Succeeded);
    assert_eq!(env.form.response().await.as_deref(), Some("Y"));

    let titles: Vec<String> = env
        .notifier
        .notifications()
        .iter()
        .map(|n| n.title().to_string())
        .collect();
    assert_eq!(
        titles,
        vec!["Prompt improved!", "Error improving prompt", "Prompt improved!"]
    );
}

#[tokio::test]
async fn test_copy_result_writes_literal_response() {
    let env = setup_test_env(MockChatClient::replying("hello world"));
    env.form.update_prompt("say hi").await;
    env.form.submit().await.expect("submit should succeed");

    env.form.copy_result().await.expect("copy should succeed");

    assert_eq!(env.clipboard.writes(), vec!["hello world".to_string()]);
}

#[tokio::test]
async fn test_copy_before_any_response_copies_empty_text() {
    let env = setup_test_env(MockChatClient::new());

    env.form.copy_result().await.expect("copy should succeed");

    assert_eq!(env.clipboard.writes(), vec![String::new()]);
    assert_eq!(env.form.status().await, SubmissionStatus::Idle);
}

#[tokio::test]
async fn test_form_instances_do_not_share_state() {
    let client = Arc::new(MockChatClient::replying("shared client"));
    let clipboard = Arc::new(InMemoryClipboard::new());
    let notifier = Arc::new(RecordingNotifier::new());

    let first = PromptFormController::new(client.clone(), clipboard.clone(), notifier.clone());
    let second = PromptFormController::with_state(
        client.clone(),
        clipboard,
        notifier,
        RequestState::new(MediaMode::Image).with_prompt("a dog"),
    );

    first.update_prompt("a cat").await;
    first.submit().await.expect("submit should succeed");

    assert_eq!(second.status().await, SubmissionStatus::Idle);
    assert!(second.response().await.is_none());
    assert_eq!(second.request_state().await.raw_prompt(), "a dog");
}

#[tokio::test]
async fn test_missing_api_key_fails_with_credential_hint() {
    // Unroutable address: only the missing key can end this call promptly.
    let client = Arc::new(OpenAiChatClient::new(None, DEFAULT_MODEL, "http://192.0.2.1:9"));
    let notifier = Arc::new(RecordingNotifier::new());
    let form =
        PromptFormController::new(client, Arc::new(InMemoryClipboard::new()), notifier.clone());
    form.update_prompt("a cat").await;

    let err = form.submit().await.expect_err("submission without a key must fail");

    assert!(err.is_remote_error());
    assert_eq!(form.status().await, SubmissionStatus::Failed);
    assert_eq!(form.response().await, None);
    assert!(form.can_submit().await);

    let last = notifier.last().expect("a notification");
    assert_eq!(last, Notification::improve_failed());
    assert!(last.is_destructive());
    assert!(last.description().contains("OpenAI API key"));
}
