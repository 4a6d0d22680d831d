//! Shared test fixtures for wizard tests.

#![allow(dead_code)]

use async_trait::async_trait;
use concierge_config::{ConciergeConfig, ResponseFormat};
use concierge_core::{CompletionRequest, CompletionResponse, ExecutionResult, GoalDescriptor};
use concierge_error::{ConciergeResult, ServiceError, ServiceErrorKind, StoreError, StoreErrorKind};
use concierge_interface::{PlanExecutor, TextGenerator};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A scripted generator reply.
#[derive(Debug, Clone)]
pub enum Reply {
    Text(String),
    Unreachable,
}

/// Generator that replays scripted replies and records every prompt.
#[derive(Debug, Default)]
pub struct MockGenerator {
    replies: Mutex<VecDeque<Reply>>,
    prompts: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl MockGenerator {
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            ..Self::default()
        }
    }

    /// Replies with the same text to every call.
    pub fn repeating(text: &str, times: usize) -> Self {
        Self::new((0..times).map(|_| Reply::Text(text.to_string())))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn complete(&self, req: &CompletionRequest) -> ConciergeResult<CompletionResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(req.prompt().clone());

        match self.replies.lock().unwrap().pop_front() {
            Some(Reply::Text(text)) => Ok(CompletionResponse::new(text)),
            Some(Reply::Unreachable) => Err(ServiceError::new(ServiceErrorKind::Unreachable(
                "connection refused".into(),
            ))
            .into()),
            None => Err(ServiceError::new(ServiceErrorKind::EmptyResponse).into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

/// Executor that always fails.
#[derive(Debug, Default)]
pub struct FailingExecutor;

impl PlanExecutor for FailingExecutor {
    fn execute(&self, _goal: &GoalDescriptor) -> ConciergeResult<ExecutionResult> {
        Err(StoreError::new(StoreErrorKind::Connection("executor offline".into())).into())
    }
}

/// A valid four-choice reply wrapped in a json fence.
pub fn choices_reply(prefix: &str) -> String {
    format!(
        "Here are the options:\n```json\n[\n  {{\"text\": \"{p}1\", \"icon\": \"🍣\"}},\n  {{\"text\": \"{p}2\", \"icon\": \"🍜\"}},\n  {{\"text\": \"{p}3\", \"icon\": \"🍕\"}},\n  {{\"text\": \"{p}4\", \"icon\": \"☕\"}}\n]\n```",
        p = prefix
    )
}

/// A valid guided reply.
pub fn guided_reply(question: &str, needs_postal_code: bool, prefix: &str) -> String {
    serde_json::json!({
        "nextQuestion": question,
        "needsPostalCode": needs_postal_code,
        "choices": [
            {"text": format!("{prefix}1"), "icon": "1️⃣"},
            {"text": format!("{prefix}2"), "icon": "2️⃣"},
            {"text": format!("{prefix}3"), "icon": "3️⃣"},
            {"text": format!("{prefix}4"), "icon": "4️⃣"},
        ]
    })
    .to_string()
}

pub fn config(max_steps: usize) -> ConciergeConfig {
    let mut config = ConciergeConfig::default();
    config.wizard.max_steps = max_steps;
    config
}

pub fn guided_config(max_steps: usize) -> ConciergeConfig {
    let mut config = config(max_steps);
    config.wizard.response_format = ResponseFormat::Guided;
    config
}
