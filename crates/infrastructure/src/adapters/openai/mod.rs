//! OpenAI chat-completions client for goal breakdown.
//!
//! Sends a single, non-streaming request to `{base_url}/chat/completions`
//! and reads `choices[0].message.content`. Any OpenAI-compatible endpoint
//! works when `OPENAI_BASE_URL` points at it.

mod parser;

pub use parser::{parse_task_reply, strip_code_fence};

use lambars::effect::AsyncIO;
use listy_domain::AiTask;
use listy_workflow::{TaskBreakdown, WorkflowResult};
use reqwest::Client;
use serde_json::{Value, json};

use crate::config::OpenAiConfig;
use crate::errors::{InfraError, RemoteTarget};

// =============================================================================
// Prompt
// =============================================================================

/// Builds the user prompt asking for 5-8 subtasks as a JSON array.
#[must_use]
pub fn build_prompt(goal: &str) -> String {
    format!(
        r#"You are a helpful task breakdown assistant. Given a goal or task, break it down into 5-8 actionable, specific subtasks.

Goal: "{goal}"

Generate a JSON array of tasks. Each task should have:
- text: A clear, actionable task description

If the goal is already a single atomic action, return an empty array.

Return ONLY a valid JSON array, no other text. Example format:
[
  {{"text": "Install Rust on your system"}},
  {{"text": "Read the first chapters of the Rust book"}},
  {{"text": "Write your first Hello World program"}}
]"#
    )
}

// =============================================================================
// OpenAiTaskBreakdown
// =============================================================================

#[derive(Debug, Clone)]
pub struct OpenAiTaskBreakdown {
    client: Client,
    config: OpenAiConfig,
}

impl OpenAiTaskBreakdown {
    /// # Errors
    ///
    /// Returns [`InfraError::Configuration`] if the HTTP client cannot be built.
    pub fn new(config: OpenAiConfig) -> Result<Self, InfraError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|error| InfraError::configuration(error.to_string()))?;
        Ok(Self { client, config })
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    fn url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    fn payload(&self, goal: &str) -> Value {
        json!({
            "model": self.config.model,
            "messages": [
                { "role": "user", "content": build_prompt(goal) }
            ],
            "temperature": self.config.temperature,
            "max_tokens": self.config.max_tokens,
        })
    }

    async fn complete(&self, goal: &str) -> Result<String, InfraError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| InfraError::configuration("OPENAI_API_KEY environment variable not set"))?;

        let response = self
            .client
            .post(self.url())
            .bearer_auth(api_key)
            .json(&self.payload(goal))
            .send()
            .await
            .map_err(|error| InfraError::from_transport(RemoteTarget::AiService, &error))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|error| InfraError::from_transport(RemoteTarget::AiService, &error))?;

        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|value| value["error"]["message"].as_str().map(str::to_string))
                .unwrap_or(body);
            return Err(InfraError::unexpected_status(
                RemoteTarget::AiService,
                status.as_u16(),
                message,
            ));
        }

        extract_content(&body)
    }
}

/// Reads `choices[0].message.content` from a chat-completions body.
fn extract_content(body: &str) -> Result<String, InfraError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|error| InfraError::serialization(format!("invalid completion body: {error}")))?;

    value["choices"][0]["message"]["content"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| InfraError::serialization("no response from OpenAI"))
}

impl TaskBreakdown for OpenAiTaskBreakdown {
    fn breakdown(&self, goal: String) -> AsyncIO<WorkflowResult<Vec<AiTask>>> {
        let client = self.clone();
        AsyncIO::new(move || async move {
            let content = client.complete(&goal).await.map_err(|error| {
                tracing::error!(error = %error, "task breakdown request failed");
                error.into_upstream()
            })?;
            parse_task_reply(&content).map_err(InfraError::into_upstream)
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
