//! HTTP client for the Listy API.

use listy_api::dto::{
    AiBreakdownRequest, AiBreakdownResponse, AiCreateRequest, CreateTodoRequest, Envelope,
    HealthResponse, UpdateTodoRequest,
};
use listy_domain::{AiTask, ListIdentifier, MAIN_LIST, Todo, TodoIdentifier};
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::ClientConfig;

// =============================================================================
// ClientError
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("failed to connect to API: {message}")]
    Connection { message: String },

    #[error("API error: {message}")]
    Api { status: u16, message: String },

    #[error("failed to parse response: {message}")]
    Parse { message: String },

    #[error("API response contained no data")]
    MissingData,
}

impl ClientError {
    fn connection(error: &reqwest::Error) -> Self {
        Self::Connection {
            message: error.to_string(),
        }
    }

    fn api(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Api {
            status: status.as_u16(),
            message: message.into(),
        }
    }
}

// =============================================================================
// ApiClient
// =============================================================================

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ClientError::Connection`] if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|error| ClientError::connection(&error))?;
        Ok(Self {
            client,
            base_url: config.api_url.clone(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{path}", self.base_url)
    }

    /// Sends the request and unwraps the envelope.
    ///
    /// Non-2xx statuses and `success: false` bodies become
    /// [`ClientError::Api`] carrying the server's `error` text.
    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<Envelope<T>, ClientError> {
        let response = request
            .send()
            .await
            .map_err(|error| ClientError::connection(&error))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|error| ClientError::connection(&error))?;

        let envelope: Envelope<T> = match serde_json::from_str(&body) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => return Err(ClientError::api(status, body)),
            Err(error) => {
                return Err(ClientError::Parse {
                    message: error.to_string(),
                });
            }
        };

        if !status.is_success() || !envelope.success {
            let message = envelope
                .error
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());
            tracing::debug!(status = status.as_u16(), %message, "API call failed");
            return Err(ClientError::api(status, message));
        }
        Ok(envelope)
    }

    async fn data<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        self.send(request)
            .await?
            .into_data()
            .ok_or(ClientError::MissingData)
    }

    // =========================================================================
    // Endpoints
    // =========================================================================

    /// # Errors
    ///
    /// Returns [`ClientError`] when the server is unreachable or unhealthy.
    pub async fn check_health(&self) -> Result<HealthResponse, ClientError> {
        let health: HealthResponse = self.data(self.client.get(self.url("/health"))).await?;
        if health.is_healthy() {
            Ok(health)
        } else {
            Err(ClientError::api(
                StatusCode::SERVICE_UNAVAILABLE,
                format!("API reported status '{}'", health.status),
            ))
        }
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn get_todos(&self) -> Result<Vec<Todo>, ClientError> {
        self.data(self.client.get(self.url("/todos"))).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn get_pending_todos(&self) -> Result<Vec<Todo>, ClientError> {
        self.data(self.client.get(self.url("/todos/pending"))).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn get_completed_todos(&self) -> Result<Vec<Todo>, ClientError> {
        self.data(self.client.get(self.url("/todos/completed"))).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn get_todos_by_list(
        &self,
        list_id: Option<&ListIdentifier>,
    ) -> Result<Vec<Todo>, ClientError> {
        let url = self.list_url(list_id.map_or(MAIN_LIST, ListIdentifier::as_str))?;
        self.data(self.client.get(url)).await
    }

    /// Appends `selector` as a single percent-encoded path segment.
    fn list_url(&self, selector: &str) -> Result<Url, ClientError> {
        let invalid = |message: String| ClientError::Parse { message };
        let mut url = Url::parse(&self.url("/todos/list"))
            .map_err(|error| invalid(format!("invalid API URL: {error}")))?;
        url.path_segments_mut()
            .map_err(|()| invalid(format!("API URL cannot have a path: {}", self.base_url)))?
            .push(selector);
        Ok(url)
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn get_lists(&self) -> Result<Vec<ListIdentifier>, ClientError> {
        self.data(self.client.get(self.url("/lists"))).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn create_todo(&self, request: &CreateTodoRequest) -> Result<Todo, ClientError> {
        self.data(self.client.post(self.url("/todos")).json(request))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure, including 404.
    pub async fn update_todo(
        &self,
        id: TodoIdentifier,
        request: &UpdateTodoRequest,
    ) -> Result<Todo, ClientError> {
        self.data(self.client.put(self.url(&format!("/todos/{id}"))).json(request))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure, including 404.
    pub async fn toggle_todo(&self, id: TodoIdentifier) -> Result<Todo, ClientError> {
        self.data(self.client.patch(self.url(&format!("/todos/{id}/toggle"))))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure, including 404.
    pub async fn delete_todo(&self, id: TodoIdentifier) -> Result<(), ClientError> {
        self.send::<serde_json::Value>(self.client.delete(self.url(&format!("/todos/{id}"))))
            .await
            .map(|_| ())
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure.
    pub async fn breakdown(&self, goal: &str) -> Result<Vec<AiTask>, ClientError> {
        let request = AiBreakdownRequest {
            goal: goal.to_string(),
        };
        let response: AiBreakdownResponse = self
            .data(self.client.post(self.url("/todos/ai/breakdown")).json(&request))
            .await?;
        Ok(response.suggested_tasks)
    }

    /// Returns the created todos and any per-task warnings.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or API failure, including the
    /// 500 sent when no task could be created.
    pub async fn create_from_tasks(
        &self,
        request: &AiCreateRequest,
    ) -> Result<(Vec<Todo>, Vec<String>), ClientError> {
        let envelope: Envelope<Vec<Todo>> = self
            .send(self.client.post(self.url("/todos/ai/create")).json(request))
            .await?;
        let warnings = envelope.warnings.clone();
        let created = envelope.into_data().ok_or(ClientError::MissingData)?;
        Ok((created, warnings))
    }
}

// =============================================================================
// Tests
// =============================================================================
