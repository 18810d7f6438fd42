//! Supabase (PostgREST) todo store.
//!
//! Rows live in a single table addressed through the REST interface:
//!
//! | Operation | Request |
//! |---|---|
//! | `select_all` | `GET /rest/v1/{table}?select=*` |
//! | `insert` | `POST /rest/v1/{table}` |
//! | `update_by_id` | `PATCH /rest/v1/{table}?id=eq.{id}` |
//! | `delete_by_id` | `DELETE /rest/v1/{table}?id=eq.{id}` |
//!
//! Every request carries the project key both as `apikey` and as a bearer
//! token.

use lambars::effect::AsyncIO;
use listy_domain::{Todo, TodoIdentifier};
use listy_workflow::{TodoStore, WorkflowResult};
use reqwest::{Client, Method, RequestBuilder, Response};

use crate::config::SupabaseConfig;
use crate::errors::{InfraError, RemoteTarget};

// =============================================================================
// SupabaseTodoStore
// =============================================================================

#[derive(Debug, Clone)]
pub struct SupabaseTodoStore {
    client: Client,
    config: SupabaseConfig,
}

impl SupabaseTodoStore {
    /// Creates a store with its own HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`InfraError::Configuration`] if the HTTP client cannot be built.
    pub fn new(config: SupabaseConfig) -> Result<Self, InfraError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|error| InfraError::configuration(error.to_string()))?;
        Ok(Self::with_client(client, config))
    }

    #[must_use]
    pub fn with_client(client: Client, config: SupabaseConfig) -> Self {
        Self { client, config }
    }

    #[must_use]
    pub fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.config.url, self.config.table)
    }

    #[must_use]
    pub fn row_url(&self, id: TodoIdentifier) -> String {
        format!("{}?id=eq.{id}", self.table_url())
    }

    fn request(&self, method: Method, url: String) -> RequestBuilder {
        self.client
            .request(method, url)
            .header("apikey", &self.config.key)
            .bearer_auth(&self.config.key)
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Response, InfraError> {
        let response = request
            .send()
            .await
            .map_err(|error| InfraError::from_transport(RemoteTarget::Store, &error))?;

        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(InfraError::unexpected_status(
                RemoteTarget::Store,
                status.as_u16(),
                body,
            ))
        }
    }

    async fn fetch_all(&self) -> Result<Vec<Todo>, InfraError> {
        let url = format!("{}?select=*", self.table_url());
        let response = self.execute(self.request(Method::GET, url)).await?;

        let rows: Option<Vec<Todo>> = response
            .json()
            .await
            .map_err(|error| InfraError::serialization(error.to_string()))?;
        Ok(rows.unwrap_or_default())
    }

    async fn send_row(&self, method: Method, url: String, todo: &Todo) -> Result<(), InfraError> {
        let request = self
            .request(method, url)
            .header("Prefer", "return=minimal")
            .json(todo);
        self.execute(request).await.map(|_| ())
    }
}

impl TodoStore for SupabaseTodoStore {
    fn insert(&self, todo: Todo) -> AsyncIO<WorkflowResult<()>> {
        let store = self.clone();
        AsyncIO::new(move || async move {
            tracing::debug!(id = %todo.id, "inserting todo row");
            store
                .send_row(Method::POST, store.table_url(), &todo)
                .await
                .map_err(|error| error.into_storage("insert"))
        })
    }

    fn update_by_id(&self, id: TodoIdentifier, todo: Todo) -> AsyncIO<WorkflowResult<()>> {
        let store = self.clone();
        AsyncIO::new(move || async move {
            tracing::debug!(id = %id, "updating todo row");
            store
                .send_row(Method::PATCH, store.row_url(id), &todo)
                .await
                .map_err(|error| error.into_storage("update_by_id"))
        })
    }

    fn delete_by_id(&self, id: TodoIdentifier) -> AsyncIO<WorkflowResult<()>> {
        let store = self.clone();
        AsyncIO::new(move || async move {
            tracing::debug!(id = %id, "deleting todo row");
            store
                .execute(store.request(Method::DELETE, store.row_url(id)))
                .await
                .map(|_| ())
                .map_err(|error| error.into_storage("delete_by_id"))
        })
    }

    fn select_all(&self) -> AsyncIO<WorkflowResult<Vec<Todo>>> {
        let store = self.clone();
        AsyncIO::new(move || async move {
            store.fetch_all().await.map_err(|error| {
                tracing::error!(error = %error, "selecting todo rows failed");
                error.into_storage("select_all")
            })
        })
    }

    fn backend_name(&self) -> &'static str {
        "supabase"
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn store(url: &str) -> SupabaseTodoStore {
        SupabaseTodoStore::new(SupabaseConfig::new(url, "secret")).unwrap()
    }

    #[rstest]
    #[case("https://project.supabase.co", "https://project.supabase.co/rest/v1/todos")]
    #[case("https://project.supabase.co/", "https://project.supabase.co/rest/v1/todos")]
    fn table_url(#[case] base: &str, #[case] expected: &str) {
        assert_eq!(store(base).table_url(), expected);
    }

    #[rstest]
    fn row_url_filters_by_id() {
        let url = store("https://project.supabase.co").row_url(TodoIdentifier::new(12));

        assert_eq!(url, "https://project.supabase.co/rest/v1/todos?id=eq.12");
    }

    #[rstest]
    fn custom_table_name() {
        let config = SupabaseConfig::new("https://project.supabase.co", "secret").with_table("tasks");
        let store = SupabaseTodoStore::new(config).unwrap();

        assert_eq!(store.table_url(), "https://project.supabase.co/rest/v1/tasks");
    }

    #[rstest]
    #[tokio::test]
    async fn unreachable_host_is_storage_error() {
        let store = store("http://127.0.0.1:9");

        let error = store.select_all().await.unwrap_err();

        assert!(error.is_storage());
    }
}
