use crate::errors::{TodoApiError, TransportError};
use crate::types::{NewTodo, Todo, TodoId};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{RequestBuilder, Response};
use tracing::error;
use url::Url;

/// Base endpoint the todo API serves by default.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/todos";

#[derive(Clone)]
pub struct TodoApiClient {
    base_url: Url,
    http_client: reqwest::Client,
}

impl TodoApiClient {
    pub fn new(base_url: &str) -> Result<Self, TodoApiError> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http_client = reqwest::Client::builder()
            .default_headers(default_headers)
            .build()
            .map_err(TodoApiError::HttpClientBuildFailed)?;

        // Joining drops the last path segment unless the base ends with '/'.
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(TodoApiClient {
            base_url,
            http_client,
        })
    }

    /// All todos, in whatever order the server returns them.
    pub async fn fetch_todos(&self) -> Result<Vec<Todo>, TodoApiError> {
        match self.send_json(self.get("")).await {
            Ok(todos) => Ok(todos),
            Err(err) => {
                error!("error fetching todos: {err}");
                Err(TodoApiError::Fetch)
            }
        }
    }

    /// Create a new todo; the server assigns its id.
    pub async fn create_todo(&self, new_todo: &NewTodo) -> Result<Todo, TodoApiError> {
        match self.send_json(self.post("", new_todo)).await {
            Ok(todo) => Ok(todo),
            Err(err) => {
                error!("error creating todo: {err}");
                Err(TodoApiError::Create)
            }
        }
    }

    /// Replace the todo identified by `todo.id` with the given fields.
    pub async fn update_todo(&self, todo: &Todo) -> Result<Todo, TodoApiError> {
        match self.send_json(self.put(&todo.id.to_string(), todo)).await {
            Ok(updated) => Ok(updated),
            Err(err) => {
                error!("error updating todo: {err}");
                Err(TodoApiError::Update)
            }
        }
    }

    /// Delete a todo. Returns `true` once the server confirms.
    pub async fn delete_todo(&self, id: TodoId) -> Result<bool, TodoApiError> {
        match self.send_empty(self.delete(&id.to_string())).await {
            Ok(()) => Ok(true),
            Err(err) => {
                error!("error deleting todo: {err}");
                Err(TodoApiError::Delete)
            }
        }
    }

    /// Flip a todo's completion flag. The server owns the toggle: calling
    /// this twice restores the original state.
    pub async fn toggle_complete(&self, id: TodoId) -> Result<Todo, TodoApiError> {
        match self.send_json(self.patch(&format!("{id}/complete"))).await {
            Ok(todo) => Ok(todo),
            Err(err) => {
                error!("error toggling todo completion: {err}");
                Err(TodoApiError::Toggle)
            }
        }
    }

    /// Todos filtered by completion status, server-side.
    pub async fn todos_by_completion(&self, is_completed: bool) -> Result<Vec<Todo>, TodoApiError> {
        match self
            .send_json(self.get(&format!("completed/{is_completed}")))
            .await
        {
            Ok(todos) => Ok(todos),
            Err(err) => {
                error!("error fetching todos by status: {err}");
                Err(TodoApiError::Filter)
            }
        }
    }

    /// A single todo by id.
    pub async fn todo_by_id(&self, id: TodoId) -> Result<Todo, TodoApiError> {
        match self.send_json(self.get(&id.to_string())).await {
            Ok(todo) => Ok(todo),
            Err(err) => {
                error!("error fetching todo by id: {err}");
                Err(TodoApiError::Get)
            }
        }
    }

    fn build_url(&self, endpoint: &str) -> Result<Url, TransportError> {
        self.base_url
            .join(endpoint)
            .map_err(TransportError::EndpointInvalid)
    }

    fn get(&self, endpoint: &str) -> Result<RequestBuilder, TransportError> {
        Ok(self.http_client.get(self.build_url(endpoint)?))
    }

    fn post<B: serde::Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<RequestBuilder, TransportError> {
        Ok(self.http_client.post(self.build_url(endpoint)?).json(body))
    }

    fn put<B: serde::Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<RequestBuilder, TransportError> {
        Ok(self.http_client.put(self.build_url(endpoint)?).json(body))
    }

    fn delete(&self, endpoint: &str) -> Result<RequestBuilder, TransportError> {
        Ok(self.http_client.delete(self.build_url(endpoint)?))
    }

    fn patch(&self, endpoint: &str) -> Result<RequestBuilder, TransportError> {
        Ok(self.http_client.patch(self.build_url(endpoint)?))
    }

    async fn send_json<T: serde::de::DeserializeOwned>(
        &self,
        request: Result<RequestBuilder, TransportError>,
    ) -> Result<T, TransportError> {
        let response = self.dispatch(request?).await?;
        self.handle_json_response(response).await
    }

    async fn send_empty(
        &self,
        request: Result<RequestBuilder, TransportError>,
    ) -> Result<(), TransportError> {
        self.dispatch(request?).await?;
        Ok(())
    }

    async fn dispatch(&self, builder: RequestBuilder) -> Result<Response, TransportError> {
        let response = match builder.send().await {
            Ok(res) => res,
            Err(e) => {
                // Connect/timeout failures are network issues; the rest
                // failed while building or sending the request.
                if e.is_connect() || e.is_timeout() {
                    return Err(TransportError::NetworkIssue(e));
                }
                return Err(TransportError::RequestFailed(e));
            }
        };

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Could not read error body".to_string());
        Err(TransportError::HttpError { status, body })
    }

    async fn handle_json_response<T: serde::de::DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, TransportError> {
        response
            .json::<T>()
            .await
            .map_err(TransportError::DeserializationFailed)
    }
}
