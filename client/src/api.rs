//! Async todo operations.
//!
//! Each call builds its request with `TodoClient`, awaits the transport once,
//! and parses the response. Nothing is retried or cached, and no state is
//! shared between calls, so concurrent calls never contend.

use tracing::{debug, warn};

use crate::base_url::ExecutionContext;
use crate::client::TodoClient;
use crate::error::{ApiError, Result};
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{ReqwestTransport, Transport};
use crate::types::{Todo, TodoCreate};

/// Async client for the todo API.
#[derive(Debug, Clone)]
pub struct AsyncTodoClient<T = ReqwestTransport> {
    core: TodoClient,
    transport: T,
}

impl AsyncTodoClient<ReqwestTransport> {
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(base_url, ReqwestTransport::default())
    }

    pub fn for_context(ctx: &ExecutionContext) -> Self {
        Self::new(&ctx.base_url())
    }
}

impl<T: Transport> AsyncTodoClient<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            core: TodoClient::new(base_url),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        self.core.base_url()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// All todos, in the order the backend returns them.
    pub async fn list_todos(&self) -> Result<Vec<Todo>> {
        let response = self.send(self.core.build_list_todos()).await?;
        self.core.parse_list_todos(response).inspect_err(log_failure)
    }

    pub async fn get_todo(&self, id: i64) -> Result<Todo> {
        let response = self.send(self.core.build_get_todo(id)).await?;
        self.core.parse_get_todo(response).inspect_err(log_failure)
    }

    /// Create a todo; the returned value carries the backend-assigned id.
    pub async fn create_todo(&self, input: &TodoCreate) -> Result<Todo> {
        let response = self.send(self.core.build_create_todo(input)?).await?;
        self.core.parse_create_todo(response).inspect_err(log_failure)
    }

    /// Replace every editable field of todo `id` with `input`.
    pub async fn update_todo(&self, id: i64, input: &TodoCreate) -> Result<Todo> {
        let response = self.send(self.core.build_update_todo(id, input)?).await?;
        self.core.parse_update_todo(response).inspect_err(log_failure)
    }

    pub async fn delete_todo(&self, id: i64) -> Result<()> {
        let response = self.send(self.core.build_delete_todo(id)).await?;
        self.core.parse_delete_todo(response).inspect_err(log_failure)
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        debug!(method = %request.method, url = %request.url, "sending request");
        self.transport.execute(request).await
    }
}

fn log_failure(err: &ApiError) {
    match (err.operation(), err.status()) {
        (Some(operation), Some(status)) => warn!(%operation, status, "todo request failed"),
        _ => warn!(error = %err, "todo response could not be decoded"),
    }
}
