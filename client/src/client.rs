//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! Whoever holds the request performs the round-trip; `AsyncTodoClient`
//! does it through a `Transport`.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::base_url::ExecutionContext;
use crate::error::{ApiError, Operation, Result};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Todo, TodoCreate};

/// Synchronous, stateless client for the todo API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Client whose base URL is resolved once from `ctx`.
    pub fn for_context(ctx: &ExecutionContext) -> Self {
        Self::new(&ctx.base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/todos/", self.base_url)
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/todos/{id}", self.base_url)
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.collection_url(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_todo(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.item_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_todo(&self, input: &TodoCreate) -> Result<HttpRequest> {
        json_request(HttpMethod::Post, self.collection_url(), input)
    }

    pub fn build_update_todo(&self, id: i64, input: &TodoCreate) -> Result<HttpRequest> {
        json_request(HttpMethod::Put, self.item_url(id), input)
    }

    pub fn build_delete_todo(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: self.item_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>> {
        parse_json(Operation::List, response)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo> {
        parse_json(Operation::Get, response)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo> {
        parse_json(Operation::Create, response)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<Todo> {
        parse_json(Operation::Update, response)
    }

    /// The body of a successful delete is ignored.
    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<()> {
        check_status(Operation::Delete, response).map(|_| ())
    }
}

fn json_request<T: Serialize>(method: HttpMethod, url: String, input: &T) -> Result<HttpRequest> {
    let body = serde_json::to_string(input).map_err(ApiError::Serialization)?;
    Ok(HttpRequest {
        method,
        url,
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: Some(body),
    })
}

fn parse_json<T: DeserializeOwned>(operation: Operation, response: HttpResponse) -> Result<T> {
    let response = check_status(operation, response)?;
    serde_json::from_str(&response.body).map_err(ApiError::Deserialization)
}

/// Any 2xx passes; everything else fails with the operation's fixed message.
fn check_status(operation: Operation, response: HttpResponse) -> Result<HttpResponse> {
    if response.is_success() {
        return Ok(response);
    }
    Err(ApiError::RequestFailed {
        operation,
        status: response.status,
        body: response.body,
    })
}
