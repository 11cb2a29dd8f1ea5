//! Client for the todo REST API.
//!
//! # Overview
//! Four operations against the backend (list, create, update, delete) plus a
//! fetch by id, over two wire shapes: `Todo` and `TodoCreate`.
//!
//! # Design
//! - `TodoClient` is stateless and does no I/O. Each operation is split into
//!   `build_*` (produces an `HttpRequest`) and `parse_*` (consumes an
//!   `HttpResponse`), so hosts that own their networking can drive it directly.
//! - `AsyncTodoClient` pairs a `TodoClient` with a `Transport` and exposes the
//!   operations as `async fn`s. `ReqwestTransport` is the default transport.
//! - The base URL is an explicit value: either a string or an
//!   `ExecutionContext` resolved once at construction.
//! - Any non-2xx status becomes `ApiError::RequestFailed`, whose message is the
//!   operation's fixed failure string. Nothing is retried.

pub mod api;
pub mod base_url;
pub mod client;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use api::AsyncTodoClient;
pub use base_url::{ExecutionContext, API_PORT, SERVER_BASE_URL};
pub use client::TodoClient;
pub use error::{ApiError, Operation};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{ReqwestTransport, Transport};
pub use types::{Todo, TodoCreate};
