//! In-memory reference backend for the todo API.
//!
//! Serves the routes the client talks to under `/api`, plus a liveness
//! message at `/`. State lives only as long as the router.

pub mod store;

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, CorsLayer},
    trace::TraceLayer,
};

pub use store::{Todo, TodoCreate, TodoStore};

pub type Db = Arc<RwLock<TodoStore>>;

/// Frontend origins allowed to call the API from a browser.
pub const ALLOWED_ORIGINS: [&str; 3] = [
    "http://localhost:3000",
    "http://frontend:3000",
    "http://localhost:5173",
];

/// Router with a fresh, empty store.
pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(TodoStore::default()));
    let api = Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/", get(list_todos).post(create_todo))
        .route("/todos/{id}", get(get_todo).put(update_todo).delete(delete_todo))
        .with_state(db);

    Router::new()
        .route("/", get(root))
        .nest("/api", api)
        .layer(cors())
        .layer(TraceLayer::new_for_http())
}

/// Credentials are allowed, so methods and headers are mirrored rather than
/// wildcarded.
fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(ALLOWED_ORIGINS.map(HeaderValue::from_static))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// 404 for an id that is not in the store.
#[derive(Debug)]
pub struct TodoNotFound;

impl IntoResponse for TodoNotFound {
    fn into_response(self) -> Response {
        (StatusCode::NOT_FOUND, Json(json!({"detail": "Todo not found"}))).into_response()
    }
}

async fn root() -> Json<Value> {
    Json(json!({"message": "Todo API is running"}))
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    Json(db.read().await.list().to_vec())
}

async fn create_todo(State(db): State<Db>, Json(input): Json<TodoCreate>) -> Json<Todo> {
    let todo = db.write().await.create(input);
    tracing::debug!(id = todo.id, "created todo");
    Json(todo)
}

async fn get_todo(State(db): State<Db>, Path(id): Path<i64>) -> Result<Json<Todo>, TodoNotFound> {
    db.read().await.get(id).cloned().map(Json).ok_or(TodoNotFound)
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<TodoCreate>,
) -> Result<Json<Todo>, TodoNotFound> {
    db.write().await.replace(id, input).map(Json).ok_or(TodoNotFound)
}

async fn delete_todo(State(db): State<Db>, Path(id): Path<i64>) -> Result<Json<Value>, TodoNotFound> {
    db.write().await.remove(id).ok_or(TodoNotFound)?;
    tracing::debug!(id, "deleted todo");
    Ok(Json(json!({"message": "Todo deleted"})))
}
