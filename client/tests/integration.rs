//! Full CRUD lifecycle against the live reference server, host-does-IO style.
//!
//! # Design
//! Starts the server on a random port, then drives every `TodoClient`
//! build/parse pair over real HTTP using ureq as the host's transport.

use todo_client::{HttpMethod, HttpRequest, HttpResponse, TodoClient, TodoCreate};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// ureq's status-as-error behavior is off so 4xx/5xx come back as data and
/// the client does the status interpretation.
fn execute(req: HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.url).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.url).call(),
        (HttpMethod::Post, Some(body)) => {
            agent.post(&req.url).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Post, None) => agent.post(&req.url).send_empty(),
        (HttpMethod::Put, Some(body)) => {
            agent.put(&req.url).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Put, None) => agent.put(&req.url).send_empty(),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse::new(status, body)
}

/// Start the server on a background thread and return its `/api` base URL.
fn spawn_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            todo_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}/api")
}

#[test]
fn crud_lifecycle() {
    let client = TodoClient::new(&spawn_server());

    // list: empty
    let todos = client.parse_list_todos(execute(client.build_list_todos())).unwrap();
    assert!(todos.is_empty(), "expected empty list");

    // create
    let input = TodoCreate::new("Integration test");
    let req = client.build_create_todo(&input).unwrap();
    let created = client.parse_create_todo(execute(req)).unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(TodoCreate::from(created.clone()), input);
    let id = created.id;

    // get
    let fetched = client.parse_get_todo(execute(client.build_get_todo(id))).unwrap();
    assert_eq!(fetched, created);

    // update: full replacement
    let replacement = TodoCreate::new("Updated title")
        .with_description("now with details")
        .completed(true);
    let req = client.build_update_todo(id, &replacement).unwrap();
    let updated = client.parse_update_todo(execute(req)).unwrap();
    assert_eq!(updated.id, id);
    assert_eq!(TodoCreate::from(updated), replacement);

    // update again without a description clears it
    let req = client.build_update_todo(id, &TodoCreate::new("Bare")).unwrap();
    let updated = client.parse_update_todo(execute(req)).unwrap();
    assert_eq!(updated.description, None);
    assert!(!updated.completed);

    // list: one item
    let todos = client.parse_list_todos(execute(client.build_list_todos())).unwrap();
    assert_eq!(todos.len(), 1);

    // delete
    client.parse_delete_todo(execute(client.build_delete_todo(id))).unwrap();

    // get after delete
    let err = client.parse_get_todo(execute(client.build_get_todo(id))).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.detail().as_deref(), Some("Todo not found"));

    // delete again
    let err = client.parse_delete_todo(execute(client.build_delete_todo(id))).unwrap_err();
    assert_eq!(err.to_string(), "Failed to delete todo");
    assert!(err.is_not_found());

    // list: empty again
    let todos = client.parse_list_todos(execute(client.build_list_todos())).unwrap();
    assert!(todos.is_empty(), "expected empty list after delete");
}
