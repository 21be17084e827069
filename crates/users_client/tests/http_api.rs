#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Exercises `HttpUsersApi` and the views against an in-process stub of the
//! users API that answers with the same envelopes as the real one.

use axum::{
    extract::{Path, State},
    http::{Method, StatusCode},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use users_client::{
    Action, ApiConfig, ApiError, DetailParams, DetailView, HttpUsersApi, ListView, Route,
    User, UsersApi,
};

#[derive(Clone, Debug, PartialEq)]
struct Recorded {
    method: Method,
    path: String,
    body: Option<Value>,
}

#[derive(Clone, Default)]
struct Stub {
    users: Arc<Mutex<Option<Vec<User>>>>,
    requests: Arc<Mutex<Vec<Recorded>>>,
    fail_mutations: bool,
}

impl Stub {
    fn seeded() -> Self {
        let users = vec![
            User {
                id: 1,
                name: "John Doe".to_string(),
                email: "john.doe@example.com".to_string(),
            },
            User {
                id: 2,
                name: "Jane Smith".to_string(),
                email: "jane.smith@example.com".to_string(),
            },
        ];
        Self {
            users: Arc::new(Mutex::new(Some(users))),
            ..Self::default()
        }
    }

    fn record(&self, method: Method, path: String, body: Option<Value>) {
        self.requests
            .lock()
            .unwrap()
            .push(Recorded { method, path, body });
    }

    fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    fn mutations(&self) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|request| request.method != Method::GET)
            .collect()
    }
}

async fn list_users(State(stub): State<Stub>) -> Json<Value> {
    stub.record(Method::GET, "/users".to_string(), None);
    let users = stub.users.lock().unwrap().clone();
    Json(json!(users))
}

async fn get_user(State(stub): State<Stub>, Path(id): Path<i64>) -> (StatusCode, Json<Value>) {
    stub.record(Method::GET, format!("/users/{id}"), None);
    let found = stub
        .users
        .lock()
        .unwrap()
        .iter()
        .flatten()
        .find(|user| user.id == id)
        .cloned();

    match found {
        Some(user) => (StatusCode::OK, Json(json!(user))),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "User not found" })),
        ),
    }
}

async fn add_user(State(stub): State<Stub>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    stub.record(Method::POST, "/users".to_string(), Some(body.clone()));
    if stub.fail_mutations {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "success": false, "message": "Error creating resource.", "error": "disk full" })),
        );
    }

    let mut data = body;
    data["id"] = json!(6);
    (
        StatusCode::CREATED,
        Json(json!({ "success": true, "message": "Resource created successfully.", "data": data })),
    )
}

async fn edit_user(
    State(stub): State<Stub>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    stub.record(Method::PUT, format!("/users/{id}"), Some(body.clone()));
    if stub.fail_mutations {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "success": false, "message": "Error updating resource.", "error": "locked" })),
        );
    }

    (
        StatusCode::OK,
        Json(json!({ "success": true, "message": "Resource updated successfully.", "data": body })),
    )
}

async fn delete_user(State(stub): State<Stub>, Path(id): Path<i64>) -> (StatusCode, Json<Value>) {
    stub.record(Method::DELETE, format!("/users/{id}"), None);
    if stub.fail_mutations {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "success": false, "message": "Error deleting resource.", "error": "locked" })),
        );
    }

    (
        StatusCode::OK,
        Json(json!({ "success": true, "message": "Resource deleted successfully." })),
    )
}

async fn serve(stub: Stub) -> anyhow::Result<HttpUsersApi> {
    let app = Router::new()
        .route("/users", get(list_users).post(add_user))
        .route(
            "/users/:id",
            get(get_user).put(edit_user).delete(delete_user),
        )
        .with_state(stub);

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server failed");
    });

    Ok(HttpUsersApi::new(ApiConfig::new(&format!("http://{addr}/")))?)
}

#[tokio::test]
async fn list_view_loads_every_user() -> anyhow::Result<()> {
    let stub = Stub::seeded();
    let api = serve(stub.clone()).await?;
    let mut view = ListView::new();

    view.load(&api).await;

    assert_eq!(view.users().len(), 2);
    assert_eq!(view.users()[1].email, "jane.smith@example.com");
    assert_eq!(stub.requests().len(), 1);
    Ok(())
}

#[tokio::test]
async fn null_list_is_an_empty_table() -> anyhow::Result<()> {
    let api = serve(Stub::default()).await?;
    assert!(api.list_users().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn missing_user_surfaces_the_error_field() -> anyhow::Result<()> {
    let api = serve(Stub::seeded()).await?;

    let err = api.get_user(42).await.unwrap_err();

    assert_eq!(
        err,
        ApiError::Http {
            status: 404,
            message: "User not found".to_string(),
        }
    );
    Ok(())
}

#[tokio::test]
async fn create_form_posts_once_and_returns_to_the_list() -> anyhow::Result<()> {
    let stub = Stub::seeded();
    let api = serve(stub.clone()).await?;
    let mut view = DetailView::new(DetailParams::from_parts(Some("new"), Some("new")));
    view.load(&api).await;
    view.set_name("Alice");
    view.set_email("a@x.com");

    let route = view.submit(&api, |_| true).await;

    assert_eq!(route, Ok(Some(Route::Users)));
    assert_eq!(
        stub.mutations(),
        vec![Recorded {
            method: Method::POST,
            path: "/users".to_string(),
            body: Some(json!({ "name": "Alice", "email": "a@x.com" })),
        }]
    );
    assert_eq!(
        view.notification().map(|n| n.message.as_str()),
        Some("Resource created successfully.")
    );
    Ok(())
}

#[tokio::test]
async fn edit_form_puts_id_name_and_email() -> anyhow::Result<()> {
    let stub = Stub::seeded();
    let api = serve(stub.clone()).await?;
    let mut view = DetailView::new(DetailParams::from_parts(Some("2"), Some("edit")));
    view.load(&api).await;
    assert_eq!(view.draft().name, "Jane Smith");
    view.set_name("Jane Doe");

    let route = view.submit(&api, |_| true).await;

    assert_eq!(route, Ok(Some(Route::Users)));
    assert_eq!(
        stub.mutations(),
        vec![Recorded {
            method: Method::PUT,
            path: "/users/2".to_string(),
            body: Some(json!({ "id": 2, "name": "Jane Doe", "email": "jane.smith@example.com" })),
        }]
    );
    Ok(())
}

#[tokio::test]
async fn declined_delete_sends_nothing() -> anyhow::Result<()> {
    let stub = Stub::seeded();
    let api = serve(stub.clone()).await?;
    let mut view = DetailView::new(DetailParams::from_parts(Some("1"), Some("delete")));
    view.load(&api).await;

    let result = view.submit(&api, |_| false).await;

    assert!(result.is_err());
    assert!(stub.mutations().is_empty());
    Ok(())
}

#[tokio::test]
async fn failed_mutations_keep_the_operator_on_the_form() -> anyhow::Result<()> {
    let stub = Stub {
        fail_mutations: true,
        ..Stub::seeded()
    };
    let api = serve(stub.clone()).await?;

    for (id, action, expected) in [
        ("new", "new", "Failed to create the user: Error creating resource."),
        ("1", "edit", "Failed to update the user: Error updating resource."),
        ("1", "delete", "Failed to delete the user: Error deleting resource."),
    ] {
        let mut view = DetailView::new(DetailParams::from_parts(Some(id), Some(action)));
        view.load(&api).await;
        if view.action() == Action::New {
            view.set_name("Alice");
            view.set_email("a@x.com");
        }

        let route = view.submit(&api, |_| true).await;

        assert_eq!(route, Ok(None));
        let notification = view.notification().cloned().expect("notification");
        assert!(notification.is_error());
        assert_eq!(notification.message, expected);
    }

    assert_eq!(stub.mutations().len(), 3);
    Ok(())
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    let api = HttpUsersApi::new(ApiConfig::new(&format!("http://{addr}")))?;
    let err = api.list_users().await.unwrap_err();

    assert!(matches!(err, ApiError::Network(_)), "unexpected error: {err:?}");
    Ok(())
}
