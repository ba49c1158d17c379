use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use super::*;

fn sample_users() -> serde_json::Value {
    json!([
        {
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": { "street": "Kulas Light", "city": "Gwenborough" },
            "company": { "name": "Romaguera-Crona", "bs": "harness real-time e-markets" }
        },
        {
            "id": 2,
            "name": "Ervin Howell",
            "email": "Shanna@melissa.tv",
            "address": { "city": "Wisokyburgh" },
            "company": { "name": "Deckow-Crist" }
        }
    ])
}

/// Serves `/users`, failing with 503 for the first `failures` requests.
async fn spawn_directory(failures: usize) -> String {
    let hits = Arc::new(AtomicUsize::new(0));
    let app = Router::new().route(
        "/users",
        get(move || {
            let hits = hits.clone();
            async move {
                let n = hits.fetch_add(1, Ordering::SeqCst);
                if n < failures {
                    (StatusCode::SERVICE_UNAVAILABLE, "down").into_response()
                } else {
                    Json(sample_users()).into_response()
                }
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[test]
fn new_directory_is_pending() {
    let directory = UserDirectory::new();
    assert!(directory.is_loading());
    assert!(directory.users().is_empty());
    assert_eq!(directory.error(), None);
}

#[test]
fn user_ignores_extra_fields() {
    let users: Vec<User> = serde_json::from_value(sample_users()).unwrap();
    assert_eq!(users[0].address.city, "Gwenborough");
    assert_eq!(users[0].company.name, "Romaguera-Crona");
}

#[tokio::test]
async fn load_records_users() {
    let client = ApiClient::new(spawn_directory(0).await).unwrap();
    let mut directory = UserDirectory::new();
    directory.load(&client, &CancellationToken::new()).await;

    assert!(!directory.is_loading());
    assert_eq!(directory.error(), None);
    let names: Vec<&str> = directory.users().iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Leanne Graham", "Ervin Howell"]);
}

#[tokio::test]
async fn failed_load_sets_message_and_manual_retry_recovers() {
    let client = ApiClient::new(spawn_directory(1).await).unwrap();
    let cancel = CancellationToken::new();
    let mut directory = UserDirectory::new();

    directory.load(&client, &cancel).await;
    assert!(!directory.is_loading());
    assert_eq!(directory.error(), Some("HTTP error! status: 503"));
    assert!(directory.users().is_empty());

    directory.load(&client, &cancel).await;
    assert_eq!(directory.error(), None);
    assert_eq!(directory.users().len(), 2);
}

#[tokio::test]
async fn failed_refresh_keeps_previous_users() {
    let mut directory = UserDirectory::new();
    let ok = ApiClient::new(spawn_directory(0).await).unwrap();
    directory.load(&ok, &CancellationToken::new()).await;

    let down = ApiClient::new(spawn_directory(usize::MAX).await).unwrap();
    directory.load(&down, &CancellationToken::new()).await;
    assert!(directory.error().is_some());
    assert_eq!(directory.users().len(), 2);
}

#[tokio::test]
async fn cancelled_load_leaves_no_error() {
    let client = ApiClient::new(spawn_directory(0).await).unwrap();
    let cancel = CancellationToken::new();
    cancel.cancel();

    let mut directory = UserDirectory::new();
    directory.load(&client, &cancel).await;
    assert!(!directory.is_loading());
    assert_eq!(directory.error(), None);
    assert!(directory.users().is_empty());
}

#[tokio::test]
async fn cancelled_retry_keeps_previous_error() {
    let client = ApiClient::new(spawn_directory(usize::MAX).await).unwrap();
    let mut directory = UserDirectory::new();
    directory.load(&client, &CancellationToken::new()).await;
    assert_eq!(directory.error(), Some("HTTP error! status: 503"));

    let cancel = CancellationToken::new();
    cancel.cancel();
    directory.load(&client, &cancel).await;
    assert!(!directory.is_loading());
    assert_eq!(directory.error(), Some("HTTP error! status: 503"));
}
