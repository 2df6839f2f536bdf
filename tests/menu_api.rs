//! Integration tests for the menu HTTP surface.
//!
//! Drives the full router over an in-memory store, covering the list and
//! detail endpoints plus the 404 path.

use std::sync::Arc;

use poem::http::{Method, StatusCode, Uri};
use poem::{Endpoint, Request};
use serde_json::Value;

use be_menu_rust::create_app;
use be_menu_rust::models::menu::NewMenu;
use be_menu_rust::store::{MemoryMenuStore, MenuStore};

fn empty_app() -> impl Endpoint {
    let store: Arc<dyn MenuStore> = Arc::new(MemoryMenuStore::new());
    create_app(store)
}

/// App with a single "Margherita Pizza" item; returns its assigned id.
fn seeded_app() -> (impl Endpoint, i64) {
    let store = MemoryMenuStore::new();
    let item = store
        .create(NewMenu {
            name: "Margherita Pizza".to_string(),
            price: "9.99".to_string(),
        })
        .unwrap();
    let store: Arc<dyn MenuStore> = Arc::new(store);
    (create_app(store), item.id)
}

async fn get(app: &impl Endpoint, path: &str) -> (StatusCode, Option<Value>) {
    let req = Request::builder()
        .method(Method::GET)
        .uri(path.parse::<Uri>().unwrap())
        .finish();
    let resp = app.get_response(req).await;
    let status = resp.status();
    let bytes = resp.into_body().into_vec().await.unwrap();
    (status, serde_json::from_slice(&bytes).ok())
}

#[tokio::test]
async fn menu_list_on_empty_store_returns_empty_array() {
    let app = empty_app();
    let (status, body) = get(&app, "/menu/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.unwrap(), serde_json::json!([]));
}

#[tokio::test]
async fn menu_list_returns_single_created_item() {
    let (app, _) = seeded_app();
    let (status, body) = get(&app, "/menu/").await;

    assert_eq!(status, StatusCode::OK);
    let body = body.unwrap();
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);

    let item = &items[0];
    assert_eq!(item["name"], "Margherita Pizza");
    let price: f64 = item["price"].as_str().unwrap().parse().unwrap();
    assert!((price - 9.99).abs() < 1e-9);
    assert!(item.get("created").is_some());
    assert!(item.get("updated").is_some());
}

#[tokio::test]
async fn menu_detail_returns_matching_item() {
    let (app, menu_id) = seeded_app();
    let (status, body) = get(&app, &format!("/menu/{}/", menu_id)).await;

    assert_eq!(status, StatusCode::OK);
    let item = body.unwrap();
    assert_eq!(item["id"].as_i64().unwrap(), menu_id);
    assert_eq!(item["name"], "Margherita Pizza");
    let price: f64 = item["price"].as_str().unwrap().parse().unwrap();
    assert!((price - 9.99).abs() < 1e-9);
}

#[tokio::test]
async fn menu_detail_without_trailing_slash_also_resolves() {
    let (app, menu_id) = seeded_app();
    let (status, _) = get(&app, &format!("/menu/{}", menu_id)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn menu_detail_unknown_id_returns_404() {
    let (app, menu_id) = seeded_app();
    // Stays inside the valid id range but matches nothing.
    let (status, body) = get(&app, &format!("/menu/{}/", menu_id + 1)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.unwrap().get("message").is_some());
}

#[tokio::test]
async fn menu_detail_out_of_range_id_returns_404() {
    let (app, _) = seeded_app();
    let (status, _) = get(&app, "/menu/42/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
