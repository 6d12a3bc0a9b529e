//! End-to-end read API test:
//! 1) Seed a product file through the store.
//! 2) Start the server on an ephemeral port.
//! 3) Exercise `/products`, `/products?limit=N`, `/products/{id}` and `/health`.

use inventory_records::{transport, NewProduct, ProductStore};
use serde_json::Value;
use std::net::SocketAddr;
use std::path::Path;

async fn spawn_server(products_file: &Path) -> SocketAddr {
    let state = transport::http::AppState::new(ProductStore::new(products_file));
    let router = transport::http::create_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn seed(products_file: &Path, count: usize) {
    let mut store = ProductStore::new(products_file);
    for i in 1..=count {
        store
            .create(NewProduct::new(
                format!("P{i}"),
                "d",
                "10",
                "t",
                format!("c{i}"),
                5i64,
            ))
            .unwrap();
    }
}

async fn get(client: &reqwest::Client, url: String) -> (u16, Value) {
    let resp = client.get(url).send().await.unwrap();
    let status = resp.status().as_u16();
    (status, resp.json::<Value>().await.unwrap())
}

fn ids(list: &Value) -> Vec<u64> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_u64().unwrap())
        .collect()
}

#[tokio::test]
async fn lists_products_with_and_without_limit() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("products.json");
    seed(&file, 3);
    let addr = spawn_server(&file).await;
    let client = reqwest::Client::new();

    let (status, all) = get(&client, format!("http://{addr}/products")).await;
    assert_eq!(status, 200);
    assert_eq!(ids(&all), vec![1, 2, 3]);
    assert_eq!(all[0]["title"], "P1");
    assert_eq!(all[0]["stock"], 5);

    let (_, limited) = get(&client, format!("http://{addr}/products?limit=2")).await;
    assert_eq!(ids(&limited), vec![1, 2]);

    for fallback in ["0", "-1", "4", "abc"] {
        let (status, body) =
            get(&client, format!("http://{addr}/products?limit={fallback}")).await;
        assert_eq!(status, 200);
        assert_eq!(ids(&body), vec![1, 2, 3], "limit={fallback}");
    }
}

#[tokio::test]
async fn fetches_single_product_or_reports_missing_id() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("products.json");
    seed(&file, 3);
    let addr = spawn_server(&file).await;
    let client = reqwest::Client::new();

    let (status, product) = get(&client, format!("http://{addr}/products/2")).await;
    assert_eq!(status, 200);
    assert_eq!(product["id"], 2);
    assert_eq!(product["code"], "c2");

    let (status, missing) = get(&client, format!("http://{addr}/products/99")).await;
    assert_eq!(status, 404);
    assert_eq!(missing, Value::from("Product with id 99 does not exist"));

    let (status, garbage) = get(&client, format!("http://{addr}/products/abc")).await;
    assert_eq!(status, 404);
    assert_eq!(garbage, Value::from("Product with id abc does not exist"));
}

#[tokio::test]
async fn reflects_changes_made_after_startup() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("products.json");
    let addr = spawn_server(&file).await;
    let client = reqwest::Client::new();

    // No file yet: an empty store, not an error.
    let (status, empty) = get(&client, format!("http://{addr}/products")).await;
    assert_eq!(status, 200);
    assert_eq!(empty, Value::Array(vec![]));

    seed(&file, 3);
    ProductStore::new(&file).delete(2).unwrap();

    let (_, all) = get(&client, format!("http://{addr}/products")).await;
    assert_eq!(ids(&all), vec![1, 3]);
    let (status, _) = get(&client, format!("http://{addr}/products/2")).await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn unreadable_file_surfaces_as_server_error() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("products.json");
    std::fs::write(&file, "not json").unwrap();
    let addr = spawn_server(&file).await;
    let client = reqwest::Client::new();

    let (status, body) = get(&client, format!("http://{addr}/products")).await;
    assert_eq!(status, 500);
    assert!(body.as_str().unwrap().contains("malformed product file"));

    let (status, health) = get(&client, format!("http://{addr}/health")).await;
    assert_eq!(status, 503);
    assert_eq!(health["success"], false);

    std::fs::write(&file, "[]").unwrap();
    let (status, health) = get(&client, format!("http://{addr}/health")).await;
    assert_eq!(status, 200);
    assert_eq!(health["data"]["status"], "ok");
    assert_eq!(health["data"]["products"], 0);
}
