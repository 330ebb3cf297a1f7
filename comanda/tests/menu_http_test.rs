//! Menu client tests against an in-process mock endpoint

use std::time::Duration;

use axum::{Json, Router, http::StatusCode, routing::get};
use serde_json::json;

use comanda::{MenuError, MenuHttp};

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock endpoint");
    let addr = listener.local_addr().expect("mock endpoint addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve mock endpoint");
    });
    format!("http://{addr}/menu.json")
}

#[tokio::test]
async fn test_fetch_menu_parses_records() {
    let app = Router::new().route(
        "/menu.json",
        get(|| async {
            Json(json!([
                {"name": "Cheeseburger", "price": 4.5, "imgSrc": "https://img/a"},
                {"name": "Bacon Burger", "price": 5, "imgSrc": "https://img/b"},
            ]))
        }),
    );
    let url = serve(app).await;

    let client = MenuHttp::new(url, Duration::from_secs(5));
    let items = client.fetch_menu().await.expect("menu should load");

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name, "Cheeseburger");
    assert_eq!(items[0].price, 4.5);
    assert_eq!(items[1].img_src, "https://img/b");
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let app = Router::new().route(
        "/menu.json",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let url = serve(app).await;

    let client = MenuHttp::new(url, Duration::from_secs(5));
    let err = client.fetch_menu().await.unwrap_err();

    match err {
        MenuError::Status(status) => assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_a_decode_error() {
    let app = Router::new().route("/menu.json", get(|| async { "{not json" }));
    let url = serve(app).await;

    let client = MenuHttp::new(url, Duration::from_secs(5));
    let err = client.fetch_menu().await.unwrap_err();

    assert!(matches!(err, MenuError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn test_unreachable_endpoint_is_a_transport_error() {
    // Nothing listens on the discard port
    let client = MenuHttp::new("http://127.0.0.1:9/menu.json", Duration::from_secs(2));
    let err = client.fetch_menu().await.unwrap_err();

    assert!(matches!(err, MenuError::Transport(_)), "got {err:?}");
}
