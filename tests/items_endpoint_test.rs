use axum::http::StatusCode;
use margincalc::api;
use margincalc::datasource::MockCatalogSource;
use margincalc::domain::{PriceValue, SheetRow};
use std::sync::Arc;
use tower::util::ServiceExt;

fn setup_app(source: MockCatalogSource) -> axum::Router {
    api::create_router(api::AppState {
        catalog: Arc::new(source),
    })
}

fn row(nama: &str, jenis: &str, pokok: PriceValue, nego: PriceValue) -> SheetRow {
    SheetRow {
        nama: nama.to_string(),
        jenis: jenis.to_string(),
        harga_pokok: pokok,
        harga_nego: nego,
    }
}

async fn request(app: axum::Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let req = axum::http::Request::builder()
        .method("GET")
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();
    (status, body)
}

#[tokio::test]
async fn test_items_returns_raw_rows() {
    let source = MockCatalogSource::new()
        .with_row(row(
            "Kaos Polos",
            "Kaos",
            PriceValue::Text("30.000".to_string()),
            PriceValue::Text("45.000".to_string()),
        ))
        .with_row(row(
            "Topi",
            "Aksesoris",
            PriceValue::Number(15000),
            PriceValue::Number(20000),
        ));

    let (status, body) = request(setup_app(source), "/api/items").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let items = json.as_array().expect("array body");
    assert_eq!(items.len(), 2);

    assert_eq!(items[0]["nama"], "Kaos Polos");
    assert_eq!(items[0]["jenis"], "Kaos");
    assert_eq!(items[0]["hargaPokok"], "30.000");
    assert_eq!(items[0]["hargaNego"], "45.000");

    // Numeric sheet values pass through as numbers.
    assert_eq!(items[1]["hargaPokok"], 15000);
    assert_eq!(items[1]["hargaNego"], 20000);
}

#[tokio::test]
async fn test_items_empty_catalog_is_ok_not_error() {
    let (status, body) = request(setup_app(MockCatalogSource::new()), "/api/items").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, serde_json::json!([]));
}

#[tokio::test]
async fn test_items_upstream_failure_returns_500_with_error_body() {
    let (status, body) = request(setup_app(MockCatalogSource::failing()), "/api/items").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_health_probe() {
    let (status, body) = request(setup_app(MockCatalogSource::new()), "/health").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "ok");
}
