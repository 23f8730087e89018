//! End-to-end tests for the claims API
//!
//! Requests are driven through the full router with `oneshot`, against either
//! a file store in a temporary directory or the in-memory store.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{self, Body},
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use chrono::{Days, Local};
use serde_json::{json, Value};
use tower::ServiceExt;

use core_kernel::{DomainPort, PortError};
use domain_claims::{Claim, ClaimStore, InMemoryClaimStore};
use infra_store::FileClaimStore;
use interface_api::{config::ApiConfig, create_router, dto::claims::CLAIM_SAVED_MESSAGE};
use test_utils::{ClaimBuilder, ClaimFixtures, PayloadFixtures, TempDataDir};

fn test_config(data: &TempDataDir) -> ApiConfig {
    ApiConfig {
        data_file: data.data_file(),
        log_file: None,
        ..ApiConfig::default()
    }
}

fn file_app(data: &TempDataDir) -> Router {
    let store = Arc::new(FileClaimStore::new(data.data_file()));
    create_router(store, test_config(data))
}

fn memory_app(claims: Vec<Claim>) -> Router {
    let config = ApiConfig {
        log_file: None,
        ..ApiConfig::default()
    };
    create_router(Arc::new(InMemoryClaimStore::with_claims(claims)), config)
}

fn post_json(uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

async fn claim_ids(app: &Router, uri: &str) -> Vec<i64> {
    let response = app.clone().oneshot(get(uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response)
        .await
        .as_array()
        .unwrap()
        .iter()
        .map(|claim| claim["claimID"].as_i64().unwrap())
        .collect()
}

mod create_and_list {
    use super::*;

    #[tokio::test]
    async fn test_post_then_get_returns_the_claim() {
        let data = TempDataDir::new();
        let app = file_app(&data);

        let response = app
            .clone()
            .oneshot(post_json("/api/claims", &PayloadFixtures::laptops()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["message"], CLAIM_SAVED_MESSAGE);
        assert_eq!(body["claim"], PayloadFixtures::laptops());

        let response = app.oneshot(get("/api/claims")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([PayloadFixtures::laptops()]));
    }

    #[tokio::test]
    async fn test_fresh_store_lists_nothing_and_creates_the_file() {
        let data = TempDataDir::new();
        let app = file_app(&data);

        let response = app.oneshot(get("/api/claims")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([]));
        assert!(data.data_file().exists());
    }

    #[tokio::test]
    async fn test_claims_are_listed_in_insertion_order() {
        let data = TempDataDir::new();
        let app = file_app(&data);

        let first = serde_json::to_value(ClaimFixtures::furniture()).unwrap();
        let second = serde_json::to_value(ClaimFixtures::laptops()).unwrap();
        for payload in [&first, &second] {
            let response = app.clone().oneshot(post_json("/api/claims", payload)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        assert_eq!(claim_ids(&app, "/api/claims").await, vec![1002, 1001]);
    }

    #[tokio::test]
    async fn test_duplicate_claim_ids_are_accepted() {
        let data = TempDataDir::new();
        let app = file_app(&data);

        for _ in 0..2 {
            let response = app
                .clone()
                .oneshot(post_json("/api/claims", &PayloadFixtures::laptops()))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        assert_eq!(claim_ids(&app, "/api/claims").await, vec![1001, 1001]);
    }

    #[tokio::test]
    async fn test_zero_quantity_claim_is_accepted() {
        let app = memory_app(Vec::new());
        let claim = ClaimBuilder::new().with_import_quantity(0).build();
        let payload = serde_json::to_value(&claim).unwrap();

        let response = app.oneshot(post_json("/api/claims", &payload)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["claim"]["importQuantity"], 0);
    }

    #[tokio::test]
    async fn test_saved_claim_is_persisted_to_the_file() {
        let data = TempDataDir::new();
        let app = file_app(&data);

        app.oneshot(post_json("/api/claims", &PayloadFixtures::laptops()))
            .await
            .unwrap();

        let stored: Value = serde_json::from_str(&data.read_raw()).unwrap();
        assert_eq!(stored, json!([PayloadFixtures::laptops()]));
    }
}

mod validation {
    use super::*;

    #[tokio::test]
    async fn test_each_missing_field_is_rejected() {
        let data = TempDataDir::new();
        let app = file_app(&data);

        for field in PayloadFixtures::field_names() {
            let payload = PayloadFixtures::laptops_without(field);
            let response = app.clone().oneshot(post_json("/api/claims", &payload)).await.unwrap();
            assert_eq!(
                response.status(),
                StatusCode::UNPROCESSABLE_ENTITY,
                "missing {field} should be rejected"
            );
        }

        assert!(claim_ids(&app, "/api/claims").await.is_empty());
    }

    #[tokio::test]
    async fn test_wrong_field_type_is_rejected() {
        let data = TempDataDir::new();
        let app = file_app(&data);

        let mut payload = PayloadFixtures::laptops();
        payload["claimID"] = json!("not-a-number");

        let response = app.clone().oneshot(post_json("/api/claims", &payload)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["error"], "validation_error");
        assert!(claim_ids(&app, "/api/claims").await.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_date_is_rejected() {
        let app = memory_app(Vec::new());

        let mut payload = PayloadFixtures::laptops();
        payload["importDate"] = json!("2024-02-30");

        let response = app.oneshot(post_json("/api/claims", &payload)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_malformed_json_is_rejected() {
        let app = memory_app(Vec::new());

        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/claims")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"claimID\": 1001,"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_body_without_content_type_is_read_as_json() {
        let app = memory_app(Vec::new());

        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/claims")
            .body(Body::from(PayloadFixtures::laptops().to_string()))
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(claim_ids(&app, "/api/claims").await, vec![1001]);
    }

    #[tokio::test]
    async fn test_non_json_content_type_is_rejected() {
        let app = memory_app(Vec::new());

        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/claims")
            .header(header::CONTENT_TYPE, "text/plain")
            .body(Body::from(PayloadFixtures::laptops().to_string()))
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(claim_ids(&app, "/api/claims").await.is_empty());
    }

    #[tokio::test]
    async fn test_empty_body_is_rejected() {
        let app = memory_app(Vec::new());

        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/claims")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_body_over_limit_is_rejected() {
        let data = TempDataDir::new();
        let config = ApiConfig {
            max_body_size: 64,
            ..test_config(&data)
        };
        let app = create_router(Arc::new(FileClaimStore::new(data.data_file())), config);

        let response = app
            .clone()
            .oneshot(post_json("/api/claims", &PayloadFixtures::laptops()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body_json(response).await["error"], "payload_too_large");
        assert!(claim_ids(&app, "/api/claims").await.is_empty());
    }
}

mod storage_failures {
    use super::*;

    #[tokio::test]
    async fn test_corrupt_file_fails_listing() {
        let data = TempDataDir::new();
        data.write_raw("{ not json");
        let app = file_app(&data);

        let response = app.oneshot(get("/api/claims")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_bytes(response).await, b"Internal server error");
    }

    #[tokio::test]
    async fn test_corrupt_file_is_not_overwritten_by_create() {
        let data = TempDataDir::new();
        data.write_raw("{ not json");
        let app = file_app(&data);

        let response = app
            .oneshot(post_json("/api/claims", &PayloadFixtures::laptops()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(data.read_raw(), "{ not json");
    }

    /// Store whose every operation panics
    struct PanickingStore;

    impl DomainPort for PanickingStore {}

    #[async_trait]
    impl ClaimStore for PanickingStore {
        async fn list_claims(&self) -> Result<Vec<Claim>, PortError> {
            panic!("store exploded");
        }

        async fn append_claim(&self, _claim: Claim) -> Result<(), PortError> {
            panic!("store exploded");
        }
    }

    #[tokio::test]
    async fn test_panic_becomes_internal_server_error() {
        let config = ApiConfig {
            log_file: None,
            ..ApiConfig::default()
        };
        let app = create_router(Arc::new(PanickingStore), config);

        let response = app.oneshot(get("/api/claims")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_bytes(response).await, b"Internal server error");
    }
}

mod search {
    use super::*;

    #[tokio::test]
    async fn test_no_criteria_returns_everything() {
        let app = memory_app(ClaimFixtures::all());
        assert_eq!(claim_ids(&app, "/api/claims/search").await, vec![1001, 1002, 1003]);
    }

    #[tokio::test]
    async fn test_search_by_hts_patterns() {
        let app = memory_app(ClaimFixtures::all());

        assert_eq!(claim_ids(&app, "/api/claims/search?hts=8471.*.*.*").await, vec![1001]);
        assert_eq!(
            claim_ids(&app, "/api/claims/search?hts=8471.*.*.*,9403.*.*.*").await,
            vec![1001, 1002]
        );
    }

    #[tokio::test]
    async fn test_search_by_absolute_dates() {
        let app = memory_app(ClaimFixtures::all());

        assert_eq!(
            claim_ids(&app, "/api/claims/search?from=2024-01-01&to=2024-03-31").await,
            vec![1001]
        );
        assert_eq!(claim_ids(&app, "/api/claims/search?from=2024-01-01").await, vec![1001, 1002]);
        assert_eq!(claim_ids(&app, "/api/claims/search?to=2023-12-31").await, vec![1003]);
    }

    #[tokio::test]
    async fn test_search_by_relative_range() {
        let today = Local::now().date_naive();
        let recent = ClaimBuilder::new()
            .with_claim_id(1)
            .with_import_date(today - Days::new(3))
            .build();
        let old = ClaimBuilder::new()
            .with_claim_id(2)
            .with_import_date(today - Days::new(100))
            .build();
        let app = memory_app(vec![recent, old]);

        assert_eq!(claim_ids(&app, "/api/claims/search?range=oneWeekBeforeToNow").await, vec![1]);
        assert_eq!(claim_ids(&app, "/api/claims/search?range=last90DaysToNow").await, vec![1]);
    }

    #[tokio::test]
    async fn test_relative_range_with_importer_and_hts() {
        let today = Local::now().date_naive();
        let claims = vec![
            ClaimBuilder::new()
                .with_claim_id(1)
                .with_importer_name("Acme Imports LLC")
                .with_hts_code("8471.30.01.00")
                .with_import_date(today)
                .build(),
            ClaimBuilder::new()
                .with_claim_id(2)
                .with_importer_name("Acme Imports LLC")
                .with_hts_code("9403.20.00.80")
                .with_import_date(today)
                .build(),
            ClaimBuilder::new()
                .with_claim_id(3)
                .with_importer_name("Globex Corp")
                .with_hts_code("8471.50.01.00")
                .with_import_date(today - Days::new(1))
                .build(),
        ];
        let app = memory_app(claims);

        let ids = claim_ids(
            &app,
            "/api/claims/search?range=twoWeeksBeforeToNow&hts=8471.*.*.*&importerName=Acme%20Imports%20LLC",
        )
        .await;
        assert_eq!(ids, vec![1]);
    }

    #[tokio::test]
    async fn test_search_by_importer_name() {
        let app = memory_app(ClaimFixtures::all());

        assert_eq!(
            claim_ids(&app, "/api/claims/search?importerName=Globex%20Corp").await,
            vec![1002]
        );
    }

    #[tokio::test]
    async fn test_criteria_are_combined() {
        let app = memory_app(ClaimFixtures::all());

        let ids = claim_ids(
            &app,
            "/api/claims/search?hts=8471.*.*.*,9403.*.*.*&from=2024-04-01",
        )
        .await;
        assert_eq!(ids, vec![1002]);
    }

    #[tokio::test]
    async fn test_invalid_search_parameters_are_rejected() {
        let app = memory_app(ClaimFixtures::all());

        for uri in [
            "/api/claims/search?hts=8471.30",
            "/api/claims/search?from=2024-05-01&to=2024-01-01",
            "/api/claims/search?range=lastCentury",
            "/api/claims/search?from=yesterday",
        ] {
            let response = app.clone().oneshot(get(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY, "{uri}");
        }
    }
}

mod health {
    use super::*;

    #[tokio::test]
    async fn test_health_check() {
        let app = memory_app(Vec::new());

        let response = app.oneshot(get("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "healthy");
    }

    #[tokio::test]
    async fn test_readiness_follows_store_health() {
        let data = TempDataDir::new();
        let app = file_app(&data);

        let response = app.clone().oneshot(get("/health/ready")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        data.write_raw("[{]");
        let response = app.oneshot(get("/health/ready")).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}

mod request_logging {
    use super::*;

    #[tokio::test]
    async fn test_oversized_body_is_still_processed() {
        let data = TempDataDir::new();
        let config = ApiConfig {
            max_log_size: 8,
            ..test_config(&data)
        };
        let app = create_router(Arc::new(FileClaimStore::new(data.data_file())), config);

        let mut payload = PayloadFixtures::laptops();
        payload["importerName"] = json!("A".repeat(20_000));

        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/claims")
            .header(header::CONTENT_TYPE, "application/json")
            .header("x-padding", "p".repeat(64))
            .body(Body::from(payload.to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["claim"]["importerName"].as_str().unwrap().len(), 20_000);
    }
}
