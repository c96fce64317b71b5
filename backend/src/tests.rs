use std::sync::Arc;
use rocket::http::{Header, Status};
use rocket::local::asynchronous::Client;
use shared::{CountResponse, ErrorResponse};
use crate::{
    build_rocket,
    config::{ServiceConfig, DEFAULT_SITE_ID},
    cors::CORS,
    routes::AppState,
    store::{CountStore, MemoryCountStore, StoreError},
};

/// Lets several apps in one test share a store.
struct SharedStore(Arc<MemoryCountStore>);

#[rocket::async_trait]
impl CountStore for SharedStore {
    async fn increment(&self, site_id: &str) -> Result<i64, StoreError> {
        self.0.increment(site_id).await
    }

    async fn current(&self, site_id: &str) -> Result<Option<i64>, StoreError> {
        self.0.current(site_id).await
    }
}

struct BrokenStore;

#[rocket::async_trait]
impl CountStore for BrokenStore {
    async fn increment(&self, _site_id: &str) -> Result<i64, StoreError> {
        Err(StoreError::Database("connection reset".into()))
    }

    async fn current(&self, _site_id: &str) -> Result<Option<i64>, StoreError> {
        Err(StoreError::LockFailed)
    }
}

async fn client(store: impl CountStore + 'static, site_id: &str, origins: Vec<String>) -> Client {
    let rocket = build_rocket(AppState::new(store, site_id), CORS::new(origins));
    Client::tracked(rocket).await.expect("valid rocket instance")
}

async fn get_count(client: &Client) -> CountResponse {
    let response = client.get("/api/count").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    response.into_json::<CountResponse>().await.expect("count body")
}

#[rocket::async_test]
async fn test_counter_creates_and_increments() {
    let store = Arc::new(MemoryCountStore::new());
    let client = client(SharedStore(store.clone()), "test-site", vec![]).await;

    assert_eq!(get_count(&client).await, CountResponse::new(1));
    assert_eq!(get_count(&client).await, CountResponse::new(2));
    assert_eq!(store.current("test-site").await.unwrap(), Some(2));
}

#[rocket::async_test]
async fn test_counter_respects_site_partition() {
    let store = Arc::new(MemoryCountStore::new());
    let first = client(SharedStore(store.clone()), "first-site", vec![]).await;
    let second = client(SharedStore(store.clone()), "another-site", vec![]).await;

    get_count(&first).await;
    get_count(&second).await;
    assert_eq!(get_count(&second).await, CountResponse::new(2));

    assert_eq!(store.current("first-site").await.unwrap(), Some(1));
    assert_eq!(store.current("another-site").await.unwrap(), Some(2));
    assert_eq!(store.current(DEFAULT_SITE_ID).await.unwrap(), None);
}

#[rocket::async_test]
async fn test_count_is_not_cacheable_json() {
    let client = client(MemoryCountStore::new(), DEFAULT_SITE_ID, vec![]).await;
    let response = client.get("/api/count").dispatch().await;

    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.headers().get_one("Cache-Control"), Some("no-store"));
    assert_eq!(response.content_type(), Some(rocket::http::ContentType::JSON));
    assert_eq!(response.into_string().await.as_deref(), Some(r#"{"count":1}"#));
}

#[rocket::async_test]
async fn test_store_failure_is_internal_error() {
    let client = client(BrokenStore, DEFAULT_SITE_ID, vec![]).await;
    let response = client.get("/api/count").dispatch().await;

    assert_eq!(response.status(), Status::InternalServerError);
    let body = response.into_json::<ErrorResponse>().await.expect("error body");
    assert_eq!(body.status, 500);
    assert_eq!(body.error, "Counter unavailable");
}

#[rocket::async_test]
async fn test_unknown_route_is_json_404() {
    let client = client(MemoryCountStore::new(), DEFAULT_SITE_ID, vec![]).await;
    let response = client.get("/api/visits").dispatch().await;

    assert_eq!(response.status(), Status::NotFound);
    let body = response.into_json::<ErrorResponse>().await.expect("error body");
    assert_eq!(body.status, 404);
}

#[rocket::async_test]
async fn test_cors_headers_for_allowed_origin() {
    let origins = vec!["https://me.example.com".to_string()];
    let client = client(MemoryCountStore::new(), DEFAULT_SITE_ID, origins).await;

    let allowed = client
        .get("/api/count")
        .header(Header::new("Origin", "https://me.example.com"))
        .dispatch()
        .await;
    assert_eq!(
        allowed.headers().get_one("Access-Control-Allow-Origin"),
        Some("https://me.example.com")
    );

    let denied = client
        .get("/api/count")
        .header(Header::new("Origin", "https://elsewhere.example.com"))
        .dispatch()
        .await;
    assert_eq!(denied.headers().get_one("Access-Control-Allow-Origin"), None);
}

#[rocket::async_test]
async fn test_preflight_is_ok() {
    let client = client(MemoryCountStore::new(), DEFAULT_SITE_ID, vec![]).await;
    let response = client
        .options("/api/count")
        .header(Header::new("Origin", "http://localhost:8080"))
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Ok);
    assert_eq!(
        response.headers().get_one("Access-Control-Allow-Methods"),
        Some("GET, OPTIONS")
    );
}

#[test]
fn test_cors_defaults_to_localhost() {
    let cors = CORS::new(vec![]);
    assert!(cors.allows("http://localhost:8080"));
    assert!(!cors.allows("https://example.com"));
    assert!(CORS::new(vec!["*".into()]).allows("https://example.com"));
}

#[test]
fn test_service_config_from_secrets() {
    let config = ServiceConfig::from_lookup(|key| match key {
        "SITE_ID" => Some(" patrick-site ".into()),
        "ALLOWED_ORIGINS" => Some("https://a.example.com/, ,https://b.example.com".into()),
        _ => None,
    });
    assert_eq!(config.site_id, "patrick-site");
    assert_eq!(
        config.allowed_origins,
        vec!["https://a.example.com".to_string(), "https://b.example.com".to_string()]
    );

    assert_eq!(ServiceConfig::from_lookup(|_| None), ServiceConfig::default());
    assert_eq!(ServiceConfig::from_lookup(|_| Some(String::new())).site_id, DEFAULT_SITE_ID);
}
