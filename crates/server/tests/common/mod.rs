//! Common test utilities for E2E testing with mocks.
//!
//! This module provides a test fixture that creates an in-process server
//! with mock storage and seed injected, enabling end-to-end testing of both
//! front-ends without files or network.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use storefront_core::{
    config::{ContactConfig, NoticeConfig, SeedConfig, ServerConfig, StorageConfig},
    store::DEFAULT_STORAGE_KEY,
    testing::{MockKeyValueStore, MockSeedSource},
    AdminEditor, AuthConfig, AuthMethod, Authenticator, Catalog, CatalogStore, Config,
    NoneAuthenticator, SharedPasswordAuthenticator,
};

/// Re-export fixtures for test convenience
pub use storefront_core::testing::fixtures;

/// Password used when the fixture runs with the admin gate closed.
pub const ADMIN_PASSWORD: &str = "test-password";

/// Test fixture for E2E testing with mock dependencies.
///
/// Provides an in-process server with fully controllable mocks for:
/// - The persisted slot (MockKeyValueStore)
/// - The seed resource (MockSeedSource)
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_browse() {
///     let fixture = TestFixture::new().await;
///
///     let response = fixture.get("/api/v1/products?q=producto").await;
///
///     assert_eq!(response.status, 200);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock storage - inspect or break the persisted slot
    pub storage: Arc<MockKeyValueStore>,
    /// Mock seed - swap the seed catalog or make it fail
    pub seed: Arc<MockSeedSource>,
    /// Temporary directory served as the static site
    pub temp_dir: TempDir,
    /// Password sent with admin requests, if the gate is closed
    password: Option<String>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestFixture {
    /// Create a new test fixture with default mocks.
    pub async fn new() -> Self {
        Self::with_config(TestConfig::default()).await
    }

    /// Create a test fixture with custom configuration.
    pub async fn with_config(test_config: TestConfig) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        std::fs::write(temp_dir.path().join("index.html"), "<h1>Storefront</h1>")
            .expect("Failed to write index.html");

        let storage = Arc::new(MockKeyValueStore::new());
        let seed = Arc::new(match test_config.seed {
            Some(catalog) => MockSeedSource::with_catalog(catalog),
            None => MockSeedSource::failing(),
        });

        let password = test_config
            .require_password
            .then(|| ADMIN_PASSWORD.to_string());
        let auth = match &password {
            Some(password) => AuthConfig {
                method: AuthMethod::Password,
                password: Some(password.clone()),
            },
            None => AuthConfig {
                method: AuthMethod::None,
                password: None,
            },
        };
        let authenticator: Arc<dyn Authenticator> = match &password {
            Some(password) => Arc::new(SharedPasswordAuthenticator::new(password.clone())),
            None => Arc::new(NoneAuthenticator::new()),
        };

        let config = Config {
            auth,
            server: ServerConfig {
                host: std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
                port: 0, // Not used for in-process testing
                static_dir: temp_dir.path().to_path_buf(),
            },
            storage: StorageConfig::default(),
            seed: SeedConfig::default(),
            contact: ContactConfig {
                phone: test_config.phone.clone(),
                ..ContactConfig::default()
            },
            notices: NoticeConfig::default(),
        };

        let store = Arc::new(CatalogStore::new(
            Arc::clone(&storage) as Arc<dyn storefront_core::KeyValueStore>,
            Arc::clone(&seed) as Arc<dyn storefront_core::SeedSource>,
            DEFAULT_STORAGE_KEY,
        ));
        let (editor, _notices) = AdminEditor::open(Arc::clone(&store)).await;

        let state = Arc::new(storefront_server::state::AppState::new(
            config,
            authenticator,
            store,
            editor,
        ));

        let router = storefront_server::api::create_router(state);

        Self {
            router,
            storage,
            seed,
            temp_dir,
            password,
        }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None).await
    }

    /// Send a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request("POST", path, Some(body)).await
    }

    /// Send a POST request without a body.
    pub async fn post_empty(&self, path: &str) -> TestResponse {
        self.request("POST", path, None).await
    }

    /// Send a DELETE request.
    pub async fn delete(&self, path: &str) -> TestResponse {
        self.request("DELETE", path, None).await
    }

    /// Send a GET request without the admin password.
    pub async fn get_anonymous(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    /// Send a request with only the given headers, never the admin password.
    pub async fn send_with_headers(
        &self,
        method: &str,
        path: &str,
        headers: &[(&str, &str)],
        body: Option<Value>,
    ) -> TestResponse {
        let mut request_builder = Request::builder().method(method).uri(path);
        for (name, value) in headers {
            request_builder = request_builder.header(*name, *value);
        }

        let body = match body {
            Some(json_body) => {
                request_builder = request_builder.header("Content-Type", "application/json");
                Body::from(serde_json::to_vec(&json_body).unwrap())
            }
            None => Body::empty(),
        };

        self.send(request_builder.body(body).unwrap()).await
    }

    /// Send a request with raw body text, returned as a string.
    pub async fn get_text(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        (status, String::from_utf8_lossy(&body_bytes).into_owned())
    }

    /// Send a request to the test server.
    async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let mut request_builder = Request::builder().method(method).uri(path);

        if let Some(password) = &self.password {
            request_builder = request_builder.header("X-Admin-Password", password.as_str());
        }

        let body = if let Some(json_body) = body {
            request_builder = request_builder.header("Content-Type", "application/json");
            Body::from(serde_json::to_vec(&json_body).unwrap())
        } else {
            Body::empty()
        };

        let request = request_builder.body(body).unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }
}

/// Configuration for test fixture.
#[derive(Debug, Clone, Default)]
pub struct TestConfig {
    /// Seed catalog; `None` makes the seed fail
    pub seed: Option<Catalog>,
    /// Close the admin gate with [`ADMIN_PASSWORD`]
    pub require_password: bool,
    /// Contact phone number
    pub phone: Option<String>,
}

impl TestConfig {
    /// Seed with the given catalog.
    pub fn with_seed(catalog: Catalog) -> Self {
        Self {
            seed: Some(catalog),
            ..Self::default()
        }
    }

    /// Seed with `catalog` and require the admin password.
    pub fn with_password(catalog: Catalog) -> Self {
        Self {
            seed: Some(catalog),
            require_password: true,
            ..Self::default()
        }
    }
}

/// Helper to assert a response has expected status.
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status, $status,
            "Expected status {:?}, got {:?}. Body: {}",
            $status,
            $response.status,
            serde_json::to_string_pretty(&$response.body).unwrap_or_default()
        );
    };
}
