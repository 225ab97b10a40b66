//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use jsonwebtoken::{EncodingKey, Header};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use campusfix_api::auth::Claims;
use campusfix_core::config::AppConfig;
use campusfix_core::config::auth::AuthConfig;
use campusfix_core::config::database::DatabaseConfig;

const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Test application context.
///
/// Every test creates its own users and requests with fresh UUIDs and
/// asserts only on those rows, so tests can share one database and run
/// in parallel.
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
}

impl TestApp {
    /// Create a test application against the database named by
    /// `CAMPUSFIX_TEST_DATABASE_URL`, or `None` when it is unset.
    pub async fn try_new() -> Option<Self> {
        let url = match std::env::var("CAMPUSFIX_TEST_DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                eprintln!("CAMPUSFIX_TEST_DATABASE_URL not set, skipping");
                return None;
            }
        };

        let config = AppConfig {
            server: Default::default(),
            database: DatabaseConfig {
                url,
                max_connections: 5,
                min_connections: 1,
                connect_timeout_seconds: 10,
                idle_timeout_seconds: 300,
            },
            auth: AuthConfig {
                jwt_secret: TEST_JWT_SECRET.to_string(),
                leeway_seconds: 0,
            },
            notification: Default::default(),
            logging: Default::default(),
        };

        let db_pool = campusfix_database::connection::create_pool(&config.database)
            .await
            .expect("Failed to connect to test database");

        campusfix_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        let router = campusfix_api::build_app(config, db_pool.clone());

        Some(Self { router, db_pool })
    }

    /// Mint a bearer token for a user with the given role.
    pub fn token(&self, user_id: Uuid, role: &str, username: &str) -> String {
        let claims = Claims {
            sub: user_id,
            role: role.to_string(),
            username: username.to_string(),
            exp: (chrono::Utc::now().timestamp() + 3600) as u64,
        };
        jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
        )
        .expect("Failed to encode token")
    }

    /// File a request through the API and return its id.
    pub async fn create_request(&self, token: &str, description: &str) -> Uuid {
        let body = serde_json::json!({
            "requester_name": "Dana Reyes",
            "requester_role": "student",
            "description": description,
            "building": "Science Annex",
            "room": "A204",
        });

        let response = self.request("POST", "/api/requests", Some(body), Some(token)).await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Create failed: {:?}",
            response.body
        );
        response.data_id()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// Extract `data.id` as a UUID.
    pub fn data_id(&self) -> Uuid {
        self.body
            .pointer("/data/id")
            .and_then(|v| v.as_str())
            .and_then(|s| s.parse().ok())
            .expect("No data.id in response")
    }

    /// Extract a string field from `data`.
    pub fn data_str(&self, field: &str) -> String {
        self.body
            .pointer(&format!("/data/{}", field))
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| panic!("No data.{} in response", field))
    }
}
