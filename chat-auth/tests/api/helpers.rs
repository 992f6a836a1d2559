use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use reqwest::{Client, Response};
use test_context::AsyncTestContext;
use tokio::spawn;
use tokio::sync::RwLock;
use uuid::Uuid;

use chat_auth::app_state::AppState;
use chat_auth::domain::{Clock, LoginRequestBody, Password, Phone, User};
use chat_auth::services::HashmapUserStore;
use chat_auth::utils::{Secret, TokenPolicy};
use chat_auth::Application;

pub const ACCESS_TTL: i64 = 900;
pub const REFRESH_TTL: i64 = 86_400;
pub const START: i64 = 1_700_000_000;

/// Clock the tests can move forward to expire tokens without sleeping.
pub struct TestClock(AtomicI64);

impl TestClock {
    pub fn advance(&self, seconds: i64) {
        self.0.fetch_add(seconds, Ordering::SeqCst);
    }
}

impl Clock for TestClock {
    fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.0.load(Ordering::SeqCst), 0).unwrap()
    }
}

pub struct TestApp {
    pub address: String,
    pub http_client: Client,
    pub app_state: AppState,
    pub clock: Arc<TestClock>,
}

impl TestApp {
    pub async fn new() -> Self {
        let policy = TokenPolicy::new(
            ACCESS_TTL,
            REFRESH_TTL,
            Secret::new("api-test-access-secret-0123456789"),
            Secret::new("api-test-refresh-secret-0123456789"),
        )
        .expect("invalid test token policy");
        let clock = Arc::new(TestClock(AtomicI64::new(START)));
        let app_state = AppState::new(
            Arc::new(policy),
            Arc::new(RwLock::new(HashmapUserStore::new())),
            clock.clone(),
        );

        let app = Application::build(app_state.clone(), "127.0.0.1:0")
            .await
            .expect("Failed to build app");
        let address = app.address.clone();

        spawn(async move {
            if let Err(e) = app.run().await {
                eprintln!("Test server error: {}", e);
            }
        });

        TestApp {
            address,
            http_client: Client::new(),
            app_state,
            clock,
        }
    }

    pub async fn seed_user(&self, phone: &str, password: &str) -> User {
        self.app_state
            .auth_service
            .register_user(
                &Phone::parse(phone.to_owned()).unwrap(),
                "Test User",
                &Password::parse(password.to_owned()).unwrap(),
            )
            .await
            .expect("Failed to seed user")
    }

    pub async fn get_health(&self) -> Response {
        self.http_client
            .get(format!("{}/health", &self.address))
            .send()
            .await
            .expect("Failed to execute health request.")
    }

    pub async fn login(&self, phone: &str, password: &str) -> Response {
        let body = LoginRequestBody {
            phone: phone.to_owned(),
            password: password.to_owned(),
        };

        self.http_client
            .post(format!("{}/login", &self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute login request.")
    }

    pub async fn refresh(&self, authorization: Option<&str>) -> Response {
        let mut request = self
            .http_client
            .post(format!("{}/login/refresh", &self.address));
        if let Some(value) = authorization {
            request = request.header("Authorization", value);
        }
        request
            .send()
            .await
            .expect("Failed to execute refresh request.")
    }

    pub async fn verify_token(&self, authorization: Option<&str>) -> Response {
        let mut request = self
            .http_client
            .post(format!("{}/verify-token", &self.address));
        if let Some(value) = authorization {
            request = request.header("Authorization", value);
        }
        request
            .send()
            .await
            .expect("Failed to execute verify token request.")
    }
}

pub struct TestContext {
    pub test_app: TestApp,
}

impl AsyncTestContext for TestContext {
    async fn setup() -> TestContext {
        TestContext {
            test_app: TestApp::new().await,
        }
    }
}

/// Ten-digit phone number unlikely to collide across tests.
pub fn get_random_phone() -> String {
    format!("98{:08}", Uuid::new_v4().as_u128() % 100_000_000)
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
