use axum::routing::{get, post};
use axum::Router;
use std::future::IntoFuture;
use std::{error::Error, future::Future, pin::Pin};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use app_state::AppState;
use routes::{health, login, refresh, verify_token};

pub mod app_state;
pub mod domain;
pub mod errors;
pub mod routes;
pub mod services;
pub mod utils;
pub mod validation;

type ServerFuture = Pin<Box<dyn Future<Output = Result<(), std::io::Error>> + Send>>;

pub fn app_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/login", post(login::login))
        .route("/login/refresh", post(refresh::refresh))
        .route("/verify-token", post(verify_token::verify_token))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

// This struct encapsulates our application-related logic.
pub struct Application {
    http_future: ServerFuture,
    // address is exposed as a public field,
    // so we have access to it in tests.
    pub address: String,
}

impl Application {
    /// Bind `address` and prepare the server. Port `0` picks a free port;
    /// `address` then reports the one actually bound.
    pub async fn build(app_state: AppState, address: &str) -> Result<Self, Box<dyn Error>> {
        let router = app_router(app_state);

        let listener = TcpListener::bind(address).await?;
        let local_addr = listener.local_addr()?;
        let http_future = axum::serve(listener, router).into_future();

        Ok(Self {
            http_future: Box::pin(http_future),
            address: format!("http://{}", local_addr),
        })
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        tracing::info!("listening on {}", &self.address);
        self.http_future.await
    }
}
