use std::sync::Arc;

use chat_auth::app_state::{AppState, UserStoreType};
use chat_auth::services::{HashmapUserStore, SystemClock};
use chat_auth::utils::Config;
use chat_auth::Application;
use tokio::sync::RwLock;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Loads .env too, so RUST_LOG from it reaches the filter below.
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chat_auth=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config.inspect_err(|e| {
        tracing::error!(error = %e, "refusing to start with invalid configuration");
    })?;

    let user_store: UserStoreType = Arc::new(RwLock::new(HashmapUserStore::new()));
    let app_state = AppState::new(config.token_policy(), user_store, Arc::new(SystemClock));

    for seed in config.seed_users() {
        let user = app_state
            .auth_service
            .register_user(&seed.phone, &seed.full_name, &seed.password)
            .await?;
        tracing::info!(user_id = %user.id, "seeded user");
    }

    let app = Application::build(app_state, config.listen_addr()).await?;
    app.run().await?;
    Ok(())
}
