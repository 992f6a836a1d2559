use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::{Clock, UserStore};
use crate::services::AuthService;
use crate::utils::TokenPolicy;

// Using type aliases to improve readability!
pub type UserStoreType = Arc<RwLock<dyn UserStore>>;
pub type ClockType = Arc<dyn Clock>;
pub type AuthServiceType = Arc<AuthService>;
pub type TokenPolicyType = Arc<TokenPolicy>;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: AuthServiceType,
}

impl AppState {
    pub fn new(token_policy: TokenPolicyType, user_store: UserStoreType, clock: ClockType) -> Self {
        Self {
            auth_service: Arc::new(AuthService::new(token_policy, user_store, clock)),
        }
    }
}
