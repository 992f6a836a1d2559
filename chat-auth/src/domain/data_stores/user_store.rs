use crate::domain::{Phone, User};

use super::UserStoreError;

#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    async fn add_user(&mut self, user: User) -> Result<(), UserStoreError>;

    /// `Ok(None)` when no user is registered under `phone`.
    async fn find_by_phone(&self, phone: &Phone) -> Result<Option<User>, UserStoreError>;
}
