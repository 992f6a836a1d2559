use std::collections::HashMap;

use crate::domain::{Phone, User, UserStore, UserStoreError};

/// In-memory user directory keyed by phone number.
#[derive(Default)]
pub struct HashmapUserStore {
    users: HashMap<Phone, User>,
}

impl HashmapUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl UserStore for HashmapUserStore {
    async fn add_user(&mut self, user: User) -> Result<(), UserStoreError> {
        if self.users.contains_key(&user.phone) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        self.users.insert(user.phone.clone(), user);
        Ok(())
    }

    async fn find_by_phone(&self, phone: &Phone) -> Result<Option<User>, UserStoreError> {
        Ok(self.users.get(phone).cloned())
    }
}
