use serde::{Deserialize, Serialize};

use super::{IssuedTokens, User};

#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct UserResponse {
    pub id: String,
    pub phone: String,
    pub full_name: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        UserResponse {
            id: user.id.clone(),
            phone: user.phone.as_ref().to_owned(),
            full_name: user.full_name.clone(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct LoginResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub refresh_token: String,
    pub access_expires_at: i64,
    pub refresh_expires_at: i64,
}

impl LoginResponse {
    pub fn new(user: &User, tokens: IssuedTokens) -> Self {
        LoginResponse {
            user: UserResponse::from(user),
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            access_expires_at: tokens.access_expires_at,
            refresh_expires_at: tokens.refresh_expires_at,
        }
    }
}
