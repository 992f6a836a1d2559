use serde::{Deserialize, Serialize};

use super::AccessGrant;

#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct RefreshResponse {
    pub access_token: String,
    pub expires_at: i64,
}

impl From<AccessGrant> for RefreshResponse {
    fn from(grant: AccessGrant) -> Self {
        RefreshResponse {
            access_token: grant.access_token,
            expires_at: grant.expires_at,
        }
    }
}
