use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct VerifyTokenResponse {
    pub subject_id: String,
    pub expires_at: i64,
}
