use serde::{Deserialize, Serialize};

/// Which secret signs a token and where it may be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// Payload carried inside every signed token.
///
/// Fields are private: a claim set is fixed at mint time and only ever
/// reissued, never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "sub")]
    subject_id: String,
    #[serde(rename = "exp")]
    expires_at: i64,
    kind: TokenKind,
}

impl Claims {
    pub fn new(kind: TokenKind, subject_id: impl Into<String>, expires_at: i64) -> Self {
        Self {
            subject_id: subject_id.into(),
            expires_at,
            kind,
        }
    }

    pub fn subject_id(&self) -> &str {
        &self.subject_id
    }

    /// Unix timestamp, seconds.
    pub fn expires_at(&self) -> i64 {
        self.expires_at
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }
}
