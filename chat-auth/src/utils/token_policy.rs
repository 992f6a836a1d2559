use std::fmt;

use chrono::Duration;

use crate::domain::TokenKind;

use super::config::ConfigError;
use super::consts::env::{
    ACCESS_TTL_SECONDS_ENV_VAR, JWT_ACCESS_SECRET_ENV_VAR, JWT_REFRESH_SECRET_ENV_VAR,
    REFRESH_TTL_SECONDS_ENV_VAR,
};
use super::consts::MIN_SECRET_LEN;

/// Symmetric HS256 key material. `Debug` never prints the bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(Vec<u8>);

impl Secret {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Secret(bytes.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for Secret {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret([REDACTED; {}])", self.0.len())
    }
}

/// Lifetimes and signing secrets for both token kinds.
///
/// Read-only once built. Every invariant is checked in [`TokenPolicy::new`],
/// so a process holding a `TokenPolicy` can mint tokens without further checks.
#[derive(Debug, Clone)]
pub struct TokenPolicy {
    access_ttl: Duration,
    refresh_ttl: Duration,
    access_secret: Secret,
    refresh_secret: Secret,
}

impl TokenPolicy {
    pub fn new(
        access_ttl_seconds: i64,
        refresh_ttl_seconds: i64,
        access_secret: Secret,
        refresh_secret: Secret,
    ) -> Result<Self, ConfigError> {
        let access_ttl = positive_ttl(access_ttl_seconds, ACCESS_TTL_SECONDS_ENV_VAR)?;
        let refresh_ttl = positive_ttl(refresh_ttl_seconds, REFRESH_TTL_SECONDS_ENV_VAR)?;
        if access_ttl >= refresh_ttl {
            return Err(ConfigError::Policy(
                "ACCESS_TTL_SECONDS must be shorter than REFRESH_TTL_SECONDS",
            ));
        }

        check_secret(&access_secret, JWT_ACCESS_SECRET_ENV_VAR)?;
        check_secret(&refresh_secret, JWT_REFRESH_SECRET_ENV_VAR)?;
        if access_secret == refresh_secret {
            return Err(ConfigError::Policy(
                "JWT_ACCESS_SECRET and JWT_REFRESH_SECRET must differ",
            ));
        }

        Ok(Self {
            access_ttl,
            refresh_ttl,
            access_secret,
            refresh_secret,
        })
    }

    pub fn access_ttl(&self) -> Duration {
        self.access_ttl
    }

    pub fn refresh_ttl(&self) -> Duration {
        self.refresh_ttl
    }

    pub fn ttl_for(&self, kind: TokenKind) -> Duration {
        match kind {
            TokenKind::Access => self.access_ttl,
            TokenKind::Refresh => self.refresh_ttl,
        }
    }

    pub fn secret_for(&self, kind: TokenKind) -> &Secret {
        match kind {
            TokenKind::Access => &self.access_secret,
            TokenKind::Refresh => &self.refresh_secret,
        }
    }
}

fn positive_ttl(seconds: i64, key: &'static str) -> Result<Duration, ConfigError> {
    if seconds <= 0 {
        return Err(ConfigError::NonPositiveTtl(key));
    }
    // Cap at ~100 years so `now + ttl` can never overflow a timestamp.
    if seconds > 100 * 365 * 24 * 60 * 60 {
        return Err(ConfigError::Invalid(key));
    }
    Duration::try_seconds(seconds).ok_or(ConfigError::Invalid(key))
}

fn check_secret(secret: &Secret, key: &'static str) -> Result<(), ConfigError> {
    if secret.is_empty() {
        return Err(ConfigError::Missing(key));
    }
    if secret.len() < MIN_SECRET_LEN {
        return Err(ConfigError::WrongLen(key, MIN_SECRET_LEN));
    }
    Ok(())
}
