use std::env;
use std::sync::Arc;

use dotenvy::dotenv;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::{Password, Phone};

use super::consts::env::{
    ACCESS_TTL_SECONDS_ENV_VAR, JWT_ACCESS_SECRET_ENV_VAR, JWT_REFRESH_SECRET_ENV_VAR,
    LISTEN_ADDR_ENV_VAR, REFRESH_TTL_SECONDS_ENV_VAR, SEED_USERS_JSON_ENV_VAR,
};
use super::consts::DEFAULT_LISTEN_ADDR;
use super::token_policy::{Secret, TokenPolicy};

/// Process configuration, loaded once in `main` and handed down explicitly.
#[derive(Debug)]
pub struct Config {
    listen_addr: String,
    token_policy: Arc<TokenPolicy>,
    seed_users: Vec<SeedUser>,
}

/// A user registered into the in-memory store at startup.
#[derive(Debug)]
pub struct SeedUser {
    pub phone: Phone,
    pub full_name: String,
    pub password: Password,
}

impl Config {
    pub fn new(listen_addr: impl Into<String>, token_policy: TokenPolicy) -> Self {
        Self {
            listen_addr: listen_addr.into(),
            token_policy: Arc::new(token_policy),
            seed_users: Vec::new(),
        }
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn token_policy(&self) -> Arc<TokenPolicy> {
        self.token_policy.clone()
    }

    pub fn seed_users(&self) -> &[SeedUser] {
        &self.seed_users
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env in dev; no-op in prod if not present.
        let _ = dotenv();
        Self::from_source(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, e.g. a map in tests.
    pub fn from_source<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let access_secret = req_var(&lookup, JWT_ACCESS_SECRET_ENV_VAR)?;
        let refresh_secret = req_var(&lookup, JWT_REFRESH_SECRET_ENV_VAR)?;
        let access_ttl_seconds = parse_i64(&lookup, ACCESS_TTL_SECONDS_ENV_VAR)?;
        let refresh_ttl_seconds = parse_i64(&lookup, REFRESH_TTL_SECONDS_ENV_VAR)?;

        let token_policy = TokenPolicy::new(
            access_ttl_seconds,
            refresh_ttl_seconds,
            Secret::new(access_secret),
            Secret::new(refresh_secret),
        )?;

        let listen_addr = lookup(LISTEN_ADDR_ENV_VAR)
            .filter(|addr| !addr.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_owned());

        let seed_users = parse_seed_users_json(&lookup, SEED_USERS_JSON_ENV_VAR)?;

        Ok(Self {
            seed_users,
            ..Self::new(listen_addr, token_policy)
        })
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing env var {0}")]
    Missing(&'static str),
    #[error("invalid env var {0}")]
    Invalid(&'static str),
    #[error("{0} must be greater than zero")]
    NonPositiveTtl(&'static str),
    #[error("{0} must be at least {1} bytes")]
    WrongLen(&'static str, usize),
    #[error("{0}")]
    Policy(&'static str),
}

fn req_var<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).ok_or(ConfigError::Missing(key))
}

fn parse_i64<F>(lookup: &F, key: &'static str) -> Result<i64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let v = req_var(lookup, key)?;
    v.trim().parse::<i64>().map_err(|_| ConfigError::Invalid(key))
}

#[derive(Deserialize)]
struct SeedUserRecord {
    phone: String,
    full_name: String,
    password: String,
}

fn parse_seed_users_json<F>(lookup: &F, key: &'static str) -> Result<Vec<SeedUser>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(Vec::new());
    };
    let parsed: Vec<SeedUserRecord> =
        serde_json::from_str(&raw).map_err(|_| ConfigError::Invalid(key))?;

    let mut out = Vec::with_capacity(parsed.len());
    let mut seen = std::collections::HashSet::new();
    for record in parsed {
        let phone = Phone::parse(record.phone).map_err(|_| ConfigError::Invalid(key))?;
        if !seen.insert(phone.clone()) {
            return Err(ConfigError::Policy("duplicate phone in SEED_USERS_JSON"));
        }
        let password = Password::parse(record.password).map_err(|_| ConfigError::Invalid(key))?;
        out.push(SeedUser {
            phone,
            full_name: record.full_name,
            password,
        });
    }
    Ok(out)
}
