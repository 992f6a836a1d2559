pub mod env {
    pub const JWT_ACCESS_SECRET_ENV_VAR: &str = "JWT_ACCESS_SECRET";
    pub const JWT_REFRESH_SECRET_ENV_VAR: &str = "JWT_REFRESH_SECRET";
    pub const ACCESS_TTL_SECONDS_ENV_VAR: &str = "ACCESS_TTL_SECONDS";
    pub const REFRESH_TTL_SECONDS_ENV_VAR: &str = "REFRESH_TTL_SECONDS";
    pub const LISTEN_ADDR_ENV_VAR: &str = "LISTEN_ADDR";
    pub const SEED_USERS_JSON_ENV_VAR: &str = "SEED_USERS_JSON";
}

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";

// HS256 keys shorter than the digest size weaken the MAC.
pub const MIN_SECRET_LEN: usize = 32;

pub const BEARER_SCHEME: &str = "Bearer";
