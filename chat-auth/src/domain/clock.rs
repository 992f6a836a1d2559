use chrono::{DateTime, Utc};

/// Source of the current time for token issuance.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
