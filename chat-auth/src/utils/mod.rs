pub mod bearer;
pub mod config;
pub mod consts;
pub mod token_policy;

pub use bearer::*;
pub use config::{Config, ConfigError};
pub use consts::*;
pub use token_policy::*;
