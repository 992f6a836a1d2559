pub mod auth;
pub mod hashmap_user_store;
pub mod password_hasher;
pub mod system_clock;
pub mod token_codec;

pub use auth::*;
pub use hashmap_user_store::*;
pub use password_hasher::*;
pub use system_clock::*;
pub use token_codec::*;
