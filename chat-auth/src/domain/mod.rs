pub mod claims;
pub mod clock;
pub mod data_stores;
pub mod error_response;
pub mod issued_tokens;
pub mod login_request;
pub mod login_response;
pub mod password;
pub mod phone;
pub mod refresh_response;
pub mod user;
pub mod verify_token_response;

pub use claims::*;
pub use clock::*;
pub use data_stores::*;
pub use error_response::*;
pub use issued_tokens::*;
pub use login_request::*;
pub use login_response::*;
pub use password::*;
pub use phone::*;
pub use refresh_response::*;
pub use user::*;
pub use verify_token_response::*;
