mod credential;
mod login;
mod password_hash;
mod refresh;
mod token;
mod verify_token;

pub use credential::*;
pub use login::*;
pub use password_hash::*;
pub use refresh::*;
pub use token::*;
pub use verify_token::*;
