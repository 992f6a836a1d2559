pub(crate) mod health;
pub(crate) mod login;
pub(crate) mod refresh;
pub(crate) mod verify_token;

// re-export items from sub-modules
pub use health::*;
pub use login::*;
pub use refresh::*;
pub use verify_token::*;
