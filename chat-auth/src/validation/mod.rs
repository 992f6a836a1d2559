mod password;
mod phone;

pub use password::*;
pub use phone::*;
