use super::phone::Phone;

/// A registered principal as the user store knows it.
#[derive(PartialEq, Debug, Clone)]
pub struct User {
    pub id: String,
    pub phone: Phone,
    pub full_name: String,
    pub password_hash: String,
}

impl User {
    pub fn new(id: String, phone: Phone, full_name: String, password_hash: String) -> Self {
        User {
            id,
            phone,
            full_name,
            password_hash,
        }
    }
}
