use crate::validation::is_valid_phone;

#[derive(PartialEq, Debug, Clone, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn parse(phone: String) -> Result<Phone, String> {
        let phone = phone.trim().to_owned();
        match is_valid_phone(&phone) {
            true => Ok(Phone(phone)),
            false => Err(format!("Phone number {} is not valid", phone)),
        }
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
