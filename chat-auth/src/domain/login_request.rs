use serde::{Deserialize, Serialize};

use crate::errors::LoginError;

use super::{Password, Phone};

#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequestBody {
    pub phone: String,
    pub password: String,
}

/// A login request that passed field validation.
#[derive(Debug)]
pub struct LoginCredentials {
    pub phone: Phone,
    pub password: Password,
}

impl LoginCredentials {
    pub fn parse(body: LoginRequestBody) -> Result<Self, LoginError> {
        let phone = Phone::parse(body.phone)
            .map_err(|message| LoginError::Validation { field: "phone", message })?;
        let password = Password::parse(body.password)
            .map_err(|message| LoginError::Validation { field: "password", message })?;
        Ok(Self { phone, password })
    }
}
