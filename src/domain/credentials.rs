use crate::domain::RequestMetadata;
use secrecy::{ExposeSecret, Secret};

pub const EMAIL_HEADER: &str = "email";
pub const PASSWORD_HEADER: &str = "password";

#[derive(Clone, Debug)]
pub struct Credentials {
    email: String,
    password: Secret<String>,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: Secret<String>) -> Self {
        Self {
            email: email.into(),
            password,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// The headers `GET /key` expects.
    pub fn auth_data(&self) -> RequestMetadata {
        RequestMetadata::new()
            .with(EMAIL_HEADER, self.email.as_str())
            .with(PASSWORD_HEADER, self.password.expose_secret().as_str())
    }
}
