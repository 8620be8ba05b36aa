use crate::domain::RequestMetadata;
use secrecy::{ExposeSecret, Secret};
use uuid::Uuid;

pub const AUTH_KEY_HEADER: &str = "auth_key";

/// Opaque key issued by `GET /key`.
#[derive(Clone, Debug)]
pub struct AuthToken {
    key: Secret<String>,
}

#[derive(serde::Deserialize)]
struct KeyResponse {
    key: String,
}

impl AuthToken {
    pub fn new(key: Secret<String>) -> Self {
        Self { key }
    }

    /// A well-formed key the registry never issued.
    pub fn forged() -> Self {
        Self::new(Secret::new(Uuid::new_v4().to_string()))
    }

    /// Extracts the `key` field of an authenticate response body.
    pub fn from_response_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        let response: KeyResponse = serde_json::from_slice(body)?;
        Ok(Self::new(Secret::new(response.key)))
    }

    /// The header `POST /create_pet_simple` and `/pets` expect.
    pub fn auth_key(&self) -> RequestMetadata {
        RequestMetadata::new().with(AUTH_KEY_HEADER, self.key.expose_secret().as_str())
    }
}
