mod auth_token;
mod credentials;
mod pet_payload;
mod request_metadata;

pub use auth_token::{AUTH_KEY_HEADER, AuthToken};
pub use credentials::{Credentials, EMAIL_HEADER, PASSWORD_HEADER};
pub use pet_payload::{PetField, PetPayload, Scalar};
pub use request_metadata::RequestMetadata;
