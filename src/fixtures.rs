//! Per-scenario dependencies, acquired in a fixed order:
//! settings → [`SessionScope`] → [`AuthenticatedScope`].
//!
//! Every scope owns its [`Session`]; dropping the scope closes it, whatever
//! the outcome of the scenario that used it.

use crate::configuration::Settings;
use crate::domain::{AuthToken, PetPayload, RequestMetadata};
use crate::registry_client::RegistryClient;
use crate::session::Session;
use crate::telemetry::error_chain_fmt;
use reqwest::StatusCode;

/// Infrastructure failures. A scenario hitting one of these did not get to
/// observe the behavior it tests.
#[derive(thiserror::Error)]
pub enum HarnessError {
    #[error("Failed to open a network session")]
    Session(#[source] reqwest::Error),
    #[error("Transport fault while talking to the pet registry")]
    Transport(#[from] reqwest::Error),
    #[error("The registry rejected the configured credentials with status {0}")]
    AuthenticationRejected(StatusCode),
    #[error("The authenticate response did not carry a key")]
    MissingKey(#[source] serde_json::Error),
}

impl std::fmt::Debug for HarnessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

#[derive(Clone, Debug)]
pub struct Fixtures {
    settings: Settings,
}

impl Fixtures {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn session(&self) -> Result<SessionScope, HarnessError> {
        let session = Session::open(&self.settings.api).map_err(HarnessError::Session)?;
        Ok(SessionScope {
            session,
            auth_data: self.auth_data(),
        })
    }

    /// The configured credentials as `GET /key` headers.
    pub fn auth_data(&self) -> RequestMetadata {
        self.settings.auth.credentials().auth_data()
    }

    /// A fresh copy of the sample pet; scenarios are free to mangle it.
    pub fn pet_data() -> PetPayload {
        PetPayload::canonical()
    }
}

#[derive(Debug)]
pub struct SessionScope {
    session: Session,
    auth_data: RequestMetadata,
}

impl SessionScope {
    pub fn client(&self) -> RegistryClient<'_> {
        RegistryClient::new(&self.session)
    }

    pub fn auth_data(&self) -> &RequestMetadata {
        &self.auth_data
    }

    /// Exchanges the configured credentials for a key.
    ///
    /// Fails unless the registry answers 200 with a `key` field.
    #[tracing::instrument(name = "Acquiring auth key", skip_all)]
    pub async fn authenticate(self) -> Result<AuthenticatedScope, HarnessError> {
        let response = self.client().authenticate(&self.auth_data).await?;
        let status = response.status();
        if status != StatusCode::OK {
            tracing::error!(%status, "Authentication was rejected");
            return Err(HarnessError::AuthenticationRejected(status));
        }
        let body = response.bytes().await?;
        let token = AuthToken::from_response_body(&body).map_err(HarnessError::MissingKey)?;
        Ok(AuthenticatedScope {
            session: self.session,
            token,
        })
    }
}

#[derive(Debug)]
pub struct AuthenticatedScope {
    session: Session,
    token: AuthToken,
}

impl AuthenticatedScope {
    pub fn client(&self) -> RegistryClient<'_> {
        RegistryClient::new(&self.session)
    }

    /// `{"auth_key": <key>}`, as create-pet and the pets endpoints expect it.
    pub fn auth_key(&self) -> RequestMetadata {
        self.token.auth_key()
    }
}
