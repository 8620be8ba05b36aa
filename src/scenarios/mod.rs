//! Boundary-value scenarios for the pet registry.
//!
//! A scenario is a request shape plus what the registry is expected to answer.
//! Scenarios share nothing: each one opens its own session and, when it needs
//! one, acquires its own key.

mod authentication;
mod create_pet;

pub use authentication::{
    authenticate_with_unknown_credentials, authenticate_with_valid_credentials,
    authenticate_with_wrong_password, authenticate_without_email, authenticate_without_headers,
    authenticate_without_password,
};
pub use create_pet::{
    create_pet, create_pet_with_additional_fields, create_pet_with_big_age,
    create_pet_with_forged_auth_key, create_pet_with_gibberish_animal_type,
    create_pet_with_numeric_animal_type, create_pet_with_numeric_name, create_pet_with_string_age,
    create_pet_with_text_age, create_pet_with_too_long_name, create_pet_without_age,
    create_pet_without_animal_type, create_pet_without_auth_key, create_pet_without_body,
    create_pet_without_name,
};

use crate::domain::{AuthToken, PetField, PetPayload, RequestMetadata, Scalar};
use crate::fixtures::{Fixtures, HarnessError};
use crate::telemetry::error_chain_fmt;
use reqwest::{Response, StatusCode};

/// Every scenario in the catalog, freshly built.
pub fn catalog() -> Vec<Scenario> {
    vec![
        authenticate_with_valid_credentials(),
        authenticate_with_unknown_credentials(),
        authenticate_with_wrong_password(),
        authenticate_without_password(),
        authenticate_without_email(),
        authenticate_without_headers(),
        create_pet(),
        create_pet_without_name(),
        create_pet_without_age(),
        create_pet_without_animal_type(),
        create_pet_without_body(),
        create_pet_without_auth_key(),
        create_pet_with_forged_auth_key(),
        create_pet_with_gibberish_animal_type(),
        create_pet_with_too_long_name(),
        create_pet_with_big_age(),
        create_pet_with_string_age(),
        create_pet_with_text_age(),
        create_pet_with_numeric_animal_type(),
        create_pet_with_numeric_name(),
        create_pet_with_additional_fields(),
    ]
}

#[derive(Clone, Debug)]
pub struct Scenario {
    pub name: &'static str,
    pub request: ScenarioRequest,
    pub expectation: Expectation,
}

#[derive(Clone, Debug)]
pub enum ScenarioRequest {
    Authenticate(AuthData),
    /// `body: None` posts without any body.
    CreatePet {
        token: TokenShape,
        body: Option<PetPayload>,
    },
}

#[derive(Clone, Debug)]
pub enum AuthData {
    /// The credentials from the configuration.
    Configured,
    /// The configured email with a password that is not the account's.
    WrongPassword,
    Literal(RequestMetadata),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenShape {
    /// A key obtained from the registry with the configured credentials.
    Issued,
    Missing,
    /// A random UUID the registry never issued.
    Forged,
}

impl Scenario {
    /// Issues the scenario's request and records what came back.
    ///
    /// Only infrastructure problems are errors; whatever status the registry
    /// answers with ends up in the [`Observation`].
    #[tracing::instrument(name = "Running scenario", skip_all, fields(scenario = %self.name))]
    pub async fn run(&self, fixtures: &Fixtures) -> Result<Observation, HarnessError> {
        let scope = fixtures.session()?;
        match &self.request {
            ScenarioRequest::Authenticate(auth_data) => {
                let auth_data = match auth_data {
                    AuthData::Configured => scope.auth_data().clone(),
                    AuthData::WrongPassword => {
                        authentication::with_wrong_password(scope.auth_data())
                    }
                    AuthData::Literal(metadata) => metadata.clone(),
                };
                let response = scope.client().authenticate(&auth_data).await?;
                Observation::capture(response).await
            }
            ScenarioRequest::CreatePet { token, body } => {
                let auth_key = match token {
                    TokenShape::Issued => {
                        let scope = scope.authenticate().await?;
                        let response = scope
                            .client()
                            .create_pet(&scope.auth_key(), body.as_ref())
                            .await?;
                        return Observation::capture(response).await;
                    }
                    TokenShape::Missing => RequestMetadata::new(),
                    TokenShape::Forged => AuthToken::forged().auth_key(),
                };
                let response = scope.client().create_pet(&auth_key, body.as_ref()).await?;
                Observation::capture(response).await
            }
        }
    }

    pub fn verify(&self, observation: &Observation) -> Result<(), Mismatch> {
        self.expectation.verify(observation)
    }
}

/// What the registry answered.
#[derive(Clone, Debug)]
pub struct Observation {
    pub status: StatusCode,
    /// `None` when the body is empty or not JSON.
    pub body: Option<serde_json::Value>,
}

impl Observation {
    pub async fn capture(response: Response) -> Result<Self, HarnessError> {
        let status = response.status();
        let bytes = response.bytes().await?;
        let body = serde_json::from_slice(&bytes).ok();
        tracing::info!(%status, "Registry answered");
        Ok(Self { status, body })
    }
}

#[derive(Clone, Debug)]
pub struct Expectation {
    pub status: StatusCode,
    pub body: Vec<BodyCheck>,
}

#[derive(Clone, Debug)]
pub enum BodyCheck {
    /// The field equals the echoed form of the submitted value.
    Echo { field: PetField, expected: Scalar },
    /// The field is a non-empty string.
    NonEmpty { field: &'static str },
}

impl Expectation {
    pub fn status(status: StatusCode) -> Self {
        Self {
            status,
            body: Vec::new(),
        }
    }

    /// Expects `field` of `payload` to come back; nothing is checked if the
    /// payload does not carry it.
    pub fn echoing(mut self, payload: &PetPayload, field: PetField) -> Self {
        if let Some(expected) = payload.get(field) {
            self.body.push(BodyCheck::Echo {
                field,
                expected: expected.clone(),
            });
        }
        self
    }

    pub fn non_empty(mut self, field: &'static str) -> Self {
        self.body.push(BodyCheck::NonEmpty { field });
        self
    }

    /// Body checks only apply when the expected status is a success.
    pub fn verify(&self, observation: &Observation) -> Result<(), Mismatch> {
        if observation.status != self.status {
            return Err(Mismatch::Status {
                expected: self.status,
                actual: observation.status,
            });
        }
        if !self.status.is_success() || self.body.is_empty() {
            return Ok(());
        }
        let body = observation.body.as_ref().ok_or(Mismatch::MissingBody)?;
        self.body.iter().try_for_each(|check| check.verify(body))
    }
}

impl BodyCheck {
    fn verify(&self, body: &serde_json::Value) -> Result<(), Mismatch> {
        match self {
            BodyCheck::Echo { field, expected } => {
                let expected = expected.echoed();
                let actual = body.get(field.as_str());
                if actual.and_then(|v| v.as_str()) == Some(expected.as_str()) {
                    Ok(())
                } else {
                    Err(Mismatch::Field {
                        field: field.as_str(),
                        expected,
                        actual: actual.cloned(),
                    })
                }
            }
            BodyCheck::NonEmpty { field } => {
                let actual = body.get(*field);
                match actual.and_then(|v| v.as_str()) {
                    Some(value) if !value.is_empty() => Ok(()),
                    _ => Err(Mismatch::Field {
                        field: *field,
                        expected: "a non-empty string".into(),
                        actual: actual.cloned(),
                    }),
                }
            }
        }
    }
}

/// The registry answered, but not the way the scenario expects.
#[derive(thiserror::Error)]
pub enum Mismatch {
    #[error("Expected status {expected}, got {actual}")]
    Status {
        expected: StatusCode,
        actual: StatusCode,
    },
    #[error("Expected a JSON body, got none")]
    MissingBody,
    #[error("Expected `{field}` to be {expected:?}, got {actual:?}")]
    Field {
        field: &'static str,
        expected: String,
        actual: Option<serde_json::Value>,
    },
}

impl std::fmt::Debug for Mismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}
