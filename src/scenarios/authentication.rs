use super::{AuthData, Expectation, Scenario, ScenarioRequest};
use crate::domain::{Credentials, EMAIL_HEADER, PASSWORD_HEADER, RequestMetadata};
use reqwest::StatusCode;
use secrecy::{ExposeSecret, Secret};

const UNKNOWN_EMAIL: &str = "asd@asd.com";
const UNKNOWN_PASSWORD: &str = "1234567";

fn unknown_credentials() -> RequestMetadata {
    Credentials::new(UNKNOWN_EMAIL, Secret::new(UNKNOWN_PASSWORD.to_string())).auth_data()
}

/// The configured auth data with a password the account cannot have: the
/// configured one with a suffix appended.
pub(super) fn with_wrong_password(configured: &RequestMetadata) -> RequestMetadata {
    let password = configured
        .get(PASSWORD_HEADER)
        .map(|password| password.expose_secret().as_str())
        .unwrap_or_default();
    configured
        .clone()
        .with(PASSWORD_HEADER, format!("{}-not-it", password))
}

fn rejected(name: &'static str, auth_data: RequestMetadata) -> Scenario {
    Scenario {
        name,
        request: ScenarioRequest::Authenticate(AuthData::Literal(auth_data)),
        expectation: Expectation::status(StatusCode::FORBIDDEN),
    }
}

pub fn authenticate_with_valid_credentials() -> Scenario {
    Scenario {
        name: "authenticate_with_valid_credentials",
        request: ScenarioRequest::Authenticate(AuthData::Configured),
        expectation: Expectation::status(StatusCode::OK).non_empty("key"),
    }
}

pub fn authenticate_with_unknown_credentials() -> Scenario {
    rejected("authenticate_with_unknown_credentials", unknown_credentials())
}

/// A registered email is not enough: its password has to match too.
pub fn authenticate_with_wrong_password() -> Scenario {
    Scenario {
        name: "authenticate_with_wrong_password",
        request: ScenarioRequest::Authenticate(AuthData::WrongPassword),
        expectation: Expectation::status(StatusCode::FORBIDDEN),
    }
}

pub fn authenticate_without_password() -> Scenario {
    rejected(
        "authenticate_without_password",
        unknown_credentials().without(PASSWORD_HEADER),
    )
}

pub fn authenticate_without_email() -> Scenario {
    rejected(
        "authenticate_without_email",
        unknown_credentials().without(EMAIL_HEADER),
    )
}

pub fn authenticate_without_headers() -> Scenario {
    rejected("authenticate_without_headers", RequestMetadata::new())
}
