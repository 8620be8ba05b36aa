use crate::domain::Credentials;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, Environment, File};
use secrecy::Secret;
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub auth: AuthSettings,
    pub api: ApiSettings,
}

/// Account used to obtain auth keys. There is no default: both fields must be
/// provided by a configuration file or the environment.
#[derive(serde::Deserialize, Clone, Debug)]
pub struct AuthSettings {
    pub email: String,
    pub password: Secret<String>,
}

impl AuthSettings {
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.clone(), self.password.clone())
    }
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ApiSettings {
    pub base_url: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
}

impl ApiSettings {
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_milliseconds)
    }
}

pub fn get_configuration() -> Result<Settings, ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| ConfigError::Foreign(Box::new(e)))?;
    let configuration_directory = base_path.join("configuration");

    let builder = config::Config::builder()
        .add_source(File::from(configuration_directory.join("base.yaml")))
        // Developer-specific overrides, usually holding the credentials
        .add_source(File::from(configuration_directory.join("local.yaml")).required(false));
    resolve(builder, None)
}

/// Layers the environment on top of the file sources and deserializes.
///
/// `environment` replaces the process environment when provided.
/// Only `AUTH_EMAIL` / `AUTH_PASSWORD` are read from the `AUTH_` namespace and
/// they map onto `auth.email` / `auth.password`. `APP_SECTION__KEY` can
/// override any key, e.g. `APP_API__BASE_URL`.
fn resolve(
    builder: ConfigBuilder<DefaultState>,
    environment: Option<config::Map<String, String>>,
) -> Result<Settings, ConfigError> {
    let lookup = |name: &str| match &environment {
        Some(environment) => environment.get(name).cloned(),
        None => std::env::var(name).ok(),
    };
    let auth_email = lookup("AUTH_EMAIL");
    let auth_password = lookup("AUTH_PASSWORD");

    builder
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .source(environment),
        )
        .set_override_option("auth.email", auth_email)?
        .set_override_option("auth.password", auth_password)?
        .build()?
        .try_deserialize::<Settings>()
}
