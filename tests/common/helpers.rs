use pet_registry_harness::configuration::{ApiSettings, AuthSettings, Settings};
use pet_registry_harness::fixtures::Fixtures;
use pet_registry_harness::scenarios::{Observation, Scenario};
use pet_registry_harness::telemetry::{get_subscriber, init_subscriber};
use secrecy::Secret;
use std::sync::LazyLock;

// Ensure that the `tracing` stack is only initialised once using `LazyLock`
pub static TRACING: LazyLock<()> = LazyLock::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

/// Settings pointing at `base_url` with the given account.
#[allow(dead_code)]
pub fn settings_for(base_url: String, email: &str, password: &str) -> Settings {
    Settings {
        auth: AuthSettings {
            email: email.into(),
            password: Secret::new(password.into()),
        },
        api: ApiSettings {
            base_url,
            timeout_milliseconds: 2000,
        },
    }
}

/// Runs `scenario` and panics unless the registry answered as expected.
///
/// Infrastructure errors and assertion mismatches panic with distinct messages.
pub async fn assert_scenario_holds(scenario: Scenario, fixtures: &Fixtures) -> Observation {
    LazyLock::force(&TRACING);
    let observation = match scenario.run(fixtures).await {
        Ok(observation) => observation,
        Err(e) => panic!("Fixture error in `{}`: {:?}", scenario.name, e),
    };
    if let Err(mismatch) = scenario.verify(&observation) {
        panic!(
            "Scenario `{}` failed: {:?}\nObserved: {:?}",
            scenario.name, mismatch, observation
        );
    }
    observation
}
