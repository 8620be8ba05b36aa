use crate::common::{
    ISSUED_KEY, REGISTERED_EMAIL, REGISTERED_PASSWORD, assert_scenario_holds, settings_for,
    spawn_registry,
};
use pet_registry_harness::fixtures::Fixtures;
use pet_registry_harness::runner::{Verdict, run_scenario};
use pet_registry_harness::scenarios;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn registry_fixtures() -> (wiremock::MockServer, Fixtures) {
    let registry = spawn_registry().await;
    let fixtures = Fixtures::new(settings_for(
        registry.uri(),
        REGISTERED_EMAIL,
        REGISTERED_PASSWORD,
    ));
    (registry, fixtures)
}

#[tokio::test]
async fn the_sample_pet_is_created_and_echoed() {
    let (_registry, fixtures) = registry_fixtures().await;

    let observation = assert_scenario_holds(scenarios::create_pet(), &fixtures).await;

    let body = observation.body.unwrap();
    assert_eq!(body["name"], "Barbos");
    assert_eq!(body["animal_type"], "German Shepherd");
    assert_eq!(body["age"], "2");
}

#[tokio::test]
async fn a_pet_missing_a_field_is_a_server_error() {
    let (_registry, fixtures) = registry_fixtures().await;
    for scenario in [
        scenarios::create_pet_without_name(),
        scenarios::create_pet_without_age(),
        scenarios::create_pet_without_animal_type(),
    ] {
        let observation = assert_scenario_holds(scenario, &fixtures).await;
        assert_eq!(observation.status.as_u16(), 500);
    }
}

#[tokio::test]
async fn a_request_without_body_is_a_bad_request() {
    let (_registry, fixtures) = registry_fixtures().await;
    assert_scenario_holds(scenarios::create_pet_without_body(), &fixtures).await;
}

#[tokio::test]
async fn missing_or_forged_keys_are_forbidden() {
    let (registry, fixtures) = registry_fixtures().await;

    assert_scenario_holds(scenarios::create_pet_without_auth_key(), &fixtures).await;
    assert_scenario_holds(scenarios::create_pet_with_forged_auth_key(), &fixtures).await;

    // Neither scenario asks for a key
    let received = registry.received_requests().await.unwrap();
    assert!(received.iter().all(|r| r.url.path() != "/key"));
}

#[tokio::test]
async fn loosely_typed_fields_are_accepted_and_echoed_as_strings() {
    let (_registry, fixtures) = registry_fixtures().await;
    for scenario in [
        scenarios::create_pet_with_gibberish_animal_type(),
        scenarios::create_pet_with_too_long_name(),
        scenarios::create_pet_with_big_age(),
        scenarios::create_pet_with_string_age(),
        scenarios::create_pet_with_text_age(),
        scenarios::create_pet_with_numeric_animal_type(),
        scenarios::create_pet_with_numeric_name(),
        scenarios::create_pet_with_additional_fields(),
    ] {
        assert_scenario_holds(scenario, &fixtures).await;
    }
}

#[tokio::test]
async fn a_numeric_name_comes_back_as_text() {
    let (_registry, fixtures) = registry_fixtures().await;

    let observation =
        assert_scenario_holds(scenarios::create_pet_with_numeric_name(), &fixtures).await;

    assert_eq!(observation.body.unwrap()["name"], "199");
}

#[tokio::test]
async fn each_scenario_acquires_its_own_key() {
    let (registry, fixtures) = registry_fixtures().await;

    assert_scenario_holds(scenarios::create_pet(), &fixtures).await;
    assert_scenario_holds(scenarios::create_pet_with_big_age(), &fixtures).await;

    let received = registry.received_requests().await.unwrap();
    let key_requests = received.iter().filter(|r| r.url.path() == "/key").count();
    assert_eq!(key_requests, 2);
}

#[tokio::test]
async fn a_broken_key_fixture_is_reported_as_an_error_not_a_failure() {
    let registry = spawn_registry().await;
    let settings = settings_for(registry.uri(), REGISTERED_EMAIL, "wrong");

    let report = run_scenario(settings, scenarios::create_pet()).await;

    assert!(matches!(report.verdict, Verdict::Errored(_)));
}

#[tokio::test]
async fn a_registry_that_alters_the_animal_type_fails_the_sample_pet() {
    let registry = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "key": ISSUED_KEY })))
        .mount(&registry)
        .await;
    Mock::given(method("POST"))
        .and(path("/create_pet_simple"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Barbos",
            "animal_type": "CAT",
            "age": "2"
        })))
        .expect(1)
        .mount(&registry)
        .await;
    let settings = settings_for(registry.uri(), REGISTERED_EMAIL, REGISTERED_PASSWORD);

    let report = run_scenario(settings, scenarios::create_pet()).await;

    match report.verdict {
        Verdict::Failed(mismatch) => assert!(mismatch.to_string().contains("animal_type")),
        other => panic!("Expected the scenario to fail, got {:?}", other),
    }
}
