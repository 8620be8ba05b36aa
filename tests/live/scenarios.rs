use crate::common::assert_scenario_holds;
use pet_registry_harness::configuration::get_configuration;
use pet_registry_harness::fixtures::Fixtures;
use pet_registry_harness::scenarios;

fn live_fixtures() -> Fixtures {
    Fixtures::new(get_configuration().expect("Failed to read configuration."))
}

/// One `#[tokio::test]` per catalog scenario.
macro_rules! live_scenario {
    ($($name:ident),+ $(,)?) => {
        $(
            #[tokio::test]
            async fn $name() {
                assert_scenario_holds(scenarios::$name(), &live_fixtures()).await;
            }
        )+
    };
}

live_scenario!(
    authenticate_with_valid_credentials,
    authenticate_with_unknown_credentials,
    authenticate_with_wrong_password,
    authenticate_without_password,
    authenticate_without_email,
    authenticate_without_headers,
    create_pet,
    create_pet_without_name,
    create_pet_without_age,
    create_pet_without_animal_type,
    create_pet_without_body,
    create_pet_without_auth_key,
    create_pet_with_forged_auth_key,
    create_pet_with_gibberish_animal_type,
    create_pet_with_too_long_name,
    create_pet_with_big_age,
    create_pet_with_string_age,
    create_pet_with_text_age,
    create_pet_with_numeric_animal_type,
    create_pet_with_numeric_name,
    create_pet_with_additional_fields,
);
