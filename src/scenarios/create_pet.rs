use super::{Expectation, Scenario, ScenarioRequest, TokenShape};
use crate::domain::{PetField, PetPayload};
use crate::fixtures::Fixtures;
use reqwest::StatusCode;

fn with_issued_key(name: &'static str, payload: PetPayload, expectation: Expectation) -> Scenario {
    Scenario {
        name,
        request: ScenarioRequest::CreatePet {
            token: TokenShape::Issued,
            body: Some(payload),
        },
        expectation,
    }
}

/// The payload is accepted and every one of `fields` comes back in its
/// echoed form.
fn accepted(name: &'static str, payload: PetPayload, fields: &[PetField]) -> Scenario {
    let expectation = fields
        .iter()
        .fold(Expectation::status(StatusCode::OK), |expectation, field| {
            expectation.echoing(&payload, *field)
        });
    with_issued_key(name, payload, expectation)
}

fn missing_field(name: &'static str, field: PetField) -> Scenario {
    with_issued_key(
        name,
        Fixtures::pet_data().without(field),
        Expectation::status(StatusCode::INTERNAL_SERVER_ERROR),
    )
}

pub fn create_pet() -> Scenario {
    accepted(
        "create_pet",
        Fixtures::pet_data(),
        &[PetField::Name, PetField::AnimalType],
    )
}

pub fn create_pet_without_name() -> Scenario {
    missing_field("create_pet_without_name", PetField::Name)
}

pub fn create_pet_without_age() -> Scenario {
    missing_field("create_pet_without_age", PetField::Age)
}

pub fn create_pet_without_animal_type() -> Scenario {
    missing_field("create_pet_without_animal_type", PetField::AnimalType)
}

pub fn create_pet_without_body() -> Scenario {
    Scenario {
        name: "create_pet_without_body",
        request: ScenarioRequest::CreatePet {
            token: TokenShape::Issued,
            body: None,
        },
        expectation: Expectation::status(StatusCode::BAD_REQUEST),
    }
}

pub fn create_pet_without_auth_key() -> Scenario {
    Scenario {
        name: "create_pet_without_auth_key",
        request: ScenarioRequest::CreatePet {
            token: TokenShape::Missing,
            body: Some(Fixtures::pet_data()),
        },
        expectation: Expectation::status(StatusCode::FORBIDDEN),
    }
}

pub fn create_pet_with_forged_auth_key() -> Scenario {
    Scenario {
        name: "create_pet_with_forged_auth_key",
        request: ScenarioRequest::CreatePet {
            token: TokenShape::Forged,
            body: Some(Fixtures::pet_data()),
        },
        expectation: Expectation::status(StatusCode::FORBIDDEN),
    }
}

pub fn create_pet_with_gibberish_animal_type() -> Scenario {
    accepted(
        "create_pet_with_gibberish_animal_type",
        Fixtures::pet_data().with(
            PetField::AnimalType,
            "dfhajksdl;fkasdj;flsajfioqwueqoito[p]qt",
        ),
        &[PetField::AnimalType],
    )
}

pub fn create_pet_with_too_long_name() -> Scenario {
    accepted(
        "create_pet_with_too_long_name",
        Fixtures::pet_data().with(PetField::Name, "lorem ipsum".repeat(300)),
        &[PetField::Name],
    )
}

pub fn create_pet_with_big_age() -> Scenario {
    accepted(
        "create_pet_with_big_age",
        Fixtures::pet_data().with(PetField::Age, 1_000_000_000),
        &[PetField::Age],
    )
}

pub fn create_pet_with_string_age() -> Scenario {
    accepted(
        "create_pet_with_string_age",
        Fixtures::pet_data().with(PetField::Age, "1000000000"),
        &[PetField::Age],
    )
}

pub fn create_pet_with_text_age() -> Scenario {
    accepted(
        "create_pet_with_text_age",
        Fixtures::pet_data().with(PetField::Age, "text_age"),
        &[PetField::Age],
    )
}

// Only the age is asserted; what a numeric animal type turns into is left open.
pub fn create_pet_with_numeric_animal_type() -> Scenario {
    accepted(
        "create_pet_with_numeric_animal_type",
        Fixtures::pet_data().with(PetField::AnimalType, 120),
        &[PetField::Age],
    )
}

pub fn create_pet_with_numeric_name() -> Scenario {
    accepted(
        "create_pet_with_numeric_name",
        Fixtures::pet_data().with(PetField::Name, 199),
        &[PetField::Name],
    )
}

pub fn create_pet_with_additional_fields() -> Scenario {
    with_issued_key(
        "create_pet_with_additional_fields",
        Fixtures::pet_data().with_extra("asdqweqr", "12s"),
        Expectation::status(StatusCode::OK),
    )
}
