use std::collections::BTreeMap;
use std::fmt;

/// A JSON scalar as submitted in a pet payload field.
///
/// The registry does not enforce field types, so scenarios freely put numbers
/// where text is expected and the other way round.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Integer(i64),
    Boolean(bool),
}

impl Scalar {
    /// The form the registry echoes back: every field comes back as a string,
    /// so `2` is returned as `"2"`.
    pub fn echoed(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(text) => f.write_str(text),
            Scalar::Integer(value) => write!(f, "{}", value),
            Scalar::Boolean(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Integer(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Integer(value.into())
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Boolean(value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PetField {
    Name,
    AnimalType,
    Age,
}

impl PetField {
    pub fn as_str(&self) -> &'static str {
        match self {
            PetField::Name => "name",
            PetField::AnimalType => "animal_type",
            PetField::Age => "age",
        }
    }
}

impl fmt::Display for PetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /create_pet_simple` and `PUT /pets/{id}`.
///
/// Absent fields are left out of the JSON document entirely.
#[derive(Clone, Debug, PartialEq, Default, serde::Serialize)]
pub struct PetPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<Scalar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    animal_type: Option<Scalar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    age: Option<Scalar>,
    #[serde(flatten)]
    extra: BTreeMap<String, Scalar>,
}

impl PetPayload {
    pub fn canonical() -> Self {
        Self::default()
            .with(PetField::Name, "Barbos")
            .with(PetField::AnimalType, "German Shepherd")
            .with(PetField::Age, 2)
    }

    /// A payload with no fields, the starting point of partial updates.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: PetField, value: impl Into<Scalar>) -> Self {
        *self.slot(field) = Some(value.into());
        self
    }

    pub fn without(mut self, field: PetField) -> Self {
        *self.slot(field) = None;
        self
    }

    /// Adds a key the registry does not know about.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, field: PetField) -> Option<&Scalar> {
        match field {
            PetField::Name => self.name.as_ref(),
            PetField::AnimalType => self.animal_type.as_ref(),
            PetField::Age => self.age.as_ref(),
        }
    }

    fn slot(&mut self, field: PetField) -> &mut Option<Scalar> {
        match field {
            PetField::Name => &mut self.name,
            PetField::AnimalType => &mut self.animal_type,
            PetField::Age => &mut self.age,
        }
    }
}
