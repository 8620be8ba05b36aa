//! Test utilities shared between the fake-registry and the live test suites.

pub mod helpers;

// Re-export commonly used items for convenience
#[allow(unused_imports)]
pub use fake_registry::{ISSUED_KEY, REGISTERED_EMAIL, REGISTERED_PASSWORD, spawn_registry};
#[allow(unused_imports)]
pub use helpers::*;
