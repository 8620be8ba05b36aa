pub mod configuration;
pub mod domain;
pub mod fixtures;
pub mod registry_client;
pub mod runner;
pub mod scenarios;
pub mod session;
pub mod telemetry;
