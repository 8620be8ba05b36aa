#[path = "../common/mod.rs"]
mod common;

mod create_pet;
