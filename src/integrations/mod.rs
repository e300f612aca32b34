// src/integrations/mod.rs
//
// External Integrations Module

pub mod swapi;

pub use swapi::client::{HttpJsonReader, JsonReader};
pub use swapi::dto::{RawPlanetRecord, RootResponse};

#[cfg(test)]
pub use swapi::client::MockJsonReader;
