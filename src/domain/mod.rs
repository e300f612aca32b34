// src/domain/mod.rs
//
// Domain Root
//
// All other modules import domain types from `crate::domain::*`.

pub mod planet;

pub use planet::{Planet, PlanetProperty};

use std::num::ParseIntError;
use thiserror::Error;

/// Domain-level errors raised while turning API records into planets
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Response root is null")]
    NullRoot,

    #[error("Planet name cannot be empty")]
    MissingName,

    #[error("Planet diameter is missing")]
    MissingDiameter,

    #[error("Planet diameter {value:?} is not an integer: {source}")]
    InvalidDiameter {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
