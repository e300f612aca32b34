// src/lib.rs
// SWAPI Planets - planet table and min/max statistics from swapi.dev
//
// Architecture:
// - Domain: Planet value and its invariants, the numeric properties
// - Integrations: SWAPI wire shapes and the HTTP reader
// - Services: parse/map pipeline and statistics
// - Application: console port, table printer, orchestration

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod integrations;
pub mod services;

// ============================================================================
// PUBLIC API
// ============================================================================

pub use application::{App, Console, StdConsole};
pub use config::{AppConfig, Cli};
pub use domain::{DomainError, Planet, PlanetProperty};
pub use error::{AppError, AppResult};
pub use integrations::{HttpJsonReader, JsonReader, RawPlanetRecord, RootResponse};
pub use services::{compute_extremes, load_planets, PropertyExtremes};
