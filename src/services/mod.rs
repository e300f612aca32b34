// src/services/mod.rs
//
// Services Module - data pipeline between the API and the console

pub mod planet_service;
pub mod statistics_service;

#[cfg(test)]
mod statistics_service_tests;

pub use planet_service::{load_planets, parse, to_planets};
pub use statistics_service::{compute_extremes, report_statistics, PropertyExtremes};
