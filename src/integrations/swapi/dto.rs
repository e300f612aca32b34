// src/integrations/swapi/dto.rs
//
// Literal SWAPI wire shapes. Numbers arrive as text, with placeholders
// such as "unknown" for missing data.

use serde::Deserialize;

/// Page envelope; only `results` is required
#[derive(Debug, Clone, Deserialize)]
pub struct RootResponse {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
    pub results: Vec<RawPlanetRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawPlanetRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub diameter: Option<String>,
    #[serde(default)]
    pub surface_water: Option<String>,
    #[serde(default)]
    pub population: Option<String>,
}
