// src/services/planet_service.rs
//
// JSON text -> RootResponse -> Vec<Planet>.
// Fail-fast: the first bad record aborts the whole mapping.

use crate::domain::{DomainError, DomainResult, Planet};
use crate::error::AppResult;
use crate::integrations::{RawPlanetRecord, RootResponse};

/// Decode the page envelope. The literal document `null` yields `None`.
pub fn parse(json: &str) -> AppResult<Option<RootResponse>> {
    let root: Option<RootResponse> = serde_json::from_str(json)?;
    if let Some(root) = &root {
        log::debug!(
            "decoded {} planet records (count reported: {:?})",
            root.results.len(),
            root.count
        );
        if let Some(next) = &root.next {
            log::info!("further pages are not fetched (next: {})", next);
        }
    }
    Ok(root)
}

/// Map every raw record to a planet
pub fn to_planets(root: Option<RootResponse>) -> DomainResult<Vec<Planet>> {
    let root = root.ok_or(DomainError::NullRoot)?;
    root.results.into_iter().map(Planet::try_from).collect()
}

/// Parse then map
pub fn load_planets(json: &str) -> AppResult<Vec<Planet>> {
    let planets = to_planets(parse(json)?)?;
    log::debug!("mapped {} planets", planets.len());
    Ok(planets)
}

impl TryFrom<RawPlanetRecord> for Planet {
    type Error = DomainError;

    fn try_from(record: RawPlanetRecord) -> DomainResult<Self> {
        let diameter = parse_diameter(record.diameter)?;
        let surface_water = parse_optional::<i32>(record.surface_water.as_deref());
        let population = parse_optional::<i64>(record.population.as_deref());
        Planet::new(record.name, diameter, surface_water, population)
    }
}

fn parse_diameter(raw: Option<String>) -> DomainResult<i32> {
    let raw = raw.ok_or(DomainError::MissingDiameter)?;
    let parsed = raw.trim().parse::<i32>();
    parsed.map_err(|source| DomainError::InvalidDiameter { value: raw, source })
}

/// Best-effort numeric field: anything unparseable becomes `None`.
/// Surrounding whitespace is ignored, as for the diameter.
fn parse_optional<T: std::str::FromStr>(raw: Option<&str>) -> Option<T> {
    raw.and_then(|text| text.trim().parse().ok())
}
