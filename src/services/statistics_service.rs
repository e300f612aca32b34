// src/services/statistics_service.rs
//
// Max / min of one planet property.
//
// Ordering rule: values compare as Option<i64>, so an unknown value sorts
// below every known one. On ties the first planet in iteration order is kept,
// for both the maximum and the minimum.

use crate::application::console::Console;
use crate::domain::{Planet, PlanetProperty};
use crate::error::{AppError, AppResult};

/// The planets holding the largest and smallest value of a property
#[derive(Debug, Clone, Copy)]
pub struct PropertyExtremes<'a> {
    pub property: PlanetProperty,
    pub max: &'a Planet,
    pub min: &'a Planet,
}

impl PropertyExtremes<'_> {
    pub fn max_value(&self) -> Option<i64> {
        self.property.value(self.max)
    }

    pub fn min_value(&self) -> Option<i64> {
        self.property.value(self.min)
    }

    /// The two report lines; unknown values print as empty text
    pub fn lines(&self) -> [String; 2] {
        [
            format!(
                "max {} is {} (planet: {})",
                self.property,
                display_value(self.max_value()),
                self.max.name()
            ),
            format!(
                "min {} is {} (planet: {})",
                self.property,
                display_value(self.min_value()),
                self.min.name()
            ),
        ]
    }
}

pub fn compute_extremes(planets: &[Planet], property: PlanetProperty) -> AppResult<PropertyExtremes<'_>> {
    let (first, rest) = planets.split_first().ok_or(AppError::EmptyInput)?;

    let mut max = first;
    let mut min = first;
    for planet in rest {
        let value = property.value(planet);
        if value > property.value(max) {
            max = planet;
        }
        if value < property.value(min) {
            min = planet;
        }
    }

    Ok(PropertyExtremes { property, max, min })
}

/// Compute, then print both lines. Nothing is printed on failure.
pub fn report_statistics(
    console: &mut dyn Console,
    planets: &[Planet],
    property: PlanetProperty,
) -> AppResult<()> {
    let extremes = compute_extremes(planets, property)?;
    log::debug!(
        "{}: max {:?} ({}), min {:?} ({})",
        property,
        extremes.max_value(),
        extremes.max.name(),
        extremes.min_value(),
        extremes.min.name()
    );
    for line in extremes.lines() {
        console.write_line(&line)?;
    }
    Ok(())
}

fn display_value(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
