use crate::domain::DomainResult;

use super::invariants::validate_name;

/// A planet as shown in the table and used for statistics.
/// Immutable once built; `Planet::new` is the only constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Planet {
    name: String,
    diameter: i32,
    surface_water: Option<i32>,
    population: Option<i64>,
}

impl Planet {
    /// Create a planet, rejecting an absent or blank name
    pub fn new(
        name: Option<String>,
        diameter: i32,
        surface_water: Option<i32>,
        population: Option<i64>,
    ) -> DomainResult<Self> {
        let name = validate_name(name)?;
        Ok(Self {
            name,
            diameter,
            surface_water,
            population,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn diameter(&self) -> i32 {
        self.diameter
    }

    pub fn surface_water(&self) -> Option<i32> {
        self.surface_water
    }

    pub fn population(&self) -> Option<i64> {
        self.population
    }
}
