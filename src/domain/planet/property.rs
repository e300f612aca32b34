use super::entity::Planet;

/// Numeric planet properties the user can ask statistics for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanetProperty {
    Population,
    SurfaceWater,
    Diameter,
}

impl PlanetProperty {
    /// Prompt order
    pub const ALL: [PlanetProperty; 3] = [
        PlanetProperty::Population,
        PlanetProperty::SurfaceWater,
        PlanetProperty::Diameter,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PlanetProperty::Population => "population",
            PlanetProperty::SurfaceWater => "surface water",
            PlanetProperty::Diameter => "diameter",
        }
    }

    /// Exact, case-sensitive label lookup
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label() == label)
    }

    /// Value used for ordering; `None` when the API did not know it
    pub fn value(self, planet: &Planet) -> Option<i64> {
        match self {
            PlanetProperty::Population => planet.population(),
            PlanetProperty::SurfaceWater => planet.surface_water().map(i64::from),
            PlanetProperty::Diameter => Some(i64::from(planet.diameter())),
        }
    }
}

impl std::fmt::Display for PlanetProperty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
