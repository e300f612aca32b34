pub mod entity;
pub mod invariants;
pub mod property;

pub use entity::Planet;
pub use property::PlanetProperty;
