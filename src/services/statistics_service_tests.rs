// src/services/statistics_service_tests.rs
//
// Max / min selection over planet properties.

#[cfg(test)]
mod extremes_tests {
    use crate::application::console::MemoryConsole;
    use crate::domain::{Planet, PlanetProperty};
    use crate::error::AppError;
    use crate::services::statistics_service::{compute_extremes, report_statistics};

    fn planet(name: &str, diameter: i32, surface_water: Option<i32>, population: Option<i64>) -> Planet {
        Planet::new(Some(name.to_string()), diameter, surface_water, population).unwrap()
    }

    fn sample() -> Vec<Planet> {
        vec![
            planet("Tatooine", 10465, Some(1), Some(200000)),
            planet("Alderaan", 12500, Some(40), Some(2000000000)),
            planet("Yavin IV", 10200, Some(8), Some(1000)),
            planet("Hoth", 7200, Some(100), None),
        ]
    }

    #[test]
    fn test_population_extremes_treat_unknown_as_smallest() {
        let planets = sample();
        let extremes = compute_extremes(&planets, PlanetProperty::Population).unwrap();
        assert_eq!(extremes.max.name(), "Alderaan");
        assert_eq!(extremes.min.name(), "Hoth");
        assert_eq!(extremes.min_value(), None);
    }

    #[test]
    fn test_max_and_min_bound_every_value() {
        let planets = sample();
        for property in PlanetProperty::ALL {
            let extremes = compute_extremes(&planets, property).unwrap();
            for p in &planets {
                assert!(extremes.max_value() >= property.value(p));
                assert!(extremes.min_value() <= property.value(p));
            }
        }
    }

    #[test]
    fn test_ties_keep_first_planet() {
        let planets = vec![
            planet("First", 100, Some(5), None),
            planet("Second", 100, Some(5), None),
        ];
        for property in PlanetProperty::ALL {
            let extremes = compute_extremes(&planets, property).unwrap();
            assert_eq!(extremes.max.name(), "First");
            assert_eq!(extremes.min.name(), "First");
        }
    }

    #[test]
    fn test_single_planet_is_both_extremes() {
        let planets = vec![planet("Bespin", 118000, Some(0), Some(6000000))];
        let extremes = compute_extremes(&planets, PlanetProperty::Diameter).unwrap();
        assert_eq!(extremes.max.name(), "Bespin");
        assert_eq!(extremes.min.name(), "Bespin");
    }

    #[test]
    fn test_empty_input_fails_without_output() {
        let mut console = MemoryConsole::new(Vec::<String>::new());
        let err = report_statistics(&mut console, &[], PlanetProperty::Population).unwrap_err();
        assert!(matches!(err, AppError::EmptyInput));
        assert!(console.output().is_empty());
    }

    #[test]
    fn test_report_lines() {
        let planets = vec![
            planet("Tatooine", 10465, Some(1), Some(200000)),
            planet("Alderaan", 12500, Some(40), Some(2000000000)),
        ];
        let mut console = MemoryConsole::new(Vec::<String>::new());

        report_statistics(&mut console, &planets, PlanetProperty::Population).unwrap();

        assert_eq!(
            console.output(),
            [
                "max population is 2000000000 (planet: Alderaan)".to_string(),
                "min population is 200000 (planet: Tatooine)".to_string(),
            ]
        );
    }

    #[test]
    fn test_unknown_value_prints_blank() {
        let planets = vec![
            planet("Hoth", 7200, Some(100), None),
            planet("Dagobah", 8900, None, None),
        ];
        let mut console = MemoryConsole::new(Vec::<String>::new());

        report_statistics(&mut console, &planets, PlanetProperty::SurfaceWater).unwrap();

        assert_eq!(console.output()[0], "max surface water is 100 (planet: Hoth)");
        assert_eq!(console.output()[1], "min surface water is  (planet: Dagobah)");
    }
}
