//! Shared test fixtures for integration tests.

use edco_bidgen::catalog::{AppliancePrototype, Catalog};
use edco_bidgen::config::{GeneratorConfig, HouseTypeConfig};

/// Baseline reference configuration (2 subareas, 5 house types, seed 47).
pub fn baseline_config() -> GeneratorConfig {
    GeneratorConfig::baseline()
}

/// A catalog holding a single appliance model.
pub fn single_appliance_catalog(name: &str, category: usize, rated_power_w: f64) -> Catalog {
    Catalog::new(vec![AppliancePrototype {
        name: name.to_string(),
        category,
        rated_power_w,
    }])
    .expect("fixture catalog is valid")
}

/// Configuration that forces exactly one house of one type.
///
/// One subarea, house envelope `(1000, 2000)` W, house count drawn from
/// `[1, 2)` (always 1), tariff schedule `[2, 1]` with every category mean
/// at 2 and a tiny standard deviation so tariff 2 is drawn with certainty.
pub fn forced_single_house_config() -> GeneratorConfig {
    let mut cfg = GeneratorConfig::baseline();
    cfg.generation.n_subareas = 1;
    cfg.generation.min_houses = 1;
    cfg.generation.max_houses = 2;
    cfg.tariff.schedule = vec![2.0, 1.0];
    cfg.tariff.category_means = vec![2.0; 5];
    cfg.tariff.std_dev = 0.01;
    cfg.house_types = vec![HouseTypeConfig {
        label: "I".to_string(),
        lower_w: 1000.0,
        upper_w: 2000.0,
    }];
    cfg
}
