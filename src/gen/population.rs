//! Population build: houses per subarea and their tagged appliance records.

use rand::Rng;

use crate::catalog::Catalog;
use crate::config::HouseTypeConfig;
use crate::r#gen::sampler::sample_house_appliances;
use crate::r#gen::tariff::TariffSampler;
use crate::r#gen::types::ApplianceRecord;

/// Generates the full appliance population across all subareas.
///
/// For each subarea and each house type (in declared order), the house
/// count is drawn uniformly from the half-open range
/// `[min_houses, max_houses)`, then every house is filled by the bounded
/// sampler and its appliances tagged with `(subarea_id, house_id,
/// house_type)`. House ids restart at 0 for every (subarea, house_type)
/// pair; they are not globally unique, and downstream consolidation never
/// keys on them.
///
/// All randomness comes from the single `rng` handle, so identical seeds
/// produce identical populations. Draw order ties the output to the loop
/// order; partitioning draws per house for parallel generation is a known
/// non-goal.
pub fn generate_population(
    rng: &mut impl Rng,
    catalog: &Catalog,
    n_subareas: usize,
    house_types: &[HouseTypeConfig],
    min_houses: usize,
    max_houses: usize,
    tariff_sampler: &TariffSampler,
) -> Vec<ApplianceRecord> {
    let mut records = Vec::new();
    for subarea_id in 0..n_subareas {
        for house_type in house_types {
            let count = rng.random_range(min_houses..max_houses);
            for house_id in 0..count {
                let appliances = sample_house_appliances(
                    rng,
                    catalog,
                    house_type.lower_w,
                    house_type.upper_w,
                    tariff_sampler,
                );
                for a in appliances {
                    records.push(ApplianceRecord {
                        subarea_id,
                        house_id,
                        house_type: house_type.label.clone(),
                        name: a.name,
                        rated_power_w: a.rated_power_w,
                        category: a.category,
                        tariff: a.tariff,
                    });
                }
            }
        }
    }
    records
}
