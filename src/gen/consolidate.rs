//! Consolidation of one subarea's appliance records into a bid curve.

use crate::r#gen::types::{ApplianceRecord, ConsolidatedCurve, CurveLevel};

/// Consolidates one subarea's records into a descending-tariff bid curve.
///
/// Records are grouped by subscribed tariff; each group's aggregate power
/// is the sum of rated power (W) and its revenue is
/// `aggregate_power_w * tariff / 1000` (tariffs are priced per kW).
/// Groups are ordered by descending tariff and cumulative power/revenue
/// are running sums along that order, so each level answers "how much
/// power is served, and revenue earned, if every appliance subscribed at
/// this tariff or higher is satisfied".
///
/// Grouping uses exact `f64` equality, which is sound because every
/// record's tariff is a copy of a schedule element. Partitioning records
/// by subarea is the caller's job; passing an empty slice yields an empty
/// curve.
pub fn consolidate(subarea_id: usize, records: &[ApplianceRecord]) -> ConsolidatedCurve {
    debug_assert!(records.iter().all(|r| r.subarea_id == subarea_id));

    let mut pairs: Vec<(f64, f64)> = records
        .iter()
        .map(|r| (r.tariff, r.rated_power_w))
        .collect();
    pairs.sort_by(|a, b| b.0.partial_cmp(&a.0).expect("tariffs are finite"));

    let mut levels = Vec::new();
    let mut cumulative_power_w = 0.0;
    let mut cumulative_revenue = 0.0;
    let mut i = 0;
    while i < pairs.len() {
        let tariff = pairs[i].0;
        let mut aggregate_power_w = 0.0;
        while i < pairs.len() && pairs[i].0 == tariff {
            aggregate_power_w += pairs[i].1;
            i += 1;
        }
        let aggregate_revenue = aggregate_power_w * tariff / 1000.0;
        cumulative_power_w += aggregate_power_w;
        cumulative_revenue += aggregate_revenue;
        levels.push(CurveLevel {
            tariff,
            aggregate_power_w,
            aggregate_revenue,
            cumulative_power_w,
            cumulative_revenue,
        });
    }

    ConsolidatedCurve { subarea_id, levels }
}
