//! Core value types: appliance records and consolidated bid curves.

use std::fmt;

/// Rounds a value to two decimal places.
///
/// Applied only at the output boundary; all aggregation runs at full
/// precision.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// One appliance instance assigned to a house. Immutable once created.
///
/// Produced by the population generator, consumed read-only by the
/// consolidation engine. House ids are unique only within a
/// `(subarea_id, house_type)` pair; downstream grouping keys on
/// `(subarea_id, tariff)`, never on house id.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplianceRecord {
    /// Originating subarea index.
    pub subarea_id: usize,
    /// House index within `(subarea_id, house_type)`.
    pub house_id: usize,
    /// House type label from the configuration.
    pub house_type: String,
    /// Appliance name from the catalog.
    pub name: String,
    /// Rated power in watts.
    pub rated_power_w: f64,
    /// Importance category.
    pub category: usize,
    /// Subscribed tariff rate (a copy of one schedule element).
    pub tariff: f64,
}

/// One tariff level of a consolidated curve, at full internal precision.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveLevel {
    /// Tariff rate for this group (currency per kW).
    pub tariff: f64,
    /// Sum of rated power over all appliances subscribed at this tariff (W).
    pub aggregate_power_w: f64,
    /// Revenue for this group: `aggregate_power_w * tariff / 1000`
    /// (power is in watts, tariffs are priced per kW).
    pub aggregate_revenue: f64,
    /// Running power total from the highest tariff down to this one (W).
    pub cumulative_power_w: f64,
    /// Running revenue total from the highest tariff down to this one.
    pub cumulative_revenue: f64,
}

/// Consolidated demand/revenue bid curve for one subarea.
///
/// Levels are ordered by strictly descending tariff; cumulative fields are
/// non-decreasing along that order. An empty level list is legal (a
/// subarea whose houses all sampled zero appliances).
#[derive(Debug, Clone, PartialEq)]
pub struct ConsolidatedCurve {
    /// Subarea this curve belongs to.
    pub subarea_id: usize,
    /// Curve levels in descending-tariff order.
    pub levels: Vec<CurveLevel>,
}

impl ConsolidatedCurve {
    /// Cumulative power values (W), rounded to 2 decimal places, in
    /// descending-tariff order.
    pub fn cumulative_power(&self) -> Vec<f64> {
        self.levels
            .iter()
            .map(|l| round2(l.cumulative_power_w))
            .collect()
    }

    /// Cumulative revenue values, rounded to 2 decimal places, in
    /// descending-tariff order.
    pub fn cumulative_revenue(&self) -> Vec<f64> {
        self.levels
            .iter()
            .map(|l| round2(l.cumulative_revenue))
            .collect()
    }
}

impl fmt::Display for ConsolidatedCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "subarea {} ({} tariff levels)", self.subarea_id, self.levels.len())?;
        for l in &self.levels {
            writeln!(
                f,
                "  tariff={:>6.2} | agg_p={:>10.2} W  agg_r={:>10.2} | cum_p={:>10.2} W  cum_r={:>10.2}",
                l.tariff,
                round2(l.aggregate_power_w),
                round2(l.aggregate_revenue),
                round2(l.cumulative_power_w),
                round2(l.cumulative_revenue),
            )?;
        }
        Ok(())
    }
}
