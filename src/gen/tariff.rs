//! Tariff subscription probability model.
//!
//! Each tariff rate `t` in the schedule is treated as the discretization
//! bucket `[t - 0.5, t + 0.5)` of a Normal distribution centred on the
//! category's mean tariff. Normalizing the bucket masses corrects for the
//! truncation at the schedule's extremes, so higher-mean categories place
//! more mass on higher tariffs.

use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use statrs::distribution::{ContinuousCDF, Normal};

use crate::catalog::CATEGORY_COUNT;

/// Per-category discrete probability distributions over the tariff schedule.
#[derive(Debug, Clone)]
pub struct TariffProbabilities {
    schedule: Vec<f64>,
    by_category: Vec<Vec<f64>>,
}

impl TariffProbabilities {
    /// Computes one normalized tariff distribution per category.
    ///
    /// # Arguments
    ///
    /// * `schedule` - Strictly decreasing tariff rates (non-empty)
    /// * `category_means` - Mean subscribed tariff per category
    /// * `std_dev` - Standard deviation shared by all categories (> 0)
    ///
    /// # Panics
    ///
    /// Panics if the schedule is empty, `category_means` does not have
    /// exactly [`CATEGORY_COUNT`] entries, `std_dev` is not positive, or a
    /// category's mean lies so far outside the schedule that every bucket
    /// mass underflows to zero. Configuration validation rules all of
    /// these out before generation starts.
    pub fn compute(schedule: &[f64], category_means: &[f64], std_dev: f64) -> Self {
        assert!(!schedule.is_empty(), "tariff schedule must not be empty");
        assert_eq!(
            category_means.len(),
            CATEGORY_COUNT,
            "expected one mean tariff per category"
        );
        assert!(std_dev > 0.0, "std_dev must be > 0");

        let mut by_category = Vec::with_capacity(CATEGORY_COUNT);
        for (cat, &mean) in category_means.iter().enumerate() {
            let normal = Normal::new(mean, std_dev).expect("mean is finite and std_dev > 0");
            let mut masses: Vec<f64> = schedule
                .iter()
                .map(|&t| normal.cdf(t + 0.5) - normal.cdf(t - 0.5))
                .collect();
            let total: f64 = masses.iter().sum();
            assert!(
                total > 0.0,
                "category {cat}: mean {mean} is too far from the tariff schedule \
                 for std_dev {std_dev} (all bucket masses underflow)"
            );
            for m in &mut masses {
                *m /= total;
            }
            by_category.push(masses);
        }

        Self {
            schedule: schedule.to_vec(),
            by_category,
        }
    }

    /// The tariff schedule these distributions are aligned with.
    pub fn schedule(&self) -> &[f64] {
        &self.schedule
    }

    /// The normalized probability vector for one category, positionally
    /// aligned with the schedule.
    pub fn category(&self, category: usize) -> &[f64] {
        &self.by_category[category]
    }

    /// Expected subscribed tariff under one category's distribution.
    pub fn expected_tariff(&self, category: usize) -> f64 {
        self.by_category[category]
            .iter()
            .zip(&self.schedule)
            .map(|(p, t)| p * t)
            .sum()
    }
}

/// Weighted single-draw sampler over the tariff schedule.
///
/// Pre-builds one [`WeightedIndex`] per category so the per-appliance draw
/// is a single table lookup plus one RNG call.
#[derive(Debug, Clone)]
pub struct TariffSampler {
    schedule: Vec<f64>,
    by_category: Vec<WeightedIndex<f64>>,
}

impl TariffSampler {
    /// Builds a sampler from computed probabilities.
    pub fn new(probabilities: &TariffProbabilities) -> Self {
        let by_category = (0..CATEGORY_COUNT)
            .map(|cat| {
                WeightedIndex::new(probabilities.category(cat).iter().copied())
                    .expect("normalized probabilities are non-negative with positive sum")
            })
            .collect();
        Self {
            schedule: probabilities.schedule().to_vec(),
            by_category,
        }
    }

    /// Draws one subscribed tariff for an appliance of the given category.
    pub fn draw(&self, rng: &mut impl Rng, category: usize) -> f64 {
        let idx = self.by_category[category].sample(rng);
        self.schedule[idx]
    }
}
