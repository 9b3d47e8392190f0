/// Per-subarea grouped cumulative demand/revenue curves.
pub mod consolidate;
pub mod population;
/// Power-bounded per-house appliance sampling.
pub mod sampler;
pub mod tariff;
pub mod types;
