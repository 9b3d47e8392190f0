/// CSV export for appliance records and consolidated curves.
pub mod export;
