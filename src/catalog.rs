//! Read-only appliance catalog loaded once before generation begins.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Number of appliance importance categories. Category 0 is the most
/// important (highest tariff bias), category 4 the least.
pub const CATEGORY_COUNT: usize = 5;

/// One catalog entry: an appliance model the sampler can draw.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliancePrototype {
    /// Appliance name.
    pub name: String,
    /// Importance category in `[0, CATEGORY_COUNT)`.
    pub category: usize,
    /// Rated power in watts (> 0).
    pub rated_power_w: f64,
}

/// Error raised while loading or validating the appliance catalog.
///
/// Catalog failures are fatal: generation never starts on a bad catalog.
#[derive(Debug)]
pub struct CatalogError {
    /// Human-readable description including the offending row, if any.
    pub message: String,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "catalog error: {}", self.message)
    }
}

/// Immutable appliance catalog with dense integer indexing.
///
/// Loaded once at startup and shared read-only across all sampling calls;
/// the sampler draws entries uniformly by index with replacement.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<AppliancePrototype>,
}

impl Catalog {
    /// Builds a catalog from pre-validated entries.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if the entry list is empty or any entry
    /// has an out-of-range category or non-positive rated power.
    pub fn new(entries: Vec<AppliancePrototype>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError {
                message: "catalog is empty".to_string(),
            });
        }
        for (i, e) in entries.iter().enumerate() {
            if e.category >= CATEGORY_COUNT {
                return Err(CatalogError {
                    message: format!(
                        "entry {i} (\"{}\"): category {} out of range [0, {CATEGORY_COUNT})",
                        e.name, e.category
                    ),
                });
            }
            if !(e.rated_power_w > 0.0) || !e.rated_power_w.is_finite() {
                return Err(CatalogError {
                    message: format!(
                        "entry {i} (\"{}\"): rated power must be a positive number, got {}",
                        e.name, e.rated_power_w
                    ),
                });
            }
        }
        Ok(Self { entries })
    }

    /// Loads the catalog from a CSV file at the given path.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if the file cannot be opened, any row is
    /// malformed, or the resulting catalog fails validation.
    pub fn from_csv_path(path: &Path) -> Result<Self, CatalogError> {
        let file = File::open(path).map_err(|e| CatalogError {
            message: format!("cannot open \"{}\": {e}", path.display()),
        })?;
        Self::from_reader(file)
    }

    /// Parses a catalog from CSV data with a header row followed by
    /// `name,category,rated_power_w` records.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if any row fails to parse or the catalog
    /// fails validation (including the empty case).
    pub fn from_reader(reader: impl Read) -> Result<Self, CatalogError> {
        let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
        let mut entries = Vec::new();
        for (i, record) in rdr.records().enumerate() {
            let rec = record.map_err(|e| CatalogError {
                message: format!("row {}: {e}", i + 1),
            })?;
            if rec.len() != 3 {
                return Err(CatalogError {
                    message: format!("row {}: expected 3 fields, got {}", i + 1, rec.len()),
                });
            }
            let name = rec[0].trim().to_string();
            let category: usize = rec[1].trim().parse().map_err(|_| CatalogError {
                message: format!("row {}: category \"{}\" is not an integer", i + 1, &rec[1]),
            })?;
            let rated_power_w: f64 = rec[2].trim().parse().map_err(|_| CatalogError {
                message: format!("row {}: rated power \"{}\" is not a number", i + 1, &rec[2]),
            })?;
            entries.push(AppliancePrototype {
                name,
                category,
                rated_power_w,
            });
        }
        Self::new(entries)
    }

    /// Returns the built-in default catalog: 25 common residential
    /// appliances spread across the five importance categories.
    pub fn builtin() -> Self {
        let table: [(&str, usize, f64); 25] = [
            ("refrigerator", 0, 150.0),
            ("chest_freezer", 0, 100.0),
            ("wifi_router", 0, 10.0),
            ("security_system", 0, 25.0),
            ("medical_cpap", 0, 60.0),
            ("led_lighting", 1, 60.0),
            ("ceiling_fan", 1, 75.0),
            ("television", 1, 120.0),
            ("laptop", 1, 65.0),
            ("phone_charger", 1, 10.0),
            ("air_conditioner", 2, 1500.0),
            ("space_heater", 2, 1200.0),
            ("water_heater", 2, 2000.0),
            ("microwave_oven", 2, 900.0),
            ("electric_kettle", 2, 1800.0),
            ("washing_machine", 3, 500.0),
            ("dishwasher", 3, 1200.0),
            ("vacuum_cleaner", 3, 700.0),
            ("clothes_iron", 3, 1000.0),
            ("toaster", 3, 800.0),
            ("ev_charger", 4, 3300.0),
            ("pool_pump", 4, 1100.0),
            ("clothes_dryer", 4, 3000.0),
            ("water_pump", 4, 750.0),
            ("dehumidifier", 4, 300.0),
        ];
        let entries = table
            .iter()
            .map(|&(name, category, rated_power_w)| AppliancePrototype {
                name: name.to_string(),
                category,
                rated_power_w,
            })
            .collect();
        // The static table satisfies every validation rule.
        Self { entries }
    }

    /// Number of catalog entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog holds no entries. Always false for a
    /// successfully constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry at `index`.
    pub fn get(&self, index: usize) -> &AppliancePrototype {
        &self.entries[index]
    }

    /// Iterates over all entries.
    pub fn iter(&self) -> impl Iterator<Item = &AppliancePrototype> {
        self.entries.iter()
    }
}
