//! Catalog seeding configuration from config.toml
//!
//! This module loads an initial vendor and filament catalog from a TOML
//! configuration file. Entries already present in the database (matched by
//! name) are skipped, so seeding is safe to run on every startup.

use crate::core::{
    filament::{self, NewFilament},
    vendor,
};
use crate::errors::{Error, Result};
use chrono::{NaiveDate, Utc};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct CatalogConfig {
    /// Vendors to seed
    #[serde(default)]
    pub vendors: Vec<VendorSeed>,
    /// Filaments to seed
    #[serde(default)]
    pub filaments: Vec<FilamentSeed>,
}

/// Configuration for a single vendor
#[derive(Debug, Deserialize, Clone)]
pub struct VendorSeed {
    /// Unique vendor name
    pub name: String,
    /// Optional notes
    pub notes: Option<String>,
}

/// Configuration for a single filament catalog entry
#[derive(Debug, Deserialize, Clone)]
pub struct FilamentSeed {
    /// Unique descriptive name
    pub name: String,
    /// Vendor name; the vendor must exist or be seeded alongside
    pub manufacturer: String,
    /// Material type (e.g., "PLA")
    pub material: String,
    /// Product line
    pub line: Option<String>,
    /// Product name within the line
    pub product: Option<String>,
    /// Primary color
    pub color: Option<String>,
    /// Surface feature
    pub feature: Option<String>,
    /// Product page URL
    pub url: Option<String>,
    /// Notes
    pub notes: Option<String>,
    /// Date added to the catalog; defaults to today when absent
    pub date_added: Option<NaiveDate>,
}

/// Loads catalog configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<CatalogConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Seeds the database with vendors and filaments from the catalog config.
///
/// Vendors are inserted first so that filament manufacturer lookups succeed.
/// Entries whose names already exist are skipped. Returns the number of
/// vendors and filaments actually inserted.
pub async fn seed_catalog(
    db: &DatabaseConnection,
    config: &CatalogConfig,
) -> Result<(usize, usize)> {
    let mut vendors_added = 0;
    let mut filaments_added = 0;

    for seed in &config.vendors {
        if vendor::get_vendor_by_name(db, &seed.name).await?.is_some() {
            debug!("Vendor '{}' already exists, skipping", seed.name);
            continue;
        }
        vendor::create_vendor(db, seed.name.clone(), seed.notes.clone()).await?;
        vendors_added += 1;
    }

    for seed in &config.filaments {
        if filament::get_filament_by_name(db, &seed.name)
            .await?
            .is_some()
        {
            debug!("Filament '{}' already exists, skipping", seed.name);
            continue;
        }
        let new_filament = NewFilament {
            name: seed.name.clone(),
            manufacturer: seed.manufacturer.clone(),
            material: seed.material.clone(),
            line: seed.line.clone(),
            product: seed.product.clone(),
            color: seed.color.clone(),
            feature: seed.feature.clone(),
            url: seed.url.clone(),
            notes: seed.notes.clone(),
            date_added: seed.date_added.unwrap_or_else(|| Utc::now().date_naive()),
        };
        filament::create_filament(db, new_filament).await?;
        filaments_added += 1;
    }

    info!(
        "Catalog seeded: {} vendors and {} filaments added",
        vendors_added, filaments_added
    );
    Ok((vendors_added, filaments_added))
}
