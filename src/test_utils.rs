//! Shared test utilities for `SpoolTrack`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults, plus pure model
//! factories for exercising the inventory arithmetic without a database.

use crate::{
    core::{
        filament::{self, NewFilament},
        inventory::{FilamentSummary, PurchaseStats, SpoolStats, summarize_filament},
        purchase::{self, NewPurchase, NewPurchaseItem},
        spool::{self, NewSpool},
        vendor,
    },
    entities,
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

/// Default business date used by the factories.
fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap_or_default()
}

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test vendor with no notes.
pub async fn create_test_vendor(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::vendor::Model> {
    vendor::create_vendor(db, name.to_string(), None).await
}

/// Creates a test filament with sensible defaults.
///
/// # Defaults
/// * `material`: "PLA"
/// * display fields: None
/// * `date_added`: 2024-06-01
pub async fn create_test_filament(
    db: &DatabaseConnection,
    name: &str,
    manufacturer: &str,
) -> Result<entities::filament::Model> {
    filament::create_filament(
        db,
        NewFilament {
            name: name.to_string(),
            manufacturer: manufacturer.to_string(),
            material: "PLA".to_string(),
            line: None,
            product: None,
            color: None,
            feature: None,
            url: None,
            notes: None,
            date_added: test_date(),
        },
    )
    .await
}

/// Builds a line item for test purchases with sensible defaults.
#[must_use]
pub fn new_test_item(filament_name: &str, spools: i32, kg_per_spool: f64) -> NewPurchaseItem {
    NewPurchaseItem {
        filament_name: filament_name.to_string(),
        seller: None,
        date_ordered: test_date(),
        date_received: None,
        spools,
        kg_per_spool,
        unit_price: 19.99,
        shelf: None,
        notes: None,
    }
}

/// Creates a single-item test purchase for one filament.
pub async fn create_test_purchase(
    db: &DatabaseConnection,
    filament_name: &str,
    spools: i32,
    kg_per_spool: f64,
) -> Result<(entities::purchase::Model, Vec<entities::purchase_item::Model>)> {
    purchase::create_purchase(
        db,
        NewPurchase {
            date_ordered: test_date(),
            marketplace: Some("Test Market".to_string()),
            order_url: None,
            subtotal: f64::from(spools) * 19.99,
            tax: 0.0,
            notes: None,
            items: vec![new_test_item(filament_name, spools, kg_per_spool)],
        },
    )
    .await
}

/// Opens a test spool with the given starting weight.
pub async fn create_test_spool(
    db: &DatabaseConnection,
    filament_name: &str,
    remaining_kg: f64,
) -> Result<entities::spool::Model> {
    spool::open_spool(
        db,
        NewSpool {
            filament_name: filament_name.to_string(),
            date_opened: test_date(),
            remaining_kg,
            shelf: None,
            notes: None,
        },
    )
    .await
}

/// Builds an in-memory filament model without touching a database.
/// Used by the pure arithmetic tests.
#[must_use]
pub fn test_filament_model(name: &str) -> entities::filament::Model {
    entities::filament::Model {
        id: 1,
        name: name.to_string(),
        manufacturer: "Polymaker".to_string(),
        line: None,
        material: "PLA".to_string(),
        product: None,
        color: Some("Black".to_string()),
        feature: None,
        url: None,
        notes: None,
        date_added: test_date(),
        created_at: chrono::Utc::now(),
    }
}

/// Builds an in-memory purchase item model without touching a database.
#[must_use]
pub fn test_item_model(
    filament_name: &str,
    spools: i32,
    kg_per_spool: f64,
) -> entities::purchase_item::Model {
    entities::purchase_item::Model {
        id: 0,
        purchase_id: 0,
        filament_name: filament_name.to_string(),
        seller: None,
        date_ordered: test_date(),
        date_received: None,
        spools,
        kg_per_spool,
        unit_price: 19.99,
        shelf: None,
        notes: None,
        created_at: chrono::Utc::now(),
    }
}

/// Builds an in-memory spool model without touching a database.
#[must_use]
pub fn test_spool_model(
    filament_name: &str,
    remaining_kg: f64,
    date_finished: Option<NaiveDate>,
) -> entities::spool::Model {
    entities::spool::Model {
        id: 0,
        filament_name: filament_name.to_string(),
        date_opened: test_date(),
        date_finished,
        shelf: None,
        remaining_kg,
        notes: None,
        created_at: chrono::Utc::now(),
    }
}

/// Builds a summary for a filament with no purchase or spool records.
#[must_use]
pub fn test_summary(filament: &entities::filament::Model) -> FilamentSummary {
    summarize_filament(filament, PurchaseStats::default(), SpoolStats::default())
}
