//! Vendor business logic - Handles all vendor-related operations.
//!
//! Vendors are the manufacturers filaments reference by name. Functions here
//! cover creation with duplicate protection, lookups, note updates, and
//! deletion. All functions are async and return Result types for error handling.

use crate::{
    entities::{Vendor, vendor},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Retrieves all vendors from the database, ordered alphabetically by name.
pub async fn list_vendors(db: &DatabaseConnection) -> Result<Vec<vendor::Model>> {
    Vendor::find()
        .order_by_asc(vendor::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a specific vendor by its unique name, returning None if not found.
pub async fn get_vendor_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Option<vendor::Model>> {
    Vendor::find()
        .filter(vendor::Column::Name.eq(name))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds a vendor by its unique ID.
pub async fn get_vendor_by_id(
    db: &DatabaseConnection,
    vendor_id: i64,
) -> Result<Option<vendor::Model>> {
    Vendor::find_by_id(vendor_id).one(db).await.map_err(Into::into)
}

/// Creates a new vendor, performing input validation.
///
/// Validates that the name is not empty after trimming and that no vendor
/// with the same name already exists.
pub async fn create_vendor(
    db: &DatabaseConnection,
    name: String,
    notes: Option<String>,
) -> Result<vendor::Model> {
    // Validate inputs
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Vendor name cannot be empty".to_string(),
        });
    }

    let trimmed = name.trim().to_string();
    if get_vendor_by_name(db, &trimmed).await?.is_some() {
        return Err(Error::DuplicateName { name: trimmed });
    }

    let vendor = vendor::ActiveModel {
        name: Set(trimmed),
        notes: Set(notes),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let result = vendor.insert(db).await?;
    Ok(result)
}

/// Replaces the notes on an existing vendor.
pub async fn update_vendor_notes(
    db: &DatabaseConnection,
    vendor_id: i64,
    notes: Option<String>,
) -> Result<vendor::Model> {
    let vendor = get_vendor_by_id(db, vendor_id)
        .await?
        .ok_or_else(|| Error::VendorNotFound {
            name: vendor_id.to_string(),
        })?;

    let mut active_model: vendor::ActiveModel = vendor.into();
    active_model.notes = Set(notes);
    active_model.update(db).await.map_err(Into::into)
}

/// Deletes a vendor by ID, erroring if it does not exist.
pub async fn delete_vendor(db: &DatabaseConnection, vendor_id: i64) -> Result<()> {
    let vendor = get_vendor_by_id(db, vendor_id)
        .await?
        .ok_or_else(|| Error::VendorNotFound {
            name: vendor_id.to_string(),
        })?;

    vendor.delete(db).await?;
    Ok(())
}
