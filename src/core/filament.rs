//! Filament catalog business logic - Handles all filament-related operations.
//!
//! Filaments are the catalog entries purchase items and spools reference by
//! name. Creation validates that the manufacturer vendor exists; after
//! creation only display fields may change, so updates go through a patch
//! struct that cannot touch the identity fields.

use crate::{
    entities::{Filament, filament},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{QueryOrder, Set, prelude::*};

/// Fields required to create a new filament catalog entry.
#[derive(Debug, Clone)]
pub struct NewFilament {
    /// Unique descriptive name
    pub name: String,
    /// Vendor name; must reference an existing vendor
    pub manufacturer: String,
    /// Material type (e.g., "PLA", "PETG")
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
    /// Free-form notes
    pub notes: Option<String>,
    /// Date the filament was added to the catalog
    pub date_added: NaiveDate,
}

/// Display-field changes applicable to an existing filament.
///
/// Identity fields (`name`, `manufacturer`, `material`, `date_added`) are
/// deliberately absent: purchase items and spools link by filament name, and
/// the inventory arithmetic assumes those fields never move under it.
#[derive(Debug, Clone, Default)]
pub struct FilamentPatch {
    /// New product line, if changing
    pub line: Option<Option<String>>,
    /// New product name, if changing
    pub product: Option<Option<String>>,
    /// New color, if changing
    pub color: Option<Option<String>>,
    /// New surface feature, if changing
    pub feature: Option<Option<String>>,
    /// New URL, if changing
    pub url: Option<Option<String>>,
    /// New notes, if changing
    pub notes: Option<Option<String>>,
}

/// Retrieves all filaments in catalog order (creation order).
///
/// This is the enumeration order the inventory summary inherits, so it is
/// kept stable by sorting on the primary key rather than the display name.
pub async fn list_filaments(db: &DatabaseConnection) -> Result<Vec<filament::Model>> {
    Filament::find()
        .order_by_asc(filament::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a specific filament by its unique name, returning None if not found.
pub async fn get_filament_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Option<filament::Model>> {
    Filament::find()
        .filter(filament::Column::Name.eq(name))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds a filament by its unique ID.
pub async fn get_filament_by_id(
    db: &DatabaseConnection,
    filament_id: i64,
) -> Result<Option<filament::Model>> {
    Filament::find_by_id(filament_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new filament catalog entry, performing input validation.
///
/// Validates that the name and material are not empty, that no filament with
/// the same name exists, and that the manufacturer references an existing
/// vendor (the vendor must be created first).
pub async fn create_filament(
    db: &DatabaseConnection,
    new_filament: NewFilament,
) -> Result<filament::Model> {
    // Validate inputs
    if new_filament.name.trim().is_empty() {
        return Err(Error::Config {
            message: "Filament name cannot be empty".to_string(),
        });
    }
    if new_filament.material.trim().is_empty() {
        return Err(Error::Config {
            message: "Filament material cannot be empty".to_string(),
        });
    }

    let name = new_filament.name.trim().to_string();
    if get_filament_by_name(db, &name).await?.is_some() {
        return Err(Error::DuplicateName { name });
    }

    // The manufacturer must exist before filaments can reference it
    if crate::core::vendor::get_vendor_by_name(db, &new_filament.manufacturer)
        .await?
        .is_none()
    {
        return Err(Error::VendorNotFound {
            name: new_filament.manufacturer,
        });
    }

    let filament = filament::ActiveModel {
        name: Set(name),
        manufacturer: Set(new_filament.manufacturer),
        line: Set(new_filament.line),
        material: Set(new_filament.material),
        product: Set(new_filament.product),
        color: Set(new_filament.color),
        feature: Set(new_filament.feature),
        url: Set(new_filament.url),
        notes: Set(new_filament.notes),
        date_added: Set(new_filament.date_added),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let result = filament.insert(db).await?;
    Ok(result)
}

/// Applies display-field changes to an existing filament.
///
/// Each patch field is `Some(new_value)` to change that field (including
/// `Some(None)` to clear it) or `None` to leave it untouched.
pub async fn update_filament_details(
    db: &DatabaseConnection,
    filament_id: i64,
    patch: FilamentPatch,
) -> Result<filament::Model> {
    let filament = get_filament_by_id(db, filament_id)
        .await?
        .ok_or_else(|| Error::FilamentNotFound {
            name: filament_id.to_string(),
        })?;

    let mut active_model: filament::ActiveModel = filament.into();
    if let Some(line) = patch.line {
        active_model.line = Set(line);
    }
    if let Some(product) = patch.product {
        active_model.product = Set(product);
    }
    if let Some(color) = patch.color {
        active_model.color = Set(color);
    }
    if let Some(feature) = patch.feature {
        active_model.feature = Set(feature);
    }
    if let Some(url) = patch.url {
        active_model.url = Set(url);
    }
    if let Some(notes) = patch.notes {
        active_model.notes = Set(notes);
    }

    active_model.update(db).await.map_err(Into::into)
}

/// Deletes a filament by ID, erroring if it does not exist.
pub async fn delete_filament(db: &DatabaseConnection, filament_id: i64) -> Result<()> {
    let filament = get_filament_by_id(db, filament_id)
        .await?
        .ok_or_else(|| Error::FilamentNotFound {
            name: filament_id.to_string(),
        })?;

    filament.delete(db).await?;
    Ok(())
}
