//! Spool lifecycle business logic - Handles physical spool tracking.
//!
//! A spool row is created the moment a purchased spool is opened; there is no
//! "unopened" spool record. From there the lifecycle is one-way: weight
//! updates while open, then a single finish transition that sets
//! `date_finished` and zeroes `remaining_kg`. Finished spools only accept
//! note changes, which keeps the remaining-weight sums honest.

use crate::{
    entities::{Spool, spool},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{QueryOrder, Set, prelude::*};

/// Fields required to open a new spool.
#[derive(Debug, Clone)]
pub struct NewSpool {
    /// Name of the filament on the spool; must exist in the catalog
    pub filament_name: String,
    /// Date the spool was opened
    pub date_opened: NaiveDate,
    /// Starting weight in kilograms; must be finite and non-negative
    pub remaining_kg: f64,
    /// Storage location
    pub shelf: Option<String>,
    /// Free-form notes
    pub notes: Option<String>,
}

/// Opens a new spool for a filament, performing input validation.
///
/// Validates that the filament exists in the catalog and that the starting
/// weight is finite and non-negative.
pub async fn open_spool(db: &DatabaseConnection, new_spool: NewSpool) -> Result<spool::Model> {
    if !new_spool.remaining_kg.is_finite() || new_spool.remaining_kg < 0.0 {
        return Err(Error::InvalidWeight {
            kg: new_spool.remaining_kg,
        });
    }

    if crate::core::filament::get_filament_by_name(db, &new_spool.filament_name)
        .await?
        .is_none()
    {
        return Err(Error::FilamentNotFound {
            name: new_spool.filament_name,
        });
    }

    let spool = spool::ActiveModel {
        filament_name: Set(new_spool.filament_name),
        date_opened: Set(new_spool.date_opened),
        date_finished: Set(None),
        shelf: Set(new_spool.shelf),
        remaining_kg: Set(new_spool.remaining_kg),
        notes: Set(new_spool.notes),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let result = spool.insert(db).await?;
    Ok(result)
}

/// Finds a spool by its unique ID.
pub async fn get_spool_by_id(
    db: &DatabaseConnection,
    spool_id: i64,
) -> Result<Option<spool::Model>> {
    Spool::find_by_id(spool_id).one(db).await.map_err(Into::into)
}

/// Retrieves all spool records for a filament, oldest first.
pub async fn list_spools_for_filament(
    db: &DatabaseConnection,
    filament_name: &str,
) -> Result<Vec<spool::Model>> {
    Spool::find()
        .filter(spool::Column::FilamentName.eq(filament_name))
        .order_by_asc(spool::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all spools still in use (opened but not finished), oldest first.
pub async fn list_open_spools(db: &DatabaseConnection) -> Result<Vec<spool::Model>> {
    Spool::find()
        .filter(spool::Column::DateFinished.is_null())
        .order_by_asc(spool::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Records a new remaining weight for an open spool.
///
/// Finished spools are immutable apart from notes; attempting to update one
/// returns [`Error::SpoolAlreadyFinished`].
pub async fn update_remaining(
    db: &DatabaseConnection,
    spool_id: i64,
    remaining_kg: f64,
) -> Result<spool::Model> {
    if !remaining_kg.is_finite() || remaining_kg < 0.0 {
        return Err(Error::InvalidWeight { kg: remaining_kg });
    }

    let spool = get_spool_by_id(db, spool_id)
        .await?
        .ok_or(Error::SpoolNotFound { id: spool_id })?;

    if spool.date_finished.is_some() {
        return Err(Error::SpoolAlreadyFinished { id: spool_id });
    }

    let mut active_model: spool::ActiveModel = spool.into();
    active_model.remaining_kg = Set(remaining_kg);
    active_model.update(db).await.map_err(Into::into)
}

/// Marks a spool as fully consumed.
///
/// Sets `date_finished` and zeroes `remaining_kg` so the residual weight of a
/// finished spool never leaks into the remaining-stock sums. The transition
/// is one-way: finishing an already-finished spool is an error.
pub async fn finish_spool(
    db: &DatabaseConnection,
    spool_id: i64,
    date_finished: NaiveDate,
) -> Result<spool::Model> {
    let spool = get_spool_by_id(db, spool_id)
        .await?
        .ok_or(Error::SpoolNotFound { id: spool_id })?;

    if spool.date_finished.is_some() {
        return Err(Error::SpoolAlreadyFinished { id: spool_id });
    }

    let mut active_model: spool::ActiveModel = spool.into();
    active_model.date_finished = Set(Some(date_finished));
    active_model.remaining_kg = Set(0.0);
    active_model.update(db).await.map_err(Into::into)
}

/// Replaces the notes on a spool. Allowed in either lifecycle state.
pub async fn update_spool_notes(
    db: &DatabaseConnection,
    spool_id: i64,
    notes: Option<String>,
) -> Result<spool::Model> {
    let spool = get_spool_by_id(db, spool_id)
        .await?
        .ok_or(Error::SpoolNotFound { id: spool_id })?;

    let mut active_model: spool::ActiveModel = spool.into();
    active_model.notes = Set(notes);
    active_model.update(db).await.map_err(Into::into)
}

/// Deletes a spool by ID, erroring if it does not exist.
pub async fn delete_spool(db: &DatabaseConnection, spool_id: i64) -> Result<()> {
    let spool = get_spool_by_id(db, spool_id)
        .await?
        .ok_or(Error::SpoolNotFound { id: spool_id })?;

    spool.delete(db).await?;
    Ok(())
}
