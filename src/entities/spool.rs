//! Spool entity - Represents one physical spool that has been opened for use.
//!
//! A spool row existing at all means the spool has been opened; purchased but
//! unopened spools have no row. The lifecycle is one-way: Open (no
//! `date_finished`) to Finished (`date_finished` set, `remaining_kg` zeroed).
//! Finished spools accept no further changes other than notes.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Spool database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "spools")]
pub struct Model {
    /// Unique identifier for the spool
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Name of the filament on this spool
    pub filament_name: String,
    /// Date the spool was opened
    pub date_opened: Date,
    /// Date the spool was fully consumed, None while still in use
    pub date_finished: Option<Date>,
    /// Storage location (e.g., "A1LB")
    pub shelf: Option<String>,
    /// Current weight of filament left on the spool in kilograms
    pub remaining_kg: f64,
    /// Free-form notes
    pub notes: Option<String>,
    /// When the spool row was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Spool and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each spool holds one filament, linked by filament name
    #[sea_orm(
        belongs_to = "super::filament::Entity",
        from = "Column::FilamentName",
        to = "super::filament::Column::Name"
    )]
    Filament,
}

impl Related<super::filament::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Filament.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
