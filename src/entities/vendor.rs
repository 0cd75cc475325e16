//! Vendor entity - Represents filament vendors/manufacturers.
//!
//! Vendors are referenced by filaments through the `manufacturer` field,
//! keyed by the vendor's unique name rather than its numeric id.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Vendor database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vendors")]
pub struct Model {
    /// Unique identifier for the vendor
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Unique vendor name (e.g., "Polymaker", "Bambu Lab")
    #[sea_orm(unique)]
    pub name: String,
    /// Free-form notes about the vendor
    pub notes: Option<String>,
    /// When the vendor was added to the catalog
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Vendor and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One vendor manufactures many filaments
    #[sea_orm(has_many = "super::filament::Entity")]
    Filaments,
}

impl Related<super::filament::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Filaments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
