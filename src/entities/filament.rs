//! Filament entity - Represents the filament product catalog.
//!
//! Each filament is a specific product/material/color combination identified
//! by a unique descriptive name. Purchase items and spools reference filaments
//! by that name. Only display fields change after creation; purchase and spool
//! arithmetic never depends on them.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Filament database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "filaments")]
pub struct Model {
    /// Unique identifier for the filament
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Unique descriptive name (e.g., "Polymaker PolyTerra Matte Black")
    #[sea_orm(unique)]
    pub name: String,
    /// Name of the vendor that manufactures this filament
    pub manufacturer: String,
    /// Product line (e.g., "PolyTerra")
    pub line: Option<String>,
    /// Material type (e.g., "PLA", "PETG", "ABS")
    pub material: String,
    /// Product name within the line (e.g., "Matte Black")
    pub product: Option<String>,
    /// Primary color for display and filtering
    pub color: Option<String>,
    /// Surface feature (e.g., "Matte", "Glossy", "Silk")
    pub feature: Option<String>,
    /// Product page URL
    pub url: Option<String>,
    /// Free-form notes
    pub notes: Option<String>,
    /// Date the filament was added to the catalog
    pub date_added: Date,
    /// When the catalog row was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Filament and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each filament is manufactured by one vendor, linked by vendor name
    #[sea_orm(
        belongs_to = "super::vendor::Entity",
        from = "Column::Manufacturer",
        to = "super::vendor::Column::Name"
    )]
    Vendor,
    /// One filament appears in many purchase line items
    #[sea_orm(has_many = "super::purchase_item::Entity")]
    PurchaseItems,
    /// One filament has many opened spools
    #[sea_orm(has_many = "super::spool::Entity")]
    Spools,
}

impl Related<super::vendor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vendor.def()
    }
}

impl Related<super::purchase_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PurchaseItems.def()
    }
}

impl Related<super::spool::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Spools.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
