//! Purchase item entity - Represents one line of a purchase order.
//!
//! Each item records how many spools of one filament were bought and the
//! nominal weight per spool at purchase time. `spools` and `kg_per_spool`
//! feed the inventory summary; items are immutable once created.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Purchase item database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "purchase_items")]
pub struct Model {
    /// Unique identifier for the line item
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the purchase this line item belongs to
    pub purchase_id: i64,
    /// Name of the filament bought on this line
    pub filament_name: String,
    /// Seller the item shipped from, if different from the marketplace
    pub seller: Option<String>,
    /// Date the item was ordered
    pub date_ordered: Date,
    /// Date the item arrived, if it has
    pub date_received: Option<Date>,
    /// Number of spools bought on this line
    pub spools: i32,
    /// Nominal weight per spool in kilograms at purchase time
    pub kg_per_spool: f64,
    /// Price per spool
    pub unit_price: f64,
    /// Storage location (e.g., "A1LB")
    pub shelf: Option<String>,
    /// Free-form notes
    pub notes: Option<String>,
    /// When the line item row was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between PurchaseItem and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each line item belongs to one purchase
    #[sea_orm(
        belongs_to = "super::purchase::Entity",
        from = "Column::PurchaseId",
        to = "super::purchase::Column::Id"
    )]
    Purchase,
    /// Each line item references one filament, linked by filament name
    #[sea_orm(
        belongs_to = "super::filament::Entity",
        from = "Column::FilamentName",
        to = "super::filament::Column::Name"
    )]
    Filament,
}

impl Related<super::purchase::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Purchase.def()
    }
}

impl Related<super::filament::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Filament.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
