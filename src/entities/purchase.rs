//! Purchase entity - Represents one order placed with a marketplace or seller.
//!
//! A purchase is the order-level record (date, marketplace, totals); the
//! filaments actually bought live in its purchase items. Purchases may span
//! several filaments in one order.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Purchase database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "purchases")]
pub struct Model {
    /// Unique identifier for the purchase
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Date the order was placed
    pub date_ordered: Date,
    /// Marketplace the order was placed on (e.g., "Amazon", "eBay")
    pub marketplace: Option<String>,
    /// URL of the order page
    pub order_url: Option<String>,
    /// Order subtotal before tax
    pub subtotal: f64,
    /// Tax charged on the order
    pub tax: f64,
    /// Free-form notes
    pub notes: Option<String>,
    /// When the purchase row was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Purchase and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One purchase has many line items
    #[sea_orm(has_many = "super::purchase_item::Entity")]
    Items,
}

impl Related<super::purchase_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Items.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
