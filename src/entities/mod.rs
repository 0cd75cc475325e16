//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod filament;
pub mod purchase;
pub mod purchase_item;
pub mod spool;
pub mod vendor;

// Re-export specific types to avoid conflicts
pub use filament::{Column as FilamentColumn, Entity as Filament, Model as FilamentModel};
pub use purchase::{Column as PurchaseColumn, Entity as Purchase, Model as PurchaseModel};
pub use purchase_item::{
    Column as PurchaseItemColumn, Entity as PurchaseItem, Model as PurchaseItemModel,
};
pub use spool::{Column as SpoolColumn, Entity as Spool, Model as SpoolModel};
pub use vendor::{Column as VendorColumn, Entity as Vendor, Model as VendorModel};
