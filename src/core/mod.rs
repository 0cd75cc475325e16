//! Core business logic - framework-agnostic catalog, purchase, spool, and
//! inventory operations. Nothing in this module knows about the CLI surface;
//! every function takes a database connection and returns structured data.

/// Filament catalog operations
pub mod filament;
/// Inventory summary computation
pub mod inventory;
/// Purchase order and line item operations
pub mod purchase;
/// Plain-text report rendering
pub mod report;
/// Spool lifecycle operations
pub mod spool;
/// Vendor catalog operations
pub mod vendor;
