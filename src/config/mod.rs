/// Database configuration and connection management
pub mod database;

/// Catalog seeding configuration from config.toml
pub mod catalog;
