use dotenvy::dotenv;
use spooltrack::config::{catalog, database};
use spooltrack::core::{inventory, report};
use spooltrack::errors::Result;
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok(); // Make it non-fatal, env vars can be set externally
    info!("Attempted to load .env file.");

    // 3. Initialize database
    let db = database::create_connection()
        .await
        .inspect(|_| info!("Database connection established."))
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db)
        .await
        .inspect_err(|e| error!("Failed to create tables: {}", e))?;

    // 4. Seed the catalog from config.toml if one is present
    let config_path =
        std::env::var("CATALOG_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
    if Path::new(&config_path).exists() {
        let catalog_config = catalog::load_config(&config_path)
            .inspect_err(|e| error!("Failed to load catalog config: {}", e))?;
        catalog::seed_catalog(&db, &catalog_config)
            .await
            .inspect_err(|e| error!("Failed to seed catalog: {}", e))?;
    } else {
        info!("No catalog config at {}, skipping seed.", config_path);
    }

    // 5. Compute the inventory summary and print the report
    let summaries = inventory::compute_inventory_summary(&db)
        .await
        .inspect(|s| info!("Computed inventory summary for {} filaments.", s.len()))
        .inspect_err(|e| error!("Failed to compute inventory summary: {}", e))?;

    print!("{}", report::render_inventory_report(&summaries));

    Ok(())
}
