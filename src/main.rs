use dotenvy::dotenv;
use managemate::{app, config, core::report, errors::Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    // 3. Load settings
    let settings = config::load_default_settings()
        .inspect_err(|e| error!("Failed to load settings: {}", e))?;
    info!(shop = %settings.shop_name, "Settings loaded");

    // 4. Seed the store
    let store = app::build_store(&settings)
        .inspect_err(|e| error!("Failed to seed store: {}", e))?;

    // 5. Render the dashboard summary
    print!(
        "{}",
        report::format_dashboard(
            store.snapshot(),
            &settings.shop_name,
            settings.recent_sales_limit
        )
    );

    Ok(())
}
