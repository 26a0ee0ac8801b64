//! moviedb binary - composition root.
//!
//! 1. Parse CLI flags and load configuration from TOML + environment
//! 2. Initialize tracing (stderr, so the menu on stdout stays readable)
//! 3. Open the SQLite catalog store
//! 4. Build the OMDb client and the website exporter
//! 5. Run the interactive menu until the user exits

use std::sync::Arc;

use clap::Parser;

use moviedb_app::{App, CliArgs, HtmlExporter};
use moviedb_core::config::MovieDbConfig;
use moviedb_omdb::OmdbClient;
use moviedb_storage::{CatalogStore, Database};

fn init_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config is read before tracing exists, so its outcome is logged after.
    let config_file = args.resolve_config_path();
    let loaded = if config_file.exists() || args.config_is_explicit() {
        Some(MovieDbConfig::load(&config_file))
    } else {
        None
    };
    let mut config = match &loaded {
        Some(Ok(config)) => config.clone(),
        _ => MovieDbConfig::default(),
    };

    init_tracing(&args.resolve_log_level(&config));
    tracing::info!("Starting moviedb v{}", env!("CARGO_PKG_VERSION"));

    match loaded {
        Some(Ok(_)) => tracing::info!(path = %config_file.display(), "Configuration loaded"),
        Some(Err(e)) if args.config_is_explicit() => {
            tracing::error!(path = %config_file.display(), error = %e, "Failed to load configuration");
            return Err(e.into());
        }
        Some(Err(e)) => tracing::warn!(
            path = %config_file.display(),
            error = %e,
            "Failed to load configuration, using defaults"
        ),
        None => tracing::debug!(path = %config_file.display(), "No config file, using defaults"),
    }
    config.apply_env_overrides();

    // Storage.
    let db_path = args.resolve_db_path(&config);
    let db = match Database::open(&db_path) {
        Ok(db) => Arc::new(db),
        Err(e) => {
            tracing::error!(path = %db_path.display(), error = %e, "Failed to open catalog database");
            return Err(e.into());
        }
    };
    let store = CatalogStore::new(Arc::clone(&db));
    tracing::info!(path = %db_path.display(), movies = store.count()?, "Catalog store ready");

    // Lookup and export.
    let lookup = OmdbClient::new(&config.lookup)?;
    if !lookup.has_api_key() {
        tracing::warn!("No OMDb API key configured; adding movies will fail until OMDB_API_KEY is set");
    }
    let exporter = HtmlExporter::from_config(&config.export);

    let stdin = std::io::stdin();
    let mut app = App::new(store.clone(), lookup, exporter, stdin.lock(), std::io::stdout());
    let result = app.run().await;

    store.close()?;
    result?;
    Ok(())
}
