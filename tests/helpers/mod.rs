use mealsu::cli::Context;
use mealsu::config::{ApiConfig, Config, DatabaseConfig, ObservabilityConfig};
use temp_dir::TempDir;

pub async fn setup_test_context(dir: &TempDir, base_url: &str) -> anyhow::Result<Context> {
    let url = format!("sqlite:{}", dir.child("db.sqlite3").to_str().unwrap());
    let config = Config {
        api: ApiConfig {
            base_url: base_url.to_string(),
        },
        database: DatabaseConfig {
            url,
            max_connections: 1,
        },
        observability: ObservabilityConfig::default(),
    };

    Context::open(config).await
}
