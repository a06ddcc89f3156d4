//! Configuration loading for the CLI entry point.

use reg_config::RegConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration, applying the `--db` override on top.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<RegConfig> {
    let mut config = RegConfig::load_with_dotenv()?;
    if let Some(db) = &flags.db {
        config.database.path = db.clone();
    }
    tracing::debug!(path = %config.database.path, "configuration loaded");
    Ok(config)
}
