//! Application context shared by command handlers.

use reg_config::RegConfig;
use reg_db::RegDb;

/// Open resources the handlers need.
pub struct AppContext {
    pub db: RegDb,
}

impl AppContext {
    /// Open the database named by the configuration.
    pub async fn init(config: &RegConfig) -> anyhow::Result<Self> {
        let db = RegDb::open_local(&config.database.path).await?;
        Ok(Self { db })
    }
}
