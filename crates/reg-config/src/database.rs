//! Database location configuration.

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "registrar.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path to the libsql database file. `":memory:"` keeps everything
    /// in-process, which the test suites rely on.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_is_local_file() {
        let config = DatabaseConfig::default();
        assert_eq!(config.path, "registrar.db");
    }
}
