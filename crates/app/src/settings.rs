//! Settings for the `finances` binary.
//!
//! Values come from an optional TOML file (`settings.toml` unless
//! `--config` says otherwise), then from `FINANCES__*` environment
//! variables, e.g. `FINANCES__SERVER__PORT=8080`.
use std::collections::BTreeMap;

use clap::Parser;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "settings";

#[derive(Debug, Parser)]
#[command(name = "finances", version)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long, env = "FINANCES_CONFIG")]
    config: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    Memory,
    Sqlite(String),
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct App {
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Server {
    pub bind: String,
    pub port: u16,
    pub database: Database,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 3000,
            database: Database::Memory,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Ledger {
    /// Delete the linked entry together with either side of a mirror pair.
    pub cascade_delete: bool,
    /// Account receiving the counter-entry, keyed by source account.
    pub mirror_accounts: BTreeMap<String, String>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            cascade_delete: true,
            mirror_accounts: BTreeMap::from([(
                engine::DEFAULT_SOURCE_ACCOUNT.to_string(),
                engine::DEFAULT_MIRROR_ACCOUNT.to_string(),
            )]),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub server: Server,
    pub ledger: Ledger,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let args = Args::parse();
        let path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);

        Self::from_builder(
            Config::builder()
                .add_source(File::with_name(path).required(false))
                .add_source(
                    Environment::with_prefix("FINANCES")
                        .prefix_separator("__")
                        .separator("__")
                        .try_parsing(true),
                ),
        )
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use config::FileFormat;

    use super::*;

    fn from_toml(toml: &str) -> Settings {
        Settings::from_builder(
            Config::builder().add_source(File::from_str(toml, FileFormat::Toml)),
        )
        .unwrap()
    }

    #[test]
    fn empty_file_uses_defaults() {
        let settings = from_toml("");
        assert_eq!(settings.app.level, "info");
        assert_eq!(settings.server.bind, "127.0.0.1");
        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.server.database, Database::Memory);
        assert!(settings.ledger.cascade_delete);
        assert_eq!(
            settings.ledger.mirror_accounts.get("ahorros").map(String::as_str),
            Some("tarjeta")
        );
    }

    #[test]
    fn full_file_overrides_everything() {
        let settings = from_toml(
            r#"
            [app]
            level = "debug"

            [server]
            bind = "0.0.0.0"
            port = 8080
            database = { sqlite = "finances.db" }

            [ledger]
            cascade_delete = false

            [ledger.mirror_accounts]
            cuenta = "efectivo"
            "#,
        );
        assert_eq!(settings.app.level, "debug");
        assert_eq!(settings.server.bind, "0.0.0.0");
        assert_eq!(settings.server.port, 8080);
        assert_eq!(
            settings.server.database,
            Database::Sqlite("finances.db".to_string())
        );
        assert!(!settings.ledger.cascade_delete);
        assert_eq!(settings.ledger.mirror_accounts.len(), 1);
        assert_eq!(
            settings.ledger.mirror_accounts.get("cuenta").map(String::as_str),
            Some("efectivo")
        );
    }

    #[test]
    fn memory_database_is_a_plain_string() {
        let settings = from_toml(
            r#"
            [server]
            database = "memory"
            "#,
        );
        assert_eq!(settings.server.database, Database::Memory);
    }
}
