use anyhow::Result;
use clap::Parser;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bokmerke")]
#[command(about = "Runs the bokmerke service", long_about = None)]
pub struct Cli {
    #[arg(short = 'c', long = "config")]
    pub config_path: Option<String>,
}

pub fn default_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".bokmerke")
}

pub fn default_config_path() -> PathBuf {
    default_config_dir().join("config.yaml")
}

/// Which store adapter backs the service. Selected once at startup; both
/// variants sit behind the same `BookmarkStore` contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Memory,
    #[default]
    Sqlite,
}

#[derive(Debug, Deserialize, Clone)]
pub struct App {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_database")]
    pub database: String,
    /// The bearer token every /bookmarks request must present. Usually
    /// injected as `${BOKMERKE_API_TOKEN}` in the config file.
    pub api_token: String,
    #[serde(default)]
    pub store: StoreBackend,
}

fn default_port() -> u16 {
    8000
}

fn default_database() -> String {
    "bokmerke.db".to_string()
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub app: App,
}

impl Config {
    pub fn new(path: &str) -> Result<Self> {
        let yaml_str = fs::read_to_string(path)?;
        Self::parse(&yaml_str)
    }

    fn parse(yaml_str: &str) -> Result<Self> {
        let substituted = substitute_env_vars(yaml_str);
        let config: Config = serde_yaml::from_str(&substituted)?;
        Ok(config)
    }
}

/// Replaces `${VAR}` and `${VAR:-default}` occurrences with values from the
/// process environment. Unset variables without a default substitute to the
/// empty string with a warning.
fn substitute_env_vars(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                let expr = &after[..end];
                let value = match expr.split_once(":-") {
                    Some((name, default)) => {
                        env::var(name).unwrap_or_else(|_| default.to_string())
                    }
                    None => env::var(expr).unwrap_or_else(|_| {
                        tracing::warn!("environment variable '{}' not set", expr);
                        String::new()
                    }),
                };
                out.push_str(&value);
                rest = &after[end + 1..];
            }
            None => {
                // Unterminated expression, keep it verbatim.
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_fallback_when_unset() {
        let raw = "token: ${BOKMERKE_TEST_NEVER_SET:-fallback-token}";
        assert_eq!(substitute_env_vars(raw), "token: fallback-token");
    }

    #[test]
    fn leaves_unterminated_expression_alone() {
        assert_eq!(substitute_env_vars("path: ${HOME"), "path: ${HOME");
    }

    #[test]
    fn parses_minimal_config() {
        let cfg = Config::parse(
            "app:\n  api_token: ${BOKMERKE_TEST_NEVER_SET:-secret}\n  store: memory\n",
        )
        .unwrap();
        assert_eq!(cfg.app.api_token, "secret");
        assert_eq!(cfg.app.store, StoreBackend::Memory);
        assert_eq!(cfg.app.port, 8000);
        assert_eq!(cfg.app.database, "bokmerke.db");
    }

    #[test]
    fn store_defaults_to_sqlite() {
        let cfg = Config::parse("app:\n  api_token: secret\n").unwrap();
        assert_eq!(cfg.app.store, StoreBackend::Sqlite);
    }
}
