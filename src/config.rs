// src/config.rs
//
// Command-line configuration. Without flags the run matches the fixed
// SWAPI address and the interactive pause.

use clap::Parser;

use crate::integrations::swapi::client::{DEFAULT_BASE_ADDRESS, DEFAULT_RESOURCE};

#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Print Star Wars planets as a table and show min/max statistics",
    long_about = None
)]
pub struct Cli {
    /// API root the resource path is resolved against.
    #[arg(long, default_value = DEFAULT_BASE_ADDRESS)]
    pub base_url: String,

    /// Resource path, relative to the API root.
    #[arg(long, default_value = DEFAULT_RESOURCE)]
    pub resource: String,

    /// Exit without waiting for a final keypress.
    #[arg(long)]
    pub no_pause: bool,

    /// Log debug output to standard error.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn config(&self) -> AppConfig {
        AppConfig {
            base_address: self.base_url.clone(),
            resource: self.resource.clone(),
            pause_on_exit: !self.no_pause,
        }
    }

    /// Default log filter when RUST_LOG is not set
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub base_address: String,
    pub resource: String,
    pub pause_on_exit: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_address: DEFAULT_BASE_ADDRESS.to_string(),
            resource: DEFAULT_RESOURCE.to_string(),
            pause_on_exit: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_gives_default_config() {
        let cli = Cli::try_parse_from(["swapi-planets"]).unwrap();
        assert_eq!(cli.config(), AppConfig::default());
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "swapi-planets",
            "--base-url",
            "http://localhost:8000/api/",
            "--resource",
            "planets/?page=2",
            "--no-pause",
            "-v",
        ])
        .unwrap();

        let config = cli.config();
        assert_eq!(config.base_address, "http://localhost:8000/api/");
        assert_eq!(config.resource, "planets/?page=2");
        assert!(!config.pause_on_exit);
        assert_eq!(cli.log_level(), "debug");
    }
}
