//! Configuration and CLI argument handling

use std::time::Duration;

use clap::Parser;

use crate::engine::EngineConfig;

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "ticktack")]
#[command(about = "A countdown timer served over HTTP with a persistent notification")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Milliseconds between countdown ticks
    #[arg(long, default_value = "970")]
    pub tick_ms: u64,

    /// Seconds a completed countdown rings before stopping itself
    #[arg(long, default_value = "120")]
    pub auto_stop_secs: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Engine timing derived from the CLI flags
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            tick_period: Duration::from_millis(self.tick_ms.max(1)),
            auto_stop_after: Duration::from_secs(self.auto_stop_secs),
            ..EngineConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_engine_defaults() {
        let config = Config::try_parse_from(["ticktack"]).unwrap();
        assert_eq!(config.address(), "127.0.0.1:20554");
        assert_eq!(config.log_level(), "info");
        assert_eq!(config.engine_config(), EngineConfig::default());
    }

    #[test]
    fn flags_override_timing() {
        let config =
            Config::try_parse_from(["ticktack", "--tick-ms", "1000", "--auto-stop-secs", "30", "-v"]).unwrap();
        let engine = config.engine_config();
        assert_eq!(engine.tick_period, Duration::from_secs(1));
        assert_eq!(engine.auto_stop_after, Duration::from_secs(30));
        assert_eq!(config.log_level(), "debug");
    }
}
