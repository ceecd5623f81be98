//! Runtime configuration from environment variables.
//!
//! - `BOWLING_ROUNDS`: frames per game (default: 10, allowed 1 to 1000)
//! - `BOWLING_SEED`: seed for a generated random game
//! - `BOWLING_SCRIPT`: path to a JSON move script (`[[9,1],[10,null],...]`)
//! - `BOWLING_VERBOSE`: set to "1" or "true" to print the scoreboard after every roll
//! - `BOWLING_OUTPUT`: `text` (default) or `json`
//! - `BOWLING_LOG_PATH`: write logs to this file
//!
//! Missing or unparsable values fall back to their defaults. Log filtering
//! follows `RUST_LOG`.

use std::path::PathBuf;
use std::str::FromStr;

use crate::types::{DEFAULT_ROUNDS, MAX_ROUNDS};

/// How `bowling-autoplay` reports the finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub rounds: usize,
    pub seed: Option<u32>,
    pub script_path: Option<PathBuf>,
    pub verbose: bool,
    pub output: OutputFormat,
    pub log_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            seed: None,
            script_path: None,
            verbose: false,
            output: OutputFormat::Text,
            log_path: None,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup (the process environment in
    /// production, a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let rounds = non_empty("BOWLING_ROUNDS")
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|r| (1..=MAX_ROUNDS).contains(r))
            .unwrap_or(DEFAULT_ROUNDS);

        let seed = non_empty("BOWLING_SEED").and_then(|s| s.parse().ok());

        let verbose = non_empty("BOWLING_VERBOSE")
            .map(|s| s == "1" || s.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let output = non_empty("BOWLING_OUTPUT")
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();

        Self {
            rounds,
            seed,
            script_path: non_empty("BOWLING_SCRIPT").map(PathBuf::from),
            verbose,
            output,
            log_path: non_empty("BOWLING_LOG_PATH").map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> GameConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        GameConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(config(&[]), GameConfig::default());
    }

    #[test]
    fn test_from_env_does_not_panic() {
        let _config = GameConfig::from_env();
    }

    #[test]
    fn test_reads_every_variable() {
        let cfg = config(&[
            ("BOWLING_ROUNDS", "5"),
            ("BOWLING_SEED", "42"),
            ("BOWLING_SCRIPT", "games/demo.json"),
            ("BOWLING_VERBOSE", "TRUE"),
            ("BOWLING_OUTPUT", "json"),
            ("BOWLING_LOG_PATH", " /tmp/bowling.log "),
        ]);
        assert_eq!(cfg.rounds, 5);
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.script_path, Some(PathBuf::from("games/demo.json")));
        assert!(cfg.verbose);
        assert_eq!(cfg.output, OutputFormat::Json);
        assert_eq!(cfg.log_path, Some(PathBuf::from("/tmp/bowling.log")));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let cfg = config(&[
            ("BOWLING_ROUNDS", "0"),
            ("BOWLING_SEED", "-3"),
            ("BOWLING_VERBOSE", "yes please"),
            ("BOWLING_OUTPUT", "xml"),
            ("BOWLING_SCRIPT", "   "),
        ]);
        assert_eq!(cfg, GameConfig::default());
    }

    #[test]
    fn test_rounds_above_limit_fall_back() {
        assert_eq!(config(&[("BOWLING_ROUNDS", "40000")]).rounds, DEFAULT_ROUNDS);
        assert_eq!(config(&[("BOWLING_ROUNDS", "1000")]).rounds, MAX_ROUNDS);
    }

    #[test]
    fn test_output_format_parses() {
        assert_eq!(" JSON ".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
