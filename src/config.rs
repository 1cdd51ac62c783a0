//! Runtime configuration from environment variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `BLOCKFALL_SAVE_DIR` | `.blockfall` | Directory for the saved game and high scores |
//! | `BLOCKFALL_SEED` | random | Fixed seed for the piece sequence |
//! | `BLOCKFALL_LOG_PATH` | unset | Log file; no logging when unset |
//! | `BLOCKFALL_SOUND` | on | `0`/`false`/`off` silences the terminal bell |
//! | `BLOCKFALL_DISABLE_SAVE` | off | `1`/`true` keeps everything in memory |

use std::env;
use std::path::PathBuf;

pub const DEFAULT_SAVE_DIR: &str = ".blockfall";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub save_dir: PathBuf,
    pub seed: Option<u64>,
    pub log_path: Option<PathBuf>,
    pub sound: bool,
    pub save_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            save_dir: PathBuf::from(DEFAULT_SAVE_DIR),
            seed: None,
            log_path: None,
            sound: true,
            save_enabled: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup (the process environment in [`Config::from_env`]).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        let defaults = Self::default();

        Self {
            save_dir: var("BLOCKFALL_SAVE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.save_dir),
            seed: var("BLOCKFALL_SEED").and_then(|s| s.parse().ok()),
            log_path: var("BLOCKFALL_LOG_PATH").map(PathBuf::from),
            sound: var("BLOCKFALL_SOUND")
                .map(|v| !is_falsy(&v))
                .unwrap_or(defaults.sound),
            save_enabled: !var("BLOCKFALL_DISABLE_SAVE")
                .map(|v| is_truthy(&v))
                .unwrap_or(false),
        }
    }
}

fn is_truthy(v: &str) -> bool {
    v == "1" || v.eq_ignore_ascii_case("true")
}

fn is_falsy(v: &str) -> bool {
    v == "0" || v.eq_ignore_ascii_case("false") || v.eq_ignore_ascii_case("off")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config(&[]), Config::default());
    }

    #[test]
    fn reads_every_variable() {
        let cfg = config(&[
            ("BLOCKFALL_SAVE_DIR", "/tmp/saves"),
            ("BLOCKFALL_SEED", "42"),
            ("BLOCKFALL_LOG_PATH", " /tmp/blockfall.log "),
            ("BLOCKFALL_SOUND", "off"),
            ("BLOCKFALL_DISABLE_SAVE", "TRUE"),
        ]);
        assert_eq!(cfg.save_dir, PathBuf::from("/tmp/saves"));
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.log_path, Some(PathBuf::from("/tmp/blockfall.log")));
        assert!(!cfg.sound);
        assert!(!cfg.save_enabled);
    }

    #[test]
    fn bad_or_blank_values_fall_back() {
        let cfg = config(&[
            ("BLOCKFALL_SAVE_DIR", "  "),
            ("BLOCKFALL_SEED", "not-a-number"),
            ("BLOCKFALL_LOG_PATH", ""),
            ("BLOCKFALL_SOUND", "yes"),
            ("BLOCKFALL_DISABLE_SAVE", "nope"),
        ]);
        assert_eq!(cfg, Config::default());
    }
}
