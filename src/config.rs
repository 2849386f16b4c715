//! Process configuration from environment variables.
//!
//! - `TUI_2048_GRID_SIZE`: tiles per side (default 4)
//! - `TUI_2048_WIN_VALUE`: tile value that wins the game (default 2048)
//! - `TUI_2048_SEED`: fixed RNG seed for reproducible games (default: entropy)
//! - `TUI_2048_LOG`: log file path for the terminal binary (default: no logging)
//!
//! Unparseable or out-of-range values are reported with `warn!` and replaced by
//! the default.

use std::env;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::warn;

use crate::core::SessionConfig;
use crate::types::{DEFAULT_GRID_SIZE, WIN_VALUE};

pub const GRID_SIZE_VAR: &str = "TUI_2048_GRID_SIZE";
pub const WIN_VALUE_VAR: &str = "TUI_2048_WIN_VALUE";
pub const SEED_VAR: &str = "TUI_2048_SEED";
pub const LOG_VAR: &str = "TUI_2048_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub grid_size: u8,
    pub win_value: u32,
    pub seed: Option<u64>,
    pub log_path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            win_value: WIN_VALUE,
            seed: None,
            log_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (tests pass a map instead of the
    /// process environment).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let grid_size = var(GRID_SIZE_VAR)
            .and_then(|s| parse_or_warn::<u8>(GRID_SIZE_VAR, &s))
            .unwrap_or(defaults.grid_size);
        let win_value = var(WIN_VALUE_VAR)
            .and_then(|s| parse_or_warn::<u32>(WIN_VALUE_VAR, &s))
            .unwrap_or(defaults.win_value);
        let seed = var(SEED_VAR).and_then(|s| parse_or_warn::<u64>(SEED_VAR, &s));
        let log_path = var(LOG_VAR);

        let mut config = Self {
            grid_size,
            win_value,
            seed,
            log_path,
        };

        let session = config.session_config();
        if let Err(e) = session.validate() {
            warn!(
                grid_size = config.grid_size,
                win_value = config.win_value,
                error = %e,
                "invalid game configuration, using defaults"
            );
            config.grid_size = defaults.grid_size;
            config.win_value = defaults.win_value;
        }
        config
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            grid_size: self.grid_size,
            win_value: self.win_value,
        }
    }

    /// Seeded generator when `seed` is set, otherwise one seeded from OS entropy.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn parse_or_warn<T: std::str::FromStr>(key: &str, value: &str) -> Option<T> {
    let parsed = value.parse().ok();
    if parsed.is_none() {
        warn!(variable = key, value, "ignoring unparseable value");
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(config_from(&[]), AppConfig::default());
    }

    #[test]
    fn test_reads_all_variables() {
        let config = config_from(&[
            (GRID_SIZE_VAR, "5"),
            (WIN_VALUE_VAR, "512"),
            (SEED_VAR, "42"),
            (LOG_VAR, "/tmp/tui-2048.log"),
        ]);
        assert_eq!(config.grid_size, 5);
        assert_eq!(config.win_value, 512);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_path.as_deref(), Some("/tmp/tui-2048.log"));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from(&[(GRID_SIZE_VAR, "huge"), (SEED_VAR, "-1")]);
        assert_eq!(config.grid_size, DEFAULT_GRID_SIZE);
        assert_eq!(config.seed, None);

        let config = config_from(&[(GRID_SIZE_VAR, "0")]);
        assert_eq!(config.grid_size, DEFAULT_GRID_SIZE);

        let config = config_from(&[(WIN_VALUE_VAR, "1000")]);
        assert_eq!(config.win_value, WIN_VALUE);
    }

    #[test]
    fn test_blank_log_path_is_none() {
        let config = config_from(&[(LOG_VAR, "   ")]);
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        use crate::core::RandomSource;

        let config = config_from(&[(SEED_VAR, "9")]);
        let mut a = config.rng();
        let mut b = config.rng();
        for _ in 0..16 {
            assert_eq!(a.next_below(16), b.next_below(16));
        }
    }
}
