//! Run configuration from environment variables.
//!
//! - `SIMON_SEED`: RNG seed (u32); a random seed is drawn when unset or invalid
//! - `SIMON_LOG_PATH`: intent log file; logging is off when unset or empty
//! - `SIMON_BELL`: set to "0" or "false" to silence the terminal bell

use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub seed: u32,
    pub log_path: Option<PathBuf>,
    pub bell: bool,
}

impl RunConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source (used by tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("SIMON_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(rand::random::<u32>);

        let log_path = lookup("SIMON_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        let bell = lookup("SIMON_BELL")
            .map(|v| {
                let v = v.trim().to_lowercase();
                !(v == "0" || v == "false")
            })
            .unwrap_or(true);

        Self {
            seed,
            log_path,
            bell,
        }
    }
}
