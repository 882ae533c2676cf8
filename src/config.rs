//
// This file is part of tic_tac_tally.
//
// tic_tac_tally is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// tic_tac_tally is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with tic_tac_tally. If not, see <http://www.gnu.org/licenses/>.
//
// Copyright 2017 Chris Foster
//

//! Settings for training runs.
//!
//! A JSON file named by `TIC_TAC_TALLY_CONFIG` is read first, if there is one,
//! and then any `TIC_TAC_TALLY_<KEY>` environment variable replaces the field
//! of the same name.  Fields missing from both keep their defaults.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::Result;

/// The environment variable naming a JSON config file.
pub const CONFIG_VAR: &str = "TIC_TAC_TALLY_CONFIG";

const ENV_PREFIX: &str = "TIC_TAC_TALLY_";

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct SelfPlayConfig {
    /// Weight of the exploration noise, in `[0, 1]`.
    pub curiosity: f64,
    /// Total number of games to play across all threads.
    pub games: usize,
    pub threads: usize,
    /// Where the store is loaded from, if it exists, and saved to afterwards.
    pub snapshot_path: Option<PathBuf>,
    /// Seeds the store's noise.  Each run is different without one.
    pub seed: Option<u64>,
}

impl Default for SelfPlayConfig {
    fn default() -> SelfPlayConfig {
        SelfPlayConfig {
            curiosity: 0.1,
            games: 10_000,
            threads: 4,
            snapshot_path: None,
            seed: None,
        }
    }
}

/// Loads the config file named by `TIC_TAC_TALLY_CONFIG` and applies
/// environment overrides.  A missing or unreadable file is logged and the
/// defaults are used instead.
pub fn load_config() -> SelfPlayConfig {
    let config = match env::var(CONFIG_VAR) {
        Ok(path) => match load_from_path(&path) {
            Ok(config) => {
                info!("loaded config from {}", path);
                config
            },
            Err(error) => {
                warn!("failed to load {}: {}, using defaults", path, error);
                SelfPlayConfig::default()
            },
        },
        Err(_) => {
            debug!("{} not set, using built-in defaults", CONFIG_VAR);
            SelfPlayConfig::default()
        },
    };

    apply_overrides(config, |key| env::var(key).ok())
}

/// Reads a config from a JSON file.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<SelfPlayConfig> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

macro_rules! override_field {
    ($config:expr, $lookup:expr, $field:ident, $key:expr) => {
        if let Some(value) = $lookup(&format!("{}{}", ENV_PREFIX, $key)) {
            match value.parse() {
                Ok(parsed) => $config.$field = parsed,
                Err(_) => warn!("ignoring {}{}={:?}: not a valid value", ENV_PREFIX, $key, value),
            }
        }
    };
    ($config:expr, $lookup:expr, $field:ident, $key:expr, optional) => {
        if let Some(value) = $lookup(&format!("{}{}", ENV_PREFIX, $key)) {
            match value.parse() {
                Ok(parsed) => $config.$field = Some(parsed),
                Err(_) => warn!("ignoring {}{}={:?}: not a valid value", ENV_PREFIX, $key, value),
            }
        }
    };
}

/// Replaces fields with the values `lookup` finds for their variables.
/// Values that don't parse are logged and skipped.
pub fn apply_overrides<F>(mut config: SelfPlayConfig, lookup: F) -> SelfPlayConfig where
    F: Fn(&str) -> Option<String> {
    override_field!(config, lookup, curiosity, "CURIOSITY");
    override_field!(config, lookup, games, "GAMES");
    override_field!(config, lookup, threads, "THREADS");
    override_field!(config, lookup, snapshot_path, "SNAPSHOT_PATH", optional);
    override_field!(config, lookup, seed, "SEED", optional);
    config
}
