//! # Settings Module
//!
//! ## Purpose
//! Run configuration of the chemistry: which mechanism to compile, which reaction sets are
//! enabled, in which basis the ODE state is held and how verbose the log is. The configuration
//! is stored as JSON and falls back to defaults when the file is absent.
//!
//! ## Key Features
//! - **Mechanism Source**: the built-in table or a JSON file loaded with `Utils::load_from_file`
//! - **Reaction Sets**: gas, photolysis and heterogeneous are on by default; the optional
//!   heterogeneous reactions must be switched on explicitly
//! - **State Basis**: ppb (default) or molecules cm-3
//!
//! ## Usage Pattern
//! ```rust,no_run
//! use AtmoChem::settings::ChemConfig;
//!
//! let config = ChemConfig::load_config("atmochem_config.json").unwrap();
//! let table = config.reaction_table().unwrap();
//! let mechanism = config.build_mechanism(&table).unwrap();
//! ```
//!
//! ## File Layout
//! | Field | Default |
//! |-------|---------|
//! | "mechanism_file" | null (built-in mechanism) |
//! | "enabled_sets" | ["Gas", "Photolysis", "Heterogeneous"] |
//! | "state_basis" | "Ppb" |
//! | "fd_step" | 1e-7 |
//! | "log_level" | "info" |
//! | "log_file" | null |

use crate::Kinetics::errors::ChemError;
use crate::Kinetics::fullchem::fullchem_table;
use crate::Kinetics::mechanism::{Mechanism, MechanismOptions};
use crate::Kinetics::reaction_table::{ReactionSet, ReactionTable};
use crate::Kinetics::units::StateBasis;
use crate::Utils::load_from_file::load_mechanism;
use log::{LevelFilter, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_log_level() -> String {
    "info".to_string()
}

/// Run configuration, serialisable to atmochem_config.json.
///
/// # Fields
/// * `mechanism_file` - JSON mechanism table; `None` selects the built-in mechanism
/// * `enabled_sets` - reaction sets compiled into the mechanism
/// * `state_basis` - basis of the concentration vector
/// * `fd_step` - relative step of finite-difference Jacobian columns
/// * `log_level` - one of off/error/warn/info/debug/trace
/// * `log_file` - optional copy of the log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChemConfig {
    #[serde(default)]
    pub mechanism_file: Option<String>,
    #[serde(default = "default_sets")]
    pub enabled_sets: Vec<ReactionSet>,
    #[serde(default)]
    pub state_basis: StateBasis,
    #[serde(default = "default_fd_step")]
    pub fd_step: f64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_file: Option<String>,
}

fn default_sets() -> Vec<ReactionSet> {
    MechanismOptions::default().enabled_sets
}

fn default_fd_step() -> f64 {
    MechanismOptions::default().fd_step
}

impl Default for ChemConfig {
    fn default() -> Self {
        Self {
            mechanism_file: None,
            enabled_sets: default_sets(),
            state_basis: StateBasis::default(),
            fd_step: default_fd_step(),
            log_level: default_log_level(),
            log_file: None,
        }
    }
}

impl ChemConfig {
    /// Loads configuration from a JSON file; a missing file gives the defaults.
    ///
    /// # Returns
    /// * `Ok(ChemConfig)` - loaded or default configuration
    /// * `Err(ChemError)` - the file exists but cannot be read or parsed
    pub fn load_config(config_file: &str) -> Result<ChemConfig, ChemError> {
        if Path::new(config_file).exists() {
            let content = fs::read_to_string(config_file)?;
            let config: ChemConfig = serde_json::from_str(&content)?;
            info!("configuration loaded from '{}'", config_file);
            Ok(config)
        } else {
            info!("no '{}', using the default configuration", config_file);
            Ok(ChemConfig::default())
        }
    }

    pub fn save_config(&self, config_file: &str) -> Result<(), ChemError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_file, content)?;
        Ok(())
    }

    /// unknown level names fall back to info
    pub fn level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or_else(|_| {
            warn!("unknown log level '{}', using info", self.log_level);
            LevelFilter::Info
        })
    }

    pub fn to_options(&self) -> MechanismOptions {
        MechanismOptions {
            enabled_sets: self.enabled_sets.clone(),
            state_basis: self.state_basis,
            fd_step: self.fd_step,
        }
    }

    pub fn reaction_table(&self) -> Result<ReactionTable, ChemError> {
        match &self.mechanism_file {
            Some(file) => load_mechanism(file),
            None => Ok(fullchem_table()),
        }
    }

    pub fn build_mechanism(&self, table: &ReactionTable) -> Result<Mechanism, ChemError> {
        Ok(Mechanism::build(table, &self.to_options())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Utils::load_from_file::save_mechanism;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_when_missing() {
        let config = ChemConfig::load_config("no_such_config.json").unwrap();
        assert_eq!(config, ChemConfig::default());
        assert_eq!(config.level(), LevelFilter::Info);
        assert!(
            !config
                .to_options()
                .enabled_sets
                .contains(&ReactionSet::OptionalHeterogeneous)
        );
    }

    #[test]
    fn test_save_and_load() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        let config = ChemConfig {
            state_basis: StateBasis::MoleculeCm3,
            log_level: "debug".to_string(),
            enabled_sets: vec![ReactionSet::Gas, ReactionSet::OptionalHeterogeneous],
            ..ChemConfig::default()
        };
        config.save_config(path).unwrap();
        let loaded = ChemConfig::load_config(path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.level(), LevelFilter::Debug);
        assert_eq!(loaded.to_options().state_basis, StateBasis::MoleculeCm3);
    }

    #[test]
    fn test_partial_file_and_bad_level() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        fs::write(path, r#"{"log_level": "loud"}"#).unwrap();
        let config = ChemConfig::load_config(path).unwrap();
        assert_eq!(config.enabled_sets, default_sets());
        assert_eq!(config.level(), LevelFilter::Info);
        fs::write(path, "{ not json").unwrap();
        assert!(ChemConfig::load_config(path).is_err());
    }

    #[test]
    fn test_mechanism_from_file() {
        let mech_file = NamedTempFile::new().unwrap();
        let mech_path = mech_file.path().to_str().unwrap();
        save_mechanism(&fullchem_table(), mech_path).unwrap();
        let config = ChemConfig {
            mechanism_file: Some(mech_path.to_string()),
            enabled_sets: vec![ReactionSet::Gas],
            ..ChemConfig::default()
        };
        let table = config.reaction_table().unwrap();
        let m = config.build_mechanism(&table).unwrap();
        assert_eq!(m.n_reactions(), table.reactions_in(ReactionSet::Gas).count());
    }
}
