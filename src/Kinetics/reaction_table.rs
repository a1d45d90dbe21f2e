//! Declarative mechanism definition: species list and reaction specifications.
//!
//! A table is plain data. It can be written in Rust (see `fullchem`) or loaded from JSON
//! (see `Utils::load_from_file`), and is checked only when a `Mechanism` is built from it.
use crate::Kinetics::rate_law::RateLaw;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

fn default_unit() -> String {
    "ppb".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Species {
    pub name: String,
    #[serde(default = "default_unit")]
    pub unit: String,
    /// held constant by the host; may react but never gets dC/dt
    #[serde(default)]
    pub fixed: bool,
}

impl Species {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            unit: default_unit(),
            fixed: false,
        }
    }
    pub fn fixed(name: &str) -> Self {
        Self {
            fixed: true,
            ..Self::new(name)
        }
    }
}

/// reaction groups that can be switched on or off as a whole
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, EnumIter, Display,
)]
pub enum ReactionSet {
    #[default]
    Gas,
    Photolysis,
    Heterogeneous,
    /// heterogeneous reactions kept out of the standard mechanism
    OptionalHeterogeneous,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactionSpec {
    pub id: String,
    /// e.g. "O3 + NO = NO2 + O2"
    pub equation: String,
    pub rate: RateLaw,
    /// species on both sides whose concentration divides the coefficient
    #[serde(default)]
    pub catalytic_divisors: Vec<String>,
    #[serde(default)]
    pub set: ReactionSet,
}

impl ReactionSpec {
    pub fn new(id: &str, equation: &str, rate: impl Into<RateLaw>) -> Self {
        Self {
            id: id.to_string(),
            equation: equation.to_string(),
            rate: rate.into(),
            catalytic_divisors: Vec::new(),
            set: ReactionSet::Gas,
        }
    }
    pub fn in_set(mut self, set: ReactionSet) -> Self {
        self.set = set;
        self
    }
    pub fn divided_by(mut self, species: &str) -> Self {
        self.catalytic_divisors.push(species.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ReactionTable {
    pub species: Vec<Species>,
    pub reactions: Vec<ReactionSpec>,
}

impl ReactionTable {
    pub fn new(species: Vec<Species>, reactions: Vec<ReactionSpec>) -> Self {
        Self { species, reactions }
    }

    pub fn species_names(&self) -> Vec<String> {
        self.species.iter().map(|s| s.name.clone()).collect()
    }

    pub fn reactions_in(&self, set: ReactionSet) -> impl Iterator<Item = &ReactionSpec> {
        self.reactions.iter().filter(move |r| r.set == set)
    }

    pub fn find(&self, id: &str) -> Option<&ReactionSpec> {
        self.reactions.iter().find(|r| r.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Kinetics::gas_rate_laws::{Arrhenius, Photolysis};

    fn small_table() -> ReactionTable {
        ReactionTable::new(
            vec![
                Species::new("O3"),
                Species::new("NO"),
                Species::new("NO2"),
                Species::fixed("O2"),
            ],
            vec![
                ReactionSpec::new("R1", "O3 + NO = NO2 + O2", Arrhenius::ac(3.0e-12, -1500.0)),
                ReactionSpec::new(
                    "J1",
                    "NO2 = NO + O3",
                    Photolysis {
                        index: 0,
                        factor: 1.0,
                    },
                )
                .in_set(ReactionSet::Photolysis),
            ],
        )
    }

    #[test]
    fn test_table_queries() {
        let t = small_table();
        assert_eq!(t.species_names(), vec!["O3", "NO", "NO2", "O2"]);
        assert_eq!(t.reactions_in(ReactionSet::Photolysis).count(), 1);
        assert!(t.find("R1").is_some());
        assert!(t.find("R9").is_none());
        assert!(t.species[3].fixed);
    }

    #[test]
    fn test_json_defaults() {
        let text = r#"{
            "species": [{"name": "OH"}, {"name": "CO"}, {"name": "HO2"}],
            "reactions": [
                {"id": "R1", "equation": "OH + CO = HO2", "rate": {"law": "OhCo", "a0": 1.5e-13}}
            ]
        }"#;
        let t: ReactionTable = serde_json::from_str(text).unwrap();
        assert_eq!(t.species[0].unit, "ppb");
        assert!(!t.species[0].fixed);
        assert_eq!(t.reactions[0].set, ReactionSet::Gas);
        assert!(t.reactions[0].catalytic_divisors.is_empty());
    }
}
