//! Physical inputs of one rate evaluation in one grid cell.
//!
//! Every rate law receives the context explicitly; nothing in the crate reads ambient
//! temperature or density from module-level state.
use crate::Kinetics::errors::EvaluationError;
use crate::Kinetics::het_chem_state::HetChemState;
use serde::{Deserialize, Serialize};

/// volume mixing ratio of O2 in dry air
pub const O2_FRACTION: f64 = 0.2095;
/// volume mixing ratio of N2 in dry air
pub const N2_FRACTION: f64 = 0.7808;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentContext {
    /// K
    pub temperature: f64,
    /// air number density, molec cm-3
    pub number_density: f64,
    /// %
    pub relative_humidity: f64,
    /// water vapour, molec cm-3
    pub h2o: f64,
    /// photolysis rates [s-1], indexed by photolysis reaction id
    pub j_values: Vec<f64>,
    pub het: HetChemState,
}

impl Default for EnvironmentContext {
    fn default() -> Self {
        Self {
            temperature: 298.15,
            number_density: 2.46e19,
            relative_humidity: 50.0,
            h2o: 3.9e17,
            j_values: Vec::new(),
            het: HetChemState::default(),
        }
    }
}

impl EnvironmentContext {
    pub fn new(temperature: f64, number_density: f64) -> Self {
        Self {
            temperature,
            number_density,
            ..Self::default()
        }
    }

    pub fn with_humidity(mut self, relative_humidity: f64, h2o: f64) -> Self {
        self.relative_humidity = relative_humidity;
        self.h2o = h2o;
        self
    }

    pub fn with_j_values(mut self, j_values: Vec<f64>) -> Self {
        self.j_values = j_values;
        self
    }

    pub fn with_het(mut self, het: HetChemState) -> Self {
        self.het = het;
        self
    }

    /// 300/T, the reference ratio of the modified Arrhenius forms
    pub fn k300_over_t(&self) -> f64 {
        300.0 / self.temperature
    }

    /// O2 number density, molec cm-3
    pub fn o2(&self) -> f64 {
        self.number_density * O2_FRACTION
    }

    pub fn j(&self, index: usize) -> Option<f64> {
        self.j_values.get(index).copied()
    }

    /// rejects inputs for which the rate laws are undefined
    pub fn validate(&self) -> Result<(), EvaluationError> {
        if !self.temperature.is_finite() || self.temperature <= 0.0 {
            return Err(EvaluationError::InvalidEnvironment(format!(
                "temperature {} K must be positive",
                self.temperature
            )));
        }
        if !self.number_density.is_finite() || self.number_density <= 0.0 {
            return Err(EvaluationError::InvalidEnvironment(format!(
                "number density {} must be positive",
                self.number_density
            )));
        }
        if !self.relative_humidity.is_finite() || self.relative_humidity < 0.0 {
            return Err(EvaluationError::InvalidEnvironment(format!(
                "relative humidity {} must be non-negative",
                self.relative_humidity
            )));
        }
        if !self.h2o.is_finite() || self.h2o < 0.0 {
            return Err(EvaluationError::InvalidEnvironment(format!(
                "H2O {} must be non-negative",
                self.h2o
            )));
        }
        if let Some((i, j)) = self
            .j_values
            .iter()
            .enumerate()
            .find(|(_, j)| !j.is_finite() || **j < 0.0)
        {
            return Err(EvaluationError::InvalidEnvironment(format!(
                "j-value #{} = {} must be finite and non-negative",
                i, j
            )));
        }
        self.het
            .validate()
            .map_err(|e| EvaluationError::InvalidEnvironment(e.to_string()))
    }
}
