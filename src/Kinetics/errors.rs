//! Error types of the kinetics core.
//!
//! Three kinds of failure are distinguished:
//! - [`BuildError`]: the mechanism definition itself is malformed. It is raised while the
//!   mechanism or the heterogeneous state is constructed, never during an integration.
//! - numeric floor conditions (a formula would go negative or divide by zero) are not errors at
//!   all: the rate laws return 0 and the caller never sees them.
//! - [`EvaluationError`]: a rate law produced NaN/Inf or the inputs of an evaluation do not fit
//!   the mechanism. The current integration step must be aborted.
use thiserror::Error;

/// malformed mechanism definition, raised at construction time
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    #[error("reaction '{reaction}' references undeclared species '{species}'")]
    UndeclaredSpecies { reaction: String, species: String },
    #[error("species '{0}' is declared more than once")]
    DuplicateSpecies(String),
    #[error("reaction id '{0}' is used more than once")]
    DuplicateReaction(String),
    #[error("cannot parse equation of reaction '{reaction}': {message}")]
    MalformedEquation { reaction: String, message: String },
    #[error("inconsistent stoichiometry in reaction '{reaction}': {message}")]
    InconsistentStoichiometry { reaction: String, message: String },
    #[error("{field} has {found} entries, expected {expected}")]
    ArrayLength {
        field: String,
        expected: usize,
        found: usize,
    },
    #[error("invalid heterogeneous state: {0}")]
    InvalidHetState(String),
    #[error("invalid rate law parameters in reaction '{reaction}': {message}")]
    InvalidParameters { reaction: String, message: String },
}

/// a corrupted evaluation; the integration step must not use the result
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    #[error("rate law of reaction '{reaction}' returned non-finite value {value}")]
    NonFiniteRate { reaction: String, value: f64 },
    #[error("reaction '{reaction}' needs j-value #{index}, but only {available} were supplied")]
    MissingJValue {
        reaction: String,
        index: usize,
        available: usize,
    },
    #[error("state vector has {found} entries, the mechanism declares {expected} species")]
    StateLength { expected: usize, found: usize },
    #[error("invalid environment: {0}")]
    InvalidEnvironment(String),
    #[error("species index {index} is out of range for {n_species} species")]
    UnknownSpeciesIndex { index: usize, n_species: usize },
}

/// top-level error for loaders, configuration and the binary
#[derive(Debug, Error)]
pub enum ChemError {
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logger already installed: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("{0}")]
    Parse(String),
}
