//! The rate-law interface and the closed set of rate-law families.
//!
//! `RateLaw` is what a reaction table stores. Every variant wraps one family struct from
//! [`gas_rate_laws`](crate::Kinetics::gas_rate_laws) or
//! [`het_rate_laws`](crate::Kinetics::het_rate_laws); dispatch goes through `enum_dispatch`,
//! so the hot path has no virtual calls.
//!
//! In JSON a rate law is an object tagged by its family:
//! ```json
//! {"law": "Arrhenius", "a": 3.0e-12, "c": -1500.0}
//! ```
use crate::Kinetics::environment::EnvironmentContext;
use crate::Kinetics::gas_rate_laws::{
    ArrPlus, Arrhenius, ConstantRate, DmsOh, EpoxideOh, GlycOh, GlyxNo3, HacOh, Ho2Ho2,
    IsopreneBranch, JplEquilibrium, JplFalloff, OhCo, OhHno3, Photolysis, Ro2Ho2,
    Ro2NoFixedYield, Ro2NoNitrate, TemperatureBranch, ThirdBody, TroeFalloff, TunPlus,
};
use crate::Kinetics::het_rate_laws::HetUptake;
use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};

/// how the assembler turns a coefficient into a reaction rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RateForm {
    /// R = k * prod(C^nu)
    MassAction,
    /// the rate law computes R itself from the reactant concentrations in molec cm-3
    Prelimited,
}

/// Floors a coefficient at zero. NaN passes through, so a broken input still reaches the
/// assembler as a non-finite rate.
pub fn floor_zero(k: f64) -> f64 {
    if k < 0.0 { 0.0 } else { k }
}

#[enum_dispatch]
pub trait RateCoefficient {
    /// coefficient in the molecule cm-3 basis; finite and non-negative for valid inputs
    fn k(&self, env: &EnvironmentContext) -> f64;

    fn form(&self) -> RateForm {
        RateForm::MassAction
    }

    /// reaction rate [molec cm-3 s-1] from reactant concentrations [molec cm-3],
    /// one entry per reactant occurrence
    fn rate(&self, env: &EnvironmentContext, reactants_mlc: &[f64]) -> f64 {
        self.k(env) * reactants_mlc.iter().product::<f64>()
    }

    /// kinetic order the coefficient is defined for, if the family fixes it
    fn fixed_order(&self) -> Option<u32> {
        None
    }

    /// photolysis slot the law reads
    fn j_index(&self) -> Option<usize> {
        None
    }
}

#[enum_dispatch(RateCoefficient)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "law")]
pub enum RateLaw {
    Arrhenius(Arrhenius),
    ThirdBody(ThirdBody),
    Constant(ConstantRate),
    Photolysis(Photolysis),
    JplFalloff(JplFalloff),
    JplEquilibrium(JplEquilibrium),
    TroeFalloff(TroeFalloff),
    Ho2Ho2(Ho2Ho2),
    OhCo(OhCo),
    OhHno3(OhHno3),
    TemperatureBranch(TemperatureBranch),
    Ro2NoFixedYield(Ro2NoFixedYield),
    Ro2NoNitrate(Ro2NoNitrate),
    Ro2Ho2(Ro2Ho2),
    IsopreneBranch(IsopreneBranch),
    GlycOh(GlycOh),
    HacOh(HacOh),
    DmsOh(DmsOh),
    GlyxNo3(GlyxNo3),
    EpoxideOh(EpoxideOh),
    ArrPlus(ArrPlus),
    TunPlus(TunPlus),
    HetUptake(HetUptake),
}

impl RateLaw {
    /// short family name for tables and logs
    pub fn family(&self) -> &'static str {
        match self {
            RateLaw::Arrhenius(_) => "Arrhenius",
            RateLaw::ThirdBody(_) => "ThirdBody",
            RateLaw::Constant(_) => "Constant",
            RateLaw::Photolysis(_) => "Photolysis",
            RateLaw::JplFalloff(_) => "JplFalloff",
            RateLaw::JplEquilibrium(_) => "JplEquilibrium",
            RateLaw::TroeFalloff(_) => "TroeFalloff",
            RateLaw::Ho2Ho2(_) => "Ho2Ho2",
            RateLaw::OhCo(_) => "OhCo",
            RateLaw::OhHno3(_) => "OhHno3",
            RateLaw::TemperatureBranch(_) => "TemperatureBranch",
            RateLaw::Ro2NoFixedYield(_) => "Ro2NoFixedYield",
            RateLaw::Ro2NoNitrate(_) => "Ro2NoNitrate",
            RateLaw::Ro2Ho2(_) => "Ro2Ho2",
            RateLaw::IsopreneBranch(_) => "IsopreneBranch",
            RateLaw::GlycOh(_) => "GlycOh",
            RateLaw::HacOh(_) => "HacOh",
            RateLaw::DmsOh(_) => "DmsOh",
            RateLaw::GlyxNo3(_) => "GlyxNo3",
            RateLaw::EpoxideOh(_) => "EpoxideOh",
            RateLaw::ArrPlus(_) => "ArrPlus",
            RateLaw::TunPlus(_) => "TunPlus",
            RateLaw::HetUptake(_) => "HetUptake",
        }
    }

    pub fn is_heterogeneous(&self) -> bool {
        matches!(self, RateLaw::HetUptake(_))
    }
}
