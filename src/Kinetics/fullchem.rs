//! Built-in tropospheric and stratospheric mechanism.
//!
//! Ox-HOx-NOx-CO-CH4 chemistry and sulfur, C2-C3 alkanes and alkenes, lumped C4+ alkanes,
//! aromatics, monoterpenes, a detailed isoprene scheme, bromine, chlorine and iodine,
//! photolysis and heterogeneous uptake. Reaction ids are stable: R1-R99 for the original core
//! set, then inorganic R100+, organics R140+, isoprene R300+ and halogens R400+.
//!
//! Photolysis slots are listed in [`J_SLOTS`]; the host must supply at least that many
//! j-values. Heterogeneous reactions that are not part of the standard mechanism are tagged
//! [`ReactionSet::OptionalHeterogeneous`](crate::Kinetics::reaction_table::ReactionSet).
pub mod halogens;
pub mod heterogeneous;
pub mod inorganic;
pub mod isoprene;
pub mod organics;
pub mod photolysis;
pub mod species;

pub use heterogeneous::{het_reactions, optional_het_reactions};
pub use photolysis::{J_SLOTS, N_J_SLOTS, photolysis_reactions};
pub use species::fullchem_species;

use crate::Kinetics::gas_rate_laws::*;
use crate::Kinetics::rate_law::RateLaw;
use crate::Kinetics::reaction_table::{ReactionSpec, ReactionTable};

/// (id, equation, A, C) of a plain `A exp(C/T)` reaction
type ArrRow = (&'static str, &'static str, f64, f64);

fn r(id: &str, equation: &str, rate: impl Into<RateLaw>) -> ReactionSpec {
    ReactionSpec::new(id, equation, rate)
}

fn arr(a: f64, c: f64) -> Arrhenius {
    Arrhenius::ac(a, c)
}

fn arrhenius_rows(rows: &[ArrRow]) -> impl Iterator<Item = ReactionSpec> + '_ {
    rows.iter().map(|(id, eq, a, c)| r(id, eq, arr(*a, *c)))
}

fn nitrate(a0: f64, c0: f64, n_carbon: f64, branch: Branch) -> Ro2NoNitrate {
    Ro2NoNitrate {
        a0,
        c0,
        n_carbon,
        branch,
    }
}

fn isoprene_oh(branch: Branch) -> IsopreneBranch {
    IsopreneBranch {
        a0: 1.7e-11,
        b0: 390.0,
        c0: 9.33e-2,
        d0: 5.05e15,
        e0: -1.22e4,
        f0: 1.79e14,
        g0: -8.83e3,
        branch,
    }
}

/// every thermal gas-phase reaction
pub fn gas_reactions() -> Vec<ReactionSpec> {
    let mut reactions = inorganic::inorganic_reactions();
    reactions.extend(organics::organic_reactions());
    reactions.extend(isoprene::isoprene_reactions());
    reactions.extend(halogens::halogen_reactions());
    reactions
}

/// the full built-in table, every reaction set included
pub fn fullchem_table() -> ReactionTable {
    let mut reactions = gas_reactions();
    reactions.extend(photolysis_reactions());
    reactions.extend(het_reactions());
    reactions.extend(optional_het_reactions());
    ReactionTable::new(fullchem_species(), reactions)
}
