//! Unit bases of rate coefficients and of the ODE state.
//!
//! Rate laws return coefficients in the molecule cm-3 basis. The adapter rescales them to the
//! basis the ODE state runs in. The factor is applied `order - 1` times, so first-order
//! coefficients pass through unchanged and zero-order source rates take the inverse factor.
use serde::{Deserialize, Serialize};

pub const AVOGADRO: f64 = 6.02214076e23;

/// concentration basis a coefficient refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RateUnit {
    /// molec cm-3
    MoleculeCm3,
    /// molec m-3
    MoleculeM3,
    /// mol m-3
    MolarSI,
    /// parts per billion of air
    Ppb,
}

/// basis of the state vector handed to the integrator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum StateBasis {
    #[default]
    Ppb,
    MoleculeCm3,
}

impl StateBasis {
    pub fn unit(self) -> RateUnit {
        match self {
            StateBasis::Ppb => RateUnit::Ppb,
            StateBasis::MoleculeCm3 => RateUnit::MoleculeCm3,
        }
    }
}

/// molec cm-3 represented by one concentration unit of the basis
pub fn molecules_per_unit(unit: RateUnit, number_density: f64) -> f64 {
    match unit {
        RateUnit::MoleculeCm3 => 1.0,
        RateUnit::MoleculeM3 => 1.0e-6,
        RateUnit::MolarSI => AVOGADRO * 1.0e-6,
        RateUnit::Ppb => number_density * 1.0e-9,
    }
}

/// ppb -> molec cm-3 factor
pub fn ppb_factor(number_density: f64) -> f64 {
    molecules_per_unit(RateUnit::Ppb, number_density)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitAdapter {
    pub state: RateUnit,
    pub number_density: f64,
}

impl UnitAdapter {
    pub fn new(state: StateBasis, number_density: f64) -> Self {
        Self {
            state: state.unit(),
            number_density,
        }
    }

    /// converts a coefficient of the given kinetic order between two bases
    pub fn convert(k: f64, order: u32, from: RateUnit, to: RateUnit, number_density: f64) -> f64 {
        if from == to {
            return k;
        }
        let ratio = molecules_per_unit(to, number_density) / molecules_per_unit(from, number_density);
        k * ratio.powi(order as i32 - 1)
    }

    /// molec cm-3 coefficient -> state basis
    pub fn to_state(&self, k_mlc: f64, order: u32) -> f64 {
        Self::convert(k_mlc, order, RateUnit::MoleculeCm3, self.state, self.number_density)
    }

    /// state concentration -> molec cm-3
    pub fn concentration_to_mlc(&self, c: f64) -> f64 {
        c * molecules_per_unit(self.state, self.number_density)
    }

    /// molec cm-3 rate -> state basis rate
    pub fn rate_from_mlc(&self, r_mlc: f64) -> f64 {
        r_mlc / molecules_per_unit(self.state, self.number_density)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const M: f64 = 2.5e19;

    #[test]
    fn test_first_order_unchanged() {
        for to in [RateUnit::MoleculeM3, RateUnit::MolarSI, RateUnit::Ppb] {
            assert_eq!(UnitAdapter::convert(1.3e-4, 1, RateUnit::MoleculeCm3, to, M), 1.3e-4);
        }
    }

    #[test]
    fn test_second_order_ppb() {
        let k = 1.8e-12;
        let k_ppb = UnitAdapter::convert(k, 2, RateUnit::MoleculeCm3, RateUnit::Ppb, M);
        assert_relative_eq!(k_ppb, k * M * 1.0e-9, max_relative = 1e-15);
        let k_si = UnitAdapter::convert(k, 2, RateUnit::MoleculeCm3, RateUnit::MolarSI, M);
        assert_relative_eq!(k_si, k * AVOGADRO * 1.0e-6, max_relative = 1e-15);
        let k_m3 = UnitAdapter::convert(k, 2, RateUnit::MoleculeCm3, RateUnit::MoleculeM3, M);
        assert_relative_eq!(k_m3, k * 1.0e-6, max_relative = 1e-15);
    }

    #[test]
    fn test_third_and_zero_order() {
        let f = ppb_factor(M);
        let k3 = UnitAdapter::convert(6.0e-34, 3, RateUnit::MoleculeCm3, RateUnit::Ppb, M);
        assert_relative_eq!(k3, 6.0e-34 * f * f, max_relative = 1e-14);
        let k0 = UnitAdapter::convert(1.0e5, 0, RateUnit::MoleculeCm3, RateUnit::Ppb, M);
        assert_relative_eq!(k0, 1.0e5 / f, max_relative = 1e-14);
    }

    #[test]
    fn test_round_trip() {
        let units = [
            RateUnit::MoleculeCm3,
            RateUnit::MoleculeM3,
            RateUnit::MolarSI,
            RateUnit::Ppb,
        ];
        for &from in &units {
            for &to in &units {
                for order in 0..=3 {
                    let k = 4.2e-11;
                    let there = UnitAdapter::convert(k, order, from, to, M);
                    let back = UnitAdapter::convert(there, order, to, from, M);
                    assert_relative_eq!(back, k, max_relative = 1e-12);
                }
            }
        }
    }

    #[test]
    fn test_state_adapter() {
        let a = UnitAdapter::new(StateBasis::Ppb, M);
        assert_relative_eq!(a.concentration_to_mlc(40.0), 40.0 * M * 1.0e-9);
        assert_relative_eq!(a.rate_from_mlc(a.concentration_to_mlc(3.0)), 3.0);
        let a = UnitAdapter::new(StateBasis::MoleculeCm3, M);
        assert_eq!(a.to_state(1.0e-12, 2), 1.0e-12);
    }
}
