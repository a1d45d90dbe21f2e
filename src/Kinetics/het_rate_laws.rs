//! Heterogeneous uptake on aerosol and cloud surfaces.
//!
//! First-order loss rates follow the resistance-in-series form of gas-phase diffusion and
//! surface accommodation (`ars_l1k`). Uptake coefficients are fixed, read from the aerosol
//! state, parameterised per aerosol type (N2O5), or derived from aqueous reaction-diffusion
//! theory (halides). Clear-sky terms are weighted by the clear-sky fraction, in-cloud terms go
//! through the entrainment limitation of `cloud_het`, stratospheric terms read `KHETI_SLA` and
//! the PSC surface.
use crate::Kinetics::environment::EnvironmentContext;
use crate::Kinetics::het_chem_state::{AerosolType, AqueousMedium, HetReaction, IonComposition};
use crate::Kinetics::rate_law::{RateCoefficient, RateForm, floor_zero};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// molec cm-3 below which a limiting partner switches the reaction off
pub const MIN_LIMIT_CONC: f64 = 100.0;
/// cloud lifetime used for entrainment [s]
pub const CLOUD_LIFETIME: f64 = 3600.0;
/// L atm mol-1 K-1
pub const R_ATM: f64 = 0.082057;
/// J mol-1 K-1
pub const R_GAS: f64 = 8.314462618;
/// molar concentration of liquid water
pub const WATER_MOLARITY: f64 = 55.0;
/// ratio of the N2O5 + Cl- and N2O5 + H2O rate constants (Bertram and Thornton, 2009)
pub const CLNO2_COMPETITION: f64 = 483.0;
pub const N2O5_GAMMA_CLOUD: f64 = 0.02;

/////////////////////////UPTAKE PRIMITIVES///////////////////////////////////////////////////////////////
/// First-order loss rate [s-1] on one surface.
/// `area` cm2 cm-3, `radius` cm, `sr_mw` square root of the molar mass in g/mol.
pub fn ars_l1k(area: f64, radius: f64, gamma: f64, sr_mw: f64, env: &EnvironmentContext) -> f64 {
    if gamma <= 0.0 || area <= 0.0 || sr_mw <= 0.0 {
        return 0.0;
    }
    let sqrt_t = env.temperature.sqrt();
    let dfkg = (9.45e17 / env.number_density)
        * sqrt_t
        * (3.472e-2 + 1.0 / (sr_mw * sr_mw)).sqrt();
    let k = area / (radius / dfkg + 2.749064e-4 * sr_mw / (gamma * sqrt_t));
    floor_zero(k)
}

/// mean molecular speed [cm s-1]
pub fn mean_molecular_speed(sr_mw: f64, temp: f64) -> f64 {
    // sqrt(8 R T / (pi M)), M in kg/mol
    100.0 * (8.0 * R_GAS * temp * 1.0e3 / PI).sqrt() / sr_mw
}

/// reacto-diffusive correction coth(q) - 1/q for q = radius / diffuso-reactive length
pub fn reacto_diff_corr(radius: f64, l: f64) -> f64 {
    if radius <= 0.0 || l <= 0.0 {
        return 0.0;
    }
    let q = radius / l;
    if q < 1.0e-3 {
        q / 3.0
    } else if q > 20.0 {
        1.0 - 1.0 / q
    } else {
        1.0 / q.tanh() - 1.0 / q
    }
}

/// Aqueous uptake coefficient from mass accommodation and bulk reaction:
/// 1/gamma = 1/alpha + c / (4 H R T sqrt(k_b D_l) corr)
pub fn gamma_aqueous(
    alpha: f64,
    henry: f64,
    d_liquid: f64,
    k_bulk: f64,
    radius: f64,
    sr_mw: f64,
    temp: f64,
) -> f64 {
    if alpha <= 0.0 || henry <= 0.0 || d_liquid <= 0.0 || k_bulk <= 0.0 || radius <= 0.0 {
        return 0.0;
    }
    let l = (d_liquid / k_bulk).sqrt();
    let corr = reacto_diff_corr(radius, l);
    if corr <= 0.0 {
        return 0.0;
    }
    let c = mean_molecular_speed(sr_mw, temp);
    let reactive = 4.0 * henry * R_ATM * temp * (k_bulk * d_liquid).sqrt() * corr / c;
    1.0 / (1.0 / alpha + 1.0 / reactive)
}

/// N2O5 uptake coefficient by aerosol type (Evans and Jacob, 2005). RH in %.
pub fn gamma_n2o5(t: AerosolType, relative_humidity: f64, temp: f64) -> f64 {
    let rh = relative_humidity.clamp(0.0, 100.0);
    match t {
        AerosolType::Dust1
        | AerosolType::Dust2
        | AerosolType::Dust3
        | AerosolType::Dust4
        | AerosolType::Dust5
        | AerosolType::Dust6
        | AerosolType::Dust7 => 0.01,
        AerosolType::Sulfate => {
            let gamma = 2.79e-4 + rh * (1.30e-4 + rh * (-3.43e-6 + rh * 7.52e-8));
            let factor = if temp > 282.0 {
                10.0_f64.powf(-0.04 * (temp - 294.0))
            } else {
                1.62
            };
            floor_zero(gamma * factor)
        }
        AerosolType::BlackCarbon => 0.005,
        AerosolType::OrganicCarbon => 5.2e-4 * if rh > 60.0 { 60.0 } else { rh },
        AerosolType::SeaSaltFine | AerosolType::SeaSaltCoarse => {
            if rh < 62.0 {
                0.005
            } else {
                0.03
            }
        }
        // stratospheric surfaces are covered by KHETI_SLA and the PSC term
        AerosolType::StratLiquid | AerosolType::IceCloud => 0.0,
    }
}

/// ClNO2 yield of N2O5 uptake; 0 without chloride
pub fn clno2_yield(chloride: f64) -> f64 {
    if chloride <= 0.0 {
        return 0.0;
    }
    1.0 / (1.0 + WATER_MOLARITY / (CLNO2_COMPETITION * chloride))
}

/// Grid-average rate of an in-cloud process with entrainment limitation.
/// `f` cloud fraction, `kc` in-cloud first-order rate.
pub fn cloud_het(f: f64, kc: f64) -> f64 {
    if f < 1.0e-4 || kc <= 0.0 {
        return 0.0;
    }
    let f = if f > 1.0 { 1.0 } else { f };
    f * kc / (1.0 + (1.0 - f) * kc * CLOUD_LIFETIME)
}

/// Second-order rate coefficient of a heterogeneous reaction limited by the less abundant
/// reactant: kII = kI / max(C_X, C_Y), 0 when the partner X is below [`MIN_LIMIT_CONC`].
pub fn k_ii_r1_limited(k_i: f64, c_x: f64, c_y: f64) -> f64 {
    if c_x < MIN_LIMIT_CONC || k_i <= 0.0 {
        return 0.0;
    }
    k_i / c_x.max(c_y)
}

/////////////////////////UPTAKE COEFFICIENTS///////////////////////////////////////////////////////////////
/// aqueous ion that takes up the dissolved gas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IonPartner {
    Bromide,
    Chloride,
    Bisulfite,
}

/// HOBr/HOCl uptake by acid-catalysed halide reactions and bisulfite.
/// Rate constants in M-2 s-1 (halides, multiplied by [H+][X-]) and M-1 s-1 (bisulfite).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HalideUptake {
    pub alpha: f64,
    /// M atm-1
    pub henry: f64,
    /// cm2 s-1
    pub d_liquid: f64,
    pub k_bromide: f64,
    pub k_chloride: f64,
    pub k_bisulfite: f64,
    pub partner: IonPartner,
}

impl HalideUptake {
    pub fn hobr(partner: IonPartner) -> Self {
        Self {
            alpha: 0.6,
            henry: 6.1e3,
            d_liquid: 1.4e-5,
            k_bromide: 1.6e10,
            k_chloride: 5.9e9,
            k_bisulfite: 5.0e9,
            partner,
        }
    }

    pub fn hocl(partner: IonPartner) -> Self {
        Self {
            alpha: 0.8,
            henry: 6.5e2,
            d_liquid: 2.0e-5,
            k_bromide: 1.3e6,
            k_chloride: 1.5e4,
            k_bisulfite: 2.8e5,
            partner,
        }
    }

    fn k_partner(&self, ions: &IonComposition, partner: IonPartner) -> f64 {
        match partner {
            IonPartner::Bromide => self.k_bromide * ions.h_plus * ions.bromide,
            IonPartner::Chloride => self.k_chloride * ions.h_plus * ions.chloride,
            IonPartner::Bisulfite => self.k_bisulfite * ions.bisulfite,
        }
    }

    /// bulk first-order rate summed over all ion partners [s-1]
    pub fn k_total(&self, ions: &IonComposition) -> f64 {
        [IonPartner::Bromide, IonPartner::Chloride, IonPartner::Bisulfite]
            .iter()
            .map(|p| self.k_partner(ions, *p))
            .sum()
    }

    /// gamma of the selected partner: gamma_total k_partner / k_total
    pub fn gamma(&self, ions: &IonComposition, radius: f64, sr_mw: f64, temp: f64) -> f64 {
        let k_tot = self.k_total(ions);
        if k_tot <= 0.0 {
            return 0.0;
        }
        let gamma_tot = gamma_aqueous(
            self.alpha,
            self.henry,
            self.d_liquid,
            k_tot,
            radius,
            sr_mw,
            temp,
        );
        gamma_tot * self.k_partner(ions, self.partner) / k_tot
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum UptakeGamma {
    Fixed { gamma: f64 },
    /// aerosol-supplied HO2 uptake coefficient
    Ho2,
    /// type-dependent N2O5 parameterisation
    N2O5,
    Halide(HalideUptake),
}

/// surface seen by the uptake coefficient
#[derive(Debug, Clone, Copy)]
struct Surface<'a> {
    kind: Option<AerosolType>,
    radius: f64,
    ions: Option<&'a IonComposition>,
}

impl UptakeGamma {
    fn on(&self, s: &Surface, sr_mw: f64, env: &EnvironmentContext) -> f64 {
        match self {
            UptakeGamma::Fixed { gamma } => *gamma,
            UptakeGamma::Ho2 => env.het.gamma_ho2,
            UptakeGamma::N2O5 => match s.kind {
                Some(t) => gamma_n2o5(t, env.relative_humidity, env.temperature),
                None => N2O5_GAMMA_CLOUD,
            },
            UptakeGamma::Halide(h) => match s.ions {
                Some(ions) => h.gamma(ions, s.radius, sr_mw, env.temperature),
                None => 0.0,
            },
        }
    }
}

/// fraction of the uptake assigned to this reaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum UptakeShare {
    #[default]
    Whole,
    /// N2O5 + H2O channel
    Hydrolysis,
    /// N2O5 + Cl- channel
    ClNO2,
}

impl UptakeShare {
    fn factor(self, ions: Option<&IonComposition>) -> f64 {
        let phi = ions.map_or(0.0, |i| clno2_yield(i.chloride));
        match self {
            UptakeShare::Whole => 1.0,
            UptakeShare::Hydrolysis => 1.0 - phi,
            UptakeShare::ClNO2 => phi,
        }
    }
}

/// stratospheric contribution: precomputed liquid aerosol rate plus PSC uptake
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StratUptake {
    pub reaction: HetReaction,
    pub nat_gamma: f64,
    pub ice_gamma: f64,
}

/////////////////////////UPTAKE RATE LAW///////////////////////////////////////////////////////////////
/// Pseudo-first-order uptake of one gas summed over all environments.
/// With `limited` set the reaction is bimolecular gas + partner and the rate is limited by the
/// less abundant of the two (`k_ii_r1_limited`); the first reactant is the uptake gas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HetUptake {
    /// square root of the molar mass of the uptake gas [g/mol]^0.5
    pub sr_mw: f64,
    pub gamma: UptakeGamma,
    /// clear-sky aerosol surfaces
    #[serde(default)]
    pub surfaces: Vec<AerosolType>,
    /// uptake on in-cloud liquid water
    #[serde(default)]
    pub cloud_liquid: bool,
    /// fixed gamma on in-cloud ice
    #[serde(default)]
    pub cloud_ice_gamma: Option<f64>,
    #[serde(default)]
    pub strat: Option<StratUptake>,
    #[serde(default)]
    pub share: UptakeShare,
    /// sea-salt surfaces only count when acidic
    #[serde(default)]
    pub acid_gated: bool,
    #[serde(default)]
    pub limited: bool,
}

impl HetUptake {
    pub fn new(sr_mw: f64, gamma: UptakeGamma) -> Self {
        Self {
            sr_mw,
            gamma,
            surfaces: Vec::new(),
            cloud_liquid: false,
            cloud_ice_gamma: None,
            strat: None,
            share: UptakeShare::Whole,
            acid_gated: false,
            limited: false,
        }
    }
    pub fn on_surfaces(mut self, surfaces: Vec<AerosolType>) -> Self {
        self.surfaces = surfaces;
        self
    }
    pub fn in_cloud(mut self, ice_gamma: Option<f64>) -> Self {
        self.cloud_liquid = true;
        self.cloud_ice_gamma = ice_gamma;
        self
    }
    pub fn in_stratosphere(mut self, strat: StratUptake) -> Self {
        self.strat = Some(strat);
        self
    }
    pub fn with_share(mut self, share: UptakeShare) -> Self {
        self.share = share;
        self
    }
    pub fn acid_gated(mut self) -> Self {
        self.acid_gated = true;
        self
    }
    pub fn limited(mut self) -> Self {
        self.limited = true;
        self
    }

    /// clear-sky aerosol term, not yet weighted by the clear-sky fraction
    pub fn k_aerosol(&self, env: &EnvironmentContext) -> f64 {
        let het = &env.het;
        self.surfaces
            .iter()
            .map(|&t| {
                let medium = AqueousMedium::of_aerosol(t);
                if self.acid_gated && t.is_sea_salt() && !medium.is_some_and(|m| het.is_acidic(m))
                {
                    return 0.0;
                }
                let ions = medium.map(|m| het.ions(m));
                let surface = Surface {
                    kind: Some(t),
                    radius: het.radius(t),
                    ions,
                };
                let gamma = self.gamma.on(&surface, self.sr_mw, env);
                ars_l1k(het.area(t), het.radius(t), gamma, self.sr_mw, env)
                    * self.share.factor(ions)
            })
            .sum()
    }

    /// grid-average in-cloud term (liquid + ice) with entrainment limitation
    pub fn k_cloud(&self, env: &EnvironmentContext) -> f64 {
        let het = &env.het;
        let c = &het.cloud;
        let (mut kc_whole, mut kc_share) = (0.0, 0.0);
        if self.cloud_liquid {
            let ions = het.ions(AqueousMedium::CloudLiquid);
            let surface = Surface {
                kind: None,
                radius: c.liquid_radius,
                ions: Some(ions),
            };
            let gamma = self.gamma.on(&surface, self.sr_mw, env);
            let k = ars_l1k(c.liquid_area, c.liquid_radius, gamma, self.sr_mw, env);
            kc_whole += k;
            kc_share += k * self.share.factor(Some(ions));
        }
        if let Some(gamma) = self.cloud_ice_gamma {
            let k = ars_l1k(c.ice_area, c.ice_radius, gamma, self.sr_mw, env);
            kc_whole += k;
            // no liquid on ice: all of it goes to the hydrolysis-type channel
            kc_share += k * self.share.factor(None);
        }
        if kc_whole <= 0.0 {
            return 0.0;
        }
        cloud_het(het.cloud_fraction, kc_whole) * kc_share / kc_whole
    }

    /// stratospheric liquid aerosol and PSC term
    pub fn k_strat(&self, env: &EnvironmentContext) -> f64 {
        let het = &env.het;
        match &self.strat {
            Some(s) if het.strat_box => {
                let gamma = if het.nat_surface {
                    s.nat_gamma
                } else {
                    s.ice_gamma
                };
                let t = AerosolType::IceCloud;
                het.kheti_sla(s.reaction)
                    + ars_l1k(het.area(t), het.radius(t), gamma, self.sr_mw, env)
            }
            _ => 0.0,
        }
    }
}

impl RateCoefficient for HetUptake {
    /// first-order uptake rate kI [s-1] of the gas
    fn k(&self, env: &EnvironmentContext) -> f64 {
        let k = env.het.clear_fraction * self.k_aerosol(env) + self.k_cloud(env) + self.k_strat(env);
        floor_zero(k)
    }

    fn form(&self) -> RateForm {
        if self.limited {
            RateForm::Prelimited
        } else {
            RateForm::MassAction
        }
    }

    /// limited form: reactants = [gas Y, partner X] in molec cm-3
    fn rate(&self, env: &EnvironmentContext, reactants_mlc: &[f64]) -> f64 {
        if !self.limited {
            return self.k(env) * reactants_mlc.iter().product::<f64>();
        }
        match reactants_mlc {
            [c_y, c_x] => k_ii_r1_limited(self.k(env), *c_x, *c_y) * c_x * c_y,
            _ => f64::NAN,
        }
    }

    fn fixed_order(&self) -> Option<u32> {
        if self.limited { Some(2) } else { Some(1) }
    }
}
