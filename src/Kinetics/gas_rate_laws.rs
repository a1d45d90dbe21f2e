//! Gas-phase rate-law families.
//!
//! All coefficients are returned in the molecule cm-3 basis: s-1 for first order,
//! cm3 molec-1 s-1 for second order, cm6 molec-2 s-1 for third order.
//! Parameters follow the usual `A exp(C/T) (300/T)^B` naming: `a*` pre-exponential factors,
//! `b*` temperature exponents, `c*` activation temperatures (sign included).
use crate::Kinetics::environment::EnvironmentContext;
use crate::Kinetics::rate_law::{RateCoefficient, floor_zero};
use serde::{Deserialize, Serialize};

/// yield of methyl nitrate from CH3O2 + NO
pub const MENO3_YIELD: f64 = 3.0e-4;

/// Selects one branch of a paired rate law. For each pair the two branches sum to the parent
/// coefficient returned by `parent_k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Branch {
    A,
    B,
}

impl Branch {
    fn split(self, parent: f64, fraction_a: f64) -> f64 {
        match self {
            Branch::A => parent * fraction_a,
            Branch::B => parent * (1.0 - fraction_a),
        }
    }
}

/////////////////////////ARRHENIUS KINETICS///////////////////////////////////////////////////////////////
/// k = a exp(c/T) (300/T)^b
/// Zero `b` or `c` terms are skipped, so `b = 0` gives exactly `a exp(c/T)` and `c = 0` gives
/// exactly `a (300/T)^b`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arrhenius {
    pub a: f64,
    #[serde(default)]
    pub b: f64,
    #[serde(default)]
    pub c: f64,
}

impl Arrhenius {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }
    pub fn ac(a: f64, c: f64) -> Self {
        Self { a, b: 0.0, c }
    }
    pub fn ab(a: f64, b: f64) -> Self {
        Self { a, b, c: 0.0 }
    }
    pub fn k_at(&self, temp: f64) -> f64 {
        let mut k = self.a;
        if self.c != 0.0 {
            k *= (self.c / temp).exp();
        }
        if self.b != 0.0 {
            k *= (300.0 / temp).powf(self.b);
        }
        k
    }
}

impl RateCoefficient for Arrhenius {
    fn k(&self, env: &EnvironmentContext) -> f64 {
        floor_zero(self.k_at(env.temperature))
    }
}

/// termolecular reaction written as bimolecular through the air number density:
/// k = arrhenius(T) * M
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThirdBody {
    pub arrhenius: Arrhenius,
}

impl RateCoefficient for ThirdBody {
    fn k(&self, env: &EnvironmentContext) -> f64 {
        floor_zero(self.arrhenius.k_at(env.temperature) * env.number_density)
    }
}

/// fixed coefficient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstantRate {
    pub k: f64,
}

impl RateCoefficient for ConstantRate {
    fn k(&self, _env: &EnvironmentContext) -> f64 {
        floor_zero(self.k)
    }
}

/// photolysis: j[index] * factor, j supplied by the photolysis model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Photolysis {
    pub index: usize,
    #[serde(default = "unit_factor")]
    pub factor: f64,
}

fn unit_factor() -> f64 {
    1.0
}

impl RateCoefficient for Photolysis {
    fn k(&self, env: &EnvironmentContext) -> f64 {
        // a missing j-value poisons the result and is reported by the assembler
        env.j(self.index).map_or(f64::NAN, |j| floor_zero(j * self.factor))
    }
    fn fixed_order(&self) -> Option<u32> {
        Some(1)
    }
    fn j_index(&self) -> Option<usize> {
        Some(self.index)
    }
}

/////////////////////////FALLOFF KINETICS///////////////////////////////////////////////////////////////
/// blend of the low- and high-pressure limits with broadening factor `fv`:
/// k = k_low / (1 + k_low/k_high) * fv^(1 / (1 + log10(k_low/k_high)^2))
pub fn jpl_blend(k_low: f64, k_high: f64, fv: f64) -> f64 {
    if k_low <= 0.0 || k_high <= 0.0 {
        return 0.0;
    }
    let ratio = k_low / k_high;
    let log_ratio = ratio.log10();
    let exponent = 1.0 / (1.0 + log_ratio * log_ratio);
    k_low / (1.0 + ratio) * fv.powf(exponent)
}

/// JPL third-body falloff.
/// k_low = a1 (300/T)^b1 exp(c1/T) M, k_high = a2 (300/T)^b2 exp(c2/T)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JplFalloff {
    pub low: Arrhenius,
    pub high: Arrhenius,
    pub fv: f64,
}

impl JplFalloff {
    pub fn new(low: Arrhenius, high: Arrhenius, fv: f64) -> Self {
        Self { low, high, fv }
    }
    /// low limit (a1, b1), temperature-independent high limit a2
    pub fn aba(a1: f64, b1: f64, a2: f64, fv: f64) -> Self {
        Self::new(Arrhenius::ab(a1, b1), Arrhenius::ab(a2, 0.0), fv)
    }
    pub fn abab(a1: f64, b1: f64, a2: f64, b2: f64, fv: f64) -> Self {
        Self::new(Arrhenius::ab(a1, b1), Arrhenius::ab(a2, b2), fv)
    }
    pub fn abcabc(a1: f64, b1: f64, c1: f64, a2: f64, b2: f64, c2: f64, fv: f64) -> Self {
        Self::new(Arrhenius::new(a1, b1, c1), Arrhenius::new(a2, b2, c2), fv)
    }
    /// low-pressure limit including M
    pub fn k_low(&self, env: &EnvironmentContext) -> f64 {
        self.low.k_at(env.temperature) * env.number_density
    }
    pub fn k_high(&self, env: &EnvironmentContext) -> f64 {
        self.high.k_at(env.temperature)
    }
}

impl RateCoefficient for JplFalloff {
    fn k(&self, env: &EnvironmentContext) -> f64 {
        jpl_blend(self.k_low(env), self.k_high(env), self.fv)
    }
}

/// backward rate of a thermal decomposition from the forward falloff rate and the equilibrium
/// constant: k_back = k_forward / k_eq
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JplEquilibrium {
    pub k_eq: Arrhenius,
    pub forward: JplFalloff,
}

impl JplEquilibrium {
    /// k_eq = a0 exp(c0/T), forward = falloff(a1, b1, a2, b2, fv)
    pub fn acabab(a0: f64, c0: f64, a1: f64, b1: f64, a2: f64, b2: f64, fv: f64) -> Self {
        Self {
            k_eq: Arrhenius::ac(a0, c0),
            forward: JplFalloff::abab(a1, b1, a2, b2, fv),
        }
    }
}

impl RateCoefficient for JplEquilibrium {
    fn k(&self, env: &EnvironmentContext) -> f64 {
        let k_eq = self.k_eq.k_at(env.temperature);
        if k_eq <= 0.0 {
            return 0.0;
        }
        self.forward.k(env) / k_eq
    }
}

/// centre broadening factor of the Troe form
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TroeCenter {
    Fixed(f64),
    /// Fc = (1-alpha) exp(-T/T3) + alpha exp(-T/T1) [+ exp(-T2/T)]
    Temperature {
        alpha: f64,
        t3: f64,
        t1: f64,
        t2: Option<f64>,
    },
}

impl TroeCenter {
    pub fn fc(&self, temp: f64) -> f64 {
        match *self {
            TroeCenter::Fixed(fc) => fc,
            TroeCenter::Temperature { alpha, t3, t1, t2 } => {
                let mut fc = (1.0 - alpha) * (-temp / t3).exp() + alpha * (-temp / t1).exp();
                if let Some(t2) = t2 {
                    fc += (-t2 / temp).exp();
                }
                fc
            }
        }
    }
}

/// IUPAC Troe falloff (used for PAN formation and decomposition):
/// k = k0 kinf F / (k0 + kinf), log10 F = log10 Fc / (1 + (log10(k0/kinf)/N)^2),
/// N = 0.75 - 1.27 log10 Fc
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TroeFalloff {
    pub low: Arrhenius,
    pub high: Arrhenius,
    pub center: TroeCenter,
}

impl TroeFalloff {
    /// k0 = a0 exp(c0/T) M, kinf = a1 exp(c1/T)
    pub fn acac(a0: f64, c0: f64, a1: f64, c1: f64, fc: f64) -> Self {
        Self {
            low: Arrhenius::ac(a0, c0),
            high: Arrhenius::ac(a1, c1),
            center: TroeCenter::Fixed(fc),
        }
    }
}

impl RateCoefficient for TroeFalloff {
    fn k(&self, env: &EnvironmentContext) -> f64 {
        let temp = env.temperature;
        let k0 = self.low.k_at(temp) * env.number_density;
        let kinf = self.high.k_at(temp);
        if k0 <= 0.0 || kinf <= 0.0 {
            return 0.0;
        }
        let fc = self.center.fc(temp);
        if fc <= 0.0 {
            return 0.0;
        }
        let log_fc = fc.log10();
        let n = 0.75 - 1.27 * log_fc;
        let x = (k0 / kinf).log10() / n;
        let f = 10.0_f64.powf(log_fc / (1.0 + x * x));
        k0 * kinf * f / (k0 + kinf)
    }
}

/////////////////////////HOx KINETICS///////////////////////////////////////////////////////////////
/// HO2 + HO2 with pressure and water-vapour enhancement
/// k = (a0 exp(c0/T) + a1 exp(c1/T) M) (1 + 1.4e-21 [H2O] exp(2200/T))
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ho2Ho2 {
    pub a0: f64,
    pub c0: f64,
    pub a1: f64,
    pub c1: f64,
}

impl RateCoefficient for Ho2Ho2 {
    fn k(&self, env: &EnvironmentContext) -> f64 {
        let t = env.temperature;
        let k0 = self.a0 * (self.c0 / t).exp();
        let k1 = self.a1 * (self.c1 / t).exp();
        let k = (k0 + k1 * env.number_density) * (1.0 + 1.4e-21 * env.h2o * (2200.0 / t).exp());
        floor_zero(k)
    }
}

/// OH + CO, sum of the HOCO falloff channel and the chemically activated H + CO2 channel.
/// `a0` is the low-pressure coefficient of the activated channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhCo {
    pub a0: f64,
}

impl RateCoefficient for OhCo {
    fn k(&self, env: &EnvironmentContext) -> f64 {
        let m = env.number_density;
        let t_over_300 = env.temperature / 300.0;
        let klo1 = 5.9e-33 * env.k300_over_t();
        let khi1 = 1.1e-12 * t_over_300.powf(1.3);
        let kco1 = jpl_blend(klo1 * m, khi1, 0.6);
        // chemically activated H + CO2 channel, suppressed at high pressure
        let klo2 = self.a0;
        let khi2 = 2.1e9 * t_over_300.powf(6.1);
        let xyrat2 = klo2 * m / khi2;
        let blog2 = xyrat2.log10();
        let fexp2 = 1.0 / (1.0 + blog2 * blog2);
        let kco2 = klo2 * 0.6_f64.powf(fexp2) / (1.0 + xyrat2);
        floor_zero(kco1 + kco2)
    }
}

/// OH + HNO3: k = k0 + k3 / (1 + k3/k2), k3 includes M
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhHno3 {
    pub a0: f64,
    pub c0: f64,
    pub a1: f64,
    pub c1: f64,
    pub a2: f64,
    pub c2: f64,
}

impl RateCoefficient for OhHno3 {
    fn k(&self, env: &EnvironmentContext) -> f64 {
        let t = env.temperature;
        let k0 = self.a0 * (self.c0 / t).exp();
        let k2 = self.a1 * (self.c1 / t).exp();
        let k3 = self.a2 * (self.c2 / t).exp() * env.number_density;
        if k2 <= 0.0 {
            return floor_zero(k0);
        }
        floor_zero(k0 + k3 / (1.0 + k3 / k2))
    }
}

/////////////////////////BRANCHING KINETICS///////////////////////////////////////////////////////////////
/// temperature-dependent branching: k = a0 exp(c0/T) / (1 + a1 exp(c1/T) (300/T)^b1)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureBranch {
    pub a0: f64,
    pub c0: f64,
    pub a1: f64,
    #[serde(default)]
    pub b1: f64,
    pub c1: f64,
}

impl TemperatureBranch {
    pub fn acac(a0: f64, c0: f64, a1: f64, c1: f64) -> Self {
        Self {
            a0,
            c0,
            a1,
            b1: 0.0,
            c1,
        }
    }
    pub fn acabc(a0: f64, c0: f64, a1: f64, b1: f64, c1: f64) -> Self {
        Self { a0, c0, a1, b1, c1 }
    }
}

impl RateCoefficient for TemperatureBranch {
    fn k(&self, env: &EnvironmentContext) -> f64 {
        let t = env.temperature;
        let k0 = Arrhenius::ac(self.a0, self.c0).k_at(t);
        let k1 = Arrhenius::new(self.a1, self.b1, self.c1).k_at(t);
        if 1.0 + k1 == 0.0 {
            return 0.0;
        }
        floor_zero(k0 / (1.0 + k1))
    }
}

/// CH3O2 + NO with a fixed methyl nitrate yield.
/// A: nitrate channel, B: CH3O + NO2 channel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ro2NoFixedYield {
    pub a0: f64,
    pub c0: f64,
    pub branch: Branch,
}

impl Ro2NoFixedYield {
    pub fn parent_k(&self, env: &EnvironmentContext) -> f64 {
        Arrhenius::ac(self.a0, self.c0).k_at(env.temperature)
    }
}

impl RateCoefficient for Ro2NoFixedYield {
    fn k(&self, env: &EnvironmentContext) -> f64 {
        floor_zero(self.branch.split(self.parent_k(env), MENO3_YIELD))
    }
}

/// Alkyl nitrate yield of RO2 + NO as a function of carbon number, temperature and air density
/// (Arey et al. 2001 correlation).
pub fn alkyl_nitrate_yield(n_carbon: f64, temp: f64, number_density: f64) -> f64 {
    let xxyn = 1.94e-22 * (0.97 * n_carbon).exp() * number_density;
    let yyyn = 0.826 * (300.0 / temp).powf(8.1);
    if xxyn <= 0.0 || yyyn <= 0.0 {
        return 0.0;
    }
    let aaa = (xxyn / yyyn).log10();
    let zzyn = 1.0 / (1.0 + aaa * aaa);
    let rarb = (xxyn / (1.0 + xxyn / yyyn)) * 0.411_f64.powf(zzyn);
    rarb / (1.0 + rarb)
}

/// RO2 + NO with carbon-number dependent nitrate yield.
/// A: RONO2 channel, k fyrno3; B: RO + NO2 channel, k (1 - fyrno3)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ro2NoNitrate {
    pub a0: f64,
    pub c0: f64,
    pub n_carbon: f64,
    pub branch: Branch,
}

impl Ro2NoNitrate {
    pub fn parent_k(&self, env: &EnvironmentContext) -> f64 {
        Arrhenius::ac(self.a0, self.c0).k_at(env.temperature)
    }
    pub fn nitrate_yield(&self, env: &EnvironmentContext) -> f64 {
        alkyl_nitrate_yield(self.n_carbon, env.temperature, env.number_density)
    }
}

impl RateCoefficient for Ro2NoNitrate {
    fn k(&self, env: &EnvironmentContext) -> f64 {
        floor_zero(
            self.branch
                .split(self.parent_k(env), self.nitrate_yield(env)),
        )
    }
}

/// RO2 + HO2 with carbon-number dependence.
/// A: ROOH channel, k0 (1 - exp(-0.245 n)); B: the remainder
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ro2Ho2 {
    pub a0: f64,
    pub c0: f64,
    pub n_carbon: f64,
    #[serde(default = "branch_a")]
    pub branch: Branch,
}

fn branch_a() -> Branch {
    Branch::A
}

impl Ro2Ho2 {
    pub fn parent_k(&self, env: &EnvironmentContext) -> f64 {
        Arrhenius::ac(self.a0, self.c0).k_at(env.temperature)
    }
}

impl RateCoefficient for Ro2Ho2 {
    fn k(&self, env: &EnvironmentContext) -> f64 {
        let fraction = 1.0 - (-0.245 * self.n_carbon).exp();
        floor_zero(self.branch.split(self.parent_k(env), fraction))
    }
}

/// isoprene-derived peroxy branching.
/// K0 = d0 exp(e0/T) exp(1e8/T^3), K1 = f0 exp(g0/T), K2 = c0 K0/(K0+K1),
/// A = a0 exp(b0/T) (1 - K2), B = a0 exp(b0/T) K2
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IsopreneBranch {
    pub a0: f64,
    pub b0: f64,
    pub c0: f64,
    pub d0: f64,
    pub e0: f64,
    pub f0: f64,
    pub g0: f64,
    pub branch: Branch,
}

impl IsopreneBranch {
    pub fn parent_k(&self, env: &EnvironmentContext) -> f64 {
        self.a0 * (self.b0 / env.temperature).exp()
    }
    fn k2(&self, temp: f64) -> f64 {
        let k0 = self.d0 * (self.e0 / temp).exp() * (1.0e8 / temp.powi(3)).exp();
        let k1 = self.f0 * (self.g0 / temp).exp();
        if k0 + k1 == 0.0 {
            return 0.0;
        }
        self.c0 * k0 / (k0 + k1)
    }
}

impl RateCoefficient for IsopreneBranch {
    fn k(&self, env: &EnvironmentContext) -> f64 {
        let k2 = self.k2(env.temperature);
        // K2 is the B fraction
        floor_zero(self.branch.split(self.parent_k(env), 1.0 - k2))
    }
}

/// GLYC + OH branching; A fraction = max(1 - 11.0729 exp(-T/73), 0)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlycOh {
    pub a0: f64,
    pub branch: Branch,
}

impl GlycOh {
    pub fn parent_k(&self, _env: &EnvironmentContext) -> f64 {
        self.a0
    }
}

impl RateCoefficient for GlycOh {
    fn k(&self, env: &EnvironmentContext) -> f64 {
        let frac = floor_zero(1.0 - 11.0729 * (-env.temperature / 73.0).exp());
        floor_zero(self.branch.split(self.parent_k(env), frac))
    }
}

/// HAC + OH branching; A fraction = max(1 - 23.7 exp(-T/60), 0)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HacOh {
    pub a0: f64,
    pub c0: f64,
    pub branch: Branch,
}

impl HacOh {
    pub fn parent_k(&self, env: &EnvironmentContext) -> f64 {
        Arrhenius::ac(self.a0, self.c0).k_at(env.temperature)
    }
}

impl RateCoefficient for HacOh {
    fn k(&self, env: &EnvironmentContext) -> f64 {
        let frac = floor_zero(1.0 - 23.7 * (-env.temperature / 60.0).exp());
        floor_zero(self.branch.split(self.parent_k(env), frac))
    }
}

/////////////////////////SULFUR AND DICARBONYL KINETICS///////////////////////////////////////////////////
/// DMS + OH addition channel: k = k0 M 0.2095 / (1 + k1 0.2095)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DmsOh {
    pub a0: f64,
    pub c0: f64,
    pub a1: f64,
    pub c1: f64,
}

impl RateCoefficient for DmsOh {
    fn k(&self, env: &EnvironmentContext) -> f64 {
        let t = env.temperature;
        let k0 = self.a0 * (self.c0 / t).exp();
        let k1 = self.a1 * (self.c1 / t).exp();
        floor_zero(k0 * env.o2() / (1.0 + k1 * 0.2095))
    }
}

/// GLYX + NO3 with O2 dependence: k = a0 exp(c0/T) (O2 + 3.5e18) / (2 O2 + 3.5e18)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlyxNo3 {
    pub a0: f64,
    pub c0: f64,
}

impl RateCoefficient for GlyxNo3 {
    fn k(&self, env: &EnvironmentContext) -> f64 {
        let o2 = env.o2();
        let k = self.a0 * (self.c0 / env.temperature).exp();
        floor_zero(k * (o2 + 3.5e18) / (2.0 * o2 + 3.5e18))
    }
}

/// epoxide + OH: k = a1 exp(e1/T) / (m1 M + 1)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpoxideOh {
    pub a1: f64,
    pub e1: f64,
    pub m1: f64,
}

impl RateCoefficient for EpoxideOh {
    fn k(&self, env: &EnvironmentContext) -> f64 {
        let denom = self.m1 * env.number_density + 1.0;
        if denom <= 0.0 {
            return 0.0;
        }
        floor_zero(self.a1 * (self.e1 / env.temperature).exp() / denom)
    }
}

/////////////////////////LINEAR-IN-T KINETICS///////////////////////////////////////////////////////////////
/// k = a0 (d0 + T e0) exp(-b0/T), clamped at 0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArrPlus {
    pub a0: f64,
    #[serde(default)]
    pub b0: f64,
    pub d0: f64,
    pub e0: f64,
}

impl RateCoefficient for ArrPlus {
    fn k(&self, env: &EnvironmentContext) -> f64 {
        let t = env.temperature;
        let mut k = self.a0 * (self.d0 + t * self.e0);
        if self.b0 != 0.0 {
            k *= (-self.b0 / t).exp();
        }
        floor_zero(k)
    }
}

/// tunnelling-corrected H-shift: k = a0 (d0 + T e0) exp(b0/T) exp(c0/T^3), clamped at 0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TunPlus {
    pub a0: f64,
    pub b0: f64,
    pub c0: f64,
    pub d0: f64,
    pub e0: f64,
}

impl RateCoefficient for TunPlus {
    fn k(&self, env: &EnvironmentContext) -> f64 {
        let t = env.temperature;
        let k = self.a0 * (self.d0 + t * self.e0);
        floor_zero(k * (self.b0 / t).exp() * (self.c0 / t.powi(3)).exp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn env(t: f64, m: f64) -> EnvironmentContext {
        EnvironmentContext::new(t, m)
    }

    #[test]
    fn test_arrhenius_zero_terms_are_bit_identical() {
        for &t in &[180.0, 250.0, 298.15, 320.0] {
            let e = env(t, 2.5e19);
            let a = 3.0e-12_f64;
            let c = -1500.0_f64;
            assert_eq!(Arrhenius::ac(a, c).k(&e), a * (c / t).exp());
            assert_eq!(Arrhenius::new(a, 0.0, c).k(&e), a * (c / t).exp());
            let b = 2.4_f64;
            assert_eq!(Arrhenius::ab(a, b).k(&e), a * (300.0 / t).powf(b));
            assert_eq!(Arrhenius::new(a, 0.0, 0.0).k(&e), a);
            assert_eq!(
                Arrhenius::new(a, b, c).k(&e),
                a * (c / t).exp() * (300.0 / t).powf(b)
            );
        }
    }

    #[test]
    fn test_ho2ho2_reference() {
        let e = env(298.15, 2.5e19).with_humidity(50.0, 4.0e17);
        let law = Ho2Ho2 {
            a0: 3.00e-13,
            c0: 460.0,
            a1: 2.10e-33,
            c1: 920.0,
        };
        let t = 298.15_f64;
        let expected = (3.00e-13 * (460.0 / t).exp() + 2.10e-33 * (920.0 / t).exp() * 2.5e19)
            * (1.0 + 1.4e-21 * 4.0e17 * (2200.0 / t).exp());
        assert_relative_eq!(law.k(&e), expected, max_relative = 1e-6);
        assert_relative_eq!(law.k(&e), 4.841450902498549e-12, max_relative = 1e-6);
    }

    #[test]
    fn test_jpl_falloff_reference() {
        let law = JplFalloff::abab(1.8e-30, 3.0, 2.8e-11, 0.0, 0.6);
        let e = env(250.0, 5.0e18);
        assert_relative_eq!(law.k(&e), 6.189698363275268e-12, max_relative = 1e-6);
    }

    #[test]
    fn test_jpl_falloff_limits_unbroadened() {
        let law = JplFalloff::abab(1.8e-30, 3.0, 2.8e-11, 0.0, 1.0);
        for &t in &[200.0, 250.0, 300.0] {
            let low = env(t, 1.0e5);
            assert_relative_eq!(law.k(&low), law.k_low(&low), max_relative = 1e-3);
            let high = env(t, 1.0e25);
            assert_relative_eq!(law.k(&high), law.k_high(&high), max_relative = 1e-3);
        }
    }

    #[test]
    fn test_jpl_falloff_limits_broadened() {
        // the broadening factor decays like 1/log10(k_low/k_high)^2
        let law = JplFalloff::abab(1.8e-30, 3.0, 2.8e-11, 0.0, 0.6);
        let low = env(250.0, 1.0e-5);
        assert_relative_eq!(law.k(&low), law.k_low(&low), max_relative = 1e-3);
        let high = env(250.0, 1.0e45);
        assert_relative_eq!(law.k(&high), law.k_high(&high), max_relative = 1e-3);
        // and the error shrinks monotonically towards both limits
        let mut last = f64::INFINITY;
        for m in [1.0e12, 1.0e9, 1.0e6, 1.0e3] {
            let e = env(250.0, m);
            let err = (law.k(&e) / law.k_low(&e) - 1.0).abs();
            assert!(err < last);
            last = err;
        }
    }

    #[test]
    fn test_troe_temperature_dependent_center() {
        let center = TroeCenter::Temperature {
            alpha: 0.4,
            t3: 280.0,
            t1: 1000.0,
            t2: Some(5000.0),
        };
        let law = TroeFalloff {
            low: Arrhenius::ac(2.7e-28, 0.0),
            high: Arrhenius::ac(1.2e-11, -200.0),
            center,
        };
        for &(t, m) in &[(220.0_f64, 5.0e18_f64), (250.0, 1.0e19), (298.15, 2.5e19)] {
            let k0 = 2.7e-28 * m;
            let kinf = 1.2e-11 * (-200.0 / t).exp();
            let fc = 0.6 * (-t / 280.0).exp() + 0.4 * (-t / 1000.0).exp() + (-5000.0 / t).exp();
            let n = 0.75 - 1.27 * fc.log10();
            let x = (k0 / kinf).log10() / n;
            let f = 10.0_f64.powf(fc.log10() / (1.0 + x * x));
            let expected = k0 * kinf * f / (k0 + kinf);
            assert_relative_eq!(law.k(&env(t, m)), expected, max_relative = 1e-12);
            // same as a fixed centre evaluated at this temperature
            let fixed = TroeFalloff {
                center: TroeCenter::Fixed(center.fc(t)),
                ..law
            };
            assert_eq!(law.k(&env(t, m)), fixed.k(&env(t, m)));
            assert!(law.k(&env(t, m)) < k0.min(kinf));
        }
        // without T2 the centre stays below one and decreases with temperature
        let no_t2 = TroeCenter::Temperature {
            alpha: 0.4,
            t3: 280.0,
            t1: 1000.0,
            t2: None,
        };
        assert!(no_t2.fc(300.0) < no_t2.fc(200.0));
        assert!(no_t2.fc(200.0) < 1.0);
    }

    #[test]
    fn test_nan_is_not_floored() {
        let e = env(250.0, 2.5e19);
        assert_eq!(floor_zero(-1.0), 0.0);
        assert!(floor_zero(f64::NAN).is_nan());
        assert!(ConstantRate { k: f64::NAN }.k(&e).is_nan());
        assert!(Arrhenius::ac(f64::NAN, -1500.0).k(&e).is_nan());
        assert_eq!(ConstantRate { k: -3.0 }.k(&e), 0.0);
    }

    #[test]
    fn test_equilibrium_consistency() {
        // PAN <=> MCO3 + NO2
        let back = JplEquilibrium::acabab(9.30e-29, 14000.0, 9.7e-29, 5.6, 9.3e-12, 1.5, 0.6);
        for &t in &[240.0, 280.0, 310.0] {
            let e = env(t, 2.0e19);
            let k_f = back.forward.k(&e);
            let k_b = back.k(&e);
            assert_relative_eq!(k_f / k_b, back.k_eq.k_at(t), max_relative = 1e-12);
        }
    }

    #[test]
    fn test_arrplus_and_tunplus_clamp() {
        let e = env(300.0, 2.5e19);
        // d0 + T e0 < 0
        let law = ArrPlus {
            a0: 1.0e-12,
            b0: 0.0,
            d0: 1.0,
            e0: -0.01,
        };
        assert_eq!(law.k(&e), 0.0);
        let law = TunPlus {
            a0: 1.0e10,
            b0: -8000.0,
            c0: 1.0e8,
            d0: -1.0,
            e0: 0.001,
        };
        assert_eq!(law.k(&e), 0.0);
        let law = ArrPlus {
            a0: 1.04e11,
            b0: 9746.0,
            d0: 1.1644,
            e0: -7.0485e-4,
        };
        let expected = 1.04e11 * (1.1644 - 300.0 * 7.0485e-4) * (-9746.0_f64 / 300.0).exp();
        assert_relative_eq!(law.k(&e), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_glyc_fraction_floor() {
        // at low T the raw fraction 1 - 11.07 exp(-T/73) is negative
        let e = env(150.0, 2.5e19);
        let a = GlycOh {
            a0: 8.0e-12,
            branch: Branch::A,
        };
        let b = GlycOh {
            a0: 8.0e-12,
            branch: Branch::B,
        };
        assert_eq!(a.k(&e), 0.0);
        assert_eq!(b.k(&e), 8.0e-12);
    }

    #[test]
    fn test_alkyl_nitrate_yield_grows_with_carbon_number() {
        let y3 = alkyl_nitrate_yield(3.0, 298.0, 2.5e19);
        let y6 = alkyl_nitrate_yield(6.0, 298.0, 2.5e19);
        assert!(y3 > 0.0 && y3 < y6 && y6 < 1.0);
    }

    #[test]
    fn test_troe_center() {
        let c = TroeCenter::Temperature {
            alpha: 0.5,
            t3: 300.0,
            t1: 1000.0,
            t2: None,
        };
        let expected = 0.5 * (-1.0_f64).exp() + 0.5 * (-0.3_f64).exp();
        assert_relative_eq!(c.fc(300.0), expected, max_relative = 1e-14);
        assert_eq!(TroeCenter::Fixed(0.3).fc(250.0), 0.3);
    }

    #[test]
    fn test_photolysis_missing_j_is_nan() {
        let law = Photolysis {
            index: 3,
            factor: 1.0,
        };
        assert!(law.k(&env(298.0, 2.5e19)).is_nan());
        let e = env(298.0, 2.5e19).with_j_values(vec![0.0, 0.0, 0.0, 5.0e-3]);
        assert_eq!(law.k(&e), 5.0e-3);
    }
}
