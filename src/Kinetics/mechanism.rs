//! Right-hand side assembly of the chemical ODE system.
//!
//! `Mechanism::build` compiles a [`ReactionTable`] once: species names are resolved to state
//! indices, equations are parsed, catalytic divisors and fixed species are separated from the
//! scatter lists, and kinetic orders are checked against the rate laws. The compiled mechanism
//! is immutable and `Sync`, so one instance serves every grid cell and thread.
//!
//! Evaluation per reaction: coefficient in molec cm-3 basis -> unit conversion to the state
//! basis -> rate (mass action, or the rate law's own limited form) -> signed scatter.
use crate::Kinetics::environment::EnvironmentContext;
use crate::Kinetics::errors::{BuildError, EvaluationError};
use crate::Kinetics::rate_law::{RateCoefficient, RateForm, RateLaw};
use crate::Kinetics::reaction_table::{ReactionSet, ReactionSpec, ReactionTable, Species};
use crate::Kinetics::stoichiometry_analyzer::{ParsedEquation, parse_equation, stoich_matrix};
use crate::Kinetics::units::{StateBasis, UnitAdapter, molecules_per_unit};
use log::{debug, info, warn};
use nalgebra::{DMatrix, DVector};
use prettytable::{Cell, Row, Table};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MechanismOptions {
    /// reaction sets compiled into the mechanism
    pub enabled_sets: Vec<ReactionSet>,
    pub state_basis: StateBasis,
    /// relative step of the finite-difference Jacobian columns of limited rates
    pub fd_step: f64,
}

impl Default for MechanismOptions {
    fn default() -> Self {
        Self {
            enabled_sets: vec![
                ReactionSet::Gas,
                ReactionSet::Photolysis,
                ReactionSet::Heterogeneous,
            ],
            state_basis: StateBasis::Ppb,
            fd_step: 1.0e-7,
        }
    }
}

impl MechanismOptions {
    pub fn with_set(mut self, set: ReactionSet) -> Self {
        if !self.enabled_sets.contains(&set) {
            self.enabled_sets.push(set);
        }
        self
    }
    pub fn with_basis(mut self, basis: StateBasis) -> Self {
        self.state_basis = basis;
        self
    }
}

#[derive(Debug, Clone)]
struct CompiledReaction {
    id: String,
    equation: String,
    set: ReactionSet,
    rate: RateLaw,
    form: RateForm,
    /// mass-action factors excluding divisors: (species, integer power)
    factors: Vec<(usize, i32)>,
    divisors: Vec<usize>,
    /// (species, signed coefficient) written into dC/dt; no divisors, no fixed species
    scatter: Vec<(usize, f64)>,
    /// kinetic order of the coefficient
    order: u32,
}

/// sparse Jacobian in triplet form; duplicates are summed on conversion
#[derive(Debug, Clone, PartialEq)]
pub struct SparseJacobian {
    pub n: usize,
    pub triplets: Vec<(usize, usize, f64)>,
}

impl SparseJacobian {
    pub fn nnz(&self) -> usize {
        self.triplets.len()
    }

    pub fn to_dense(&self) -> DMatrix<f64> {
        let mut m = DMatrix::zeros(self.n, self.n);
        for &(i, j, v) in &self.triplets {
            m[(i, j)] += v;
        }
        m
    }
}

#[derive(Debug, Clone)]
pub struct Mechanism {
    species: Vec<Species>,
    index: HashMap<String, usize>,
    reactions: Vec<CompiledReaction>,
    parsed: Vec<ParsedEquation>,
    basis: StateBasis,
    /// (number of j-values needed, first reaction needing the last one)
    j_required: Option<(usize, String)>,
    fd_step: f64,
}

fn inconsistent(reaction: &str, message: String) -> BuildError {
    BuildError::InconsistentStoichiometry {
        reaction: reaction.to_string(),
        message,
    }
}

impl Mechanism {
    /////////////////////////////////BUILDING///////////////////////////////////////////
    pub fn build(table: &ReactionTable, options: &MechanismOptions) -> Result<Self, BuildError> {
        let mut index = HashMap::new();
        for (i, s) in table.species.iter().enumerate() {
            if index.insert(s.name.clone(), i).is_some() {
                return Err(BuildError::DuplicateSpecies(s.name.clone()));
            }
        }
        let mut ids = HashSet::new();
        let mut reactions = Vec::new();
        let mut parsed = Vec::new();
        let mut j_required: Option<(usize, String)> = None;
        let mut skipped = 0usize;
        for spec in &table.reactions {
            if !ids.insert(spec.id.as_str()) {
                return Err(BuildError::DuplicateReaction(spec.id.clone()));
            }
            if !options.enabled_sets.contains(&spec.set) {
                skipped += 1;
                debug!("reaction {} of set {} is disabled", spec.id, spec.set);
                continue;
            }
            let eq = parse_equation(&spec.id, &spec.equation)?;
            let compiled = Self::compile(spec.id.as_str(), &eq, spec, &index, table)?;
            if let Some(j) = spec.rate.j_index() {
                if j_required.as_ref().is_none_or(|(n, _)| j + 1 > *n) {
                    j_required = Some((j + 1, spec.id.clone()));
                }
            }
            reactions.push(compiled);
            parsed.push(eq);
        }
        if skipped > 0 {
            warn!(
                "{} reactions skipped by the enabled reaction sets {:?}",
                skipped, options.enabled_sets
            );
        }
        let mechanism = Self {
            species: table.species.clone(),
            index,
            reactions,
            parsed,
            basis: options.state_basis,
            j_required,
            fd_step: options.fd_step,
        };
        mechanism.check_reference_state()?;
        info!(
            "mechanism built: {} species, {} reactions, state basis {:?}",
            mechanism.n_species(),
            mechanism.n_reactions(),
            mechanism.basis
        );
        Ok(mechanism)
    }

    fn compile(
        id: &str,
        eq: &ParsedEquation,
        spec: &ReactionSpec,
        index: &HashMap<String, usize>,
        table: &ReactionTable,
    ) -> Result<CompiledReaction, BuildError> {
        let resolve = |name: &str| -> Result<usize, BuildError> {
            index
                .get(name)
                .copied()
                .ok_or_else(|| BuildError::UndeclaredSpecies {
                    reaction: id.to_string(),
                    species: name.to_string(),
                })
        };
        for name in eq.species() {
            resolve(name)?;
        }
        let mut divisors = Vec::new();
        let mut divisor_order = 0.0;
        for d in &spec.catalytic_divisors {
            let i = resolve(d)?;
            let (nu_r, nu_p) = (eq.reactant_coefficient(d), eq.product_coefficient(d));
            if nu_r == 0.0 || nu_r != nu_p {
                return Err(inconsistent(
                    id,
                    format!(
                        "catalytic divisor {} must appear with the same coefficient on both sides",
                        d
                    ),
                ));
            }
            divisor_order += nu_r;
            divisors.push(i);
        }
        let mut factors = Vec::new();
        for (name, nu) in &eq.reactants {
            if nu.fract() != 0.0 {
                return Err(inconsistent(
                    id,
                    format!("reactant {} has fractional coefficient {}", name, nu),
                ));
            }
            if spec.catalytic_divisors.contains(name) {
                continue;
            }
            factors.push((resolve(name)?, *nu as i32));
        }
        let order = (eq.order() - divisor_order) as u32;
        if let Some(expected) = spec.rate.fixed_order() {
            if expected != order {
                return Err(inconsistent(
                    id,
                    format!(
                        "{} rate law is order {}, the equation is order {}",
                        spec.rate.family(),
                        expected,
                        order
                    ),
                ));
            }
        }
        let form = spec.rate.form();
        if form == RateForm::Prelimited
            && (factors.len() != 2 || factors.iter().any(|(_, nu)| *nu != 1) || !divisors.is_empty())
        {
            return Err(inconsistent(
                id,
                "a limited uptake needs exactly two distinct reactants and no divisors".to_string(),
            ));
        }
        let mut net: Vec<(usize, f64)> = Vec::new();
        let mut add = |i: usize, v: f64| match net.iter_mut().find(|(j, _)| *j == i) {
            Some((_, c)) => *c += v,
            None => net.push((i, v)),
        };
        for (name, nu) in &eq.reactants {
            add(resolve(name)?, -nu);
        }
        for (name, nu) in &eq.products {
            add(resolve(name)?, *nu);
        }
        let scatter = net
            .into_iter()
            .filter(|(i, c)| *c != 0.0 && !divisors.contains(i) && !table.species[*i].fixed)
            .collect();
        Ok(CompiledReaction {
            id: id.to_string(),
            equation: spec.equation.clone(),
            set: spec.set,
            rate: spec.rate.clone(),
            form,
            factors,
            divisors,
            scatter,
            order,
        })
    }

    /// evaluates every coefficient once to catch parameters that cannot give a finite value
    fn check_reference_state(&self) -> Result<(), BuildError> {
        let n_j = self.j_required.as_ref().map_or(0, |(n, _)| *n);
        let env = EnvironmentContext::default().with_j_values(vec![0.0; n_j]);
        for r in &self.reactions {
            let k = r.rate.k(&env);
            if !k.is_finite() {
                return Err(BuildError::InvalidParameters {
                    reaction: r.id.clone(),
                    message: format!("coefficient {} at the reference state", k),
                });
            }
        }
        Ok(())
    }

    /////////////////////////////////QUERIES///////////////////////////////////////////
    pub fn n_species(&self) -> usize {
        self.species.len()
    }

    pub fn n_reactions(&self) -> usize {
        self.reactions.len()
    }

    pub fn species(&self) -> &[Species] {
        &self.species
    }

    /// state-vector slot of a species, for source-term coupling
    pub fn species_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn reaction_ids(&self) -> Vec<&str> {
        self.reactions.iter().map(|r| r.id.as_str()).collect()
    }

    pub fn reaction_order(&self, id: &str) -> Option<u32> {
        self.reactions.iter().find(|r| r.id == id).map(|r| r.order)
    }

    pub fn state_basis(&self) -> StateBasis {
        self.basis
    }

    /// net stoichiometry (rows species, columns compiled reactions), divisors cancel out
    pub fn stoichiometric_matrix(&self) -> DMatrix<f64> {
        let names: Vec<String> = self.species.iter().map(|s| s.name.clone()).collect();
        stoich_matrix(&names, &self.parsed)
    }

    /////////////////////////////////EVALUATION///////////////////////////////////////////
    fn check_inputs(&self, conc_len: usize, env: &EnvironmentContext) -> Result<(), EvaluationError> {
        if conc_len != self.n_species() {
            return Err(EvaluationError::StateLength {
                expected: self.n_species(),
                found: conc_len,
            });
        }
        if let Some((n, id)) = &self.j_required {
            if env.j_values.len() < *n {
                return Err(EvaluationError::MissingJValue {
                    reaction: id.clone(),
                    index: n - 1,
                    available: env.j_values.len(),
                });
            }
        }
        env.validate()
    }

    fn coefficient(r: &CompiledReaction, env: &EnvironmentContext) -> Result<f64, EvaluationError> {
        let k = r.rate.k(env);
        if !k.is_finite() {
            return Err(EvaluationError::NonFiniteRate {
                reaction: r.id.clone(),
                value: k,
            });
        }
        Ok(k)
    }

    /// reaction rate in state units per second
    fn rate_of(
        &self,
        r: &CompiledReaction,
        conc: &[f64],
        env: &EnvironmentContext,
        adapter: &UnitAdapter,
    ) -> Result<f64, EvaluationError> {
        let rate = match r.form {
            RateForm::MassAction => {
                let k = adapter.to_state(Self::coefficient(r, env)?, r.order);
                let mut rate = k;
                for &d in &r.divisors {
                    let c = conc[d];
                    // (k / [D]) [D]; c / c stays 1 for subnormal [D] and NaN for NaN
                    rate = if c == 0.0 { 0.0 } else { rate * (c / c) };
                }
                for &(i, nu) in &r.factors {
                    rate *= conc[i].powi(nu);
                }
                rate
            }
            RateForm::Prelimited => {
                let f = molecules_per_unit(adapter.state, env.number_density);
                let reactants = [conc[r.factors[0].0] * f, conc[r.factors[1].0] * f];
                let rate = r.rate.rate(env, &reactants);
                adapter.rate_from_mlc(rate)
            }
        };
        if !rate.is_finite() {
            return Err(EvaluationError::NonFiniteRate {
                reaction: r.id.clone(),
                value: rate,
            });
        }
        Ok(rate)
    }

    /// coefficients in the molecule cm-3 basis, one per compiled reaction
    pub fn rate_coefficients(&self, env: &EnvironmentContext) -> Result<Vec<f64>, EvaluationError> {
        self.check_inputs(self.n_species(), env)?;
        self.reactions
            .iter()
            .map(|r| Self::coefficient(r, env))
            .collect()
    }

    /// reaction rates in state units per second
    pub fn reaction_rates(
        &self,
        conc: &DVector<f64>,
        env: &EnvironmentContext,
    ) -> Result<Vec<f64>, EvaluationError> {
        self.check_inputs(conc.len(), env)?;
        let adapter = UnitAdapter::new(self.basis, env.number_density);
        let conc = conc.as_slice();
        self.reactions
            .iter()
            .map(|r| self.rate_of(r, conc, env, &adapter))
            .collect()
    }

    /// Writes dC/dt into `dcdt`. The system is autonomous, `_t` is accepted for the
    /// integrator's calling convention.
    pub fn rhs_into(
        &self,
        _t: f64,
        conc: &[f64],
        env: &EnvironmentContext,
        dcdt: &mut [f64],
    ) -> Result<(), EvaluationError> {
        self.check_inputs(conc.len(), env)?;
        if dcdt.len() != self.n_species() {
            return Err(EvaluationError::StateLength {
                expected: self.n_species(),
                found: dcdt.len(),
            });
        }
        dcdt.iter_mut().for_each(|v| *v = 0.0);
        let adapter = UnitAdapter::new(self.basis, env.number_density);
        for r in &self.reactions {
            let rate = self.rate_of(r, conc, env, &adapter)?;
            for &(i, nu) in &r.scatter {
                dcdt[i] += nu * rate;
            }
        }
        Ok(())
    }

    pub fn rhs(
        &self,
        t: f64,
        conc: &DVector<f64>,
        env: &EnvironmentContext,
    ) -> Result<DVector<f64>, EvaluationError> {
        let mut dcdt = DVector::zeros(self.n_species());
        self.rhs_into(t, conc.as_slice(), env, dcdt.as_mut_slice())?;
        Ok(dcdt)
    }

    /// rhs with reactions split across rayon workers; per-worker partial sums are reduced
    pub fn rhs_parallel(
        &self,
        _t: f64,
        conc: &DVector<f64>,
        env: &EnvironmentContext,
    ) -> Result<DVector<f64>, EvaluationError> {
        self.check_inputs(conc.len(), env)?;
        let n = self.n_species();
        let adapter = UnitAdapter::new(self.basis, env.number_density);
        let c = conc.as_slice();
        let sum = self
            .reactions
            .par_iter()
            .try_fold(
                || vec![0.0; n],
                |mut acc, r| {
                    let rate = self.rate_of(r, c, env, &adapter)?;
                    for &(i, nu) in &r.scatter {
                        acc[i] += nu * rate;
                    }
                    Ok::<_, EvaluationError>(acc)
                },
            )
            .try_reduce(
                || vec![0.0; n],
                |mut a, b| {
                    a.iter_mut().zip(b).for_each(|(x, y)| *x += y);
                    Ok(a)
                },
            )?;
        Ok(DVector::from_vec(sum))
    }

    /// independent grid cells evaluated in parallel
    pub fn rhs_columns(
        &self,
        t: f64,
        columns: &[(DVector<f64>, EnvironmentContext)],
    ) -> Result<Vec<DVector<f64>>, EvaluationError> {
        columns
            .par_iter()
            .map(|(conc, env)| self.rhs(t, conc, env))
            .collect()
    }

    /// adds external source terms (state units per second) after the chemistry
    pub fn inject_source_terms(
        &self,
        dcdt: &mut DVector<f64>,
        terms: &[(usize, f64)],
    ) -> Result<(), EvaluationError> {
        for &(i, v) in terms {
            if i >= dcdt.len() {
                return Err(EvaluationError::UnknownSpeciesIndex {
                    index: i,
                    n_species: dcdt.len(),
                });
            }
            dcdt[i] += v;
        }
        Ok(())
    }

    /// d(dC/dt)/dC; analytic for mass action, forward differences for limited rates
    pub fn jacobian(
        &self,
        _t: f64,
        conc: &DVector<f64>,
        env: &EnvironmentContext,
    ) -> Result<SparseJacobian, EvaluationError> {
        self.check_inputs(conc.len(), env)?;
        let adapter = UnitAdapter::new(self.basis, env.number_density);
        let c = conc.as_slice();
        let mut triplets = Vec::new();
        for r in &self.reactions {
            if r.scatter.is_empty() {
                continue;
            }
            match r.form {
                RateForm::MassAction => {
                    let k = adapter.to_state(Self::coefficient(r, env)?, r.order);
                    if r.divisors.iter().any(|&d| c[d] == 0.0) {
                        continue;
                    }
                    for (pos, &(j, nu)) in r.factors.iter().enumerate() {
                        let mut d = k * nu as f64 * c[j].powi(nu - 1);
                        for (other, &(i, nu_i)) in r.factors.iter().enumerate() {
                            if other != pos {
                                d *= c[i].powi(nu_i);
                            }
                        }
                        if d == 0.0 {
                            continue;
                        }
                        for &(i, nu_s) in &r.scatter {
                            triplets.push((i, j, nu_s * d));
                        }
                    }
                }
                RateForm::Prelimited => {
                    let base = self.rate_of(r, c, env, &adapter)?;
                    let mut shifted = c.to_vec();
                    for &(j, _) in &r.factors {
                        let h = self.fd_step * c[j].abs().max(1.0e-12);
                        shifted[j] = c[j] + h;
                        let d = (self.rate_of(r, &shifted, env, &adapter)? - base) / h;
                        shifted[j] = c[j];
                        if d == 0.0 {
                            continue;
                        }
                        for &(i, nu_s) in &r.scatter {
                            triplets.push((i, j, nu_s * d));
                        }
                    }
                }
            }
        }
        Ok(SparseJacobian {
            n: self.n_species(),
            triplets,
        })
    }

    /////////////////////////////////REPORTING///////////////////////////////////////////
    /// table of reactions; with an environment the coefficients are evaluated too
    pub fn pretty_print(&self, env: Option<&EnvironmentContext>) {
        let mut table = Table::new();
        let mut header = vec![
            Cell::new("id"),
            Cell::new("equation"),
            Cell::new("rate law"),
            Cell::new("set"),
            Cell::new("order"),
        ];
        if env.is_some() {
            header.push(Cell::new("k [molec cm-3 basis]"));
        }
        table.add_row(Row::new(header));
        for r in &self.reactions {
            let mut row = vec![
                Cell::new(&r.id),
                Cell::new(&r.equation),
                Cell::new(r.rate.family()),
                Cell::new(&r.set.to_string()),
                Cell::new(&r.order.to_string()),
            ];
            if let Some(env) = env {
                let k = r.rate.k(env);
                row.push(Cell::new(&format!("{:.4e}", k)));
            }
            table.add_row(Row::new(row));
        }
        table.printstd();
    }
}
