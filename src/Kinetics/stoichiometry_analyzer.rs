//! Parser of declarative reaction equations and the stoichiometric matrix.
//!
//! Equations are written as `"2 HO2 = H2O2 + O2"`: terms separated by `+`, sides by `=` or
//! `->`, each term an optional (possibly fractional) coefficient followed by a species name.
//! Repeated species on the same side are merged, so `"HO2 + HO2 = ..."` is second order in HO2.
//! Either side may be empty (pure sinks and zero-order sources), not both.
use crate::Kinetics::errors::BuildError;
use nalgebra::DMatrix;
use regex::Regex;
use std::sync::LazyLock;

static TERM: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| {
    Regex::new(r"^(?:(\d+(?:\.\d*)?|\.\d+)\s*)?([A-Za-z][A-Za-z0-9_]*)$")
});

/// one side of an equation: (species, coefficient) in order of first appearance
pub type Side = Vec<(String, f64)>;

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedEquation {
    pub reactants: Side,
    pub products: Side,
}

impl ParsedEquation {
    /// sum of reactant coefficients
    pub fn order(&self) -> f64 {
        self.reactants.iter().map(|(_, c)| c).sum()
    }

    pub fn species(&self) -> impl Iterator<Item = &str> {
        self.reactants
            .iter()
            .chain(self.products.iter())
            .map(|(s, _)| s.as_str())
    }

    pub fn reactant_coefficient(&self, species: &str) -> f64 {
        coefficient(&self.reactants, species)
    }

    pub fn product_coefficient(&self, species: &str) -> f64 {
        coefficient(&self.products, species)
    }
}

fn coefficient(side: &Side, species: &str) -> f64 {
    side.iter()
        .find(|(s, _)| s == species)
        .map_or(0.0, |(_, c)| *c)
}

fn malformed(reaction: &str, message: String) -> BuildError {
    BuildError::MalformedEquation {
        reaction: reaction.to_string(),
        message,
    }
}

fn split_sides<'a>(reaction: &str, equation: &'a str) -> Result<(&'a str, &'a str), BuildError> {
    let arrows: Vec<_> = ["->", "="]
        .iter()
        .filter_map(|a| equation.find(a).map(|i| (i, a.len())))
        .collect();
    let (pos, len) = match arrows.as_slice() {
        [] => return Err(malformed(reaction, format!("no '=' in '{}'", equation))),
        [(i, l)] => (*i, *l),
        // both spellings in one equation
        _ => {
            return Err(malformed(
                reaction,
                format!("more than one arrow in '{}'", equation),
            ));
        }
    };
    let (lhs, rhs) = (&equation[..pos], &equation[pos + len..]);
    if rhs.contains('=') || rhs.contains("->") {
        return Err(malformed(
            reaction,
            format!("more than one arrow in '{}'", equation),
        ));
    }
    Ok((lhs, rhs))
}

fn parse_side(reaction: &str, side: &str) -> Result<Side, BuildError> {
    let term_re = TERM
        .as_ref()
        .map_err(|e| malformed(reaction, e.to_string()))?;
    let mut out: Side = Vec::new();
    if side.trim().is_empty() {
        return Ok(out);
    }
    for term in side.split('+') {
        let term = term.trim();
        let caps = term_re
            .captures(term)
            .ok_or_else(|| malformed(reaction, format!("cannot read term '{}'", term)))?;
        let coeff = match caps.get(1) {
            Some(c) => c
                .as_str()
                .parse::<f64>()
                .map_err(|e| malformed(reaction, format!("coefficient in '{}': {}", term, e)))?,
            None => 1.0,
        };
        if coeff <= 0.0 {
            return Err(malformed(
                reaction,
                format!("coefficient of '{}' must be positive", term),
            ));
        }
        let name = caps.get(2).map_or("", |m| m.as_str()).to_string();
        match out.iter_mut().find(|(s, _)| *s == name) {
            Some((_, c)) => *c += coeff,
            None => out.push((name, coeff)),
        }
    }
    Ok(out)
}

/// parses `equation` of reaction `reaction` (the id is only used in error messages)
pub fn parse_equation(reaction: &str, equation: &str) -> Result<ParsedEquation, BuildError> {
    let (lhs, rhs) = split_sides(reaction, equation)?;
    let reactants = parse_side(reaction, lhs)?;
    let products = parse_side(reaction, rhs)?;
    if reactants.is_empty() && products.is_empty() {
        return Err(malformed(reaction, "both sides are empty".to_string()));
    }
    Ok(ParsedEquation {
        reactants,
        products,
    })
}

/// Net stoichiometric matrix, one row per species and one column per reaction:
/// products minus reactants.
pub fn stoich_matrix(species: &[String], equations: &[ParsedEquation]) -> DMatrix<f64> {
    let mut m = DMatrix::zeros(species.len(), equations.len());
    for (j, eq) in equations.iter().enumerate() {
        for (i, s) in species.iter().enumerate() {
            m[(i, j)] = eq.product_coefficient(s) - eq.reactant_coefficient(s);
        }
    }
    m
}
