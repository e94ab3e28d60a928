//! The balancing pipeline, from raw text to balanced equation.
//!
//! Every stage is a pure function over the previous stage's output:
//! validation and term splitting, formula parsing into the signed
//! stoichiometric matrix, fraction-free row reduction, echelon shape
//! validation, and smallest-solution extraction. The entry points here just
//! compose those stages and differ in how much of the intermediate state they
//! hand back.

use crate::error::BalanceError;
use crate::format;
use crate::math::{
    StoichiometricMatrix, diophantine_row_reduce, extract_smallest_solution, validate_echelon,
};
use crate::types::{BalanceTrace, ChemicalEquation, Solution};
use num_bigint::BigUint;
use std::collections::HashMap;

/// Runs the full pipeline and returns every intermediate artifact.
///
/// # Errors
///
/// Returns [`BalanceError::Syntax`] if the text fails validation or formula
/// parsing, and [`BalanceError::Structural`] if the reduced system is not a
/// single well-posed reaction.
pub fn balance_trace(raw: &str) -> Result<BalanceTrace, BalanceError> {
    let equation = ChemicalEquation::parse(raw)?;
    let stoich = StoichiometricMatrix::build(&equation)?;
    let (atoms, matrix) = stoich.into_parts();

    let reduced = diophantine_row_reduce(&matrix);
    validate_echelon(&reduced)?;
    let solution = extract_smallest_solution(&reduced)?;

    Ok(BalanceTrace {
        equation,
        atoms,
        matrix,
        reduced,
        solution,
    })
}

/// Computes the smallest positive integer coefficients for an equation.
///
/// Coefficients come back in column order: one per reactant term, then one
/// per product term, as written.
///
/// # Errors
///
/// See [`balance_trace`].
///
/// # Examples
///
/// ```
/// use baleq::find_balancing_coefficients;
/// use num_bigint::BigUint;
///
/// let solution = find_balancing_coefficients("H2 + O2 : H2O").unwrap();
/// let expected: Vec<BigUint> = [2u64, 1, 2].iter().map(|&v| v.into()).collect();
/// assert_eq!(solution.coefficients, expected);
/// ```
pub fn find_balancing_coefficients(raw: &str) -> Result<Solution, BalanceError> {
    Ok(balance_trace(raw)?.solution)
}

/// Balances an equation and returns a term-to-coefficient mapping.
///
/// See [`format::coefficient_map`] for how textually identical terms are
/// handled.
///
/// # Errors
///
/// See [`balance_trace`].
pub fn solution_coefficients(raw: &str) -> Result<HashMap<String, BigUint>, BalanceError> {
    let trace = balance_trace(raw)?;
    Ok(format::coefficient_map(&trace.equation, &trace.solution))
}

/// Balances an equation and renders the result as a string.
///
/// # Errors
///
/// See [`balance_trace`].
///
/// # Examples
///
/// ```
/// use baleq::balance_equation;
///
/// let balanced = balance_equation("HCl + NaHCO3 : NaCl + H2O + CO2").unwrap();
/// assert_eq!(balanced, "HCl + NaHCO3 : NaCl + H2O + CO2");
///
/// let balanced = balance_equation("H2 + O2 : H2O").unwrap();
/// assert_eq!(balanced, "2 H2 + O2 : 2 H2O");
/// ```
pub fn balance_equation(raw: &str) -> Result<String, BalanceError> {
    let trace = balance_trace(raw)?;
    Ok(format::format_equation(&trace.equation, &trace.solution))
}
