//! Read-only renderings of a balancing solution.
//!
//! Both views are pure functions of an equation and its solution: the
//! balanced equation string, and a term-to-coefficient mapping.

use crate::types::{ChemicalEquation, SIDE_SEPARATOR, Solution};
use num_bigint::BigUint;
use num_traits::One;
use std::collections::HashMap;

/// Renders the balanced equation as a string.
///
/// Terms keep their source spelling and order; each is prefixed by its
/// coefficient and a space unless the coefficient is 1, terms are joined by
/// `" + "`, and the sides are joined by the `:` separator with surrounding
/// spaces.
///
/// # Examples
///
/// ```
/// use baleq::{ChemicalEquation, find_balancing_coefficients, format};
///
/// let equation = ChemicalEquation::parse("H2 + O2 : H2O").unwrap();
/// let solution = find_balancing_coefficients("H2 + O2 : H2O").unwrap();
/// assert_eq!(format::format_equation(&equation, &solution), "2 H2 + O2 : 2 H2O");
/// ```
pub fn format_equation(equation: &ChemicalEquation, solution: &Solution) -> String {
    let (reactant_coefs, product_coefs) = solution
        .coefficients
        .split_at(equation.reactants().len());

    format!(
        "{} {} {}",
        format_side(equation.reactants(), reactant_coefs),
        SIDE_SEPARATOR,
        format_side(equation.products(), product_coefs),
    )
}

fn format_side(terms: &[String], coefficients: &[BigUint]) -> String {
    terms
        .iter()
        .zip(coefficients)
        .map(|(term, coefficient)| {
            if coefficient.is_one() {
                term.clone()
            } else {
                format!("{coefficient} {term}")
            }
        })
        .collect::<Vec<String>>()
        .join(" + ")
}

/// Builds a term-to-coefficient mapping for the solution.
///
/// If the identical formula string appears more than once in the equation,
/// later entries overwrite earlier ones; callers that must distinguish
/// duplicate terms should use the positional [`Solution`] vector instead.
pub fn coefficient_map(
    equation: &ChemicalEquation,
    solution: &Solution,
) -> HashMap<String, BigUint> {
    equation
        .terms()
        .zip(&solution.coefficients)
        .map(|(term, coefficient)| (term.to_string(), coefficient.clone()))
        .collect()
}
