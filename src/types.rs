//! This module defines the core types used in the baleq library for representing
//! chemical equations and balancing results.
//!
//! It includes the `ChemicalEquation` struct, which holds the validated,
//! term-split form of an equation, the `Solution` struct carrying the smallest
//! positive integer coefficients, and the `BalanceTrace` struct exposing every
//! intermediate artifact of the balancing pipeline as plain data for external
//! inspection.

use crate::error::SyntaxError;
use crate::math::matrix::IntMatrix;
use crate::parser::validate;
use num_bigint::BigUint;

/// The character separating the reactant side from the product side.
pub const SIDE_SEPARATOR: char = ':';

/// A validated chemical equation, split into its reactant and product terms.
///
/// Term order is preserved exactly as written: coefficient output order maps
/// one-to-one onto reactant terms followed by product terms. An instance can
/// only be obtained through [`ChemicalEquation::parse`], so holding one is
/// proof that the source text passed grammar validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChemicalEquation {
    reactants: Vec<String>,
    products: Vec<String>,
}

impl ChemicalEquation {
    /// Validates and splits a raw equation string.
    ///
    /// The text is first checked against the full equation grammar (legal
    /// characters, exactly one `:` separator, well-formed terms); only then is
    /// it split into sides and terms. Empty fragments produced by stray `+`
    /// signs are ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`SyntaxError`] describing the first grammar violation found.
    ///
    /// # Examples
    ///
    /// ```
    /// use baleq::ChemicalEquation;
    ///
    /// let equation = ChemicalEquation::parse("NH3 + H3PO4 : (NH4)3PO4").unwrap();
    /// assert_eq!(equation.reactants(), ["NH3", "H3PO4"]);
    /// assert_eq!(equation.products(), ["(NH4)3PO4"]);
    /// ```
    pub fn parse(raw: &str) -> Result<Self, SyntaxError> {
        validate::validate_equation(raw)?;

        let (reactants_str, products_str) = raw
            .split_once(SIDE_SEPARATOR)
            .expect("separator presence checked by validation");

        Ok(Self {
            reactants: split_terms(reactants_str),
            products: split_terms(products_str),
        })
    }

    /// Returns the reactant terms in source order.
    pub fn reactants(&self) -> &[String] {
        &self.reactants
    }

    /// Returns the product terms in source order.
    pub fn products(&self) -> &[String] {
        &self.products
    }

    /// Returns all terms in column order: reactants first, then products.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.reactants
            .iter()
            .chain(self.products.iter())
            .map(String::as_str)
    }

    /// Returns the total number of terms (matrix columns).
    pub fn term_count(&self) -> usize {
        self.reactants.len() + self.products.len()
    }
}

fn split_terms(side: &str) -> Vec<String> {
    side.split('+')
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect()
}

/// The smallest positive integer solution of a balancing request.
///
/// Coefficients are ordered by matrix column: one per reactant term in source
/// order, then one per product term in source order. By construction all
/// entries are positive and their greatest common divisor is 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// The balancing coefficients, reactants first, then products.
    pub coefficients: Vec<BigUint>,
}

/// Every intermediate artifact of a successful balancing run.
///
/// This is the diagnostic view of the pipeline: each field is the output of
/// one stage, untouched by the next. The library itself never writes any of
/// this anywhere; rendering and persistence are the caller's business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceTrace {
    /// The validated, term-split equation.
    pub equation: ChemicalEquation,
    /// The sorted, deduplicated set of atoms, in matrix row order.
    pub atoms: Vec<String>,
    /// The signed stoichiometric matrix before reduction.
    pub matrix: IntMatrix,
    /// The matrix after fraction-free row reduction and zero-row pruning.
    pub reduced: IntMatrix,
    /// The extracted smallest positive integer solution.
    pub solution: Solution,
}
