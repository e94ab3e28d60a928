//! This module contains the textual front end of the balancing pipeline.
//!
//! It includes the equation grammar validator, which gates all further
//! processing, and the recursive-descent chemical formula parser, which turns
//! a single term into an immutable tree of atoms and parenthesized groups.

/// Recursive-descent parser for single chemical formulas.
///
/// This module turns a term such as `(NH4)3PO4` into a tree of atom and group
/// nodes and folds that tree into an atom-to-count mapping. Nested groups and
/// trailing multipliers are resolved here; grammar-level concerns (legal
/// characters, separators, term joining) belong to [`validate`].
pub mod formula;

/// Grammar validation for raw equation strings.
///
/// This module checks an unparsed equation against the equation grammar
/// before any numeric processing happens. Checks are ordered and fail fast;
/// every rejection names the offending character or term.
pub mod validate;

pub use formula::{Formula, parse_formula};
pub use validate::validate_equation;
