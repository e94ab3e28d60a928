use crate::error::SyntaxError;
use crate::parser::formula;
use crate::types::ChemicalEquation;
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::ops::{Index, IndexMut};

/// A dense matrix of arbitrary-precision integers.
///
/// This is the working representation for the whole reduction pipeline.
/// Entries are `BigInt` because LCM-based elimination can grow intermediate
/// magnitudes superlinearly with the number of elimination steps; silent
/// overflow would corrupt results, so fixed-width integers are not an option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntMatrix {
    rows: Vec<Vec<BigInt>>,
    cols: usize,
}

impl IntMatrix {
    /// Creates a matrix of zeros with the given dimensions.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows: (0..rows).map(|_| vec![BigInt::zero(); cols]).collect(),
            cols,
        }
    }

    /// Creates a matrix from explicit rows.
    ///
    /// All rows must have the same length; `cols` may only be zero when there
    /// are no rows.
    pub fn from_rows(rows: Vec<Vec<BigInt>>) -> Self {
        let cols = rows.first().map_or(0, Vec::len);
        debug_assert!(rows.iter().all(|row| row.len() == cols));
        Self { rows, cols }
    }

    /// Builds a matrix from `i64` rows, mostly useful in tests.
    pub fn from_i64_rows(rows: &[&[i64]]) -> Self {
        Self::from_rows(
            rows.iter()
                .map(|row| row.iter().map(|&v| BigInt::from(v)).collect())
                .collect(),
        )
    }

    /// Returns the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of columns.
    pub fn col_count(&self) -> usize {
        self.cols
    }

    /// Returns one row as a slice.
    pub fn row(&self, index: usize) -> &[BigInt] {
        &self.rows[index]
    }

    /// Iterates over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[BigInt]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Swaps two rows in place.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        self.rows.swap(a, b);
    }

    /// Drops every row whose entries are all zero.
    pub fn retain_nonzero_rows(&mut self) {
        self.rows.retain(|row| row.iter().any(|v| !v.is_zero()));
    }

    /// Index of the first nonzero entry of a row, if any.
    pub fn pivot_of(&self, row: usize) -> Option<usize> {
        self.rows[row].iter().position(|v| !v.is_zero())
    }
}

impl Index<(usize, usize)> for IntMatrix {
    type Output = BigInt;

    fn index(&self, (row, col): (usize, usize)) -> &BigInt {
        &self.rows[row][col]
    }
}

impl IndexMut<(usize, usize)> for IntMatrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut BigInt {
        &mut self.rows[row][col]
    }
}

impl fmt::Display for IntMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .rows
            .iter()
            .flatten()
            .map(|v| v.to_string().len())
            .max()
            .unwrap_or(1);
        for row in &self.rows {
            write!(f, "[")?;
            for (i, value) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{value:>width$}")?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

/// The signed stoichiometric matrix of a chemical equation.
///
/// Rows are atoms in sorted order; columns are terms, reactants first and
/// products second. A reactant entry is the atom's count in that term, a
/// product entry is the negated count, so the balanced equation is exactly
/// the null space of this matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoichiometricMatrix {
    atoms: Vec<String>,
    entries: IntMatrix,
}

impl StoichiometricMatrix {
    /// Builds the matrix for a validated equation.
    ///
    /// Every term is parsed into its atom counts; the row index is the sorted
    /// union of all atoms seen anywhere in the equation, and atoms missing
    /// from a term contribute a zero entry.
    ///
    /// # Errors
    ///
    /// Returns a [`SyntaxError`] if a term fails formula parsing. For input
    /// that passed [`ChemicalEquation::parse`] this does not happen, but the
    /// builder does not rely on it.
    pub fn build(equation: &ChemicalEquation) -> Result<Self, SyntaxError> {
        let term_counts: Vec<BTreeMap<String, BigUint>> = equation
            .terms()
            .map(|term| Ok(formula::parse_formula(term)?.atom_counts()))
            .collect::<Result<_, SyntaxError>>()?;

        let atoms: Vec<String> = term_counts
            .iter()
            .flat_map(|counts| counts.keys().cloned())
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect();

        let reactant_count = equation.reactants().len();
        let mut entries = IntMatrix::zeros(atoms.len(), term_counts.len());
        for (row, atom) in atoms.iter().enumerate() {
            for (col, counts) in term_counts.iter().enumerate() {
                let count = counts
                    .get(atom)
                    .map(|c| BigInt::from(c.clone()))
                    .unwrap_or_default();
                entries[(row, col)] = if col < reactant_count { count } else { -count };
            }
        }

        Ok(Self { atoms, entries })
    }

    /// Returns the atoms in matrix row order.
    pub fn atoms(&self) -> &[String] {
        &self.atoms
    }

    /// Returns the matrix entries.
    pub fn entries(&self) -> &IntMatrix {
        &self.entries
    }

    /// Consumes the builder output into its atom list and entry matrix.
    pub fn into_parts(self) -> (Vec<String>, IntMatrix) {
        (self.atoms, self.entries)
    }
}
