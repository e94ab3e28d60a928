use super::matrix::IntMatrix;
use crate::error::StructuralError;
use num_traits::{Signed, Zero};

/// Checks that a reduced matrix has the shape required for unique solution
/// extraction.
///
/// A matrix passes when, after zero-row pruning:
///
/// - every retained row has exactly two nonzero entries, and the second one
///   sits in the last column, relating one pivot variable to the final free
///   variable;
/// - every column except the last has exactly one nonzero entry, so each
///   pivot variable is uniquely determined;
/// - pivot columns strictly increase row over row;
/// - every pivot (first nonzero entry of a row) is positive.
///
/// A violation means the equation, as written, is not a single well-posed
/// reaction: the system is contradictory, underdetermined, or overdetermined.
/// That is reported as a [`StructuralError`], deliberately distinct from the
/// syntax errors of the textual front end.
pub fn validate_echelon(matrix: &IntMatrix) -> Result<(), StructuralError> {
    if matrix.row_count() == 0 || matrix.col_count() < 2 {
        return Err(StructuralError::EmptySystem);
    }

    let last = matrix.col_count() - 1;
    for (r, row) in matrix.rows().enumerate() {
        let nonzeros: Vec<usize> = row
            .iter()
            .enumerate()
            .filter(|(_, v)| !v.is_zero())
            .map(|(i, _)| i)
            .collect();
        // A row coupling its pivot to anything but the free column cannot be
        // solved by last-column projection.
        let well_formed = nonzeros.is_empty() || (nonzeros.len() == 2 && nonzeros[1] == last);
        if !well_formed {
            return Err(StructuralError::RowShape { row: r });
        }
    }

    for column in 0..matrix.col_count() - 1 {
        let nonzeros = matrix.rows().filter(|row| !row[column].is_zero()).count();
        if nonzeros != 1 {
            return Err(StructuralError::ColumnShape { column });
        }
    }

    let mut previous_pivot: Option<usize> = None;
    for (r, row) in matrix.rows().enumerate() {
        let Some(pivot) = row.iter().position(|v| !v.is_zero()) else {
            continue;
        };
        if previous_pivot.is_some_and(|p| pivot <= p) {
            return Err(StructuralError::EchelonOrder { row: r });
        }
        previous_pivot = Some(pivot);
        if row[pivot].is_negative() {
            return Err(StructuralError::NegativePivot { row: r });
        }
    }

    Ok(())
}
