use super::matrix::IntMatrix;
use crate::error::StructuralError;
use crate::types::Solution;
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Signed};

/// Computes the smallest positive integer solution of a validated reduced
/// matrix.
///
/// Each retained row encodes `pivot * x_pivot + last * x_free = 0`, so only
/// the (pivot, last-column) pair of every row matters. All rows are scaled so
/// their last-column coefficient equals `-L`, where `L` is the LCM of the
/// last-column magnitudes; the overall LCM `M` of the scaled pivots and `L`
/// then gives `x_free = M / L` and `x_pivot = M / scaled_pivot` per row. The
/// resulting vector has gcd 1 by construction.
///
/// The caller must have run [`validate_echelon`](super::validate_echelon)
/// first; that guarantees one row per non-last column, in column order.
///
/// # Errors
///
/// Returns [`StructuralError::NonPositiveCoefficient`] if any entry of the
/// computed vector fails to be a positive integer, which happens when the
/// reaction as written can only balance with zero or negative coefficients.
pub fn extract_smallest_solution(matrix: &IntMatrix) -> Result<Solution, StructuralError> {
    let cols = matrix.col_count();
    let last = cols - 1;
    debug_assert_eq!(matrix.row_count(), cols - 1, "matrix must pass echelon validation");

    let pairs: Vec<(BigInt, BigInt)> = matrix
        .rows()
        .enumerate()
        .map(|(r, row)| {
            let pivot = matrix
                .pivot_of(r)
                .expect("zero rows are pruned before extraction");
            (row[pivot].clone(), row[last].clone())
        })
        .collect();

    // Scale every row so its free-variable coefficient becomes -L.
    let free_scale = pairs
        .iter()
        .fold(BigInt::one(), |acc, (_, l)| acc.lcm(l));
    let scaled_pivots: Vec<BigInt> = pairs
        .iter()
        .map(|(pivot, l)| pivot * (-&free_scale / l))
        .collect();

    let overall = scaled_pivots
        .iter()
        .fold(free_scale.clone(), |acc, pivot| acc.lcm(pivot));

    let mut coefficients = Vec::with_capacity(cols);
    for (column, pivot) in scaled_pivots.iter().enumerate() {
        coefficients.push(into_positive(&overall / pivot, column)?);
    }
    coefficients.push(into_positive(&overall / &free_scale, last)?);

    Ok(Solution { coefficients })
}

fn into_positive(value: BigInt, column: usize) -> Result<BigUint, StructuralError> {
    if value.is_positive() {
        Ok(value
            .to_biguint()
            .expect("a positive BigInt always has a magnitude"))
    } else {
        Err(StructuralError::NonPositiveCoefficient { column })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coefficients(matrix: IntMatrix) -> Vec<u64> {
        extract_smallest_solution(&matrix)
            .unwrap()
            .coefficients
            .iter()
            .map(|c| u64::try_from(c).unwrap())
            .collect()
    }

    #[test]
    fn test_extracts_water_synthesis() {
        let matrix = IntMatrix::from_i64_rows(&[&[1, 0, -1], &[0, 2, -1]]);
        assert_eq!(coefficients(matrix), [2, 1, 2]);
    }

    #[test]
    fn test_extracts_trivial_all_ones() {
        let matrix = IntMatrix::from_i64_rows(&[&[1, 0, -1], &[0, 1, -1]]);
        assert_eq!(coefficients(matrix), [1, 1, 1]);
    }

    #[test]
    fn test_extracts_mixed_last_column_scales() {
        // x0 = 2 x2 / 3, x1 = 2 x2 / 2: solution [2, 3, 3] scaled to gcd 1.
        let matrix = IntMatrix::from_i64_rows(&[&[3, 0, -2], &[0, 2, -2]]);
        assert_eq!(coefficients(matrix), [2, 3, 3]);
    }

    #[test]
    fn test_result_has_gcd_one() {
        let matrix = IntMatrix::from_i64_rows(&[&[2, 0, -4], &[0, 2, -4]]);
        assert_eq!(coefficients(matrix), [2, 2, 1]);
    }

    #[test]
    fn test_rejects_sign_locked_system() {
        // Both variables would need opposite signs to satisfy the rows.
        let matrix = IntMatrix::from_i64_rows(&[&[1, 0, 1], &[0, 1, -1]]);
        let result = extract_smallest_solution(&matrix);
        assert_eq!(
            result,
            Err(StructuralError::NonPositiveCoefficient { column: 0 })
        );
    }
}
