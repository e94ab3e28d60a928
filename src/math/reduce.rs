use super::matrix::IntMatrix;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};

/// Reduces a homogeneous linear Diophantine system matrix to integer
/// row-echelon form.
///
/// This is Gaussian elimination with LCM-scaled row combinations instead of
/// division, so every intermediate value stays an integer. For each pivot
/// column the diagonal entry is used as the pivot, swapping in the first row
/// below when the diagonal is zero; a column with no available pivot is
/// skipped rather than treated as an error. Each eliminated row `i` becomes
/// `(L / m[i][k]) * row_i - (L / m[k][k]) * row_k` with
/// `L = lcm(m[k][k], m[i][k])`, which zeroes column `k` of row `i` without
/// introducing fractions.
///
/// After elimination every surviving row is divided by the gcd of its
/// entries, negated if its pivot (first nonzero entry) is negative, and rows
/// that became entirely zero are dropped. The function is total: degenerate
/// inputs produce degenerate shapes for the echelon validator to reject, not
/// errors here.
pub fn diophantine_row_reduce(matrix: &IntMatrix) -> IntMatrix {
    let mut m = matrix.clone();
    let rows = m.row_count();
    let cols = m.col_count();

    for k in 0..rows.min(cols) {
        if m[(k, k)].is_zero() {
            match (k + 1..rows).find(|&r| !m[(r, k)].is_zero()) {
                Some(r) => m.swap_rows(k, r),
                None => continue,
            }
        }

        let pivot_row: Vec<BigInt> = m.row(k).to_vec();
        let pivot = pivot_row[k].clone();

        for i in 0..rows {
            if i == k || m[(i, k)].is_zero() {
                continue;
            }
            let scale = pivot.lcm(&m[(i, k)]);
            let own_factor = &scale / &m[(i, k)];
            let pivot_factor = &scale / &pivot;
            for j in 0..cols {
                m[(i, j)] = &own_factor * &m[(i, j)] - &pivot_factor * &pivot_row[j];
            }
        }
    }

    normalize_rows(&mut m);
    m.retain_nonzero_rows();
    m
}

/// Divides each nonzero row by the gcd of its entries and flips its sign if
/// the pivot is negative, the canonical positive-pivot convention.
fn normalize_rows(m: &mut IntMatrix) {
    for r in 0..m.row_count() {
        let Some(pivot_col) = m.pivot_of(r) else {
            continue;
        };
        let divisor = m
            .row(r)
            .iter()
            .fold(BigInt::zero(), |acc, value| acc.gcd(value));
        let negate = m[(r, pivot_col)].is_negative();
        for j in 0..m.col_count() {
            let mut value = &m[(r, j)] / &divisor;
            if negate {
                value = -value;
            }
            m[(r, j)] = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_simple_combustion() {
        let matrix = IntMatrix::from_i64_rows(&[&[2, 0, -2], &[0, 2, -1]]);
        let reduced = diophantine_row_reduce(&matrix);

        let expected = IntMatrix::from_i64_rows(&[&[1, 0, -1], &[0, 2, -1]]);
        assert_eq!(reduced, expected);
    }

    #[test]
    fn test_reduce_handles_zero_diagonal_by_swapping() {
        let matrix = IntMatrix::from_i64_rows(&[&[0, 1, -1], &[1, 0, -1]]);
        let reduced = diophantine_row_reduce(&matrix);

        let expected = IntMatrix::from_i64_rows(&[&[1, 0, -1], &[0, 1, -1]]);
        assert_eq!(reduced, expected);
    }

    #[test]
    fn test_reduce_drops_redundant_rows() {
        // Third row is the sum of the first two and must vanish.
        let matrix = IntMatrix::from_i64_rows(&[&[1, 0, -1], &[0, 1, -1], &[1, 1, -2]]);
        let reduced = diophantine_row_reduce(&matrix);

        assert_eq!(reduced.row_count(), 2);
        let expected = IntMatrix::from_i64_rows(&[&[1, 0, -1], &[0, 1, -1]]);
        assert_eq!(reduced, expected);
    }

    #[test]
    fn test_reduce_normalizes_gcd_and_pivot_sign() {
        let matrix = IntMatrix::from_i64_rows(&[&[-4, 0, 8], &[0, 6, -9]]);
        let reduced = diophantine_row_reduce(&matrix);

        let expected = IntMatrix::from_i64_rows(&[&[1, 0, -2], &[0, 2, -3]]);
        assert_eq!(reduced, expected);
    }

    #[test]
    fn test_reduce_stays_exact_on_wide_intermediates() {
        // The two pivots are coprime, so the elimination scale is their
        // product, about 2^80. That exceeds any fixed-width integer; the
        // reduction must come out exact anyway.
        let a = (1i64 << 40) + 1;
        let b = (1i64 << 40) - 1;
        let matrix = IntMatrix::from_i64_rows(&[&[a, 1, -1], &[b, 1, -1]]);
        let reduced = diophantine_row_reduce(&matrix);

        let expected = IntMatrix::from_i64_rows(&[&[1, 0, 0], &[0, 1, -1]]);
        assert_eq!(reduced, expected);
    }

    #[test]
    fn test_reduce_full_bicarbonate_system() {
        // HCl + NaHCO3 : NaCl + H2O + CO2, atoms C, Cl, H, Na, O.
        let matrix = IntMatrix::from_i64_rows(&[
            &[0, 1, 0, 0, -1],
            &[1, 0, -1, 0, 0],
            &[1, 1, 0, -2, 0],
            &[0, 1, -1, 0, 0],
            &[0, 3, 0, -1, -2],
        ]);
        let reduced = diophantine_row_reduce(&matrix);

        let expected = IntMatrix::from_i64_rows(&[
            &[1, 0, 0, 0, -1],
            &[0, 1, 0, 0, -1],
            &[0, 0, 1, 0, -1],
            &[0, 0, 0, 1, -1],
        ]);
        assert_eq!(reduced, expected);
    }
}
