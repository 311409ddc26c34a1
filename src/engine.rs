//! Strassen's recursive multiplication.
//!
//! Splits `X = [[A, B], [C, D]]` and `Y = [[E, F], [G, H]]` into quadrants
//! and forms the product from seven half-size products instead of eight:
//!
//! ```text
//! P1 = A (F - H)        P5 = (A + D)(E + H)
//! P2 = (A + B) H        P6 = (B - D)(G + H)
//! P3 = (C + D) E        P7 = (A - C)(E + F)
//! P4 = D (G - E)
//!
//! [[ (P5 + P4) - (P2 - P6)    P1 + P2               ]
//!  [ P3 + P4                  (P5 + P1) - (P3 + P7) ]]
//! ```
//!
//! Below the crossover dimension the recursion hands off to
//! [`standard_multiply`].

use crate::matrix::Matrix;
use crate::matrix::naive::standard_multiply;
use crate::matrix::quadrant::{
    add_quadrants, assign_quadrant, difference, extract_quadrant, subtract_quadrants, sum,
};

/// Multiplies two `n × n` matrices with Strassen's recurrence, switching to
/// the classical algorithm once `n <= crossover`.
///
/// `x` and `y` must have the same power-of-two dimension. This function
/// does not check either condition; pad the inputs first (see
/// [`crate::multiply`], which does all of that).
///
/// # Example
///
/// ```
/// use strassen::{Matrix, strassen_multiply};
///
/// let x = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let y = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
///
/// let z = strassen_multiply(&x, &y, 1);
/// assert_eq!(z.as_slice(), &[19, 22, 43, 50]);
/// ```
pub fn strassen_multiply(x: &Matrix, y: &Matrix, crossover: usize) -> Matrix {
    let n = x.dim();
    if n <= crossover {
        return standard_multiply(x, y);
    }

    let h = n / 2;

    // Only the quadrants used bare are copied out; sums and differences
    // read straight from the parent.
    let a = extract_quadrant(x, 0, 0);
    let d = extract_quadrant(x, h, h);
    let e = extract_quadrant(y, 0, 0);
    let hq = extract_quadrant(y, h, h);

    let p1 = strassen_multiply(&a, &subtract_quadrants(y, 0, h, y, h, h), crossover);
    let p2 = strassen_multiply(&add_quadrants(x, 0, 0, x, 0, h), &hq, crossover);
    let p3 = strassen_multiply(&add_quadrants(x, h, 0, x, h, h), &e, crossover);
    let p4 = strassen_multiply(&d, &subtract_quadrants(y, h, 0, y, 0, 0), crossover);
    let p5 = strassen_multiply(
        &add_quadrants(x, 0, 0, x, h, h),
        &add_quadrants(y, 0, 0, y, h, h),
        crossover,
    );
    let p6 = strassen_multiply(
        &subtract_quadrants(x, 0, h, x, h, h),
        &add_quadrants(y, h, 0, y, h, h),
        crossover,
    );
    let p7 = strassen_multiply(
        &subtract_quadrants(x, 0, 0, x, h, 0),
        &add_quadrants(y, 0, 0, y, 0, h),
        crossover,
    );

    let top_left = difference(&sum(&p5, &p4), &difference(&p2, &p6));
    let top_right = sum(&p1, &p2);
    let bottom_left = sum(&p3, &p4);
    let bottom_right = difference(&sum(&p5, &p1), &sum(&p3, &p7));

    let mut z = Matrix::zeros(n);
    assign_quadrant(&mut z, 0, 0, &top_left);
    assign_quadrant(&mut z, 0, h, &top_right);
    assign_quadrant(&mut z, h, 0, &bottom_left);
    assign_quadrant(&mut z, h, h, &bottom_right);
    z
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterned(n: usize, modulus: i64, shift: i64) -> Matrix {
        Matrix::from_vec(n, (0..(n * n) as i64).map(|i| i % modulus - shift).collect()).unwrap()
    }

    #[test]
    fn test_2x2_scenario() {
        let x = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let y = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
        let expected = Matrix::from_rows(vec![vec![19, 22], vec![43, 50]]).unwrap();
        assert_eq!(strassen_multiply(&x, &y, 1), expected);
        assert_eq!(strassen_multiply(&x, &y, 2), expected);
    }

    #[test]
    fn test_full_recursion_matches_standard() {
        // crossover 1 recurses all the way to 1x1 blocks
        for n in [1, 2, 4, 8, 16] {
            let x = patterned(n, 7, 3);
            let y = patterned(n, 5, 2);
            assert_eq!(
                strassen_multiply(&x, &y, 1),
                standard_multiply(&x, &y),
                "n = {}",
                n
            );
        }
    }

    #[test]
    fn test_crossover_above_dimension_is_standard() {
        let x = patterned(8, 11, 5);
        let y = patterned(8, 3, 1);
        assert_eq!(strassen_multiply(&x, &y, 64), standard_multiply(&x, &y));
    }
}
