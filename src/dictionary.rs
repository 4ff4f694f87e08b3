use crate::label::{Label, Position};
use crate::linalg::Matrix;
use crate::scalar::{dist_to_int, Scalar, EPS_DEFAULT};
use num_traits::FromPrimitive;

/// A simplex dictionary:
///
/// ```text
/// x[B[i]] = b[i] + sum_j A[i][j] * x[N[j]]   (constraint rows)
/// z       = d    + sum_j c[j]    * x[N[j]]   (objective row)
/// ```
///
/// `basic`/`nonbasic` store permanent [`Label`]s; `a`/`b`/`c`/`d` are indexed
/// by position. Every transform (`pivot`, `dual`, ...) returns a fresh
/// `Dictionary` rather than mutating `self` (see `SPEC_FULL.md` §3 "Ownership
/// and lifecycle").
#[derive(Debug, Clone)]
pub struct Dictionary<T: Scalar = f64> {
    pub basic: Vec<Label>,
    pub nonbasic: Vec<Label>,
    pub a: Matrix<T>,
    pub b: Vec<T>,
    pub c: Vec<T>,
    pub d: T,
}

impl<T: Scalar> Dictionary<T> {
    /// `m` basic and `n` non-basic variables, all-zero payload and labels.
    /// Callers populate `basic`/`nonbasic`/`a`/`b`/`c`/`d` afterwards.
    pub fn new(m: usize, n: usize) -> Self {
        Dictionary {
            basic: vec![Label(0); m],
            nonbasic: vec![Label(0); n],
            a: Matrix::new(m, n),
            b: vec![T::zero(); m],
            c: vec![T::zero(); n],
            d: T::zero(),
        }
    }

    /// Builds a dictionary from its parts, checking (I1)-(I3) in debug builds.
    pub fn from_parts(
        basic: Vec<Label>,
        nonbasic: Vec<Label>,
        a: Matrix<T>,
        b: Vec<T>,
        c: Vec<T>,
        d: T,
    ) -> Self {
        let m = basic.len();
        let n = nonbasic.len();
        debug_assert_eq!(a.rows, m, "A rows must equal |basic|");
        debug_assert_eq!(a.cols, n, "A cols must equal |nonbasic|");
        debug_assert_eq!(b.len(), m, "b length must equal |basic|");
        debug_assert_eq!(c.len(), n, "c length must equal |nonbasic|");
        debug_assert!(
            {
                let mut all: Vec<usize> = basic.iter().chain(nonbasic.iter()).map(|l| l.0).collect();
                all.sort_unstable();
                all.windows(2).all(|w| w[0] != w[1])
            },
            "basic and nonbasic labels must be pairwise distinct"
        );
        Dictionary { basic, nonbasic, a, b, c, d }
    }

    pub fn m(&self) -> usize {
        self.basic.len()
    }

    pub fn n(&self) -> usize {
        self.nonbasic.len()
    }

    /// `x[B[i]] = b[i]`, `x[ℓ] = 0` for every non-basic label `ℓ`.
    ///
    /// Indexes `b` by *position*, not by label; the result vector itself is
    /// indexed by label (`SPEC_FULL.md` §9).
    pub fn soln(&self) -> Vec<T> {
        let total = self.m() + self.n();
        let mut x = vec![T::zero(); total];
        for (i, lbl) in self.basic.iter().enumerate() {
            x[lbl.0] = self.b[i];
        }
        x
    }

    pub fn obj(&self) -> T {
        self.d
    }

    pub fn feas_eps(&self, eps: T) -> bool {
        self.b.iter().all(|&bi| bi >= -eps)
    }

    pub fn feas(&self) -> bool {
        self.feas_eps(T::from_f64(EPS_DEFAULT).unwrap())
    }

    pub fn is_int_eps(&self, eps: T) -> bool {
        self.b.iter().all(|&bi| dist_to_int(bi) <= eps)
    }

    pub fn is_int(&self) -> bool {
        self.is_int_eps(T::from_f64(crate::scalar::EPS_INT_DEFAULT).unwrap())
    }

    /// Swaps `nonbasic[enter]` into the basis at row `leave`, performing the
    /// corresponding elementary row operation. Returns a fresh dictionary;
    /// `self` is untouched.
    ///
    /// Panics (a `ProgrammingError`, per `SPEC_FULL.md` §7) if the pivot
    /// element `a[leave][enter]` is zero — callers must only pass `(enter,
    /// leave)` pairs produced by the pivot-selection rule in [`crate::pivot`].
    pub fn pivot(&self, enter: Position, leave: Position) -> Self {
        let (enter, leave) = (enter.0, leave.0);
        let m = self.m();
        let n = self.n();
        let p = self.a[(leave, enter)];
        assert!(
            p != T::zero(),
            "pivot element a[{leave}][{enter}] is zero — caller selected an illegal pivot"
        );

        let mut basic = self.basic.clone();
        let mut nonbasic = self.nonbasic.clone();
        basic[leave] = self.nonbasic[enter];
        nonbasic[enter] = self.basic[leave];

        let mut a = Matrix::<T>::new(m, n);
        let mut b = vec![T::zero(); m];
        let mut c = vec![T::zero(); n];

        // Pivot row first: other rows and the objective reference it below.
        b[leave] = -self.b[leave] / p;
        for j in 0..n {
            a[(leave, j)] = if j == enter {
                T::one() / p
            } else {
                -self.a[(leave, j)] / p
            };
        }

        for i in 0..m {
            if i == leave {
                continue;
            }
            let factor = self.a[(i, enter)];
            b[i] = self.b[i] + factor * b[leave];
            for j in 0..n {
                a[(i, j)] = if j == enter {
                    factor * a[(leave, enter)]
                } else {
                    self.a[(i, j)] + factor * a[(leave, j)]
                };
            }
        }

        let z_factor = self.c[enter];
        let d = self.d + z_factor * b[leave];
        for j in 0..n {
            c[j] = if j == enter {
                z_factor * a[(leave, enter)]
            } else {
                self.c[j] + z_factor * a[(leave, j)]
            };
        }

        Dictionary { basic, nonbasic, a, b, c, d }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// S1 from `SPEC_FULL.md` §8: max x + 2y s.t. -x+y<=1, 3x+2y<=12, 2x+3y<=12.
    fn s1_dict() -> Dictionary<f64> {
        let mut a = Matrix::new(3, 2);
        a[(0, 0)] = 1.0;
        a[(0, 1)] = -1.0;
        a[(1, 0)] = -3.0;
        a[(1, 1)] = -2.0;
        a[(2, 0)] = -2.0;
        a[(2, 1)] = -3.0;
        Dictionary::from_parts(
            vec![Label(2), Label(3), Label(4)],
            vec![Label(0), Label(1)],
            a,
            vec![1.0, 12.0, 12.0],
            vec![1.0, 2.0],
            0.0,
        )
    }

    #[test]
    fn soln_is_zero_on_nonbasic_and_b_on_basic() {
        let d = s1_dict();
        let x = d.soln();
        assert_eq!(x.len(), 5);
        assert_eq!(x[0], 0.0);
        assert_eq!(x[1], 0.0);
        assert_eq!(x[2], 1.0);
        assert_eq!(x[3], 12.0);
        assert_eq!(x[4], 12.0);
    }

    #[test]
    fn feas_checks_all_b_nonnegative() {
        let d = s1_dict();
        assert!(d.feas());
        let mut bad = d.clone();
        bad.b[0] = -1.0;
        assert!(!bad.feas());
    }

    #[test]
    fn pivot_matches_hand_worked_example() {
        // Enter y (position 1, label 1), leave row 0 (label 2): p = A[0][1] = -1.
        let d = s1_dict();
        let next = d.pivot(Position(1), Position(0));

        // Basic/nonbasic labels swapped at the pivot slot.
        assert_eq!(next.basic[0], Label(1));
        assert_eq!(next.nonbasic[1], Label(2));
        assert_eq!(next.basic[1], Label(3));
        assert_eq!(next.basic[2], Label(4));

        // b[leave] = -b[leave]/p = -1/-1 = 1
        assert_eq!(next.b[0], 1.0);
        // Other rows: b[i] = b[i] + A[i][enter]*b[leave]
        // row1: 12 + (-2)*1 = 10 ; row2: 12 + (-3)*1 = 9
        assert_eq!(next.b[1], 10.0);
        assert_eq!(next.b[2], 9.0);

        // Objective: d = 0 + c[enter]*b[leave] = 2*1 = 2
        assert_eq!(next.d, 2.0);
    }

    #[test]
    #[should_panic(expected = "pivot element")]
    fn pivot_on_zero_element_panics() {
        let d = s1_dict();
        // A[1][0] = -3 != 0 so pick a genuinely zero cell instead.
        let mut zeroed = d.clone();
        zeroed.a[(0, 0)] = 0.0;
        let _ = zeroed.pivot(Position(0), Position(0));
    }

    #[test]
    fn from_parts_rejects_duplicate_labels_in_debug() {
        let a = Matrix::<f64>::new(1, 1);
        let result = std::panic::catch_unwind(|| {
            Dictionary::from_parts(vec![Label(0)], vec![Label(0)], a, vec![0.0], vec![0.0], 0.0)
        });
        // debug_assert! only fires in debug builds; this crate is tested in debug mode.
        if cfg!(debug_assertions) {
            assert!(result.is_err());
        }
    }
}
