//! Phase-I/Phase-II simplex driver: carries an arbitrary dictionary to an
//! optimal one, introducing an auxiliary feasibility problem first when
//! necessary.

use crate::dictionary::Dictionary;
use crate::error::SolveError;
use crate::label::{Label, Position};
use crate::linalg::Matrix;
use crate::pivot::{next_bland_eps, next_feas_bland_eps, PivotChoice};
use crate::scalar::{Scalar, EPS_DEFAULT};
use num_traits::FromPrimitive;
use tracing::debug;

/// Pivots a feasible dictionary to optimality using Bland's rule.
///
/// Returns the optimal dictionary together with the number of pivots taken
/// to reach it, mirroring golp's `colorado/part2/main.go` `Solution.Steps`.
///
/// # Panics
/// If `dict` is not feasible on entry; callers must route through
/// [`solve`]/[`solve_eps`] or [`solve_feas`] first.
pub fn pivot_to_final<T: Scalar>(dict: &Dictionary<T>) -> Result<(Dictionary<T>, usize), SolveError> {
    pivot_to_final_eps(dict, T::from_f64(EPS_DEFAULT).unwrap())
}

pub fn pivot_to_final_eps<T: Scalar>(
    dict: &Dictionary<T>,
    eps: T,
) -> Result<(Dictionary<T>, usize), SolveError> {
    assert!(dict.feas_eps(eps), "pivot_to_final called on an infeasible dictionary");
    let mut dict = dict.clone();
    let mut iters = 0usize;
    loop {
        match next_bland_eps(&dict, eps) {
            PivotChoice::Unbounded => return Err(SolveError::Unbounded),
            PivotChoice::Final => {
                debug!(iters, obj = ?dict.obj(), "reached optimum");
                return Ok((dict, iters));
            }
            PivotChoice::Pivot { enter, leave } => {
                dict = dict.pivot(enter, leave);
                iters += 1;
            }
        }
    }
}

/// Builds the auxiliary feasibility dictionary for `infeas`: adds a
/// non-basic variable with a label one past every label already in use,
/// constrained to enter every row with coefficient 1, with objective
/// `minimize x_aux`. Pivots it straight into the basis at the row with the
/// most negative `b`, which is always the fastest route to a feasible
/// auxiliary dictionary.
pub fn to_feas_dict<T: Scalar>(infeas: &Dictionary<T>) -> Dictionary<T> {
    let m = infeas.m();
    let n = infeas.n();
    let aux_label = Label(m + n);

    let basic = infeas.basic.clone();
    let mut nonbasic = infeas.nonbasic.clone();
    nonbasic.push(aux_label);

    let mut a = Matrix::<T>::new(m, n + 1);
    for i in 0..m {
        for j in 0..n {
            a[(i, j)] = infeas.a[(i, j)];
        }
        a[(i, n)] = T::one();
    }
    let b = infeas.b.clone();
    let mut c = vec![T::zero(); n + 1];
    c[n] = -T::one();

    let dict = Dictionary { basic, nonbasic, a, b, c, d: T::zero() };

    let (leave, _) = dict
        .b
        .iter()
        .enumerate()
        .min_by(|(_, x), (_, y)| x.partial_cmp(y).expect("b entries must be comparable"))
        .expect("a dictionary always has at least one row");

    dict.pivot(Position(n), Position(leave))
}

/// Re-expresses `orig`'s objective over `feas`'s current basic set and
/// drops the auxiliary variable, which must be non-basic. If the auxiliary
/// variable degenerated into the basic set with `b == 0` (possible when the
/// feasibility problem has a degenerate optimum), a harmless pivot forces it
/// back out before continuing.
pub fn from_feas_dict<T: Scalar>(feas: &Dictionary<T>, orig: &Dictionary<T>) -> Dictionary<T> {
    from_feas_dict_eps(feas, orig, T::from_f64(EPS_DEFAULT).unwrap())
}

pub fn from_feas_dict_eps<T: Scalar>(feas: &Dictionary<T>, orig: &Dictionary<T>, eps: T) -> Dictionary<T> {
    let aux_label = orig.m() + orig.n();
    let feas = eject_auxiliary_if_basic(feas, aux_label, eps);

    let n = orig.n();
    let m = feas.m();
    let zero = feas
        .nonbasic
        .iter()
        .position(|l| l.0 == aux_label)
        .expect("auxiliary variable must be non-basic after ejection");

    let basic = feas.basic.clone();
    let mut nonbasic = Vec::with_capacity(n);
    nonbasic.extend(feas.nonbasic[..zero].iter().copied());
    nonbasic.extend(feas.nonbasic[zero + 1..].iter().copied());

    let mut a = Matrix::<T>::new(m, n);
    for i in 0..m {
        for (dst_j, src_j) in (0..feas.n()).filter(|&j| j != zero).enumerate() {
            a[(i, dst_j)] = feas.a[(i, src_j)];
        }
    }
    let b = feas.b.clone();
    let mut c = vec![T::zero(); n];
    let mut d = orig.d;

    for (u, lbl1) in orig.nonbasic.iter().enumerate() {
        let coeff = orig.c[u];
        if let Some(j) = nonbasic.iter().position(|l| l == lbl1) {
            c[j] += coeff;
        } else if let Some(i) = basic.iter().position(|l| l == lbl1) {
            d += coeff * b[i];
            for j in 0..n {
                c[j] += coeff * a[(i, j)];
            }
        }
    }

    Dictionary { basic, nonbasic, a, b, c, d }
}

fn eject_auxiliary_if_basic<T: Scalar>(feas: &Dictionary<T>, aux_label: usize, eps: T) -> Dictionary<T> {
    let Some(row) = feas.basic.iter().position(|l| l.0 == aux_label) else {
        return feas.clone();
    };
    assert!(
        feas.b[row].abs() <= eps,
        "auxiliary variable basic with nonzero value {:?}: feasibility solve did not converge",
        feas.b[row]
    );
    let col = (0..feas.n())
        .find(|&j| feas.a[(row, j)].abs() > eps)
        .expect("degenerate auxiliary row with no pivotable column");
    feas.pivot(Position(col), Position(row))
}

/// Solves the feasibility problem for `orig` and, if feasible, returns a
/// feasible dictionary for the original problem.
pub fn solve_feas<T: Scalar>(orig: &Dictionary<T>) -> Result<Dictionary<T>, SolveError> {
    solve_feas_eps(orig, T::from_f64(EPS_DEFAULT).unwrap())
}

pub fn solve_feas_eps<T: Scalar>(orig: &Dictionary<T>, eps: T) -> Result<Dictionary<T>, SolveError> {
    let mut dict = to_feas_dict(orig);
    loop {
        match next_feas_bland_eps(&dict, eps) {
            PivotChoice::Unbounded => {
                unreachable!("the auxiliary feasibility problem is always bounded")
            }
            PivotChoice::Final => break,
            PivotChoice::Pivot { enter, leave } => dict = dict.pivot(enter, leave),
        }
    }

    let gap = -dict.obj();
    if gap > eps {
        debug!(?gap, "feasibility problem has positive optimum");
        return Err(SolveError::Infeasible);
    }
    Ok(from_feas_dict_eps(&dict, orig, eps))
}

/// Solves a linear program from an arbitrary (possibly infeasible) starting
/// dictionary.
///
/// The returned `usize` counts only the Phase-II pivots (matching golp's
/// `colorado/part2/main.go`, which has no Phase-I of its own); pivots spent
/// reaching feasibility are not included.
pub fn solve<T: Scalar>(dict: &Dictionary<T>) -> Result<(Dictionary<T>, usize), SolveError> {
    solve_eps(dict, T::from_f64(EPS_DEFAULT).unwrap())
}

pub fn solve_eps<T: Scalar>(dict: &Dictionary<T>, eps: T) -> Result<(Dictionary<T>, usize), SolveError> {
    let feasible = if dict.feas_eps(eps) {
        dict.clone()
    } else {
        solve_feas_eps(dict, eps)?
    };
    pivot_to_final_eps(&feasible, eps)
}
