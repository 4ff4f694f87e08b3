//! Bland's rule: the anti-cycling pivot-selection rule used throughout this
//! crate's simplex drivers (`solve`, `solve_int`). Always selects the
//! lowest-label candidate among ties, which guarantees termination in at
//! most `C(m+n, m)` pivots (property P4 in `SPEC_FULL.md` §8).

use crate::dictionary::Dictionary;
use crate::label::Position;
use crate::scalar::{Scalar, EPS_DEFAULT};
use num_traits::FromPrimitive;

/// The outcome of choosing a pivot: either a concrete `(enter, leave)` pair,
/// or a terminal condition (`Final`/`Unbounded`) that ends the simplex loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PivotChoice {
    Pivot { enter: Position, leave: Position },
    Final,
    Unbounded,
}

/// Lowest-*label* non-basic variable with a positive objective coefficient.
/// `None` if the dictionary is already optimal.
///
/// Scans every eligible position rather than stopping at the first one,
/// since nonbasic labels need not be sorted by position (e.g. after a
/// sequence of pivots has permuted the nonbasic set).
fn enter_bland<T: Scalar>(dict: &Dictionary<T>, eps: T) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None; // (position, label)
    for j in 0..dict.n() {
        if dict.c[j] <= eps {
            continue;
        }
        let lbl = dict.nonbasic[j].0;
        let replace = match best {
            None => true,
            Some((_, best_lbl)) => lbl < best_lbl,
        };
        if replace {
            best = Some((j, lbl));
        }
    }
    best.map(|(j, _)| j)
}

/// Given an entering column, the basic row that limits its increase the
/// most, breaking ties toward the lowest basic label.
///
/// Assumes `dict` is feasible.
fn leave_bland<T: Scalar>(dict: &Dictionary<T>, enter: usize, eps: T) -> Option<usize> {
    let mut best: Option<(usize, T, usize)> = None; // (row, ratio, label)
    for i in 0..dict.m() {
        if dict.a[(i, enter)] >= -eps {
            continue;
        }
        let ratio = -dict.b[i] / dict.a[(i, enter)];
        let lbl = dict.basic[i].0;
        let replace = match best {
            None => true,
            Some((_, best_ratio, best_lbl)) => {
                if ratio < best_ratio {
                    true
                } else if ratio == best_ratio {
                    lbl < best_lbl
                } else {
                    false
                }
            }
        };
        if replace {
            best = Some((i, ratio, lbl));
        }
    }
    best.map(|(i, _, _)| i)
}

/// Next pivot under Bland's rule, using the default tolerance.
pub fn next_bland<T: Scalar>(dict: &Dictionary<T>) -> PivotChoice {
    next_bland_eps(dict, T::from_f64(EPS_DEFAULT).unwrap())
}

pub fn next_bland_eps<T: Scalar>(dict: &Dictionary<T>, eps: T) -> PivotChoice {
    let Some(enter) = enter_bland(dict, eps) else {
        return PivotChoice::Final;
    };
    let Some(leave) = leave_bland(dict, enter, eps) else {
        return PivotChoice::Unbounded;
    };
    PivotChoice::Pivot { enter: Position(enter), leave: Position(leave) }
}

/// Non-basic variable that would enter if `leave` were chosen to leave,
/// preferring the lowest non-basic label among candidates that agree.
fn enter_feas_bland<T: Scalar>(dict: &Dictionary<T>, leave: usize, eps: T) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None; // (position, label)
    for j in 0..dict.n() {
        if dict.c[j] <= eps {
            continue;
        }
        let Some(i) = leave_bland(dict, j, eps) else {
            continue;
        };
        if i != leave {
            continue;
        }
        let lbl = dict.nonbasic[j].0;
        let replace = match best {
            None => true,
            Some((_, best_lbl)) => lbl < best_lbl,
        };
        if replace {
            best = Some((j, lbl));
        }
    }
    best.map(|(j, _)| j)
}

/// Next pivot under Bland's rule for a feasibility dictionary: the
/// auxiliary variable (label `m + n` of the *original* problem, i.e. the
/// highest label currently in play) is given priority to leave the basis.
pub fn next_feas_bland<T: Scalar>(dict: &Dictionary<T>) -> PivotChoice {
    next_feas_bland_eps(dict, T::from_f64(EPS_DEFAULT).unwrap())
}

pub fn next_feas_bland_eps<T: Scalar>(dict: &Dictionary<T>, eps: T) -> PivotChoice {
    let aux_label = dict.m() + dict.n() - 1;
    if let Some(leave) = dict.basic.iter().position(|lbl| lbl.0 == aux_label) {
        if let Some(enter) = enter_feas_bland(dict, leave, eps) {
            return PivotChoice::Pivot { enter: Position(enter), leave: Position(leave) };
        }
    }
    next_bland_eps(dict, eps)
}
