//! Integer-programming driver: alternates relaxed-LP solves with Gomory cuts
//! until the basic solution is integral, switching to the dual dictionary
//! between the cut and the re-solve (a cut that violates primal feasibility
//! typically preserves dual feasibility, so re-solving the dual is cheaper
//! than restarting Phase-I on the primal).

use crate::cut::cut_plane_eps;
use crate::dictionary::Dictionary;
use crate::error::SolveError;
use crate::scalar::{Scalar, EPS_DEFAULT, EPS_INT_DEFAULT};
use crate::solve::solve_eps;
use num_traits::FromPrimitive;
use tracing::debug;

/// Solves the integer program relaxation of `dict` to optimality, using the
/// default simplex and integrality tolerances and no cut budget.
pub fn solve_int<T: Scalar>(dict: &Dictionary<T>) -> Result<Dictionary<T>, SolveError> {
    solve_int_eps(dict, T::from_f64(EPS_DEFAULT).unwrap(), T::from_f64(EPS_INT_DEFAULT).unwrap(), None)
}

/// Same as [`solve_int`], but returns [`SolveError::CutBudgetExhausted`]
/// once `max_cuts` rounds of cutting have run without reaching an integral
/// solution. `None` means unbounded.
pub fn solve_int_eps<T: Scalar>(
    dict: &Dictionary<T>,
    eps: T,
    int_eps: T,
    max_cuts: Option<usize>,
) -> Result<Dictionary<T>, SolveError> {
    let (mut dict, _) = solve_eps(dict, eps)?;
    let mut cuts = 0usize;

    while !dict.is_int_eps(int_eps) {
        if let Some(limit) = max_cuts {
            if cuts >= limit {
                return Err(SolveError::CutBudgetExhausted { limit });
            }
        }

        debug!(cuts, obj = ?dict.obj(), "adding cutting-plane constraints");
        let cut = cut_plane_eps(&dict, int_eps);
        let dual = cut.dual();
        let solved_dual = match solve_eps(&dual, eps) {
            Ok((d, _)) => d,
            // The dual relaxation being unbounded means the cut made the
            // primal infeasible: no integer point can satisfy it.
            Err(SolveError::Unbounded) => return Err(SolveError::Infeasible),
            Err(e) => return Err(e),
        };
        dict = solved_dual.dual();
        cuts += 1;
    }

    Ok(dict)
}
