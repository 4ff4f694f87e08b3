//! End-to-end scenarios exercising the public solving API together:
//! pivoting, Phase-I/Phase-II, duality, and the integer cutting-plane
//! driver, on the worked examples from the dictionary-simplex literature.

use dict_simplex::dictionary::Dictionary;
use dict_simplex::error::SolveError;
use dict_simplex::integer::solve_int;
use dict_simplex::label::{Label, Position};
use dict_simplex::linalg::Matrix;
use dict_simplex::pivot::{next_bland, PivotChoice};
use dict_simplex::solve::{from_feas_dict, solve, solve_feas, to_feas_dict};

/// max x + 2y s.t. -x+y<=1, 3x+2y<=12, 2x+3y<=12; x,y >= 0.
fn brewery() -> Dictionary<f64> {
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

/// S1: the continuous relaxation's optimum is 7.4 at (1.8, 2.8).
#[test]
fn s1_continuous_optimum() {
    let dict = brewery();
    let (solved, _iters) = solve(&dict).expect("feasible and bounded");
    assert!((solved.obj() - 7.4).abs() < 1e-6);
    let x = solved.soln();
    assert!((x[0] - 1.8).abs() < 1e-6);
    assert!((x[1] - 2.8).abs() < 1e-6);
}

/// S2: the integer program's optimum is 6 at (2, 2).
#[test]
fn s2_integer_optimum() {
    let dict = brewery();
    let solved = solve_int(&dict).expect("integer-feasible and bounded");
    assert!(solved.is_int());
    assert!((solved.obj() - 6.0).abs() < 1e-6);
    let x = solved.soln();
    assert!((x[0] - 2.0).abs() < 1e-6);
    assert!((x[1] - 2.0).abs() < 1e-6);
}

/// S3: a dictionary whose origin is infeasible must route through Phase-I
/// before reaching the same kind of optimal dictionary Phase-II produces.
#[test]
fn s3_phase_one_required() {
    let mut a = Matrix::new(2, 2);
    a[(0, 0)] = -1.0;
    a[(0, 1)] = -1.0;
    a[(1, 0)] = 1.0;
    a[(1, 1)] = 1.0;
    let dict = Dictionary::from_parts(
        vec![Label(2), Label(3)],
        vec![Label(0), Label(1)],
        a,
        vec![2.0, -4.0],
        vec![1.0, 1.0],
        0.0,
    );
    assert!(!dict.feas());
    let (solved, _iters) = solve(&dict).expect("phase 1 finds a feasible point here");
    assert!(solved.feas());
}

/// S4: Bland's rule must break ties on the lowest-label non-basic variable,
/// not the steepest-ascent one, and not the lowest *position* either. Uses
/// out-of-order labels (position 0 holds label 5, position 1 holds label 1)
/// with equal objective coefficients, so label-based and position-based
/// tie-breaking disagree on which position is chosen.
fn out_of_order_labels_dict() -> Dictionary<f64> {
    let mut a = Matrix::new(1, 2);
    a[(0, 0)] = -1.0;
    a[(0, 1)] = -1.0;
    Dictionary::from_parts(vec![Label(2)], vec![Label(5), Label(1)], a, vec![10.0], vec![1.0, 1.0], 0.0)
}

#[test]
fn s4_bland_breaks_ties_by_label() {
    let dict = out_of_order_labels_dict();
    match next_bland(&dict) {
        PivotChoice::Pivot { enter, .. } => assert_eq!(enter, Position(1)),
        other => panic!("expected a pivot, got {other:?}"),
    }

    // Swapping which position holds the lower label swaps the choice.
    let mut swapped = dict.clone();
    swapped.nonbasic = vec![Label(1), Label(5)];
    match next_bland(&swapped) {
        PivotChoice::Pivot { enter, .. } => assert_eq!(enter, Position(0)),
        other => panic!("expected a pivot, got {other:?}"),
    }
}

/// S5: round-tripping an already-feasible dictionary through
/// to_feas_dict/solve_feas/from_feas_dict must not change its solution.
#[test]
fn s5_feasibility_round_trip_is_a_no_op_on_feasible_input() {
    let dict = brewery();
    assert!(dict.feas());

    let feas_dict = to_feas_dict(&dict);
    assert_eq!(feas_dict.n(), dict.n() + 1);

    let projected = from_feas_dict(&feas_dict, &dict);
    assert_eq!(projected.soln(), dict.soln());
    assert_eq!(projected.obj(), dict.obj());

    let via_solve_feas = solve_feas(&dict).expect("already feasible");
    assert_eq!(via_solve_feas.soln(), dict.soln());
}

/// S6: an unbounded primal's dual must be infeasible, and vice versa.
#[test]
fn s6_unbounded_primal_implies_infeasible_dual() {
    let mut a = Matrix::new(1, 1);
    a[(0, 0)] = 1.0;
    let dict = Dictionary::from_parts(vec![Label(1)], vec![Label(0)], a, vec![5.0], vec![1.0], 0.0);

    assert!(matches!(solve(&dict), Err(SolveError::Unbounded)));

    let dual = dict.dual();
    assert!(!dual.feas());
    assert!(matches!(solve(&dual), Err(SolveError::Infeasible)));
}
