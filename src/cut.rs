//! Gomory fractional cutting planes: tightens a dictionary with a fractional
//! basic solution by adding one constraint row per non-integer basic
//! variable (and the objective, if it is itself fractional), each violated
//! by the current solution but satisfied by every integer point.

use crate::dictionary::Dictionary;
use crate::label::Label;
use crate::linalg::Matrix;
use crate::scalar::{dist_to_int, frac, Scalar, EPS_DEFAULT};
use num_traits::FromPrimitive;

pub fn cut_plane<T: Scalar>(orig: &Dictionary<T>) -> Dictionary<T> {
    cut_plane_eps(orig, T::from_f64(EPS_DEFAULT).unwrap())
}

pub fn cut_plane_eps<T: Scalar>(orig: &Dictionary<T>, eps: T) -> Dictionary<T> {
    let m = orig.m();
    let n = orig.n();

    let mut new_rows: Vec<(Vec<T>, T)> = Vec::new();
    for i in 0..m {
        if dist_to_int(orig.b[i]) <= eps {
            continue;
        }
        let row: Vec<T> = (0..n).map(|j| frac(-orig.a[(i, j)])).collect();
        let b = -frac(orig.b[i]);
        new_rows.push((row, b));
    }
    if dist_to_int(orig.d) > eps {
        let row: Vec<T> = (0..n).map(|j| frac(-orig.c[j])).collect();
        let b = -frac(orig.d);
        new_rows.push((row, b));
    }

    let mut basic = orig.basic.clone();
    let nonbasic = orig.nonbasic.clone();
    let mut a = Matrix::with_capacity(m + new_rows.len(), n);
    for i in 0..m {
        a.push_row(orig.a.row(i));
    }
    let mut b = orig.b.clone();

    for (k, (row, bval)) in new_rows.into_iter().enumerate() {
        basic.push(Label(m + n + k));
        a.push_row(&row);
        b.push(bval);
    }

    Dictionary::from_parts(basic, nonbasic, a, b, orig.c.clone(), orig.d)
}
