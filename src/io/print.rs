//! Pretty-printer: renders a dictionary as aligned equations, one per basic
//! variable plus the objective row, e.g.
//!
//! ```text
//! x2 = +1.0000  -1.0000 x0  +1.0000 x1
//! x3 = +12.0000  +3.0000 x0  +2.0000 x1
//!  z = +0.0000  +1.0000 x0  +2.0000 x1
//! ```

use crate::dictionary::Dictionary;
use crate::scalar::Scalar;
use std::fmt::Write as _;
use std::io::{self, Write};

fn longest_coeff<T: Scalar>(dict: &Dictionary<T>) -> usize {
    let mut n = 0;
    for i in 0..dict.m() {
        for j in 0..dict.n() {
            n = n.max(format!("{:+.4}", dict.a[(i, j)]).len());
        }
        n = n.max(format!("{:+.4}", dict.b[i]).len());
    }
    for j in 0..dict.n() {
        n = n.max(format!("{:+.4}", dict.c[j]).len());
    }
    n.max(format!("{:+.4}", dict.d).len())
}

fn longest_index<T: Scalar>(dict: &Dictionary<T>) -> usize {
    let mut n = 0;
    for lbl in dict.basic.iter().chain(dict.nonbasic.iter()) {
        n = n.max(lbl.0.to_string().len());
    }
    n
}

/// Right-pads a signed, 4-decimal rendering of `v` out to `width` columns.
fn coeff_cell<T: Scalar>(v: T, width: usize) -> String {
    format!("{:<width$}", format!("{v:+.4}"), width = width)
}

/// Writes `dict` to `w` in the dictionary's human-readable equation form.
pub fn fprint<T: Scalar, W: Write>(dict: &Dictionary<T>, w: &mut W) -> io::Result<()> {
    let coeff_width = longest_coeff(dict);
    let index_width = longest_index(dict);

    let mut line = String::new();
    for i in 0..dict.m() {
        line.clear();
        write!(line, "x{:iw$} = {}", dict.basic[i].0, coeff_cell(dict.b[i], coeff_width), iw = index_width).unwrap();
        for j in 0..dict.n() {
            write!(
                line,
                "  {} x{:iw$}",
                coeff_cell(dict.a[(i, j)], coeff_width),
                dict.nonbasic[j].0,
                iw = index_width
            )
            .unwrap();
        }
        writeln!(w, "{line}")?;
    }

    line.clear();
    write!(line, "z{:iw$} = {}", "", coeff_cell(dict.d, coeff_width), iw = index_width).unwrap();
    for j in 0..dict.n() {
        write!(line, "  {} x{:iw$}", coeff_cell(dict.c[j], coeff_width), dict.nonbasic[j].0, iw = index_width).unwrap();
    }
    writeln!(w, "{line}")?;
    Ok(())
}

/// Renders `dict` to an owned `String`.
pub fn to_string<T: Scalar>(dict: &Dictionary<T>) -> String {
    let mut out = Vec::new();
    fprint(dict, &mut out).expect("writing to an in-memory buffer cannot fail");
    String::from_utf8(out).expect("formatted output is always valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::Label;
    use crate::linalg::Matrix;

    #[test]
    fn prints_one_line_per_basic_variable_plus_objective() {
        let mut a = Matrix::new(1, 1);
        a[(0, 0)] = -1.0;
        let d = Dictionary::from_parts(vec![Label(1)], vec![Label(0)], a, vec![3.0], vec![2.0], 1.0);
        let out = to_string(&d);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("x1 ="));
        assert!(lines[1].starts_with("z "));
    }

    #[test]
    fn coefficients_render_with_explicit_sign() {
        let mut a = Matrix::new(1, 1);
        a[(0, 0)] = -1.0;
        let d = Dictionary::from_parts(vec![Label(1)], vec![Label(0)], a, vec![3.0], vec![2.0], 1.0);
        let out = to_string(&d);
        assert!(out.contains("+3.0000"));
        assert!(out.contains("-1.0000"));
    }
}
