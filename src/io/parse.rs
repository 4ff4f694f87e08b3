//! Reader for the Colorado dictionary text format:
//!
//! ```text
//! m n
//! <m basic labels>
//! <n non-basic labels>
//! <m values of b>
//! <m rows of n coefficients, the rows of A>
//! <d followed by n coefficients of c>
//! ```

use crate::dictionary::Dictionary;
use crate::error::ParseError;
use crate::label::Label;
use crate::linalg::Matrix;
use crate::scalar::Scalar;
use std::io::BufRead;
use std::str::FromStr;

fn read_line<R: BufRead>(lines: &mut std::io::Lines<R>, expected: &'static str) -> Result<String, ParseError> {
    match lines.next() {
        Some(Ok(line)) => Ok(line),
        Some(Err(_)) | None => Err(ParseError::UnexpectedEof { expected }),
    }
}

fn parse_words<U: FromStr>(line: &str, context: &'static str) -> Result<Vec<U>, ParseError> {
    line.split_whitespace()
        .map(|w| w.parse::<U>().map_err(|_| ParseError::BadNumber { line: 0, expected: context }))
        .collect()
}

/// Parses a dictionary from a reader in the Colorado text format.
pub fn parse_dict<T: Scalar, R: BufRead>(r: R) -> Result<Dictionary<T>, ParseError>
where
    T: FromStr,
{
    let mut lines = r.lines();

    let dims_line = read_line(&mut lines, "dimensions \"m n\"")?;
    let dims: Vec<usize> = parse_words(&dims_line, "dimensions")?;
    if dims.len() != 2 {
        return Err(ParseError::BadDimensions { found: dims_line });
    }
    let (m, n) = (dims[0], dims[1]);

    let basic_line = read_line(&mut lines, "basic labels")?;
    let basic: Vec<Label> = parse_words::<usize>(&basic_line, "basic labels")?
        .into_iter()
        .map(Label)
        .collect();
    if basic.len() != m {
        return Err(ParseError::WrongLength { context: "basic labels", expected: m, got: basic.len() });
    }

    let nonbasic_line = read_line(&mut lines, "non-basic labels")?;
    let nonbasic: Vec<Label> = parse_words::<usize>(&nonbasic_line, "non-basic labels")?
        .into_iter()
        .map(Label)
        .collect();
    if nonbasic.len() != n {
        return Err(ParseError::WrongLength { context: "non-basic labels", expected: n, got: nonbasic.len() });
    }

    let b_line = read_line(&mut lines, "b vector")?;
    let b: Vec<T> = parse_words(&b_line, "b vector")?;
    if b.len() != m {
        return Err(ParseError::WrongLength { context: "b vector", expected: m, got: b.len() });
    }

    let mut a = Matrix::<T>::with_capacity(m, n);
    for _ in 0..m {
        let row_line = read_line(&mut lines, "a row")?;
        let row: Vec<T> = parse_words(&row_line, "a row")?;
        if row.len() != n {
            return Err(ParseError::WrongLength { context: "A row", expected: n, got: row.len() });
        }
        a.push_row(&row);
    }

    let obj_line = read_line(&mut lines, "objective row")?;
    let mut obj: Vec<T> = parse_words(&obj_line, "objective row")?;
    if obj.len() != n + 1 {
        return Err(ParseError::WrongLength { context: "objective row", expected: n + 1, got: obj.len() });
    }
    let d = obj.remove(0);
    let c = obj;

    Ok(Dictionary::from_parts(basic, nonbasic, a, b, c, d))
}

#[cfg(test)]
mod tests {
    use super::*;

    const S1_TEXT: &str = "\
3 2
2 3 4
0 1
1 12 12
1 -1
-3 -2
-2 -3
0 1 2
";

    #[test]
    fn parses_well_formed_dictionary() {
        let dict: Dictionary<f64> = parse_dict(S1_TEXT.as_bytes()).expect("valid input");
        assert_eq!(dict.m(), 3);
        assert_eq!(dict.n(), 2);
        assert_eq!(dict.basic, vec![Label(2), Label(3), Label(4)]);
        assert_eq!(dict.nonbasic, vec![Label(0), Label(1)]);
        assert_eq!(dict.b, vec![1.0, 12.0, 12.0]);
        assert_eq!(dict.c, vec![1.0, 2.0]);
        assert_eq!(dict.d, 0.0);
    }

    #[test]
    fn rejects_wrong_length_b_vector() {
        let text = "\
3 2
2 3 4
0 1
1 12
1 -1
-3 -2
-2 -3
0 1 2
";
        let result: Result<Dictionary<f64>, _> = parse_dict(text.as_bytes());
        assert!(matches!(result, Err(ParseError::WrongLength { context: "b vector", .. })));
    }

    #[test]
    fn rejects_truncated_input() {
        let text = "3 2\n2 3 4\n";
        let result: Result<Dictionary<f64>, _> = parse_dict(text.as_bytes());
        assert!(matches!(result, Err(ParseError::UnexpectedEof { .. })));
    }
}
