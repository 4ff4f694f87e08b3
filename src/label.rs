use std::fmt;

/// The permanent name of a variable. Does not change across pivots.
///
/// Labels and positions are both plain integers in spirit, easy to conflate
/// by naming convention alone; this newtype makes the two kinds impossible
/// to pass to the wrong parameter by accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Label(pub usize);

/// An index into the current row/column vectors of a dictionary. Changes
/// every pivot, unlike [`Label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(pub usize);

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for Label {
    fn from(v: usize) -> Self {
        Label(v)
    }
}

impl From<usize> for Position {
    fn from(v: usize) -> Self {
        Position(v)
    }
}
