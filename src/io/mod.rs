pub mod parse;
pub mod print;

pub use parse::parse_dict;
pub use print::{fprint, to_string};
