//! Dictionary-form simplex method: pivot algebra, Bland's-rule pivot
//! selection, a Phase-I/Phase-II solver, the primal/dual transform, and a
//! Gomory cutting-plane driver for integer programs.

pub mod cut;
pub mod dictionary;
pub mod dual;
pub mod error;
pub mod integer;
pub mod io;
pub mod label;
pub mod linalg;
pub mod pivot;
pub mod scalar;
pub mod solve;

pub use dictionary::Dictionary;
pub use error::{ParseError, SolveError};
pub use label::{Label, Position};
pub use scalar::Scalar;

/// Installs a `tracing` subscriber that reads its filter from `RUST_LOG`,
/// defaulting to `warn` when unset. Call once from a binary's `main`; has no
/// effect if a subscriber is already installed.
pub fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}
