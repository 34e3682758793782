//! A final-state dipole shower for `e+e- -> hadrons` at leading order.
//!
//! The hard process (`matrix`) produces a two-parton event which the
//! `shower` engine evolves down to an infrared cutoff with the Sudakov
//! veto algorithm, using the running coupling from `alphas` and the
//! splitting kernels from `kernels`.

pub mod alphas;
pub mod error;
pub mod event;
pub mod kernels;
pub mod matrix;
pub mod random;
pub mod run_card;
pub mod shower;

/// PDG code of the gluon.
pub const GLUON: i64 = 21;
/// PDG code of the electron.
pub const ELECTRON: i64 = 11;
/// PDG code of the positron.
pub const POSITRON: i64 = -11;
