use thiserror::Error;

/// Fatal preconditions on the starting event. Everything else inside
/// the evolution (forbidden pairs, unphysical sampled points, vetoed
/// trials) is ordinary control flow and never surfaces.
#[derive(Error, Debug, PartialEq)]
pub enum ShowerError {
    #[error("starting scale must be positive, got {0}")]
    NonPositiveStartScale(f64),

    #[error("starting event has no colour-connected outgoing pair")]
    NoColourFlow,
}
