//! Dipole splitting kernels.
//!
//! Each kernel exposes the exact splitting amplitude used in the veto
//! acceptance test, a `y`-independent overestimate with a closed-form
//! integral, and the inverse CDF of that overestimate for sampling the
//! longitudinal fraction `z`.

use crate::alphas::{CA, CF, TR};
use crate::GLUON;
use std::fmt;

/// A splitting channel, tagged by its flavour content.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SplittingKernel {
    /// q -> q g for one quark flavour (either sign).
    QuarkToQuarkGluon { flavour: i64 },
    /// g -> g g.
    GluonToGluons,
    /// g -> q qbar for one quark flavour.
    GluonToQuarks { flavour: i64 },
}

impl fmt::Display for SplittingKernel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [a, b, c] = self.flavours();
        write!(f, "SF : {} -> {} , {}", a, b, c)
    }
}

impl SplittingKernel {
    /// Flavour triple (splitter, continuing daughter, emitted daughter).
    pub fn flavours(&self) -> [i64; 3] {
        match *self {
            SplittingKernel::QuarkToQuarkGluon { flavour } => [flavour, flavour, GLUON],
            SplittingKernel::GluonToGluons => [GLUON, GLUON, GLUON],
            SplittingKernel::GluonToQuarks { flavour } => [GLUON, flavour, -flavour],
        }
    }

    pub fn splitter_flavour(&self) -> i64 {
        self.flavours()[0]
    }

    /// The exact splitting amplitude, singular as z -> 1 for the
    /// gluon-emission channels.
    pub fn value(&self, z: f64, y: f64) -> f64 {
        match *self {
            SplittingKernel::QuarkToQuarkGluon { .. } => {
                CF * (2. / (1. - z * (1. - y)) - (1. + z))
            }
            SplittingKernel::GluonToGluons => {
                CA / 2. * (2. / (1. - z * (1. - y)) - 2. + z * (1. - z))
            }
            SplittingKernel::GluonToQuarks { .. } => TR / 2. * (1. - 2. * z * (1. - z)),
        }
    }

    /// Pointwise upper bound on `value` over the physical `y` range.
    pub fn estimate(&self, z: f64) -> f64 {
        match *self {
            SplittingKernel::QuarkToQuarkGluon { .. } => CF * 2. / (1. - z),
            SplittingKernel::GluonToGluons => CA / (1. - z),
            SplittingKernel::GluonToQuarks { .. } => TR / 2.,
        }
    }

    /// Definite integral of `estimate` over `[zm, zp]`.
    pub fn integral(&self, zm: f64, zp: f64) -> f64 {
        match *self {
            SplittingKernel::QuarkToQuarkGluon { .. } => {
                CF * 2. * ((1. - zm) / (1. - zp)).ln()
            }
            SplittingKernel::GluonToGluons => CA * ((1. - zm) / (1. - zp)).ln(),
            SplittingKernel::GluonToQuarks { .. } => TR / 2. * (zp - zm),
        }
    }

    /// Map a uniform draw `u` to a `z` in `[zm, zp]` distributed like
    /// `estimate`, via the closed-form inverse CDF.
    pub fn generate_z(&self, zm: f64, zp: f64, u: f64) -> f64 {
        match *self {
            SplittingKernel::QuarkToQuarkGluon { .. } | SplittingKernel::GluonToGluons => {
                1. + (zp - 1.) * ((1. - zm) / (1. - zp)).powf(u)
            }
            SplittingKernel::GluonToQuarks { .. } => zm + (zp - zm) * u,
        }
    }
}

/// All active channels: q -> qg for both signs of the five light
/// flavours, g -> q qbar per flavour, and g -> gg once.
pub fn all_kernels() -> Vec<SplittingKernel> {
    let mut kernels = Vec::with_capacity(16);
    for fl in (-5..=5).filter(|&fl| fl != 0) {
        kernels.push(SplittingKernel::QuarkToQuarkGluon { flavour: fl });
    }
    for fl in 1..=5 {
        kernels.push(SplittingKernel::GluonToQuarks { flavour: fl });
    }
    kernels.push(SplittingKernel::GluonToGluons);
    kernels
}
