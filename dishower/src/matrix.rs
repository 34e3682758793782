//! Leading-order hard process `e+e- -> gamma*/Z -> q qbar`.

use crate::event::{Event, Particle};
use crate::random::UniformSource;
use crate::{ELECTRON, POSITRON};
use fourvec::LorentzVector;
use std::f64::consts::PI;

/// GeV^-2 to pb.
const GEV2_TO_PB: f64 = 3.89379656e8;

#[derive(Debug, Copy, Clone)]
pub struct EwParameters {
    pub mz2: f64,
    pub gz2: f64,
    pub alpha0: f64,
    pub sin2tw: f64,
    pub qe: f64,
    pub ae: f64,
}

impl Default for EwParameters {
    fn default() -> EwParameters {
        EwParameters {
            mz2: 91.1876 * 91.1876,
            gz2: 2.4952 * 2.4952,
            alpha0: 1. / 128.802,
            sin2tw: 0.22293,
            qe: -1.,
            ae: -0.5,
        }
    }
}

pub struct HardProcessSampler {
    ew: EwParameters,
    ecms: f64,
}

impl HardProcessSampler {
    pub fn new(ecms: f64) -> HardProcessSampler {
        HardProcessSampler {
            ew: EwParameters::default(),
            ecms,
        }
    }

    pub fn set_ew_parameters(&mut self, ew: EwParameters) {
        self.ew = ew;
    }

    /// Spin- and colour-summed squared matrix element for
    /// `e+e- -> q qbar` with massless fermions, as a function of the
    /// Mandelstam invariants `s` and `t`.
    pub fn me2(&self, flavour: i64, s: f64, t: f64) -> f64 {
        let ve = self.ew.ae - 2. * self.ew.qe * self.ew.sin2tw;
        let up_type = flavour.abs() == 2 || flavour.abs() == 4;
        let (qf, af) = if up_type { (2. / 3., 0.5) } else { (-1. / 3., -0.5) };
        let vf = af - 2. * qf * self.ew.sin2tw;

        let kappa = 1. / (4. * self.ew.sin2tw * (1. - self.ew.sin2tw));
        let prop = (s - self.ew.mz2) * (s - self.ew.mz2) + self.ew.gz2 * self.ew.mz2;
        let chi1 = kappa * s * (s - self.ew.mz2) / prop;
        let chi2 = kappa * kappa * s * s / prop;

        let term1 = (1. + (1. + 2. * t / s).powi(2))
            * ((qf * self.ew.qe).powi(2)
                + 2. * (qf * self.ew.qe * vf * ve) * chi1
                + (self.ew.ae * self.ew.ae + ve * ve) * (af * af + vf * vf) * chi2);
        let term2 = (1. + 2. * t / s)
            * (4. * self.ew.qe * qf * self.ew.ae * af * chi1
                + 8. * self.ew.ae * ve * af * vf * chi2);

        (4. * PI * self.ew.alpha0).powi(2) * 3.0 * (term1 + term2)
    }

    /// Sample one hard event: a back-to-back massless quark pair with
    /// opposite unit colour indices, flat in cos(theta) and phi. The
    /// incoming leptons are stored with negated momenta.
    pub fn generate(&self, ran: &mut UniformSource) -> Event {
        let ct = 2. * ran.next() - 1.;
        let st = (1. - ct * ct).sqrt();
        let phi = 2. * PI * ran.next();
        let e = self.ecms / 2.;

        let pa = LorentzVector::from_args(e, 0., 0., e);
        let pb = LorentzVector::from_args(e, 0., 0., -e);
        let p1 = LorentzVector::from_args(e, e * st * phi.cos(), e * st * phi.sin(), e * ct);
        let p2 = LorentzVector::from_args(e, -e * st * phi.cos(), -e * st * phi.sin(), -e * ct);

        let flavour = ran.next_flavour();

        let me_weight = self.me2(flavour, (pa + pb).square(), (pa - p1).square());
        // sum over the 5 flavours is done by the flat flavour choice
        let dxs = 5. * me_weight * GEV2_TO_PB / (8. * PI) / (2. * self.ecms * self.ecms);

        Event::new(
            vec![
                Particle::new(ELECTRON, -pa, (0, 0)),
                Particle::new(POSITRON, -pb, (0, 0)),
                Particle::new(flavour, p1, (1, 0)),
                Particle::new(-flavour, p2, (0, 1)),
            ],
            dxs,
            me_weight,
        )
    }
}
