//! The dipole-shower evolution engine.
//!
//! Evolution runs in the ordering variable `t` from the hard scale down
//! to the infrared cutoff `t0` with the Sudakov veto algorithm: every
//! step recomputes trial scales for all colour-connected dipoles and
//! all matching splitting channels, keeps the highest one, and accepts
//! it with the ratio of the exact splitting weight to its overestimate.
//! Rejected trials still lower the current scale.

use crate::alphas::RunningCoupling;
use crate::error::ShowerError;
use crate::event::{Colour, Event, Particle};
use crate::kernels::{all_kernels, SplittingKernel};
use crate::random::UniformSource;
use crate::GLUON;
use fourvec::LorentzVector;
use std::f64::consts::PI;

/// The winning trial of one veto step. Indices into the event's
/// particle list and the kernel set; recomputed every step, so no
/// reference survives the mutation of the particle list.
#[derive(Debug, Copy, Clone)]
struct DipoleCandidate {
    splitter: usize,
    spectator: usize,
    kernel: usize,
    m2: f64,
    zp: f64,
}

pub struct DipoleShowerEngine {
    alpha_s: RunningCoupling,
    kernels: Vec<SplittingKernel>,
    t_cutoff: f64,
    t_current: f64,
    alpha_s_max: f64,
    colour_counter: i64,
}

impl DipoleShowerEngine {
    pub fn new(alpha_s: RunningCoupling, t_cutoff: f64) -> DipoleShowerEngine {
        let alpha_s_max = alpha_s.value(t_cutoff);
        // the trial overestimate uses the coupling at the cutoff as a
        // global maximum, which requires the coupling to fall with t
        assert!(
            alpha_s_max >= alpha_s.value(4. * t_cutoff)
                && alpha_s_max >= alpha_s.value(100. * t_cutoff),
            "running coupling must decrease with scale above the cutoff"
        );
        DipoleShowerEngine {
            alpha_s,
            kernels: all_kernels(),
            t_cutoff,
            t_current: -1.,
            alpha_s_max,
            colour_counter: 0,
        }
    }

    pub fn cutoff(&self) -> f64 {
        self.t_cutoff
    }

    /// Evolve `event` in place from `t_start` down to the cutoff.
    pub fn run(
        &mut self,
        event: &mut Event,
        t_start: f64,
        ran: &mut UniformSource,
    ) -> Result<(), ShowerError> {
        if t_start <= 0. {
            return Err(ShowerError::NonPositiveStartScale(t_start));
        }
        if !event.has_colour_flow() {
            return Err(ShowerError::NoColourFlow);
        }
        // the hard process used line 1; fresh lines continue from there
        self.colour_counter = 1;
        self.t_current = t_start;
        while self.t_current > self.t_cutoff {
            self.generate_emission(event, ran);
        }
        Ok(())
    }

    /// One accepted emission, or termination. Vetoed trials loop here
    /// at ever lower scales until either a trial passes or the scale
    /// drops out of range.
    fn generate_emission(&mut self, event: &mut Event, ran: &mut UniformSource) {
        while self.t_current > self.t_cutoff {
            let (t, winner) = self.select_trial(event, ran);
            self.t_current = t;
            let candidate = match winner {
                Some(c) if t > self.t_cutoff => c,
                _ => return,
            };

            let kernel = self.kernels[candidate.kernel];
            let z = kernel.generate_z(1. - candidate.zp, candidate.zp, ran.next());
            let y = t / candidate.m2 / z / (1. - z);
            if y >= 1. {
                continue;
            }

            let weight = (1. - y) * self.alpha_s.value(t) * kernel.value(z, y);
            let overestimate = self.alpha_s_max * kernel.estimate(z);
            if ran.next() >= weight / overestimate {
                continue;
            }

            let phi = 2. * PI * ran.next();
            let [pi, pj, pk] = build_kinematics(
                z,
                y,
                phi,
                &event.particles[candidate.splitter].momentum,
                &event.particles[candidate.spectator].momentum,
            );
            self.colour_counter += 1;
            let flavours = kernel.flavours();
            let (col_splitter, col_emitted) = build_colours(
                &flavours,
                event.particles[candidate.splitter].colour,
                self.colour_counter,
            );

            let splitter = &mut event.particles[candidate.splitter];
            splitter.pdg = flavours[1];
            splitter.momentum = pi;
            splitter.colour = col_splitter;
            event.particles[candidate.spectator].momentum = pk;
            event
                .particles
                .push(Particle::new(flavours[2], pj, col_emitted));
            return;
        }
    }

    /// Competing trial scales across all dipoles and channels; the
    /// largest one wins. Returns the cutoff when nothing can radiate.
    fn select_trial(
        &self,
        event: &Event,
        ran: &mut UniformSource,
    ) -> (f64, Option<DipoleCandidate>) {
        let mut t_winner = self.t_cutoff;
        let mut winner = None;
        for split in 2..event.particles.len() {
            for spect in 2..event.particles.len() {
                if spect == split {
                    continue;
                }
                if !event.particles[split].colour_connected(&event.particles[spect]) {
                    continue;
                }
                let m2 = (event.particles[split].momentum + event.particles[spect].momentum)
                    .square();
                if m2 < 4. * self.t_cutoff {
                    continue;
                }
                let zp = 0.5 * (1. + (1. - 4. * self.t_cutoff / m2).max(0.).sqrt());
                for (ik, kernel) in self.kernels.iter().enumerate() {
                    if kernel.splitter_flavour() != event.particles[split].pdg {
                        continue;
                    }
                    let g = self.alpha_s_max / (2. * PI) * kernel.integral(1. - zp, zp);
                    let t_trial = self.t_current * ran.next().powf(1. / g);
                    if t_trial > t_winner {
                        t_winner = t_trial;
                        winner = Some(DipoleCandidate {
                            splitter: split,
                            spectator: spect,
                            kernel: ik,
                            m2,
                            zp,
                        });
                    }
                }
            }
        }
        (t_winner, winner)
    }
}

/// Exact momentum-conserving branching kinematics in the dipole frame.
/// Returns `[p_i, p_j, p_k]` for the continuing splitter, the emission
/// and the spectator; their sum equals `pijt + pkt` by construction.
pub fn build_kinematics(
    z: f64,
    y: f64,
    phi: f64,
    pijt: &LorentzVector<f64>,
    pkt: &LorentzVector<f64>,
) -> [LorentzVector<f64>; 3] {
    let q = pijt + pkt;
    let rkt = (q.square() * y * z * (1. - z)).max(0.).sqrt();

    let mut n_perp = pijt.spatial_cross(pkt);
    if n_perp.spatial_distance() < 1e-6 {
        // collinear dipole: any fixed direction off the axis will do
        n_perp = pijt.spatial_cross(&LorentzVector::from_args(0., 1., 0., 0.));
    }
    let kt1 = n_perp * (rkt * phi.cos() / n_perp.spatial_distance());

    // second transverse axis, built in the dipole rest frame
    let beta = q / q.t;
    let pijt_rest = pijt.boost(&-beta);
    let mut kt2 = pijt_rest.spatial_cross(&kt1);
    kt2 *= rkt * phi.sin() / kt2.spatial_distance();
    let kt2 = kt2.boost(&beta);

    let pi = pijt * z + pkt * ((1. - z) * y) + kt1 + kt2;
    let pj = pijt * (1. - z) + pkt * (z * y) - kt1 - kt2;
    let pk = pkt * (1. - y);
    [pi, pj, pk]
}

/// Colour tuples for the continuing splitter and the emitted daughter,
/// given the channel's flavour triple, the splitter's old colour and
/// the freshly minted line index.
pub fn build_colours(flavours: &[i64; 3], old: Colour, fresh: i64) -> (Colour, Colour) {
    if flavours[0] != GLUON {
        if flavours[0] > 0 {
            // q -> q g: the new line joins quark and gluon, the old
            // line moves onto the gluon
            ((fresh, 0), (old.0, fresh))
        } else {
            ((0, fresh), (fresh, old.1))
        }
    } else if flavours[1] == GLUON {
        // g -> g g: the fresh line runs between the two daughters
        ((old.0, fresh), (fresh, old.1))
    } else {
        // g -> q qbar: each old line terminates on one daughter
        ((old.0, 0), (0, old.1))
    }
}
