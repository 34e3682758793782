use fourvec::LorentzVector;
use std::fmt;

/// Colour tuple (line, anti-line); 0 means no line on that side.
pub type Colour = (i64, i64);

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Particle {
    pub pdg: i64,
    pub momentum: LorentzVector<f64>,
    pub colour: Colour,
}

impl Particle {
    pub fn new(pdg: i64, momentum: LorentzVector<f64>, colour: Colour) -> Particle {
        Particle {
            pdg,
            momentum,
            colour,
        }
    }

    /// True iff the two particles share an open colour line.
    pub fn colour_connected(&self, other: &Particle) -> bool {
        (self.colour.0 > 0 && self.colour.0 == other.colour.1)
            || (self.colour.1 > 0 && self.colour.1 == other.colour.0)
    }
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:>4} : {} : ({},{})",
            self.pdg, self.momentum, self.colour.0, self.colour.1
        )
    }
}

/// One event: the two incoming leptons (indices 0 and 1, stored with
/// negated momenta so the full sum vanishes) followed by the outgoing
/// particles in emission order.
#[derive(Debug, Clone)]
pub struct Event {
    pub particles: Vec<Particle>,
    /// Differential cross-section weight in pb.
    pub dxs: f64,
    /// Bare squared matrix element.
    pub me_weight: f64,
    pub number: usize,
}

impl Event {
    pub fn new(particles: Vec<Particle>, dxs: f64, me_weight: f64) -> Event {
        Event {
            particles,
            dxs,
            me_weight,
            number: 0,
        }
    }

    pub fn outgoing(&self) -> &[Particle] {
        &self.particles[2..]
    }

    /// Component-wise total momentum; zero for a well-formed event.
    pub fn total_momentum(&self) -> LorentzVector<f64> {
        self.particles.iter().map(|p| p.momentum).sum()
    }

    pub fn momentum_balanced(&self) -> bool {
        let total = self.total_momentum();
        total.t.abs() < 1e-9
            && total.x.abs() < 1e-9
            && total.y.abs() < 1e-9
            && total.z.abs() < 1e-9
    }

    /// True iff some ordered pair of outgoing particles is colour
    /// connected, i.e. the shower has something to evolve.
    pub fn has_colour_flow(&self) -> bool {
        let outgoing = self.outgoing();
        outgoing.iter().enumerate().any(|(i, a)| {
            outgoing
                .iter()
                .enumerate()
                .any(|(j, b)| i != j && a.colour_connected(b))
        })
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "XS       : {:e}", self.dxs)?;
        writeln!(f, "MEWeight : {:e}", self.me_weight)?;
        writeln!(
            f,
            " #    pdg {:>24} {:>24} {:>24} {:>24}   colour",
            "E", "p_x", "p_y", "p_z"
        )?;
        for (i, p) in self.particles.iter().enumerate() {
            writeln!(
                f,
                " {:<4} {:>4} {:24.16e} {:24.16e} {:24.16e} {:24.16e}   ({},{})",
                i,
                p.pdg,
                p.momentum.t,
                p.momentum.x,
                p.momentum.y,
                p.momentum.z,
                p.colour.0,
                p.colour.1
            )?;
        }
        Ok(())
    }
}
