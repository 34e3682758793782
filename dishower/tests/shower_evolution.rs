//! End-to-end evolution of the reference configuration: seed 0,
//! one-loop coupling at the Z pole, cutoff t0 = 1 GeV^2.

use dishower::alphas::{Order, RunningCoupling};
use dishower::event::{Event, Particle};
use dishower::matrix::HardProcessSampler;
use dishower::random::UniformSource;
use dishower::shower::DipoleShowerEngine;
use dishower::{ELECTRON, POSITRON};
use fourvec::LorentzVector;
use std::collections::HashMap;

fn reference_engine() -> DipoleShowerEngine {
    let alpha_s = RunningCoupling::new(Order::OneLoop, 91.1876, 0.118, 4.75, 1.3);
    DipoleShowerEngine::new(alpha_s, 1.0)
}

fn reference_event() -> Event {
    let e = 91.2 / 2.;
    let pa = LorentzVector::from_args(e, 0., 0., e);
    let pb = LorentzVector::from_args(e, 0., 0., -e);
    Event::new(
        vec![
            Particle::new(ELECTRON, -pa, (0, 0)),
            Particle::new(POSITRON, -pb, (0, 0)),
            Particle::new(2, pa, (1, 0)),
            Particle::new(-2, pb, (0, 1)),
        ],
        1.0,
        1.0,
    )
}

/// Every open colour line must have exactly one producer and exactly
/// one consumer among the outgoing particles.
fn colour_lines_consistent(event: &Event) -> bool {
    let mut produced: HashMap<i64, usize> = HashMap::new();
    let mut consumed: HashMap<i64, usize> = HashMap::new();
    for p in event.outgoing() {
        if p.colour.0 > 0 {
            *produced.entry(p.colour.0).or_insert(0) += 1;
        }
        if p.colour.1 > 0 {
            *consumed.entry(p.colour.1).or_insert(0) += 1;
        }
    }
    if produced.len() != consumed.len() {
        return false;
    }
    produced.iter().all(|(line, n)| {
        *n == 1 && consumed.get(line) == Some(&1)
    })
}

#[test]
fn reference_evolution_conserves_everything() {
    let mut shower = reference_engine();
    let mut ran = UniformSource::new(0);
    let mut event = reference_event();
    let t_start = 91.2f64 * 91.2;

    shower.run(&mut event, t_start, &mut ran).unwrap();

    assert!(event.particles.len() >= 4);
    assert!(event.momentum_balanced(), "total momentum drifted:\n{}", event);
    assert!(colour_lines_consistent(&event), "broken colour flow:\n{}", event);

    // all outgoing particles are quarks or gluons with sensible colour
    for p in event.outgoing() {
        assert!(p.pdg == 21 || (p.pdg.abs() >= 1 && p.pdg.abs() <= 5));
        match p.pdg {
            21 => assert!(p.colour.0 > 0 && p.colour.1 > 0),
            q if q > 0 => assert!(p.colour.0 > 0 && p.colour.1 == 0),
            _ => assert!(p.colour.0 == 0 && p.colour.1 > 0),
        }
    }
}

#[test]
fn seeded_evolution_is_reproducible() {
    let run = || {
        let mut shower = reference_engine();
        let mut ran = UniformSource::new(0);
        let mut event = reference_event();
        shower.run(&mut event, 91.2f64 * 91.2, &mut ran).unwrap();
        event
    };
    let a = run();
    let b = run();
    assert_eq!(a.particles.len(), b.particles.len());
    for (pa, pb) in a.particles.iter().zip(&b.particles) {
        assert_eq!(pa.pdg, pb.pdg);
        assert_eq!(pa.colour, pb.colour);
        assert_eq!(pa.momentum, pb.momentum);
    }
}

#[test]
fn many_sampled_events_stay_consistent() {
    let mut shower = reference_engine();
    let mut ran = UniformSource::new(0);
    let sampler = HardProcessSampler::new(91.2);
    let mut multiplicities = Vec::new();
    for i in 0..200 {
        let mut event = sampler.generate(&mut ran);
        event.number = i;
        let t_start =
            (event.particles[0].momentum + event.particles[1].momentum).square();
        shower.run(&mut event, t_start, &mut ran).unwrap();
        assert!(event.momentum_balanced(), "event {} unbalanced", i);
        assert!(colour_lines_consistent(&event), "event {} colour broken", i);
        multiplicities.push(event.particles.len());
    }
    // the Z pole radiates: some events must have picked up emissions
    assert!(multiplicities.iter().any(|&n| n > 4));
}
