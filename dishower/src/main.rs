use clap::{App, Arg, SubCommand};
use std::io::Write;
use std::str::FromStr;

use dishower::alphas::RunningCoupling;
use dishower::matrix::HardProcessSampler;
use dishower::random::UniformSource;
use dishower::run_card::RunCard;
use dishower::shower::DipoleShowerEngine;

fn main() {
    let matches = App::new("dishower")
        .version("0.1")
        .about("Dipole-shower event generator for e+e- -> hadrons")
        .arg(
            Arg::with_name("card")
                .short("c")
                .long("card")
                .value_name("FILE")
                .help("Path to a YAML run card"),
        )
        .arg(
            Arg::with_name("events")
                .short("n")
                .long("events")
                .value_name("NEVENTS")
                .help("Number of events to generate"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("Random seed"),
        )
        .subcommand(SubCommand::with_name("inspect").about("Print a single showered event"))
        .get_matches();

    let mut card = match matches.value_of("card") {
        Some(path) => RunCard::new(path),
        None => RunCard::default(),
    };

    if let Some(x) = matches.value_of("events") {
        card.nevents = usize::from_str(x).expect("invalid event count");
    }
    if let Some(x) = matches.value_of("seed") {
        card.iseed = u64::from_str(x).expect("invalid seed");
    }

    let alpha_s = RunningCoupling::new(card.order(), card.mz, card.alphas_mz, card.mb, card.mc);
    let mut ran = UniformSource::new(card.iseed);
    let sampler = HardProcessSampler::new(card.ecms);
    let mut shower = DipoleShowerEngine::new(alpha_s, card.shower_t0);

    if matches.subcommand_matches("inspect").is_some() {
        let mut event = sampler.generate(&mut ran);
        let t_start =
            (event.particles[0].momentum + event.particles[1].momentum).square();
        shower
            .run(&mut event, t_start, &mut ran)
            .expect("malformed hard event");
        println!("{}", event);
        println!("momentum balanced : {}", event.momentum_balanced());
        return;
    }

    let nevents = card.nevents;
    let mut sum_w = 0.0f64;
    let mut sum_w2 = 0.0f64;

    for i in 0..nevents {
        let mut event = sampler.generate(&mut ran);
        event.number = i;
        let t_start =
            (event.particles[0].momentum + event.particles[1].momentum).square();
        shower
            .run(&mut event, t_start, &mut ran)
            .expect("malformed hard event");

        sum_w += event.dxs;
        sum_w2 += event.dxs * event.dxs;

        if i % 1000 == 0 {
            let (xs, err) = cross_section(sum_w, sum_w2, nevents);
            print!(
                "\rEvent {}, \u{03c3} = {:.6} \u{00b1} {:.6} [pb] ({:.2} %)",
                i,
                xs,
                err,
                100. * err / xs
            );
            let _ = std::io::stdout().flush();
        }
    }

    let (xs, err) = cross_section(sum_w, sum_w2, nevents);
    println!();
    println!("=============================================");
    println!(
        "  \u{03c3} = {:.6} \u{00b1} {:.6} [pb] ({:.2} %)",
        xs,
        err,
        100. * err / xs
    );
    println!("=============================================");
    println!("Completed! ({} random draws)", ran.calls());
}

fn cross_section(sum_w: f64, sum_w2: f64, n: usize) -> (f64, f64) {
    let n = n as f64;
    let xs = sum_w / n;
    let err = ((sum_w2 / n - xs * xs).abs() / (n - 1.)).sqrt();
    (xs, err)
}
