extern crate clap;
extern crate dilepton;

use clap::{App, Arg, ArgMatches, SubCommand};
use dilepton::analyser::{Analyser, PtDistribution, TotalCrossSection};
use dilepton::integrand::Integrand;
use dilepton::matrix_elements::PpToLLbar;
use dilepton::pdf::{AntiHadron, ToyHadron};
use dilepton::rng::seeded;
use dilepton::run_card::RunCard;
use dilepton::{Error, Result};
use rand::rngs::StdRng;
use std::io::{self, Write};
use std::str::FromStr;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn parse_option<T: FromStr>(matches: &ArgMatches, option: &'static str) -> Result<Option<T>> {
    match matches.value_of(option) {
        Some(x) => T::from_str(x).map(Some).map_err(|_| Error::InvalidArgument {
            option,
            value: x.to_owned(),
        }),
        None => Ok(None),
    }
}

fn new_integrand(card: &RunCard) -> Integrand {
    Integrand::new(
        card.collider_energy,
        Box::new(ToyHadron),
        Box::new(AntiHadron::new(ToyHadron)),
        Box::new(PpToLLbar),
    )
}

/// Time the generation of `n_events` weighted events.
fn bench(integrand: &mut Integrand, rng: &mut StdRng, card: &RunCard) {
    let now = Instant::now();
    for _ in 0..card.n_events {
        let _w = integrand.generate(rng);
    }

    let elapsed = now.elapsed();
    println!("{:#?}", elapsed);
    println!(
        "{:.3} us per event",
        elapsed.as_secs_f64() * 1e6 / card.n_events as f64
    );
}

/// Print a single event.
fn inspect(integrand: &mut Integrand, rng: &mut StdRng) -> Result<()> {
    let w = integrand.generate(rng);
    let (_, event) = integrand.last_event();

    println!("Weight={:e}", w);
    println!("{}", event);
    print!("{}", serde_yaml::to_string(event)?);
    Ok(())
}

/// Integrate the cross section and print every analyser.
fn run(integrand: &mut Integrand, rng: &mut StdRng, card: &RunCard) -> Result<()> {
    let mut total = TotalCrossSection::new();
    let mut pt = PtDistribution::new(card.pt_histogram.bin_edges())?;

    let progress_step = (card.n_events / 10).max(1);
    let now = Instant::now();
    {
        let mut analysers: [&mut dyn Analyser; 2] = [&mut total, &mut pt];
        for k in 1..=card.n_events {
            integrand.generate_and_analyse(rng, &mut analysers);
            if k % progress_step == 0 {
                info!("{} / {} events", k, card.n_events);
            }
        }
    }
    info!("generated {} events in {:#?}", card.n_events, now.elapsed());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    total.report(&mut out)?;
    pt.report(&mut out)?;
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let matches = App::new("dilepton")
        .version("0.1")
        .about("Monte-Carlo event generator for pp -> l+ l-")
        .arg(
            Arg::with_name("card")
                .long("card")
                .value_name("RUN_CARD")
                .help("YAML run card"),
        )
        .arg(
            Arg::with_name("events")
                .short("n")
                .long("events")
                .value_name("EVENTS")
                .help("Number of events"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("Seed of the random number generator"),
        )
        .arg(
            Arg::with_name("energy")
                .long("energy")
                .value_name("ENERGY")
                .help("Collider energy in GeV"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Log every event"),
        )
        .subcommand(SubCommand::with_name("bench").about("Run a benchmark"))
        .subcommand(SubCommand::with_name("inspect").about("Generate and print a single event"))
        .get_matches();

    let log_level = if matches.is_present("verbose") {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut card = match matches.value_of("card") {
        Some(filename) => RunCard::from_file(filename)?,
        None => RunCard::default(),
    };

    if let Some(x) = parse_option(&matches, "events")? {
        card.n_events = x;
    }
    if let Some(x) = parse_option(&matches, "seed")? {
        card.seed = x;
    }
    if let Some(x) = parse_option(&matches, "energy")? {
        card.collider_energy = x;
    }
    card.validate()?;

    info!(
        collider_energy = card.collider_energy,
        n_events = card.n_events,
        seed = card.seed,
        "starting run"
    );

    let mut integrand = new_integrand(&card);
    let mut rng = seeded(card.seed);

    if matches.subcommand_matches("bench").is_some() {
        bench(&mut integrand, &mut rng, &card);
        return Ok(());
    }

    if matches.subcommand_matches("inspect").is_some() {
        return inspect(&mut integrand, &mut rng);
    }

    run(&mut integrand, &mut rng, &card)
}
