use std::env;
use std::fs::File;
use std::str::FromStr;

use chrono::Utc;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use birthday_roster::common::RosterError;
use birthday_roster::config::{DEFAULT_CLASS_SIZE, DEFAULT_TRIALS};
use birthday_roster::paradox::{self, DAYS_IN_YEAR};
use birthday_roster::roster::Roster;

static USAGE: &'static str = "usage: birthday_roster [class_size] [trials] [seed] [csv_file]";

fn parse_arg<T: FromStr>(args: &[String], i: usize, name: &str) -> Result<Option<T>, RosterError> {
    match args.get(i) {
        Some(raw) => match raw.parse::<T>() {
            Ok(v) => Ok(Some(v)),
            Err(_) => Err(RosterError::InvalidArgument(format!("{} '{}'", name, raw))),
        },
        None => Ok(None),
    }
}

fn run(args: &[String]) -> Result<(), RosterError> {
    let class_size = parse_arg(args, 1, "class_size")?.unwrap_or(DEFAULT_CLASS_SIZE);
    let trials = parse_arg(args, 2, "trials")?.unwrap_or(DEFAULT_TRIALS);
    let mut rng = match parse_arg::<u64>(args, 3, "seed")? {
        Some(seed) => {
            info!("seeding generator with {}", seed);
            StdRng::seed_from_u64(seed)
        },
        None => StdRng::from_entropy(),
    };
    let now = Utc::now();

    let mut roster = Roster::generate(&mut rng, class_size, &now)?;
    roster.sort_by_birthday();
    print!("{}", roster);

    match roster.same_birthday_pair() {
        Some((i, j)) => {
            if let (Some(a), Some(b)) = (roster.get(i), roster.get(j)) {
                println!(
                    "{} ({:02}/{:02}) and {} ({:02}/{:02}) share day {} of the year",
                    a.name(), a.month(), a.day(),
                    b.name(), b.month(), b.day(),
                    a.day_of_year()
                );
            }
        },
        None => println!("No two students share a birthday"),
    }

    if let Some(path) = args.get(4) {
        roster.write_csv(File::create(path)?)?;
        info!("wrote roster to {}", path);
    }

    let sim = paradox::simulate(&mut rng, class_size, trials, &now)?;
    println!(
        "{} of {} classes of {} had a shared birthday: {:.3} (theory {:.3})",
        sim.hits,
        sim.trials,
        class_size,
        sim.estimate(),
        paradox::theoretical_probability(class_size, DAYS_IN_YEAR)
    );
    Ok(())
}

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();
    if let Err(e) = run(&args) {
        println!("{}", e);
        println!("{}", USAGE);
        std::process::exit(1);
    }
}
