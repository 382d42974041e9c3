use chrono::{DateTime, Utc};
use log::{debug, info};
use rand::Rng;

use crate::common::RosterError;
use crate::config::RosterConfig;
use crate::roster::Roster;

pub static DAYS_IN_YEAR: u32 = 365;

// the outcome of repeatedly generating classes and checking them
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Simulation {
    pub class_size: usize,
    pub trials: usize,
    // number of trials in which two students shared a birthday
    pub hits: usize
}

impl Simulation {
    // the fraction of trials that had a shared birthday
    pub fn estimate(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.hits as f64 / self.trials as f64
    }
}

// probability that at least two of "n" people share a birthday,
// assuming "days" equally likely birthdays
pub fn theoretical_probability(n: usize, days: u32) -> f64 {
    if n < 2 {
        return 0.0;
    }
    if n > days as usize {
        return 1.0;
    }
    let days = days as f64;
    let all_distinct: f64 = (0..n)
        .map(|i| (days - i as f64) / days)
        .product();
    1.0 - all_distinct
}

// generates "trials" classes of "class_size" students and counts
// how many contain a shared day-of-year
pub fn simulate<R: Rng + ?Sized>(
    rng: &mut R,
    class_size: usize,
    trials: usize,
    now: &DateTime<Utc>
) -> Result<Simulation, RosterError> {
    simulate_with(rng, class_size, trials, now, &RosterConfig::default())
}

pub fn simulate_with<R: Rng + ?Sized>(
    rng: &mut R,
    class_size: usize,
    trials: usize,
    now: &DateTime<Utc>,
    config: &RosterConfig
) -> Result<Simulation, RosterError> {
    let mut hits = 0;
    for trial in 0..trials {
        let roster = Roster::generate_with(rng, class_size, now, config)?;
        if roster.same_birthday() {
            hits += 1;
        }
        debug!("trial {}: {} hits so far", trial, hits);
    }
    let sim = Simulation{class_size: class_size, trials: trials, hits: hits};
    info!(
        "{} trials of {} students: {} shared a birthday ({:.3})",
        trials, class_size, hits, sim.estimate()
    );
    Ok(sim)
}
