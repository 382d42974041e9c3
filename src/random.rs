use chrono::{DateTime, Duration, Utc};
use log::trace;
use rand::Rng;

use crate::common::RosterError;

// a transformation applied to a freshly generated string
pub type CaseFn = dyn Fn(&str) -> String;

pub trait Random: Sized {
    // produces a random value in the range specified
    // rng: the generator to draw from
    // lower: the inclusive lower bound for the random value
    // upper: the exclusive upper bound for the random value
    // return: a random value between the specified range, or
    //     InvalidRange if upper is not above lower
    fn random_in_range<R: Rng + ?Sized>(
        rng: &mut R,
        lower: &Self,
        upper: &Self
    ) -> Result<Self, RosterError>;
}

impl Random for usize {
    fn random_in_range<R: Rng + ?Sized>(
        rng: &mut R,
        lower: &usize,
        upper: &usize
    ) -> Result<usize, RosterError> {
        if upper <= lower {
            return Err(RosterError::invalid_range(lower, upper));
        }
        Ok(rng.gen_range(*lower, *upper))
    }
}

// sampled at whole-second granularity, offset from the lower bound;
// spans shorter than a second fall back to nanoseconds
impl Random for DateTime<Utc> {
    fn random_in_range<R: Rng + ?Sized>(
        rng: &mut R,
        lower: &DateTime<Utc>,
        upper: &DateTime<Utc>
    ) -> Result<DateTime<Utc>, RosterError> {
        if upper <= lower {
            return Err(RosterError::invalid_range(lower.to_rfc3339(), upper.to_rfc3339()));
        }
        let span = *upper - *lower;
        let seconds = span.num_seconds();
        if seconds > 0 {
            return Ok(*lower + Duration::seconds(rng.gen_range(0, seconds)));
        }
        // under a second, so this always fits
        let nanos = span.num_nanoseconds().unwrap_or(0);
        if nanos <= 0 {
            return Ok(*lower);
        }
        Ok(*lower + Duration::nanoseconds(rng.gen_range(0, nanos)))
    }
}

// generates a string of random lowercase letters
// min: the inclusive lower bound on the length
// max: the exclusive upper bound on the length
// case: optional transformation applied to the letters
pub fn random_string<R: Rng + ?Sized>(
    rng: &mut R,
    min: usize,
    max: usize,
    case: Option<&CaseFn>
) -> Result<String, RosterError> {
    let length = usize::random_in_range(rng, &min, &max)?;
    let letters: String = (0..length)
        .map(|_| (b'a' + rng.gen_range(0u8, 26u8)) as char)
        .collect();
    trace!("generated {} letters: {}", length, letters);

    Ok(match case {
        Some(f) => f(&letters),
        None => letters
    })
}

pub fn random_date<R: Rng + ?Sized>(
    rng: &mut R,
    min: &DateTime<Utc>,
    max: &DateTime<Utc>
) -> Result<DateTime<Utc>, RosterError> {
    DateTime::<Utc>::random_in_range(rng, min, max)
}

// upper-cases the first letter and lower-cases the rest
pub fn capitalise(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new()
    }
}
