use chrono::{DateTime, Duration, Months, Utc};

use crate::common::RosterError;
use crate::random::{capitalise, CaseFn};

pub static MIN_NAME_LEN: usize = 4;
pub static MAX_NAME_LEN: usize = 12;
pub static MIN_AGE: u32 = 18;
pub static MAX_AGE: u32 = 30;

// the classic class size with roughly even odds of a shared birthday
pub static DEFAULT_CLASS_SIZE: usize = 23;
pub static DEFAULT_TRIALS: usize = 1000;

// parameters used when generating students
pub struct RosterConfig {
    // name length bounds, [min_name_len, max_name_len)
    pub min_name_len: usize,
    pub max_name_len: usize,

    // age bounds in whole years, relative to the reference time
    pub min_age: u32,
    pub max_age: u32,

    pub name_case: Box<CaseFn>,
}

impl RosterConfig {
    // works out the birthday window for students aged between
    // min_age and max_age at "now"
    // now: the reference time
    // return: (earliest, latest) with latest exclusive
    pub fn birth_window(
        &self,
        now: &DateTime<Utc>
    ) -> Result<(DateTime<Utc>, DateTime<Utc>), RosterError> {
        if self.max_age <= self.min_age {
            return Err(RosterError::invalid_range(self.min_age, self.max_age));
        }
        let earliest = past_day(now, self.max_age, 0, 0)?;
        let latest = past_day(now, self.min_age, 0, 0)?;
        Ok((earliest, latest))
    }
}

impl Default for RosterConfig {
    fn default() -> RosterConfig {
        RosterConfig {
            min_name_len: MIN_NAME_LEN,
            max_name_len: MAX_NAME_LEN,
            min_age: MIN_AGE,
            max_age: MAX_AGE,
            name_case: Box::new(capitalise),
        }
    }
}

impl std::fmt::Debug for RosterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RosterConfig")
            .field("min_name_len", &self.min_name_len)
            .field("max_name_len", &self.max_name_len)
            .field("min_age", &self.min_age)
            .field("max_age", &self.max_age)
            .finish()
    }
}

// the instant "years", "months" and "days" before "now"; months are
// subtracted first, clamping to the end of a shorter month
pub fn past_day(
    now: &DateTime<Utc>,
    years: u32,
    months: u32,
    days: u32
) -> Result<DateTime<Utc>, RosterError> {
    let out_of_range = || RosterError::DateOutOfRange(format!(
        "{} years {} months {} days before {}",
        years, months, days, now.to_rfc3339()
    ));
    let total_months = years.checked_mul(12)
        .and_then(|m| m.checked_add(months))
        .ok_or_else(out_of_range)?;
    now.checked_sub_months(Months::new(total_months))
        .and_then(|d| d.checked_sub_signed(Duration::days(days as i64)))
        .ok_or_else(out_of_range)
}
