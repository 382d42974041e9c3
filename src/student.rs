use chrono::{DateTime, Datelike, Duration, Timelike, Utc, Weekday};
use rand::Rng;

use crate::common::{RosterError, Attributable};
use crate::config::RosterConfig;
use crate::random::{random_date, random_string};

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Student {
    name: String,
    birthday: DateTime<Utc>
}

impl Student {
    pub fn new(name: String, birthday: DateTime<Utc>) -> Student {
        Student{name: name, birthday: birthday}
    }

    // generates a student with a random name and a birthday that
    // puts them within the configured ages at "now"
    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        config: &RosterConfig,
        now: &DateTime<Utc>
    ) -> Result<Student, RosterError> {
        let name = random_string(
            rng,
            config.min_name_len,
            config.max_name_len,
            Some(config.name_case.as_ref())
        )?;
        let (earliest, latest) = config.birth_window(now)?;
        let birthday = random_date(rng, &earliest, &latest)?;
        Ok(Student::new(name, birthday))
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn birthday(&self) -> DateTime<Utc> {
        self.birthday
    }
    pub fn unix(&self) -> i64 {
        self.birthday.timestamp()
    }
    pub fn year(&self) -> i32 {
        self.birthday.year()
    }
    pub fn month(&self) -> u32 {
        self.birthday.month()
    }
    pub fn day(&self) -> u32 {
        self.birthday.day()
    }
    pub fn weekday(&self) -> Weekday {
        self.birthday.weekday()
    }
    pub fn hour(&self) -> u32 {
        self.birthday.hour()
    }
    pub fn minute(&self) -> u32 {
        self.birthday.minute()
    }

    // the day within the birth year, 1 to 366
    pub fn day_of_year(&self) -> u32 {
        self.birthday.ordinal()
    }

    // time elapsed between the birthday and "now"
    pub fn age(&self, now: &DateTime<Utc>) -> Duration {
        *now - self.birthday
    }
}

impl Attributable for Student {
    fn attribute_names() -> Vec<&'static str> {
        return vec!("name", "birthday");
    }
    fn attribute_values(&self) -> Vec<String> {
        return vec!(self.name.clone(), self.birthday.to_rfc3339());
    }
}
