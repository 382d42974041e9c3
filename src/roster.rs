use std::fmt;
use std::io::Write;

use chrono::{DateTime, Datelike, Utc};
use log::debug;
use rand::Rng;

use crate::common::{RosterError, Attributable};
use crate::config::RosterConfig;
use crate::student::Student;

// what two students must have in common to share a birthday
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BirthdayKey {
    // day index within the year (1-366), the year is ignored
    DayOfYear,
    // calendar month and day, the year is ignored
    MonthDay,
    // the exact same instant
    Instant
}

impl BirthdayKey {
    fn matches(&self, a: &Student, b: &Student) -> bool {
        match self {
            BirthdayKey::DayOfYear => a.day_of_year() == b.day_of_year(),
            BirthdayKey::MonthDay => {
                a.birthday().month() == b.birthday().month()
                    && a.birthday().day() == b.birthday().day()
            },
            BirthdayKey::Instant => a.birthday() == b.birthday()
        }
    }
}

// an ordered collection of students
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Roster {
    list: Vec<Student>
}

impl Roster {
    pub fn new(list: Vec<Student>) -> Roster {
        Roster{list: list}
    }

    // generates "n" random students aged 18 to 30 at "now"
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        n: usize,
        now: &DateTime<Utc>
    ) -> Result<Roster, RosterError> {
        Self::generate_with(rng, n, now, &RosterConfig::default())
    }

    pub fn generate_with<R: Rng + ?Sized>(
        rng: &mut R,
        n: usize,
        now: &DateTime<Utc>,
        config: &RosterConfig
    ) -> Result<Roster, RosterError> {
        let mut list = Vec::with_capacity(n);
        for _ in 0..n {
            list.push(Student::random(rng, config, now)?);
        }
        debug!("generated roster of {} students with {:?}", n, config);
        Ok(Roster{list: list})
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&Student> {
        self.list.get(i)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Student> {
        self.list.iter()
    }

    // whether student "i" was born strictly before student "j"
    // panics if either index is out of bounds
    pub fn less(&self, i: usize, j: usize) -> bool {
        self.list[i].unix() < self.list[j].unix()
    }

    // panics if either index is out of bounds
    pub fn swap(&mut self, i: usize, j: usize) {
        self.list.swap(i, j);
    }

    // sorts by birth instant, oldest first; equal instants keep their order
    pub fn sort_by_birthday(&mut self) {
        self.list.sort_by_key(|s| s.unix());
    }

    pub fn is_sorted_by_birthday(&self) -> bool {
        (1..self.len()).all(|i| !self.less(i, i - 1))
    }

    // whether two different students share a day-of-year
    pub fn same_birthday(&self) -> bool {
        self.same_birthday_by(BirthdayKey::DayOfYear)
    }

    pub fn same_birthday_by(&self, key: BirthdayKey) -> bool {
        self.same_birthday_pair_by(key).is_some()
    }

    // the first pair (i, j), i < j, of students sharing a day-of-year
    pub fn same_birthday_pair(&self) -> Option<(usize, usize)> {
        self.same_birthday_pair_by(BirthdayKey::DayOfYear)
    }

    pub fn same_birthday_pair_by(&self, key: BirthdayKey) -> Option<(usize, usize)> {
        for (i, a) in self.list.iter().enumerate() {
            for (j, b) in self.list.iter().enumerate().skip(i + 1) {
                if key.matches(a, b) {
                    debug!("{} and {} share a birthday ({:?})", a.name(), b.name(), key);
                    return Some((i, j));
                }
            }
        }
        None
    }

    // compares every ordered pair, each student against itself included,
    // so any non-empty roster reports a match
    pub fn same_birthday_including_self(&self) -> bool {
        for a in self.list.iter() {
            for b in self.list.iter() {
                if a.day_of_year() == b.day_of_year() {
                    return true;
                }
            }
        }
        false
    }

    // writes the roster to "writer" as csv, one student per record;
    // fields holding commas, quotes or newlines are quoted
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), RosterError> {
        let mut writer = csv::Writer::from_writer(writer);
        let mut header = vec!("index");
        header.extend(Student::attribute_names());
        writer.write_record(&header)?;

        for (i, student) in self.list.iter().enumerate() {
            let mut record = vec!(i.to_string());
            record.extend(student.attribute_values());
            writer.write_record(&record)?;
        }
        writer.flush()?;
        return Ok(());
    }
}

impl fmt::Display for Roster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, student) in self.list.iter().enumerate() {
            writeln!(
                f,
                "{:3} {:<20} {:02}/{:02}/{:4}",
                i,
                student.name(),
                student.month(),
                student.day(),
                student.year()
            )?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Student;
    type IntoIter = std::slice::Iter<'a, Student>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.iter()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::{BirthdayKey, Roster};
    use crate::student::Student;

    fn student(name: &str, y: i32, m: u32, d: u32, h: u32) -> Student {
        Student::new(name.to_string(), Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap())
    }

    fn sample() -> Roster {
        Roster::new(vec!(
            student("Carol", 2001, 7, 4, 10),
            student("Alice", 1995, 1, 20, 8),
            student("Bob", 1999, 11, 30, 23),
        ))
    }

    #[test]
    fn test_less_and_swap() {
        let mut roster = sample();
        assert!(roster.less(1, 0));
        assert!(!roster.less(0, 1));
        assert!(!roster.less(2, 2));

        roster.swap(0, 1);
        assert_eq!("Alice", roster.get(0).unwrap().name());
        assert_eq!("Carol", roster.get(1).unwrap().name());
        assert_eq!(3, roster.len());
    }

    #[test]
    fn test_sort_by_birthday() {
        let mut roster = sample();
        assert!(!roster.is_sorted_by_birthday());
        roster.sort_by_birthday();
        assert!(roster.is_sorted_by_birthday());
        let names: Vec<&str> = roster.iter().map(|s| s.name()).collect();
        assert_eq!(vec!("Alice", "Bob", "Carol"), names);
    }

    #[test]
    fn test_no_shared_birthday() {
        let roster = sample();
        assert!(!roster.same_birthday());
        assert_eq!(None, roster.same_birthday_pair());
    }

    #[test]
    fn test_single_student() {
        let roster = Roster::new(vec!(student("Solo", 2000, 5, 5, 5)));
        assert!(!roster.same_birthday());
        assert!(roster.same_birthday_including_self());
        assert!(!Roster::default().same_birthday_including_self());
    }

    #[test]
    fn test_shared_day_of_year() {
        let mut roster = sample();
        roster.list.push(student("Dave", 1997, 1, 20, 15));
        assert!(roster.same_birthday());
        assert_eq!(Some((1, 3)), roster.same_birthday_pair());
        assert!(roster.same_birthday_by(BirthdayKey::MonthDay));
        assert!(!roster.same_birthday_by(BirthdayKey::Instant));
    }

    #[test]
    fn test_day_of_year_differs_from_calendar_day() {
        // both are day 61: Mar 1 in a leap year, Mar 2 otherwise
        let roster = Roster::new(vec!(
            student("Leap", 2000, 3, 1, 0),
            student("Plain", 2001, 3, 2, 0),
        ));
        assert!(roster.same_birthday_by(BirthdayKey::DayOfYear));
        assert!(!roster.same_birthday_by(BirthdayKey::MonthDay));
    }

    #[test]
    fn test_same_instant() {
        let roster = Roster::new(vec!(
            student("Twin", 2000, 8, 8, 8),
            student("Other", 2002, 2, 2, 2),
            student("Twin", 2000, 8, 8, 8),
        ));
        assert_eq!(Some((0, 2)), roster.same_birthday_pair_by(BirthdayKey::Instant));
    }

    #[test]
    fn test_display() {
        let expected = "  0 Carol                07/04/2001\n\
                        \x20 1 Alice                01/20/1995\n\
                        \x20 2 Bob                  11/30/1999\n";
        assert_eq!(expected, sample().to_string());
        assert_eq!("", Roster::default().to_string());
    }

    #[test]
    fn test_write_csv() {
        let mut out = Vec::new();
        sample().write_csv(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(4, lines.len());
        assert_eq!("index,name,birthday", lines[0]);
        assert_eq!("0,Carol,2001-07-04T10:00:00+00:00", lines[1]);
        assert_eq!("2,Bob,1999-11-30T23:00:00+00:00", lines[3]);
    }

    #[test]
    fn test_write_csv_quotes_names() {
        let roster = Roster::new(vec!(
            student("Smith, Jr", 2000, 1, 1, 0),
            student("Bo \"Duke\"", 2001, 2, 2, 0),
        ));
        let mut out = Vec::new();
        roster.write_csv(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!("0,\"Smith, Jr\",2000-01-01T00:00:00+00:00", lines[1]);
        assert_eq!("1,\"Bo \"\"Duke\"\"\",2001-02-02T00:00:00+00:00", lines[2]);

        // reads back as three fields per record
        let mut reader = csv::Reader::from_reader(text.as_bytes());
        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(2, records.len());
        assert_eq!(3, records[0].len());
        assert_eq!("Smith, Jr", &records[0][1]);
        assert_eq!("Bo \"Duke\"", &records[1][1]);
    }
}
