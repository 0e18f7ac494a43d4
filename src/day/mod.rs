/*!
Days of the week

A closed set of seven variants, each carrying an abbreviation, plus the
process-wide `VALUES` / `WEEKDAYS` / `WEEKENDS` sets derived from them.
*/

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::error::{DayError, DayResult};
use crate::named::Named;

use Day::*;

/// A day of the week, ordered by declaration (Monday first)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// Every variant in declaration order
const ALL: [Day; 7] = [Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday];

/// All seven days
pub static VALUES: Lazy<BTreeSet<Day>> = Lazy::new(|| ALL.iter().copied().collect());

/// Monday through Friday
pub static WEEKDAYS: Lazy<BTreeSet<Day>> = Lazy::new(|| {
    VALUES
        .iter()
        .copied()
        .filter(|day| !matches!(day, Saturday | Sunday))
        .collect()
});

/// Whatever `WEEKDAYS` leaves out of `VALUES`
pub static WEEKENDS: Lazy<BTreeSet<Day>> =
    Lazy::new(|| VALUES.difference(&WEEKDAYS).copied().collect());

impl Day {
    /// The seven days, Monday first
    pub fn all_values() -> &'static [Day] {
        &ALL
    }

    pub fn weekdays() -> &'static BTreeSet<Day> {
        &WEEKDAYS
    }

    pub fn weekends() -> &'static BTreeSet<Day> {
        &WEEKENDS
    }

    /// Zero-based position in declaration order
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Upper-case identifier, e.g. `MONDAY`
    pub const fn symbolic_name(self) -> &'static str {
        match self {
            Monday => "MONDAY",
            Tuesday => "TUESDAY",
            Wednesday => "WEDNESDAY",
            Thursday => "THURSDAY",
            Friday => "FRIDAY",
            Saturday => "SATURDAY",
            Sunday => "SUNDAY",
        }
    }

    /// Short form with a trailing period, e.g. `Tues.`
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Monday => "Mon.",
            Tuesday => "Tues.",
            Wednesday => "Wed.",
            Thursday => "Thurs.",
            Friday => "Fri.",
            Saturday => "Sat.",
            Sunday => "Sun.",
        }
    }

    /// Only Saturday and Sunday override the weekday default
    pub const fn is_weekend(self) -> bool {
        matches!(self, Saturday | Sunday)
    }

    /// Reverse of [`Day::abbreviation`].
    ///
    /// Accepts the abbreviation with or without its trailing period. Matching
    /// is exact: no case folding, no trimming.
    ///
    /// ```
    /// use weekday_demo::Day;
    /// assert_eq!(Day::from_abbreviation("Thurs").unwrap(), Day::Thursday);
    /// assert!(Day::from_abbreviation("thurs.").is_err());
    /// ```
    pub fn from_abbreviation(abbr: &str) -> DayResult<Day> {
        let day = match abbr {
            "Mon." | "Mon" => Monday,
            "Tues." | "Tues" => Tuesday,
            "Wed." | "Wed" => Wednesday,
            "Thurs." | "Thurs" => Thursday,
            "Fri." | "Fri" => Friday,
            "Sat." | "Sat" => Saturday,
            "Sun." | "Sun" => Sunday,
            _ => {
                tracing::debug!(input = abbr, "rejected day abbreviation");
                return Err(DayError::UnknownAbbreviation {
                    input: abbr.to_string(),
                });
            }
        };
        tracing::trace!(input = abbr, day = day.symbolic_name(), "resolved day abbreviation");
        Ok(day)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.symbolic_name();
        let mut chars = name.chars();
        let mut shown = String::with_capacity(name.len());
        shown.extend(chars.next());
        shown.push_str(chars.as_str());
        f.pad(&shown)
    }
}

impl FromStr for Day {
    type Err = DayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Day::from_abbreviation(s)
    }
}

impl Named for Day {
    fn name(&self) -> &str {
        self.symbolic_name()
    }
}
