//! Timestamps carried by observations and simulation runs.

use chrono::{Datelike, NaiveDate};

use crate::error::TimeError;

/// Converts a calendar date to its proleptic-Gregorian ordinal
/// (0001-01-01 = day 1), matching Python's `date.toordinal()`.
fn ordinal(year: i32, month: u8, day: u8) -> Result<i32, TimeError> {
    NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))
        .map(|d| d.num_days_from_ce())
        .ok_or(TimeError::InvalidDate { year, month, day })
}

fn check_time_of_day(hour: u8, minute: u8) -> Result<(), TimeError> {
    if hour > 23 || minute > 59 {
        return Err(TimeError::InvalidTimeOfDay { hour, minute });
    }
    Ok(())
}

/// Timestamp parsed from the fixed-width observation identifier.
///
/// The identifier encodes the acquisition time at fixed positions:
/// characters 0–3 year, 4–5 month, 6–7 day, 9–10 hour, 11–12 minute
/// (character 8 is a separator). Anything after position 13 is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservationStamp {
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
}

impl ObservationStamp {
    /// Parses the timestamp out of an observation identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::IdentifierTooShort`] for identifiers under 13
    /// characters, [`TimeError::NonNumericField`] when a field is not made
    /// of ASCII digits, and [`TimeError::InvalidDate`] /
    /// [`TimeError::InvalidTimeOfDay`] for out-of-range components.
    pub fn parse(id: &str) -> Result<Self, TimeError> {
        if id.len() < 13 {
            return Err(TimeError::IdentifierTooShort { len: id.len() });
        }

        let field = |range: std::ops::Range<usize>, name: &'static str| {
            id.get(range.clone())
                .and_then(|s| s.parse::<u32>().ok())
                .ok_or_else(|| TimeError::NonNumericField {
                    field: name,
                    id: id.to_string(),
                })
        };

        let year = field(0..4, "year")? as i32;
        let month = field(4..6, "month")? as u8;
        let day = field(6..8, "day")? as u8;
        let hour = field(9..11, "hour")? as u8;
        let minute = field(11..13, "minute")? as u8;

        check_time_of_day(hour, minute)?;
        // Validate the date eagerly so a bad identifier fails at parse time.
        ordinal(year, month, day)?;

        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
        })
    }

    /// Returns the acquisition time as a day fraction: ordinal day plus
    /// fractional hours and minutes.
    pub fn day_fraction(&self) -> f64 {
        // The date was validated in `parse`.
        let days = ordinal(self.year, self.month, self.day).expect("stamp holds a valid date");
        f64::from(days) + f64::from(self.hour) / 24.0 + f64::from(self.minute) / 1440.0
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day of month.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Returns the hour (0..=23).
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute (0..=59).
    pub fn minute(&self) -> u8 {
        self.minute
    }
}

/// Start time of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationStart {
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
}

impl SimulationStart {
    /// Creates a validated simulation start time.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::InvalidDate`] or [`TimeError::InvalidTimeOfDay`]
    /// for out-of-range components.
    pub fn new(year: i32, month: u8, day: u8, hour: u8, minute: u8) -> Result<Self, TimeError> {
        check_time_of_day(hour, minute)?;
        ordinal(year, month, day)?;
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
        })
    }

    /// Returns the start time as a day fraction on the same axis as
    /// [`ObservationStamp::day_fraction`].
    pub fn day_fraction(&self) -> f64 {
        let days = ordinal(self.year, self.month, self.day).expect("start holds a valid date");
        f64::from(days) + f64::from(self.hour) / 24.0 + f64::from(self.minute) / 1440.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn ordinal_epoch() {
        // Python: date(1, 1, 1).toordinal() == 1
        assert_eq!(ordinal(1, 1, 1).unwrap(), 1);
    }

    #[test]
    fn ordinal_y2k() {
        // Python: date(2000, 1, 1).toordinal() == 730120
        assert_eq!(ordinal(2000, 1, 1).unwrap(), 730_120);
    }

    #[test]
    fn parse_full_identifier() {
        let stamp = ObservationStamp::parse("20210801_0630_SLICK_A").unwrap();
        assert_eq!(stamp.year(), 2021);
        assert_eq!(stamp.month(), 8);
        assert_eq!(stamp.day(), 1);
        assert_eq!(stamp.hour(), 6);
        assert_eq!(stamp.minute(), 30);
    }

    #[test]
    fn parse_exactly_13_chars() {
        let stamp = ObservationStamp::parse("20210801_0630").unwrap();
        assert_eq!(stamp.minute(), 30);
    }

    #[test]
    fn parse_too_short() {
        assert_eq!(
            ObservationStamp::parse("20210801").unwrap_err(),
            TimeError::IdentifierTooShort { len: 8 }
        );
    }

    #[test]
    fn parse_non_numeric_month() {
        let err = ObservationStamp::parse("2021xx01_0630").unwrap_err();
        assert!(matches!(
            err,
            TimeError::NonNumericField { field: "month", .. }
        ));
    }

    #[test]
    fn parse_invalid_date() {
        assert_eq!(
            ObservationStamp::parse("20210230_0630").unwrap_err(),
            TimeError::InvalidDate {
                year: 2021,
                month: 2,
                day: 30
            }
        );
    }

    #[test]
    fn parse_invalid_hour() {
        assert_eq!(
            ObservationStamp::parse("20210801_2500").unwrap_err(),
            TimeError::InvalidTimeOfDay {
                hour: 25,
                minute: 0
            }
        );
    }

    #[test]
    fn day_fraction_hour_and_minute() {
        let midnight = ObservationStamp::parse("20210801_0000").unwrap();
        let later = ObservationStamp::parse("20210801_0630").unwrap();
        assert_abs_diff_eq!(
            later.day_fraction() - midnight.day_fraction(),
            6.5 / 24.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn day_fraction_consecutive_days() {
        let a = ObservationStamp::parse("20210801_0000").unwrap();
        let b = ObservationStamp::parse("20210802_0000").unwrap();
        assert_abs_diff_eq!(b.day_fraction() - a.day_fraction(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn simulation_start_matches_observation_axis() {
        let start = SimulationStart::new(2021, 8, 1, 6, 30).unwrap();
        let stamp = ObservationStamp::parse("20210801_0630").unwrap();
        assert_abs_diff_eq!(
            start.day_fraction(),
            stamp.day_fraction(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn simulation_start_invalid() {
        assert!(SimulationStart::new(2021, 13, 1, 0, 0).is_err());
        assert!(SimulationStart::new(2021, 1, 1, 0, 60).is_err());
    }
}
