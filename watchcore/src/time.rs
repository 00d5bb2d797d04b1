//! Wall-clock readings
//!
//! A [`TimeSample`] is the (hour, minute, second) triple that drives one
//! redraw. Samples come from a [`TimeSource`]; the desktop build reads the
//! local system clock through chrono.

use chrono::{Local, Timelike};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeError {
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: u32 },
}

pub type Result<T> = std::result::Result<T, TimeError>;

/// One reading of the wall clock.
///
/// Fields are validated on construction, so every sample in circulation has
/// `hour < 24`, `minute < 60` and `second < 60`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeSample {
    hour: u32,
    minute: u32,
    second: u32,
}

impl TimeSample {
    pub fn new(hour: u32, minute: u32, second: u32) -> Result<Self> {
        check("hour", hour, 23)?;
        check("minute", minute, 59)?;
        check("second", second, 59)?;
        Ok(Self { hour, minute, second })
    }

    /// Build a sample from anything chrono can read a time of day from.
    pub fn from_timelike<T: Timelike>(time: &T) -> Result<Self> {
        Self::new(time.hour(), time.minute(), time.second())
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }

    /// Hour on a 12-hour dial, 0..=11.
    pub fn hour_on_dial(&self) -> u32 {
        self.hour % 12
    }
}

fn check(field: &'static str, value: u32, max: u32) -> Result<()> {
    if value > max {
        return Err(TimeError::OutOfRange { field, value });
    }
    Ok(())
}

/// Something that can tell the current time of day.
pub trait TimeSource {
    fn now(&self) -> Result<TimeSample>;
}

/// The local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl TimeSource for LocalClock {
    fn now(&self) -> Result<TimeSample> {
        TimeSample::from_timelike(&Local::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn test_valid_bounds() {
        assert!(TimeSample::new(0, 0, 0).is_ok());
        assert!(TimeSample::new(23, 59, 59).is_ok());
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            TimeSample::new(24, 0, 0),
            Err(TimeError::OutOfRange { field: "hour", value: 24 })
        );
        assert_eq!(
            TimeSample::new(0, 60, 0),
            Err(TimeError::OutOfRange { field: "minute", value: 60 })
        );
        assert_eq!(
            TimeSample::new(0, 0, 60),
            Err(TimeError::OutOfRange { field: "second", value: 60 })
        );
    }

    #[test]
    fn test_from_timelike() {
        let t = NaiveTime::from_hms_opt(14, 5, 9).unwrap();
        let s = TimeSample::from_timelike(&t).unwrap();
        assert_eq!((s.hour(), s.minute(), s.second()), (14, 5, 9));
        assert_eq!(s.hour_on_dial(), 2);
    }

    #[test]
    fn test_local_clock_reads() {
        let s = LocalClock.now().unwrap();
        assert!(s.hour() < 24);
    }
}
