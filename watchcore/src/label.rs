//! Digital readout under the dial

use chrono::NaiveTime;

use crate::time::TimeSample;

/// Shown until the first reading arrives, or while the clock is unavailable.
pub const PLACEHOLDER_LABEL: &str = "--:-- --";

/// 12-hour `hh:mm AM` form of a sample.
pub fn digital_label(sample: &TimeSample) -> String {
    NaiveTime::from_hms_opt(sample.hour(), sample.minute(), sample.second())
        .map(|t| t.format("%I:%M %p").to_string())
        .unwrap_or_else(|| PLACEHOLDER_LABEL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(h: u32, m: u32, s: u32) -> String {
        digital_label(&TimeSample::new(h, m, s).unwrap())
    }

    #[test]
    fn test_afternoon() {
        assert_eq!(label(14, 5, 0), "02:05 PM");
    }

    #[test]
    fn test_midnight_and_noon() {
        assert_eq!(label(0, 0, 0), "12:00 AM");
        assert_eq!(label(12, 0, 0), "12:00 PM");
    }

    #[test]
    fn test_zero_padded_hour() {
        assert_eq!(label(1, 0, 0), "01:00 AM");
        assert_eq!(label(13, 9, 0), "01:09 PM");
    }

    #[test]
    fn test_seconds_ignored() {
        assert_eq!(label(23, 59, 59), "11:59 PM");
        assert_eq!(label(9, 7, 30), "09:07 AM");
    }
}
