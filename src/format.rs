//! Display formatting for durations and departure times
//!
//! Presentation helpers for the caller layer. The core returns raw minutes
//! and fractional hours; these turn them into readable strings.

use serde::{Deserialize, Serialize};

/// AM/PM half of a 12-hour clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    Am,
    Pm,
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Period::Am => write!(f, "AM"),
            Period::Pm => write!(f, "PM"),
        }
    }
}

/// A departure time on a 12-hour clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
    pub period: Period,
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02} {}", self.hour, self.minute, self.period)
    }
}

/// Convert a fractional hour-of-day to a 12-hour clock time.
///
/// Total minutes are rounded, so 7.99 becomes 07:59 AM. Midnight (0.x hours)
/// maps to 12 AM.
pub fn clock_time(time_of_day: f64) -> ClockTime {
    let total_minutes = (time_of_day * 60.0).round() as u32;
    let mut hour = total_minutes / 60;
    let minute = total_minutes % 60;
    let period = if (12..24).contains(&hour) {
        Period::Pm
    } else {
        Period::Am
    };
    if hour == 0 {
        hour = 12;
    }
    if hour > 12 {
        hour -= 12;
    }
    ClockTime { hour, minute, period }
}

/// Format a duration in minutes as a readable string
pub fn format_duration(minutes: f64) -> String {
    if minutes < 0.0 || !minutes.is_finite() {
        return "N/A".to_string();
    }
    if minutes == 0.0 {
        return "Almost immediately".to_string();
    }

    let hours = (minutes / 60.0).floor() as u64;
    let mins = (minutes % 60.0).round() as u64;

    let mut parts = Vec::new();
    if hours > 0 {
        parts.push(format!("{hours} hour{}", if hours > 1 { "s" } else { "" }));
    }
    if mins > 0 {
        parts.push(format!("{mins} minute{}", if mins > 1 { "s" } else { "" }));
    }

    if parts.is_empty() {
        "Less than a minute".to_string()
    } else {
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_hours_and_minutes() {
        assert_eq!(format_duration(125.0), "2 hours 5 minutes");
        assert_eq!(format_duration(60.0), "1 hour");
        assert_eq!(format_duration(1.0), "1 minute");
        assert_eq!(format_duration(45.0), "45 minutes");
    }

    #[test]
    fn boundary_durations() {
        assert_eq!(format_duration(0.0), "Almost immediately");
        assert_eq!(format_duration(0.2), "Less than a minute");
        assert_eq!(format_duration(-1.0), "N/A");
        assert_eq!(format_duration(f64::NAN), "N/A");
    }

    #[test]
    fn morning_afternoon_clock() {
        let seven = clock_time(7.0);
        assert_eq!(seven.to_string(), "07:00 AM");
        let four_pm = clock_time(16.0);
        assert_eq!(four_pm.to_string(), "04:00 PM");
        let half_past = clock_time(9.5);
        assert_eq!(half_past.to_string(), "09:30 AM");
    }

    #[test]
    fn midnight_and_noon() {
        assert_eq!(clock_time(0.0).to_string(), "12:00 AM");
        assert_eq!(clock_time(0.25).to_string(), "12:15 AM");
        assert_eq!(clock_time(12.0).to_string(), "12:00 PM");
    }

    #[test]
    fn rounds_fractional_minutes() {
        // 7.99 hours is 479.4 minutes, rounded to 07:59 AM
        assert_eq!(clock_time(7.99).to_string(), "07:59 AM");
        assert_eq!(clock_time(23.99).to_string(), "11:59 PM");
    }
}
