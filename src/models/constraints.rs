//! Week grid constraints.
//!
//! Defines the shape of the scheduling week: which days are active, how
//! many periods each day has, which period (if any) is reserved for
//! lunch, and the soft time-of-day preference.
//!
//! # Grid Model
//!
//! Periods are 1-indexed within a day: period 1 is the first lesson of
//! the day, period `periods_per_day` the last. The lunch period, when
//! configured, is closed for placement on every active day. A period is
//! a "morning" period when it falls in the first half of the day
//! (`period <= periods_per_day / 2`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A day of the school week.
///
/// Serializes as the full English name (`"Monday"` … `"Friday"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// All weekdays in calendar order.
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// English day name.
    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Half of the school day, the target of the soft placement preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayHalf {
    Morning,
    Afternoon,
}

/// The week grid a timetable is generated into.
///
/// The two preference flags are mutually exclusive (validated at the
/// generation boundary) and are a soft bias only: they reorder the
/// search, they never exclude a slot.
///
/// Fields missing from a deserialized payload fall back to the
/// standard-week defaults, so partial constraint payloads stay valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimetableConstraints {
    /// Number of periods in each active day.
    pub periods_per_day: u32,
    /// Active days, in display order. Serialized as `days_per_week`.
    #[serde(rename = "days_per_week")]
    pub days: Vec<Weekday>,
    /// 1-indexed period closed for lunch on every active day.
    /// `None` = no lunch break.
    pub lunch_break_period: Option<u32>,
    /// Soft bias toward first-half starting periods.
    pub prefer_morning: bool,
    /// Soft bias toward second-half starting periods.
    pub prefer_afternoon: bool,
}

impl TimetableConstraints {
    /// Creates the standard school week: Monday–Friday, 8 periods per
    /// day, lunch at period 4, no preference.
    pub fn new() -> Self {
        Self {
            periods_per_day: 8,
            days: Weekday::ALL.to_vec(),
            lunch_break_period: Some(4),
            prefer_morning: false,
            prefer_afternoon: false,
        }
    }

    /// Sets the number of periods per day.
    pub fn with_periods_per_day(mut self, periods_per_day: u32) -> Self {
        self.periods_per_day = periods_per_day;
        self
    }

    /// Sets the active days.
    pub fn with_days(mut self, days: Vec<Weekday>) -> Self {
        self.days = days;
        self
    }

    /// Sets the lunch break period (1-indexed).
    pub fn with_lunch_break(mut self, period: u32) -> Self {
        self.lunch_break_period = Some(period);
        self
    }

    /// Removes the lunch break.
    pub fn without_lunch_break(mut self) -> Self {
        self.lunch_break_period = None;
        self
    }

    /// Biases placement toward morning periods.
    pub fn with_morning_preference(mut self) -> Self {
        self.prefer_morning = true;
        self.prefer_afternoon = false;
        self
    }

    /// Biases placement toward afternoon periods.
    pub fn with_afternoon_preference(mut self) -> Self {
        self.prefer_afternoon = true;
        self.prefer_morning = false;
        self
    }

    /// Whether a period is the lunch break.
    #[inline]
    pub fn is_lunch(&self, period: u32) -> bool {
        self.lunch_break_period == Some(period)
    }

    /// Whether a day is part of the active week.
    pub fn is_active(&self, day: Weekday) -> bool {
        self.days.contains(&day)
    }

    /// Periods open for placement per day (grid minus lunch).
    ///
    /// A lunch period outside `[1, periods_per_day]` closes nothing.
    pub fn open_periods_per_day(&self) -> u32 {
        let lunch = self
            .lunch_break_period
            .map_or(0, |p| u32::from(p >= 1 && p <= self.periods_per_day));
        self.periods_per_day - lunch
    }

    /// Total placement capacity of the week grid.
    pub fn total_open_slots(&self) -> u32 {
        self.days.len() as u32 * self.open_periods_per_day()
    }

    /// Last period still counted as morning.
    #[inline]
    pub fn morning_cutoff(&self) -> u32 {
        self.periods_per_day / 2
    }

    /// Whether a period falls in the morning half of the day.
    #[inline]
    pub fn is_morning(&self, period: u32) -> bool {
        period <= self.morning_cutoff()
    }

    /// The configured soft preference, if any.
    pub fn preference(&self) -> Option<DayHalf> {
        if self.prefer_morning {
            Some(DayHalf::Morning)
        } else if self.prefer_afternoon {
            Some(DayHalf::Afternoon)
        } else {
            None
        }
    }
}

impl Default for TimetableConstraints {
    fn default() -> Self {
        Self::new()
    }
}
