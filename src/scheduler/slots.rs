//! Slot universe.
//!
//! A slot is a (day, starting-period) placement candidate. The universe
//! for a session is every start whose contiguous block fits inside the
//! day and stays clear of the lunch period. It is produced lazily and
//! rebuilt per session, because validity depends on the session's
//! duration.

use crate::models::{TimetableConstraints, Weekday};

/// A placement candidate: a day and a 1-indexed starting period.
///
/// A session placed here occupies `[start, start + duration - 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    /// Day of the week.
    pub day: Weekday,
    /// 1-indexed starting period.
    pub start: u32,
}

impl Slot {
    /// The periods a session of `duration` occupies from this slot.
    #[inline]
    pub fn periods(&self, duration: u32) -> impl Iterator<Item = u32> {
        self.start..self.start + duration
    }
}

/// Whether a block of `duration` periods starting at `start` stays
/// inside the day grid and clear of lunch.
pub fn block_is_open(constraints: &TimetableConstraints, start: u32, duration: u32) -> bool {
    if duration == 0 || start < 1 || start > constraints.periods_per_day {
        return false;
    }
    // The span end must stay representable and inside the day.
    let end = match start.checked_add(duration - 1) {
        Some(end) if end <= constraints.periods_per_day => end,
        _ => return false,
    };
    !(start..=end).any(|p| constraints.is_lunch(p))
}

/// All structurally valid slots for a session duration.
///
/// Lazy; yields day-major in the constraints' day order, ascending
/// start within a day. The scheduler applies its own randomized order
/// on top.
pub fn candidate_slots(
    constraints: &TimetableConstraints,
    duration: u32,
) -> impl Iterator<Item = Slot> + '_ {
    constraints.days.iter().copied().flat_map(move |day| {
        (1..=constraints.periods_per_day)
            .filter(move |&start| block_is_open(constraints, start, duration))
            .map(move |start| Slot { day, start })
    })
}
