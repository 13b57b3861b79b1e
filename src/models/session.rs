//! Session unit and expansion.
//!
//! A session is the atomic schedulable unit: one contiguous block of
//! periods for one class on one day. Expansion turns a class's weekly
//! period count into the minimum number of sessions — full-length
//! blocks plus, when the count is not a multiple of the block length,
//! one shorter trailing block (5 periods at duration 2 → 2, 2, 1).

use crate::error::{GenerationError, GenerationResult};
use crate::models::ClassSpec;

/// One atomic schedulable unit.
///
/// Ephemeral: built fresh per generation call, never serialized. The
/// owning class is referenced by its index in the generation input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    /// Index of the owning class in the input slice.
    pub class: usize,
    /// Contiguous periods this session occupies.
    pub duration: u32,
}

/// Expands every class into its session units, in input order.
///
/// Fails with [`GenerationError::InvalidSpec`] when a class requests
/// zero periods, has a zero-length block, or has a block longer than
/// the day.
pub fn expand_sessions(
    classes: &[ClassSpec],
    periods_per_day: u32,
) -> GenerationResult<Vec<Session>> {
    let mut sessions = Vec::new();
    for (index, class) in classes.iter().enumerate() {
        if class.periods_per_week == 0 {
            return Err(GenerationError::InvalidSpec {
                reason: format!("class '{}' requests zero periods per week", class.id),
            });
        }
        if class.duration == 0 {
            return Err(GenerationError::InvalidSpec {
                reason: format!("class '{}' has a zero-length session duration", class.id),
            });
        }
        if class.duration > periods_per_day {
            return Err(GenerationError::InvalidSpec {
                reason: format!(
                    "class '{}' has session duration {} longer than the {}-period day",
                    class.id, class.duration, periods_per_day
                ),
            });
        }
        for duration in block_lengths(class.periods_per_week, class.duration) {
            sessions.push(Session {
                class: index,
                duration,
            });
        }
    }
    Ok(sessions)
}

/// Splits a weekly period count into session block lengths.
///
/// Full blocks first, remainder (if any) as one shorter trailing block.
fn block_lengths(periods_per_week: u32, duration: u32) -> Vec<u32> {
    let mut lengths = Vec::new();
    let mut remaining = periods_per_week;
    while remaining > 0 {
        let block = duration.min(remaining);
        lengths.push(block);
        remaining -= block;
    }
    lengths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_lengths_with_remainder() {
        assert_eq!(block_lengths(5, 2), vec![2, 2, 1]);
        assert_eq!(block_lengths(7, 3), vec![3, 3, 1]);
    }

    #[test]
    fn test_block_lengths_exact_multiple() {
        assert_eq!(block_lengths(6, 2), vec![2, 2, 2]);
        assert_eq!(block_lengths(1, 1), vec![1]);
        assert_eq!(block_lengths(4, 1), vec![1, 1, 1, 1]);
    }

    #[test]
    fn test_block_lengths_duration_exceeds_week() {
        // A block can never be longer than the remaining period count.
        assert_eq!(block_lengths(3, 4), vec![3]);
    }

    #[test]
    fn test_expand_flat_and_ordered() {
        let classes = vec![
            ClassSpec::new("math", "Mathematics", "Kim", 5).with_duration(2),
            ClassSpec::new("eng", "English", "Lee", 2),
        ];
        let sessions = expand_sessions(&classes, 8).unwrap();

        let math: Vec<u32> = sessions
            .iter()
            .filter(|s| s.class == 0)
            .map(|s| s.duration)
            .collect();
        assert_eq!(math, vec![2, 2, 1]);

        let eng: Vec<u32> = sessions
            .iter()
            .filter(|s| s.class == 1)
            .map(|s| s.duration)
            .collect();
        assert_eq!(eng, vec![1, 1]);

        let total: u32 = sessions.iter().map(|s| s.duration).sum();
        assert_eq!(total, 7);
    }

    #[test]
    fn test_expand_rejects_zero_periods() {
        let classes = vec![ClassSpec::new("x", "X", "T", 0)];
        let err = expand_sessions(&classes, 8).unwrap_err();
        assert!(matches!(err, GenerationError::InvalidSpec { .. }));
    }

    #[test]
    fn test_expand_rejects_zero_duration() {
        let classes = vec![ClassSpec::new("x", "X", "T", 3).with_duration(0)];
        let err = expand_sessions(&classes, 8).unwrap_err();
        assert!(matches!(err, GenerationError::InvalidSpec { .. }));
    }

    #[test]
    fn test_expand_rejects_duration_longer_than_day() {
        let classes = vec![ClassSpec::new("x", "X", "T", 6).with_duration(5)];
        let err = expand_sessions(&classes, 4).unwrap_err();
        assert!(matches!(err, GenerationError::InvalidSpec { .. }));
    }
}
