//! Generation failure taxonomy.
//!
//! Four kinds, ordered by when they can occur: input validation
//! (`InvalidSpec`), the pre-search capacity check (`CapacityExceeded`),
//! search exhaustion (`NoFeasibleSchedule`), and budget cancellation
//! (`SearchAborted`). Every variant carries the counts needed for a
//! precise user-facing message; the `Display` rendering names the reason.

use thiserror::Error;

/// Result alias for generation operations.
pub type GenerationResult<T> = Result<T, GenerationError>;

/// Why a generation call failed.
///
/// Calls are isolated: a failure never corrupts or blocks later calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// A class or the constraints failed structural validation.
    /// Deterministic; only fixing the input helps.
    #[error("invalid input: {reason}")]
    InvalidSpec { reason: String },

    /// Total requested periods exceed the open (non-lunch) slots in the
    /// week grid. Deterministic; detected before any search runs.
    #[error("not enough open slots: {required} periods requested but only {available} available")]
    CapacityExceeded { required: u32, available: u32 },

    /// The backtracking search exhausted every ordering without a
    /// complete assignment. Possible even when capacity suffices, when
    /// contiguous session blocks cannot pack around the lunch period.
    #[error("no conflict-free timetable exists: placed at most {placed} of {sessions} sessions")]
    NoFeasibleSchedule { placed: usize, sessions: usize },

    /// A caller-imposed wall-clock or backtrack budget was hit
    /// mid-search. Not a correctness failure; a retry with a larger
    /// budget (or another seed) may succeed.
    #[error("search aborted after {states} placements and {backtracks} backtracks")]
    SearchAborted { states: u64, backtracks: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_reason() {
        let e = GenerationError::CapacityExceeded {
            required: 90,
            available: 35,
        };
        assert_eq!(
            e.to_string(),
            "not enough open slots: 90 periods requested but only 35 available"
        );

        let e = GenerationError::InvalidSpec {
            reason: "class 'c1' has an empty teacher".into(),
        };
        assert!(e.to_string().starts_with("invalid input:"));

        let e = GenerationError::NoFeasibleSchedule {
            placed: 2,
            sessions: 3,
        };
        assert!(e.to_string().contains("2 of 3"));

        let e = GenerationError::SearchAborted {
            states: 10,
            backtracks: 4,
        };
        assert!(e.to_string().contains("10 placements"));
        assert!(e.to_string().contains("4 backtracks"));
    }
}
