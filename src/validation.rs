//! Input validation for timetable generation.
//!
//! Checks structural integrity of class specs and week constraints
//! before generation. Detects:
//! - Empty class lists, blank names/teachers, duplicate IDs
//! - Period and duration counts outside their allowed ranges
//! - Malformed week grids (no days, duplicate days, lunch off-grid)
//! - Both preference flags set at once
//!
//! All problems are collected and reported together so a caller can fix
//! its input in one pass.

use crate::models::{ClassSpec, TimetableConstraints};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The class list is empty.
    NoClasses,
    /// A class name or teacher name is blank.
    EmptyField,
    /// Two classes share the same ID.
    DuplicateId,
    /// Periods-per-week outside `[1, 40]`.
    PeriodsPerWeekOutOfRange,
    /// Session duration outside `[1, 4]` or longer than the day.
    DurationOutOfRange,
    /// Periods-per-day outside `[4, 12]`.
    PeriodsPerDayOutOfRange,
    /// The active-day list is empty.
    NoActiveDays,
    /// A day appears twice in the active-day list.
    DuplicateDay,
    /// Lunch period outside `[1, periods_per_day]`.
    LunchBreakOutOfRange,
    /// Both preference flags are set.
    ConflictingPreferences,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates generation input.
///
/// Checks:
/// 1. At least one class
/// 2. No duplicate class IDs; no blank name or teacher
/// 3. Periods-per-week in [1, 40]
/// 4. Duration in [1, 4] and no longer than the day
/// 5. Periods-per-day in [4, 12]
/// 6. At least one active day, each listed once
/// 7. Lunch period (if set) within the day grid
/// 8. At most one preference flag
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(classes: &[ClassSpec], constraints: &TimetableConstraints) -> ValidationResult {
    let mut errors = Vec::new();

    if classes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoClasses,
            "no classes provided; add at least one class",
        ));
    }

    let mut class_ids = HashSet::new();
    for class in classes {
        if !class_ids.insert(class.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("duplicate class ID: {}", class.id),
            ));
        }
        if class.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyField,
                format!("class '{}' has a blank name", class.id),
            ));
        }
        if class.teacher.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyField,
                format!("class '{}' has a blank teacher", class.id),
            ));
        }
        if !(1..=40).contains(&class.periods_per_week) {
            errors.push(ValidationError::new(
                ValidationErrorKind::PeriodsPerWeekOutOfRange,
                format!(
                    "class '{}' requests {} periods per week (allowed 1..=40)",
                    class.id, class.periods_per_week
                ),
            ));
        }
        if !(1..=4).contains(&class.duration) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DurationOutOfRange,
                format!(
                    "class '{}' has session duration {} (allowed 1..=4)",
                    class.id, class.duration
                ),
            ));
        } else if class.duration > constraints.periods_per_day {
            errors.push(ValidationError::new(
                ValidationErrorKind::DurationOutOfRange,
                format!(
                    "class '{}' has session duration {} longer than the {}-period day",
                    class.id, class.duration, constraints.periods_per_day
                ),
            ));
        }
    }

    if !(4..=12).contains(&constraints.periods_per_day) {
        errors.push(ValidationError::new(
            ValidationErrorKind::PeriodsPerDayOutOfRange,
            format!(
                "periods per day is {} (allowed 4..=12)",
                constraints.periods_per_day
            ),
        ));
    }

    if constraints.days.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoActiveDays,
            "no active days; the week needs at least one day",
        ));
    }
    let mut seen_days = HashSet::new();
    for &day in &constraints.days {
        if !seen_days.insert(day) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateDay,
                format!("day {day} is listed twice"),
            ));
        }
    }

    if let Some(lunch) = constraints.lunch_break_period {
        if lunch < 1 || lunch > constraints.periods_per_day {
            errors.push(ValidationError::new(
                ValidationErrorKind::LunchBreakOutOfRange,
                format!(
                    "lunch period {} lies outside the {}-period day",
                    lunch, constraints.periods_per_day
                ),
            ));
        }
    }

    if constraints.prefer_morning && constraints.prefer_afternoon {
        errors.push(ValidationError::new(
            ValidationErrorKind::ConflictingPreferences,
            "prefer_morning and prefer_afternoon cannot both be set",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weekday;

    fn sample_classes() -> Vec<ClassSpec> {
        vec![
            ClassSpec::new("math", "Mathematics", "Kim", 5).with_duration(2),
            ClassSpec::new("eng", "English", "Lee", 3),
        ]
    }

    #[test]
    fn test_valid_input() {
        let constraints = TimetableConstraints::new();
        assert!(validate_input(&sample_classes(), &constraints).is_ok());
    }

    #[test]
    fn test_no_classes() {
        let errors = validate_input(&[], &TimetableConstraints::new()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NoClasses));
    }

    #[test]
    fn test_duplicate_class_id() {
        let classes = vec![
            ClassSpec::new("x", "A", "T1", 1),
            ClassSpec::new("x", "B", "T2", 1),
        ];
        let errors = validate_input(&classes, &TimetableConstraints::new()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_blank_name_and_teacher() {
        let classes = vec![ClassSpec::new("x", "  ", "", 1)];
        let errors = validate_input(&classes, &TimetableConstraints::new()).unwrap_err();
        let blank = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::EmptyField)
            .count();
        assert_eq!(blank, 2);
    }

    #[test]
    fn test_periods_per_week_range() {
        let classes = vec![
            ClassSpec::new("zero", "Z", "T", 0),
            ClassSpec::new("heavy", "H", "T", 41),
        ];
        let errors = validate_input(&classes, &TimetableConstraints::new()).unwrap_err();
        let out_of_range = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::PeriodsPerWeekOutOfRange)
            .count();
        assert_eq!(out_of_range, 2);
    }

    #[test]
    fn test_duration_range() {
        let classes = vec![ClassSpec::new("x", "X", "T", 5).with_duration(5)];
        let errors = validate_input(&classes, &TimetableConstraints::new()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DurationOutOfRange));
    }

    #[test]
    fn test_duration_longer_than_day() {
        // 4 is inside [1,4] but longer than a hypothetical short day is
        // impossible within the allowed grid (min 4 periods), so check
        // against the boundary: duration 4, periods_per_day 4 is fine.
        let classes = vec![ClassSpec::new("x", "X", "T", 4).with_duration(4)];
        let constraints = TimetableConstraints::new()
            .with_periods_per_day(4)
            .without_lunch_break();
        assert!(validate_input(&classes, &constraints).is_ok());
    }

    #[test]
    fn test_periods_per_day_range() {
        let constraints = TimetableConstraints::new().with_periods_per_day(3);
        let errors = validate_input(&sample_classes(), &constraints).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::PeriodsPerDayOutOfRange));

        let constraints = TimetableConstraints::new().with_periods_per_day(13);
        let errors = validate_input(&sample_classes(), &constraints).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::PeriodsPerDayOutOfRange));
    }

    #[test]
    fn test_no_active_days() {
        let constraints = TimetableConstraints::new().with_days(vec![]);
        let errors = validate_input(&sample_classes(), &constraints).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NoActiveDays));
    }

    #[test]
    fn test_duplicate_day() {
        let constraints =
            TimetableConstraints::new().with_days(vec![Weekday::Monday, Weekday::Monday]);
        let errors = validate_input(&sample_classes(), &constraints).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateDay));
    }

    #[test]
    fn test_lunch_out_of_grid() {
        let constraints = TimetableConstraints::new().with_lunch_break(9);
        let errors = validate_input(&sample_classes(), &constraints).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::LunchBreakOutOfRange));
    }

    #[test]
    fn test_conflicting_preferences() {
        let mut constraints = TimetableConstraints::new();
        constraints.prefer_morning = true;
        constraints.prefer_afternoon = true;
        let errors = validate_input(&sample_classes(), &constraints).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ConflictingPreferences));
    }

    #[test]
    fn test_multiple_errors_collected() {
        let classes = vec![ClassSpec::new("x", "", "T", 0)];
        let constraints = TimetableConstraints::new().with_days(vec![]);
        let errors = validate_input(&classes, &constraints).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
