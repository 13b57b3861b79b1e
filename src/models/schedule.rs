//! Schedule (output) model.
//!
//! A schedule is a complete placement of class sessions on the weekly
//! grid, flattened into one entry per occupied (day, period) cell. The
//! engine only ever returns conflict-free schedules; the violation scan
//! here exists for consumers and tests that receive a schedule from
//! elsewhere (deserialized, hand-built) and want to audit it.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::constraints::{TimetableConstraints, Weekday};

/// A complete weekly timetable.
///
/// Entries appear in placement order: each placed session contributes
/// its periods in ascending order, sessions in the order the search
/// placed them. # entries per class always equals its periods-per-week.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// One entry per occupied grid cell.
    pub entries: Vec<ScheduleEntry>,
}

/// One occupied (day, period) cell of the grid.
///
/// A duration-2 session produces two entries sharing the same class id
/// at consecutive periods of the same day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Day of the week.
    pub day: Weekday,
    /// 1-indexed period within the day.
    pub period: u32,
    /// Owning class identifier.
    pub class_id: String,
    /// Class display name.
    pub class_name: String,
    /// Teacher giving the class.
    pub teacher: String,
    /// Display color (hex), if the class has one.
    #[serde(default)]
    pub color: Option<String>,
}

/// A hard-constraint violation found by the audit scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Which rule is broken.
    pub kind: ViolationKind,
    /// Related entity: class id or teacher name.
    pub entity_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Classification of timetable violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationKind {
    /// Two entries occupy the same (day, period).
    SlotConflict,
    /// One teacher holds two entries at the same (day, period).
    TeacherConflict,
    /// An entry sits on the lunch period.
    LunchOverlap,
    /// An entry's period lies outside the day grid.
    OutOfGrid,
    /// An entry sits on a day that is not active.
    InactiveDay,
}

impl ScheduleEntry {
    /// Creates an entry without a color.
    pub fn new(
        day: Weekday,
        period: u32,
        class_id: impl Into<String>,
        class_name: impl Into<String>,
        teacher: impl Into<String>,
    ) -> Self {
        Self {
            day,
            period,
            class_id: class_id.into(),
            class_name: class_name.into(),
            teacher: teacher.into(),
            color: None,
        }
    }

    /// Sets the display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl Violation {
    fn new(kind: ViolationKind, entity_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            entity_id: entity_id.into(),
            message: message.into(),
        }
    }

    /// Two classes share one grid cell.
    pub fn slot_conflict(class_id: impl Into<String>, day: Weekday, period: u32) -> Self {
        let class_id = class_id.into();
        let message = format!("slot {day} period {period} is occupied twice");
        Self::new(ViolationKind::SlotConflict, class_id, message)
    }

    /// One teacher is double-booked.
    pub fn teacher_conflict(teacher: impl Into<String>, day: Weekday, period: u32) -> Self {
        let teacher = teacher.into();
        let message = format!("teacher '{teacher}' is double-booked on {day} period {period}");
        Self::new(ViolationKind::TeacherConflict, teacher, message)
    }

    /// An entry overlaps the lunch break.
    pub fn lunch_overlap(class_id: impl Into<String>, day: Weekday, period: u32) -> Self {
        let class_id = class_id.into();
        let message = format!("class '{class_id}' sits on the lunch period ({day} period {period})");
        Self::new(ViolationKind::LunchOverlap, class_id, message)
    }

    /// An entry lies outside the day grid.
    pub fn out_of_grid(class_id: impl Into<String>, day: Weekday, period: u32) -> Self {
        let class_id = class_id.into();
        let message = format!("class '{class_id}' is placed outside the grid ({day} period {period})");
        Self::new(ViolationKind::OutOfGrid, class_id, message)
    }

    /// An entry sits on an inactive day.
    pub fn inactive_day(class_id: impl Into<String>, day: Weekday) -> Self {
        let class_id = class_id.into();
        let message = format!("class '{class_id}' is placed on inactive day {day}");
        Self::new(ViolationKind::InactiveDay, class_id, message)
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn add_entry(&mut self, entry: ScheduleEntry) {
        self.entries.push(entry);
    }

    /// Number of occupied grid cells.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Whether the schedule holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry occupying a grid cell, if any.
    pub fn entry_at(&self, day: Weekday, period: u32) -> Option<&ScheduleEntry> {
        self.entries
            .iter()
            .find(|e| e.day == day && e.period == period)
    }

    /// All entries belonging to a class.
    pub fn entries_for_class(&self, class_id: &str) -> Vec<&ScheduleEntry> {
        self.entries
            .iter()
            .filter(|e| e.class_id == class_id)
            .collect()
    }

    /// All entries taught by a teacher.
    pub fn entries_for_teacher(&self, teacher: &str) -> Vec<&ScheduleEntry> {
        self.entries
            .iter()
            .filter(|e| e.teacher == teacher)
            .collect()
    }

    /// Distinct days that hold at least one entry, in calendar order.
    pub fn days_used(&self) -> Vec<Weekday> {
        let used: HashSet<Weekday> = self.entries.iter().map(|e| e.day).collect();
        Weekday::ALL.into_iter().filter(|d| used.contains(d)).collect()
    }

    /// One-line description: period, day, and teacher counts.
    pub fn summary(&self) -> String {
        let teachers: HashSet<&str> = self.entries.iter().map(|e| e.teacher.as_str()).collect();
        format!(
            "{} periods scheduled across {} day(s) with {} teacher(s)",
            self.entries.len(),
            self.days_used().len(),
            teachers.len()
        )
    }

    /// Scans for hard-constraint violations against a week grid.
    ///
    /// Returns one record per broken rule occurrence: duplicate cells,
    /// teacher double-bookings, lunch overlaps, out-of-grid periods,
    /// and entries on inactive days.
    pub fn violations(&self, constraints: &TimetableConstraints) -> Vec<Violation> {
        let mut violations = Vec::new();
        let mut cells: HashSet<(Weekday, u32)> = HashSet::new();
        let mut teacher_cells: HashMap<&str, HashSet<(Weekday, u32)>> = HashMap::new();

        for entry in &self.entries {
            if !cells.insert((entry.day, entry.period)) {
                violations.push(Violation::slot_conflict(
                    &entry.class_id,
                    entry.day,
                    entry.period,
                ));
            }
            let booked = teacher_cells.entry(entry.teacher.as_str()).or_default();
            if !booked.insert((entry.day, entry.period)) {
                violations.push(Violation::teacher_conflict(
                    &entry.teacher,
                    entry.day,
                    entry.period,
                ));
            }
            if constraints.is_lunch(entry.period) {
                violations.push(Violation::lunch_overlap(
                    &entry.class_id,
                    entry.day,
                    entry.period,
                ));
            }
            if entry.period < 1 || entry.period > constraints.periods_per_day {
                violations.push(Violation::out_of_grid(
                    &entry.class_id,
                    entry.day,
                    entry.period,
                ));
            }
            if !constraints.is_active(entry.day) {
                violations.push(Violation::inactive_day(&entry.class_id, entry.day));
            }
        }

        violations
    }

    /// Whether the audit scan finds nothing.
    pub fn is_conflict_free(&self, constraints: &TimetableConstraints) -> bool {
        self.violations(constraints).is_empty()
    }
}
