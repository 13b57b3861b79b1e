//! Timetabling domain models.
//!
//! Core data types for describing a weekly timetabling problem and its
//! solution.
//!
//! # Entities
//!
//! | Type | Role |
//! |------|------|
//! | `ClassSpec` | A recurring subject: teacher, weekly periods, block length |
//! | `TimetableConstraints` | The week grid: days, periods, lunch, preference |
//! | `Session` | One atomic block of periods awaiting placement |
//! | `Schedule` / `ScheduleEntry` | The generated grid, one entry per cell |
//! | `Violation` | Audit record for a broken hard constraint |

mod class;
mod constraints;
mod schedule;
mod session;

pub use class::{assign_palette_colors, ClassSpec, PALETTE};
pub use constraints::{DayHalf, TimetableConstraints, Weekday};
pub use schedule::{Schedule, ScheduleEntry, Violation, ViolationKind};
pub use session::{expand_sessions, Session};
