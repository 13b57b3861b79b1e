//! Weekly school timetable generation.
//!
//! Assigns class sessions to (day, period) slots on a weekly grid so
//! that no slot is double-booked, no teacher is in two places at once,
//! and nothing lands on the lunch break. Multi-period classes are kept
//! contiguous within a day. The engine is a randomized backtracking
//! search: complete over the slot universe, with shuffled candidate
//! orders so repeated runs produce different but equally valid
//! timetables unless a seed pins them down.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ClassSpec`, `Session`,
//!   `TimetableConstraints`, `Schedule`, `Violation`
//! - **`validation`**: Input integrity checks (blank fields, duplicate
//!   IDs, out-of-range periods)
//! - **`scheduler`**: The backtracking search, its slot universe, and
//!   the occupancy tables
//! - **`error`**: `GenerationError` and the crate result alias
//!
//! # Example
//!
//! ```
//! use timetable_engine::models::{ClassSpec, TimetableConstraints};
//! use timetable_engine::scheduler;
//!
//! let classes = vec![
//!     ClassSpec::new("math", "Mathematics", "Kim", 4),
//!     ClassSpec::new("eng", "English", "Lee", 3),
//! ];
//! let constraints = TimetableConstraints::new();
//!
//! let schedule = scheduler::generate(&classes, &constraints).unwrap();
//! assert_eq!(schedule.entry_count(), 7);
//! assert!(schedule.is_conflict_free(&constraints));
//! ```
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Haralick & Elliott (1980), "Increasing Tree Search Efficiency for
//!   Constraint Satisfaction Problems"

pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{GenerationError, GenerationResult};
pub use models::{ClassSpec, Schedule, TimetableConstraints};
pub use scheduler::TimetableGenerator;
