//! Backtracking timetable search.
//!
//! Provides the randomized depth-first generator plus its two building
//! blocks: the per-duration slot universe and the occupancy tables the
//! search commits to and rolls back from.
//!
//! # Algorithm
//!
//! `TimetableGenerator` places sessions one at a time, heaviest-loaded
//! teachers first, trying shuffled candidate slots against a grid and
//! teacher conflict check and undoing the latest placement on a dead
//! end. The search is complete: it fails only when no conflict-free
//! timetable exists or a configured budget runs out.
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Russell & Norvig, "Artificial Intelligence: A Modern Approach", Ch. 6

mod backtracking;
mod occupancy;
mod slots;

pub use backtracking::TimetableGenerator;
pub use occupancy::Occupancy;
pub use slots::{block_is_open, candidate_slots, Slot};

use crate::error::GenerationResult;
use crate::models::{ClassSpec, Schedule, TimetableConstraints};

/// Generates a timetable with default settings: OS-seeded randomness,
/// no search budget.
pub fn generate(
    classes: &[ClassSpec],
    constraints: &TimetableConstraints,
) -> GenerationResult<Schedule> {
    TimetableGenerator::new().generate(classes, constraints)
}
