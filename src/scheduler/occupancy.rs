//! Occupancy state for the backtracking search.
//!
//! Tracks which grid cells are taken and which cells each teacher
//! holds. One instance belongs to exactly one scheduling run. State
//! grows on commit and shrinks on rollback; rollback is the exact
//! inverse of commit, which is what keeps backtracking sound.

use std::collections::{HashMap, HashSet};

use super::slots::Slot;
use crate::models::Weekday;

/// Mutable occupancy accumulator for one scheduling run.
#[derive(Debug, Default)]
pub struct Occupancy {
    /// Grid cells taken by any session.
    cells: HashSet<(Weekday, u32)>,
    /// Cells taken per teacher.
    teacher_cells: HashMap<String, HashSet<(Weekday, u32)>>,
}

impl Occupancy {
    /// Creates an empty occupancy table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no period of the block is taken by any session.
    pub fn block_free(&self, slot: Slot, duration: u32) -> bool {
        slot.periods(duration)
            .all(|p| !self.cells.contains(&(slot.day, p)))
    }

    /// Whether the teacher holds nothing in the block.
    pub fn teacher_free(&self, teacher: &str, slot: Slot, duration: u32) -> bool {
        match self.teacher_cells.get(teacher) {
            Some(taken) => slot
                .periods(duration)
                .all(|p| !taken.contains(&(slot.day, p))),
            None => true,
        }
    }

    /// Conflict check for a tentative placement: the block must be free
    /// on the grid and free for the owning teacher. Pure; commits
    /// nothing.
    pub fn admits(&self, teacher: &str, slot: Slot, duration: u32) -> bool {
        self.block_free(slot, duration) && self.teacher_free(teacher, slot, duration)
    }

    /// Marks the block taken, for the grid and for the teacher.
    pub fn commit(&mut self, teacher: &str, slot: Slot, duration: u32) {
        debug_assert!(self.admits(teacher, slot, duration));
        for p in slot.periods(duration) {
            self.cells.insert((slot.day, p));
        }
        let taken = self.teacher_cells.entry(teacher.to_string()).or_default();
        for p in slot.periods(duration) {
            taken.insert((slot.day, p));
        }
    }

    /// Releases the block. Exact inverse of `commit`.
    pub fn rollback(&mut self, teacher: &str, slot: Slot, duration: u32) {
        for p in slot.periods(duration) {
            self.cells.remove(&(slot.day, p));
        }
        if let Some(taken) = self.teacher_cells.get_mut(teacher) {
            for p in slot.periods(duration) {
                taken.remove(&(slot.day, p));
            }
            if taken.is_empty() {
                self.teacher_cells.remove(teacher);
            }
        }
    }

    /// Whether nothing is committed.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty() && self.teacher_cells.is_empty()
    }
}
