//! Randomized backtracking scheduler.
//!
//! # Algorithm
//!
//! 1. Expand classes into sessions and run the capacity pre-check.
//! 2. Shuffle the session list, then stable-sort it so sessions of
//!    heavier-loaded teachers come first (most-constrained-first;
//!    teachers are the binding hard constraint).
//! 3. Depth-first over the session list: build the session's candidate
//!    slots fresh, shuffle them, stably move preferred-half starts to
//!    the front when a preference is set, and try them in order through
//!    the conflict check.
//! 4. Dead end → undo the previous placement and try its next
//!    candidate. Top-level exhaustion → `NoFeasibleSchedule`.
//!
//! The first complete assignment wins; there is no optimization pass.
//! Variety between runs comes entirely from the shuffles, so a seeded
//! run reproduces its schedule exactly.
//!
//! # References
//!
//! - Haralick & Elliott (1980), "Increasing Tree Search Efficiency for
//!   Constraint Satisfaction Problems"
//! - Schaerf (1999), "A Survey of Automated Timetabling"

use std::cmp::Reverse;
use std::collections::HashMap;
use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace, warn};

use crate::error::{GenerationError, GenerationResult};
use crate::models::{
    expand_sessions, ClassSpec, DayHalf, Schedule, ScheduleEntry, Session, TimetableConstraints,
};
use crate::validation::validate_input;

use super::occupancy::Occupancy;
use super::slots::{candidate_slots, Slot};

/// Randomized backtracking timetable generator.
///
/// Stateless between calls: every [`generate`](Self::generate) call
/// allocates its own occupancy tables and randomness stream, so
/// concurrent calls never interfere and a seeded generator is
/// reproducible.
///
/// # Example
///
/// ```
/// use timetable_engine::models::{ClassSpec, TimetableConstraints};
/// use timetable_engine::scheduler::TimetableGenerator;
///
/// let classes = vec![
///     ClassSpec::new("math", "Mathematics", "Kim", 4).with_duration(2),
///     ClassSpec::new("eng", "English", "Lee", 3),
/// ];
/// let constraints = TimetableConstraints::new();
///
/// let generator = TimetableGenerator::new().with_seed(7);
/// let schedule = generator.generate(&classes, &constraints).unwrap();
/// assert_eq!(schedule.entry_count(), 7);
/// assert!(schedule.is_conflict_free(&constraints));
/// ```
#[derive(Debug, Clone)]
pub struct TimetableGenerator {
    seed: Option<u64>,
    max_backtracks: Option<u64>,
    time_limit: Option<Duration>,
}

impl TimetableGenerator {
    /// Creates a generator with OS-seeded randomness and no budget.
    pub fn new() -> Self {
        Self {
            seed: None,
            max_backtracks: None,
            time_limit: None,
        }
    }

    /// Fixes the random seed. Two runs with the same seed and input
    /// produce identical schedules.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Caps the number of undone placements before the search gives up
    /// with `SearchAborted`.
    pub fn with_max_backtracks(mut self, limit: u64) -> Self {
        self.max_backtracks = Some(limit);
        self
    }

    /// Caps the wall-clock time of one search. A limit too large to
    /// resolve to a deadline acts as unbounded.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Generates a conflict-free weekly timetable.
    ///
    /// Validates the input, expands classes into sessions, rejects
    /// impossible loads up front, then runs the randomized backtracking
    /// search. Returns the first complete assignment found.
    #[tracing::instrument(skip_all, fields(classes = classes.len()))]
    pub fn generate(
        &self,
        classes: &[ClassSpec],
        constraints: &TimetableConstraints,
    ) -> GenerationResult<Schedule> {
        validate_input(classes, constraints).map_err(|errors| {
            let reason = errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            GenerationError::InvalidSpec { reason }
        })?;

        let sessions = expand_sessions(classes, constraints.periods_per_day)?;

        let required: u32 = classes.iter().map(|c| c.periods_per_week).sum();
        let available = constraints.total_open_slots();
        debug!(
            sessions = sessions.len(),
            required, available, "input expanded"
        );
        if required > available {
            return Err(GenerationError::CapacityExceeded {
                required,
                available,
            });
        }

        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        let sessions = order_sessions(sessions, classes, &mut rng);

        let mut search = Search {
            classes,
            constraints,
            sessions,
            rng,
            occupancy: Occupancy::new(),
            placements: Vec::new(),
            deadline: self
                .time_limit
                .and_then(|limit| Instant::now().checked_add(limit)),
            max_backtracks: self.max_backtracks,
            stats: SearchStats::default(),
            deepest: 0,
        };

        if search.solve(0)? {
            debug!(
                states = search.stats.states,
                backtracks = search.stats.backtracks,
                "search complete"
            );
            Ok(search.into_schedule())
        } else {
            warn!(
                placed = search.deepest,
                sessions = search.sessions.len(),
                states = search.stats.states,
                backtracks = search.stats.backtracks,
                "search exhausted"
            );
            Err(GenerationError::NoFeasibleSchedule {
                placed: search.deepest,
                sessions: search.sessions.len(),
            })
        }
    }
}

impl Default for TimetableGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Search counters, carried into `SearchAborted` and logged on
/// completion.
#[derive(Debug, Clone, Copy, Default)]
struct SearchStats {
    /// Tentative placements tried.
    states: u64,
    /// Placements undone.
    backtracks: u64,
}

/// One depth-first search over the session list. Owns all mutable
/// state of the run.
struct Search<'a> {
    classes: &'a [ClassSpec],
    constraints: &'a TimetableConstraints,
    sessions: Vec<Session>,
    rng: SmallRng,
    occupancy: Occupancy,
    placements: Vec<(Session, Slot)>,
    deadline: Option<Instant>,
    max_backtracks: Option<u64>,
    stats: SearchStats,
    /// Most sessions ever placed at once; reported on exhaustion.
    deepest: usize,
}

impl Search<'_> {
    /// Places `sessions[depth..]`; `Ok(true)` on a complete assignment,
    /// `Ok(false)` on a dead end, `Err` when a budget runs out.
    fn solve(&mut self, depth: usize) -> GenerationResult<bool> {
        self.check_deadline()?;
        if depth == self.sessions.len() {
            return Ok(true);
        }
        self.deepest = self.deepest.max(depth);

        let classes = self.classes;
        let session = self.sessions[depth];
        let teacher = classes[session.class].teacher.as_str();

        for slot in self.ordered_candidates(session.duration) {
            if !self.occupancy.admits(teacher, slot, session.duration) {
                continue;
            }
            self.stats.states += 1;
            self.occupancy.commit(teacher, slot, session.duration);
            self.placements.push((session, slot));

            if self.solve(depth + 1)? {
                return Ok(true);
            }

            self.placements.pop();
            self.occupancy.rollback(teacher, slot, session.duration);
            self.register_backtrack()?;
        }

        trace!(depth, "candidates exhausted, backtracking");
        Ok(false)
    }

    /// Builds this session's candidate order: the slot universe for its
    /// duration, shuffled, preferred half stably in front.
    fn ordered_candidates(&mut self, duration: u32) -> Vec<Slot> {
        let constraints = self.constraints;
        let mut slots: Vec<Slot> = candidate_slots(constraints, duration).collect();
        slots.shuffle(&mut self.rng);
        if let Some(half) = constraints.preference() {
            slots = partition_preferred(slots, half, constraints.morning_cutoff());
        }
        slots
    }

    fn check_deadline(&self) -> GenerationResult<()> {
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                warn!(states = self.stats.states, "time budget exhausted");
                return Err(self.aborted());
            }
        }
        Ok(())
    }

    fn register_backtrack(&mut self) -> GenerationResult<()> {
        self.stats.backtracks += 1;
        if let Some(limit) = self.max_backtracks {
            if self.stats.backtracks > limit {
                warn!(
                    backtracks = self.stats.backtracks,
                    limit, "backtrack budget exhausted"
                );
                return Err(self.aborted());
            }
        }
        Ok(())
    }

    fn aborted(&self) -> GenerationError {
        GenerationError::SearchAborted {
            states: self.stats.states,
            backtracks: self.stats.backtracks,
        }
    }

    /// Flattens the complete assignment into per-period entries, in
    /// placement order.
    fn into_schedule(self) -> Schedule {
        let Search {
            classes,
            placements,
            ..
        } = self;

        let mut schedule = Schedule::new();
        for (session, slot) in placements {
            let class = &classes[session.class];
            for period in slot.periods(session.duration) {
                let mut entry =
                    ScheduleEntry::new(slot.day, period, &class.id, &class.name, &class.teacher);
                entry.color = class.color.clone();
                schedule.add_entry(entry);
            }
        }
        schedule
    }
}

/// Shuffles sessions, then stable-sorts heavier-loaded teachers to the
/// front. The shuffle decides order among equals; the sort is the
/// most-constrained-first tie-break.
fn order_sessions<R: Rng>(
    mut sessions: Vec<Session>,
    classes: &[ClassSpec],
    rng: &mut R,
) -> Vec<Session> {
    sessions.shuffle(rng);
    let load = teacher_loads(classes);
    sessions.sort_by_key(|s| {
        let teacher = classes[s.class].teacher.as_str();
        Reverse(load.get(teacher).copied().unwrap_or(0))
    });
    sessions
}

/// Total weekly periods per teacher.
fn teacher_loads(classes: &[ClassSpec]) -> HashMap<&str, u32> {
    let mut load: HashMap<&str, u32> = HashMap::new();
    for class in classes {
        *load.entry(class.teacher.as_str()).or_insert(0) += class.periods_per_week;
    }
    load
}

/// Moves slots starting in the preferred half to the front, keeping
/// relative order on both sides. A soft bias: the non-preferred half
/// stays reachable at the tail.
fn partition_preferred(slots: Vec<Slot>, half: DayHalf, morning_cutoff: u32) -> Vec<Slot> {
    let (mut preferred, rest): (Vec<Slot>, Vec<Slot>) =
        slots.into_iter().partition(|slot| match half {
            DayHalf::Morning => slot.start <= morning_cutoff,
            DayHalf::Afternoon => slot.start > morning_cutoff,
        });
    preferred.extend(rest);
    preferred
}
