//! # Schedule
//!
//! The chromosome of the search: an ordered sequence of [`Assignment`]s.
//! Order carries no scoring semantics — every lookup is by class/day/slot,
//! subject, or faculty — but the legacy mutation operator permutes it, so
//! the sequence is kept as stored.

use std::collections::HashSet;

use crate::domain::{assignable_slots, BREAK_SLOT};
use crate::rng::RandomNumberGenerator;

/// One placed teaching hour: a course taught to a class by a faculty
/// member (or nobody, when the subject has no eligible staff) on a given
/// day and slot. Days and slots are indices into [`crate::domain::DAYS`]
/// and [`crate::domain::TIME_SLOTS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Assignment {
    pub class_id: usize,
    pub course_id: usize,
    pub faculty_id: Option<usize>,
    pub day: usize,
    pub slot: usize,
}

/// A candidate timetable: the ordered assignments of one chromosome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    pub assignments: Vec<Assignment>,
}

impl Schedule {
    pub fn new(assignments: Vec<Assignment>) -> Self {
        Self { assignments }
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Permutes the assignment order uniformly at random. The payload of
    /// the legacy mutation operator; fitness is invariant under it.
    pub fn shuffle(&mut self, rng: &mut RandomNumberGenerator) {
        rng.shuffle(&mut self.assignments);
    }
}

/// Per-candidate record of which (class, day, slot) cells are already
/// filled. Owned by a single candidate while it is being constructed or
/// point-mutated, and discarded afterwards; candidates never share one.
#[derive(Debug, Default)]
pub struct Occupancy {
    taken: HashSet<(usize, usize, usize)>,
}

impl Occupancy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the tracker from an existing schedule, for construction
    /// paths that modify assignments after the fact.
    pub fn from_schedule(schedule: &Schedule) -> Self {
        let mut occupancy = Self::new();
        for assignment in &schedule.assignments {
            occupancy.occupy(assignment.class_id, assignment.day, assignment.slot);
        }
        occupancy
    }

    /// The assignable slots still free for `class_id` on `day`, in slot
    /// order. Excludes the break slot and every cell already taken.
    pub fn free_slots(&self, class_id: usize, day: usize) -> Vec<usize> {
        assignable_slots()
            .filter(|&slot| !self.taken.contains(&(class_id, day, slot)))
            .collect()
    }

    /// Marks a cell as filled. Returns `false` if it already was.
    pub fn occupy(&mut self, class_id: usize, day: usize, slot: usize) -> bool {
        debug_assert_ne!(slot, BREAK_SLOT);
        self.taken.insert((class_id, day, slot))
    }

    /// Releases a cell, for point mutation re-rolls.
    pub fn release(&mut self, class_id: usize, day: usize, slot: usize) {
        self.taken.remove(&(class_id, day, slot));
    }
}
