//! Point mutation: re-rolls one assignment's faculty, day, and slot under
//! the same occupancy rules the initializer uses.

use super::MutationStrategy;
use crate::domain::{TimetableProblem, DAYS};
use crate::rng::RandomNumberGenerator;
use crate::schedule::{Occupancy, Schedule};

/// With probability `rate`, picks one assignment uniformly at random and
/// re-draws its faculty (when the subject has eligible staff), day, and
/// slot. The slot draw respects the candidate's occupancy: the assignment's
/// own cell is released first, then a free cell on the new day is taken.
/// When the new day has no free slot the assignment keeps its old cell, so
/// the operator never drops hours and never introduces collisions.
#[derive(Debug, Clone, Default)]
pub struct PointMutation;

impl MutationStrategy for PointMutation {
    fn mutate(
        &self,
        schedule: &mut Schedule,
        problem: &TimetableProblem,
        rate: f64,
        rng: &mut RandomNumberGenerator,
    ) {
        if !rng.flip(rate) {
            return;
        }
        let Some(index) = rng.choose_index(schedule.len()) else {
            return;
        };

        let mut occupancy = Occupancy::from_schedule(schedule);
        let assignment = &mut schedule.assignments[index];
        occupancy.release(assignment.class_id, assignment.day, assignment.slot);

        let subject = &problem.courses[assignment.course_id].name;
        if let Some(&faculty_id) = rng.choose(problem.eligible_faculty(subject)) {
            assignment.faculty_id = Some(faculty_id);
        }

        let day = rng.choose_index(DAYS.len()).unwrap_or(assignment.day);
        let free = occupancy.free_slots(assignment.class_id, day);
        if let Some(&slot) = rng.choose(&free) {
            assignment.day = day;
            assignment.slot = slot;
        }
        // Old cell stays released only in the tracker, which is discarded;
        // the schedule itself either moved or kept the original cell.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BREAK_SLOT;
    use crate::population::random_candidate;
    use std::collections::HashSet;

    fn problem() -> TimetableProblem {
        TimetableProblem::new(
            &["Math", "Physics"],
            &["Alice: Math", "Bob: Physics"],
            &["10A"],
        )
    }

    #[test]
    fn preserves_assignment_count_and_cell_uniqueness() {
        let problem = problem();
        let mut rng = RandomNumberGenerator::from_seed(21);
        let mut candidate = random_candidate(&problem, &mut rng);
        let count = candidate.len();

        for _ in 0..200 {
            PointMutation.mutate(&mut candidate, &problem, 1.0, &mut rng);
            assert_eq!(candidate.len(), count);
            let mut seen = HashSet::new();
            for a in &candidate.assignments {
                assert_ne!(a.slot, BREAK_SLOT);
                assert!(seen.insert((a.class_id, a.day, a.slot)));
            }
        }
    }

    #[test]
    fn rerolled_faculty_stays_eligible() {
        let problem = problem();
        let mut rng = RandomNumberGenerator::from_seed(22);
        let mut candidate = random_candidate(&problem, &mut rng);
        for _ in 0..100 {
            PointMutation.mutate(&mut candidate, &problem, 1.0, &mut rng);
        }
        for a in &candidate.assignments {
            let subject = &problem.courses[a.course_id].name;
            match a.faculty_id {
                Some(id) => assert!(problem.eligible_faculty(subject).contains(&id)),
                None => assert!(problem.eligible_faculty(subject).is_empty()),
            }
        }
    }

    #[test]
    fn empty_schedule_is_a_no_op() {
        let problem = problem();
        let mut rng = RandomNumberGenerator::from_seed(23);
        let mut empty = Schedule::default();
        PointMutation.mutate(&mut empty, &problem, 1.0, &mut rng);
        assert!(empty.is_empty());
    }
}
