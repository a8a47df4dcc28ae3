//! # Fitness
//!
//! Scoring seam for the evolution loop. A [`Challenge`] maps a candidate
//! schedule to a non-negative score, higher is better; the engine only
//! ranks, so scores are plain counts.
//!
//! The sole shipped objective is [`WorkloadChallenge`]: the number of
//! faculty whose total assigned hours land inside an acceptable weekly
//! band. Slot conflicts, subject-hour completeness, and daily caps are
//! deliberately not scored — conflicts are prevented at construction time
//! and reported by the materializer instead.

use std::collections::HashMap;

use crate::domain::{TimetableProblem, FACULTY_MAX_HOURS, FACULTY_MIN_HOURS};
use crate::schedule::Schedule;

/// Scores candidate schedules. Implementations must be pure functions of
/// the schedule so candidates can be evaluated in parallel.
pub trait Challenge: Send + Sync {
    fn score(&self, schedule: &Schedule) -> u32;
}

/// Counts the faculty whose accumulated weekly hours lie in
/// `[min_hours, max_hours]` inclusive. Faculty with zero assigned hours
/// fall outside the band and contribute nothing. Order-invariant: the
/// score is a fold over the assignment multiset.
///
/// Workload is keyed by faculty name, not record: duplicate names are
/// accepted input, and records sharing a name share one counter.
#[derive(Debug, Clone)]
pub struct WorkloadChallenge {
    /// Faculty id → slot in the name-merged counters. Records with the
    /// same name map to the same slot.
    name_slots: Vec<usize>,
    slot_count: usize,
    min_hours: u32,
    max_hours: u32,
}

impl WorkloadChallenge {
    pub fn new(problem: &TimetableProblem) -> Self {
        let mut slot_by_name: HashMap<&str, usize> = HashMap::new();
        let mut name_slots = Vec::with_capacity(problem.faculty.len());
        for member in &problem.faculty {
            let next = slot_by_name.len();
            name_slots.push(*slot_by_name.entry(member.name.as_str()).or_insert(next));
        }
        Self {
            slot_count: slot_by_name.len(),
            name_slots,
            min_hours: FACULTY_MIN_HOURS,
            max_hours: FACULTY_MAX_HOURS,
        }
    }

    /// Overrides the acceptable workload band, mainly for tests.
    pub fn with_band(mut self, min_hours: u32, max_hours: u32) -> Self {
        self.min_hours = min_hours;
        self.max_hours = max_hours;
        self
    }

    /// Total assigned hours per distinct faculty name, in first-occurrence
    /// order. Unassigned hours (`faculty_id == None`) are skipped entirely.
    pub fn workload(&self, schedule: &Schedule) -> Vec<u32> {
        let mut hours = vec![0u32; self.slot_count];
        for assignment in &schedule.assignments {
            if let Some(id) = assignment.faculty_id {
                hours[self.name_slots[id]] += 1;
            }
        }
        hours
    }
}

impl Challenge for WorkloadChallenge {
    fn score(&self, schedule: &Schedule) -> u32 {
        self.workload(schedule)
            .into_iter()
            .filter(|&h| (self.min_hours..=self.max_hours).contains(&h))
            .count() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::RandomNumberGenerator;
    use crate::schedule::Assignment;

    fn problem() -> TimetableProblem {
        TimetableProblem::new(
            &["Math", "Physics"],
            &["Alice: Math", "Bob: Physics"],
            &["10A"],
        )
    }

    fn hours_for(faculty_id: Option<usize>, count: usize, base_slot: usize) -> Vec<Assignment> {
        (0..count)
            .map(|i| Assignment {
                class_id: 0,
                course_id: 0,
                faculty_id,
                day: i % 6,
                slot: base_slot,
            })
            .collect()
    }

    #[test]
    fn faculty_inside_band_scores_one_each() {
        let challenge = WorkloadChallenge::new(&problem()).with_band(3, 4);
        let mut assignments = hours_for(Some(0), 3, 0); // Alice: in band
        assignments.extend(hours_for(Some(1), 5, 1)); // Bob: above band
        assert_eq!(challenge.score(&Schedule::new(assignments)), 1);
    }

    #[test]
    fn band_edges_are_inclusive() {
        let challenge = WorkloadChallenge::new(&problem()).with_band(2, 4);
        assert_eq!(challenge.score(&Schedule::new(hours_for(Some(0), 2, 0))), 1);
        assert_eq!(challenge.score(&Schedule::new(hours_for(Some(0), 4, 0))), 1);
        assert_eq!(challenge.score(&Schedule::new(hours_for(Some(0), 1, 0))), 0);
        assert_eq!(challenge.score(&Schedule::new(hours_for(Some(0), 5, 0))), 0);
    }

    #[test]
    fn zero_hour_faculty_score_nothing() {
        let challenge = WorkloadChallenge::new(&problem()).with_band(1, 10);
        // Only Alice teaches; Bob has zero hours and must not count.
        let schedule = Schedule::new(hours_for(Some(0), 2, 0));
        assert_eq!(challenge.score(&schedule), 1);
    }

    #[test]
    fn unassigned_hours_are_ignored() {
        let challenge = WorkloadChallenge::new(&problem()).with_band(1, 10);
        let schedule = Schedule::new(hours_for(None, 6, 0));
        assert_eq!(challenge.score(&schedule), 0);
        assert_eq!(challenge.workload(&schedule), vec![0, 0]);
    }

    #[test]
    fn records_sharing_a_name_share_one_counter() {
        // Duplicate faculty names are accepted input; their hours must
        // accumulate under the one name, not per record.
        let problem = TimetableProblem::new(
            &["Math", "Physics"],
            &["Alice: Math", "Alice: Physics"],
            &["10A"],
        );
        let challenge = WorkloadChallenge::new(&problem).with_band(2, 2);
        let mut assignments = hours_for(Some(0), 1, 0);
        assignments.extend(hours_for(Some(1), 1, 1));
        let schedule = Schedule::new(assignments);

        assert_eq!(challenge.workload(&schedule), vec![2]);
        assert_eq!(challenge.score(&schedule), 1);
    }

    #[test]
    fn score_is_invariant_under_permutation() {
        let challenge = WorkloadChallenge::new(&problem()).with_band(2, 6);
        let mut assignments = hours_for(Some(0), 4, 0);
        assignments.extend(hours_for(Some(1), 3, 1));
        assignments.extend(hours_for(None, 2, 2));
        let schedule = Schedule::new(assignments);
        let baseline = challenge.score(&schedule);

        let mut rng = RandomNumberGenerator::from_seed(9);
        let mut shuffled = schedule.clone();
        for _ in 0..10 {
            shuffled.shuffle(&mut rng);
            assert_eq!(challenge.score(&shuffled), baseline);
        }
    }
}
