//! # Population Initializer
//!
//! Builds the initial set of candidate schedules. Each candidate is
//! constructed independently against its own [`Occupancy`] tracker, so no
//! state is shared between candidates.
//!
//! Placement policy, per (class, course) pair and per required hour:
//! faculty uniformly at random among those eligible for the subject (none
//! when the subject has no eligible staff), day uniformly at random and
//! independently of earlier picks, slot uniformly at random among the
//! day's still-free non-break slots. When a day's slots are exhausted the
//! hour is dropped silently — with 7 required hours and 6 assignable
//! slots per day, the independent day draw makes under-fill a normal
//! outcome, not a failure.

use tracing::debug;

use crate::domain::{TimetableProblem, DAYS};
use crate::rng::RandomNumberGenerator;
use crate::schedule::{Assignment, Occupancy, Schedule};

/// Produces `size` independent candidate schedules for `problem`.
pub fn initialize_population(
    problem: &TimetableProblem,
    size: usize,
    rng: &mut RandomNumberGenerator,
) -> Vec<Schedule> {
    (0..size).map(|_| random_candidate(problem, rng)).collect()
}

/// Builds one candidate under the slot-occupancy constraint.
pub fn random_candidate(
    problem: &TimetableProblem,
    rng: &mut RandomNumberGenerator,
) -> Schedule {
    let mut assignments = Vec::new();
    let mut occupancy = Occupancy::new();
    let mut dropped = 0u32;

    for class in &problem.classes {
        for course in &problem.courses {
            for _ in 0..course.hours_per_class {
                let faculty_id = rng.choose(problem.eligible_faculty(&course.name)).copied();
                let day = rng
                    .choose_index(DAYS.len())
                    .unwrap_or_default();
                let free = occupancy.free_slots(class.id, day);
                match rng.choose(&free) {
                    Some(&slot) => {
                        occupancy.occupy(class.id, day, slot);
                        assignments.push(Assignment {
                            class_id: class.id,
                            course_id: course.id,
                            faculty_id,
                            day,
                            slot,
                        });
                    }
                    None => dropped += 1,
                }
            }
        }
    }

    if dropped > 0 {
        debug!(dropped, placed = assignments.len(), "candidate under-filled");
    }
    Schedule::new(assignments)
}
