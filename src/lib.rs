//! # evotable
//!
//! A genetic-algorithm weekly timetable generator. Subjects, faculty, and
//! class sections go in; class-wise grids, faculty-wise grids, a workload
//! summary, and a conflict report come out.
//!
//! The search keeps a population of candidate schedules, scores each by
//! how many faculty land inside the acceptable weekly workload band,
//! keeps the top half every generation, and refills with mutated copies.
//! See [`evolution::Evolution`] for the loop, [`strategy`] for the
//! available mutation operators, and [`report::TimetableReport`] for the
//! materialization/conflict pass.
//!
//! ## Example
//!
//! ```rust
//! use evotable::{generate_timetable_seeded, TimetableProblem};
//!
//! let problem = TimetableProblem::new(
//!     &["Math", "Physics"],
//!     &["Alice: Math", "Bob: Physics, Math"],
//!     &["10A", "10B"],
//! );
//! let report = generate_timetable_seeded(&problem, 42).unwrap();
//! assert!(report.conflicts.is_empty());
//! ```

pub mod domain;
pub mod error;
pub mod evolution;
pub mod fitness;
pub mod population;
pub mod report;
pub mod rng;
pub mod schedule;
pub mod strategy;

// Re-export commonly used types for convenience
pub use domain::{ClassSection, Course, Faculty, TimetableProblem};
pub use error::{Result, TimetableError};
pub use evolution::{Evolution, EvolutionOptions};
pub use fitness::{Challenge, WorkloadChallenge};
pub use report::TimetableReport;
pub use rng::RandomNumberGenerator;
pub use schedule::{Assignment, Schedule};
pub use strategy::{MutationStrategy, PointMutation, ShuffleMutation};

/// Runs the default pipeline — entropy-seeded RNG, [`ShuffleMutation`],
/// [`WorkloadChallenge`], default [`EvolutionOptions`] — and materializes
/// the winning candidate. This is the "generate now" trigger the
/// presentation layer calls.
pub fn generate_timetable(problem: &TimetableProblem) -> Result<TimetableReport> {
    let mut rng = RandomNumberGenerator::new();
    generate_with(problem, &mut rng)
}

/// Same pipeline as [`generate_timetable`] with a fixed seed, for
/// reproducible runs.
pub fn generate_timetable_seeded(problem: &TimetableProblem, seed: u64) -> Result<TimetableReport> {
    let mut rng = RandomNumberGenerator::from_seed(seed);
    generate_with(problem, &mut rng)
}

fn generate_with(
    problem: &TimetableProblem,
    rng: &mut RandomNumberGenerator,
) -> Result<TimetableReport> {
    let challenge = WorkloadChallenge::new(problem);
    let evolution = Evolution::new(
        problem,
        ShuffleMutation,
        challenge,
        EvolutionOptions::default(),
    );
    let best = evolution.run(rng)?;
    Ok(TimetableReport::build(problem, &best))
}
