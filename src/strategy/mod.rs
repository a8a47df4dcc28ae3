//! # MutationStrategy
//!
//! The `MutationStrategy` trait defines the interface for operators that
//! perturb a candidate schedule between generations. The evolution engine
//! applies the operator once per mutated copy; gating on the mutation rate
//! happens inside the operator so each strategy controls its own trigger.

pub mod point;
pub mod shuffle;

use std::fmt::Debug;

use crate::domain::TimetableProblem;
use crate::rng::RandomNumberGenerator;
use crate::schedule::Schedule;

/// Operator that perturbs one candidate in place.
///
/// Implementations must leave the candidate valid with respect to the
/// construction-time occupancy rules: never move an assignment onto the
/// break slot or an occupied (class, day, slot) cell.
pub trait MutationStrategy: Debug + Clone + Send + Sync {
    fn mutate(
        &self,
        schedule: &mut Schedule,
        problem: &TimetableProblem,
        rate: f64,
        rng: &mut RandomNumberGenerator,
    );
}

pub use point::PointMutation;
pub use shuffle::ShuffleMutation;
