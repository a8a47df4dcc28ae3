//! The legacy mutation operator: a gated whole-chromosome permutation.

use super::MutationStrategy;
use crate::domain::TimetableProblem;
use crate::rng::RandomNumberGenerator;
use crate::schedule::Schedule;

/// With probability `rate`, permutes the candidate's assignment order
/// uniformly at random; otherwise leaves it untouched.
///
/// Because the workload objective is a fold over the assignment multiset,
/// this operator never changes a candidate's fitness. It is kept as the
/// default so the pipeline's observable behavior (assignment counts,
/// scores) is a pure function of the initial population; use
/// [`super::PointMutation`] when genuine variation is wanted.
#[derive(Debug, Clone, Default)]
pub struct ShuffleMutation;

impl MutationStrategy for ShuffleMutation {
    fn mutate(
        &self,
        schedule: &mut Schedule,
        _problem: &TimetableProblem,
        rate: f64,
        rng: &mut RandomNumberGenerator,
    ) {
        if rng.flip(rate) {
            schedule.shuffle(rng);
        }
    }
}
