//! # Evolution Loop
//!
//! Generational search over candidate schedules: score, rank, truncate to
//! the top half, then refill with mutated copies of the survivors. Runs a
//! fixed number of generations with no convergence check or early exit.
//!
//! Fitness evaluation is a pure function of a candidate, so it is scored
//! with Rayon across the population once the population is large enough
//! to make the fan-out worthwhile.

use rayon::prelude::*;
use tracing::{debug, info};

use crate::domain::{
    TimetableProblem, GENERATIONS, MUTATION_RATE, POPULATION_SIZE,
};
use crate::error::{Result, TimetableError};
use crate::fitness::Challenge;
use crate::population::initialize_population;
use crate::rng::RandomNumberGenerator;
use crate::schedule::Schedule;
use crate::strategy::MutationStrategy;

/// Configuration for a run of the evolution loop.
#[derive(Debug, Clone)]
pub struct EvolutionOptions {
    population_size: usize,
    generations: usize,
    mutation_rate: f64,
    /// Minimum population size before candidates are scored in parallel.
    parallel_threshold: usize,
}

impl EvolutionOptions {
    pub fn new(population_size: usize, generations: usize, mutation_rate: f64) -> Self {
        Self {
            population_size,
            generations,
            mutation_rate,
            parallel_threshold: 1000,
        }
    }

    pub fn population_size(&self) -> usize {
        self.population_size
    }

    pub fn generations(&self) -> usize {
        self.generations
    }

    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Returns a builder for an `EvolutionOptions` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use evotable::evolution::EvolutionOptions;
    ///
    /// let options = EvolutionOptions::builder()
    ///     .population_size(20)
    ///     .generations(100)
    ///     .mutation_rate(0.05)
    ///     .build();
    /// assert_eq!(options.generations(), 100);
    /// ```
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            population_size: POPULATION_SIZE,
            generations: GENERATIONS,
            mutation_rate: MUTATION_RATE,
            parallel_threshold: 1000,
        }
    }
}

/// Builder for [`EvolutionOptions`].
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    population_size: Option<usize>,
    generations: Option<usize>,
    mutation_rate: Option<f64>,
    parallel_threshold: Option<usize>,
}

impl EvolutionOptionsBuilder {
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn generations(mut self, value: usize) -> Self {
        self.generations = Some(value);
        self
    }

    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    pub fn build(self) -> EvolutionOptions {
        let defaults = EvolutionOptions::default();
        EvolutionOptions {
            population_size: self.population_size.unwrap_or(defaults.population_size),
            generations: self.generations.unwrap_or(defaults.generations),
            mutation_rate: self.mutation_rate.unwrap_or(defaults.mutation_rate),
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(defaults.parallel_threshold),
        }
    }
}

/// Drives the generational search for one problem instance.
#[derive(Debug, Clone)]
pub struct Evolution<'a, S, C>
where
    S: MutationStrategy,
    C: Challenge,
{
    problem: &'a TimetableProblem,
    strategy: S,
    challenge: C,
    options: EvolutionOptions,
}

impl<'a, S, C> Evolution<'a, S, C>
where
    S: MutationStrategy,
    C: Challenge,
{
    pub fn new(
        problem: &'a TimetableProblem,
        strategy: S,
        challenge: C,
        options: EvolutionOptions,
    ) -> Self {
        Self {
            problem,
            strategy,
            challenge,
            options,
        }
    }

    /// Initializes a population and evolves it, returning the candidate in
    /// first position after the final generation.
    ///
    /// Each generation ranks candidates by score descending (stable sort,
    /// so ties keep their prior relative order), keeps the top
    /// `population_size / 2` as survivors, and rebuilds the population as
    /// the survivors followed by one independently mutated copy of each.
    /// An odd population size therefore shrinks by one per generation;
    /// that is the documented policy, not repaired here.
    ///
    /// # Errors
    ///
    /// Returns [`TimetableError::Configuration`] when the population size
    /// or generation count is zero or the mutation rate lies outside
    /// `[0, 1]`, and [`TimetableError::EmptyPopulation`]
    /// if the population empties out (population size 1: no survivors).
    pub fn run(&self, rng: &mut RandomNumberGenerator) -> Result<Schedule> {
        if self.options.population_size() == 0 {
            return Err(TimetableError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }
        if self.options.generations() == 0 {
            return Err(TimetableError::Configuration(
                "Generation count cannot be zero".to_string(),
            ));
        }
        // Covers NaN as well: contains() is false for it.
        if !(0.0..=1.0).contains(&self.options.mutation_rate()) {
            return Err(TimetableError::Configuration(format!(
                "Mutation rate must lie in [0, 1], got {}",
                self.options.mutation_rate()
            )));
        }

        let mut population =
            initialize_population(self.problem, self.options.population_size(), rng);

        for generation in 0..self.options.generations() {
            population = self.rank(population);
            let best = population
                .first()
                .map(|candidate| self.challenge.score(candidate));
            debug!(generation, best, "generation ranked");

            population.truncate(self.options.population_size() / 2);
            if population.is_empty() {
                return Err(TimetableError::EmptyPopulation);
            }

            let mut offspring = population.clone();
            for child in &mut offspring {
                self.strategy
                    .mutate(child, self.problem, self.options.mutation_rate(), rng);
            }
            population.extend(offspring);
        }

        // First element by the final sort; the mutate step cannot change
        // scores under the order-invariant objective, so no re-sort.
        let best = population
            .into_iter()
            .next()
            .ok_or(TimetableError::EmptyPopulation)?;
        info!(
            score = self.challenge.score(&best),
            assignments = best.len(),
            "evolution finished"
        );
        Ok(best)
    }

    /// Sorts candidates by score, descending. The stable sort keeps the
    /// original index as the secondary key, making ranking deterministic
    /// for a given population.
    fn rank(&self, population: Vec<Schedule>) -> Vec<Schedule> {
        let scores: Vec<u32> = if population.len() >= self.options.parallel_threshold() {
            population
                .par_iter()
                .map(|candidate| self.challenge.score(candidate))
                .collect()
        } else {
            population
                .iter()
                .map(|candidate| self.challenge.score(candidate))
                .collect()
        };

        let mut ranked: Vec<(u32, Schedule)> =
            scores.into_iter().zip(population).collect();
        ranked.sort_by_key(|(score, _)| std::cmp::Reverse(*score));
        ranked.into_iter().map(|(_, candidate)| candidate).collect()
    }
}
