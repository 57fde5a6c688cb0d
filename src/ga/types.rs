//! Core traits for the genetic algorithm engine.

use rand::Rng;

/// An individual in a population, carrying a cached fitness.
///
/// Fitness is `None` while stale, i.e. the individual was never
/// evaluated or an operator changed it since the last evaluation.
/// Higher fitness is better.
pub trait Individual: Clone + Send {
    /// Returns the cached fitness, or `None` if it is stale.
    fn fitness(&self) -> Option<f64>;

    /// Stores a freshly computed fitness.
    fn set_fitness(&mut self, fitness: f64);

    /// Marks the cached fitness as stale.
    fn invalidate_fitness(&mut self);
}

/// Defines a problem for the genetic algorithm engine.
///
/// The implementation supplies individual construction, evaluation, and
/// the genetic operators; [`GaRunner`](super::GaRunner) owns the
/// generational loop. This object is passed explicitly to the engine at
/// construction; the maximizing fitness direction is fixed.
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use vrptw_ga::ga::{Chromosome, GaProblem};
/// use vrptw_ga::ga::operators::{invert_mutation, segment_crossover};
///
/// /// Toy problem: fitness counts genes already in ascending position.
/// struct SortProblem {
///     size: usize,
/// }
///
/// impl GaProblem for SortProblem {
///     type Individual = Chromosome;
///
///     fn create_individual<R: Rng>(&self, _rng: &mut R) -> Chromosome {
///         Chromosome::new((1..=self.size).rev().collect())
///     }
///
///     fn evaluate(&self, individual: &Chromosome) -> f64 {
///         individual
///             .genes()
///             .iter()
///             .enumerate()
///             .filter(|&(i, &g)| g == i + 1)
///             .count() as f64
///     }
///
///     fn crossover<R: Rng>(
///         &self,
///         a: &Chromosome,
///         b: &Chromosome,
///         rng: &mut R,
///     ) -> (Chromosome, Chromosome) {
///         let (ca, cb) = segment_crossover(a.genes(), b.genes(), rng);
///         (Chromosome::new(ca), Chromosome::new(cb))
///     }
///
///     fn mutate<R: Rng>(&self, individual: &mut Chromosome, rng: &mut R) {
///         let mutated = invert_mutation(individual.genes(), rng);
///         *individual.genes_mut() = mutated;
///     }
/// }
/// ```
pub trait GaProblem: Send + Sync {
    /// The individual representation evolved by this problem.
    type Individual: Individual;

    /// Creates a random individual for the initial population.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Computes the fitness of an individual. Higher is better.
    fn evaluate(&self, individual: &Self::Individual) -> f64;

    /// Produces two children from two parents.
    ///
    /// Parents are borrowed immutably and never modified; children are
    /// returned unevaluated.
    fn crossover<R: Rng>(
        &self,
        parent_a: &Self::Individual,
        parent_b: &Self::Individual,
        rng: &mut R,
    ) -> (Self::Individual, Self::Individual);

    /// Mutates an individual in place.
    fn mutate<R: Rng>(&self, individual: &mut Self::Individual, rng: &mut R);
}
