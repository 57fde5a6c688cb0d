//! Generational evolution loop.
//!
//! Each generation: rank-select `pop_size` clones, pair consecutive
//! offspring for crossover, mutate independently, re-evaluate whatever
//! went stale, then replace the population wholesale. The run is bounded
//! solely by the generation count; there is no early stopping.

use std::cmp::Ordering;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::GaConfig;
use super::types::{GaProblem, Individual};

/// Population statistics recorded after each generation.
#[derive(Debug, Clone, Copy)]
pub struct GenerationStats {
    /// Generation index, starting at 0.
    pub generation: usize,
    /// Number of offspring whose fitness was recomputed this generation.
    pub evaluated: usize,
    /// Mean population fitness.
    pub mean_fitness: f64,
    /// Population fitness standard deviation.
    pub std_dev: f64,
    /// Best fitness in the population.
    pub best_fitness: f64,
}

impl GenerationStats {
    fn from_population<I: Individual>(generation: usize, evaluated: usize, population: &[I]) -> Self {
        let n = population.len() as f64;
        let fitnesses: Vec<f64> = population.iter().map(fitness_of).collect();
        let sum: f64 = fitnesses.iter().sum();
        let sum_sq: f64 = fitnesses.iter().map(|f| f * f).sum();
        let mean = sum / n;
        let std_dev = (sum_sq / n - mean * mean).abs().sqrt();
        let best = fitnesses.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        Self {
            generation,
            evaluated,
            mean_fitness: mean,
            std_dev,
            best_fitness: best,
        }
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct GaResult<I> {
    /// Best individual in the final population.
    pub best: I,
    /// Its fitness.
    pub best_fitness: f64,
    /// Per-generation statistics, one entry per generation.
    pub history: Vec<GenerationStats>,
}

/// Drives a [`GaProblem`] through a fixed number of generations.
///
/// # Examples
///
/// See [`VrptwGaProblem`](super::VrptwGaProblem) for an end-to-end run.
pub struct GaRunner;

impl GaRunner {
    /// Runs the evolution loop to completion.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid (see
    /// [`GaConfig::validate`]).
    pub fn run<P: GaProblem>(problem: &P, config: &GaConfig) -> GaResult<P::Individual> {
        Self::run_with_observer(problem, config, |_| {})
    }

    /// Runs the evolution loop, invoking `observer` with each
    /// generation's statistics as they are recorded.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid (see
    /// [`GaConfig::validate`]).
    pub fn run_with_observer<P, F>(
        problem: &P,
        config: &GaConfig,
        mut observer: F,
    ) -> GaResult<P::Individual>
    where
        P: GaProblem,
        F: FnMut(&GenerationStats),
    {
        config.validate().expect("invalid GA configuration");

        let mut rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut population: Vec<P::Individual> = (0..config.population_size())
            .map(|_| problem.create_individual(&mut rng))
            .collect();
        evaluate_stale(problem, &mut population);

        let mut history = Vec::with_capacity(config.max_generations());

        for generation in 0..config.max_generations() {
            let mut offspring = select_best(&population, config.population_size());

            // Crossover disjoint consecutive pairs
            for pair in offspring.chunks_mut(2) {
                if pair.len() == 2 && rng.random_range(0.0..1.0) < config.crossover_prob() {
                    let (child_a, child_b) = problem.crossover(&pair[0], &pair[1], &mut rng);
                    pair[0] = child_a;
                    pair[1] = child_b;
                    pair[0].invalidate_fitness();
                    pair[1].invalidate_fitness();
                }
            }

            // Mutate each offspring independently
            for individual in offspring.iter_mut() {
                if rng.random_range(0.0..1.0) < config.mutation_prob() {
                    problem.mutate(individual, &mut rng);
                    individual.invalidate_fitness();
                }
            }

            let evaluated = evaluate_stale(problem, &mut offspring);

            // The offspring replace the population wholesale
            population = offspring;

            let stats = GenerationStats::from_population(generation, evaluated, &population);
            observer(&stats);
            history.push(stats);
        }

        let best = population
            .iter()
            .max_by(|a, b| {
                fitness_of(*a)
                    .partial_cmp(&fitness_of(*b))
                    .unwrap_or(Ordering::Equal)
            })
            .cloned()
            .expect("population is never empty");
        let best_fitness = fitness_of(&best);

        GaResult {
            best,
            best_fitness,
            history,
        }
    }
}

/// Evaluates every individual whose fitness cache is stale. Returns the
/// number of evaluations performed.
fn evaluate_stale<P: GaProblem>(problem: &P, population: &mut [P::Individual]) -> usize {
    let mut evaluated = 0;
    for individual in population.iter_mut() {
        if individual.fitness().is_none() {
            let fitness = problem.evaluate(individual);
            individual.set_fitness(fitness);
            evaluated += 1;
        }
    }
    evaluated
}

/// Truncation selection: `count` clones taken from the population ranked
/// by fitness descending, cycling from the top when `count` exceeds the
/// population (top performers may repeat, low performers drop out).
fn select_best<I: Individual>(population: &[I], count: usize) -> Vec<I> {
    let mut ranked: Vec<&I> = population.iter().collect();
    ranked.sort_by(|a, b| {
        fitness_of(*b)
            .partial_cmp(&fitness_of(*a))
            .unwrap_or(Ordering::Equal)
    });
    (0..count).map(|k| ranked[k % ranked.len()].clone()).collect()
}

fn fitness_of<I: Individual>(individual: &I) -> f64 {
    individual.fitness().unwrap_or(f64::NEG_INFINITY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::chromosome::Chromosome;
    use crate::ga::operators::{invert_mutation, segment_crossover};

    /// Toy permutation problem: fitness counts genes in ascending
    /// position, so the identity permutation is optimal.
    struct SortProblem {
        size: usize,
    }

    impl GaProblem for SortProblem {
        type Individual = Chromosome;

        fn create_individual<R: Rng>(&self, rng: &mut R) -> Chromosome {
            let mut perm: Vec<usize> = (1..=self.size).collect();
            for i in (1..perm.len()).rev() {
                let j = rng.random_range(0..=i);
                perm.swap(i, j);
            }
            Chromosome::new(perm)
        }

        fn evaluate(&self, individual: &Chromosome) -> f64 {
            individual
                .genes()
                .iter()
                .enumerate()
                .filter(|&(i, &g)| g == i + 1)
                .count() as f64
        }

        fn crossover<R: Rng>(
            &self,
            parent_a: &Chromosome,
            parent_b: &Chromosome,
            rng: &mut R,
        ) -> (Chromosome, Chromosome) {
            let (a, b) = segment_crossover(parent_a.genes(), parent_b.genes(), rng);
            (Chromosome::new(a), Chromosome::new(b))
        }

        fn mutate<R: Rng>(&self, individual: &mut Chromosome, rng: &mut R) {
            let mutated = invert_mutation(individual.genes(), rng);
            *individual.genes_mut() = mutated;
        }
    }

    #[test]
    fn test_history_length_matches_generations() {
        let problem = SortProblem { size: 6 };
        let config = GaConfig::default()
            .with_population_size(8)
            .with_max_generations(5)
            .with_seed(1);
        let result = GaRunner::run(&problem, &config);
        assert_eq!(result.history.len(), 5);
        for (i, stats) in result.history.iter().enumerate() {
            assert_eq!(stats.generation, i);
            assert!(stats.best_fitness >= stats.mean_fitness);
        }
    }

    #[test]
    fn test_truncation_never_loses_best_without_operators() {
        let problem = SortProblem { size: 8 };
        // With operators disabled, generation 1's best must be at least
        // the initial population's best: selection keeps the top ranks.
        let config = GaConfig::default()
            .with_population_size(4)
            .with_max_generations(1)
            .with_crossover_prob(0.0)
            .with_mutation_prob(0.0)
            .with_seed(3);
        let result = GaRunner::run(&problem, &config);

        // Rebuild the initial population with the same seed
        let mut rng = StdRng::seed_from_u64(3);
        let initial_best = (0..4)
            .map(|_| {
                let ind = problem.create_individual(&mut rng);
                problem.evaluate(&ind)
            })
            .fold(f64::NEG_INFINITY, f64::max);

        assert!(result.best_fitness >= initial_best);
    }

    #[test]
    fn test_seeded_run_is_reproducible() {
        let problem = SortProblem { size: 7 };
        let config = GaConfig::default()
            .with_population_size(10)
            .with_max_generations(10)
            .with_seed(42);
        let a = GaRunner::run(&problem, &config);
        let b = GaRunner::run(&problem, &config);
        assert_eq!(a.best.genes(), b.best.genes());
        assert_eq!(a.best_fitness, b.best_fitness);
    }

    #[test]
    fn test_run_returns_valid_permutation() {
        let problem = SortProblem { size: 10 };
        let config = GaConfig::default()
            .with_population_size(30)
            .with_max_generations(50)
            .with_mutation_prob(0.2)
            .with_seed(7);
        let result = GaRunner::run(&problem, &config);
        // Operator closure: the winner is still a permutation of 1..=10
        let mut sorted = result.best.genes().to_vec();
        sorted.sort();
        assert_eq!(sorted, (1..=10).collect::<Vec<_>>());
        assert!(result.best_fitness >= 0.0);
        assert_eq!(result.best.fitness(), Some(result.best_fitness));
    }

    #[test]
    fn test_observer_sees_every_generation() {
        let problem = SortProblem { size: 5 };
        let config = GaConfig::default()
            .with_population_size(6)
            .with_max_generations(4)
            .with_seed(2);
        let mut seen = Vec::new();
        let result = GaRunner::run_with_observer(&problem, &config, |stats| {
            seen.push(stats.generation);
        });
        assert_eq!(seen, vec![0, 1, 2, 3]);
        assert_eq!(result.history.len(), 4);
    }

    #[test]
    #[should_panic(expected = "invalid GA configuration")]
    fn test_invalid_config_panics() {
        let problem = SortProblem { size: 5 };
        let config = GaConfig::default().with_population_size(0);
        let _ = GaRunner::run(&problem, &config);
    }

    #[test]
    fn test_select_best_ranks_and_cycles() {
        let mut population: Vec<Chromosome> = (0..3)
            .map(|i| {
                let mut c = Chromosome::new(vec![i + 1]);
                c.set_fitness(i as f64);
                c
            })
            .collect();
        population.reverse(); // fitness order: 2.0, 1.0, 0.0

        let selected = select_best(&population, 5);
        let fitnesses: Vec<f64> = selected.iter().map(|c| c.fitness().unwrap()).collect();
        assert_eq!(fitnesses, vec![2.0, 1.0, 0.0, 2.0, 1.0]);
    }

    #[test]
    fn test_stats_mean_and_std() {
        let mut population: Vec<Chromosome> = Vec::new();
        for f in [1.0, 3.0] {
            let mut c = Chromosome::new(vec![1]);
            c.set_fitness(f);
            population.push(c);
        }
        let stats = GenerationStats::from_population(0, 2, &population);
        assert!((stats.mean_fitness - 2.0).abs() < 1e-10);
        assert!((stats.std_dev - 1.0).abs() < 1e-10);
        assert_eq!(stats.best_fitness, 3.0);
        assert_eq!(stats.evaluated, 2);
    }
}
