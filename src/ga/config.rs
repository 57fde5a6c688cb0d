//! Engine configuration.

use anyhow::{bail, Result};

/// Configuration for a genetic algorithm run.
///
/// # Examples
///
/// ```
/// use vrptw_ga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_max_generations(120)
///     .with_seed(42);
/// assert_eq!(config.population_size(), 50);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    population_size: usize,
    max_generations: usize,
    crossover_prob: f64,
    mutation_prob: f64,
    seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 200,
            crossover_prob: 0.85,
            mutation_prob: 0.02,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Sets the number of generations to run.
    pub fn with_max_generations(mut self, generations: usize) -> Self {
        self.max_generations = generations;
        self
    }

    /// Sets the per-pair crossover probability.
    pub fn with_crossover_prob(mut self, prob: f64) -> Self {
        self.crossover_prob = prob;
        self
    }

    /// Sets the per-individual mutation probability.
    pub fn with_mutation_prob(mut self, prob: f64) -> Self {
        self.mutation_prob = prob;
        self
    }

    /// Sets an RNG seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Population size.
    pub fn population_size(&self) -> usize {
        self.population_size
    }

    /// Number of generations.
    pub fn max_generations(&self) -> usize {
        self.max_generations
    }

    /// Per-pair crossover probability.
    pub fn crossover_prob(&self) -> f64 {
        self.crossover_prob
    }

    /// Per-individual mutation probability.
    pub fn mutation_prob(&self) -> f64 {
        self.mutation_prob
    }

    /// RNG seed, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Checks the configuration for fatal errors.
    ///
    /// Population size and generation count must be positive and both
    /// probabilities must lie in `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            bail!("population size must be positive");
        }
        if self.max_generations == 0 {
            bail!("generation count must be positive");
        }
        if !(0.0..=1.0).contains(&self.crossover_prob) {
            bail!(
                "crossover probability must be in [0, 1], got {}",
                self.crossover_prob
            );
        }
        if !(0.0..=1.0).contains(&self.mutation_prob) {
            bail!(
                "mutation probability must be in [0, 1], got {}",
                self.mutation_prob
            );
        }
        Ok(())
    }
}
