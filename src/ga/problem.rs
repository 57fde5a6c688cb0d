//! GA problem definition for the VRPTW.
//!
//! Each individual is a permutation of customer ids. Evaluation decodes
//! the permutation into vehicle sub-routes with the greedy scan and
//! scores the plan with the cost model; fitness is the reciprocal of
//! total cost.
//!
//! # Operators
//!
//! - **Crossover**: segment-plus-remainder with left-to-right dedup
//! - **Mutation**: inversion of a random contiguous subsequence

use rand::Rng;

use crate::evaluation::CostModel;
use crate::models::{ProblemInstance, RoutePlan};

use super::chromosome::Chromosome;
use super::decode::decode;
use super::operators::{invert_mutation, segment_crossover};
use super::types::GaProblem;

/// GA problem binding a [`ProblemInstance`] to a [`CostModel`].
///
/// # Examples
///
/// ```
/// use vrptw_ga::distance::DistanceMatrix;
/// use vrptw_ga::evaluation::CostModel;
/// use vrptw_ga::ga::{GaConfig, GaRunner, VrptwGaProblem};
/// use vrptw_ga::models::{Customer, ProblemInstance};
///
/// let customers = vec![
///     Customer::depot(1000.0),
///     Customer::new(1, 10.0, 0.0, 0.0, 1000.0).unwrap(),
///     Customer::new(2, 10.0, 0.0, 0.0, 1000.0).unwrap(),
///     Customer::new(3, 10.0, 0.0, 0.0, 1000.0).unwrap(),
/// ];
/// let rows = vec![
///     vec![0.0, 1.0, 2.0, 3.0],
///     vec![1.0, 0.0, 1.0, 2.0],
///     vec![2.0, 1.0, 0.0, 1.0],
///     vec![3.0, 2.0, 1.0, 0.0],
/// ];
/// let dm = DistanceMatrix::from_rows(&rows).unwrap();
/// let instance = ProblemInstance::new(30.0, customers, dm).unwrap();
///
/// let problem = VrptwGaProblem::new(instance, CostModel::default());
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_max_generations(30)
///     .with_seed(42);
///
/// let result = GaRunner::run(&problem, &config);
/// assert!(result.best_fitness > 0.0);
/// ```
pub struct VrptwGaProblem {
    instance: ProblemInstance,
    cost_model: CostModel,
}

impl VrptwGaProblem {
    /// Creates a new VRPTW GA problem.
    pub fn new(instance: ProblemInstance, cost_model: CostModel) -> Self {
        Self {
            instance,
            cost_model,
        }
    }

    /// The problem instance being solved.
    pub fn instance(&self) -> &ProblemInstance {
        &self.instance
    }

    /// The cost model used for evaluation.
    pub fn cost_model(&self) -> &CostModel {
        &self.cost_model
    }

    /// Decodes an individual into its route plan.
    pub fn decode(&self, individual: &Chromosome) -> RoutePlan {
        decode(individual.genes(), &self.instance)
    }
}

impl GaProblem for VrptwGaProblem {
    type Individual = Chromosome;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Chromosome {
        let n = self.instance.num_customers();
        let mut perm: Vec<usize> = (1..=n).collect();

        // Fisher-Yates shuffle
        for i in (1..perm.len()).rev() {
            let j = rng.random_range(0..=i);
            perm.swap(i, j);
        }

        Chromosome::new(perm)
    }

    fn evaluate(&self, individual: &Chromosome) -> f64 {
        let plan = self.decode(individual);
        let total_cost = self.cost_model.total_cost(&plan, &self.instance);
        self.cost_model.fitness(total_cost)
    }

    fn crossover<R: Rng>(
        &self,
        parent_a: &Chromosome,
        parent_b: &Chromosome,
        rng: &mut R,
    ) -> (Chromosome, Chromosome) {
        let (child_a, child_b) = segment_crossover(parent_a.genes(), parent_b.genes(), rng);
        (Chromosome::new(child_a), Chromosome::new(child_b))
    }

    fn mutate<R: Rng>(&self, individual: &mut Chromosome, rng: &mut R) {
        if individual.len() < 2 {
            return;
        }
        let mutated = invert_mutation(individual.genes(), rng);
        *individual.genes_mut() = mutated;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::ga::{GaConfig, GaRunner, Individual};
    use crate::models::Customer;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn line_problem(capacity: f64) -> VrptwGaProblem {
        let customers = vec![
            Customer::depot(1000.0),
            Customer::new(1, 10.0, 0.0, 0.0, 1000.0).expect("valid"),
            Customer::new(2, 10.0, 0.0, 0.0, 1000.0).expect("valid"),
            Customer::new(3, 10.0, 0.0, 0.0, 1000.0).expect("valid"),
        ];
        let rows = vec![
            vec![0.0, 1.0, 2.0, 3.0],
            vec![1.0, 0.0, 1.0, 2.0],
            vec![2.0, 1.0, 0.0, 1.0],
            vec![3.0, 2.0, 1.0, 0.0],
        ];
        let dm = DistanceMatrix::from_rows(&rows).expect("square");
        let instance = ProblemInstance::new(capacity, customers, dm).expect("valid");
        VrptwGaProblem::new(instance, CostModel::default())
    }

    #[test]
    fn test_create_individual_is_permutation() {
        let problem = line_problem(30.0);
        let mut rng = StdRng::seed_from_u64(42);
        let individual = problem.create_individual(&mut rng);
        assert_eq!(individual.len(), 3);
        let mut sorted = individual.genes().to_vec();
        sorted.sort();
        assert_eq!(sorted, vec![1, 2, 3]);
        assert_eq!(individual.fitness(), None);
    }

    #[test]
    fn test_evaluate_ordered_tour() {
        let problem = line_problem(30.0);
        let individual = Chromosome::new(vec![1, 2, 3]);
        // 0->1->2->3->0 = 6.0; unit cost 1.0, no penalties
        let fitness = problem.evaluate(&individual);
        assert!((fitness - 1.0 / 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_evaluate_capacity_split() {
        // Capacity below any two demands: three singleton trips,
        // distance 2*(1+2+3) = 12
        let problem = line_problem(15.0);
        let individual = Chromosome::new(vec![1, 2, 3]);
        let fitness = problem.evaluate(&individual);
        assert!((fitness - 1.0 / 12.0).abs() < 1e-10);
    }

    #[test]
    fn test_crossover_produces_permutations() {
        let problem = line_problem(30.0);
        let a = Chromosome::new(vec![1, 2, 3]);
        let b = Chromosome::new(vec![3, 1, 2]);
        let mut rng = StdRng::seed_from_u64(42);
        let (child_a, child_b) = problem.crossover(&a, &b, &mut rng);
        for child in [&child_a, &child_b] {
            let mut sorted = child.genes().to_vec();
            sorted.sort();
            assert_eq!(sorted, vec![1, 2, 3]);
            assert_eq!(child.fitness(), None);
        }
        // Parents untouched
        assert_eq!(a.genes(), &[1, 2, 3]);
        assert_eq!(b.genes(), &[3, 1, 2]);
    }

    #[test]
    fn test_mutate_preserves_genes_and_invalidates() {
        let problem = line_problem(30.0);
        let mut individual = Chromosome::new(vec![1, 2, 3]);
        individual.set_fitness(0.5);
        let mut rng = StdRng::seed_from_u64(42);
        problem.mutate(&mut individual, &mut rng);
        let mut sorted = individual.genes().to_vec();
        sorted.sort();
        assert_eq!(sorted, vec![1, 2, 3]);
        assert_eq!(individual.fitness(), None);
    }

    #[test]
    fn test_engine_single_generation_keeps_best() {
        // n_gen=1, pop_size=4, operators disabled: the winner must be at
        // least as fit as the best of the initial population.
        let problem = line_problem(30.0);
        let config = GaConfig::default()
            .with_population_size(4)
            .with_max_generations(1)
            .with_crossover_prob(0.0)
            .with_mutation_prob(0.0)
            .with_seed(11);
        let result = GaRunner::run(&problem, &config);

        let mut rng = StdRng::seed_from_u64(11);
        let initial_best = (0..4)
            .map(|_| {
                let individual = problem.create_individual(&mut rng);
                problem.evaluate(&individual)
            })
            .fold(f64::NEG_INFINITY, f64::max);

        assert!(result.best_fitness >= initial_best);
    }

    #[test]
    fn test_engine_finds_decodable_best() {
        let problem = line_problem(25.0);
        let config = GaConfig::default()
            .with_population_size(20)
            .with_max_generations(25)
            .with_seed(42);
        let result = GaRunner::run(&problem, &config);
        let plan = problem.decode(&result.best);
        assert_eq!(plan.num_served(), 3);
        // Grouping respects capacity (no singleton exceeds it here)
        for sub_route in plan.sub_routes() {
            let demand: f64 = sub_route
                .iter()
                .map(|&c| problem.instance().customer(c).demand())
                .sum();
            assert!(demand <= problem.instance().vehicle_capacity());
        }
    }
}
