//! Console reporting for evolution runs.

use crate::ga::{Chromosome, GenerationStats};
use crate::models::RoutePlan;

/// Prints one generation's population statistics.
pub fn print_generation(stats: &GenerationStats) {
    println!(
        "generation {:>4}: evaluated {:>4}, mean fitness {:.6e}, std {:.6e}, best {:.6e}",
        stats.generation, stats.evaluated, stats.mean_fitness, stats.std_dev, stats.best_fitness
    );
}

/// Prints the final result: the winning individual, its fitness, its
/// decoded sub-routes, and the implied total cost.
pub fn print_result(best: &Chromosome, fitness: f64, plan: &RoutePlan) {
    println!("best individual: {:?}", best.genes());
    println!("fitness: {fitness:.6e}");
    if !plan.is_empty() {
        println!("{plan}");
    }
    println!("vehicles used: {}", plan.num_vehicles());
    println!("total cost: {:.0}", implied_cost(fitness));
}

/// Total cost implied by a fitness value, rounded up.
pub fn implied_cost(fitness: f64) -> f64 {
    (1.0 / fitness).ceil()
}
