use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{arg, ArgMatches, Command};

use vrptw_ga::evaluation::CostModel;
use vrptw_ga::ga::{GaConfig, GaRunner, VrptwGaProblem};
use vrptw_ga::io::load_instance;
use vrptw_ga::report;

fn cli() -> Command {
    Command::new("vrptw-ga")
        .about("Evolves vehicle routes for a VRPTW instance")
        .arg(
            arg!(<INSTANCE> "Path to a problem instance JSON file")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(--"unit-cost" [UNIT_COST] "Cost per unit of travel distance")
                .default_value("1.0")
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            arg!(--"init-cost" [INIT_COST] "Fixed dispatch cost per vehicle")
                .default_value("0.0")
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            arg!(--"wait-cost" [WAIT_COST] "Penalty per unit of waiting before a ready time")
                .default_value("0.0")
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            arg!(--"delay-cost" [DELAY_COST] "Penalty per unit of delay past a due time")
                .default_value("0.0")
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            arg!(--"ind-size" [IND_SIZE] "Expected number of customers, checked against the instance")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            arg!(--"pop-size" [POP_SIZE] "Population size")
                .default_value("100")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            arg!(--"cx-pb" [CX_PB] "Crossover probability")
                .default_value("0.85")
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            arg!(--"mut-pb" [MUT_PB] "Mutation probability")
                .default_value("0.02")
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            arg!(--generations [N_GEN] "Number of generations")
                .default_value("200")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            arg!(--seed [SEED] "RNG seed for reproducible runs")
                .value_parser(clap::value_parser!(u64)),
        )
}

fn main() {
    if let Err(e) = run(&cli().get_matches()) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let instance = load_instance(matches.get_one::<PathBuf>("INSTANCE").unwrap())?;

    if let Some(&ind_size) = matches.get_one::<usize>("ind-size") {
        if ind_size != instance.num_customers() {
            bail!(
                "ind-size is {ind_size} but the instance has {} customers",
                instance.num_customers()
            );
        }
    }

    let cost_model = CostModel::default()
        .with_unit_cost(*matches.get_one::<f64>("unit-cost").unwrap())
        .with_init_cost(*matches.get_one::<f64>("init-cost").unwrap())
        .with_wait_cost(*matches.get_one::<f64>("wait-cost").unwrap())
        .with_delay_cost(*matches.get_one::<f64>("delay-cost").unwrap());

    let mut config = GaConfig::default()
        .with_population_size(*matches.get_one::<usize>("pop-size").unwrap())
        .with_max_generations(*matches.get_one::<usize>("generations").unwrap())
        .with_crossover_prob(*matches.get_one::<f64>("cx-pb").unwrap())
        .with_mutation_prob(*matches.get_one::<f64>("mut-pb").unwrap());
    if let Some(&seed) = matches.get_one::<u64>("seed") {
        config = config.with_seed(seed);
    }
    config.validate()?;

    let problem = VrptwGaProblem::new(instance, cost_model);
    println!(
        "instance: {} customers, vehicle capacity {}; evolving {} individuals for {} generations",
        problem.instance().num_customers(),
        problem.instance().vehicle_capacity(),
        config.population_size(),
        config.max_generations()
    );
    let result = GaRunner::run_with_observer(&problem, &config, report::print_generation);

    let plan = problem.decode(&result.best);
    report::print_result(&result.best, result.best_fitness, &plan);

    Ok(())
}
