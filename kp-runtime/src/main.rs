use anyhow::{anyhow, Result};
use clap::{arg, Arg, ArgMatches, Command};
use env_logger::Env;
use kp_algorithms::knapsack::Algorithm;
use kp_challenges::knapsack::{Correlation, Instance, Track};
use kp_runtime::{run_experiment, timed_run, ExperimentSettings};
use kp_utils::{jsonify, load_json_arg, seed_from_str, seed_to_hex};
use log::info;
use std::io;

fn cli() -> Command {
    Command::new("kp-runtime")
        .about("Benchmarks and cross-checks 0/1 knapsack solvers")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("run_experiment")
                .about("Runs every configuration and prints the comparison report")
                .arg(
                    arg!([SETTINGS] "Settings json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--seed [SEED] "Master seed, 64 hex chars or any phrase")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(
            Command::new("generate_instance")
                .about("Generates an instance and prints it as json")
                .arg(arg!(<NUM_ITEMS> "Number of items").value_parser(clap::value_parser!(usize)))
                .arg(
                    arg!(<CORRELATION> "uncorrelated or strongly_correlated")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    Arg::new("value-range")
                        .long("value-range")
                        .value_name("VALUE_RANGE")
                        .help("Upper bound for weights and values")
                        .default_value("1000")
                        .value_parser(clap::value_parser!(u32)),
                )
                .arg(
                    arg!(--seed [SEED] "Seed, 64 hex chars or any phrase")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(
            Command::new("solve")
                .about("Solves an instance with a single algorithm")
                .arg(
                    arg!(<ALGORITHM> "brute_force, greedy, dp_2d or dp_1d")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<INSTANCE> "Instance json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("run_experiment", sub_m)) => experiment(
            sub_m.get_one::<String>("SETTINGS").cloned(),
            sub_m.get_one::<String>("seed").cloned(),
        ),
        Some(("generate_instance", sub_m)) => required::<usize>(sub_m, "NUM_ITEMS").and_then(
            |num_items| {
                generate_instance(
                    num_items,
                    required::<String>(sub_m, "CORRELATION")?,
                    required::<u32>(sub_m, "value-range")?,
                    sub_m.get_one::<String>("seed").cloned(),
                )
            },
        ),
        Some(("solve", sub_m)) => required::<String>(sub_m, "ALGORITHM")
            .and_then(|algorithm| solve(algorithm, required::<String>(sub_m, "INSTANCE")?)),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn required<T: Clone + Send + Sync + 'static>(matches: &ArgMatches, id: &str) -> Result<T> {
    matches
        .get_one::<T>(id)
        .cloned()
        .ok_or_else(|| anyhow!("Missing argument {}", id))
}

fn resolve_seed(seed: Option<&str>) -> Result<[u8; 32]> {
    match seed {
        Some(seed) => seed_from_str(seed),
        None => Ok(rand::random()),
    }
}

pub fn experiment(settings: Option<String>, seed: Option<String>) -> Result<()> {
    let settings = match settings {
        Some(settings) => ExperimentSettings::load(&settings)?,
        None => ExperimentSettings::default(),
    };
    let master_seed = resolve_seed(seed.as_deref().or(settings.seed.as_deref()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_experiment(&settings, &master_seed, &mut out)?;
    Ok(())
}

pub fn generate_instance(
    num_items: usize,
    correlation: String,
    value_range: u32,
    seed: Option<String>,
) -> Result<()> {
    let track = Track {
        num_items,
        value_range,
        correlation: correlation.parse::<Correlation>()?,
    };
    let seed = resolve_seed(seed.as_deref())?;
    info!("Generating with seed {}", seed_to_hex(&seed));

    let instance = Instance::generate_instance(&seed, &track)?;
    println!("{}", jsonify(&instance));
    Ok(())
}

pub fn solve(algorithm: String, instance: String) -> Result<()> {
    let algorithm = algorithm.parse::<Algorithm>()?;
    let instance: Instance = load_json_arg(&instance)?;
    // Deserialising bypasses Instance::new
    let instance = Instance::new(instance.weights, instance.values, instance.capacity)?;

    let run = timed_run(algorithm, &instance)?;
    println!("{} {} {:.5}", run.algorithm.label(), run.value, run.elapsed);
    Ok(())
}
