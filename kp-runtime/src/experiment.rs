use crate::{report, settings::ExperimentConfig, ExperimentSettings};
use anyhow::{anyhow, Result};
use kp_algorithms::knapsack::Algorithm;
use kp_challenges::knapsack::Instance;
use kp_utils::seed_to_hex;
use log::{debug, error, info};
use std::{io::Write, time::Instant};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlgorithmRun {
    pub algorithm: Algorithm,
    pub value: u32,
    /// Wall-clock seconds.
    pub elapsed: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigResult {
    pub config: ExperimentConfig,
    pub dp_2d: AlgorithmRun,
    pub dp_1d: AlgorithmRun,
    pub greedy: AlgorithmRun,
    pub brute_force: Option<AlgorithmRun>,
}

impl ConfigResult {
    pub fn gap_percent(&self) -> f64 {
        optimality_gap(self.dp_1d.value, self.greedy.value)
    }

    pub fn brute_force_matches(&self) -> Option<bool> {
        self.brute_force.map(|run| run.value == self.dp_1d.value)
    }
}

pub fn timed_run(algorithm: Algorithm, instance: &Instance) -> Result<AlgorithmRun> {
    let start = Instant::now();
    let value = algorithm.solve_challenge(instance)?;
    let elapsed = start.elapsed().as_secs_f64();
    debug!("{} -> {} in {:.5}s", algorithm.id(), value, elapsed);
    Ok(AlgorithmRun {
        algorithm,
        value,
        elapsed,
    })
}

/// Percentage shortfall of `approx` relative to `optimal`, 0 when the optimum is 0.
pub fn optimality_gap(optimal: u32, approx: u32) -> f64 {
    if optimal > 0 {
        (optimal as f64 - approx as f64) / optimal as f64 * 100.0
    } else {
        0.0
    }
}

pub fn check_agreement(dp_2d: &AlgorithmRun, dp_1d: &AlgorithmRun) -> Result<()> {
    if dp_2d.value != dp_1d.value {
        error!(
            "{} and {} disagree: {} vs {}",
            dp_2d.algorithm.id(),
            dp_1d.algorithm.id(),
            dp_2d.value,
            dp_1d.value
        );
        return Err(anyhow!(
            "Mismatch between 2D and 1D DP! ({} vs {})",
            dp_2d.value,
            dp_1d.value
        ));
    }
    Ok(())
}

pub fn run_config(
    config: &ExperimentConfig,
    instance: &Instance,
    brute_force_max_items: usize,
) -> Result<ConfigResult> {
    let dp_2d = timed_run(Algorithm::Dp2d, instance)?;
    let dp_1d = timed_run(Algorithm::Dp1d, instance)?;
    check_agreement(&dp_2d, &dp_1d)?;

    let greedy = timed_run(Algorithm::Greedy, instance)?;
    let brute_force = if instance.num_items() <= brute_force_max_items {
        Some(timed_run(Algorithm::BruteForce, instance)?)
    } else {
        None
    };

    Ok(ConfigResult {
        config: *config,
        dp_2d,
        dp_1d,
        greedy,
        brute_force,
    })
}

/// Runs every configuration in order, writing the report to `out`.
///
/// Stops at the first configuration whose DP variants disagree.
pub fn run_experiment<W: Write>(
    settings: &ExperimentSettings,
    master_seed: &[u8; 32],
    out: &mut W,
) -> Result<Vec<ConfigResult>> {
    settings.validate()?;
    info!("Master seed: {}", seed_to_hex(master_seed));

    report::write_header(out)?;
    let mut results = Vec::with_capacity(settings.configs.len());
    for (index, config) in settings.configs.iter().enumerate() {
        let seed = settings.calc_seed(master_seed, index, config);
        let instance = Instance::generate_instance(&seed, &settings.track(config))?;
        info!(
            "Generated {} {} items, capacity {}",
            config.num_items, config.correlation, instance.capacity
        );

        let result = run_config(config, &instance, settings.brute_force_max_items)?;
        report::write_config(out, &result)?;
        results.push(result);
    }
    report::write_hints(out)?;
    Ok(results)
}
