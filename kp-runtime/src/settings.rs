use anyhow::{anyhow, Result};
use kp_algorithms::knapsack::brute_force;
use kp_challenges::knapsack::{Correlation, Track, DEFAULT_VALUE_RANGE};
use kp_utils::{jsonify, load_json_arg, seed_to_hex, u8s_from_str};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperimentConfig {
    pub num_items: usize,
    pub correlation: Correlation,
}

impl ExperimentConfig {
    pub fn new(num_items: usize, correlation: Correlation) -> Self {
        Self {
            num_items,
            correlation,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ExperimentSettings {
    /// Master seed. A random one is drawn when absent.
    pub seed: Option<String>,
    pub value_range: u32,
    /// Configurations with at most this many items are cross-checked by brute force.
    pub brute_force_max_items: usize,
    pub configs: Vec<ExperimentConfig>,
}

impl Default for ExperimentSettings {
    fn default() -> Self {
        Self {
            seed: None,
            value_range: DEFAULT_VALUE_RANGE,
            brute_force_max_items: 20,
            configs: vec![
                ExperimentConfig::new(20, Correlation::Uncorrelated),
                ExperimentConfig::new(20, Correlation::StronglyCorrelated),
                ExperimentConfig::new(200, Correlation::Uncorrelated),
                ExperimentConfig::new(200, Correlation::StronglyCorrelated),
            ],
        }
    }
}

impl ExperimentSettings {
    /// Loads settings from inline json or a `.json` file, then validates them.
    pub fn load(arg: &str) -> Result<Self> {
        let settings: Self = load_json_arg(arg)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.value_range == 0 {
            return Err(anyhow!("value_range must be at least 1"));
        }
        for config in &self.configs {
            self.track(config).validate()?;
        }
        if self.brute_force_max_items > brute_force::MAX_ITEMS {
            return Err(anyhow!(
                "brute_force_max_items ({}) exceeds the brute force limit ({})",
                self.brute_force_max_items,
                brute_force::MAX_ITEMS
            ));
        }
        Ok(())
    }

    pub fn track(&self, config: &ExperimentConfig) -> Track {
        Track {
            num_items: config.num_items,
            value_range: self.value_range,
            correlation: config.correlation,
        }
    }

    /// Per-configuration seed, so runs are reproducible from the master seed alone.
    pub fn calc_seed(
        &self,
        master_seed: &[u8; 32],
        index: usize,
        config: &ExperimentConfig,
    ) -> [u8; 32] {
        let track = self.track(config);
        u8s_from_str(&format!(
            "{}:{}:{}",
            seed_to_hex(master_seed),
            index,
            jsonify(&track)
        ))
    }
}
