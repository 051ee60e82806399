use anyhow::{anyhow, Result};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt, str::FromStr};

pub const DEFAULT_VALUE_RANGE: u32 = 1000;

/// How item values are drawn relative to their weights.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Correlation {
    #[default]
    Uncorrelated,
    /// value = weight + floor(0.2 * value_range). Densities end up nearly
    /// uniform, which defeats ratio based heuristics.
    StronglyCorrelated,
}

impl Correlation {
    pub const ALL: [Correlation; 2] = [Correlation::Uncorrelated, Correlation::StronglyCorrelated];

    pub fn as_str(&self) -> &'static str {
        match self {
            Correlation::Uncorrelated => "uncorrelated",
            Correlation::StronglyCorrelated => "strongly_correlated",
        }
    }

    /// Lenient lookup: any unrecognised name resolves to `Uncorrelated`.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl fmt::Display for Correlation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Correlation {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "uncorrelated" => Ok(Correlation::Uncorrelated),
            "strongly_correlated" => Ok(Correlation::StronglyCorrelated),
            _ => Err(anyhow!(
                "Unknown correlation '{}'. Expected one of: uncorrelated, strongly_correlated",
                s
            )),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Track {
    pub num_items: usize,
    #[serde(default = "default_value_range")]
    pub value_range: u32,
    #[serde(default)]
    pub correlation: Correlation,
}

fn default_value_range() -> u32 {
    DEFAULT_VALUE_RANGE
}

impl Track {
    pub fn new(num_items: usize, correlation: Correlation) -> Self {
        Self {
            num_items,
            value_range: DEFAULT_VALUE_RANGE,
            correlation,
        }
    }

    /// Checks that every value and the total weight of the generated instance fit in `u32`.
    pub fn validate(&self) -> Result<()> {
        if self.value_range == 0 {
            return Err(anyhow!("value_range must be at least 1"));
        }
        self.value_range
            .checked_add(self.value_range / 5)
            .ok_or_else(|| {
                anyhow!(
                    "value_range ({}) is too large: values would overflow u32",
                    self.value_range
                )
            })?;
        u32::try_from(self.num_items)
            .ok()
            .and_then(|n| n.checked_mul(self.value_range))
            .ok_or_else(|| {
                anyhow!(
                    "{} items with value_range {} could overflow the total weight",
                    self.num_items,
                    self.value_range
                )
            })?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Item {
    pub id: usize,
    pub weight: u32,
    pub value: u32,
    pub ratio: f64,
}

impl Item {
    pub fn new(id: usize, weight: u32, value: u32) -> Self {
        let ratio = if weight > 0 {
            value as f64 / weight as f64
        } else {
            0.0
        };
        Self {
            id,
            weight,
            value,
            ratio,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Solution {
    pub items: Vec<usize>,
}

impl Solution {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    pub weights: Vec<u32>,
    pub values: Vec<u32>,
    pub capacity: u32,
}

impl Instance {
    pub fn new(weights: Vec<u32>, values: Vec<u32>, capacity: u32) -> Result<Self> {
        if weights.len() != values.len() {
            return Err(anyhow!(
                "Number of weights ({}) does not match number of values ({})",
                weights.len(),
                values.len()
            ));
        }
        Ok(Self {
            weights,
            values,
            capacity,
        })
    }

    pub fn generate_instance(seed: &[u8; 32], track: &Track) -> Result<Self> {
        let mut rng = SmallRng::from_seed(*seed);
        Self::generate_with_rng(&mut rng, track)
    }

    pub fn generate_with_rng<R: Rng>(rng: &mut R, track: &Track) -> Result<Self> {
        track.validate()?;
        let value_range = track.value_range;
        let offset = value_range / 5;

        let mut weights = Vec::with_capacity(track.num_items);
        let mut values = Vec::with_capacity(track.num_items);
        for _ in 0..track.num_items {
            let weight = rng.gen_range(1..=value_range);
            let value = match track.correlation {
                Correlation::Uncorrelated => rng.gen_range(1..=value_range),
                Correlation::StronglyCorrelated => weight + offset,
            };
            weights.push(weight);
            values.push(value);
        }

        // Half the total weight: neither everything nor nothing fits
        let capacity = weights.iter().sum::<u32>() / 2;

        Ok(Self {
            weights,
            values,
            capacity,
        })
    }

    pub fn num_items(&self) -> usize {
        self.weights.len()
    }

    /// Checks that a selection is feasible and returns its total value.
    pub fn verify_solution(&self, solution: &Solution) -> Result<u32> {
        let selected_items: HashSet<usize> = solution.items.iter().cloned().collect();
        if selected_items.len() != solution.items.len() {
            return Err(anyhow!("Duplicate items selected."));
        }

        let mut total_weight = 0u64;
        let mut total_value = 0u32;
        for &item in &solution.items {
            if item >= self.num_items() {
                return Err(anyhow!("Item ({}) is out of bounds", item));
            }
            total_weight += self.weights[item] as u64;
            total_value += self.values[item];
        }

        if total_weight > self.capacity as u64 {
            return Err(anyhow!(
                "Total weight ({}) exceeded capacity ({})",
                total_weight,
                self.capacity
            ));
        }
        Ok(total_value)
    }
}
