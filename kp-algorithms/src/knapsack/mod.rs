use anyhow::{anyhow, Result};
use kp_challenges::knapsack::Instance;
use std::{fmt, str::FromStr};

pub mod brute_force;
pub mod dp_1d;
pub mod dp_2d;
pub mod greedy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    BruteForce,
    Greedy,
    Dp2d,
    Dp1d,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::BruteForce,
        Algorithm::Greedy,
        Algorithm::Dp2d,
        Algorithm::Dp1d,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Algorithm::BruteForce => "brute_force",
            Algorithm::Greedy => "greedy",
            Algorithm::Dp2d => "dp_2d",
            Algorithm::Dp1d => "dp_1d",
        }
    }

    /// Name shown in the experiment report.
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::BruteForce => "Brute Force",
            Algorithm::Greedy => "Greedy",
            Algorithm::Dp2d => "DP-2D(Std)",
            Algorithm::Dp1d => "DP-1D(Opt)",
        }
    }

    pub fn solve_challenge(&self, instance: &Instance) -> Result<u32> {
        match self {
            Algorithm::BruteForce => brute_force::solve_challenge(instance),
            Algorithm::Greedy => greedy::solve_challenge(instance),
            Algorithm::Dp2d => dp_2d::solve_challenge(instance),
            Algorithm::Dp1d => dp_1d::solve_challenge(instance),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.id() == s)
            .ok_or_else(|| {
                anyhow!(
                    "Unknown algorithm '{}'. Expected one of: brute_force, greedy, dp_2d, dp_1d",
                    s
                )
            })
    }
}
