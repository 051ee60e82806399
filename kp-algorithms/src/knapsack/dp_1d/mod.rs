//! Rolling-array dynamic program: same recurrence as the 2D table, O(capacity) memory.

use anyhow::Result;
use kp_challenges::knapsack::Instance;

pub fn solve_challenge(instance: &Instance) -> Result<u32> {
    Ok(knapsack_dp_1d(
        &instance.weights,
        &instance.values,
        instance.capacity,
    ))
}

pub fn knapsack_dp_1d(weights: &[u32], values: &[u32], capacity: u32) -> u32 {
    let mut dp = vec![0u32; capacity as usize + 1];
    for (&weight, &value) in weights.iter().zip(values) {
        fold_item(&mut dp, weight, value);
    }
    dp[capacity as usize]
}

/// Folds one item into the row.
///
/// Capacities must be visited from high to low so `dp[w - weight]` still holds
/// the previous item's value; ascending order would let the item be taken
/// more than once.
fn fold_item(dp: &mut [u32], weight: u32, value: u32) {
    let weight = weight as usize;
    if weight >= dp.len() {
        return;
    }
    for w in (weight..dp.len()).rev() {
        let candidate = dp[w - weight] + value;
        if candidate > dp[w] {
            dp[w] = candidate;
        }
    }
}
