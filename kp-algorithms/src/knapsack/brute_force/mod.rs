//! Exhaustive include/exclude search.
//!
//! Exponential in the number of items and deliberately unmemoised, it serves
//! as the ground truth for small instances. The search walks an explicit
//! work stack so deep instances cannot overflow the call stack.

use anyhow::{anyhow, Result};
use kp_challenges::knapsack::Instance;

/// Largest instance `solve_challenge` will accept.
pub const MAX_ITEMS: usize = 30;

pub fn solve_challenge(instance: &Instance) -> Result<u32> {
    let num_items = instance.num_items();
    if num_items > MAX_ITEMS {
        return Err(anyhow!(
            "Brute force is limited to {} items, instance has {}",
            MAX_ITEMS,
            num_items
        ));
    }
    Ok(knapsack_brute_force(
        &instance.weights,
        &instance.values,
        instance.capacity,
        num_items,
    ))
}

/// Best value using the first `n` items within `capacity`.
pub fn knapsack_brute_force(weights: &[u32], values: &[u32], capacity: u32, n: usize) -> u32 {
    // (items left, remaining capacity, value collected so far)
    let mut stack = vec![(n, capacity, 0u32)];
    let mut best = 0;

    while let Some((n, capacity, collected)) = stack.pop() {
        if n == 0 || capacity == 0 {
            best = best.max(collected);
            continue;
        }

        let weight = weights[n - 1];
        if weight <= capacity {
            stack.push((n - 1, capacity - weight, collected + values[n - 1]));
        }
        stack.push((n - 1, capacity, collected));
    }

    best
}
