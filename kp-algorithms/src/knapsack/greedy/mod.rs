use anyhow::Result;
use kp_challenges::knapsack::{Instance, Item, Solution};

pub fn solve_challenge(instance: &Instance) -> Result<u32> {
    Ok(knapsack_greedy(
        &instance.weights,
        &instance.values,
        instance.capacity,
    ))
}

pub fn knapsack_greedy(weights: &[u32], values: &[u32], capacity: u32) -> u32 {
    let solution = select_items(weights, values, capacity);
    solution.items.iter().map(|&i| values[i]).sum()
}

/// Takes items by value density, highest first, skipping any that no longer fit.
///
/// Equal densities keep their original order, so the selection is
/// reproducible.
pub fn select_items(weights: &[u32], values: &[u32], capacity: u32) -> Solution {
    let mut items: Vec<Item> = weights
        .iter()
        .zip(values)
        .enumerate()
        .map(|(id, (&weight, &value))| Item::new(id, weight, value))
        .collect();

    // Vec::sort_by is stable
    items.sort_by(|a, b| b.ratio.total_cmp(&a.ratio));

    let mut solution = Solution::new();
    let mut total_weight = 0u64;
    for item in &items {
        if total_weight + item.weight as u64 <= capacity as u64 {
            total_weight += item.weight as u64;
            solution.items.push(item.id);
        }
    }
    solution
}
