//! Textbook dynamic program over the full (items x capacity) table.
//!
//! Memory is O(n * capacity). Keeping every row is what allows the selected
//! items to be traced back afterwards.

use anyhow::Result;
use kp_challenges::knapsack::{Instance, Solution};

pub fn solve_challenge(instance: &Instance) -> Result<u32> {
    Ok(knapsack_dp_2d(
        &instance.weights,
        &instance.values,
        instance.capacity,
    ))
}

pub fn knapsack_dp_2d(weights: &[u32], values: &[u32], capacity: u32) -> u32 {
    DpTable::build(weights, values, capacity).optimal_value()
}

#[derive(Debug, Clone)]
pub struct DpTable {
    num_items: usize,
    capacity: usize,
    /// Row-major, (num_items + 1) rows of (capacity + 1) cells.
    cells: Vec<u32>,
}

impl DpTable {
    pub fn build(weights: &[u32], values: &[u32], capacity: u32) -> Self {
        let num_items = weights.len();
        let capacity = capacity as usize;
        let width = capacity + 1;
        let mut cells = vec![0u32; (num_items + 1) * width];

        for i in 1..=num_items {
            let weight = weights[i - 1] as usize;
            let value = values[i - 1];
            let (prev, row) = cells[(i - 1) * width..(i + 1) * width].split_at_mut(width);
            for w in 0..=capacity {
                row[w] = if weight > w {
                    prev[w]
                } else {
                    prev[w].max(prev[w - weight] + value)
                };
            }
        }

        Self {
            num_items,
            capacity,
            cells,
        }
    }

    /// Best value using the first `i` items within weight budget `w`.
    pub fn get(&self, i: usize, w: usize) -> u32 {
        self.cells[i * (self.capacity + 1) + w]
    }

    pub fn optimal_value(&self) -> u32 {
        self.get(self.num_items, self.capacity)
    }

    /// Walks the table back from the final cell to recover one optimal selection.
    pub fn select_items(&self, weights: &[u32]) -> Solution {
        let mut solution = Solution::new();
        let mut w = self.capacity;
        for i in (1..=self.num_items).rev() {
            if self.get(i, w) != self.get(i - 1, w) {
                solution.items.push(i - 1);
                w -= weights[i - 1] as usize;
            }
        }
        solution.items.reverse();
        solution
    }
}
