//! Cost/Choice Engine
//!
//! Fills the `(N+1) × (M+1)` cost table and the same-shaped choice table for
//! the weighted line edit distance.
//!
//! # Recurrence
//!
//! For `1 ≤ i ≤ N`, `1 ≤ j ≤ M`:
//!
//! ```text
//! cost[i][j] = min(
//!     cost[i][j-1]   + add(j),          // Add
//!     cost[i-1][j-1] + sub(i, j),       // Substitute, or Identity when sub = 0
//!     cost[i-1][j]   + 10,              // SingleDelete
//!     min(cost[0..i][j]) + 15,          // BlockDelete ending at i
//! )
//! ```
//!
//! Ties resolve in that listed order: the first candidate reaching the minimum
//! wins. The reconstructed script depends on this order, so it must not change.
//!
//! # Block deletes
//!
//! A block delete costs 15 whatever its span, so the best block ending at `i`
//! starts right after the cheapest predecessor in the column. The column is
//! filled top to bottom and that predecessor is tracked as a running minimum,
//! which keeps the fill at O(N·M) instead of O(N²·M).
//!
//! # Boundaries
//!
//! - `cost[0][j]` is `j` adds.
//! - `cost[1][0]` is one single delete (10).
//! - `cost[i][0]` for `i ≥ 2` is one block delete spanning all `i` lines (15).
//!
//! A span-1 block delete (15) never beats a single delete (10), so row 1 of
//! column 0 is simply the cheapest span-1 delete.
//!
//! # Complexity
//!
//! - Time: O(N·M)
//! - Space: O(N·M) for [`compute_tables`], O(N) for [`patch_cost`]

use rustc_hash::FxHashMap;
use tracing::debug;

use super::cost::{add_cost, Cost, BLOCK_DELETE_COST, DELETE_COST};
use super::table::Table;

// =============================================================================
// Public Types
// =============================================================================

/// Operation that realizes the minimum of a cost-table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice {
    /// Emit target line `j`, keep `i`
    Add,
    /// Replace original line `i` with target line `j`
    Substitute,
    /// Original line `i` already equals target line `j`
    Identity,
    /// Delete original line `i`
    SingleDelete,
    /// Delete the `count` original lines ending at `i`
    BlockDelete { count: usize },
}

impl Choice {
    /// Check if this choice consumes an original line without emitting text
    pub fn is_delete(&self) -> bool {
        matches!(self, Choice::SingleDelete | Choice::BlockDelete { .. })
    }
}

/// Minimum transformation cost for every prefix pair.
pub type CostTable = Table<Cost>;

/// Chosen operation for every prefix pair; `(0, 0)` has none.
pub type ChoiceTable = Table<Option<Choice>>;

/// Filled cost and choice tables for one `(original, target)` pair.
#[derive(Debug, Clone)]
#[must_use]
pub struct Tables {
    /// `costs[(i, j)]`: cheapest way to turn `original[..i]` into `target[..j]`
    pub costs: CostTable,
    /// `choices[(i, j)]`: operation realizing `costs[(i, j)]`
    pub choices: ChoiceTable,
}

impl Tables {
    /// Number of original lines (N).
    pub fn original_len(&self) -> usize {
        self.costs.rows() - 1
    }

    /// Number of target lines (M).
    pub fn target_len(&self) -> usize {
        self.costs.cols() - 1
    }

    /// Total patch cost, `cost[N][M]`.
    pub fn total_cost(&self) -> Cost {
        self.costs[(self.original_len(), self.target_len())]
    }
}

// =============================================================================
// Main API
// =============================================================================

/// Fill the cost and choice tables for `original` → `target`.
pub fn compute_tables<A, B>(original: &[A], target: &[B]) -> Tables
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let n = original.len();
    let m = target.len();
    debug!(original = n, target = m, "filling cost table");

    let (old_ids, new_ids) = intern(original, target);
    let add: Vec<Cost> = target.iter().map(|line| add_cost(line.as_ref())).collect();

    let mut costs: CostTable = Table::filled(n + 1, m + 1, 0);
    let mut choices: ChoiceTable = Table::filled(n + 1, m + 1, None);

    // Column 0: delete everything seen so far
    for i in 1..=n {
        let (cost, choice) = delete_prefix(i);
        costs[(i, 0)] = cost;
        choices[(i, 0)] = choice;
    }

    // Row 0: add everything seen so far
    for j in 1..=m {
        costs[(0, j)] = costs[(0, j - 1)] + add[j - 1];
        choices[(0, j)] = Some(Choice::Add);
    }

    for j in 1..=m {
        let mut block = RunningMin::start(costs[(0, j)]);

        for i in 1..=n {
            let (cost, choice) = cheapest(
                Candidates {
                    left: costs[(i, j - 1)],
                    diag: costs[(i - 1, j - 1)],
                    up: costs[(i - 1, j)],
                    add: add[j - 1],
                    same: old_ids[i - 1] == new_ids[j - 1],
                },
                block,
                i,
            );
            costs[(i, j)] = cost;
            choices[(i, j)] = Some(choice);
            block.offer(i, cost);
        }
    }

    let tables = Tables { costs, choices };
    debug!(total = tables.total_cost(), "cost table filled");
    tables
}

/// Total patch cost only, keeping two columns instead of the full tables.
///
/// Always equal to `compute_tables(original, target).total_cost()`.
pub fn patch_cost<A, B>(original: &[A], target: &[B]) -> Cost
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let n = original.len();
    let (old_ids, new_ids) = intern(original, target);

    let mut prev: Vec<Cost> = (0..=n).map(|i| delete_prefix(i).0).collect();
    let mut cur = vec![0; n + 1];

    for (j, line) in target.iter().enumerate() {
        let add = add_cost(line.as_ref());
        cur[0] = prev[0] + add;
        let mut block = RunningMin::start(cur[0]);

        for i in 1..=n {
            let (cost, _) = cheapest(
                Candidates {
                    left: prev[i],
                    diag: prev[i - 1],
                    up: cur[i - 1],
                    add,
                    same: old_ids[i - 1] == new_ids[j],
                },
                block,
                i,
            );
            cur[i] = cost;
            block.offer(i, cost);
        }

        std::mem::swap(&mut prev, &mut cur);
    }

    prev[n]
}

// =============================================================================
// Recurrence
// =============================================================================

/// Neighbouring costs feeding one interior cell.
#[derive(Debug, Clone, Copy)]
struct Candidates {
    /// `cost[i][j-1]`
    left: Cost,
    /// `cost[i-1][j-1]`
    diag: Cost,
    /// `cost[i-1][j]`
    up: Cost,
    /// Add/substitute cost of target line `j`
    add: Cost,
    /// `original[i] == target[j]`
    same: bool,
}

/// Cheapest predecessor row seen so far in the current column.
#[derive(Debug, Clone, Copy)]
struct RunningMin {
    cost: Cost,
    row: usize,
}

impl RunningMin {
    fn start(cost: Cost) -> Self {
        Self { cost, row: 0 }
    }

    /// Strict comparison keeps the earliest row on ties, i.e. the longest block.
    #[inline]
    fn offer(&mut self, row: usize, cost: Cost) {
        if cost < self.cost {
            self.cost = cost;
            self.row = row;
        }
    }
}

/// Pick the cheapest operation for cell `(i, j)`.
///
/// Candidates are scanned in precedence order and only a strictly cheaper one
/// replaces the current best.
#[inline]
fn cheapest(c: Candidates, block: RunningMin, i: usize) -> (Cost, Choice) {
    let (sub, diagonal) = if c.same {
        (0, Choice::Identity)
    } else {
        (c.add, Choice::Substitute)
    };

    let ordered = [
        (c.left + c.add, Choice::Add),
        (c.diag + sub, diagonal),
        (c.up + DELETE_COST, Choice::SingleDelete),
        (
            block.cost + BLOCK_DELETE_COST,
            Choice::BlockDelete { count: i - block.row },
        ),
    ];

    let mut best = ordered[0];
    for candidate in &ordered[1..] {
        if candidate.0 < best.0 {
            best = *candidate;
        }
    }
    best
}

/// Cost and choice for turning the first `i` original lines into nothing.
fn delete_prefix(i: usize) -> (Cost, Option<Choice>) {
    match i {
        0 => (0, None),
        1 => (DELETE_COST, Some(Choice::SingleDelete)),
        count => (BLOCK_DELETE_COST, Some(Choice::BlockDelete { count })),
    }
}

/// Map every distinct line to a small id so cells compare integers.
fn intern<'a, A, B>(original: &'a [A], target: &'a [B]) -> (Vec<usize>, Vec<usize>)
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let mut ids: FxHashMap<&'a str, usize> = FxHashMap::default();
    let mut id_of = |line: &'a str| -> usize {
        let next = ids.len();
        *ids.entry(line).or_insert(next)
    };

    let old_ids = original.iter().map(|line| id_of(line.as_ref())).collect();
    let new_ids = target.iter().map(|line| id_of(line.as_ref())).collect();
    (old_ids, new_ids)
}

// =============================================================================
// Tests
// =============================================================================
