//! The fixed cost model.
//!
//! | Operation | Cost |
//! |-----------|------|
//! | Add target line | `10 + len + 1` |
//! | Substitute with target line | `10 + len + 1` |
//! | Identity | `0` |
//! | Single delete | `10` |
//! | Block delete (any span) | `15` |
//!
//! `len` is the byte length of the target line; the trailing `+ 1` pays for
//! its line terminator.

/// Cost unit used by the tables.
pub type Cost = u64;

/// Fixed overhead of any record that carries a line of text.
pub const RECORD_COST: Cost = 10;

/// Cost of the line terminator written after carried text.
pub const TERMINATOR_COST: Cost = 1;

/// Cost of deleting a single original line.
pub const DELETE_COST: Cost = 10;

/// Flat cost of deleting a contiguous run of original lines.
pub const BLOCK_DELETE_COST: Cost = 15;

/// Cost of emitting `line` as an add (or a substitution).
#[inline]
pub fn add_cost(line: &str) -> Cost {
    RECORD_COST + line.len() as Cost + TERMINATOR_COST
}

/// Cost of turning an original line into a target line in place.
#[inline]
pub fn substitute_cost(original: &str, target: &str) -> Cost {
    if original == target { 0 } else { add_cost(target) }
}
