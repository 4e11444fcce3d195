//! Patch records and the top-level diff entry point.
//!
//! A [`Patch`] is the ordered edit script produced by the reconstructor plus
//! its total cost. Records are in application order (earliest first) and
//! every position refers to the *original* line numbering, 1-based.

use compact_str::CompactString;

use crate::algo::{compute_tables, reconstruct, Cost};
use crate::error::PatchResult;

// =============================================================================
// PatchRecord
// =============================================================================

/// One step of an edit script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchRecord {
    /// Insert `text` (target line `line`) after original line `after`
    Add {
        /// Original-line cursor at the time of the add (0 = before the first line)
        after: usize,
        /// 1-based target line index
        line: usize,
        text: CompactString,
    },
    /// Replace original line `line` with `text`
    Substitute { line: usize, text: CompactString },
    /// Original line `line` is kept unchanged; renders to nothing
    Identity { line: usize },
    /// Delete original line `line`
    Delete { line: usize },
    /// Delete `count` original lines starting at `start`
    BlockDelete { start: usize, count: usize },
}

impl PatchRecord {
    /// Check if this record produces output when rendered
    pub fn is_visible(&self) -> bool {
        !matches!(self, PatchRecord::Identity { .. })
    }

    /// Check if this record only removes original lines
    pub fn is_delete(&self) -> bool {
        matches!(self, PatchRecord::Delete { .. } | PatchRecord::BlockDelete { .. })
    }

    /// Text carried by an add or substitution
    pub fn text(&self) -> Option<&str> {
        match self {
            PatchRecord::Add { text, .. } | PatchRecord::Substitute { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Original lines this record consumes
    pub fn consumed(&self) -> usize {
        match self {
            PatchRecord::Add { .. } => 0,
            PatchRecord::Substitute { .. }
            | PatchRecord::Identity { .. }
            | PatchRecord::Delete { .. } => 1,
            PatchRecord::BlockDelete { count, .. } => *count,
        }
    }
}

// =============================================================================
// Patch
// =============================================================================

/// Ordered edit script with its total cost.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Patch {
    /// Records in application order
    pub records: Vec<PatchRecord>,
    /// `cost[N][M]` of the tables the script was read from
    pub cost: Cost,
}

impl Patch {
    /// Check if the patch changes anything
    pub fn is_identity(&self) -> bool {
        self.records.iter().all(|r| !r.is_visible())
    }

    /// Count records by kind.
    pub fn stats(&self) -> PatchStats {
        let mut stats = PatchStats::default();
        for record in &self.records {
            match record {
                PatchRecord::Add { .. } => stats.added += 1,
                PatchRecord::Substitute { .. } => stats.substituted += 1,
                PatchRecord::Identity { .. } => stats.kept += 1,
                PatchRecord::Delete { .. } => {
                    stats.deleted += 1;
                    stats.lines_deleted += 1;
                }
                PatchRecord::BlockDelete { count, .. } => {
                    stats.block_deleted += 1;
                    stats.lines_deleted += count;
                }
            }
        }
        stats
    }
}

/// Statistics about a patch
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PatchStats {
    /// Number of add records
    pub added: usize,
    /// Number of substitutions
    pub substituted: usize,
    /// Number of identity steps
    pub kept: usize,
    /// Number of single-line deletes
    pub deleted: usize,
    /// Number of block deletes
    pub block_deleted: usize,
    /// Original lines removed by single and block deletes together
    pub lines_deleted: usize,
}

impl PatchStats {
    /// Total number of visible records
    pub fn edit_count(&self) -> usize {
        self.added + self.substituted + self.deleted + self.block_deleted
    }
}

// =============================================================================
// Main API
// =============================================================================

/// Compute the minimum-cost patch turning `original` into `target`.
///
/// Only fails with [`PatchError::MalformedTable`](crate::PatchError::MalformedTable),
/// which signals an engine defect.
pub fn compute_patch<A, B>(original: &[A], target: &[B]) -> PatchResult<Patch>
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let tables = compute_tables(original, target);
    let records = reconstruct(&tables.choices, target)?;
    Ok(Patch {
        records,
        cost: tables.total_cost(),
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_inputs() {
        let patch = compute_patch(&["a", "b"], &["a", "b"]).unwrap();
        assert_eq!(patch.cost, 0);
        assert_eq!(
            patch.records,
            vec![
                PatchRecord::Identity { line: 1 },
                PatchRecord::Identity { line: 2 },
            ]
        );
        assert!(patch.is_identity());
    }

    #[test]
    fn test_single_line_deleted() {
        let patch = compute_patch(&["a"], &[] as &[&str]).unwrap();
        assert_eq!(patch.cost, 10);
        assert_eq!(patch.records, vec![PatchRecord::Delete { line: 1 }]);
    }

    #[test]
    fn test_all_lines_block_deleted() {
        let patch = compute_patch(&["a", "b", "c"], &[] as &[&str]).unwrap();
        assert_eq!(patch.cost, 15);
        assert_eq!(
            patch.records,
            vec![PatchRecord::BlockDelete { start: 1, count: 3 }]
        );
    }

    #[test]
    fn test_add_into_empty() {
        let patch = compute_patch(&[] as &[&str], &["x"]).unwrap();
        assert_eq!(patch.cost, 12);
        assert_eq!(
            patch.records,
            vec![PatchRecord::Add {
                after: 0,
                line: 1,
                text: "x".into()
            }]
        );
    }

    #[test]
    fn test_substitute_single_line() {
        let patch = compute_patch(&["a"], &["b"]).unwrap();
        assert_eq!(patch.cost, 12);
        assert_eq!(
            patch.records,
            vec![PatchRecord::Substitute {
                line: 1,
                text: "b".into()
            }]
        );
    }

    #[test]
    fn test_stats() {
        let patch = compute_patch(
            &["keep", "x", "x", "x", "y", "tail"],
            &["new", "keep", "tail", "end"],
        )
        .unwrap();
        let stats = patch.stats();
        assert_eq!(stats.kept, 2);
        assert_eq!(stats.added, 2);
        assert_eq!(stats.block_deleted, 1);
        assert_eq!(stats.lines_deleted, 4);
        assert_eq!(stats.edit_count(), 3);
    }

    #[test]
    fn test_record_helpers() {
        let add = PatchRecord::Add {
            after: 2,
            line: 3,
            text: "t".into(),
        };
        assert!(add.is_visible());
        assert_eq!(add.text(), Some("t"));
        assert_eq!(add.consumed(), 0);

        let keep = PatchRecord::Identity { line: 1 };
        assert!(!keep.is_visible());
        assert_eq!(keep.text(), None);
        assert_eq!(keep.consumed(), 1);

        let block = PatchRecord::BlockDelete { start: 4, count: 6 };
        assert_eq!(block.consumed(), 6);
    }
}
