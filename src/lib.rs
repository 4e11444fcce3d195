//! compute-patch - Minimum-cost line patches
//!
//! ## Core Concepts
//!
//! **Weighted edit distance over lines**: the patch between two line sequences
//! is the cheapest script of adds, substitutions, single deletes and block
//! deletes. A block delete removes any run of consecutive lines for one flat
//! cost, so long deletions collapse into a single record.
//!
//! ## Modules
//! - `algo`: cost model, cost/choice tables, script reconstruction
//! - `patch`: patch records and [`compute_patch`]
//! - `render`: the line-oriented patch format
//! - `parse`: reading that format back
//! - `apply`: replaying records over the original
//! - `lines`: splitting inputs into lines
//! - `batch`: many independent pairs at once
//!
//! ## Usage
//!
//! ```
//! use compute_patch::{compute_patch, render_patch, RenderConfig};
//!
//! let patch = compute_patch(&["a", "b", "c"], &["a", "d"]).unwrap();
//! assert_eq!(render_patch(&patch, &RenderConfig::default()), "d 2\n= 3\nd\n");
//! assert_eq!(patch.cost, 22);
//! ```

/// Algorithms: cost model, table fill, reconstruction
pub mod algo;

/// Patch records and the diff entry point
pub mod patch;

/// Patch rendering
pub mod render;

/// Patch parsing
pub mod parse;

/// Patch application
pub mod apply;

/// Line splitting and file reading
pub mod lines;

/// Batch diffing
pub mod batch;

/// Error types
pub mod error;

/// Prelude for common imports
pub mod prelude;

// =============================================================================
// Re-exports
// =============================================================================

// Algorithms
pub use algo::{compute_tables, patch_cost, reconstruct, Choice, Cost, Tables};

// Patch types
pub use patch::{compute_patch, Patch, PatchRecord, PatchStats};

// Render / parse / apply
pub use apply::apply_patch;
pub use parse::{parse_patch, ParsedPatch};
pub use render::{render_patch, render_records, write_patch, RenderConfig};

// Line source
pub use lines::{decode_lines, read_lines, split_lines};

// Batch
pub use batch::{diff_batch, LinePair};

// Error types
pub use error::{PatchError, PatchResult};
