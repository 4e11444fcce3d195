//! Prelude module for common imports.
//!
//! ```
//! use compute_patch::prelude::*;
//! ```

// Algorithms
pub use crate::algo::{
    compute_tables, patch_cost, reconstruct, Choice, ChoiceTable, Cost, CostTable, Table, Tables,
};

// Patch types
pub use crate::patch::{compute_patch, Patch, PatchRecord, PatchStats};

// Render
pub use crate::render::{render_patch, render_records, write_patch, RenderConfig};

// Parse / apply
pub use crate::apply::apply_patch;
pub use crate::parse::{parse_patch, ParsedPatch};

// Line source
pub use crate::lines::{read_lines, split_lines};

// Batch
pub use crate::batch::diff_batch;

// Error
pub use crate::error::{PatchError, PatchResult};
