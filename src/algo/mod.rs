//! Algorithm implementations for patch computation.
//!
//! - `cost`: the fixed cost model
//! - `table`: explicitly-sized DP grid
//! - `engine`: cost/choice table fill with the running block-delete minimum
//! - `script`: backward reconstruction of the edit script

mod cost;
mod engine;
mod script;
mod table;

pub use cost::{
    add_cost, substitute_cost, Cost, BLOCK_DELETE_COST, DELETE_COST, RECORD_COST,
    TERMINATOR_COST,
};
pub use engine::{compute_tables, patch_cost, Choice, ChoiceTable, CostTable, Tables};
pub use script::reconstruct;
pub use table::Table;
