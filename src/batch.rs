//! Batch diffing of independent pairs.
//!
//! Each pair is one sequential table fill. With the `parallel` feature the
//! pairs are spread over the rayon pool; without it they run in order.

use tracing::debug;

use crate::error::PatchResult;
use crate::patch::{compute_patch, Patch};

/// One `(original, target)` input pair.
pub type LinePair = (Vec<String>, Vec<String>);

/// Compute a patch for every pair, in input order.
pub fn diff_batch(pairs: &[LinePair]) -> Vec<PatchResult<Patch>> {
    debug!(pairs = pairs.len(), "diffing batch");

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        pairs
            .par_iter()
            .map(|(original, target)| compute_patch(original, target))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        pairs
            .iter()
            .map(|(original, target)| compute_patch(original, target))
            .collect()
    }
}
