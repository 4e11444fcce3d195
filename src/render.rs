//! Patch Rendering
//!
//! Renders patch records to the line-oriented patch format:
//!
//! ```text
//! + 3        add the next line after original line 3
//! text
//! = 4        replace original line 4 with the next line
//! text
//! d 5        delete original line 5
//! D 6 2      delete 2 original lines starting at line 6
//! ```
//!
//! Identity steps render to nothing. Every line ends with `\n`.

use std::fmt;
use std::io;

use crate::error::PatchResult;
use crate::patch::{Patch, PatchRecord};

// =============================================================================
// RenderConfig
// =============================================================================

/// Prefix of the optional trailing summary line.
pub const COST_PREFIX: &str = "# cost ";

/// Configuration for patch rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderConfig {
    /// Whether to append `# cost {total}` after the records.
    pub emit_cost: bool,
}

impl RenderConfig {
    /// Records only.
    pub const PLAIN: Self = Self { emit_cost: false };

    /// Records followed by the total cost.
    pub const WITH_COST: Self = Self { emit_cost: true };

    /// Set whether the trailing cost line is written.
    pub fn with_cost(mut self, emit_cost: bool) -> Self {
        self.emit_cost = emit_cost;
        self
    }
}

// =============================================================================
// Record Rendering
// =============================================================================

impl fmt::Display for PatchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatchRecord::Add { after, text, .. } => writeln!(f, "+ {after}\n{text}"),
            PatchRecord::Substitute { line, text } => writeln!(f, "= {line}\n{text}"),
            PatchRecord::Identity { .. } => Ok(()),
            PatchRecord::Delete { line } => writeln!(f, "d {line}"),
            PatchRecord::BlockDelete { start, count } => writeln!(f, "D {start} {count}"),
        }
    }
}

// =============================================================================
// Patch Rendering
// =============================================================================

/// Render a patch to a string.
pub fn render_patch(patch: &Patch, config: &RenderConfig) -> String {
    let mut output = render_records(&patch.records);
    if config.emit_cost {
        output.push_str(COST_PREFIX);
        output.push_str(&patch.cost.to_string());
        output.push('\n');
    }
    output
}

/// Render records without a cost line.
pub fn render_records(records: &[PatchRecord]) -> String {
    let mut output = String::new();
    for record in records {
        output.push_str(&record.to_string());
    }
    output
}

/// Write a patch to any byte sink.
pub fn write_patch<W: io::Write>(
    out: &mut W,
    patch: &Patch,
    config: &RenderConfig,
) -> PatchResult<()> {
    for record in &patch.records {
        write!(out, "{record}")?;
    }
    if config.emit_cost {
        writeln!(out, "{COST_PREFIX}{}", patch.cost)?;
    }
    out.flush()?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch::compute_patch;

    #[test]
    fn test_render_each_record_kind() {
        let records = vec![
            PatchRecord::Add {
                after: 0,
                line: 1,
                text: "x".into(),
            },
            PatchRecord::Identity { line: 1 },
            PatchRecord::Substitute {
                line: 2,
                text: "y".into(),
            },
            PatchRecord::Delete { line: 3 },
            PatchRecord::BlockDelete { start: 4, count: 2 },
        ];
        assert_eq!(render_records(&records), "+ 0\nx\n= 2\ny\nd 3\nD 4 2\n");
    }

    #[test]
    fn test_identity_renders_nothing() {
        let patch = compute_patch(&["a", "b"], &["a", "b"]).unwrap();
        assert_eq!(render_patch(&patch, &RenderConfig::default()), "");
    }

    #[test]
    fn test_render_with_cost() {
        let patch = compute_patch(&["a"], &["b"]).unwrap();
        assert_eq!(render_patch(&patch, &RenderConfig::WITH_COST), "= 1\nb\n# cost 12\n");
        assert_eq!(
            render_patch(&patch, &RenderConfig::WITH_COST.with_cost(false)),
            "= 1\nb\n"
        );
    }

    #[test]
    fn test_empty_text_line() {
        let patch = compute_patch(&[] as &[&str], &[""]).unwrap();
        assert_eq!(patch.cost, 11);
        assert_eq!(render_patch(&patch, &RenderConfig::PLAIN), "+ 0\n\n");
    }

    #[test]
    fn test_write_patch_matches_render() {
        let patch = compute_patch(&["a", "b", "c", "d"], &["a", "e"]).unwrap();
        let mut out = Vec::new();
        write_patch(&mut out, &patch, &RenderConfig::WITH_COST).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            render_patch(&patch, &RenderConfig::WITH_COST)
        );
    }
}
