//! Patch Application
//!
//! Replays an edit script over the original lines. Positions in records always
//! refer to the original numbering, so records must arrive in non-decreasing
//! original position; original lines between records are copied unchanged.

use std::ops::Range;

use crate::error::{PatchError, PatchResult};
use crate::patch::PatchRecord;

/// Walk position over the original and the produced target.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cursor {
    /// Original lines consumed so far
    consumed: usize,
    /// Target lines produced so far
    produced: usize,
    /// Number of original lines
    len: usize,
}

impl Cursor {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            consumed: 0,
            produced: 0,
            len,
        }
    }

    /// Cursor over an original of unknown length.
    pub(crate) fn unbounded() -> Self {
        Self::new(usize::MAX)
    }

    /// Target lines produced so far.
    pub(crate) fn produced(&self) -> usize {
        self.produced
    }

    /// Advance over `record`.
    ///
    /// Returns the 0-based range of original lines kept unchanged before it.
    pub(crate) fn step(&mut self, record: &PatchRecord) -> PatchResult<Range<usize>> {
        let (line, anchor) = match record {
            PatchRecord::Add { after, .. } => (*after, Some(*after)),
            PatchRecord::Substitute { line, .. }
            | PatchRecord::Identity { line }
            | PatchRecord::Delete { line } => (*line, line.checked_sub(1)),
            PatchRecord::BlockDelete { start, .. } => (*start, start.checked_sub(1)),
        };

        let anchor = anchor.ok_or(PatchError::LineOutOfRange {
            line,
            len: self.len,
        })?;
        if anchor < self.consumed {
            return Err(PatchError::OutOfOrder {
                line,
                cursor: self.consumed,
            });
        }

        let end = anchor
            .checked_add(record.consumed())
            .filter(|&end| end <= self.len)
            .ok_or(PatchError::LineOutOfRange {
                line: anchor.saturating_add(record.consumed()),
                len: self.len,
            })?;

        let kept = self.consumed..anchor;
        self.produced += kept.len();
        self.consumed = end;
        if !record.is_delete() {
            self.produced += 1;
        }
        Ok(kept)
    }

    /// Range of original lines left after the last record.
    pub(crate) fn rest(&self) -> Range<usize> {
        self.consumed..self.len
    }
}

/// Apply `records` to `original`, producing the target lines.
///
/// Identity records are optional: omitted ones are implied by the gaps
/// between visible records, as in a parsed patch.
pub fn apply_patch<S: AsRef<str>>(
    original: &[S],
    records: &[PatchRecord],
) -> PatchResult<Vec<String>> {
    let mut cursor = Cursor::new(original.len());
    let mut output = Vec::with_capacity(original.len());
    let copy = |range: Range<usize>, output: &mut Vec<String>| {
        output.extend(original[range].iter().map(|line| line.as_ref().to_owned()));
    };

    for record in records {
        let kept = cursor.step(record)?;
        copy(kept, &mut output);

        match record {
            PatchRecord::Add { text, .. } | PatchRecord::Substitute { text, .. } => {
                output.push(text.to_string());
            }
            PatchRecord::Identity { line } => copy(line - 1..*line, &mut output),
            PatchRecord::Delete { .. } | PatchRecord::BlockDelete { .. } => {}
        }
    }

    copy(cursor.rest(), &mut output);
    Ok(output)
}
