//! Patch Parsing
//!
//! Reads the rendered patch format back into records. Identity steps are not
//! visible in the text, so a parsed script holds only the visible records;
//! [`apply_patch`](crate::apply_patch) treats the gaps as kept lines.
//! The target index of each add is recovered from the cursor position.

use smallvec::SmallVec;

use crate::algo::Cost;
use crate::apply::Cursor;
use crate::error::{PatchError, PatchResult};
use crate::lines::split_lines;
use crate::patch::PatchRecord;
use crate::render::COST_PREFIX;

/// Records read from patch text, plus the cost line if present.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedPatch {
    /// Visible records in application order
    pub records: Vec<PatchRecord>,
    /// Value of the trailing `# cost` line
    pub cost: Option<Cost>,
}

/// Parse rendered patch text.
pub fn parse_patch(text: &str) -> PatchResult<ParsedPatch> {
    let lines = split_lines(text);
    let mut parsed = ParsedPatch::default();
    let mut cursor = Cursor::unbounded();
    let mut index = 0;

    while index < lines.len() {
        let line_no = index + 1;
        let header = lines[index];
        index += 1;

        if let Some(cost) = header.strip_prefix(COST_PREFIX) {
            if index != lines.len() {
                return Err(PatchError::parse(line_no, "cost line must be last"));
            }
            parsed.cost = Some(number(cost, line_no)?);
            break;
        }

        let fields: SmallVec<[&str; 3]> = header.split(' ').collect();
        let mut record = match fields.as_slice() {
            ["+", after] => PatchRecord::Add {
                after: number(after, line_no)?,
                line: 0,
                text: text_line(&lines, &mut index, line_no)?.into(),
            },
            ["=", line] => PatchRecord::Substitute {
                line: position(line, line_no)?,
                text: text_line(&lines, &mut index, line_no)?.into(),
            },
            ["d", line] => PatchRecord::Delete {
                line: position(line, line_no)?,
            },
            ["D", start, count] => PatchRecord::BlockDelete {
                start: position(start, line_no)?,
                count: position(count, line_no)?,
            },
            _ => {
                return Err(PatchError::parse(
                    line_no,
                    format!("unrecognized header {header:?}"),
                ));
            }
        };

        cursor.step(&record)?;
        if let PatchRecord::Add { line, .. } = &mut record {
            *line = cursor.produced();
        }
        parsed.records.push(record);
    }

    Ok(parsed)
}

fn number<N: std::str::FromStr>(field: &str, line_no: usize) -> PatchResult<N> {
    field
        .parse()
        .map_err(|_| PatchError::parse(line_no, format!("invalid number {field:?}")))
}

/// A 1-based position or count: zero is rejected.
fn position(field: &str, line_no: usize) -> PatchResult<usize> {
    match number(field, line_no)? {
        0 => Err(PatchError::parse(line_no, "positions and counts start at 1")),
        value => Ok(value),
    }
}

/// Take the text line following an add or substitute header.
fn text_line<'a>(lines: &[&'a str], index: &mut usize, line_no: usize) -> PatchResult<&'a str> {
    let text = lines
        .get(*index)
        .copied()
        .ok_or_else(|| PatchError::parse(line_no, "missing text line after header"))?;
    *index += 1;
    Ok(text)
}
