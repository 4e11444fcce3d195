//! Script Reconstructor
//!
//! Walks the choice table backward from `(N, M)` to `(0, 0)`, emitting one
//! [`PatchRecord`] per step. Records come out last-edit-first and are reversed
//! once at the end.

use tracing::trace;

use crate::error::{PatchError, PatchResult};
use crate::patch::PatchRecord;

use super::engine::{Choice, ChoiceTable};

/// Read the edit script out of a filled choice table.
///
/// `target` must be the sequence the table was computed against. A table that
/// cannot be walked back to the origin yields [`PatchError::MalformedTable`].
pub fn reconstruct<B: AsRef<str>>(
    choices: &ChoiceTable,
    target: &[B],
) -> PatchResult<Vec<PatchRecord>> {
    if choices.rows() == 0 || choices.cols() != target.len() + 1 {
        return Err(PatchError::malformed(
            choices.rows(),
            choices.cols(),
            "table shape does not match target",
        ));
    }

    let mut i = choices.rows() - 1;
    let mut j = target.len();
    let mut records = Vec::with_capacity(i + j);

    while i > 0 || j > 0 {
        let choice = choices[(i, j)]
            .ok_or_else(|| PatchError::malformed(i, j, "no choice recorded"))?;

        let record = match choice {
            Choice::Add => {
                if j == 0 {
                    return Err(PatchError::malformed(i, j, "add with no target line left"));
                }
                let record = PatchRecord::Add {
                    after: i,
                    line: j,
                    text: target[j - 1].as_ref().into(),
                };
                j -= 1;
                record
            }
            Choice::Substitute | Choice::Identity => {
                if i == 0 || j == 0 {
                    return Err(PatchError::malformed(i, j, "diagonal step off the table"));
                }
                let record = if choice == Choice::Identity {
                    PatchRecord::Identity { line: i }
                } else {
                    PatchRecord::Substitute {
                        line: i,
                        text: target[j - 1].as_ref().into(),
                    }
                };
                i -= 1;
                j -= 1;
                record
            }
            Choice::SingleDelete => {
                if i == 0 {
                    return Err(PatchError::malformed(i, j, "delete with no original line left"));
                }
                let record = PatchRecord::Delete { line: i };
                i -= 1;
                record
            }
            Choice::BlockDelete { count } => {
                if count == 0 || count > i {
                    return Err(PatchError::malformed(i, j, "block delete span out of range"));
                }
                let record = PatchRecord::BlockDelete {
                    start: i - count + 1,
                    count,
                };
                i -= count;
                record
            }
        };

        trace!(?record, "reconstructed step");
        records.push(record);
    }

    records.reverse();
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::{compute_tables, Table};

    fn script(original: &[&str], target: &[&str]) -> Vec<PatchRecord> {
        let tables = compute_tables(original, target);
        reconstruct(&tables.choices, target).unwrap()
    }

    #[test]
    fn test_empty_tables() {
        assert!(script(&[], &[]).is_empty());
    }

    #[test]
    fn test_forward_order() {
        let records = script(&["a", "b", "c"], &["a", "B", "c", "d"]);
        assert_eq!(
            records,
            vec![
                PatchRecord::Identity { line: 1 },
                PatchRecord::Substitute {
                    line: 2,
                    text: "B".into()
                },
                PatchRecord::Identity { line: 3 },
                PatchRecord::Add {
                    after: 3,
                    line: 4,
                    text: "d".into()
                },
            ]
        );
    }

    #[test]
    fn test_add_reports_original_cursor() {
        let records = script(&["a", "b"], &["a", "new", "b"]);
        assert_eq!(
            records[1],
            PatchRecord::Add {
                after: 1,
                line: 2,
                text: "new".into()
            }
        );
    }

    #[test]
    fn test_block_delete_start() {
        let records = script(&["a", "x", "y", "z", "b"], &["a", "b"]);
        assert_eq!(
            records,
            vec![
                PatchRecord::Identity { line: 1 },
                PatchRecord::BlockDelete { start: 2, count: 3 },
                PatchRecord::Identity { line: 5 },
            ]
        );
    }

    #[test]
    fn test_missing_choice_is_malformed() {
        let choices: ChoiceTable = Table::filled(2, 2, None);
        let err = reconstruct(&choices, &["t"]).unwrap_err();
        assert!(matches!(
            err,
            PatchError::MalformedTable { row: 1, col: 1, .. }
        ));
    }

    #[test]
    fn test_block_span_past_origin_is_malformed() {
        let mut choices: ChoiceTable = Table::filled(3, 1, None);
        choices[(2, 0)] = Some(Choice::BlockDelete { count: 5 });
        let err = reconstruct(&choices, &[] as &[&str]).unwrap_err();
        assert!(err.is_internal());
    }

    #[test]
    fn test_add_without_target_is_malformed() {
        let mut choices: ChoiceTable = Table::filled(2, 1, None);
        choices[(1, 0)] = Some(Choice::Add);
        let err = reconstruct(&choices, &[] as &[&str]).unwrap_err();
        assert!(matches!(
            err,
            PatchError::MalformedTable { row: 1, col: 0, .. }
        ));
    }

    #[test]
    fn test_shape_mismatch_is_malformed() {
        let tables = compute_tables(&["a"], &["b", "c"]);
        let err = reconstruct(&tables.choices, &["b"]).unwrap_err();
        assert!(err.is_internal());
    }
}
