//! Per-operation row capture semantics
//!
//! Inside a SQL Server trigger the changed rows are exposed through the
//! pseudo-tables `Inserted` and `Deleted`. Which of them carries the row
//! identity, and which side of the before/after pair is a JSON snapshot
//! versus a null literal, depends only on the statement kind.

use trilha_common::StatementKind;

const NULL_LITERAL: &str = "null";
const DELETED_SNAPSHOT: &str = "(SELECT * FROM Deleted FOR JSON PATH, WITHOUT_ARRAY_WRAPPER)";
const INSERTED_SNAPSHOT: &str = "(SELECT * FROM Inserted FOR JSON PATH, WITHOUT_ARRAY_WRAPPER)";

/// Row-source relation and old/new capture SQL for one statement kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowCapture {
    /// Pseudo-table the changed row's key is read from.
    pub source_relation: &'static str,
    pub old_row_data: &'static str,
    pub new_row_data: &'static str,
}

impl RowCapture {
    /// The capture fragments for a statement kind. The mapping is closed and
    /// exhaustive over the sum type.
    pub fn for_kind(kind: StatementKind) -> Self {
        match kind {
            StatementKind::Insert => Self {
                source_relation: "Inserted",
                old_row_data: NULL_LITERAL,
                new_row_data: INSERTED_SNAPSHOT,
            },
            StatementKind::Update => Self {
                source_relation: "Inserted",
                old_row_data: DELETED_SNAPSHOT,
                new_row_data: INSERTED_SNAPSHOT,
            },
            StatementKind::Delete => Self {
                source_relation: "Deleted",
                old_row_data: DELETED_SNAPSHOT,
                new_row_data: NULL_LITERAL,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_capture() {
        let capture = RowCapture::for_kind(StatementKind::Insert);
        assert_eq!(capture.source_relation, "Inserted");
        assert_eq!(capture.old_row_data, "null");
        assert_eq!(
            capture.new_row_data,
            "(SELECT * FROM Inserted FOR JSON PATH, WITHOUT_ARRAY_WRAPPER)"
        );
    }

    #[test]
    fn test_update_capture() {
        let capture = RowCapture::for_kind(StatementKind::Update);
        assert_eq!(capture.source_relation, "Inserted");
        assert_eq!(
            capture.old_row_data,
            "(SELECT * FROM Deleted FOR JSON PATH, WITHOUT_ARRAY_WRAPPER)"
        );
        assert_eq!(
            capture.new_row_data,
            "(SELECT * FROM Inserted FOR JSON PATH, WITHOUT_ARRAY_WRAPPER)"
        );
    }

    #[test]
    fn test_delete_capture() {
        let capture = RowCapture::for_kind(StatementKind::Delete);
        assert_eq!(capture.source_relation, "Deleted");
        assert_eq!(
            capture.old_row_data,
            "(SELECT * FROM Deleted FOR JSON PATH, WITHOUT_ARRAY_WRAPPER)"
        );
        assert_eq!(capture.new_row_data, "null");
    }
}
