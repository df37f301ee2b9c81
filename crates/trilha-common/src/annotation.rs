//! Audit table annotation codec
//!
//! A derived [`AuditTable`] is persisted on the host model as a JSON
//! annotation, so migration tooling can compare the declared audit schema
//! against what a previous model snapshot recorded and decide whether the
//! table needs creating or rebuilding.

use crate::error::AuditError;
use crate::model::AuditTable;

/// Annotation key under which the derived audit table is stored.
pub const AUDIT_TABLE_ANNOTATION: &str = "trilha:AuditTable";

/// Encode an audit table into its annotation payload.
pub fn encode(table: &AuditTable) -> Result<String, AuditError> {
    serde_json::to_string(table).map_err(|e| AuditError::InvalidAnnotation(e.to_string()))
}

/// Decode an annotation payload back into an audit table.
pub fn decode(payload: &str) -> Result<AuditTable, AuditError> {
    serde_json::from_str(payload).map_err(|e| AuditError::InvalidAnnotation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AuditColumnType, AuditTableColumn};

    #[test]
    fn test_round_trip_preserves_column_order() {
        let table = AuditTable::new(
            "Orders_Audit",
            vec![
                AuditTableColumn::new("Id", AuditColumnType::Numeric, false, true),
                AuditTableColumn::new("OldData", AuditColumnType::Text, true, false),
                AuditTableColumn::new("NewData", AuditColumnType::Text, true, false),
                AuditTableColumn::new("OperationType", AuditColumnType::Text, false, false),
                AuditTableColumn::new("User", AuditColumnType::Text, false, false),
                AuditTableColumn::new("Timestamp", AuditColumnType::DateTime, false, false),
            ],
        );

        let decoded = decode(&encode(&table).unwrap()).unwrap();
        assert_eq!(decoded, table);
    }

    #[test]
    fn test_decode_rejects_malformed_payload() {
        assert!(matches!(
            decode("{\"name\": \"Orders_Audit\""),
            Err(AuditError::InvalidAnnotation(_))
        ));
    }
}
