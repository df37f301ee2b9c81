//! Audit table derivation
//!
//! Builds the [`AuditTable`] descriptor for an audited entity: the resolved
//! key column followed by the fixed audit columns. Pure and deterministic;
//! the same inputs always yield a byte-identical table.

use tracing::debug;

use crate::error::AuditError;
use crate::metadata::EntityMetadata;
use crate::model::{AuditColumnType, AuditTable, AuditTableColumn};
use crate::options::AuditOptions;
use crate::{AUDIT_TABLE_NAME_SUFFIX, columns, key};

/// Derive the audit table for an entity.
///
/// Column order is fixed as `[key, OldData, NewData, OperationType, User,
/// Timestamp]` and must never be reordered: trigger generation pairs this
/// layout positionally with the INSERT column list it emits.
pub fn create_audit_table(
    entity: &EntityMetadata,
    options: &AuditOptions,
) -> Result<AuditTable, AuditError> {
    let (key_name, key_type) = key::resolve_key(entity, options.key_selector.as_ref())?;

    let mut table_columns = Vec::with_capacity(6);
    table_columns.push(AuditTableColumn::new(key_name, key_type, false, true));
    table_columns.extend(default_columns());

    let name = match options.audit_table_name.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => format!("{}{}", entity.table_name, AUDIT_TABLE_NAME_SUFFIX),
    };

    debug!(table = %name, audited = %entity.table_name, "derived audit table schema");

    Ok(AuditTable::new(name, table_columns))
}

fn default_columns() -> [AuditTableColumn; 5] {
    [
        AuditTableColumn::new(columns::OLD_DATA, AuditColumnType::Text, true, false),
        AuditTableColumn::new(columns::NEW_DATA, AuditColumnType::Text, true, false),
        AuditTableColumn::new(columns::OPERATION_TYPE, AuditColumnType::Text, false, false),
        AuditTableColumn::new(columns::USER, AuditColumnType::Text, false, false),
        AuditTableColumn::new(columns::TIMESTAMP, AuditColumnType::DateTime, false, false),
    ]
}
