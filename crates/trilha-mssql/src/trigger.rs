//! CREATE/DROP audit trigger SQL generation
//!
//! Each generator call is a stateless single pass from an operation value to
//! text in the caller's command sink. The rendered CREATE text is embedded
//! verbatim in persisted migration history, so the template below is a
//! versioned contract: column order and capture expressions must not drift.

use tracing::debug;
use trilha_common::{
    AuditError, CommandSink, CreateAuditTriggerOperation, DropAuditTriggerOperation, columns,
};

use crate::template::{self, Placeholders};
use crate::variant::RowCapture;

const CREATE_TRIGGER_SQL: &str = "\
CREATE TRIGGER {TriggerName} ON {AuditedTableName}
FOR {OperationType} AS
BEGIN
DECLARE @user varchar(255)
SELECT @user = CAST(SESSION_CONTEXT(N'user') AS varchar(255))
INSERT INTO {AuditTableName} ({KeyColumnName}, {OldDataColumnName}, {NewDataColumnName}, {OperationTypeColumnName}, {UserColumnName}, {TimestampColumnName})
VALUES (
  (SELECT {KeyColumnName} FROM {RowSource}),
  {OldRowData},
  {NewRowData},
  '{OperationType}', @user, GETUTCDATE()
);
END";

const DROP_TRIGGER_SQL: &str = "DROP TRIGGER IF EXISTS {TriggerName};";

/// Fully-populated value set for the trigger template
///
/// Constructed in one step from the operation immediately before rendering;
/// every field is required, so a missing value is a construction-time error
/// rather than a substitution miss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerSqlParameters {
    pub trigger_name: String,
    pub audited_table_name: String,
    pub audit_table_name: String,
    pub operation_type: String,
    pub key_column_name: String,
    pub row_source: String,
    pub old_row_data: String,
    pub new_row_data: String,
    pub old_data_column_name: String,
    pub new_data_column_name: String,
    pub operation_type_column_name: String,
    pub user_column_name: String,
    pub timestamp_column_name: String,
}

impl TriggerSqlParameters {
    pub fn from_operation(operation: &CreateAuditTriggerOperation) -> Self {
        let capture = RowCapture::for_kind(operation.kind);

        Self {
            trigger_name: operation.trigger_name.clone(),
            audited_table_name: operation.audited_table_name.clone(),
            audit_table_name: operation.audit_table_name.clone(),
            operation_type: operation.kind.as_sql_keyword().to_string(),
            key_column_name: operation.key_column_name.clone(),
            row_source: capture.source_relation.to_string(),
            old_row_data: capture.old_row_data.to_string(),
            new_row_data: capture.new_row_data.to_string(),
            old_data_column_name: columns::OLD_DATA.to_string(),
            new_data_column_name: columns::NEW_DATA.to_string(),
            operation_type_column_name: columns::OPERATION_TYPE.to_string(),
            user_column_name: columns::USER.to_string(),
            timestamp_column_name: columns::TIMESTAMP.to_string(),
        }
    }

    /// Lower into the template engine's mapping. The key set is the closed
    /// placeholder vocabulary of the trigger templates.
    pub fn into_placeholders(self) -> Placeholders {
        let mut values = Placeholders::new();
        values.insert("TriggerName".to_string(), self.trigger_name);
        values.insert("AuditedTableName".to_string(), self.audited_table_name);
        values.insert("AuditTableName".to_string(), self.audit_table_name);
        values.insert("OperationType".to_string(), self.operation_type);
        values.insert("KeyColumnName".to_string(), self.key_column_name);
        values.insert("RowSource".to_string(), self.row_source);
        values.insert("OldRowData".to_string(), self.old_row_data);
        values.insert("NewRowData".to_string(), self.new_row_data);
        values.insert("OldDataColumnName".to_string(), self.old_data_column_name);
        values.insert("NewDataColumnName".to_string(), self.new_data_column_name);
        values.insert(
            "OperationTypeColumnName".to_string(),
            self.operation_type_column_name,
        );
        values.insert("UserColumnName".to_string(), self.user_column_name);
        values.insert("TimestampColumnName".to_string(), self.timestamp_column_name);
        values
    }
}

/// Emit the CREATE TRIGGER batch for one (entity, statement kind) pair.
pub fn generate_create_trigger(
    operation: &CreateAuditTriggerOperation,
    sink: &mut dyn CommandSink,
) -> Result<(), AuditError> {
    let values = TriggerSqlParameters::from_operation(operation).into_placeholders();
    let lines = template::render(CREATE_TRIGGER_SQL, &values)?;

    for line in &lines {
        sink.append_line(line);
    }
    sink.end_command();

    debug!(
        trigger = %operation.trigger_name,
        table = %operation.audited_table_name,
        kind = %operation.kind,
        "generated audit trigger SQL"
    );
    Ok(())
}

/// Emit the guarded DROP TRIGGER statement. Dropping a trigger that does not
/// exist is a no-op, so replaying migrations against an out-of-sync database
/// cannot fail here.
pub fn generate_drop_trigger(
    operation: &DropAuditTriggerOperation,
    sink: &mut dyn CommandSink,
) -> Result<(), AuditError> {
    let mut values = Placeholders::new();
    values.insert("TriggerName".to_string(), operation.trigger_name.clone());
    let lines = template::render(DROP_TRIGGER_SQL, &values)?;

    for line in &lines {
        sink.append_line(line);
    }
    sink.end_command();

    debug!(trigger = %operation.trigger_name, "generated audit trigger drop SQL");
    Ok(())
}
