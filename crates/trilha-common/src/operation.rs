//! Migration operation values consumed by the dialect SQL generators
//!
//! One `CreateAuditTriggerOperation` exists per (entity, statement kind)
//! pair, three per audited entity. Each is constructed by the host
//! migration pipeline, consumed exactly once, and carries no mutable state.

use serde::{Deserialize, Serialize};

/// Kind of data-modification statement a trigger fires for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatementKind {
    Insert,
    Update,
    Delete,
}

impl StatementKind {
    /// The upper-cased SQL keyword, used both in the trigger's FOR clause
    /// and as the OperationType literal recorded on each audit row.
    pub fn as_sql_keyword(self) -> &'static str {
        match self {
            StatementKind::Insert => "INSERT",
            StatementKind::Update => "UPDATE",
            StatementKind::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for StatementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_sql_keyword())
    }
}

impl std::str::FromStr for StatementKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INSERT" => Ok(StatementKind::Insert),
            "UPDATE" => Ok(StatementKind::Update),
            "DELETE" => Ok(StatementKind::Delete),
            _ => Err(format!("Invalid statement kind: {}", s)),
        }
    }
}

/// Instruction to create one audit trigger on an audited table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAuditTriggerOperation {
    pub trigger_name: String,
    pub audited_table_name: String,
    pub audit_table_name: String,
    /// Column of the audited table that identifies the changed row.
    pub key_column_name: String,
    pub kind: StatementKind,
}

impl CreateAuditTriggerOperation {
    pub fn new(
        trigger_name: impl Into<String>,
        audited_table_name: impl Into<String>,
        audit_table_name: impl Into<String>,
        key_column_name: impl Into<String>,
        kind: StatementKind,
    ) -> Self {
        Self {
            trigger_name: trigger_name.into(),
            audited_table_name: audited_table_name.into(),
            audit_table_name: audit_table_name.into(),
            key_column_name: key_column_name.into(),
            kind,
        }
    }
}

/// Instruction to remove one audit trigger, tolerating its absence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropAuditTriggerOperation {
    pub trigger_name: String,
}

impl DropAuditTriggerOperation {
    pub fn new(trigger_name: impl Into<String>) -> Self {
        Self {
            trigger_name: trigger_name.into(),
        }
    }
}
