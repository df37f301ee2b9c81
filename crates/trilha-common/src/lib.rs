//! Trilha Common - Audit table model and schema derivation
//!
//! This crate provides the dialect-independent core of Trilha:
//! - The audit table model (`AuditTable`, `AuditTableColumn`, `AuditColumnType`)
//! - Schema derivation from an entity descriptor (`create_audit_table`)
//! - Per-entity audit options and key selection
//! - Migration operation values consumed by the dialect crates
//! - The command sink abstraction generated SQL is written to

pub mod annotation;
pub mod error;
pub mod factory;
pub mod key;
pub mod metadata;
pub mod model;
pub mod operation;
pub mod options;
pub mod sink;

// Re-exports for convenience
pub use annotation::AUDIT_TABLE_ANNOTATION;
pub use error::AuditError;
pub use factory::create_audit_table;
pub use key::resolve_key;
pub use metadata::{EntityMetadata, PropertyMetadata, RuntimeType};
pub use model::{AuditColumnType, AuditTable, AuditTableColumn};
pub use operation::{CreateAuditTriggerOperation, DropAuditTriggerOperation, StatementKind};
pub use options::{AuditOptions, KeySelector};
pub use sink::{CommandBuffer, CommandSink, SqlCommand};

/// Suffix appended to the audited table name when no explicit audit table
/// name is configured
pub const AUDIT_TABLE_NAME_SUFFIX: &str = "_Audit";

/// Column names shared by every derived audit table
///
/// Downstream SQL generation relies on these names and on the column order
/// fixed by [`factory::create_audit_table`]; renaming one is a breaking
/// change to persisted migration history.
pub mod columns {
    pub const OLD_DATA: &str = "OldData";
    pub const NEW_DATA: &str = "NewData";
    pub const OPERATION_TYPE: &str = "OperationType";
    pub const USER: &str = "User";
    pub const TIMESTAMP: &str = "Timestamp";
}
