//! Audit table model
//!
//! This module defines:
//! - `AuditColumnType`: semantic column kinds and the runtime-type mapping
//! - `AuditTableColumn`: one column of a derived audit table
//! - `AuditTable`: the derived table, built once per entity and immutable

use serde::{Deserialize, Serialize};

use crate::error::AuditError;
use crate::metadata::RuntimeType;

/// Semantic column kind of an audit table column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditColumnType {
    Text,
    DateTime,
    Numeric,
    Boolean,
    Guid,
}

impl AuditColumnType {
    pub fn as_str(self) -> &'static str {
        match self {
            AuditColumnType::Text => "Text",
            AuditColumnType::DateTime => "DateTime",
            AuditColumnType::Numeric => "Numeric",
            AuditColumnType::Boolean => "Boolean",
            AuditColumnType::Guid => "Guid",
        }
    }

    /// Map a property's runtime type to its audit column type.
    ///
    /// Total over the supported set; anything else is fatal at model-build
    /// time, since an unmapped key column would corrupt the generated schema.
    pub fn from_runtime(runtime: &RuntimeType) -> Result<Self, AuditError> {
        match runtime {
            RuntimeType::SmallInteger
            | RuntimeType::Integer
            | RuntimeType::BigInteger
            | RuntimeType::Float
            | RuntimeType::Double
            | RuntimeType::Decimal => Ok(AuditColumnType::Numeric),
            RuntimeType::Text => Ok(AuditColumnType::Text),
            RuntimeType::DateTime => Ok(AuditColumnType::DateTime),
            RuntimeType::Boolean => Ok(AuditColumnType::Boolean),
            RuntimeType::Uuid => Ok(AuditColumnType::Guid),
            other => Err(AuditError::UnsupportedType(other.to_string())),
        }
    }
}

impl std::fmt::Display for AuditColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AuditColumnType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Text" => Ok(AuditColumnType::Text),
            "DateTime" => Ok(AuditColumnType::DateTime),
            "Numeric" => Ok(AuditColumnType::Numeric),
            "Boolean" => Ok(AuditColumnType::Boolean),
            "Guid" => Ok(AuditColumnType::Guid),
            _ => Err(format!("Invalid audit column type: {}", s)),
        }
    }
}

/// One column of a derived audit table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTableColumn {
    pub name: String,
    pub column_type: AuditColumnType,
    pub nullable: bool,
    pub is_key: bool,
}

impl AuditTableColumn {
    pub fn new(
        name: impl Into<String>,
        column_type: AuditColumnType,
        nullable: bool,
        is_key: bool,
    ) -> Self {
        Self {
            name: name.into(),
            column_type,
            nullable,
            is_key,
        }
    }
}

/// A derived audit table: the key column followed by the fixed audit columns
///
/// The column order is a contract: SQL generation assumes positional
/// correspondence between this list and the INSERT column list it emits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTable {
    pub name: String,
    pub columns: Vec<AuditTableColumn>,
}

impl AuditTable {
    pub fn new(name: impl Into<String>, columns: Vec<AuditTableColumn>) -> Self {
        Self {
            name: name.into(),
            columns,
        }
    }

    /// The single key column. Every table built by the factory has exactly
    /// one, in the first position.
    pub fn key_column(&self) -> Option<&AuditTableColumn> {
        self.columns.iter().find(|c| c.is_key)
    }
}
