//! Per-entity audit options
//!
//! Options are resolved eagerly at model-build time; anything malformed is
//! rejected before any schema or SQL is derived.

use crate::error::AuditError;

/// Selector naming the property that uniquely identifies an audited row,
/// used when the entity's declared primary key cannot be inferred (absent or
/// composite) or should be overridden.
///
/// The accepted grammar is closed: a single property identifier. Member
/// paths (`Order.Id`), projections (`Id, Reference`) and anything else fail
/// at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySelector {
    property: String,
}

impl KeySelector {
    /// Parse a selector expression into a validated single-property selector.
    pub fn parse(expr: &str) -> Result<Self, AuditError> {
        let expr = expr.trim();
        let single_identifier = !expr.is_empty()
            && expr.chars().all(|c| c.is_alphanumeric() || c == '_')
            && !expr.starts_with(|c: char| c.is_ascii_digit());
        if !single_identifier {
            return Err(AuditError::Configuration(format!(
                "key selector must reference exactly one property, got '{}'",
                expr
            )));
        }

        Ok(Self {
            property: expr.to_string(),
        })
    }

    pub fn property(&self) -> &str {
        &self.property
    }
}

/// Options controlling how an entity's audit table is derived
#[derive(Debug, Clone, Default)]
pub struct AuditOptions {
    /// Explicit audit table name. When absent (or empty) the audited table
    /// name plus the fixed suffix is used.
    pub audit_table_name: Option<String>,
    /// Explicit key selector overriding primary-key inference.
    pub key_selector: Option<KeySelector>,
}

impl AuditOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_audit_table_name(mut self, name: impl Into<String>) -> Self {
        self.audit_table_name = Some(name.into());
        self
    }

    pub fn with_key_selector(mut self, selector: KeySelector) -> Self {
        self.key_selector = Some(selector);
        self
    }
}
