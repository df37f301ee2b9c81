//! Error types for Trilha
//!
//! All failures are raised at model-build or generation time, before any SQL
//! text reaches a command sink. None of them are retryable: the inputs are
//! immutable descriptors, so a retry would reproduce the same failure.

/// Audit schema and SQL generation errors
#[derive(thiserror::Error, Debug)]
pub enum AuditError {
    /// Ambiguous or missing key configuration for an audited entity.
    /// Raised at model-build time and aborts setup.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A property's runtime type has no audit column mapping.
    #[error("unsupported property type: {0}")]
    UnsupportedType(String),

    /// A template placeholder had no supplied value. Indicates a broken
    /// contract between the operation value and the trigger template.
    #[error("template error: no value supplied for placeholder '{0}'")]
    Template(String),

    /// A persisted audit table annotation could not be decoded.
    #[error("invalid audit table annotation: {0}")]
    InvalidAnnotation(String),
}
