//! Trilha MSSQL - SQL Server audit trigger generation
//!
//! This crate renders the SQL Server artifacts for Trilha's derived audit
//! schema:
//! - Per-operation row capture fragments (`RowCapture`)
//! - The closed placeholder template engine
//! - CREATE/DROP trigger SQL generators writing into a command sink
//! - The session-context statement used to surface the acting user
//!
//! The emitted trigger text becomes part of persisted migration history; its
//! shape is a versioned contract and must not change silently.

pub mod session;
pub mod template;
pub mod trigger;
pub mod variant;

// Re-exports for convenience
pub use session::{USER_CONTEXT_KEY, set_user_context_statement};
pub use template::{Placeholders, render};
pub use trigger::{TriggerSqlParameters, generate_create_trigger, generate_drop_trigger};
pub use variant::RowCapture;
