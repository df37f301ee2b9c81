//! Session user context
//!
//! Generated triggers read the acting user from `SESSION_CONTEXT(N'user')`.
//! The host is expected to run the statement built here on the connection
//! before the audited statement executes; the interception mechanism itself
//! lives outside this crate.

/// Session-context key the generated triggers read the acting user from.
pub const USER_CONTEXT_KEY: &str = "user";

/// Build the statement that stores the acting user in the session context.
pub fn set_user_context_statement(user: &str) -> String {
    format!(
        "EXEC sp_set_session_context N'{}', N'{}';",
        USER_CONTEXT_KEY,
        user.replace('\'', "''")
    )
}
