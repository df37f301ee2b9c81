//! Command sink abstraction for generated SQL
//!
//! Generators write ordered text lines into a caller-owned sink and mark the
//! end of each executable unit. SQL Server requires a trigger body to be
//! submitted as a single batch, so the boundary is explicit rather than
//! inferred from the text.

/// Append-only destination for generated SQL text
pub trait CommandSink {
    /// Append one line to the command being accumulated.
    fn append_line(&mut self, line: &str);

    /// Terminate the accumulated lines as one executable command.
    fn end_command(&mut self);
}

/// One executable SQL command, as an ordered sequence of lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SqlCommand {
    lines: Vec<String>,
}

impl SqlCommand {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The command text, lines joined by `\n`.
    pub fn sql(&self) -> String {
        self.lines.join("\n")
    }
}

/// In-memory [`CommandSink`] collecting completed commands in order
#[derive(Debug, Default)]
pub struct CommandBuffer {
    pending: Vec<String>,
    commands: Vec<SqlCommand>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands completed so far, in emission order.
    pub fn commands(&self) -> &[SqlCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<SqlCommand> {
        self.commands
    }
}

impl CommandSink for CommandBuffer {
    fn append_line(&mut self, line: &str) {
        self.pending.push(line.to_string());
    }

    fn end_command(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let lines = std::mem::take(&mut self.pending);
        self.commands.push(SqlCommand { lines });
    }
}
