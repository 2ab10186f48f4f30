#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur while executing statements.
pub enum RuntimeError {
    /// The leading word of a statement is not a Bare Bones operation.
    #[error("Error on line {line}: Undefined operation '{operation}' (`{source_line}`).")]
    UndefinedOperation {
        /// The unrecognized operation word.
        operation:   String,
        /// The source line where the error occurred.
        line:        usize,
        /// The trimmed source line.
        source_line: String,
    },
    /// Tried to read a variable that was never cleared.
    #[error("Error on line {line}: Access to undefined variable '{name}' (`{source_line}`).")]
    UndefinedVariable {
        /// The name of the variable.
        name:        String,
        /// The source line where the error occurred.
        line:        usize,
        /// The trimmed source line.
        source_line: String,
    },
    /// `decr` on a variable holding zero.
    #[error("Error on line {line}: Illegal operation `{statement};` would make '{name}' negative (`{source_line}`).")]
    IllegalOperation {
        /// The normalized statement text.
        statement:   String,
        /// The name of the variable.
        name:        String,
        /// The source line where the error occurred.
        line:        usize,
        /// The trimmed source line.
        source_line: String,
    },
    /// `incr` on a variable already at the largest representable value.
    #[error("Error on line {line}: Operation `{statement};` overflows '{name}' (`{source_line}`).")]
    Overflow {
        /// The normalized statement text.
        statement:   String,
        /// The name of the variable.
        name:        String,
        /// The source line where the error occurred.
        line:        usize,
        /// The trimmed source line.
        source_line: String,
    },
}

impl RuntimeError {
    /// Returns the 1-based source line of the error.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UndefinedOperation { line, .. }
            | Self::UndefinedVariable { line, .. }
            | Self::IllegalOperation { line, .. }
            | Self::Overflow { line, .. } => *line,
        }
    }
}
