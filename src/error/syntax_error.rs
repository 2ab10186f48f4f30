#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors caused by malformed program shape.
pub enum SyntaxError {
    /// A physical line does not end with `;`.
    #[error("Error on line {line}: Expected ';' at the end of the line (`{source_line}`).")]
    MissingTerminator {
        /// The source line where the error occurred.
        line:        usize,
        /// The trimmed source line.
        source_line: String,
    },
    /// Two semicolons with nothing but whitespace between them.
    #[error("Error on line {line}: Redundant ';' (`{source_line}`).")]
    EmptyStatement {
        /// The source line where the error occurred.
        line:        usize,
        /// The trimmed source line.
        source_line: String,
    },
    /// An operation that takes a variable was written without one.
    #[error("Error on line {line}: Expected an argument after '{operation}' (`{source_line}`).")]
    MissingArgument {
        /// The operation keyword.
        operation:   String,
        /// The source line where the error occurred.
        line:        usize,
        /// The trimmed source line.
        source_line: String,
    },
    /// `clear`, `incr` or `decr` was given more than one argument.
    #[error("Error on line {line}: Expected one argument after '{operation}', got {found} (`{source_line}`).")]
    TooManyArguments {
        /// The operation keyword.
        operation:   String,
        /// The number of arguments supplied.
        found:       usize,
        /// The source line where the error occurred.
        line:        usize,
        /// The trimmed source line.
        source_line: String,
    },
    /// A `while` header that is not `while <var> not <target> do`.
    #[error("Error on line {line}: Illegal while loop syntax, expected `while <var> not <target> do` (`{source_line}`).")]
    IllegalWhile {
        /// The source line where the error occurred.
        line:        usize,
        /// The trimmed source line.
        source_line: String,
    },
    /// The program ended before the `end` closing a `while`.
    #[error("Error on line {line}: Missing 'end' for the while loop (`{source_line}`).")]
    MissingWhileEnd {
        /// The line of the unterminated `while`.
        line:        usize,
        /// The trimmed source line of the `while`.
        source_line: String,
    },
    /// An `end` with no open `while`.
    #[error("Error on line {line}: Redundant loop end (`{source_line}`).")]
    RedundantEnd {
        /// The source line where the error occurred.
        line:        usize,
        /// The trimmed source line.
        source_line: String,
    },
}

impl SyntaxError {
    /// Returns the 1-based source line of the error.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::MissingTerminator { line, .. }
            | Self::EmptyStatement { line, .. }
            | Self::MissingArgument { line, .. }
            | Self::TooManyArguments { line, .. }
            | Self::IllegalWhile { line, .. }
            | Self::MissingWhileEnd { line, .. }
            | Self::RedundantEnd { line, .. } => *line,
        }
    }
}
