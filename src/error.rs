/// Syntax errors.
///
/// Defines the errors raised for malformed program shape: unterminated
/// lines, empty statements, wrong argument counts, malformed `while` clauses
/// and unbalanced loop ends. Most are detected while segmenting; the ones
/// tied to a single statement surface when execution reaches it.
pub mod syntax_error;
/// Runtime errors.
///
/// Contains the errors raised while executing well-shaped statements:
/// unknown operations, access to variables that were never cleared, and
/// operations that would leave the non-negative range.
pub mod runtime_error;

pub use runtime_error::RuntimeError;
pub use syntax_error::SyntaxError;

/// Any error that aborts a Bare Bones run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The program text is malformed.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// A statement could not be executed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Returns the 1-based source line the error originates from.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Syntax(e) => e.line(),
            Self::Runtime(e) => e.line(),
        }
    }
}
