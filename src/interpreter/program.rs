use tracing::instrument;

use crate::{
    ast::Statement,
    error::{Error, SyntaxError},
    interpreter::{
        executor::core::{Executor, Report},
        segmenter::segment,
        store::Store,
    },
};

/// A segmented Bare Bones program.
///
/// Parsing only checks line structure and decodes statements; every other
/// error is raised by [`Program::execute`] when the offending statement is
/// reached, so a program can be parsed successfully and still fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    statements: Vec<Statement>,
}

impl Program {
    /// Segments `source` into a program.
    ///
    /// # Errors
    /// Returns a [`SyntaxError`] for a line without a terminating `;` or for
    /// an empty statement.
    pub fn parse(source: &str) -> Result<Self, SyntaxError> {
        Ok(Self { statements: segment(source)? })
    }

    /// The statements of the program in source order.
    #[must_use]
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Runs the program against `store`.
    ///
    /// The store is not reset first, so variables already present are
    /// visible to the program.
    ///
    /// # Errors
    /// Returns the first error execution reaches.
    #[instrument(level = "debug", skip_all, fields(statements = self.statements.len()))]
    pub fn execute(&self, store: &mut Store) -> Result<Report, Error> {
        Executor::new(&self.statements, store).run()
    }

    /// Runs the program on a fresh store and returns it with the run's
    /// counters.
    ///
    /// # Errors
    /// Returns the first error execution reaches.
    pub fn run(&self) -> Result<(Store, Report), Error> {
        let mut store = Store::new();
        let report = self.execute(&mut store)?;
        Ok((store, report))
    }
}
