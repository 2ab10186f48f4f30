use std::ops::Range;

use tracing::trace;

use crate::{
    ast::{Instruction, Statement},
    error::Error,
    interpreter::{
        executor::utils::{
            malformed, negative, overflow, redundant_end, undefined_operation, undefined_variable,
        },
        store::{Store, Update},
    },
};

/// Result type used by the executor.
///
/// All execution functions return either a value of type `T` or the
/// [`Error`] that aborted the run.
pub type ExecResult<T> = Result<T, Error>;

/// Counters collected during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Report {
    /// Statements dispatched, counting every loop iteration separately.
    /// Closing `end`s are consumed by their `while` and are not counted.
    pub statements: u64,
    /// Loop body executions across all loops.
    pub iterations: u64,
}

/// Executes a segmented program against a variable store.
///
/// The statement slice is never modified. A block of the program is
/// described by an index range into it, so re-running a loop body is just a
/// second walk over the same range. The store is borrowed mutably for the
/// whole run and is shared by every nested loop.
///
/// ## Usage
///
/// ```
/// use barebones::interpreter::{executor::core::Executor, segmenter::segment, store::Store};
///
/// let statements = segment("clear a; incr a;").unwrap();
/// let mut store = Store::new();
///
/// let report = Executor::new(&statements, &mut store).run().unwrap();
/// assert_eq!(report.statements, 2);
/// assert_eq!(store.get("a"), Some(1));
/// ```
pub struct Executor<'a> {
    pub(crate) statements: &'a [Statement],
    pub(crate) store:      &'a mut Store,
    pub(crate) report:     Report,
}

impl<'a> Executor<'a> {
    /// Creates an executor over `statements` that mutates `store`.
    pub fn new(statements: &'a [Statement], store: &'a mut Store) -> Self {
        Self { statements,
               store,
               report: Report::default() }
    }

    /// Runs the whole program.
    ///
    /// Stops at the first error. Mutations made before the error stay in the
    /// store.
    ///
    /// # Errors
    /// Returns the first [`SyntaxError`](crate::error::SyntaxError) or
    /// [`RuntimeError`](crate::error::RuntimeError) execution reaches.
    pub fn run(mut self) -> ExecResult<Report> {
        self.execute_block(0..self.statements.len())?;
        Ok(self.report)
    }

    /// Executes the statements in `block` front to back.
    ///
    /// A `while` consumes its body and closing `end`, so the cursor may jump
    /// past several statements at once. The range of a loop body never
    /// contains the `end` that closes it.
    pub(crate) fn execute_block(&mut self, block: Range<usize>) -> ExecResult<()> {
        let mut cursor = block.start;

        while cursor < block.end {
            cursor = self.execute_statement(cursor, block.end)?;
        }

        Ok(())
    }

    /// Executes the statement at `index` and returns the index of the next
    /// statement to run.
    fn execute_statement(&mut self, index: usize, block_end: usize) -> ExecResult<usize> {
        let statements = self.statements;
        let statement = &statements[index];

        self.report.statements += 1;
        trace!(line = statement.line, statement = %statement.text, "execute");

        match &statement.instruction {
            Instruction::Clear(name) => self.store.clear(name),
            Instruction::Incr(name) => match self.store.increment(name) {
                Update::Done(_) => {},
                Update::Undefined => return Err(undefined_variable(name, statement)),
                Update::OutOfRange => return Err(overflow(name, statement)),
            },
            Instruction::Decr(name) => match self.store.decrement(name) {
                Update::Done(_) => {},
                Update::Undefined => return Err(undefined_variable(name, statement)),
                Update::OutOfRange => return Err(negative(name, statement)),
            },
            Instruction::While { control, target } => {
                return self.execute_while(statement, index, block_end, control, target);
            },
            Instruction::End => return Err(redundant_end(statement)),
            Instruction::Malformed { keyword, problem } => {
                return Err(malformed(*keyword, *problem, statement));
            },
            Instruction::Unknown { operation } => {
                return Err(undefined_operation(operation, statement));
            },
        }

        Ok(index + 1)
    }
}
