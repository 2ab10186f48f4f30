use tracing::debug;

use crate::{
    ast::{Operand, Statement},
    interpreter::executor::{
        core::{ExecResult, Executor},
        utils::{missing_while_end, undefined_variable},
    },
};

impl Executor<'_> {
    /// Executes the `while` statement at `index`.
    ///
    /// The control variable must exist. The target is either a literal,
    /// fixed for the lifetime of the loop, or a variable whose value is
    /// re-read after every iteration so the bound may move while the loop
    /// runs. The loop body is delimited inside the enclosing block only
    /// (`index + 1 .. block_end`); the `end` that closes it is not part of
    /// the body.
    ///
    /// The body runs while the control variable differs from the target.
    /// Equality is the only stop condition, so a body that never reaches
    /// the target runs forever.
    ///
    /// # Parameters
    /// - `statement`: The `while` statement, used for error locations.
    /// - `index`: Position of the `while` in the program.
    /// - `block_end`: End of the enclosing block.
    /// - `control`: The loop's control variable.
    /// - `target`: The reach value operand.
    ///
    /// # Returns
    /// The index of the statement following the closing `end`.
    ///
    /// # Errors
    /// - `UndefinedVariable` if `control` or a variable target was never
    ///   cleared.
    /// - `MissingWhileEnd` if the enclosing block has no matching `end`.
    /// - Any error raised by the body.
    pub(crate) fn execute_while(&mut self,
                                statement: &Statement,
                                index: usize,
                                block_end: usize,
                                control: &str,
                                target: &Operand)
                                -> ExecResult<usize> {
        if !self.store.contains(control) {
            return Err(undefined_variable(control, statement));
        }
        let mut reach = self.resolve(target, statement)?;

        let body_start = index + 1;
        let Some(length) = matching_end(&self.statements[body_start..block_end]) else {
            return Err(missing_while_end(statement));
        };
        let body = body_start..body_start + length;

        debug!(line = statement.line, control, reach, body = length, "entering loop");

        let mut iterations: u64 = 0;
        while self.store.get(control) != Some(reach) {
            self.execute_block(body.clone())?;
            iterations += 1;

            if let Operand::Variable(_) = target {
                reach = self.resolve(target, statement)?;
            }
        }
        self.report.iterations += iterations;

        debug!(line = statement.line, control, iterations, "leaving loop");
        Ok(body.end + 1)
    }

    /// Returns the current value of a loop target.
    fn resolve(&self, target: &Operand, statement: &Statement) -> ExecResult<u64> {
        match target {
            Operand::Literal(value) => Ok(*value),
            Operand::Variable(name) => {
                self.store.get(name).ok_or_else(|| undefined_variable(name, statement))
            },
        }
    }
}

/// Finds the `end` that closes a loop whose body starts at `statements[0]`.
///
/// Every `while` met on the way opens a nesting level and every `end` at a
/// positive level closes one; the first `end` at level zero closes the loop.
/// Returns its index, which is also the length of the body, or `None` if the
/// slice runs out first.
///
/// # Example
/// ```
/// use barebones::interpreter::{executor::while_loop::matching_end, segmenter::segment};
///
/// let body = segment("incr a; while b not 0 do; decr b; end; end; clear c;").unwrap();
/// assert_eq!(matching_end(&body), Some(4));
/// assert_eq!(matching_end(&body[..4]), None);
/// ```
#[must_use]
pub fn matching_end(statements: &[Statement]) -> Option<usize> {
    let mut depth: usize = 0;

    for (offset, statement) in statements.iter().enumerate() {
        if statement.instruction.opens_block() {
            depth += 1;
        } else if statement.instruction.closes_block() {
            if depth == 0 {
                return Some(offset);
            }
            depth -= 1;
        }
    }

    None
}
