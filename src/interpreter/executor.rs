/// Core execution logic.
///
/// Contains the [`Executor`](core::Executor), the statement dispatch loop,
/// and the [`Report`](core::Report) returned after a run.
pub mod core;

/// Execution of `while` loops.
///
/// Delimits loop bodies by balancing nested `while`/`end` pairs and runs the
/// body until the control variable reaches its target.
pub mod while_loop;

/// Utility functions for execution.
///
/// Builds the located errors shared by the dispatch loop and the loop
/// handler.
pub mod utils;
