/// The executor module runs segmented programs.
///
/// The executor walks the statement list, applies `clear`, `incr` and
/// `decr` to the variable store, and re-runs loop bodies until their
/// control variable reaches its target. It is the core of the interpreter.
///
/// # Responsibilities
/// - Dispatches every decoded statement.
/// - Delimits loop bodies by balancing nested `while`/`end` pairs.
/// - Reports runtime errors such as undefined variables or negative values.
pub mod executor;
/// The lexer module classifies the words of a statement.
///
/// Each normalized statement is split into keyword tokens and plain words
/// so that decoding never compares strings by hand.
pub mod lexer;
/// Whole programs.
///
/// Bundles the segmented statements of one source text and runs them.
pub mod program;
/// The segmenter module turns program text into statements.
///
/// # Responsibilities
/// - Enforces that every line ends with `;` and holds no empty statements.
/// - Normalizes whitespace and records source locations.
/// - Decodes each statement once into an [`Instruction`](crate::ast::Instruction).
pub mod segmenter;
/// The variable store.
pub mod store;
