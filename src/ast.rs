use std::fmt;

/// One of the five Bare Bones operation keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `clear <var>`
    Clear,
    /// `incr <var>`
    Incr,
    /// `decr <var>`
    Decr,
    /// `while <var> not <target> do`
    While,
    /// `end`
    End,
}

impl Keyword {
    /// Returns the keyword as written in source code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Incr => "incr",
            Self::Decr => "decr",
            Self::While => "while",
            Self::End => "end",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The value a `while` loop compares its control variable against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// A fixed integer written in the source, such as `0` in
    /// `while x not 0 do`.
    Literal(u64),
    /// A variable whose current value is re-read after every iteration.
    Variable(String),
}

/// The way a statement with a known keyword failed to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformation {
    /// The keyword was not followed by a variable name.
    MissingArgument,
    /// `clear`, `incr` or `decr` with this many arguments instead of one.
    TooManyArguments(usize),
    /// A `while` header that is not `while <var> not <target> do`.
    IllegalWhile,
}

/// A decoded Bare Bones statement.
///
/// Every statement decodes into exactly one variant while the program is
/// segmented. Statements that cannot be executed still decode (into
/// `Malformed` or `Unknown`) so that their error is raised only when
/// execution reaches them, and so that a malformed `while` still counts as
/// a nesting level when loop bodies are delimited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// Sets the variable to zero, creating it if needed.
    Clear(String),
    /// Adds one to an existing variable.
    Incr(String),
    /// Subtracts one from an existing, non-zero variable.
    Decr(String),
    /// Opens a loop that runs until `control` equals `target`.
    While {
        /// The variable compared on every iteration.
        control: String,
        /// The reach value.
        target:  Operand,
    },
    /// Closes the innermost open `while`.
    End,
    /// A known keyword with the wrong shape.
    Malformed {
        /// The leading keyword.
        keyword: Keyword,
        /// What is wrong with the arguments.
        problem: Malformation,
    },
    /// A statement whose leading word is not an operation.
    Unknown {
        /// The leading word.
        operation: String,
    },
}

impl Instruction {
    /// Returns the leading keyword, or `None` for unknown operations.
    #[must_use]
    pub const fn keyword(&self) -> Option<Keyword> {
        match self {
            Self::Clear(_) => Some(Keyword::Clear),
            Self::Incr(_) => Some(Keyword::Incr),
            Self::Decr(_) => Some(Keyword::Decr),
            Self::While { .. } => Some(Keyword::While),
            Self::End => Some(Keyword::End),
            Self::Malformed { keyword, .. } => Some(*keyword),
            Self::Unknown { .. } => None,
        }
    }

    /// Whether this statement opens a nesting level when delimiting loop
    /// bodies.
    #[must_use]
    pub fn opens_block(&self) -> bool {
        self.keyword() == Some(Keyword::While)
    }

    /// Whether this statement closes a nesting level when delimiting loop
    /// bodies.
    #[must_use]
    pub fn closes_block(&self) -> bool {
        self.keyword() == Some(Keyword::End)
    }
}

/// A single semicolon-terminated statement together with its source
/// location.
///
/// Created once by the segmenter and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// The statement with whitespace runs collapsed to single spaces and no
    /// trailing `;`.
    pub text:        String,
    /// The trimmed physical line the statement was written on.
    pub source_line: String,
    /// 1-based line number.
    pub line:        usize,
    /// The decoded operation.
    pub instruction: Instruction,
}
