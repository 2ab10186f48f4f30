use crate::{
    ast::{Keyword, Malformation, Statement},
    error::{Error, RuntimeError, SyntaxError},
};

/// Builds a [`RuntimeError::UndefinedVariable`] located at `statement`.
pub fn undefined_variable(name: &str, statement: &Statement) -> Error {
    RuntimeError::UndefinedVariable { name:        name.to_string(),
                                      line:        statement.line,
                                      source_line: statement.source_line.clone(), }.into()
}

/// Converts a decoding problem into the syntax error it stands for.
pub fn malformed(keyword: Keyword, problem: Malformation, statement: &Statement) -> Error {
    let line = statement.line;
    let source_line = statement.source_line.clone();

    let error = match problem {
        Malformation::MissingArgument => {
            SyntaxError::MissingArgument { operation: keyword.to_string(),
                                           line,
                                           source_line }
        },
        Malformation::TooManyArguments(found) => {
            SyntaxError::TooManyArguments { operation: keyword.to_string(),
                                            found,
                                            line,
                                            source_line }
        },
        Malformation::IllegalWhile => SyntaxError::IllegalWhile { line, source_line },
    };
    error.into()
}

/// Builds a [`RuntimeError::UndefinedOperation`] located at `statement`.
pub fn undefined_operation(operation: &str, statement: &Statement) -> Error {
    RuntimeError::UndefinedOperation { operation:   operation.to_string(),
                                       line:        statement.line,
                                       source_line: statement.source_line.clone(), }.into()
}

/// Builds the [`RuntimeError::IllegalOperation`] for a `decr` on zero.
pub fn negative(name: &str, statement: &Statement) -> Error {
    RuntimeError::IllegalOperation { statement:   statement.text.clone(),
                                     name:        name.to_string(),
                                     line:        statement.line,
                                     source_line: statement.source_line.clone(), }.into()
}

/// Builds the [`RuntimeError::Overflow`] for an `incr` past `u64::MAX`.
pub fn overflow(name: &str, statement: &Statement) -> Error {
    RuntimeError::Overflow { statement:   statement.text.clone(),
                             name:        name.to_string(),
                             line:        statement.line,
                             source_line: statement.source_line.clone(), }.into()
}

/// Builds a [`SyntaxError::RedundantEnd`] located at `statement`.
pub fn redundant_end(statement: &Statement) -> Error {
    SyntaxError::RedundantEnd { line:        statement.line,
                                source_line: statement.source_line.clone(), }.into()
}

/// Builds a [`SyntaxError::MissingWhileEnd`] for the `while` at `statement`.
pub fn missing_while_end(statement: &Statement) -> Error {
    SyntaxError::MissingWhileEnd { line:        statement.line,
                                   source_line: statement.source_line.clone(), }.into()
}
