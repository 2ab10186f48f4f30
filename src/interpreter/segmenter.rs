use tracing::debug;

use crate::{
    ast::{Instruction, Keyword, Malformation, Operand, Statement},
    error::SyntaxError,
    interpreter::lexer::{Token, tokenize},
};

/// Splits program text into statements.
///
/// Every physical line must end with `;` once surrounding whitespace is
/// removed. A line may hold several statements; each is trimmed, must not be
/// empty, and has its internal whitespace runs collapsed to single spaces
/// before it is decoded.
///
/// # Errors
/// - [`SyntaxError::MissingTerminator`] if a line (blank lines included)
///   does not end with `;`.
/// - [`SyntaxError::EmptyStatement`] for `;;` or a line starting with `;`.
///
/// # Example
/// ```
/// use barebones::{ast::Instruction, interpreter::segmenter::segment};
///
/// let statements = segment("clear   a; incr a;\n  decr a;").unwrap();
/// assert_eq!(statements.len(), 3);
/// assert_eq!(statements[0].text, "clear a");
/// assert_eq!(statements[2].line, 2);
/// assert_eq!(statements[2].instruction, Instruction::Decr("a".into()));
/// ```
pub fn segment(source: &str) -> Result<Vec<Statement>, SyntaxError> {
    let mut statements = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let source_line = raw.trim();

        let Some(body) = source_line.strip_suffix(';') else {
            return Err(SyntaxError::MissingTerminator { line,
                                                        source_line: source_line.to_string() });
        };

        for fragment in body.split(';') {
            let fragment = fragment.trim();
            if fragment.is_empty() {
                return Err(SyntaxError::EmptyStatement { line,
                                                         source_line: source_line.to_string() });
            }

            let text = fragment.split_whitespace().collect::<Vec<_>>().join(" ");
            statements.push(Statement { instruction: decode(&text),
                                        text,
                                        source_line: source_line.to_string(),
                                        line });
        }
    }

    debug!(statements = statements.len(), "segmented program");
    Ok(statements)
}

/// Decodes one normalized statement into an [`Instruction`].
///
/// Decoding never fails. Statements with a known keyword but the wrong
/// shape become [`Instruction::Malformed`], and statements starting with
/// anything else become [`Instruction::Unknown`].
///
/// # Example
/// ```
/// use barebones::{
///     ast::{Instruction, Keyword, Malformation, Operand},
///     interpreter::segmenter::decode,
/// };
///
/// assert_eq!(decode("while x not 3 do"),
///            Instruction::While { control: "x".into(),
///                                 target:  Operand::Literal(3), });
/// assert_eq!(decode("incr a b"),
///            Instruction::Malformed { keyword: Keyword::Incr,
///                                     problem: Malformation::TooManyArguments(2), });
/// ```
#[must_use]
pub fn decode(text: &str) -> Instruction {
    let words = tokenize(text);
    let Some((&(head, operation), args)) = words.split_first() else {
        return Instruction::Unknown { operation: String::new() };
    };

    let keyword = match head {
        Token::Clear => Keyword::Clear,
        Token::Incr => Keyword::Incr,
        Token::Decr => Keyword::Decr,
        Token::While => Keyword::While,
        Token::End => return Instruction::End,
        Token::Not | Token::Do | Token::Word => {
            return Instruction::Unknown { operation: operation.to_string() };
        },
    };

    if args.is_empty() {
        return Instruction::Malformed { keyword,
                                        problem: Malformation::MissingArgument };
    }

    if keyword == Keyword::While {
        return decode_while(args);
    }

    if args.len() > 1 {
        return Instruction::Malformed { keyword,
                                        problem: Malformation::TooManyArguments(args.len()) };
    }

    let name = args[0].1.to_string();
    match keyword {
        Keyword::Clear => Instruction::Clear(name),
        Keyword::Incr => Instruction::Incr(name),
        _ => Instruction::Decr(name),
    }
}

/// Decodes the words after `while`, which must read `<var> not <target> do`.
fn decode_while(args: &[(Token, &str)]) -> Instruction {
    match args {
        [(_, control), (Token::Not, _), (_, target), (Token::Do, _)] => {
            Instruction::While { control: (*control).to_string(),
                                 target:  parse_operand(target), }
        },
        _ => Instruction::Malformed { keyword: Keyword::While,
                                      problem: Malformation::IllegalWhile, },
    }
}

/// A word that parses as an unsigned integer is a literal; anything else
/// names a variable.
fn parse_operand(word: &str) -> Operand {
    word.parse::<u64>()
        .map_or_else(|_| Operand::Variable(word.to_string()), Operand::Literal)
}
