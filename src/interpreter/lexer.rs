use logos::Logos;

/// Represents a word of a normalized Bare Bones statement.
///
/// The lexer runs over a single statement whose `;` has already been removed
/// by the segmenter, so the only separators left are spaces. Every run of
/// non-space characters is either a keyword or a plain [`Token::Word`].
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// `clear`
    #[token("clear")]
    Clear,
    /// `incr`
    #[token("incr")]
    Incr,
    /// `decr`
    #[token("decr")]
    Decr,
    /// `while`
    #[token("while")]
    While,
    /// `not`
    #[token("not")]
    Not,
    /// `do`
    #[token("do")]
    Do,
    /// `end`
    #[token("end")]
    End,
    /// Any other word: variable names, integer literals and unknown
    /// operations alike.
    #[regex(r"[^ \t\r\n\f]+")]
    Word,
}

/// Splits a normalized statement into `(token, slice)` pairs.
///
/// Keywords keep their slice so they can still be used as variable names,
/// as in `clear do`.
///
/// # Example
/// ```
/// use barebones::interpreter::lexer::{Token, tokenize};
///
/// let words = tokenize("while x not y2 do");
/// assert_eq!(words[0], (Token::While, "while"));
/// assert_eq!(words[3], (Token::Word, "y2"));
/// ```
#[must_use]
pub fn tokenize(text: &str) -> Vec<(Token, &str)> {
    let mut lexer = Token::lexer(text);
    let mut words = Vec::new();

    while let Some(token) = lexer.next() {
        words.push((token.unwrap_or(Token::Word), lexer.slice()));
    }

    words
}
