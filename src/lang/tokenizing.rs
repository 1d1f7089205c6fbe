use crate::lang::source_buffer::{SourceBuffer, SourceLocation};
use std::fmt::{self, Display, Formatter};

/// What kind of token the lexer found.  Numbers, strings, symbols and words are not told apart
/// here, that is left to the parser.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Any whitespace delimited run of characters, or a double quoted string including its quotes.
    Word,

    /// A `\ ` line comment, running to the end of the line.
    Comment,

    /// An end of line.  Only produced when the lexer was asked to keep newlines.
    Newline,
}

/// A token is a simple unit of the language along with where it was found in the source.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub location: SourceLocation,
}

/// A list of tokens found in the source code.
pub type TokenList = Vec<Token>;

impl Display for Token {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self.kind {
            TokenKind::Newline => writeln!(f),
            _ => write!(f, "{}", self.text),
        }
    }
}

impl Token {
    pub fn new(kind: TokenKind, text: String, location: SourceLocation) -> Token {
        Token {
            kind,
            text,
            location,
        }
    }

    /// The 1 based line the token started on.
    pub fn line(&self) -> usize {
        self.location.line()
    }

    /// Check if the token is a word.
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    /// Check if the token is exactly the given word.
    pub fn is(&self, text: &str) -> bool {
        self.is_word() && self.text == text
    }
}

/// Check if the given character is considered whitespace.
fn is_whitespace(next: char) -> bool {
    next == ' ' || next == '\t' || next == '\r' || next == '\n'
}

/// Converts source text into a flat stream of tokens.  Pulled on demand by the parser through the
/// `Iterator` implementation.
pub struct Lexer<'s> {
    buffer: SourceBuffer<'s>,
    keep_newlines: bool,
}

impl<'s> Lexer<'s> {
    /// Create a lexer over the source, numbering lines from 1.
    pub fn new(source: &'s str) -> Self {
        Self::new_at_line(source, 1)
    }

    /// Create a lexer whose first line is reported as `line`.
    pub fn new_at_line(source: &'s str, line: usize) -> Self {
        Lexer {
            buffer: SourceBuffer::new_at_line(source, line),
            keep_newlines: false,
        }
    }

    /// Surface end of lines as `TokenKind::Newline` tokens.
    pub fn keep_newlines(mut self, keep: bool) -> Self {
        self.keep_newlines = keep;
        self
    }

    /// Skip over whitespace, stopping at the next interesting character.  New lines count as
    /// interesting when they are being kept.
    fn skip_whitespace(&mut self) {
        while let Some(next) = self.buffer.peek_next() {
            if !is_whitespace(next) || (next == '\n' && self.keep_newlines) {
                break;
            }

            let _ = self.buffer.next_char();
        }
    }

    /// Take the rest of the current line, leaving the new line itself in the buffer.
    fn process_until_end_of_line(&mut self) -> String {
        let mut text = String::new();

        while let Some(next) = self.buffer.peek_next() {
            if next == '\n' {
                break;
            }

            text.push(next);
            let _ = self.buffer.next_char();
        }

        text
    }

    /// Take a double quoted string, quotes included.  Stops right after the closing quote.  If the
    /// input ends first the partial text is returned as is and the parser will not recognize it as
    /// a string.
    fn process_string(&mut self) -> String {
        let mut text = String::new();

        if let Some(quote) = self.buffer.next_char() {
            text.push(quote);
        }

        while let Some(next) = self.buffer.next_char() {
            text.push(next);

            if next == '"' {
                break;
            }
        }

        text
    }

    /// Pull text out of the buffer until we hit a whitespace character.
    fn process_until_whitespace(&mut self) -> String {
        let mut text = String::new();

        while let Some(next) = self.buffer.peek_next() {
            if is_whitespace(next) {
                break;
            }

            text.push(next);
            let _ = self.buffer.next_char();
        }

        text
    }

    /// A backslash followed by a space, a tab, or the end of the line starts a comment.
    fn is_comment_start(&mut self, text: &str) -> bool {
        text == "\\"
            && matches!(
                self.buffer.peek_next(),
                None | Some(' ') | Some('\t') | Some('\r') | Some('\n')
            )
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.skip_whitespace();

        let next = self.buffer.peek_next()?;
        let location = self.buffer.location();

        if next == '\n' {
            let _ = self.buffer.next_char();
            return Some(Token::new(TokenKind::Newline, "\n".to_string(), location));
        }

        if next == '"' {
            return Some(Token::new(TokenKind::Word, self.process_string(), location));
        }

        let text = self.process_until_whitespace();

        if self.is_comment_start(&text) {
            let rest = self.process_until_end_of_line();
            return Some(Token::new(TokenKind::Comment, text + &rest, location));
        }

        Some(Token::new(TokenKind::Word, text, location))
    }
}

/// Tokenize a whole source string, dropping new lines.
pub fn tokenize_from_source(source: &str) -> TokenList {
    Lexer::new(source).collect()
}
