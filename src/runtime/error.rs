use std::{ fmt::{ self, Display, Formatter },
           io };
use thiserror::Error;



pub type Result<T> = std::result::Result<T, Error>;



/// Every way parsing or running a program can fail.  The set is flat on purpose, parse errors and
/// runtime errors travel through the same channel.  The display form of each variant is its kind
/// name, which is also what `recover` hands to its handler quotation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error
{
    /// A `[` was never closed.  More input may still close it.
    #[error("UnmatchedOpenBracket")]
    UnmatchedOpenBracket,

    /// A `]` with no `[` at its level.
    #[error("UnmatchedCloseBracket")]
    UnmatchedCloseBracket,

    /// A `{` was never closed.  More input may still close it.
    #[error("UnmatchedOpenBrace")]
    UnmatchedOpenBrace,

    /// A `}` with no `{` at its level.
    #[error("UnmatchedCloseBrace")]
    UnmatchedCloseBrace,

    /// A `(` was never closed.  More input may still close it.
    #[error("UnmatchedOpenParen")]
    UnmatchedOpenParen,

    /// A `)` with no `(` at its level.
    #[error("UnmatchedCloseParen")]
    UnmatchedCloseParen,

    /// A nested `(` inside a stack effect with no parameter name in front of it, or a second `--`.
    #[error("MalformedStackEffect")]
    MalformedStackEffect,

    /// The statement being accumulated grew past the configured limit.
    #[error("StatementTooLong")]
    StatementTooLong,

    #[error("UnknownWord")]
    UnknownWord,

    #[error("StackUnderflow")]
    StackUnderflow,

    /// A primitive was handed a value of the wrong variant.
    #[error("TypeError")]
    TypeError,

    #[error("DivisionByZero")]
    DivisionByZero,

    #[error("FileNotFound")]
    FileNotFound,

    #[error("FileReadError")]
    FileReadError,

    /// Writing to the interpreter's output failed.
    #[error("OutputError")]
    OutputError,

    /// Reserved for allocation failure.  The arena aborts on exhaustion today so nothing raises it.
    #[error("OutOfMemory")]
    OutOfMemory,

    /// Anything else, carried as text.  Raised by `throw`.
    #[error("{0}")]
    Other(String)
}


impl Error
{
    /// Is this the parser asking for more input rather than a real failure?
    pub fn is_incomplete(&self) -> bool
    {
        matches!(self,
                 Error::UnmatchedOpenBracket | Error::UnmatchedOpenBrace | Error::UnmatchedOpenParen)
    }
}


/// Map file access failures onto the interpreter's error kinds.
impl From<io::Error> for Error
{
    fn from(error: io::Error) -> Error
    {
        match error.kind()
        {
            io::ErrorKind::NotFound => Error::FileNotFound,
            _                       => Error::FileReadError
        }
    }
}



/// One step of the trail left behind by a failure as it unwinds through word calls.
#[derive(Clone, Debug, PartialEq)]
pub struct ErrorDetail<'a>
{
    /// The failure being propagated.
    pub error: Error,

    /// The word whose call failed.
    pub word: &'a str,

    /// The source line of the failing call.
    pub line: usize
}


impl<'a> ErrorDetail<'a>
{
    pub fn new(error: Error, word: &'a str, line: usize) -> ErrorDetail<'a>
    {
        ErrorDetail { error, word, line }
    }
}


impl Display for ErrorDetail<'_>
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result
    {
        write!(f, "at {} (line {})", self.word, self.line)
    }
}



/// Pretty print an error along with the call trail that led to it, innermost call first.
pub struct ErrorReport<'r, 'a>
{
    error: &'r Error,
    trail: &'r [ErrorDetail<'a>]
}


impl<'r, 'a> ErrorReport<'r, 'a>
{
    pub fn new(error: &'r Error, trail: &'r [ErrorDetail<'a>]) -> Self
    {
        ErrorReport { error, trail }
    }
}


impl Display for ErrorReport<'_, '_>
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result
    {
        write!(f, "Error: {}", self.error)?;

        for detail in self.trail
        {
            write!(f, "\n  {}", detail)?;
        }

        Ok(())
    }
}
