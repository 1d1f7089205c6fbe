use crate::{
    lang::{code::Code, parsing::parse_source},
    runtime::error::{self, Error},
};
use bumpalo::Bump;

/// Default bound on how much text a single statement may accumulate.
pub const DEFAULT_STATEMENT_LIMIT: usize = 64 * 1024;

/// The outcome of feeding a line to the statement buffer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Statement<'a> {
    /// An open `[`, `{` or `(` is still waiting for its close.  Read another line.
    Incomplete,

    /// The buffered text parsed.  Run the code, then reset the buffer.
    Complete(Code<'a>),
}

/// Collects input lines until they form a complete statement.  Used the same way by the REPL, by
/// batch files and by `load`.
#[derive(Debug)]
pub struct StatementBuffer {
    text: String,
    limit: usize,

    /// Line number of the first line of the statement being buffered.
    start_line: usize,

    /// Line number the next fed line will have.
    next_line: usize,

    /// Attempts on a partial statement are parsed here and thrown away, only a complete statement
    /// is parsed into the caller's arena.
    scratch: Bump,
}

impl Default for StatementBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_STATEMENT_LIMIT)
    }
}

impl StatementBuffer {
    /// Create an empty buffer that refuses to grow past `limit` bytes.
    pub fn new(limit: usize) -> StatementBuffer {
        StatementBuffer {
            text: String::new(),
            limit,
            start_line: 1,
            next_line: 1,
            scratch: Bump::new(),
        }
    }

    /// Add a line of input and try to parse everything buffered so far.
    ///
    /// A blank line with nothing buffered is an empty, complete statement.  Hard parse errors and
    /// an overlong statement are returned as errors, the caller should report them and `reset`.
    pub fn feed_line<'a>(&mut self, arena: &'a Bump, line: &str) -> error::Result<Statement<'a>> {
        let line_number = self.next_line;
        self.next_line += 1;

        let line = line.trim();

        if self.text.is_empty() && line.is_empty() {
            return Ok(Statement::Complete(&[]));
        }

        let separator = usize::from(!self.text.is_empty());

        if self.text.len() + separator + line.len() > self.limit {
            return Err(Error::StatementTooLong);
        }

        if self.text.is_empty() {
            self.start_line = line_number;
        } else {
            self.text.push('\n');
        }

        self.text.push_str(line);

        let attempt = parse_source(&self.scratch, &self.text, self.start_line).map(|_| ());
        self.scratch.reset();

        match attempt {
            Ok(()) => parse_source(arena, &self.text, self.start_line).map(Statement::Complete),
            Err(error) if error.is_incomplete() => Ok(Statement::Incomplete),
            Err(error) => Err(error),
        }
    }

    /// Force a parse of whatever is buffered because no more input is coming.  An unclosed
    /// bracket is an error at this point.
    pub fn flush<'a>(&mut self, arena: &'a Bump) -> error::Result<Code<'a>> {
        if self.text.is_empty() {
            return Ok(&[]);
        }

        parse_source(arena, &self.text, self.start_line)
    }

    /// Throw away the buffered text.  Line numbering carries on.
    pub fn reset(&mut self) {
        self.text.clear();
    }

    /// Is there a partial statement waiting for more input?
    pub fn is_pending(&self) -> bool {
        !self.text.is_empty()
    }

    /// The line the buffered statement started on.
    pub fn start_line(&self) -> usize {
        self.start_line
    }
}
