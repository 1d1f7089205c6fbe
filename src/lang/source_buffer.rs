use core::str::Chars;



/// The location in the source code where a token was found.  Instructions keep the line so that
/// failures can be reported against the source the user typed.
///
/// This is a read-only structure.  Use the field accessor methods to get the values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SourceLocation
{
    /// The 1 based line number in the source code where the token was found.
    line: usize
}


impl SourceLocation
{
    /// Create a new SourceLocation on the given line.
    pub fn new(line: usize) -> Self
    {
        SourceLocation { line }
    }

    /// The 1 based line number in the source code.
    pub fn line(&self) -> usize
    {
        self.line
    }
}



/// A buffer for processing source code.  This is used by the lexer to extract meaningful tokens
/// from the source code.  This buffer acts as a forward only iterator over the code.  As characters
/// are consumed the location of the cursor in that source is maintained.
///
/// The SourceBuffer only holds a reference to the source code, the code is not copied.
pub struct SourceBuffer<'s>
{
    /// An iterator over the source code being processed.
    chars: Chars<'s>,

    /// The logical location of the cursor in the source code.
    location: SourceLocation,

    /// The current character being processed.  This is used to peek at the next character without
    /// consuming it.
    current: Option<char>
}


impl<'s> SourceBuffer<'s>
{
    /// Create a new SourceBuffer over the given source text, starting the line count at 1.
    pub fn new(source: &'s str) -> Self
    {
        Self::new_at_line(source, 1)
    }

    /// Create a new SourceBuffer whose first line is reported as `line`.  Used when the text is a
    /// statement accumulated from the middle of a larger input.
    pub fn new_at_line(source: &'s str, line: usize) -> Self
    {
        SourceBuffer
            {
                chars: source.chars(),
                location: SourceLocation::new(line),
                current: None
            }
    }

    /// The location the cursor is at in the source code being processed.
    pub fn location(&self) -> SourceLocation
    {
        self.location
    }

    /// Take a peek at the next character in the source code without consuming it.
    pub fn peek_next(&mut self) -> Option<char>
    {
        match self.current
        {
            Some(_) => self.current,
            None =>
                {
                    let next = self.chars.next();

                    self.current = next;
                    next
                }
        }
    }

    /// Get and consume the next character in the source code.
    pub fn next_char(&mut self) -> Option<char>
    {
        let next = match self.current.take()
            {
                Some(current) => Some(current),
                None => self.chars.next()
            };

        if let Some(next_char) = next
        {
            self.increment_location(next_char);
        }

        next
    }

    /// Move on to the next line after a new line character.
    fn increment_location(&mut self, next: char)
    {
        if next == '\n'
        {
            self.location.line += 1;
        }
    }
}
