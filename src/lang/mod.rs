/// Module for managing the original source code.
pub mod source_buffer;

/// Module for managing the turning of the source code into a list of tokens for further processing.
pub mod tokenizing;

/// Module for defining the instructions and operations the interpreter executes.
pub mod code;

/// Recursive descent parsing of tokens into code, arrays and stack effects.
pub mod parsing;

/// Accumulates lines of input until they make up a complete statement.
pub mod statement;
