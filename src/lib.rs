/// Module for the managing source code and turning it into code the interpreter can run.
pub mod lang;

/// Module for the runtime and the data structures used by the interpreter.  As well as the
/// interpreter itself.
#[macro_use]
pub mod runtime;

/// Command line and environment configuration.
pub mod config;
