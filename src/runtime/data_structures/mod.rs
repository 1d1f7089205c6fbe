/// Module contains the Value enumeration and it's implementation.  The value is one of the core
/// data structures of the interpreter.  It is used to represent all data types that the interpreter
/// and the scripts it runs can understand and manage.
pub mod value;

/// Stack effect documentation attached to words.
pub mod stack_effect;

/// The data stack.
pub mod value_stack;

/// The dictionary module provides the core interpreter word dictionary.
pub mod dictionary;
