use crate::{
    config::Config,
    lang::code::Code,
    runtime::{
        data_structures::{
            dictionary::{Dictionary, NativeWord, WordDefinition},
            value::Value,
            value_stack::ValueStack,
        },
        error::{self, Error, ErrorDetail},
    },
};
use bumpalo::Bump;
use std::path::{Path, PathBuf};

pub mod context;

/// Trait for managing the interpreter's data stack.  Intended to be called by native words.
pub trait InterpreterStack<'a> {
    /// Use to examine the full data stack when required.  For example the stack dump word `.s`.
    fn stack(&self) -> &ValueStack<'a>;

    /// Push a value onto the stack.  This is the primary way of sending values to words.
    fn push(&mut self, value: Value<'a>);

    /// Pop a value from the stack.  This is the primary way of receiving values from words.  If
    /// the stack is empty a stack underflow error is returned.
    fn pop(&mut self) -> error::Result<Value<'a>>;

    /// Look at the top value without removing it.
    fn peek(&self) -> error::Result<Value<'a>> {
        self.stack().peek()
    }

    /// Drop everything on the stack.
    fn clear_stack(&mut self);

    /// Pop the top value as an integer.  Any other variant is a type error.
    fn pop_as_int(&mut self) -> error::Result<i64> {
        match self.pop()? {
            Value::Int(value) => Ok(value),
            _ => Err(Error::TypeError),
        }
    }

    /// Pop the top value as a condition.  Booleans are used as is, integers are true when non
    /// zero.
    fn pop_as_bool(&mut self) -> error::Result<bool> {
        self.pop()?.as_condition().ok_or(Error::TypeError)
    }

    /// Pop the top value as the contents of a string.
    fn pop_as_string(&mut self) -> error::Result<&'a str> {
        match self.pop()? {
            Value::String(value) => Ok(value),
            _ => Err(Error::TypeError),
        }
    }

    /// Pop the top value as a symbol's name.
    fn pop_as_symbol(&mut self) -> error::Result<&'a str> {
        match self.pop()? {
            Value::Symbol(name) => Ok(name),
            _ => Err(Error::TypeError),
        }
    }

    /// Pop the top value as a quotation's body.
    fn pop_as_quotation(&mut self) -> error::Result<Code<'a>> {
        match self.pop()? {
            Value::Quotation(code) => Ok(code),
            _ => Err(Error::TypeError),
        }
    }
}

/// Trait for running code, either already parsed or straight from source text.
pub trait CodeManagement<'a> {
    /// The arena everything parsed or built at runtime is allocated in.
    fn arena(&self) -> &'a Bump;

    /// Execute a run of instructions.  A failing word call is recorded in the error trail before
    /// the error is handed back.
    fn execute_code(&mut self, code: Code<'a>) -> error::Result<()>;

    /// Run source text a statement at a time, exactly as a batch file would be run.
    fn process_source(&mut self, source: &str) -> error::Result<()>;

    /// Find, read and run a source file.
    fn process_source_file(&mut self, path: &str) -> error::Result<()>;

    /// Resolve a file name against the current directory and then the configured search paths.
    fn find_file(&self, path: &str) -> error::Result<PathBuf> {
        let direct = Path::new(path);

        if direct.is_file() {
            return Ok(direct.to_path_buf());
        }

        if direct.is_absolute() {
            return Err(Error::FileNotFound);
        }

        self.search_paths()
            .iter()
            .map(|directory| directory.join(path))
            .find(|full_path| full_path.is_file())
            .ok_or(Error::FileNotFound)
    }

    /// The directories searched by `find_file`.
    fn search_paths(&self) -> &[PathBuf];
}

/// Simplify registering a native word with the interpreter.
///
/// Required parameters are, the interpreter instance to register with.  The name of the word to
/// register.  The word function handler to execute for the word.  A simple description of the word.
/// As well as the word's stack signature, written without its surrounding parentheses.
#[macro_export]
macro_rules! add_native_word {
    (
        $interpreter:expr ,
        $name:expr ,
        $function:expr ,
        $description:expr ,
        $signature:expr
    ) => {{
        $interpreter.add_native_word($name, $function, $description, $signature);
    }};
}

/// Trait for managing and executing words known to the interpreter.
pub trait WordManagement<'a> {
    /// Register a native word.  The signature is parsed as a stack effect, a signature that fails
    /// to parse is logged and the word is registered without one.
    fn add_native_word(
        &mut self,
        name: &'static str,
        handler: NativeWord,
        description: &'static str,
        signature: &str,
    );

    /// Insert or replace a word in the dictionary, handing back any definition that was replaced.
    fn define_word(&mut self, definition: WordDefinition<'a>) -> Option<WordDefinition<'a>>;

    /// Find a word in the interpreter's dictionary by name.
    fn find_word(&self, name: &str) -> Option<&WordDefinition<'a>> {
        self.dictionary().get(name)
    }

    /// The word dictionary of words known to the interpreter.
    fn dictionary(&self) -> &Dictionary<'a>;

    /// Find and execute a word by name.  If the word is not found an unknown word error is
    /// returned, otherwise the word's own result is.
    fn execute_word_named(&mut self, name: &str) -> error::Result<()>;

    /// The trail of failed word calls left by the last error, innermost first.
    fn error_trail(&self) -> &[ErrorDetail<'a>];

    /// Forget trail entries past `length`.  Used when a failure is caught.
    fn truncate_error_trail(&mut self, length: usize);

    /// Forget the whole trail once it has been reported.
    fn clear_error_trail(&mut self) {
        self.truncate_error_trail(0);
    }
}

/// Core interpreter trait.
///
/// Brings together managing the data stack, running code and managing the dictionary along with
/// access to the interpreter's output and configuration.
pub trait Interpreter<'a>: InterpreterStack<'a> + CodeManagement<'a> + WordManagement<'a> {
    /// Write text to the interpreter's output.
    fn write_output(&mut self, text: &str) -> error::Result<()>;

    /// The configuration the interpreter was created with.
    fn config(&self) -> &Config;
}
