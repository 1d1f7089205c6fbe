use crate::{
    add_native_word,
    runtime::{error, interpreter::Interpreter},
};
use tracing::debug;

/// Pop the top value and print it in its source form followed by a newline.
///
/// Signature: `value -- `
fn word_print_value(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let value = interpreter.pop()?;

    interpreter.write_output(&format!("{}\n", value))
}

/// Print the whole stack, bottom first, without changing it.
///
/// Signature: ` -- `
fn word_print_stack(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let dump = format!("{}\n", interpreter.stack());

    interpreter.write_output(&dump)
}

/// Print a string's contents as is, no quotes and no newline.
///
/// Signature: `string -- `
fn word_print(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let text = interpreter.pop_as_string()?;

    interpreter.write_output(text)
}

fn word_newline(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    interpreter.write_output("\n")
}

/// Read a source file and run it a statement at a time.  Relative paths are looked for in the
/// current directory first and then along the search paths.
///
/// Signature: `path -- ???`
fn word_load(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let path = interpreter.pop_as_string()?;

    debug!(path, "load requested");
    interpreter.process_source_file(path)
}

pub fn register_io_words(interpreter: &mut dyn Interpreter) {
    add_native_word!(
        interpreter,
        ".",
        word_print_value,
        "Print the top value and remove it from the stack.",
        "value --"
    );

    add_native_word!(
        interpreter,
        ".s",
        word_print_stack,
        "Print the contents of the data stack.",
        "--"
    );

    add_native_word!(
        interpreter,
        "print",
        word_print,
        "Print a string without quotes.",
        "string --"
    );

    add_native_word!(interpreter, "cr", word_newline, "Print a newline.", "--");

    add_native_word!(
        interpreter,
        "load",
        word_load,
        "Load and run a source file.",
        "path -- ???"
    );
}
