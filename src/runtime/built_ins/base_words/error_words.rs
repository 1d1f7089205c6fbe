use crate::{
    add_native_word,
    runtime::{
        data_structures::value::Value,
        error::{self, Error},
        interpreter::Interpreter,
    },
};
use tracing::debug;

/// Run the try quotation.  If it fails, push the failure as an error value and run the recover
/// quotation.  Side effects of the try quotation up to the failure are kept.
///
/// Signature: `try-quotation recover-quotation -- ???`
fn word_recover(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let recover_code = interpreter.pop_as_quotation()?;
    let try_code = interpreter.pop_as_quotation()?;
    let trail_length = interpreter.error_trail().len();

    match interpreter.execute_code(try_code) {
        Ok(()) => Ok(()),
        Err(error) => {
            interpreter.truncate_error_trail(trail_length);

            let message = interpreter.arena().alloc_str(&error.to_string());

            interpreter.push(Value::Error(message));
            interpreter.execute_code(recover_code)
        }
    }
}

/// Run a quotation and throw away any failure.  Nothing it did before failing is undone.
///
/// Signature: `quotation -- ???`
fn word_ignore_errors(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let code = interpreter.pop_as_quotation()?;
    let trail_length = interpreter.error_trail().len();

    if let Err(error) = interpreter.execute_code(code) {
        debug!(%error, "ignoring error");
        interpreter.truncate_error_trail(trail_length);
    }

    Ok(())
}

/// Fail with a message of the script's choosing.
///
/// Signature: `message -- `
fn word_throw(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let message = interpreter.pop_as_string()?;

    Err(Error::Other(message.to_string()))
}

pub fn register_error_words(interpreter: &mut dyn Interpreter) {
    add_native_word!(
        interpreter,
        "recover",
        word_recover,
        "Execute the try quotation, on failure push the error and execute the recover quotation.",
        "try: ( -- ??? ) recover: ( error -- ??? ) -- ???"
    );

    add_native_word!(
        interpreter,
        "ignore-errors",
        word_ignore_errors,
        "Execute a quotation, discarding any failure.",
        "quotation -- ???"
    );

    add_native_word!(
        interpreter,
        "throw",
        word_throw,
        "Fail with the given message.",
        "message --"
    );
}
