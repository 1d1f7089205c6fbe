use crate::{
    add_native_word,
    runtime::{error, interpreter::Interpreter},
};

/// Run a quotation from the stack inline.
///
/// Signature: `quotation -- ???`
fn word_call(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let code = interpreter.pop_as_quotation()?;

    interpreter.execute_code(code)
}

/// Run exactly one of two quotations depending on a condition.
///
/// Signature: `condition then-quotation else-quotation -- ???`
fn word_if(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let else_code = interpreter.pop_as_quotation()?;
    let then_code = interpreter.pop_as_quotation()?;
    let condition = interpreter.pop_as_bool()?;

    interpreter.execute_code(if condition { then_code } else { else_code })
}

/// Run a quotation only if the condition is true.
///
/// Signature: `condition quotation -- ???`
fn word_when(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let code = interpreter.pop_as_quotation()?;
    let condition = interpreter.pop_as_bool()?;

    if condition {
        interpreter.execute_code(code)?;
    }

    Ok(())
}

/// Run a quotation only if the condition is false.
///
/// Signature: `condition quotation -- ???`
fn word_unless(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let code = interpreter.pop_as_quotation()?;
    let condition = interpreter.pop_as_bool()?;

    if !condition {
        interpreter.execute_code(code)?;
    }

    Ok(())
}

pub fn register_control_words(interpreter: &mut dyn Interpreter) {
    add_native_word!(
        interpreter,
        "call",
        word_call,
        "Execute a quotation.",
        "quotation -- ???"
    );

    add_native_word!(
        interpreter,
        "if",
        word_if,
        "Execute the first quotation if the condition is true, otherwise the second.",
        "condition then: ( -- ??? ) else: ( -- ??? ) -- ???"
    );

    add_native_word!(
        interpreter,
        "when",
        word_when,
        "Execute the quotation if the condition is true.",
        "condition quotation -- ???"
    );

    add_native_word!(
        interpreter,
        "unless",
        word_unless,
        "Execute the quotation if the condition is false.",
        "condition quotation -- ???"
    );
}
