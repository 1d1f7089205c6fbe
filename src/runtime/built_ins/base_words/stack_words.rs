use crate::{
    add_native_word,
    runtime::{data_structures::value::Value, error, interpreter::Interpreter},
};

/// Duplicate the top value on the data stack.
///
/// Signature: `value -- value value`
fn word_dup(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let value = interpreter.peek()?;

    interpreter.push(value);

    Ok(())
}

/// Drop the top value on the data stack.
///
/// Signature: `value -- `
fn word_drop(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let _ = interpreter.pop()?;

    Ok(())
}

/// Swap the top 2 values on the data stack.
///
/// Signature: `a b -- b a`
fn word_swap(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let b = interpreter.pop()?;
    let a = interpreter.pop()?;

    interpreter.push(b);
    interpreter.push(a);

    Ok(())
}

/// Make a copy of the second value and place the copy on top.
///
/// Signature: `a b -- a b a`
fn word_over(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let b = interpreter.pop()?;
    let a = interpreter.pop()?;

    interpreter.push(a);
    interpreter.push(b);
    interpreter.push(a);

    Ok(())
}

/// Rotate the third value up to the top of the stack.
///
/// Signature: `a b c -- b c a`
fn word_rot(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let c = interpreter.pop()?;
    let b = interpreter.pop()?;
    let a = interpreter.pop()?;

    interpreter.push(b);
    interpreter.push(c);
    interpreter.push(a);

    Ok(())
}

/// Drop the second value on the stack.
///
/// Signature: `a b -- b`
fn word_nip(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let b = interpreter.pop()?;
    let _ = interpreter.pop()?;

    interpreter.push(b);

    Ok(())
}

/// Get the depth of the data stack before calling this word.
///
/// Signature: ` -- depth`
fn word_depth(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let depth = interpreter.stack().depth();

    interpreter.push(Value::from(depth));
    Ok(())
}

/// Drop everything on the data stack.
///
/// Signature: ` -- `
fn word_clear(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    interpreter.clear_stack();
    Ok(())
}

pub fn register_stack_words(interpreter: &mut dyn Interpreter) {
    add_native_word!(
        interpreter,
        "dup",
        word_dup,
        "Duplicate the top value on the data stack.",
        "value -- value value"
    );

    add_native_word!(
        interpreter,
        "drop",
        word_drop,
        "Discard the top value on the data stack.",
        "value --"
    );

    add_native_word!(
        interpreter,
        "swap",
        word_swap,
        "Swap the top 2 values on the data stack.",
        "a b -- b a"
    );

    add_native_word!(
        interpreter,
        "over",
        word_over,
        "Copy the second value over the top value.",
        "a b -- a b a"
    );

    add_native_word!(
        interpreter,
        "rot",
        word_rot,
        "Rotate the third value to the top of the stack.",
        "a b c -- b c a"
    );

    add_native_word!(
        interpreter,
        "nip",
        word_nip,
        "Discard the second value on the data stack.",
        "a b -- b"
    );

    add_native_word!(
        interpreter,
        "depth",
        word_depth,
        "Get the depth of the stack before calling this word.",
        "-- depth"
    );

    add_native_word!(
        interpreter,
        "clear",
        word_clear,
        "Drop every value on the data stack.",
        "--"
    );
}
