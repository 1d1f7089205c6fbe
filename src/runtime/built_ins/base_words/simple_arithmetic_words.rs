use crate::{
    add_native_word,
    runtime::{
        data_structures::value::Value,
        error::{self, Error},
        interpreter::Interpreter,
    },
};

/// Pop the two integer operands of a binary word, `a` below `b`.
fn pop_int_pair(interpreter: &mut dyn Interpreter) -> error::Result<(i64, i64)> {
    let b = interpreter.pop_as_int()?;
    let a = interpreter.pop_as_int()?;

    Ok((a, b))
}

/// Pop the two condition operands of a logic word, `a` below `b`.
fn pop_bool_pair(interpreter: &mut dyn Interpreter) -> error::Result<(bool, bool)> {
    let b = interpreter.pop_as_bool()?;
    let a = interpreter.pop_as_bool()?;

    Ok((a, b))
}

fn word_add(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let (a, b) = pop_int_pair(interpreter)?;

    interpreter.push(Value::Int(a.wrapping_add(b)));
    Ok(())
}

fn word_subtract(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let (a, b) = pop_int_pair(interpreter)?;

    interpreter.push(Value::Int(a.wrapping_sub(b)));
    Ok(())
}

fn word_multiply(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let (a, b) = pop_int_pair(interpreter)?;

    interpreter.push(Value::Int(a.wrapping_mul(b)));
    Ok(())
}

/// Truncating integer division.
///
/// Signature: `a b -- quotient`
fn word_divide(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let (a, b) = pop_int_pair(interpreter)?;

    if b == 0 {
        return Err(Error::DivisionByZero);
    }

    interpreter.push(Value::Int(a.wrapping_div(b)));
    Ok(())
}

/// Remainder of truncating division, takes the sign of the dividend.
///
/// Signature: `a b -- remainder`
fn word_mod(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let (a, b) = pop_int_pair(interpreter)?;

    if b == 0 {
        return Err(Error::DivisionByZero);
    }

    interpreter.push(Value::Int(a.wrapping_rem(b)));
    Ok(())
}

fn word_equal(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let (a, b) = pop_int_pair(interpreter)?;

    interpreter.push(Value::Bool(a == b));
    Ok(())
}

fn word_less_than(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let (a, b) = pop_int_pair(interpreter)?;

    interpreter.push(Value::Bool(a < b));
    Ok(())
}

fn word_greater_than(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let (a, b) = pop_int_pair(interpreter)?;

    interpreter.push(Value::Bool(a > b));
    Ok(())
}

fn word_not(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let value = interpreter.pop_as_bool()?;

    interpreter.push(Value::Bool(!value));
    Ok(())
}

fn word_and(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let (a, b) = pop_bool_pair(interpreter)?;

    interpreter.push(Value::Bool(a && b));
    Ok(())
}

fn word_or(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let (a, b) = pop_bool_pair(interpreter)?;

    interpreter.push(Value::Bool(a || b));
    Ok(())
}

pub fn register_simple_arithmetic_words(interpreter: &mut dyn Interpreter) {
    add_native_word!(interpreter, "+", word_add, "Add two numbers.", "a b -- sum");

    add_native_word!(
        interpreter,
        "-",
        word_subtract,
        "Subtract the top number from the one below it.",
        "a b -- difference"
    );

    add_native_word!(
        interpreter,
        "*",
        word_multiply,
        "Multiply two numbers.",
        "a b -- product"
    );

    add_native_word!(
        interpreter,
        "/",
        word_divide,
        "Divide the second number by the top number, truncating.",
        "a b -- quotient"
    );

    add_native_word!(
        interpreter,
        "mod",
        word_mod,
        "Remainder of dividing the second number by the top number.",
        "a b -- remainder"
    );

    add_native_word!(
        interpreter,
        "=",
        word_equal,
        "Are the two numbers equal?",
        "a b -- bool"
    );

    add_native_word!(
        interpreter,
        "<",
        word_less_than,
        "Is the second number less than the top number?",
        "a b -- bool"
    );

    add_native_word!(
        interpreter,
        ">",
        word_greater_than,
        "Is the second number greater than the top number?",
        "a b -- bool"
    );

    add_native_word!(
        interpreter,
        "not",
        word_not,
        "Logically invert a condition.",
        "bool -- bool"
    );

    add_native_word!(
        interpreter,
        "and",
        word_and,
        "Are both conditions true?",
        "a b -- bool"
    );

    add_native_word!(
        interpreter,
        "or",
        word_or,
        "Is either condition true?",
        "a b -- bool"
    );
}
