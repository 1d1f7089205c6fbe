use crate::{
    add_native_word,
    runtime::{data_structures::value::Value, error, interpreter::Interpreter},
};

fn word_true(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    interpreter.push(Value::Bool(true));
    Ok(())
}

fn word_false(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    interpreter.push(Value::Bool(false));
    Ok(())
}

pub fn register_constant_words(interpreter: &mut dyn Interpreter) {
    add_native_word!(interpreter, "t", word_true, "Push the value true.", "-- t");
    add_native_word!(interpreter, "f", word_false, "Push the value false.", "-- f");
}
