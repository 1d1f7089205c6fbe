use crate::{
    add_native_word,
    lang::code::pretty_print_code,
    runtime::{
        data_structures::{dictionary::WordDefinition, value::Value},
        error,
        interpreter::Interpreter,
    },
};
use tracing::{debug, trace};

/// Define a new compound word, or replace an existing one.  The stack effect is optional and only
/// consumed when it is actually on the stack.
///
/// Signature: `name effect? body -- `
fn word_define(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let body = interpreter.pop_as_quotation()?;

    let effect = match interpreter.peek() {
        Ok(Value::StackEffect(effect)) => {
            let _ = interpreter.pop()?;
            Some(effect)
        }
        _ => None,
    };

    let name = interpreter.pop_as_symbol()?;

    trace!(word = name, "body:\n{}", pretty_print_code(body));

    if interpreter
        .define_word(WordDefinition::compound(name, effect, body))
        .is_some()
    {
        debug!(word = name, "redefined word");
    } else {
        debug!(word = name, "defined word");
    }

    Ok(())
}

pub fn register_word_creation_words(interpreter: &mut dyn Interpreter) {
    add_native_word!(
        interpreter,
        ";",
        word_define,
        "Bind a quotation to a name as a new word, documenting it with an optional stack effect.",
        "name effect? body: ( -- ??? ) --"
    );
}
