use crate::{
    add_native_word,
    runtime::{
        error::{self, Error},
        interpreter::Interpreter,
    },
};

/// Print all of the defined words along with their stack effects and descriptions.
///
/// Signature: ` -- `
fn word_print_dictionary(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let listing = format!("{}\n", interpreter.dictionary());

    interpreter.write_output(&listing)
}

/// Print how a word is defined.  Compound words are printed as source, native words are only
/// marked as such.
///
/// Signature: `name -- `
fn word_see(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let name = interpreter.pop_as_symbol()?;
    let definition = interpreter.find_word(name).ok_or(Error::UnknownWord)?;
    let text = format!("{}\n", definition);

    interpreter.write_output(&text)
}

pub fn register_word_words(interpreter: &mut dyn Interpreter) {
    add_native_word!(
        interpreter,
        ".w",
        word_print_dictionary,
        "Print out the words in the dictionary.",
        "--"
    );

    add_native_word!(
        interpreter,
        "see",
        word_see,
        "Print the definition of the named word.",
        "name --"
    );
}
