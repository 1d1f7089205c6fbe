/// Words that manipulate the data stack.
mod stack_words;

/// Simple constants.
mod constant_words;

/// Integer arithmetic, comparison and logic.
mod simple_arithmetic_words;

/// Words that run quotations conditionally or unconditionally.
mod control_words;

/// Words that create new words.
mod word_creation_words;

/// Words that catch and raise failures.
mod error_words;

/// Words that work with words.
mod word_words;

use crate::runtime::{
    built_ins::base_words::{
        constant_words::register_constant_words, control_words::register_control_words,
        error_words::register_error_words,
        simple_arithmetic_words::register_simple_arithmetic_words,
        stack_words::register_stack_words, word_creation_words::register_word_creation_words,
        word_words::register_word_words,
    },
    interpreter::Interpreter,
};

/// Called to register all of the core words of the language.
pub fn register_base_words(interpreter: &mut dyn Interpreter) {
    register_stack_words(interpreter);
    register_constant_words(interpreter);
    register_simple_arithmetic_words(interpreter);
    register_control_words(interpreter);
    register_word_creation_words(interpreter);
    register_error_words(interpreter);
    register_word_words(interpreter);
}
