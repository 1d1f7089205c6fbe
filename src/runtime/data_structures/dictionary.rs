use crate::{
    lang::code::{write_code, Code},
    runtime::{data_structures::stack_effect::StackEffect, error, interpreter::Interpreter},
};
use std::{
    collections::HashMap,
    fmt::{self, Debug, Display, Formatter},
};

/// A word implemented in Rust.  The handler manipulates the interpreter directly.
pub type NativeWord = for<'a> fn(&mut dyn Interpreter<'a>) -> error::Result<()>;

/// What running a word actually does.
#[derive(Clone, Copy)]
pub enum WordAction<'a> {
    /// The word is a native word written in Rust.
    Native(NativeWord),

    /// The word was defined by the user, its body lives in the arena.
    Compound(Code<'a>),
}

impl Debug for WordAction<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            WordAction::Native(_) => write!(f, "Native"),
            WordAction::Compound(code) => write!(f, "Compound({} instructions)", code.len()),
        }
    }
}

/// The information stored in the dictionary for each word.
#[derive(Clone, Copy, Debug)]
pub struct WordDefinition<'a> {
    /// The name of the word.
    pub name: &'a str,

    /// Documented stack effect, if one was given.
    pub effect: Option<&'a StackEffect<'a>>,

    /// A simple description of the word.  Empty for user defined words.
    pub description: &'a str,

    pub action: WordAction<'a>,
}

impl<'a> WordDefinition<'a> {
    pub fn native(
        name: &'a str,
        effect: Option<&'a StackEffect<'a>>,
        description: &'a str,
        handler: NativeWord,
    ) -> WordDefinition<'a> {
        WordDefinition {
            name,
            effect,
            description,
            action: WordAction::Native(handler),
        }
    }

    pub fn compound(
        name: &'a str,
        effect: Option<&'a StackEffect<'a>>,
        body: Code<'a>,
    ) -> WordDefinition<'a> {
        WordDefinition {
            name,
            effect,
            description: "",
            action: WordAction::Compound(body),
        }
    }
}

/// Write the word out the way it could be typed back in, or mark it as native.
impl Display for WordDefinition<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}:", self.name)?;

        if let Some(effect) = self.effect {
            write!(f, " {}", effect)?;
        }

        match self.action {
            WordAction::Native(_) => write!(f, " <native>"),
            WordAction::Compound(code) => {
                write!(f, " [")?;
                write_code(f, code)?;
                write!(f, " ] ;")
            }
        }
    }
}

/// The word dictionary used by the interpreter.  Names map to their current definition, defining
/// a name again simply replaces what was there.
#[derive(Debug, Default)]
pub struct Dictionary<'a> {
    words: HashMap<&'a str, WordDefinition<'a>>,
}

/// List the words sorted by name along with their stack effects and descriptions.
impl Display for Dictionary<'_> {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        let names = self.names();
        let max_size = names.iter().map(|name| name.len()).max().unwrap_or(0);

        writeln!(formatter, "{} words defined.", names.len())?;

        for name in names {
            let word = &self.words[name];
            let effect = word.effect.map(|effect| effect.to_string()).unwrap_or_default();

            write!(formatter, "\n{:width$}  {}", name, effect, width = max_size)?;

            if !word.description.is_empty() {
                write!(formatter, "  --  {}", word.description)?;
            }
        }

        Ok(())
    }
}

impl<'a> Dictionary<'a> {
    pub fn new() -> Dictionary<'a> {
        Dictionary {
            words: HashMap::new(),
        }
    }

    /// Insert a word, replacing any previous definition of the same name.  The replaced definition
    /// is handed back.
    pub fn put(
        &mut self,
        name: &'a str,
        definition: WordDefinition<'a>,
    ) -> Option<WordDefinition<'a>> {
        self.words.insert(name, definition)
    }

    /// Look a word up by name.
    pub fn get(&self, name: &str) -> Option<&WordDefinition<'a>> {
        self.words.get(name)
    }

    /// All of the defined names, sorted.
    pub fn names(&self) -> Vec<&'a str> {
        let mut names: Vec<&'a str> = self.words.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{lang::code::Instruction, runtime::data_structures::value::Value};

    #[test]
    fn put_replaces_existing_definition() {
        let first = [Instruction::call_word(1, "dup")];
        let second = [Instruction::call_word(2, "drop")];

        let mut dictionary = Dictionary::new();

        assert!(dictionary
            .put("w", WordDefinition::compound("w", None, &first))
            .is_none());
        assert!(dictionary
            .put("w", WordDefinition::compound("w", None, &second))
            .is_some());

        let found = dictionary.get("w").expect("word should be defined");

        match found.action {
            WordAction::Compound(code) => assert_eq!(code, &second[..]),
            WordAction::Native(_) => panic!("expected a compound word"),
        }

        assert_eq!(dictionary.names(), vec!["w"]);
    }

    #[test]
    fn get_missing_is_none() {
        let dictionary = Dictionary::new();

        assert!(dictionary.get("nothing").is_none());
    }

    #[test]
    fn names_are_sorted() {
        let mut dictionary = Dictionary::new();

        for name in ["b", "c", "a"] {
            dictionary.put(name, WordDefinition::compound(name, None, &[]));
        }

        assert_eq!(dictionary.names(), vec!["a", "b", "c"]);
    }

    #[test]
    fn compound_definitions_print_as_source() {
        let body = [
            Instruction::push_literal(1, Value::Int(2)),
            Instruction::call_word(1, "+"),
        ];
        let definition = WordDefinition::compound("add2", None, &body);

        assert_eq!(definition.to_string(), "add2: [ 2 + ] ;");
    }
}
