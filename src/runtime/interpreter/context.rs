use crate::{
    config::Config,
    lang::{
        code::{Code, Op},
        parsing::parse_signature,
        statement::{Statement, StatementBuffer},
    },
    runtime::{
        data_structures::{
            dictionary::{Dictionary, NativeWord, WordAction, WordDefinition},
            value::Value,
            value_stack::ValueStack,
        },
        error::{self, Error, ErrorDetail},
        interpreter::{CodeManagement, Interpreter, InterpreterStack, WordManagement},
    },
};
use bumpalo::Bump;
use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::PathBuf,
};
use tracing::{debug, trace, warn};

/// The line that ends a batch run early.
pub const QUIT_COMMAND: &str = ".q";

/// The interpreter session.  Owns the data stack, the dictionary and the error trail, and borrows
/// the arena that everything parsed or defined during the session is allocated in.
pub struct Context<'a> {
    arena: &'a Bump,
    config: Config,

    /// The data stack used by the interpreter.
    stack: ValueStack<'a>,

    /// The dictionary of words known by the interpreter.
    dictionary: Dictionary<'a>,

    /// Failed word calls recorded while the current error unwound, innermost first.
    error_trail: Vec<ErrorDetail<'a>>,

    output: Box<dyn Write + 'a>,
}

impl<'a> Context<'a> {
    /// Create a session that writes to standard output.  No words are registered yet.
    pub fn new(arena: &'a Bump, config: Config) -> Context<'a> {
        Context::with_output(arena, config, io::stdout())
    }

    /// Create a session that writes its output somewhere other than standard output.
    pub fn with_output<W: Write + 'a>(arena: &'a Bump, config: Config, output: W) -> Context<'a> {
        Context {
            arena,
            config,
            stack: ValueStack::new(),
            dictionary: Dictionary::new(),
            error_trail: Vec::with_capacity(16),
            output: Box::new(output),
        }
    }

    /// Drive lines from a reader through a statement buffer, running each statement as soon as
    /// it is complete.  A `.q` line stops early.  The first error, parse or runtime, ends the run
    /// and is returned.
    pub fn run_reader<R: BufRead>(&mut self, reader: R) -> error::Result<()> {
        let mut statement = StatementBuffer::new(self.config.max_statement_bytes);

        for line in reader.lines() {
            let line = line?;

            if !statement.is_pending() && line.trim() == QUIT_COMMAND {
                return Ok(());
            }

            match statement.feed_line(self.arena, &line)? {
                Statement::Incomplete => (),
                Statement::Complete(code) => {
                    statement.reset();
                    self.execute_code(code)?;
                }
            }
        }

        let code = statement.flush(self.arena)?;
        self.execute_code(code)
    }
}

impl<'a> InterpreterStack<'a> for Context<'a> {
    fn stack(&self) -> &ValueStack<'a> {
        &self.stack
    }

    fn push(&mut self, value: Value<'a>) {
        self.stack.push(value);
    }

    fn pop(&mut self) -> error::Result<Value<'a>> {
        self.stack.pop()
    }

    fn clear_stack(&mut self) {
        self.stack.clear();
    }
}

impl<'a> CodeManagement<'a> for Context<'a> {
    fn arena(&self) -> &'a Bump {
        self.arena
    }

    fn execute_code(&mut self, code: Code<'a>) -> error::Result<()> {
        for instruction in code {
            match instruction.op {
                Op::PushLiteral(value) => self.stack.push(value),
                Op::CallWord(name) => {
                    trace!(word = name, line = instruction.line, "calling word");

                    if let Err(error) = self.execute_word_named(name) {
                        self.error_trail
                            .push(ErrorDetail::new(error.clone(), name, instruction.line));
                        return Err(error);
                    }
                }
            }
        }

        Ok(())
    }

    fn process_source(&mut self, source: &str) -> error::Result<()> {
        self.run_reader(source.as_bytes())
    }

    fn process_source_file(&mut self, path: &str) -> error::Result<()> {
        let full_path = self.find_file(path)?;

        debug!(path = %full_path.display(), "loading source file");

        let file = File::open(&full_path)?;
        self.run_reader(BufReader::new(file))
    }

    fn search_paths(&self) -> &[PathBuf] {
        &self.config.search_paths
    }
}

impl<'a> WordManagement<'a> for Context<'a> {
    fn add_native_word(
        &mut self,
        name: &'static str,
        handler: NativeWord,
        description: &'static str,
        signature: &str,
    ) {
        let effect = match parse_signature(self.arena, &format!("( {} )", signature)) {
            Ok(effect) => Some(effect),
            Err(error) => {
                warn!(word = name, %error, "ignoring unparsable word signature");
                None
            }
        };

        self.dictionary.put(
            name,
            WordDefinition::native(name, effect, description, handler),
        );
    }

    fn define_word(&mut self, definition: WordDefinition<'a>) -> Option<WordDefinition<'a>> {
        self.dictionary.put(definition.name, definition)
    }

    fn dictionary(&self) -> &Dictionary<'a> {
        &self.dictionary
    }

    fn execute_word_named(&mut self, name: &str) -> error::Result<()> {
        let Some(definition) = self.dictionary.get(name).copied() else {
            return Err(Error::UnknownWord);
        };

        match definition.action {
            WordAction::Native(handler) => handler(self),
            WordAction::Compound(code) => self.execute_code(code),
        }
    }

    fn error_trail(&self) -> &[ErrorDetail<'a>] {
        &self.error_trail
    }

    fn truncate_error_trail(&mut self, length: usize) {
        self.error_trail.truncate(length);
    }
}

impl<'a> Interpreter<'a> for Context<'a> {
    fn write_output(&mut self, text: &str) -> error::Result<()> {
        self.output
            .write_all(text.as_bytes())
            .and_then(|_| self.output.flush())
            .map_err(|_| Error::OutputError)
    }

    fn config(&self) -> &Config {
        &self.config
    }
}
