use crate::runtime::data_structures::value::Value;
use std::fmt::{self, Display, Formatter};

/// The operations a compiled quotation is made of.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Op<'a> {
    /// Push a copy of the value onto the data stack.
    PushLiteral(Value<'a>),

    /// Look the name up in the dictionary and run the word found there.
    CallWord(&'a str),
}

/// Represents a single instruction along with the source line it was parsed from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Instruction<'a> {
    /// 1 based line in the source this instruction was generated from.
    pub line: usize,

    /// The operation to perform and its operand.
    pub op: Op<'a>,
}

/// Writes the instruction back out in source form, literals in their canonical form.
impl Display for Instruction<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match &self.op {
            Op::PushLiteral(value) => write!(f, "{}", value),
            Op::CallWord(name) => write!(f, "{}", name),
        }
    }
}

/// A run of instructions living in the interpreter's arena.  Top level statements, quotation
/// bodies and compound word bodies all take this form.
pub type Code<'a> = &'a [Instruction<'a>];

impl<'a> Instruction<'a> {
    /// Create a new instruction with a line and operation.
    pub fn new(line: usize, op: Op<'a>) -> Instruction<'a> {
        Instruction { line, op }
    }

    pub fn push_literal(line: usize, value: Value<'a>) -> Instruction<'a> {
        Instruction::new(line, Op::PushLiteral(value))
    }

    pub fn call_word(line: usize, name: &'a str) -> Instruction<'a> {
        Instruction::new(line, Op::CallWord(name))
    }
}

/// Write a run of instructions space separated, the way it would appear between `[` and `]`.
pub fn write_code(f: &mut Formatter, code: &[Instruction]) -> fmt::Result {
    for instruction in code {
        write!(f, " {}", instruction)?;
    }

    Ok(())
}

/// Pretty print the code one instruction per line for debugging purposes.
pub fn pretty_print_code(code: &[Instruction]) -> String {
    use std::fmt::Write;

    let mut result = String::with_capacity(code.len() * 24);

    for (index, instruction) in code.iter().enumerate() {
        let (name, operand) = match &instruction.op {
            Op::PushLiteral(value) => ("PushLiteral", value.to_string()),
            Op::CallWord(word) => ("CallWord", word.to_string()),
        };

        let _ = writeln!(
            &mut result,
            "{:4}: {:11} {}  (line {})",
            index, name, operand, instruction.line
        );
    }

    result
}
