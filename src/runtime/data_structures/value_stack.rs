use crate::runtime::{
    data_structures::value::Value,
    error::{self, Error},
};
use std::fmt::{self, Display, Formatter};

/// The data stack of values managed by the interpreter.  A plain LIFO store.
#[derive(Clone, Debug, Default)]
pub struct ValueStack<'a> {
    items: Vec<Value<'a>>,
}

impl<'a> ValueStack<'a> {
    pub fn new() -> ValueStack<'a> {
        ValueStack { items: Vec::new() }
    }

    /// Push a value onto the top of the stack.
    pub fn push(&mut self, value: Value<'a>) {
        self.items.push(value);
    }

    /// Remove and return the top value, failing with a stack underflow when empty.
    pub fn pop(&mut self) -> error::Result<Value<'a>> {
        self.items.pop().ok_or(Error::StackUnderflow)
    }

    /// Return the top value without removing it.
    pub fn peek(&self) -> error::Result<Value<'a>> {
        self.items.last().copied().ok_or(Error::StackUnderflow)
    }

    pub fn depth(&self) -> usize {
        self.items.len()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// The stack's contents, bottom first.
    pub fn as_slice(&self) -> &[Value<'a>] {
        &self.items
    }
}

/// Dump the stack bottom to top, `[ 1 2 "three" ]`.
impl Display for ValueStack<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "[")?;

        for value in self.items.iter() {
            write!(f, " {}", value)?;
        }

        write!(f, " ]")
    }
}
