use std::fmt::{ self,
                Display,
                Formatter };
use crate::{ lang::code::{ write_code,
                           Code },
             runtime::data_structures::stack_effect::StackEffect };



/// Core value enumeration used by the interpreter.  Values are plain copies, anything nested lives
/// in the interpreter's arena and is shared by reference.  Nothing is mutated once built so values
/// can never form cycles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value<'a>
{
    /// A signed 64-bit integer.
    Int(i64),

    Bool(bool),

    /// An immutable string, stored without its quotes.
    String(&'a str),

    /// A name, written with a trailing colon in source.  Used to name words before defining them.
    Symbol(&'a str),

    /// An immutable sequence of values.
    Array(&'a [Value<'a>]),

    /// A callable run of instructions.
    Quotation(Code<'a>),

    /// Stack effect documentation.
    StackEffect(&'a StackEffect<'a>),

    /// The description of a failure that was caught by `recover`.
    Error(&'a str)
}


/// Pretty print the value in its canonical source form.
impl Display for Value<'_>
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result
    {
        match self
        {
            Value::Int(value)         => write!(f, "{}", value),
            Value::Bool(value)        => write!(f, "{}", if *value { "t" } else { "f" }),
            Value::String(value)      => write!(f, "\"{}\"", value),
            Value::Symbol(value)      => write!(f, "{}:", value),
            Value::Array(values) =>
                {
                    write!(f, "{{")?;

                    for value in values.iter()
                    {
                        write!(f, " {}", value)?;
                    }

                    write!(f, " }}")
                },
            Value::Quotation(code) =>
                {
                    write!(f, "[")?;
                    write_code(f, code)?;
                    write!(f, " ]")
                },
            Value::StackEffect(effect) => write!(f, "{}", effect),
            Value::Error(message)      => write!(f, "<error: {}>", message)
        }
    }
}


impl From<i64> for Value<'_>
{
    fn from(original: i64) -> Self
    {
        Value::Int(original)
    }
}


impl From<bool> for Value<'_>
{
    fn from(original: bool) -> Self
    {
        Value::Bool(original)
    }
}


impl<'a> From<&'a str> for Value<'a>
{
    fn from(original: &'a str) -> Self
    {
        Value::String(original)
    }
}


impl<'a> From<&'a [Value<'a>]> for Value<'a>
{
    fn from(original: &'a [Value<'a>]) -> Self
    {
        Value::Array(original)
    }
}


/// Convenience conversion for counts and depths.
impl From<usize> for Value<'_>
{
    fn from(original: usize) -> Self
    {
        Value::Int(original as i64)
    }
}


impl<'a> Value<'a>
{
    /// Treat the value as a condition.  Booleans are taken as is and integers are true when non
    /// zero.  Anything else can not be used as a condition.
    pub fn as_condition(&self) -> Option<bool>
    {
        match self
        {
            Value::Bool(value) => Some(*value),
            Value::Int(value)  => Some(*value != 0),
            _                  => None
        }
    }
}
