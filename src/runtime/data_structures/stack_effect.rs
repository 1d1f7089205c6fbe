use std::fmt::{ self, Display, Formatter };



/// One named parameter of a stack effect.  A parameter can describe a quotation argument with a
/// nested effect of its own, written `quot: ( elem -- elem' )`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Parameter<'a>
{
    pub name: &'a str,
    pub effect: Option<&'a StackEffect<'a>>
}


impl<'a> Parameter<'a>
{
    pub fn new(name: &'a str) -> Parameter<'a>
    {
        Parameter { name, effect: None }
    }

    pub fn with_effect(name: &'a str, effect: &'a StackEffect<'a>) -> Parameter<'a>
    {
        Parameter { name, effect: Some(effect) }
    }
}


impl Display for Parameter<'_>
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result
    {
        match self.effect
        {
            Some(effect) => write!(f, "{}: {}", self.name, effect),
            None         => write!(f, "{}", self.name)
        }
    }
}



/// Documentation of what a word takes from and leaves on the stack.  Nothing checks it against
/// what the word really does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct StackEffect<'a>
{
    pub inputs: &'a [Parameter<'a>],
    pub outputs: &'a [Parameter<'a>]
}


impl<'a> StackEffect<'a>
{
    pub fn new(inputs: &'a [Parameter<'a>], outputs: &'a [Parameter<'a>]) -> StackEffect<'a>
    {
        StackEffect { inputs, outputs }
    }
}


/// Written back in source form, `( a b -- c )`.
impl Display for StackEffect<'_>
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result
    {
        write!(f, "(")?;

        for input in self.inputs
        {
            write!(f, " {}", input)?;
        }

        write!(f, " --")?;

        for output in self.outputs
        {
            write!(f, " {}", output)?;
        }

        write!(f, " )")
    }
}
