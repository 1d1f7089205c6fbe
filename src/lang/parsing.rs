use crate::{
    lang::{
        code::{Code, Instruction},
        tokenizing::{Lexer, Token, TokenKind},
    },
    runtime::{
        data_structures::{
            stack_effect::{Parameter, StackEffect},
            value::Value,
        },
        error::{self, Error},
    },
};
use bumpalo::Bump;

/// What a single token turned into once it was classified.
enum Element<'a> {
    Literal(Value<'a>),
    Word(&'a str),
}

/// Attempt to read the text as a base 10 signed integer.  Only an optional leading `-` followed by
/// digits qualifies, and the value must fit in 64 bits.
fn parse_integer(text: &str) -> Option<i64> {
    let digits = text.strip_prefix('-').unwrap_or(text);

    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }

    text.parse().ok()
}

/// The text between the quotes if the token is a complete string literal.
fn string_contents(text: &str) -> Option<&str> {
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        Some(&text[1..text.len() - 1])
    } else {
        None
    }
}

/// The name of a symbol literal, `name:`, with the colon removed.
fn symbol_name(text: &str) -> Option<&str> {
    if text.len() > 1 {
        text.strip_suffix(':')
    } else {
        None
    }
}

/// Recursive descent parser turning a token stream into code.  Everything the parser keeps is
/// copied into the arena so it outlives the text it came from.
///
/// `[`, `{` and `(` left open when the tokens run out are reported with the `UnmatchedOpen*`
/// errors, which callers can treat as a request for more input.  Closing tokens without a matching
/// open at their level are always hard errors.
pub struct Parser<'a, I>
where
    I: Iterator<Item = Token>,
{
    arena: &'a Bump,
    tokens: I,
}

impl<'a, I> Parser<'a, I>
where
    I: Iterator<Item = Token>,
{
    pub fn new(arena: &'a Bump, tokens: I) -> Self {
        Parser { arena, tokens }
    }

    /// Next meaningful token, comments and new lines are skipped.
    fn next_token(&mut self) -> Option<Token> {
        self.tokens
            .by_ref()
            .find(|token| token.kind == TokenKind::Word)
    }

    /// Parse until the tokens are exhausted, producing the code for a whole statement or file.
    pub fn parse_top_level(&mut self) -> error::Result<Code<'a>> {
        let mut code = Vec::new();

        while let Some(token) = self.next_token() {
            match token.text.as_str() {
                "]" => return Err(Error::UnmatchedCloseBracket),
                "}" => return Err(Error::UnmatchedCloseBrace),
                ")" => return Err(Error::UnmatchedCloseParen),
                _ => code.push(self.parse_instruction(&token)?),
            }
        }

        Ok(self.arena.alloc_slice_copy(&code))
    }

    /// Parse the body of a quotation.  The opening `[` has already been consumed, parsing stops at
    /// the `]` matching it.
    pub fn parse_quotation(&mut self) -> error::Result<Code<'a>> {
        let mut code = Vec::new();

        loop {
            let token = self.next_token().ok_or(Error::UnmatchedOpenBracket)?;

            match token.text.as_str() {
                "]" => return Ok(self.arena.alloc_slice_copy(&code)),
                "}" => return Err(Error::UnmatchedCloseBrace),
                ")" => return Err(Error::UnmatchedCloseParen),
                _ => code.push(self.parse_instruction(&token)?),
            }
        }
    }

    /// Parse the contents of an array literal.  The opening `{` has already been consumed.  Arrays
    /// only hold data, so bare words become symbols, except `t` and `f` which are booleans.
    pub fn parse_array(&mut self) -> error::Result<&'a [Value<'a>]> {
        let mut values = Vec::new();

        loop {
            let token = self.next_token().ok_or(Error::UnmatchedOpenBrace)?;

            let value = match token.text.as_str() {
                "}" => return Ok(self.arena.alloc_slice_copy(&values)),
                "]" => return Err(Error::UnmatchedCloseBracket),
                ")" => return Err(Error::UnmatchedCloseParen),
                "t" => Value::Bool(true),
                "f" => Value::Bool(false),
                _ => match self.parse_element(&token)? {
                    Element::Literal(value) => value,
                    Element::Word(name) => Value::Symbol(name),
                },
            };

            values.push(value);
        }
    }

    /// Parse a stack effect.  The opening `(` has already been consumed.
    ///
    /// The most recent parameter name is held back until something decides where it goes.  A `(`
    /// attaches a nested effect to it, `--` and `)` commit it to the current side.
    pub fn parse_stack_effect(&mut self) -> error::Result<&'a StackEffect<'a>> {
        let mut inputs: Vec<Parameter<'a>> = Vec::new();
        let mut outputs: Vec<Parameter<'a>> = Vec::new();
        let mut in_outputs = false;
        let mut pending: Option<&'a str> = None;

        loop {
            let token = self.next_token().ok_or(Error::UnmatchedOpenParen)?;
            let current = if in_outputs { &mut outputs } else { &mut inputs };

            match token.text.as_str() {
                ")" => {
                    if let Some(name) = pending.take() {
                        current.push(Parameter::new(name));
                    }

                    break;
                }

                "--" => {
                    if in_outputs {
                        return Err(Error::MalformedStackEffect);
                    }

                    if let Some(name) = pending.take() {
                        current.push(Parameter::new(name));
                    }

                    in_outputs = true;
                }

                "(" => {
                    let name = pending.take().ok_or(Error::MalformedStackEffect)?;
                    let nested = self.parse_stack_effect()?;

                    current.push(Parameter::with_effect(name, nested));
                }

                "]" => return Err(Error::UnmatchedCloseBracket),
                "}" => return Err(Error::UnmatchedCloseBrace),
                "[" | "{" => return Err(Error::MalformedStackEffect),

                text => {
                    if let Some(name) = pending.take() {
                        current.push(Parameter::new(name));
                    }

                    let name: &'a str = self.arena.alloc_str(symbol_name(text).unwrap_or(text));
                    pending = Some(name);
                }
            }
        }

        let inputs = self.arena.alloc_slice_copy(&inputs);
        let outputs = self.arena.alloc_slice_copy(&outputs);

        Ok(self.arena.alloc(StackEffect::new(inputs, outputs)))
    }

    /// Turn a token that is not a closing token into an instruction.
    fn parse_instruction(&mut self, token: &Token) -> error::Result<Instruction<'a>> {
        let line = token.line();

        Ok(match self.parse_element(token)? {
            Element::Literal(value) => Instruction::push_literal(line, value),
            Element::Word(name) => Instruction::call_word(line, name),
        })
    }

    /// Classify a token.  Opening tokens recurse into their nested parsers.
    fn parse_element(&mut self, token: &Token) -> error::Result<Element<'a>> {
        let text = token.text.as_str();

        let element = match text {
            "[" => Element::Literal(Value::Quotation(self.parse_quotation()?)),
            "{" => Element::Literal(Value::Array(self.parse_array()?)),
            "(" => Element::Literal(Value::StackEffect(self.parse_stack_effect()?)),

            _ => {
                if let Some(number) = parse_integer(text) {
                    Element::Literal(Value::Int(number))
                } else if let Some(contents) = string_contents(text) {
                    Element::Literal(Value::String(self.arena.alloc_str(contents)))
                } else if let Some(name) = symbol_name(text) {
                    Element::Literal(Value::Symbol(self.arena.alloc_str(name)))
                } else {
                    Element::Word(self.arena.alloc_str(text))
                }
            }
        };

        Ok(element)
    }
}

/// Parse a whole source text whose first line is numbered `line`.
pub fn parse_source<'a>(arena: &'a Bump, source: &str, line: usize) -> error::Result<Code<'a>> {
    Parser::new(arena, Lexer::new_at_line(source, line)).parse_top_level()
}

/// Parse a word signature such as `( a b -- c )` into a stack effect.  Used when registering
/// native words.
pub fn parse_signature<'a>(arena: &'a Bump, signature: &str) -> error::Result<&'a StackEffect<'a>> {
    let mut parser = Parser::new(arena, Lexer::new(signature));

    match parser.next_token() {
        Some(token) if token.is("(") => (),
        _ => return Err(Error::MalformedStackEffect),
    }

    let effect = parser.parse_stack_effect()?;

    if parser.next_token().is_some() {
        return Err(Error::MalformedStackEffect);
    }

    Ok(effect)
}
