// End to end tests, source text in and printed output, stack contents or errors out.

use bumpalo::Bump;
use pretty_assertions::assert_eq;
use quotient::config::Config;
use quotient::runtime::built_ins::register_builtin_words;
use quotient::runtime::error::{Error, ErrorReport, Result};
use quotient::runtime::interpreter::context::Context;
use quotient::runtime::interpreter::{CodeManagement, InterpreterStack, WordManagement};
use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;
use test_case::test_case;

/// Output sink the tests can read back after the interpreter is done with it.
#[derive(Clone, Default)]
struct SharedOutput(Rc<RefCell<Vec<u8>>>);

impl Write for SharedOutput {
    fn write(&mut self, buffer: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buffer);
        Ok(buffer.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl SharedOutput {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

/// What running a piece of source left behind.
struct Outcome {
    result: Result<()>,
    output: String,
    stack: String,
    report: Option<String>,
}

fn eval(source: &str) -> Outcome {
    let arena = Bump::new();
    let output = SharedOutput::default();
    let mut context = Context::with_output(&arena, Config::default(), output.clone());

    register_builtin_words(&mut context);

    let result = context.process_source(source);
    let report = result
        .as_ref()
        .err()
        .map(|error| ErrorReport::new(error, context.error_trail()).to_string());

    Outcome {
        result,
        output: output.contents(),
        stack: context.stack().to_string(),
        report,
    }
}

#[test_case("1 2 + .", "3\n"; "add and print")]
#[test_case("add2: ( n -- n ) [ 2 + ] ; 5 add2 .", "7\n"; "define and call")]
#[test_case("[ 1 2 + ] call .", "3\n"; "call quotation")]
#[test_case("t [ 1 ] [ 2 ] if .", "1\n"; "if true")]
#[test_case("f [ 1 ] [ 2 ] if .", "2\n"; "if false")]
#[test_case("0 [ 1 ] [ 2 ] if .", "2\n"; "if zero is false")]
#[test_case("-3 [ 1 ] [ 2 ] if .", "1\n"; "if non zero is true")]
#[test_case("[ drop ] [ drop 99 ] recover .", "99\n"; "recover from underflow")]
#[test_case("[ \"boom\" throw ] [ . ] recover", "<error: boom>\n"; "recover sees error value")]
#[test_case("[ nothing-here ] [ . ] recover", "<error: UnknownWord>\n"; "error value is the kind name")]
#[test_case("\"hi there\" print cr", "hi there\n"; "print raw string")]
#[test_case("{ 1 a t \"s\" } .", "{ 1 a: t \"s\" }\n"; "array literal")]
#[test_case("[ 2 + ] .", "[ 2 + ]\n"; "quotation literal")]
#[test_case("( a b: ( -- c ) -- d ) .", "( a b: ( -- c ) -- d )\n"; "stack effect literal")]
#[test_case("7 2 / . 7 2 mod . -7 2 / .", "3\n1\n-3\n"; "division truncates")]
#[test_case("3 4 < . 3 4 > . 4 4 = .", "t\nf\nt\n"; "comparisons")]
#[test_case("t f and . t f or . f not . 0 not .", "f\nt\nt\nt\n"; "logic")]
#[test_case("6 7 * 2 - .", "40\n"; "multiply and subtract")]
#[test_case("w: [ 1 ] ; w: [ 2 ] ; w .", "2\n"; "redefinition replaces")]
#[test_case("sq: ( n -- n ) [ dup * ] ; 4 sq .", "16\n"; "square")]
#[test_case("sq: ( n -- n ) [ dup * ] ; sq: see", "sq: ( n -- n ) [ dup * ] ;\n"; "see compound")]
#[test_case("dup: see", "dup: ( value -- value value ) <native>\n"; "see native")]
#[test_case("1 .\n.q\n2 .", "1\n"; "quit stops processing")]
#[test_case("sum: [\n  1 2 +\n] ;\nsum .", "3\n"; "multi line statement")]
#[test_case("1 \\ comment 5 .\n.s", "[ 1 ]\n"; "comment to end of line")]
#[test_case("1 \\\tcomment 5 .\n.s", "[ 1 ]\n"; "tab after backslash is a comment")]
fn prints(source: &str, expected: &str) {
    let outcome = eval(source);

    assert_eq!(outcome.result, Ok(()));
    assert_eq!(outcome.output, expected);
}

#[test_case("1 2 swap", "[ 2 1 ]"; "swap")]
#[test_case("1 2 over", "[ 1 2 1 ]"; "over")]
#[test_case("1 2 3 rot", "[ 2 3 1 ]"; "rot")]
#[test_case("1 2 nip depth", "[ 2 1 ]"; "nip and depth")]
#[test_case("1 2 clear depth", "[ 0 ]"; "clear")]
#[test_case("\"a\" dup", "[ \"a\" \"a\" ]"; "dup string")]
#[test_case("t [ 5 ] when", "[ 5 ]"; "when true")]
#[test_case("f [ 5 ] when", "[ ]"; "when false")]
#[test_case("f [ 5 ] unless", "[ 5 ]"; "unless false")]
#[test_case("t [ 5 ] unless", "[ ]"; "unless true")]
#[test_case("[ 1 ] [ 2 ] recover", "[ 1 ]"; "recover handler skipped on success")]
#[test_case("5 [ 1 2 + nothing-here 9 ] ignore-errors", "[ 5 3 ]"; "ignore errors keeps partial work")]
#[test_case("[ 1 2 ] ignore-errors", "[ 1 2 ]"; "ignore errors success")]
#[test_case("name: ( a -- b ) [ ] ; 4 name", "[ 4 ]"; "empty body")]
#[test_case("( a -- ) drop", "[ ]"; "stack effect value is droppable")]
fn leaves_stack(source: &str, expected: &str) {
    let outcome = eval(source);

    assert_eq!(outcome.result, Ok(()));
    assert_eq!(outcome.stack, expected);
}

#[test_case("1 0 /", Error::DivisionByZero; "divide by zero")]
#[test_case("1 0 mod", Error::DivisionByZero; "mod by zero")]
#[test_case("drop", Error::StackUnderflow; "underflow")]
#[test_case("nothing-here", Error::UnknownWord; "unknown word")]
#[test_case("1 \"a\" +", Error::TypeError; "add string")]
#[test_case("\"x\" [ 1 ] [ 2 ] if", Error::TypeError; "string condition")]
#[test_case("1 call", Error::TypeError; "call non quotation")]
#[test_case("\"x\" [ 1 ] ;", Error::TypeError; "define without symbol")]
#[test_case("[ 1 ] ;", Error::StackUnderflow; "define without name")]
#[test_case("\"msg\" throw", Error::Other("msg".to_string()); "throw")]
#[test_case("1 ]", Error::UnmatchedCloseBracket; "stray close bracket")]
#[test_case("}", Error::UnmatchedCloseBrace; "stray close brace")]
#[test_case(")", Error::UnmatchedCloseParen; "stray close paren")]
#[test_case("[ 1", Error::UnmatchedOpenBracket; "unclosed at end of input")]
#[test_case("( ( a ) )", Error::MalformedStackEffect; "nested effect without name")]
#[test_case("( a -- b -- c )", Error::MalformedStackEffect; "two separators")]
#[test_case("wat: see", Error::UnknownWord; "see unknown word")]
fn fails_with(source: &str, expected: Error) {
    assert_eq!(eval(source).result, Err(expected));
}

#[test]
fn failures_do_not_roll_back_the_stack() {
    let outcome = eval("1 2 drop drop drop 3");

    assert_eq!(outcome.result, Err(Error::StackUnderflow));
    assert_eq!(outcome.stack, "[ ]");
}

#[test]
fn trail_lists_calls_innermost_first() {
    let outcome = eval("inner: [ drop ] ;\nouter: [ inner ] ;\nouter");

    assert_eq!(
        outcome.report.as_deref(),
        Some(
            "Error: StackUnderflow\n  at drop (line 1)\n  at inner (line 2)\n  at outer (line 3)"
        )
    );
}

#[test]
fn recovered_failures_leave_no_trail() {
    let arena = Bump::new();
    let mut context = Context::with_output(&arena, Config::default(), io::sink());

    register_builtin_words(&mut context);

    assert_eq!(context.process_source("[ drop ] [ drop ] recover"), Ok(()));
    assert!(context.error_trail().is_empty());

    assert_eq!(context.process_source("[ drop ] ignore-errors"), Ok(()));
    assert!(context.error_trail().is_empty());
}

#[test]
fn definitions_outlive_their_source_text() {
    let arena = Bump::new();
    let mut context = Context::with_output(&arena, Config::default(), io::sink());

    register_builtin_words(&mut context);

    {
        let source = String::from("greeting: [ \"hello\" ] ;");
        context.process_source(&source).expect("define");
    }

    context.process_source("greeting").expect("call");
    assert_eq!(context.pop().map(|value| value.to_string()), Ok("\"hello\"".to_string()));
}

#[test]
fn word_listing_includes_descriptions() {
    let outcome = eval(".w");

    assert_eq!(outcome.result, Ok(()));
    assert!(outcome.output.contains("words defined."));
    assert!(outcome.output.contains("recover"));
    assert!(outcome.output.contains("Add two numbers."));
}

#[test]
fn stack_dump_is_not_destructive() {
    let outcome = eval("1 \"two\" three: .s");

    assert_eq!(outcome.output, "[ 1 \"two\" three: ]\n");
    assert_eq!(outcome.stack, "[ 1 \"two\" three: ]");
}

#[test]
fn overlong_statements_are_refused() {
    let arena = Bump::new();
    let config = Config {
        max_statement_bytes: 16,
        ..Config::default()
    };
    let mut context = Context::with_output(&arena, config, io::sink());

    register_builtin_words(&mut context);

    assert_eq!(
        context.process_source("[ 1 2 3 4 5 6 7 8 9 10 ]"),
        Err(Error::StatementTooLong)
    );
}
