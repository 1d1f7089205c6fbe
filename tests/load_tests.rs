// Loading source files with `load`, directly and through the search paths.

use bumpalo::Bump;
use quotient::config::Config;
use quotient::runtime::built_ins::register_builtin_words;
use quotient::runtime::error::Error;
use quotient::runtime::interpreter::context::Context;
use quotient::runtime::interpreter::{CodeManagement, InterpreterStack, WordManagement};
use quotient::runtime::data_structures::value::Value;
use std::fs;
use std::io;
use std::path::Path;

fn write_source(directory: &Path, name: &str, source: &str) -> String {
    let path = directory.join(name);

    fs::write(&path, source).expect("write source file");
    path.to_string_lossy().into_owned()
}

#[test]
fn load_defines_words_from_a_file() {
    let directory = tempfile::tempdir().expect("temp dir");
    let path = write_source(
        directory.path(),
        "lib.qt",
        "answer: ( -- n ) [\n  40 2 +\n] ;\n",
    );

    let arena = Bump::new();
    let mut context = Context::with_output(&arena, Config::default(), io::sink());

    register_builtin_words(&mut context);

    context
        .process_source(&format!("\"{}\" load answer", path))
        .expect("load and call");

    assert_eq!(context.pop(), Ok(Value::Int(42)));
    assert!(context.find_word("answer").is_some());
}

#[test]
fn load_searches_the_include_paths() {
    let directory = tempfile::tempdir().expect("temp dir");
    write_source(directory.path(), "found-by-search.qt", "7\n");

    let arena = Bump::new();
    let config = Config {
        search_paths: vec![directory.path().to_path_buf()],
        ..Config::default()
    };
    let mut context = Context::with_output(&arena, config, io::sink());

    register_builtin_words(&mut context);

    context
        .process_source("\"found-by-search.qt\" load")
        .expect("load through search path");

    assert_eq!(context.pop(), Ok(Value::Int(7)));
}

#[test]
fn missing_files_are_reported() {
    let arena = Bump::new();
    let mut context = Context::with_output(&arena, Config::default(), io::sink());

    register_builtin_words(&mut context);

    assert_eq!(
        context.process_source("\"no-such-file-anywhere.qt\" load"),
        Err(Error::FileNotFound)
    );
    assert_eq!(context.error_trail().len(), 1);
    assert_eq!(context.error_trail()[0].word, "load");
}

#[test]
fn failures_inside_a_loaded_file_propagate() {
    let directory = tempfile::tempdir().expect("temp dir");
    let broken = write_source(directory.path(), "broken.qt", "1\n[ 2\n");
    let failing = write_source(directory.path(), "failing.qt", "1\n\ndrop drop\n");

    let arena = Bump::new();
    let mut context = Context::with_output(&arena, Config::default(), io::sink());

    register_builtin_words(&mut context);

    assert_eq!(
        context.process_source(&format!("\"{}\" load", broken)),
        Err(Error::UnmatchedOpenBracket)
    );

    context.clear_error_trail();
    context.clear_stack();

    assert_eq!(
        context.process_source(&format!("\"{}\" load", failing)),
        Err(Error::StackUnderflow)
    );

    let trail = context.error_trail();

    assert_eq!(trail.len(), 2);
    assert_eq!((trail[0].word, trail[0].line), ("drop", 3));
    assert_eq!(trail[1].word, "load");
}

#[test]
fn quit_ends_a_loaded_file_early() {
    let directory = tempfile::tempdir().expect("temp dir");
    let path = write_source(directory.path(), "early.qt", "1\n.q\n2\n");

    let arena = Bump::new();
    let mut context = Context::with_output(&arena, Config::default(), io::sink());

    register_builtin_words(&mut context);

    context
        .process_source(&format!("\"{}\" load", path))
        .expect("load");

    assert_eq!(context.stack().as_slice(), &[Value::Int(1)]);
}
