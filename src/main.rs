use bumpalo::Bump;
use clap::Parser;
use quotient::{
    config::Config,
    lang::statement::{Statement, StatementBuffer},
    runtime::{
        built_ins::register_builtin_words,
        error::{Error, ErrorReport},
        interpreter::{
            CodeManagement, Interpreter, WordManagement,
            context::{Context, QUIT_COMMAND},
        },
    },
};
use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    process::ExitCode,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, `warn` when unset.
const LOG_ENV: &str = "QUOTIENT_LOG";

/// Print the error along with the trail of word calls that led to it, then forget the trail.
fn report_error(context: &mut Context, error: &Error, output: &mut dyn Write) {
    let _ = writeln!(output, "{}", ErrorReport::new(error, context.error_trail()));
    context.clear_error_trail();
}

fn prompt(config: &Config, pending: bool) {
    if !config.quiet {
        print!("{}", if pending { "... " } else { "> " });
        let _ = io::stdout().flush();
    }
}

/// Read statements from standard input until `.q` or the end of input.  Errors are reported and
/// the session carries on.
fn run_repl(context: &mut Context) {
    let arena = context.arena();
    let config = context.config().clone();
    let mut statement = StatementBuffer::new(config.max_statement_bytes);
    let stdin = io::stdin();

    if !config.quiet {
        println!("quotient {}, type .q to quit.", env!("CARGO_PKG_VERSION"));
    }

    prompt(&config, false);

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(error) => {
                report_error(context, &Error::from(error), &mut io::stdout());
                break;
            }
        };

        if !statement.is_pending() && line.trim() == QUIT_COMMAND {
            return;
        }

        match statement.feed_line(arena, &line) {
            Ok(Statement::Incomplete) => (),
            Ok(Statement::Complete(code)) => {
                statement.reset();

                if let Err(error) = context.execute_code(code) {
                    report_error(context, &error, &mut io::stdout());
                }
            }
            Err(error) => {
                statement.reset();
                report_error(context, &error, &mut io::stdout());
            }
        }

        prompt(&config, statement.is_pending());
    }

    let result = statement
        .flush(arena)
        .and_then(|code| context.execute_code(code));

    if let Err(error) = result {
        report_error(context, &error, &mut io::stdout());
    }
}

/// Run a whole script, stopping at the first uncaught error.
fn run_script(context: &mut Context, file: File) -> ExitCode {
    match context.run_reader(BufReader::new(file)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            report_error(context, &error, &mut io::stderr());
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::parse();
    let script = config.script.clone();

    // Everything parsed or defined lives in the arena until the session ends.
    let arena = Bump::new();
    let mut context = Context::new(&arena, config);

    register_builtin_words(&mut context);

    match script {
        Some(path) => match File::open(&path) {
            Ok(file) => run_script(&mut context, file),
            Err(error) => {
                debug!("could not open {}: {}", path.display(), error);
                report_error(&mut context, &Error::from(error), &mut io::stderr());
                ExitCode::FAILURE
            }
        },
        None => {
            run_repl(&mut context);
            ExitCode::SUCCESS
        }
    }
}
