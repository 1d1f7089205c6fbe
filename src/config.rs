use crate::lang::statement::DEFAULT_STATEMENT_LIMIT;
use clap::Parser;
use std::path::PathBuf;

/// Runtime configuration for an interpreter session, read from the command line and environment.
#[derive(Clone, Debug, Parser)]
#[command(name = "quotient")]
#[command(about = "A small stack based language with quotations")]
pub struct Config {
    /// Script to run in batch mode.  Without one an interactive session is started.
    pub script: Option<PathBuf>,

    /// Extra directories searched by `load` after the current directory.
    #[arg(short = 'I', long = "include", env = "QUOTIENT_PATH", value_delimiter = ':')]
    pub search_paths: Vec<PathBuf>,

    /// Largest statement, in bytes, the reader will accumulate before giving up.
    #[arg(long, default_value_t = DEFAULT_STATEMENT_LIMIT)]
    pub max_statement_bytes: usize,

    /// Don't print the banner or prompts in interactive mode.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            script: None,
            search_paths: Vec::new(),
            max_statement_bytes: DEFAULT_STATEMENT_LIMIT,
            quiet: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_overrides_defaults() {
        let config = Config::parse_from([
            "quotient",
            "-I",
            "lib",
            "--max-statement-bytes",
            "128",
            "-q",
            "main.qt",
        ]);

        assert_eq!(config.script, Some(PathBuf::from("main.qt")));
        assert_eq!(config.search_paths, vec![PathBuf::from("lib")]);
        assert_eq!(config.max_statement_bytes, 128);
        assert!(config.quiet);
    }

    #[test]
    fn defaults_match_the_statement_limit() {
        let config = Config::default();

        assert_eq!(config.max_statement_bytes, DEFAULT_STATEMENT_LIMIT);
        assert!(config.script.is_none());
    }
}
