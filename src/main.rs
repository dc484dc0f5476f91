use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, Subcommand};
use lox::Error;
use tracing::{Level, debug};

/// lox is a tree-walking interpreter for a small Lox-like scripting
/// language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print diagnostics to stderr. Repeat for more detail (`-vv`).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the token stream of a file, one token per line.
    Tokenize {
        /// The source file.
        file: PathBuf,
    },
    /// Parse a file holding one expression and print its syntax tree.
    Parse {
        /// The source file.
        file: PathBuf,
    },
    /// Evaluate a file holding one expression and print its value.
    Evaluate {
        /// The source file.
        file: PathBuf,
    },
    /// Run a file as a program.
    Run {
        /// The source file.
        file: PathBuf,
    },
}

impl Command {
    fn file(&self) -> &Path {
        match self {
            Self::Tokenize { file }
            | Self::Parse { file }
            | Self::Evaluate { file }
            | Self::Run { file } => file.as_path(),
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let path = args.command.file();
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Failed to read the input file '{}': {e}", path.display());
            return ExitCode::FAILURE;
        },
    };
    debug!(file = %path.display(), bytes = source.len(), "source loaded");

    let mut stdout = io::stdout().lock();
    let result = match &args.command {
        Command::Tokenize { .. } => tokenize(&source, &mut stdout),
        Command::Parse { .. } => lox::parse(&source).and_then(|expr| emit(&mut stdout, &expr)),
        Command::Evaluate { .. } => {
            lox::evaluate(&source).and_then(|value| emit(&mut stdout, &value))
        },
        Command::Run { .. } => lox::run(&source, &mut stdout),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(line = ?e.line(), exit_code = e.exit_code(), "command failed");
            eprintln!("{e}");
            ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(1))
        },
    }
}

/// Prints every token, then reports scan errors, if any.
fn tokenize(source: &str, out: &mut impl Write) -> Result<(), Error> {
    let (tokens, errors) = lox::tokenize(source);

    for token in &tokens {
        writeln!(out, "{token}")?;
    }

    Error::from_phases(errors, Vec::new()).map_or(Ok(()), Err)
}

fn emit(out: &mut impl Write, item: &impl std::fmt::Display) -> Result<(), Error> {
    writeln!(out, "{item}")?;
    Ok(())
}

/// Installs the stderr log subscriber. Warnings only unless `-v` is given.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt().with_target(false)
                             .with_level(true)
                             .with_max_level(level)
                             .with_writer(io::stderr)
                             .init();
}
