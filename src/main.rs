use std::{fs, process::ExitCode};

use clap::Parser;
use monkey::{Context, repl};

/// monkey is a small dynamically typed language with first-class functions
/// and closures.
///
/// Without any contents, an interactive session is started.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells monkey to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode automatically prints out the final value of a monkey
    /// script.
    #[arg(short, long)]
    pipe_mode: bool,

    contents: Option<String>,
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let Some(contents) = args.contents else {
        if let Err(e) = repl::start() {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    };

    let script = if args.file {
        match fs::read_to_string(&contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents
    };

    match monkey::run(&script, &Context::new()) {
        Ok(Some(value)) if value.is_error() => {
            eprintln!("{value}");
            ExitCode::FAILURE
        },
        Ok(value) => {
            if args.pipe_mode
               && let Some(value) = value
            {
                println!("{value}");
            }
            ExitCode::SUCCESS
        },
        Err(errors) => {
            eprintln!("{}", repl::format_parse_errors(&errors));
            ExitCode::FAILURE
        },
    }
}

/// Installs a `tracing` subscriber when `RUST_LOG` is set, e.g.
/// `RUST_LOG=monkey=trace`. Output is untouched otherwise.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        let layer = fmt::layer().with_writer(std::io::stderr)
                                .with_target(true)
                                .with_level(true);

        tracing_subscriber::registry().with(layer)
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}
