use std::{
    fs,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use barebones::{interpreter::store::Store, run_source};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// barebones runs programs written in the Bare Bones teaching language and
/// prints the final value of every variable.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Programs to run, in order. Prompts for a filename when none are
    /// given.
    files: Vec<String>,

    /// Runs this program text instead of reading files.
    #[arg(short, long, value_name = "SOURCE", conflicts_with = "files")]
    eval: Option<String>,

    /// Prints variables sorted by name instead of in the order they were
    /// first cleared.
    #[arg(short, long)]
    sorted: bool,

    /// Raises the log level; repeat for more detail. `RUST_LOG` takes
    /// precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// A failed run, already rendered for the user.
struct Failure(String);

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Failure(message)) => {
            eprintln!("(!) {message}");
            ExitCode::FAILURE
        },
    }
}

fn run(args: &Args) -> Result<(), Failure> {
    if let Some(source) = &args.eval {
        return run_program(source, args.sorted);
    }

    if args.files.is_empty() {
        let file = prompt_filename()?;
        return run_file(&file, args.sorted);
    }

    for file in &args.files {
        println!("Running program: {file}");
        run_file(file, args.sorted)?;
    }

    Ok(())
}

fn run_file(file: &str, sorted: bool) -> Result<(), Failure> {
    let source = fs::read_to_string(file).map_err(|e| {
        Failure(format!("Failed to read the input file '{file}'. Perhaps this file does not exist? ({e})"))
    })?;
    info!(file, "running program");
    run_program(&source, sorted)
}

fn run_program(source: &str, sorted: bool) -> Result<(), Failure> {
    let store = run_source(source).map_err(|e| Failure(e.to_string()))?;
    print_store(&store, sorted);
    Ok(())
}

fn print_store(store: &Store, sorted: bool) {
    if sorted {
        for (name, value) in store.sorted() {
            println!("{name} = {value}");
        }
    } else {
        print!("{store}");
    }
}

fn prompt_filename() -> Result<String, Failure> {
    print!("Enter a filename: ");
    io::stdout().flush()
                .map_err(|e| Failure(format!("Failed to write the prompt: {e}.")))?;

    let mut file = String::new();
    io::stdin().lock()
               .read_line(&mut file)
               .map_err(|e| Failure(format!("Failed to read a filename: {e}.")))?;

    Ok(file.trim().to_string())
}

/// Installs a stderr `fmt` subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("barebones={level}")));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(true))
        .with(filter)
        .init();
}
