//! buildfile - lexer and parser front end for Meson-style build files
//!
//! Usage:
//!   buildfile <FILE>             Parse a file and report the first error
//!   buildfile --tokens <FILE>    Print the token stream
//!   buildfile --ast <FILE>       Print the parsed program
//!   buildfile --strict <FILE>    Also fail on keyword arguments before positional ones

use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use buildfile::{
    display_error, errors::errors::Error, lexer::lexer::tokenize, parser::parser::parse,
};
use clap::Parser;
use log::debug;

#[derive(Parser, Debug)]
#[command(name = "buildfile")]
#[command(version, about = "Parse Meson-style build files", long_about = None)]
struct Args {
    /// The build file to parse
    file: PathBuf,

    /// Print the token stream instead of parsing
    #[arg(long = "tokens")]
    tokens: bool,

    /// Print the parsed program
    #[arg(long = "ast")]
    ast: bool,

    /// Treat keyword arguments followed by positional ones as errors
    #[arg(long = "strict")]
    strict: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let file_name = args.file.display().to_string();

    let source = match read_to_string(&args.file) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {}: {}", file_name, e);
            return ExitCode::FAILURE;
        }
    };

    let result = if args.tokens {
        print_tokens(&source)
    } else {
        check(&source, &file_name, &args)
    };

    match result {
        Ok(code) => code,
        Err(error) => {
            display_error(&error, &file_name, &source);
            ExitCode::FAILURE
        }
    }
}

fn print_tokens(source: &str) -> Result<ExitCode, Error> {
    let start = Instant::now();

    for token in tokenize(source) {
        println!("{}", token?);
    }

    debug!("Tokenized in {:?}", start.elapsed());
    Ok(ExitCode::SUCCESS)
}

fn check(source: &str, file_name: &str, args: &Args) -> Result<ExitCode, Error> {
    let start = Instant::now();
    let program = parse(source)?;
    debug!("Parsed {} statements in {:?}", program.len(), start.elapsed());

    if args.ast {
        print!("{}", program);
    }

    let violations = program.argument_order_violations();
    for position in &violations {
        eprintln!(
            "Warning keyword argument followed by positional argument line {} column {}",
            position.line, position.column
        );
        eprintln!("-> {}", file_name);
    }

    if args.strict && !violations.is_empty() {
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
