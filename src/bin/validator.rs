//! Argument Validator - Command Line Interface
//!
//! Reads an argument file, or asks for the argument interactively, and prints
//! its truth table and verdict.

use argument_validator::{interactive, Argument, ValidatorConfig, MAX_SUPPORTED_VARIABLES};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "validator")]
#[command(about = "Truth-table validity checker for propositional arguments", long_about = None)]
#[command(version)]
struct Args {
    /// Argument file (prompts on stdin if not specified)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Accept English keywords (not, and, or, implies/then) in formulas
    #[arg(short = 'e', long = "english")]
    english: bool,

    /// Suppress printing of the truth table
    #[arg(short = 'x', long = "no-table")]
    no_table: bool,

    /// Print the postfix form of every formula
    #[arg(short = 'p', long = "postfix")]
    postfix: bool,

    /// Maximum number of variables
    #[arg(
        long = "max-variables",
        default_value_t = argument_validator::DEFAULT_MAX_VARIABLES,
        value_parser = parse_max_variables
    )]
    max_variables: usize,

    /// Maximum number of premises
    #[arg(long = "max-premises", default_value_t = argument_validator::DEFAULT_MAX_PREMISES)]
    max_premises: usize,
}

/// Accept `1..=MAX_SUPPORTED_VARIABLES`
fn parse_max_variables(value: &str) -> Result<usize, String> {
    let count: usize = value.parse().map_err(|e| format!("{}", e))?;
    if (1..=MAX_SUPPORTED_VARIABLES).contains(&count) {
        Ok(count)
    } else {
        Err(format!("must be between 1 and {}", MAX_SUPPORTED_VARIABLES))
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = ValidatorConfig::new()
        .with_natural_language(args.english)
        .with_max_variables(args.max_variables)
        .with_max_premises(args.max_premises);

    let argument = match &args.input {
        Some(path) => match Argument::from_file(path, config) {
            Ok(argument) => argument,
            Err(e) => {
                eprintln!("Error reading argument file '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => {
            let stdin = io::stdin();
            match interactive::read_argument(stdin.lock(), io::stdout(), config) {
                Ok(argument) => argument,
                Err(e) => {
                    eprintln!("{}", e);
                    process::exit(1);
                }
            }
        }
    };

    let evaluation = match argument.evaluate() {
        Ok(evaluation) => evaluation,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.postfix {
        for formula in argument.formulas() {
            if let Err(e) = writeln!(out, "{} => {}", formula, formula.to_postfix_string()) {
                eprintln!("Error writing to stdout: {}", e);
                process::exit(1);
            }
        }
    }

    if let Err(e) = interactive::write_evaluation(&mut out, &evaluation, !args.no_table) {
        eprintln!("Error writing to stdout: {}", e);
        process::exit(1);
    }
}
