//! Prompt-driven entry of an argument
//!
//! The session reads one answer per line from any [`BufRead`] and writes prompts
//! and results to any [`Write`], so it runs the same on a terminal and in tests.
//! An out of range count or a rejected formula ends the session with an error;
//! nothing is re-prompted.

use crate::argument::{Argument, Evaluation};
use crate::error::ValidatorError;
use crate::ValidatorConfig;
use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;

const OPERATOR_HELP: &str = "\
Operators: ! (NOT)  & (AND)  | (OR)  > (IMPLIES)
You can type symbols directly, or choose English keywords
(not/no, and, or, implies/then)
Example symbols: ( p | q ) > ! r
Example English: p and q then not r
";

/// Run a full session: read the argument, evaluate it and print the truth table
/// and analysis
///
/// # Examples
///
/// ```
/// use argument_validator::{interactive, ValidatorConfig};
///
/// let answers = "2\nno\np\nq\n1\np > q\n!q > !p\n";
/// let mut output = Vec::new();
/// let evaluation =
///     interactive::run_session(answers.as_bytes(), &mut output, ValidatorConfig::default()).unwrap();
/// assert!(evaluation.verdict.valid);
/// ```
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    config: ValidatorConfig,
) -> Result<Evaluation, ValidatorError> {
    let argument = read_argument(input, &mut output, config)?;
    let evaluation = argument.evaluate()?;
    write_evaluation(&mut output, &evaluation, true)?;
    Ok(evaluation)
}

/// Prompt for variables, premises and a conclusion
///
/// The notation question is skipped when `config.natural_language` is already
/// set. In symbol notation every variable name must be a single character.
pub fn read_argument<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    config: ValidatorConfig,
) -> Result<Argument, ValidatorError> {
    write!(output, "{}", OPERATOR_HELP)?;

    let limit = config.variable_limit();
    let prompt = format!("How many variables? (1-{}): ", limit);
    let variable_count = ask_count(&mut input, &mut output, &prompt, 1..=limit)
        .map_err(|err| err.unwrap_or_else(|| invalid("Invalid variable count.")))?;

    let config = if config.natural_language {
        config
    } else {
        let answer = ask(
            &mut input,
            &mut output,
            "Use English keywords instead of symbols? (yes or no): ",
        )?;
        let english = matches!(answer.to_ascii_lowercase().as_str(), "yes" | "y");
        config.with_natural_language(english)
    };

    let mut names = Vec::with_capacity(variable_count);
    for i in 0..variable_count {
        let name = ask(&mut input, &mut output, &format!("Name for variable {}: ", i + 1))?;
        if !config.natural_language && name.chars().count() != 1 {
            return Err(invalid("In symbol mode, use single-letter variable names."));
        }
        names.push(name);
    }
    let mut argument = Argument::new(&names, config.clone())?;

    let prompt = format!("Number of premises (0-{}): ", config.max_premises);
    let premise_count = ask_count(&mut input, &mut output, &prompt, 0..=config.max_premises)
        .map_err(|err| err.unwrap_or_else(|| invalid("Invalid premise count.")))?;

    for i in 0..premise_count {
        let premise = ask(&mut input, &mut output, &format!("Premise {}: ", i + 1))?;
        argument.add_premise(&premise)?;
    }
    let conclusion = ask(&mut input, &mut output, "Conclusion: ")?;
    argument.set_conclusion(&conclusion)?;

    Ok(argument)
}

/// Print the truth table (optionally) and the analysis of an evaluation
pub fn write_evaluation<W: Write>(
    mut output: W,
    evaluation: &Evaluation,
    with_table: bool,
) -> io::Result<()> {
    if with_table {
        writeln!(output, "\nTRUTH TABLE")?;
        write!(output, "{}", evaluation.table)?;
    }
    writeln!(output, "\nANALYSIS")?;
    write!(output, "{}", evaluation.report())?;
    output.flush()
}

/// Print a prompt and read one trimmed line
fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input ended before the argument was complete",
        ));
    }
    Ok(line.trim().to_string())
}

/// Ask for a number in `range`
///
/// `Err(None)` when the answer is not such a number, `Err(Some(_))` when reading
/// failed.
fn ask_count<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    range: RangeInclusive<usize>,
) -> Result<usize, Option<ValidatorError>> {
    let answer = ask(input, output, prompt).map_err(|err| Some(err.into()))?;
    match answer.parse::<usize>() {
        Ok(count) if range.contains(&count) => Ok(count),
        _ => Err(None),
    }
}

fn invalid(message: &str) -> ValidatorError {
    ValidatorError::InvalidInput {
        message: message.to_string(),
    }
}
