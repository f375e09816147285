//! Argument file format
//!
//! A line-oriented, directive based format for storing an argument:
//!
//! ```text
//! # Comments and blank lines are ignored
//! .vars k m a
//! .mode symbols
//! .premise (k | m) > !a
//! .premise a | m
//! .conclusion a | !k
//! .e
//! ```
//!
//! - `.vars` (required, once) declares the variables in column order
//! - `.mode` (optional, once) is `symbols` or `english`; it overrides
//!   [`ValidatorConfig::natural_language`]
//! - `.premise` (any number) adds premises in order
//! - `.conclusion` (required, once) sets the conclusion
//! - `.e` ends the argument; anything after it is ignored
//!
//! Directives may appear in any order. Formulas are only converted once the whole
//! file has been read, so `.mode` also applies to premises written above it.

pub mod error;

pub use error::ArgumentFileError;

use crate::argument::Argument;
use crate::error::ValidatorError;
use crate::logging::targets;
use crate::ValidatorConfig;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

/// Directives of one argument, collected before anything is converted
#[derive(Debug, Default)]
struct Directives {
    vars: Option<Vec<String>>,
    mode: Option<bool>,
    premises: Vec<String>,
    conclusion: Option<String>,
}

impl Argument {
    /// Read an argument from any `BufRead` implementation
    ///
    /// `config` supplies the limits; a `.mode` directive overrides its
    /// `natural_language` setting. Format errors are reported as
    /// [`ValidatorError::File`]; variables and formulas are then declared exactly
    /// as through [`Argument::new`] and [`Argument::add_premise`], with the same
    /// errors.
    pub fn from_reader<R: BufRead>(reader: R, config: ValidatorConfig) -> Result<Self, ValidatorError> {
        let directives = read_directives(reader)?;

        let vars = directives
            .vars
            .ok_or(ArgumentFileError::MissingDirective { directive: ".vars" })?;
        let conclusion = directives
            .conclusion
            .ok_or(ArgumentFileError::MissingDirective {
                directive: ".conclusion",
            })?;

        let config = match directives.mode {
            Some(natural_language) => config.with_natural_language(natural_language),
            None => config,
        };

        let mut argument = Argument::new(&vars, config)?;
        for premise in &directives.premises {
            argument.add_premise(premise)?;
        }
        argument.set_conclusion(&conclusion)?;

        log::debug!(
            target: targets::ARGUMENT_FILE,
            "Read argument with {} variables and {} premises",
            argument.variables().len(),
            argument.premise_count()
        );
        Ok(argument)
    }

    /// Parse an argument from a string in argument file format
    ///
    /// # Examples
    ///
    /// ```
    /// use argument_validator::{Argument, ValidatorConfig};
    ///
    /// let text = ".vars p q\n.premise p > q\n.premise p\n.conclusion q\n";
    /// let argument = Argument::from_argument_string(text, ValidatorConfig::default()).unwrap();
    /// assert!(argument.evaluate().unwrap().verdict.valid);
    /// ```
    pub fn from_argument_string(s: &str, config: ValidatorConfig) -> Result<Self, ValidatorError> {
        Self::from_reader(io::Cursor::new(s.as_bytes()), config)
    }

    /// Load an argument from a file
    pub fn from_file<P: AsRef<Path>>(path: P, config: ValidatorConfig) -> Result<Self, ValidatorError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), config)
    }

    /// Write the argument in argument file format
    ///
    /// Formulas are written as their source text, together with the `.mode` they
    /// were written in. An argument without a conclusion is written without a
    /// `.conclusion` line and cannot be read back.
    pub fn write_argument<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let names: Vec<&str> = self.variables().iter().map(|name| name.as_ref()).collect();
        writeln!(writer, ".vars {}", names.join(" "))?;
        let mode = if self.config().natural_language {
            "english"
        } else {
            "symbols"
        };
        writeln!(writer, ".mode {}", mode)?;
        for premise in self.premises() {
            writeln!(writer, ".premise {}", premise.source())?;
        }
        if let Some(conclusion) = self.conclusion() {
            writeln!(writer, ".conclusion {}", conclusion.source())?;
        }
        writeln!(writer, ".e")?;
        Ok(())
    }

    /// Serialize to a string in argument file format
    pub fn to_argument_string(&self) -> io::Result<String> {
        let mut buffer = Vec::new();
        self.write_argument(&mut buffer)?;
        String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Write the argument to a file
    pub fn to_argument_file<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_argument(&mut writer)?;
        writer.flush()
    }
}

fn read_directives<R: BufRead>(reader: R) -> Result<Directives, ValidatorError> {
    let mut directives = Directives::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if !line.starts_with('.') {
            return Err(ArgumentFileError::UnexpectedLine {
                line: line_number,
                text: Arc::from(line),
            }
            .into());
        }

        let (directive, rest) = match line.split_once(char::is_whitespace) {
            Some((directive, rest)) => (directive, rest.trim()),
            None => (line, ""),
        };

        match directive {
            ".vars" => {
                if directives.vars.is_some() {
                    return Err(duplicate(line_number, ".vars"));
                }
                directives.vars = Some(rest.split_whitespace().map(str::to_string).collect());
            }
            ".mode" => {
                if directives.mode.is_some() {
                    return Err(duplicate(line_number, ".mode"));
                }
                directives.mode = Some(match rest.to_ascii_lowercase().as_str() {
                    "symbols" => false,
                    "english" => true,
                    _ => {
                        return Err(ArgumentFileError::InvalidMode {
                            line: line_number,
                            value: Arc::from(rest),
                        }
                        .into())
                    }
                });
            }
            ".premise" => directives.premises.push(rest.to_string()),
            ".conclusion" => {
                if directives.conclusion.is_some() {
                    return Err(duplicate(line_number, ".conclusion"));
                }
                directives.conclusion = Some(rest.to_string());
            }
            ".e" | ".end" => break,
            other => {
                return Err(ArgumentFileError::UnknownDirective {
                    line: line_number,
                    directive: Arc::from(other),
                }
                .into())
            }
        }
    }

    Ok(directives)
}

fn duplicate(line: usize, directive: &'static str) -> ValidatorError {
    ArgumentFileError::DuplicateDirective { line, directive }.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Capacity;

    fn read(text: &str) -> Result<Argument, ValidatorError> {
        Argument::from_argument_string(text, ValidatorConfig::default())
    }

    #[test]
    fn test_read_full_file() {
        let text = "# modus tollens\n\
                    .vars p q\n\
                    \n\
                    .premise p > q\n\
                    .premise !q\n\
                    .conclusion !p\n\
                    .e\n\
                    this is ignored\n";
        let argument = read(text).unwrap();
        assert_eq!(argument.variables().len(), 2);
        assert_eq!(argument.premise_count(), 2);
        assert!(argument.evaluate().unwrap().verdict.valid);
    }

    #[test]
    fn test_mode_applies_to_earlier_premises() {
        let text = ".premise rain implies wet\n.vars rain wet\n.mode english\n.conclusion rain or not rain\n";
        let argument = read(text).unwrap();
        assert!(argument.config().natural_language);
        assert_eq!(argument.premises()[0].to_postfix_string(), "rain wet >");
    }

    #[test]
    fn test_missing_directives() {
        assert!(matches!(
            read(".conclusion p\n"),
            Err(ValidatorError::File(ArgumentFileError::MissingDirective {
                directive: ".vars"
            }))
        ));
        assert!(matches!(
            read(".vars p\n"),
            Err(ValidatorError::File(ArgumentFileError::MissingDirective {
                directive: ".conclusion"
            }))
        ));
    }

    #[test]
    fn test_format_errors_carry_line_numbers() {
        assert!(matches!(
            read(".vars p\n.i 2\n"),
            Err(ValidatorError::File(ArgumentFileError::UnknownDirective { line: 2, .. }))
        ));
        assert!(matches!(
            read(".vars p\n.vars q\n"),
            Err(ValidatorError::File(ArgumentFileError::DuplicateDirective {
                line: 2,
                directive: ".vars"
            }))
        ));
        assert!(matches!(
            read(".vars p\n.mode klingon\n"),
            Err(ValidatorError::File(ArgumentFileError::InvalidMode { line: 2, .. }))
        ));
        assert!(matches!(
            read("\n.vars p\np & q\n"),
            Err(ValidatorError::File(ArgumentFileError::UnexpectedLine { line: 3, .. }))
        ));
    }

    #[test]
    fn test_limits_apply_to_files() {
        let text = ".vars a b c\n.conclusion a\n";
        let config = ValidatorConfig::default().with_max_variables(2);
        assert!(matches!(
            Argument::from_argument_string(text, config),
            Err(ValidatorError::CapacityExceeded {
                capacity: Capacity::Variables,
                ..
            })
        ));
    }

    #[test]
    fn test_written_text() {
        let argument = read(".vars K M\n.premise k | m\n.conclusion k\n").unwrap();
        assert_eq!(
            argument.to_argument_string().unwrap(),
            ".vars k m\n.mode symbols\n.premise k | m\n.conclusion k\n.e\n"
        );
    }

    #[test]
    fn test_multi_line_formulas_read_back() {
        let mut argument = Argument::new(["p", "q"], ValidatorConfig::default()).unwrap();
        argument.add_premise("p\n& q").unwrap();
        argument.set_conclusion("(p |\r\n q)").unwrap();

        let text = argument.to_argument_string().unwrap();
        assert!(text.contains(".premise p & q\n"));
        assert!(text.contains(".conclusion (p | q)\n"));

        let reread = read(&text).unwrap();
        assert_eq!(reread, argument);
        assert_eq!(reread.evaluate().unwrap(), argument.evaluate().unwrap());
    }
}
