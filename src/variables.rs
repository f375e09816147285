//! Declared variables of an argument
//!
//! This module provides the [`VariableSet`] type, an ordered list of unique
//! variable names with constant-time lookup from name to column index.

use crate::expression::{is_separator_char, is_symbol_char};
use std::collections::HashMap;
use std::fmt;
use std::io;
use std::sync::Arc;

/// Number of variables supported unless configured otherwise
pub const DEFAULT_MAX_VARIABLES: usize = 8;

/// Hard ceiling on declared variables; a table has `2^N` rows
pub const MAX_SUPPORTED_VARIABLES: usize = 20;

/// Ordered set of unique, lowercased variable names
///
/// Order is significant: variable `i` is column `i` of the truth table and takes
/// bit `N − 1 − i` of the row index, so the first variable changes slowest.
///
/// Maintains both the ordered names (Vec) and a name->index lookup (HashMap).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariableSet {
    /// Names by position
    names: Vec<Arc<str>>,
    /// Lookup: name -> position index
    positions: HashMap<Arc<str>, usize>,
}

/// Errors raised when declaring variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariableError {
    /// No variables were declared
    Empty,
    /// The same name was declared twice (compared case-insensitively)
    Duplicate {
        /// The lowercased name
        name: Arc<str>,
    },
    /// The name is empty or contains whitespace or an operator symbol
    InvalidName {
        /// The rejected name as given
        name: Arc<str>,
    },
    /// The name is an operator keyword in English notation
    ReservedWord {
        /// The lowercased name
        name: Arc<str>,
    },
    /// More than [`MAX_SUPPORTED_VARIABLES`] names were declared
    TooMany {
        /// The ceiling that was hit
        limit: usize,
    },
}

impl fmt::Display for VariableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariableError::Empty => write!(f, "At least one variable must be declared"),
            VariableError::Duplicate { name } => {
                write!(f, "Variable '{}' is declared more than once", name)
            }
            VariableError::InvalidName { name } => write!(
                f,
                "Invalid variable name {:?}: names may not be empty or contain whitespace, \
                 parentheses or any of ! & | >",
                name
            ),
            VariableError::ReservedWord { name } => write!(
                f,
                "Variable name '{}' is an operator keyword in English notation",
                name
            ),
            VariableError::TooMany { limit } => {
                write!(f, "At most {} variables can be declared", limit)
            }
        }
    }
}

impl std::error::Error for VariableError {}

impl From<VariableError> for io::Error {
    fn from(err: VariableError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

impl VariableSet {
    /// Declare variables in column order
    ///
    /// Names are lowercased. Fails when the list is empty, when a name could not
    /// be read back as a single identifier, or when two names are equal after
    /// lowercasing, and when more than [`MAX_SUPPORTED_VARIABLES`] names are
    /// given. Callers enforce any lower configured maximum before declaring.
    ///
    /// # Examples
    ///
    /// ```
    /// use argument_validator::VariableSet;
    ///
    /// let variables = VariableSet::new(["K", "m", "a"]).unwrap();
    /// assert_eq!(variables.position("k"), Some(0));
    /// assert_eq!(variables.position("a"), Some(2));
    ///
    /// assert!(VariableSet::new(["p", "P"]).is_err());
    /// ```
    pub fn new<I, S>(names: I) -> Result<Self, VariableError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = VariableSet {
            names: Vec::new(),
            positions: HashMap::new(),
        };
        for name in names {
            set.push(name.as_ref())?;
        }
        if set.names.is_empty() {
            return Err(VariableError::Empty);
        }
        Ok(set)
    }

    fn push(&mut self, raw: &str) -> Result<(), VariableError> {
        if self.names.len() == MAX_SUPPORTED_VARIABLES {
            return Err(VariableError::TooMany {
                limit: MAX_SUPPORTED_VARIABLES,
            });
        }
        let trimmed = raw.trim();
        if trimmed.is_empty()
            || trimmed
                .chars()
                .any(|c| is_separator_char(c) || is_symbol_char(c))
        {
            return Err(VariableError::InvalidName {
                name: Arc::from(raw),
            });
        }
        let name: Arc<str> = Arc::from(trimmed.to_ascii_lowercase().as_str());
        if self.positions.contains_key(&name) {
            return Err(VariableError::Duplicate { name });
        }
        self.positions.insert(Arc::clone(&name), self.names.len());
        self.names.push(name);
        Ok(())
    }

    /// Number of declared variables
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false for a successfully constructed set
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in column order
    pub fn as_slice(&self) -> &[Arc<str>] {
        &self.names
    }

    /// Iterate over names in column order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<str>> {
        self.names.iter()
    }

    /// Find position by name (exact match against the stored lowercase name)
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Check if a name is declared
    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// Number of truth table rows, `2^N`
    ///
    /// Cannot overflow: a set never holds more than [`MAX_SUPPORTED_VARIABLES`]
    /// names.
    pub fn row_count(&self) -> usize {
        1usize << self.names.len()
    }
}
