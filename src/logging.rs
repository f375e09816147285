//! Log targets used throughout the library
//!
//! Calls to the [log] macros are made while formulas are defined, tables are built
//! and verdicts are derived. No log implementation is installed by the library;
//! the `validator` binary uses `env_logger`, so `RUST_LOG=table=trace` and similar
//! filters select individual stages.

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Tokenizing and keyword normalization
    pub const LEXER: &str = "lexer";

    /// Infix to postfix conversion
    pub const POSTFIX: &str = "postfix";

    /// Truth table enumeration
    pub const TABLE: &str = "table";

    /// Verdict derivation
    pub const ANALYSIS: &str = "analysis";

    /// Formula and variable declaration on an [Argument](crate::Argument)
    pub const ARGUMENT: &str = "argument";

    /// Reading and writing argument files
    pub const ARGUMENT_FILE: &str = "argument_file";
}
