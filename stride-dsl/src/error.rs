use thiserror::Error;

/// Errors from tokenized text that does not form a well-nested expression.
///
/// Each variant carries the 0-based source character index of the offending
/// token where one exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unmatched left paren at index {index}")]
    UnmatchedLeftParen { index: usize },

    #[error("unmatched right paren at index {index}")]
    UnmatchedRightParen { index: usize },

    #[error("unexpected trailing input at index {index}")]
    TrailingInput { index: usize },

    #[error("unexpected end of input")]
    UnexpectedEnd,
}

/// Errors from a well-formed expression that does not describe a buildable
/// stepper tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("unknown stepper type `{name}` at index {index}")]
    UnknownStepper { name: String, index: usize },

    #[error("unknown slot `{name}` at index {index}")]
    UnknownSlot { name: String, index: usize },

    #[error("expected a stepper expression list at index {index}")]
    ExpectedList { index: usize },

    #[error("{stepper} expects {expected} arguments, got {found} (at index {index})")]
    WrongArity {
        stepper: String,
        expected: &'static str,
        found: usize,
        index: usize,
    },

    #[error("{stepper}: expected {expected} for argument {position} at index {index}")]
    BadArgument {
        stepper: String,
        expected: &'static str,
        position: usize,
        index: usize,
    },
}

/// Umbrella error for [`crate::StepperBuilder::build_str`], which runs the
/// whole lex → parse → build pipeline. Both kinds are fatal to the build; no
/// partial tree is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Build(#[from] BuildError),
}
