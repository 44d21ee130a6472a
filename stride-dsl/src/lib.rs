//! S-expression configuration language for Stride stepper trees.
//!
//! A stepper tree can be assembled from text instead of code:
//!
//! ```
//! use stride_dsl::StepperBuilder;
//!
//! let builder = StepperBuilder::<()>::new();
//! let stepper = builder.build_str(
//!     "(MinOfStepper (ConstStepper 4.2) (FixedPointStepper (2 4 10 12) 1e-10) 1e-10)",
//! )?;
//! # let _ = stepper;
//! # Ok::<(), stride_dsl::Error>(())
//! ```
//!
//! The pipeline is [`lex`] → [`parse`] → [`StepperBuilder::build`]; each
//! stage is usable on its own. Errors occur only at configuration time and
//! carry the 0-based source character index of the offending token
//! ([`ParseError`]) or the offending name/argument shape ([`BuildError`]).
//! Numeric literals are seconds; text that does not parse as a number
//! converts to zero rather than failing.

mod ast;
mod builder;
mod error;
mod parser;
mod token;

pub use ast::Node;
pub use builder::{BuildFn, StepperBuilder};
pub use error::{BuildError, Error, ParseError};
pub use parser::parse;
pub use token::{Token, TokenKind, lex};
