/*!
# SIL Language Module

This module provides the building blocks of the SIL language: the error
type shared by every component, the identifier grammar, and the parsing of
raw source lines into numbered statements.

*/

#[macro_use]
mod error;
mod line;

pub mod ident;

pub use error::Error;
pub use error::ErrorCode;
pub use line::split_first_word;
pub use line::Statement;

/// Statement address within a program. Always positive.
pub type LineNumber = u32;
