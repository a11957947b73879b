//! # SIL
//!
//! An interpreter for SIL, a tiny line-numbered scripting language with a
//! single 32-bit integer type. A program is a plain-text file where each
//! line carries a strictly increasing line number followed by one statement:
//!
//! ```text
//! 10 INTEGER count, limit
//! 20 INPUT limit
//! 30 LET count = 0
//! 40 LET count = count + 1
//! 50 IF count < limit THEN GOTO 40
//! 60 PRINT "counted to "
//! 70 PRINTLN count
//! 80 END
//! ```
//!
//! Statements are `INTEGER`, `INPUT`, `LET`, `PRINT`, `PRINTLN`, `IF`,
//! `GOTO`, and `END`. Line numbers are the only addressing mechanism;
//! `GOTO` re-enters the dispatch loop at the target line. Expressions use
//! `+ - * /` and parentheses over integers and initialized variables.
//!
//! Run a program with `sil <file.sil>`. Every detected error is fatal and
//! names the offending line.

pub mod lang;
pub mod mach;
