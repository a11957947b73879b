/*!
## SIL Machine Module

This module executes SIL programs: the line-number-indexed statement table,
the variable store, the arithmetic expression evaluator, and the runtime
that dispatches statements and drives control flow.

*/

mod console;
mod expr;
mod program;
mod runtime;
mod var;

pub use console::Console;
pub use console::StdConsole;
pub use expr::evaluate;
pub use program::Program;
pub use runtime::Runtime;
pub use var::Var;
