use super::{expr, Console, Program, Var};
use crate::error;
use crate::lang::{split_first_word, Error, LineNumber, Statement};

type Result<T> = std::result::Result<T, Error>;

/// Where dispatch goes after a statement executes.
enum Flow {
    Next,
    Jump(LineNumber),
    End,
}

#[derive(Debug, PartialEq, Clone, Copy)]
enum Relop {
    Less,
    Greater,
    Equal,
    NotEqual,
}

/// ## SIL Runtime
///
/// Owns the loaded program and the variable store for one run. Statements
/// execute in ascending line order within a dispatch range; `GOTO` resets
/// the lower bound of the range to the target line and dispatch re-enters
/// there. Jumps keep no return address, so an unbounded `GOTO` loop runs in
/// constant stack; termination is the program's responsibility via `END`.
pub struct Runtime {
    program: Program,
    vars: Var,
}

impl Runtime {
    pub fn new(program: Program) -> Runtime {
        Runtime {
            program,
            vars: Var::new(),
        }
    }

    /// Runs the program from its first line to its last, or until `END` or
    /// the first error. Every error names the line it occurred on.
    pub fn run(&mut self, console: &mut dyn Console) -> Result<()> {
        self.vars.clear();
        let program = &self.program;
        let vars = &mut self.vars;
        let mut start = match program.first_line() {
            Some(number) => number,
            None => return Ok(()),
        };
        'dispatch: loop {
            for statement in program.range(start) {
                match execute(statement, program, vars, console)? {
                    Flow::Next => {}
                    Flow::Jump(target) => {
                        start = target;
                        continue 'dispatch;
                    }
                    Flow::End => return Ok(()),
                }
            }
            return Ok(());
        }
    }
}

fn execute(
    statement: &Statement,
    program: &Program,
    vars: &mut Var,
    console: &mut dyn Console,
) -> Result<Flow> {
    dispatch(statement.body(), program, vars, console)
        .map_err(|error| error.in_line_number(statement.number()))
}

fn dispatch(
    body: &str,
    program: &Program,
    vars: &mut Var,
    console: &mut dyn Console,
) -> Result<Flow> {
    let (keyword, rest) = split_first_word(body);
    match keyword {
        "INTEGER" => declare_statement(rest, vars),
        "INPUT" => input_statement(rest, vars, console),
        "LET" => let_statement(rest, vars),
        "PRINT" => print_statement(rest, vars, console, false),
        "PRINTLN" => print_statement(rest, vars, console, true),
        "IF" => if_statement(rest, program, vars, console),
        "GOTO" => goto_statement(rest, program),
        "END" => Ok(Flow::End),
        _ => Err(error!(SyntaxError; format!("UNKNOWN STATEMENT: {}", keyword))),
    }
}

fn declare_statement(rest: &str, vars: &mut Var) -> Result<Flow> {
    for name in rest.split(',') {
        vars.declare(name.trim())?;
    }
    Ok(Flow::Next)
}

fn input_statement(rest: &str, vars: &mut Var, console: &mut dyn Console) -> Result<Flow> {
    let names: Vec<&str> = rest.split(',').map(str::trim).collect();
    for name in &names {
        if !vars.contains(name) {
            return Err(error!(UndeclaredVariable; format!("{} NOT DECLARED", name)));
        }
    }
    let line = match console.read_line() {
        Some(line) => line,
        None => return Err(error!(InputFormat; "END OF INPUT")),
    };
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != names.len() {
        return Err(error!(InputCountMismatch;
            format!("EXPECTED {} VALUES, GOT {}", names.len(), tokens.len())));
    }
    for (name, token) in names.iter().zip(&tokens) {
        let value = match token.parse::<i32>() {
            Ok(value) => value,
            Err(_) => {
                return Err(error!(InputFormat; format!("NOT AN INTEGER: {}", token)));
            }
        };
        vars.store(name, value)?;
    }
    Ok(Flow::Next)
}

fn let_statement(rest: &str, vars: &mut Var) -> Result<Flow> {
    let (name, expression) = match rest.split_once('=') {
        Some((name, expression)) if !expression.contains('=') => (name.trim(), expression),
        _ => return Err(error!(SyntaxError; "EXPECTED ONE = IN ASSIGNMENT")),
    };
    if !vars.contains(name) {
        return Err(error!(UndeclaredVariable; format!("{} NOT DECLARED", name)));
    }
    let value = expr::evaluate(expression, vars)?;
    vars.store(name, value)?;
    Ok(Flow::Next)
}

fn print_statement(
    rest: &str,
    vars: &Var,
    console: &mut dyn Console,
    newline: bool,
) -> Result<Flow> {
    let text = rest.trim();
    let output = if text.starts_with('"') {
        if text.len() < 2 || !text.ends_with('"') {
            return Err(error!(SyntaxError; "UNTERMINATED STRING"));
        }
        text[1..text.len() - 1].to_string()
    } else if vars.contains(text) {
        vars.fetch(text)?.to_string()
    } else {
        expr::evaluate(text, vars)?.to_string()
    };
    if newline {
        console.println(&output);
    } else {
        console.print(&output);
    }
    Ok(Flow::Next)
}

fn if_statement(
    rest: &str,
    program: &Program,
    vars: &Var,
    console: &mut dyn Console,
) -> Result<Flow> {
    let (condition, then_clause) = match rest.split_once("THEN") {
        Some(split) => split,
        None => return Err(error!(SyntaxError; "EXPECTED THEN")),
    };
    let (lhs, relop, rhs) = split_condition(condition)?;
    let left = expr::evaluate(lhs, vars)?;
    let right = expr::evaluate(rhs, vars)?;
    let taken = match relop {
        Relop::Less => left < right,
        Relop::Greater => left > right,
        Relop::Equal => left == right,
        Relop::NotEqual => left != right,
    };
    if !taken {
        return Ok(Flow::Next);
    }
    // Only PRINT, PRINTLN, and GOTO may follow THEN.
    let (keyword, rest) = split_first_word(then_clause);
    match keyword {
        "PRINT" => print_statement(rest, vars, console, false),
        "PRINTLN" => print_statement(rest, vars, console, true),
        "GOTO" => goto_statement(rest, program),
        _ => Err(error!(SyntaxError; format!("INVALID THEN STATEMENT: {}", keyword))),
    }
}

fn split_condition(condition: &str) -> Result<(&str, Relop, &str)> {
    for (i, ch) in condition.char_indices() {
        let relop = match ch {
            '<' => Relop::Less,
            '>' => Relop::Greater,
            '=' => Relop::Equal,
            '!' => {
                if condition[i + 1..].starts_with('=') {
                    return Ok((&condition[..i], Relop::NotEqual, &condition[i + 2..]));
                }
                return Err(error!(SyntaxError; "EXPECTED = AFTER !"));
            }
            _ => continue,
        };
        return Ok((&condition[..i], relop, &condition[i + 1..]));
    }
    Err(error!(SyntaxError; "EXPECTED RELATIONAL OPERATOR"))
}

fn goto_statement(rest: &str, program: &Program) -> Result<Flow> {
    let mut words = rest.split_whitespace();
    let target = match (words.next(), words.next()) {
        (Some(target), None) => target,
        _ => return Err(error!(SyntaxError; "EXPECTED ONE LINE NUMBER AFTER GOTO")),
    };
    let target = match target.parse::<LineNumber>() {
        Ok(number) => number,
        Err(_) => return Err(error!(UndefinedLine; target)),
    };
    if !program.contains_line(target) {
        return Err(error!(UndefinedLine; target.to_string()));
    }
    Ok(Flow::Jump(target))
}
