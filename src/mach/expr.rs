use super::Var;
use crate::error;
use crate::lang::{ident, Error};

type Result<T> = std::result::Result<T, Error>;

/// Evaluates an arithmetic expression over integer literals and initialized
/// variables. Two stacks, one left-to-right scan: operands accumulate on
/// one stack while operators wait on the other until precedence or a
/// closing parenthesis forces application. `*` and `/` bind tighter than
/// `+` and `-`; equal precedence applies left to right.
///
/// Identifiers are taken as maximal runs of identifier characters and
/// resolved against the store, so one variable name being a prefix of
/// another cannot corrupt the scan.
pub fn evaluate(expression: &str, vars: &Var) -> Result<i32> {
    let mut values: Vec<i32> = vec![];
    let mut ops: Vec<char> = vec![];
    let mut chars = expression.chars().peekable();
    while let Some(&ch) = chars.peek() {
        if ch.is_whitespace() {
            chars.next();
        } else if ch.is_ascii_digit() {
            let mut literal = String::new();
            while let Some(&ch) = chars.peek() {
                if !ch.is_ascii_digit() {
                    break;
                }
                literal.push(ch);
                chars.next();
            }
            match literal.parse::<i32>() {
                Ok(value) => values.push(value),
                Err(_) => return Err(error!(Overflow; format!("LITERAL TOO LARGE: {}", literal))),
            }
        } else if ident::is_start(ch) {
            let mut name = String::new();
            while let Some(&ch) = chars.peek() {
                if !ident::is_part(ch) {
                    break;
                }
                name.push(ch);
                chars.next();
            }
            values.push(vars.fetch(&name)?);
        } else if ch == '(' {
            chars.next();
            ops.push(ch);
        } else if ch == ')' {
            chars.next();
            loop {
                match ops.pop() {
                    Some('(') => break,
                    Some(op) => apply(op, &mut values)?,
                    None => {
                        return Err(error!(MalformedExpression; "UNMATCHED PARENTHESIS"));
                    }
                }
            }
        } else if is_operator(ch) {
            chars.next();
            while let Some(&top) = ops.last() {
                if top == '(' || precedence(top) < precedence(ch) {
                    break;
                }
                ops.pop();
                apply(top, &mut values)?;
            }
            ops.push(ch);
        } else {
            return Err(error!(MalformedExpression; format!("UNEXPECTED CHARACTER: {}", ch)));
        }
    }
    while let Some(op) = ops.pop() {
        if op == '(' {
            return Err(error!(MalformedExpression; "UNMATCHED PARENTHESIS"));
        }
        apply(op, &mut values)?;
    }
    match values.pop() {
        Some(result) if values.is_empty() => Ok(result),
        Some(_) => Err(error!(MalformedExpression; "MISSING OPERATOR")),
        None => Err(error!(MalformedExpression; "EMPTY EXPRESSION")),
    }
}

fn is_operator(ch: char) -> bool {
    ch == '+' || ch == '-' || ch == '*' || ch == '/'
}

fn precedence(op: char) -> u8 {
    match op {
        '*' | '/' => 2,
        _ => 1,
    }
}

fn apply(op: char, values: &mut Vec<i32>) -> Result<()> {
    let b = match values.pop() {
        Some(value) => value,
        None => return Err(error!(MalformedExpression; "MISSING OPERAND")),
    };
    let a = match values.pop() {
        Some(value) => value,
        None => return Err(error!(MalformedExpression; "MISSING OPERAND")),
    };
    let result = match op {
        '+' => a.checked_add(b),
        '-' => a.checked_sub(b),
        '*' => a.checked_mul(b),
        _ => {
            if b == 0 {
                return Err(error!(DivisionByZero));
            }
            a.checked_div(b)
        }
    };
    match result {
        Some(value) => {
            values.push(value);
            Ok(())
        }
        None => Err(error!(Overflow)),
    }
}
