mod common;
use common::*;
use pretty_assertions::assert_eq;

#[test]
fn test_precedence() {
    assert_eq!(run("10 PRINTLN 2+3*4", &[]).unwrap(), "14\n");
    assert_eq!(run("10 PRINTLN (2+3)*4", &[]).unwrap(), "20\n");
    assert_eq!(run("10 PRINTLN 2*3+4*5", &[]).unwrap(), "26\n");
}

#[test]
fn test_left_assoc() {
    assert_eq!(run("10 PRINTLN 10-3-2", &[]).unwrap(), "5\n");
    assert_eq!(run("10 PRINTLN 100/5/2", &[]).unwrap(), "10\n");
}

#[test]
fn test_truncating_division() {
    assert_eq!(run("10 PRINTLN 10/3", &[]).unwrap(), "3\n");
    assert_eq!(run("10 PRINTLN 7/2", &[]).unwrap(), "3\n");
}

#[test]
fn test_division_by_zero() {
    assert_eq!(
        run_err("10 PRINTLN 1/0", &[]),
        "DIVISION BY ZERO IN 10"
    );
    assert_eq!(
        run_err("10 PRINTLN 2+6/(4-2*2)", &[]),
        "DIVISION BY ZERO IN 10"
    );
}

#[test]
fn test_division_by_zero_aborts_statement() {
    // No partial output from the failing PRINT.
    let source = "\
10 PRINT \"before\"
20 PRINTLN 1/0
30 PRINT \"after\"";
    let program = sil::mach::Program::load(source.lines()).unwrap();
    let mut console = TestConsole::new(&[]);
    let mut runtime = sil::mach::Runtime::new(program);
    let error = runtime.run(&mut console).unwrap_err();
    assert_eq!(error.to_string(), "DIVISION BY ZERO IN 20");
    assert_eq!(console.output, "before");
}

#[test]
fn test_malformed_expression() {
    assert_eq!(
        run_err("10 PRINTLN (1+2", &[]),
        "MALFORMED EXPRESSION IN 10; UNMATCHED PARENTHESIS"
    );
    assert_eq!(
        run_err("10 PRINTLN 1+", &[]),
        "MALFORMED EXPRESSION IN 10; MISSING OPERAND"
    );
    assert_eq!(
        run_err("10 PRINTLN", &[]),
        "MALFORMED EXPRESSION IN 10; EMPTY EXPRESSION"
    );
}

#[test]
fn test_variables_in_expressions() {
    let source = "\
10 INTEGER a, b
20 LET a = 6
30 LET b = a*a-a/2
40 PRINTLN b";
    assert_eq!(run(source, &[]).unwrap(), "33\n");
}

#[test]
fn test_prefix_named_variables() {
    let source = "\
10 INTEGER x, x2
20 LET x = 1
30 LET x2 = 10
40 PRINTLN x2+x";
    assert_eq!(run(source, &[]).unwrap(), "11\n");
}
