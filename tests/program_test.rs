mod common;
use common::*;
use pretty_assertions::assert_eq;
use sil::mach::Program;

#[test]
fn test_malformed_line() {
    assert_eq!(
        run_err("PRINT \"no number\"", &[]),
        "MALFORMED LINE; EXPECTED LINE NUMBER: PRINT \"no number\""
    );
}

#[test]
fn test_lines_out_of_order() {
    let source = "\
20 PRINTLN \"b\"
10 PRINTLN \"a\"";
    assert_eq!(run_err(source, &[]), "MALFORMED LINE IN 10; LINE NUMBERS OUT OF ORDER");
}

#[test]
fn test_non_contiguous_line_numbers() {
    let source = "\
5 PRINT \"a\"
100 PRINT \"b\"
101 PRINT \"c\"";
    assert_eq!(run(source, &[]).unwrap(), "abc");
}

#[test]
fn test_listing_round_trip() {
    let source = "\
10 INTEGER x, y
20 INPUT x, y
30 LET x = (x+y)*2
40 IF x > 10 THEN PRINTLN \"big\"
50 GOTO 70
60 PRINTLN \"skipped\"
70 END";
    let program = Program::load(source.lines()).unwrap();
    let listing: Vec<&str> = source.lines().collect();
    assert_eq!(program.list(), listing);
}

#[test]
fn test_listing_preserves_order() {
    let program = Program::load("7 END".lines()).unwrap();
    assert_eq!(program.first_line(), Some(7));
    assert_eq!(program.last_line(), Some(7));
    assert_eq!(program.list(), vec!["7 END"]);
}
