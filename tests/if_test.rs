mod common;
use basic::lang::ErrorCode;
use basic::mach::Status;
use common::*;

#[test]
fn test_if_then() {
    let program = "10 IF 1 < 2 THEN 30\n20 PRINT \"no\"\n30 PRINT \"yes\"\n";
    assert_eq!(exec(program), "yes\n");
    let program = "10 IF 2 < 1 THEN 30\n20 PRINT \"no\"\n30 PRINT \"yes\"\n";
    assert_eq!(exec(program), "no\nyes\n");
}

#[test]
fn test_comparators() {
    let cases = [
        ("1 = 1", true),
        ("1 = 2", false),
        ("1 <> 2", true),
        ("2 <> 2", false),
        ("1 < 2", true),
        ("2 < 2", false),
        ("2 <= 2", true),
        ("3 <= 2", false),
        ("3 > 2", true),
        ("2 > 2", false),
        ("2 >= 2", true),
        ("1 >= 2", false),
    ];
    for (cond, taken) in cases.iter() {
        let program = format!("10 IF {} THEN 30\n20 PRINT \"F\"\n30 END\n", cond);
        let expected = if *taken { "" } else { "F\n" };
        assert_eq!(exec(&program), expected, "IF {}", cond);
    }
}

#[test]
fn test_if_flat_expression() {
    assert_eq!(
        exec("10 IF 2 + 3 * 4 = 20 THEN 30\n20 PRINT \"no\"\n30 PRINT \"yes\"\n"),
        "yes\n"
    );
}

#[test]
fn test_if_missing_line_ends_run() {
    let program = "10 IF 1 = 1 THEN 500\n20 PRINT \"no\"\n";
    assert_eq!(exec(program), "");
    assert_eq!(exec_status(program), Status::Completed);
}

#[test]
fn test_if_any_integer_target() {
    let program = "10 IF 2 < 1 THEN 70000\n20 PRINT \"after\"\n";
    assert_eq!(exec(program), "after\n");
    assert_eq!(exec_status(program), Status::Completed);
    let program = "10 IF 1 < 2 THEN 0\n20 PRINT \"no\"\n";
    assert_eq!(exec(program), "");
    assert_eq!(exec_status(program), Status::Completed);
    assert_eq!(exec("10 IF 1 < 2 THEN 70000\n20 PRINT \"no\"\n"), "");
}

#[test]
fn test_if_errors() {
    assert_eq!(
        exec("10 IF 1 < 2 GOTO 30\n"),
        "?SYNTAX ERROR IN 10 (9..13); EXPECTED THEN\n"
    );
    match exec_status("10 IF Q > 0 THEN 10\n") {
        Status::Aborted(e) => assert_eq!(e.code(), ErrorCode::UndefinedVariable),
        status => panic!("{:?}", status),
    }
}
