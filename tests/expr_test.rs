mod common;
use common::*;

#[test]
fn test_left_to_right() {
    assert_eq!(exec("10 X = 2 + 3 * 4\n20 PRINT X\n"), "20\n");
    assert_eq!(exec("10 X = 2 + (3 * 4)\n20 PRINT X\n"), "14\n");
    assert_eq!(exec("10 X = 10 - 4 - 3\n20 PRINT X\n"), "3\n");
    assert_eq!(exec("10 X = 7 % 3\n20 PRINT X\n"), "1\n");
}

#[test]
fn test_native_doubles() {
    assert_eq!(exec("10 X = 10 / 4\n20 PRINT X\n"), "2.5\n");
    assert_eq!(exec("10 X = 0.1 + 0.2\n20 PRINT X\n"), "0.30000000000000004\n");
    assert_eq!(exec("10 X = -2 - -2\n20 PRINT X\n"), "0\n");
}

#[test]
fn test_variables_in_expressions() {
    assert_eq!(
        exec("10 A = 3\n20 B = A * A + 1\n30 PRINT B\n"),
        "10\n"
    );
    assert_eq!(
        exec("10 X = Y + 1\n20 PRINT X\n"),
        "?UNDEFINED VARIABLE IN 10 (4..5); Y\n"
    );
}

#[test]
fn test_division_by_zero() {
    assert_eq!(
        exec("10 X = 5\n20 X = X / 0\n30 PRINT X\n"),
        "?DIVISION BY ZERO IN 20 (6..7)\n"
    );
    assert_eq!(
        exec("10 Y = 4 % (2 - 2)\n"),
        "?DIVISION BY ZERO IN 10 (6..7); MODULO BY ZERO\n"
    );
}

#[test]
fn test_incomplete_expression() {
    assert_eq!(
        exec("10 X = 1 +\n"),
        "?SYNTAX ERROR IN 10 (7..7); EXPECTED EXPRESSION\n"
    );
    assert_eq!(
        exec("10 X = 1 # 2\n"),
        "?LEXICAL ERROR IN 10 (6..7); UNEXPECTED CHARACTER '#'\n"
    );
}
