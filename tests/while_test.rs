mod common;
use common::*;

#[test]
fn test_while() {
    let program = "10 LET X = 0\n20 WHILE X < 3\n30 LET X = X + 1\n40 WEND\n50 PRINT X\n";
    assert_eq!(exec(program), "3\n");
}

#[test]
fn test_while_body_count() {
    let program = "10 X = 0\n20 WHILE X < 3\n30 X = X + 1\n35 PRINT X\n40 WEND\n50 PRINT X\n";
    assert_eq!(exec(program), "1\n2\n3\n3\n");
}

#[test]
fn test_while_false_on_entry() {
    assert_eq!(
        exec("10 WHILE 1 > 2\n20 PRINT \"in\"\n30 WEND\n40 PRINT \"out\"\n"),
        "out\n"
    );
    assert_eq!(exec("10 I = 5\n20 WHILE I < 3\n30 WEND\n"), "");
}

#[test]
fn test_nested_while() {
    let program = "10 I = 0\n20 WHILE I < 2\n30 J = 0\n40 WHILE J < 2\n50 J = J + 1\n\
                   60 PRINT J\n70 WEND\n80 I = I + 1\n90 WEND\n100 PRINT I\n";
    assert_eq!(exec(program), "1\n2\n1\n2\n2\n");
    let program = "10 WHILE 0 > 1\n20 WHILE 1 > 0\n30 PRINT \"inner\"\n40 WEND\n\
                   50 PRINT \"outer\"\n60 WEND\n70 PRINT \"done\"\n";
    assert_eq!(exec(program), "done\n");
}

#[test]
fn test_unmatched() {
    assert_eq!(exec("10 WEND\n"), "?WEND WITHOUT WHILE IN 10\n");
    assert_eq!(
        exec("10 WHILE 1 > 2\n20 PRINT \"x\"\n"),
        "?WHILE WITHOUT WEND IN 10\n"
    );
    assert_eq!(
        exec("10 WHILE 1 > 2\n20 WHILE 1 > 2\n30 WEND\n"),
        "?WHILE WITHOUT WEND IN 10\n"
    );
}

#[test]
fn test_open_loop_at_end() {
    assert_eq!(exec("10 I = 0\n20 WHILE I < 3\n30 I = I + 1\n"), "");
}

#[test]
fn test_break_to_outer_wend() {
    let program = "10 I = 0\n20 WHILE I < 2\n30 I = I + 1\n40 J = 0\n50 WHILE J < 5\n\
                   60 J = J + 1\n70 IF J = 2 THEN 90\n80 WEND\n90 WEND\n100 PRINT I\n110 PRINT J\n";
    assert_eq!(exec(program), "2\n2\n");
}

#[test]
fn test_break_to_plain_line() {
    let program = "10 I = 0\n20 WHILE I < 3\n30 I = I + 1\n40 WHILE 1 = 1\n\
                   50 IF 1 = 1 THEN 70\n60 WEND\n70 REM left the inner loop\n80 WEND\n90 PRINT I\n";
    assert_eq!(exec(program), "3\n");
}

#[test]
fn test_goto_out_of_loop() {
    let program = "10 WHILE 1 = 1\n20 GOTO 40\n30 WEND\n40 PRINT \"out\"\n50 WEND\n";
    assert_eq!(exec(program), "out\n?WEND WITHOUT WHILE IN 50\n");
}
