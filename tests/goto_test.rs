mod common;
use basic::mach::Runtime;
use common::*;

#[test]
fn test_goto_skips() {
    assert_eq!(
        exec("10 GOTO 30\n20 PRINT \"skipped\"\n30 PRINT \"done\"\n"),
        "done\n"
    );
}

#[test]
fn test_goto_missing_line() {
    assert_eq!(
        exec("10 GOTO 99\n20 PRINT \"x\"\n"),
        "?UNDEFINED LINE IN 10; GOTO 99\n"
    );
}

#[test]
fn test_goto_any_integer() {
    assert_eq!(exec("10 GOTO 0\n"), "?UNDEFINED LINE IN 10; GOTO 0\n");
    assert_eq!(
        exec("10 PRINT \"a\"\n20 GOTO 70000\n"),
        "a\n?UNDEFINED LINE IN 20; GOTO 70000\n"
    );
    assert_eq!(
        exec("10 GOTO 1.5\n"),
        "?SYNTAX ERROR IN 10 (5..8); INVALID LINE NUMBER\n"
    );
}

#[test]
fn test_counting_loop() {
    assert_eq!(
        exec("10 I = 0\n20 I = I + 1\n30 IF I < 3 THEN 20\n40 PRINT I\n"),
        "3\n"
    );
}

#[test]
fn test_endless_loop() {
    let mut r = Runtime::new(&listing("10 GOTO 10\n"));
    assert_eq!(exec_n(&mut r, 1000), "\n1000 Execution cycles exceeded.\n");
    r.interrupt();
    assert_eq!(exec_n(&mut r, 1000), "?BREAK IN 10\n");
}

#[test]
fn test_trace() {
    let mut r = Runtime::new(&listing("10 GOTO 30\n20 END\n30 PRINT \"x\"\n"));
    r.set_tron(true);
    assert_eq!(exec_n(&mut r, 1000), "[10][30]x\n");
}
