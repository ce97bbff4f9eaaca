use super::*;
use crate::lang::ErrorCode;
use crate::mach::Status;

#[test]
fn test_vars_live_until_stop() {
    let mut r = Runtime::new(&listing("10 LET X = 7\n"));
    assert_eq!(r.execute(1), Event::Running);
    assert_eq!(r.vars().get("X"), Some(7.0));
    assert_eq!(r.cursor(), None);
    assert_eq!(r.execute(1), Event::Stopped(Status::Completed));
    assert!(r.vars().is_empty());
    assert!(r.is_stopped());
    assert_eq!(r.execute(1), Event::Stopped(Status::Completed));
}

#[test]
fn test_trace() {
    let mut r = Runtime::new(&listing("10 X = 1\n20 PRINT X\n30 END\n"));
    r.set_tron(true);
    assert_eq!(run_cycles(&mut r, 5000), "[10][20]1\n[30]Completed\n");
}

#[test]
fn test_interrupt_between_lines() {
    let mut r = Runtime::new(&listing("10 X = 1\n20 GOTO 10\n"));
    assert_eq!(r.execute(3), Event::Running);
    assert_eq!(r.cursor(), Some(20));
    r.interrupt();
    match r.execute(5000) {
        Event::Stopped(Status::Aborted(e)) => {
            assert_eq!(e.code(), ErrorCode::Break);
            assert_eq!(e.to_string(), "BREAK IN 20");
        }
        event => panic!("{:?}", event),
    }
    assert!(r.vars().is_empty());
}

#[test]
fn test_cycles_exceeded() {
    let mut r = Runtime::new(&listing("10 GOTO 10\n"));
    assert_eq!(
        run_cycles(&mut r, 100),
        "\n100 Execution cycles exceeded.\n"
    );
}

#[test]
fn test_loop_scope_tracking() {
    let mut r = Runtime::new(&listing(
        "10 I = 0\n20 WHILE I < 2\n30 I = I + 1\n40 WEND\n50 END\n",
    ));
    assert_eq!(r.execute(2), Event::Running);
    assert_eq!(r.loop_depth(), 1);
    assert_eq!(r.execute(5000), Event::Stopped(Status::Completed));
    assert_eq!(r.loop_depth(), 0);
}

#[test]
fn test_empty_listing() {
    let mut r = Runtime::new(&Listing::default());
    assert_eq!(r.execute(5000), Event::Stopped(Status::Completed));
}

#[test]
fn test_jumping_out_of_loops_closes_them() {
    let mut r = Runtime::new(&listing(
        "10 I = 0\n20 WHILE I < 50\n30 I = I + 1\n40 WHILE 1 = 1\n\
         50 GOTO 70\n60 WEND\n70 WEND\n80 END\n",
    ));
    let mut deepest = 0;
    while !r.is_stopped() {
        if let Event::Stopped(status) = r.execute(1) {
            assert_eq!(status, Status::Completed);
        }
        deepest = deepest.max(r.loop_depth());
    }
    assert_eq!(deepest, 2);
}
