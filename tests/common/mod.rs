#![allow(dead_code)]
use basic::mach::{run, Event, Listing, Runtime, Status};

pub fn listing(source: &str) -> Listing {
    match Listing::from_source(source) {
        Ok(listing) => listing,
        Err(e) => panic!("{}", e),
    }
}

/// Run a program and render its output one line per `PRINT`, followed by
/// any error that stopped it.
pub fn exec(source: &str) -> String {
    let outcome = run(&listing(source));
    let mut s = String::new();
    for line in outcome.lines {
        s.push_str(&line);
        s.push('\n');
    }
    if let Status::Aborted(error) = outcome.status {
        s.push_str(&format!("?{}\n", error));
    }
    s
}

pub fn exec_status(source: &str) -> Status {
    run(&listing(source)).status
}

/// Step a runtime with a cycle budget, the way the console does.
pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped(Status::Completed) => break,
            Event::Stopped(Status::Aborted(error)) => {
                s.push_str(&format!("?{}\n", error));
                break;
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(ps) => {
                s.push_str(ps);
                s.push('\n');
            }
            Event::Trace(line_number) => {
                s.push_str(&format!("[{}]", line_number));
            }
        }
        prev_running = event == Event::Running;
    }
    s
}
