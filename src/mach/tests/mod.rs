use crate::mach::{Event, Listing, Runtime};

mod runtime_test;

fn listing(source: &str) -> Listing {
    match Listing::from_source(source) {
        Ok(listing) => listing,
        Err(e) => panic!("{}", e),
    }
}

/// Drain a runtime the way the console does, rendering traces as `[10]`
/// and each stop as its status.
fn run_cycles(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped(status) => {
                s.push_str(&format!("{:?}\n", status));
                break;
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(ps) => {
                s.push_str(&format!("{}\n", ps));
            }
            Event::Trace(line_number) => {
                s.push_str(&format!("[{}]", line_number));
            }
        }
        prev_running = event == Event::Running;
    }
    s
}
