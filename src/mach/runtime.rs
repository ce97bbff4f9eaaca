use super::exec::execute;
use super::{Flow, Link, Listing, Var};
use crate::error;
use crate::lang::{Error, LineNumber};

type Result<T> = std::result::Result<T, Error>;

/// How a run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Completed,
    Aborted(Error),
}

/// Everything a finished run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub lines: Vec<String>,
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Running,
    Print(String),
    Trace(LineNumber),
    Stopped(Status),
}

/// Run a program to the end and collect its display lines.
pub fn run(listing: &Listing) -> Outcome {
    let mut runtime = Runtime::new(listing);
    let mut lines = vec![];
    loop {
        match runtime.execute(usize::max_value()) {
            Event::Print(s) => lines.push(s),
            Event::Running | Event::Trace(_) => {}
            Event::Stopped(status) => return Outcome { lines, status },
        }
    }
}

/// ## Program driver
///
/// One run of one listing. Owns the variables, the line index and the
/// open loops, so independent runs never see each other's state.

pub struct Runtime {
    listing: Listing,
    link: Link,
    vars: Var,
    flow: Flow,
    cursor: Option<LineNumber>,
    status: Option<Status>,
    tron: bool,
    traced: bool,
    interrupted: bool,
}

impl Runtime {
    pub fn new(listing: &Listing) -> Runtime {
        let listing = listing.clone();
        let link = Link::new(&listing);
        let cursor = link.first();
        let flow = Flow::new(&listing, &link);
        Runtime {
            listing,
            link,
            vars: Var::new(),
            flow,
            cursor,
            status: None,
            tron: false,
            traced: false,
            interrupted: false,
        }
    }

    /// Trace mode reports each line number before the line runs.
    pub fn set_tron(&mut self, tron: bool) {
        self.tron = tron;
    }

    /// Stop before the next line runs.
    pub fn interrupt(&mut self) {
        self.interrupted = true;
    }

    pub fn cursor(&self) -> Option<LineNumber> {
        self.cursor
    }

    pub fn vars(&self) -> &Var {
        &self.vars
    }

    pub fn loop_depth(&self) -> usize {
        self.flow.depth()
    }

    pub fn is_stopped(&self) -> bool {
        self.status.is_some()
    }

    /// Run at most `cycles` lines. Returns early with any output or when
    /// the run stops; `Event::Running` means the budget ran out.
    pub fn execute(&mut self, cycles: usize) -> Event {
        if let Some(status) = &self.status {
            return Event::Stopped(status.clone());
        }
        for _ in 0..cycles {
            let line_number = match self.cursor {
                Some(line_number) => line_number,
                None => return self.stop(Status::Completed),
            };
            if self.interrupted {
                return self.stop(Status::Aborted(error!(Break, line_number)));
            }
            if self.tron && !self.traced {
                self.traced = true;
                return Event::Trace(line_number);
            }
            self.traced = false;
            match self.step(line_number) {
                Ok(Some(s)) => return Event::Print(s),
                Ok(None) => {}
                Err(error) => {
                    return self.stop(Status::Aborted(error.in_line_number(line_number)));
                }
            }
        }
        Event::Running
    }

    fn step(&mut self, line_number: LineNumber) -> Result<Option<String>> {
        let statement = match self.listing.get(line_number) {
            Some(line) => line.ast()?,
            None => return Err(error!(UndefinedLine)),
        };
        let effect = execute(&statement, &mut self.vars)?;
        let directive = self.flow.resolve(&self.link, line_number, effect.branch)?;
        self.cursor = Flow::next_line(&self.link, line_number, directive);
        Ok(effect.output)
    }

    fn stop(&mut self, status: Status) -> Event {
        self.vars.clear();
        self.flow.clear();
        self.cursor = None;
        self.status = Some(status.clone());
        Event::Stopped(status)
    }
}
