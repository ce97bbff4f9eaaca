extern crate ansi_term;
extern crate clap;
extern crate ctrlc;
extern crate linefeed;
use ansi_term::Style;
use basic::error;
use basic::lang::{Column, Error, LineNumber, MAX_LINE_NUMBER};
use basic::mach::{Event, Listing, Runtime, Status};
use clap::Parser;
use linefeed::{Completer, Completion, DefaultTerminal, Interface, Prompter, ReadResult, Terminal};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

const CYCLES: usize = 5000;

#[derive(Parser)]
#[command(name = "basic")]
#[command(about = "A line-numbered BASIC interpreter")]
#[command(version)]
struct Cli {
    /// Saved program to run without starting the console
    file: Option<PathBuf>,

    /// Report each line number before the line runs
    #[arg(short, long)]
    trace: bool,

    /// Directory used by SAVE, LOAD, DELETE and FILES
    #[arg(short, long, default_value = "saves")]
    saves: PathBuf,
}

pub fn main() {
    let cli = Cli::parse();
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        eprintln!("Error setting Ctrl-C handler: {}", error);
    }
    let result = match cli.file.clone() {
        Some(path) => batch(&path, cli.trace, interrupted),
        None => main_loop(cli, interrupted).map(|_| true),
    };
    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    }
}

/// Run one saved program to the end. `Ok(false)` when it aborted.
fn batch(path: &Path, trace: bool, interrupted: Arc<AtomicBool>) -> std::io::Result<bool> {
    let listing = match load(path) {
        Ok(listing) => listing,
        Err(error) => {
            eprintln!("?{}", error);
            return Ok(false);
        }
    };
    let mut runtime = Runtime::new(&listing);
    runtime.set_tron(trace);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            runtime.interrupt();
        }
        match runtime.execute(CYCLES) {
            Event::Running => {}
            Event::Print(s) => writeln!(out, "{}", s)?,
            Event::Trace(line_number) => write!(out, "[{}]", line_number)?,
            Event::Stopped(Status::Completed) => return Ok(true),
            Event::Stopped(Status::Aborted(error)) => {
                out.flush()?;
                eprintln!("?{}", error);
                return Ok(false);
            }
        }
    }
}

fn main_loop(cli: Cli, interrupted: Arc<AtomicBool>) -> std::io::Result<()> {
    let interface = Interface::new("BASIC")?;
    interface.set_prompt("> ")?;
    let mut console = Console::new(cli);
    let mut print_ready = true;

    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            if let Some(runtime) = console.runtime.as_mut() {
                runtime.interrupt();
            }
        }
        match console.runtime.as_mut().map(|r| r.execute(CYCLES)) {
            Some(Event::Running) => {}
            Some(Event::Print(s)) => {
                console.end_trace(&interface)?;
                interface.write_fmt(format_args!("{}\n", s))?;
            }
            Some(Event::Trace(line_number)) => {
                console.traced = true;
                interface.write_fmt(format_args!(
                    "{}",
                    Style::new().dimmed().paint(format!("[{}]", line_number))
                ))?;
            }
            Some(Event::Stopped(status)) => {
                console.end_trace(&interface)?;
                if let Status::Aborted(error) = status {
                    print_error(&interface, &error)?;
                }
                console.runtime = None;
                print_ready = true;
            }
            None => {
                if print_ready {
                    print_ready = false;
                    interface.write_fmt(format_args!("READY.\n"))?;
                }
                let saved_completer = interface.completer();
                interface.set_completer(Arc::new(LineCompleter::new(console.listing.clone())));
                let input = match interface.read_line()? {
                    ReadResult::Input(input) => input,
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                };
                interface.set_completer(saved_completer);
                if !input.trim().is_empty() {
                    interface.add_history_unique(input.clone());
                }
                match console.enter(&interface, &input) {
                    Ok(true) => {}
                    Ok(false) => break,
                    Err(error) => {
                        print_error(&interface, &error)?;
                        print_ready = true;
                    }
                }
            }
        }
    }
    Ok(())
}

fn print_error<T: Terminal>(interface: &Interface<T>, error: &Error) -> std::io::Result<()> {
    interface.write_fmt(format_args!(
        "{}\n",
        Style::new().bold().paint(format!("?{}", error))
    ))
}

/// The program being edited and the run in progress, if any.
struct Console {
    listing: Listing,
    runtime: Option<Runtime>,
    saves: PathBuf,
    tron: bool,
    traced: bool,
}

impl Console {
    fn new(cli: Cli) -> Console {
        Console {
            listing: Listing::default(),
            runtime: None,
            saves: cli.saves,
            tron: cli.trace,
            traced: false,
        }
    }

    /// Numbered lines edit the program; anything else is a command.
    /// `Ok(false)` leaves the console.
    fn enter(&mut self, interface: &Interface<DefaultTerminal>, input: &str) -> Result<bool, Error> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(true);
        }
        if input.starts_with(|c: char| c.is_ascii_digit()) {
            self.listing.load_str(input)?;
            return Ok(true);
        }
        let mut words = input.split_whitespace();
        let command = words.next().unwrap_or_default().to_ascii_uppercase();
        let name = words.next();
        if words.next().is_some() {
            return Err(error!(SyntaxError; "EXPECTED END OF LINE"));
        }
        match (command.as_str(), name) {
            ("RUN", None) => {
                let mut runtime = Runtime::new(&self.listing);
                runtime.set_tron(self.tron);
                self.runtime = Some(runtime);
            }
            ("LIST", None) => {
                for (s, columns) in self.listing.list(1..=MAX_LINE_NUMBER) {
                    write_io(interface.write_fmt(format_args!(
                        "{}\n",
                        decorate_list(&s, &columns)
                    )))?;
                }
            }
            ("NEW", None) => self.listing.clear(),
            ("TRON", None) => self.tron = true,
            ("TROFF", None) => self.tron = false,
            ("END", None) | ("SYSTEM", None) => return Ok(false),
            ("SAVE", Some(name)) => {
                let path = saved_path(&self.saves, name)?;
                save(&self.listing, &path)?;
            }
            ("LOAD", Some(name)) => {
                self.listing = load(&saved_path(&self.saves, name)?)?;
            }
            ("DELETE", Some(name)) => {
                let path = saved_path(&self.saves, name)?;
                fs::remove_file(&path).map_err(|e| io_error(&path, e))?;
            }
            ("FILES", None) => {
                for name in files(&self.saves)? {
                    write_io(interface.write_fmt(format_args!("{}\n", name)))?;
                }
            }
            ("SAVE", None) | ("LOAD", None) | ("DELETE", None) => {
                return Err(error!(SyntaxError; "MISSING FILE NAME"));
            }
            _ => return Err(error!(SyntaxError; &format!("UNKNOWN COMMAND {}", command))),
        }
        Ok(true)
    }

    fn end_trace<T: Terminal>(&mut self, interface: &Interface<T>) -> std::io::Result<()> {
        if self.traced {
            self.traced = false;
            interface.write_fmt(format_args!("\n"))?;
        }
        Ok(())
    }
}

struct LineCompleter {
    listing: Listing,
}

impl LineCompleter {
    fn new(listing: Listing) -> LineCompleter {
        LineCompleter { listing }
    }
}

impl<Term: Terminal> Completer<Term> for LineCompleter {
    fn complete(
        &self,
        _word: &str,
        prompter: &Prompter<Term>,
        _start: usize,
        _end: usize,
    ) -> Option<Vec<Completion>> {
        let num = prompter.buffer().parse::<LineNumber>().ok()?;
        let line = self.listing.get(num)?;
        let mut comp = Completion::simple(line.to_string());
        comp.suffix = linefeed::complete::Suffix::None;
        Some(vec![comp])
    }
}

fn decorate_list(ins: &str, columns: &[Column]) -> String {
    let mut under_on = false;
    let mut out = String::new();
    let style = Style::new().underline();
    let prefix = format!("{}", style.prefix());
    let suffix = format!("{}", style.suffix());
    let mut index = 0;
    for ch in ins.chars() {
        let do_under = columns.iter().any(|c| c.contains(&index));
        if under_on {
            if !do_under {
                out.push_str(&suffix);
            }
        } else if do_under {
            out.push_str(&prefix);
        }
        under_on = do_under;
        out.push(ch);
        index += 1;
    }
    if columns.iter().any(|c| c.start == index) {
        under_on = true;
        out.push_str(&prefix);
        out.push(' ');
    }
    if under_on {
        out.push_str(&suffix);
    }
    out
}

fn saved_path(saves: &Path, name: &str) -> Result<PathBuf, Error> {
    let name = name.trim_matches('"');
    if name.is_empty() || name.contains(|c| c == '/' || c == '\\') {
        return Err(error!(SyntaxError; "INVALID FILE NAME"));
    }
    Ok(saves.join(format!("{}.txt", name)))
}

fn io_error(path: &Path, error: std::io::Error) -> Error {
    let msg = format!("{}: {}", path.display(), error);
    match error.kind() {
        ErrorKind::NotFound => error!(FileNotFound; &msg),
        _ => error!(InternalError; &msg),
    }
}

fn write_io(result: std::io::Result<()>) -> Result<(), Error> {
    result.map_err(|error| error!(InternalError; &error.to_string()))
}

fn load(path: &Path) -> Result<Listing, Error> {
    let text = fs::read_to_string(path).map_err(|e| io_error(path, e))?;
    Listing::from_source(&text)
}

fn save(listing: &Listing, path: &Path) -> Result<(), Error> {
    if listing.is_empty() {
        return Err(error!(InternalError; "NOTHING TO SAVE"));
    }
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| io_error(dir, e))?;
    }
    let mut file = fs::File::create(path).map_err(|e| io_error(path, e))?;
    for line in listing.lines() {
        writeln!(file, "{}", line).map_err(|e| io_error(path, e))?;
    }
    Ok(())
}

/// Names of the saved programs, without the extension.
fn files(saves: &Path) -> Result<Vec<String>, Error> {
    let entries = match fs::read_dir(saves) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(vec![]),
        Err(e) => return Err(io_error(saves, e)),
    };
    let mut names = vec![];
    for entry in entries {
        let path = entry.map_err(|e| io_error(saves, e))?.path();
        if path.extension().map_or(false, |ext| ext == "txt") {
            if let Some(stem) = path.file_stem() {
                names.push(stem.to_string_lossy().into_owned());
            }
        }
    }
    names.sort();
    Ok(names)
}
