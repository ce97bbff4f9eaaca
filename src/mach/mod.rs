/*!
## Rust Machine Module

This Rust module runs BASIC programs one line at a time.

*/

/// Sequential position of a line within a listing.
pub type Address = usize;

/// Longest line of text accepted from a saved program.
pub const MAX_LINE_LEN: usize = 255;

mod eval;
mod exec;
mod flow;
mod link;
mod listing;
mod operation;
mod runtime;
mod stack;
mod var;

#[cfg(test)]
mod tests;

pub use eval::{condition, evaluate};
pub use exec::{execute, Effect};
pub use flow::{Branch, Directive, Flow};
pub use link::Link;
pub use listing::Listing;
pub use operation::Operation;
pub use runtime::{run, Event, Outcome, Runtime, Status};
pub use stack::Stack;
pub use var::Var;
