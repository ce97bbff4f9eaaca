//! # BASIC
//!
//! A small line-numbered BASIC with `LET`, `PRINT`, `IF`, `GOTO` and
//! `WHILE` loops.
//!
//! Begin by opening a terminal and running the executable. If you get the
//! following, you have achieved success.
//! ```text
//! READY.
//! > █
//! ```
//!
//! Programs can also be run from the library. Every run starts with no
//! variables and collects the lines the program printed.
//! ```
//! use basic::mach::{run, Listing, Status};
//!
//! let listing = Listing::from_source("10 X = 2 + 3 * 4\n20 PRINT X\n").unwrap();
//! let outcome = run(&listing);
//! assert_eq!(outcome.lines, vec!["20"]);
//! assert_eq!(outcome.status, Status::Completed);
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

pub mod lang;
pub mod mach;
