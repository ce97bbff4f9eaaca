use super::{Address, Listing};
use crate::lang::LineNumber;
use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};

/// ## Line index
///
/// Links every line number of a listing to its sequential position.
/// Built once when a run starts and never changed during the run.

#[derive(Debug, Default, Clone)]
pub struct Link {
    symbols: BTreeMap<LineNumber, Address>,
    lines: Vec<LineNumber>,
}

impl Link {
    pub fn new(listing: &Listing) -> Link {
        let lines: Vec<LineNumber> = listing.line_numbers().collect();
        let symbols = lines
            .iter()
            .enumerate()
            .map(|(addr, ln)| (*ln, addr))
            .collect();
        Link { symbols, lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn contains(&self, line_number: LineNumber) -> bool {
        self.symbols.contains_key(&line_number)
    }

    pub fn address(&self, line_number: LineNumber) -> Option<Address> {
        self.symbols.get(&line_number).copied()
    }

    pub fn line_number(&self, addr: Address) -> Option<LineNumber> {
        self.lines.get(addr).copied()
    }

    pub fn first(&self) -> Option<LineNumber> {
        self.lines.first().copied()
    }

    /// The smallest line number strictly greater than `line_number`.
    pub fn after(&self, line_number: LineNumber) -> Option<LineNumber> {
        self.symbols
            .range((Excluded(line_number), Unbounded))
            .next()
            .map(|(ln, _)| *ln)
    }
}
