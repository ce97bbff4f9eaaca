use super::MAX_LINE_LEN;
use crate::error;
use crate::lang::{Column, Error, Line, LineNumber, MAX_LINE_NUMBER};
use std::collections::{btree_map::Values, BTreeMap};
use std::ops::RangeInclusive;
use std::sync::Arc;

type Result<T> = std::result::Result<T, Error>;

/// ## Program source
///
/// The line table of a program, ordered by line number. Cloning is cheap
/// and clones share the lines until one of them is edited, so a run can
/// hold on to its own snapshot.

#[derive(Debug, Clone, Default)]
pub struct Listing {
    source: Arc<BTreeMap<LineNumber, Line>>,
}

impl Listing {
    /// Build a listing from text in the saved format, one
    /// `<number> <code>` line per text line.
    pub fn from_source(text: &str) -> Result<Listing> {
        let mut listing = Listing::default();
        for (index, line) in text.lines().enumerate() {
            if let Err(error) = listing.load_str(line) {
                return Err(error.message(&format!(
                    "In line {} of the file. (Not BASIC line number)",
                    index + 1
                )));
            }
        }
        Ok(listing)
    }

    pub fn clear(&mut self) {
        self.source = Arc::default();
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn get(&self, ln: LineNumber) -> Option<&Line> {
        self.source.get(&ln)
    }

    pub fn insert(&mut self, line: Line) -> Result<Option<Line>> {
        let number = match line.number() {
            Some(number) => number,
            None => return Err(error!(DirectStatementInFile)),
        };
        if number == 0 {
            return Err(error!(SyntaxError; "INVALID LINE NUMBER"));
        }
        if number > MAX_LINE_NUMBER {
            return Err(error!(Overflow; "INVALID LINE NUMBER"));
        }
        Ok(Arc::make_mut(&mut self.source).insert(number, line))
    }

    pub fn remove(&mut self, ln: LineNumber) -> Option<Line> {
        if !self.source.contains_key(&ln) {
            return None;
        }
        Arc::make_mut(&mut self.source).remove(&ln)
    }

    pub fn lines(&self) -> Values<'_, LineNumber, Line> {
        self.source.values()
    }

    pub fn line_numbers(&self) -> impl Iterator<Item = LineNumber> + '_ {
        self.source.keys().copied()
    }

    /// Enter one line of saved or typed text. A line number on its own
    /// deletes that line.
    pub fn load_str(&mut self, line: &str) -> Result<()> {
        if line.len() > MAX_LINE_LEN {
            return Err(error!(LineBufferOverflow));
        }
        let line = Line::new(line);
        if line.is_empty() {
            if let Some(number) = line.number() {
                self.remove(number);
            }
            Ok(())
        } else if line.is_direct() {
            Err(error!(DirectStatementInFile))
        } else {
            self.insert(line)?;
            Ok(())
        }
    }

    /// Lines in `range` as displayed text, each with the columns of any
    /// lexical or syntax error found on it.
    pub fn list(&self, range: RangeInclusive<LineNumber>) -> Vec<(String, Vec<Column>)> {
        self.source
            .range(range)
            .map(|(number, line)| {
                let offset = number.to_string().len() + 1;
                let columns = match line.ast() {
                    Err(e) if e.column() != (0..0) => {
                        let col = e.column();
                        vec![col.start + offset..col.end + offset]
                    }
                    _ => vec![],
                };
                (line.to_string(), columns)
            })
            .collect()
    }
}
