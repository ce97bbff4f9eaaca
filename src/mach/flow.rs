use super::{Link, Listing, Stack};
use crate::error;
use crate::lang::{lex, token::Word, Error, LineNumber, Target};
use std::collections::HashMap;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// What a statement asks of the control flow once it has run.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Branch {
    Advance,
    Goto(Target),
    Then(Target),
    While(bool),
    Wend,
    End,
}

/// Where the cursor goes next.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Directive {
    Advance,
    JumpTo(LineNumber),
    Terminate,
}

/// ## Control flow
///
/// Turns a `Branch` into a `Directive`. Each `WHILE` is paired with its
/// `WEND` by nesting position when the run starts. The `WHILE` statements
/// whose loops are open are kept innermost last.

#[derive(Debug)]
pub struct Flow {
    loops: Stack<LineNumber>,
    whiles: HashMap<LineNumber, LineNumber>,
    wends: HashMap<LineNumber, LineNumber>,
}

impl Flow {
    pub fn new(listing: &Listing, link: &Link) -> Flow {
        let mut open = vec![];
        let mut whiles = HashMap::new();
        let mut wends = HashMap::new();
        for addr in 0..link.len() {
            let line_number = match link.line_number(addr) {
                Some(line_number) => line_number,
                None => break,
            };
            match Flow::leading_word(listing, line_number) {
                Some(Word::While) => open.push(line_number),
                Some(Word::Wend) => {
                    if let Some(while_line) = open.pop() {
                        whiles.insert(while_line, line_number);
                        wends.insert(line_number, while_line);
                    }
                }
                _ => {}
            }
        }
        Flow {
            loops: Stack::new("TOO MANY NESTED WHILE LOOPS"),
            whiles,
            wends,
        }
    }

    pub fn clear(&mut self) {
        self.loops.clear();
    }

    pub fn depth(&self) -> usize {
        self.loops.len()
    }

    pub fn resolve(&mut self, link: &Link, current: LineNumber, branch: Branch) -> Result<Directive> {
        match branch {
            Branch::Advance => Ok(Directive::Advance),
            Branch::End => Ok(Directive::Terminate),
            Branch::Goto(target) => match Flow::existing(link, target) {
                Some(line_number) => Ok(Directive::JumpTo(line_number)),
                None => Err(error!(UndefinedLine; &format!("GOTO {}", target))),
            },
            Branch::Then(target) => match Flow::existing(link, target) {
                Some(line_number) => Ok(Directive::JumpTo(line_number)),
                None => Ok(Directive::Terminate),
            },
            Branch::While(true) => {
                match self.open_at(current) {
                    Some(index) => self.loops.truncate(index + 1),
                    None => self.loops.push(current)?,
                }
                Ok(Directive::Advance)
            }
            Branch::While(false) => {
                if let Some(index) = self.open_at(current) {
                    self.loops.truncate(index);
                }
                match self.whiles.get(&current) {
                    Some(&wend) => Ok(match link.after(wend) {
                        Some(next) => Directive::JumpTo(next),
                        None => Directive::Terminate,
                    }),
                    None => Err(error!(WhileWithoutWend, current)),
                }
            }
            Branch::Wend => match self.wends.get(&current) {
                Some(&while_line) => Ok(Directive::JumpTo(while_line)),
                None => Err(error!(WendWithoutWhile)),
            },
        }
    }

    /// The line the cursor moves to after `current`, or `None` when the
    /// run is over.
    pub fn next_line(link: &Link, current: LineNumber, directive: Directive) -> Option<LineNumber> {
        match directive {
            Directive::Advance => link.after(current),
            Directive::JumpTo(line_number) => Some(line_number),
            Directive::Terminate => None,
        }
    }

    fn existing(link: &Link, target: Target) -> Option<LineNumber> {
        LineNumber::try_from(target)
            .ok()
            .filter(|line_number| link.contains(*line_number))
    }

    /// Loops opened after this one were left by a jump.
    fn open_at(&self, line_number: LineNumber) -> Option<usize> {
        self.loops.iter().position(|&open| open == line_number)
    }

    fn leading_word(listing: &Listing, line_number: LineNumber) -> Option<Word> {
        let line = listing.get(line_number)?;
        let tokens = lex(line.source()).ok()?;
        tokens.first()?.word().copied()
    }
}
