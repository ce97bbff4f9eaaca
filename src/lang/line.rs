use super::ast::Statement;
use super::lex::lex_columns;
use super::parse::parse;
use super::token::Token;
use super::{Column, Error, LineNumber};

type Result<T> = std::result::Result<T, Error>;

/// One line of a program as the user typed it: an optional line number
/// and the statement text that follows it.
#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    number: Option<LineNumber>,
    source: String,
}

impl Line {
    pub fn new(s: &str) -> Line {
        let trimmed = s.trim_start();
        let digits = trimmed.chars().take_while(|c| c.is_ascii_digit()).count();
        if digits > 0 {
            if let Ok(number) = trimmed[..digits].parse::<LineNumber>() {
                return Line {
                    number: Some(number),
                    source: trimmed[digits..].trim().to_string(),
                };
            }
        }
        Line {
            number: None,
            source: s.trim().to_string(),
        }
    }

    pub fn number(&self) -> Option<LineNumber> {
        self.number
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_direct(&self) -> bool {
        self.number.is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn tokens(&self) -> Result<Vec<(Column, Token)>> {
        self.located(lex_columns(&self.source))
    }

    pub fn ast(&self) -> Result<Statement> {
        let tokens = self.tokens()?;
        self.located(parse(&tokens))
    }

    /// The statement text rebuilt from its tokens, one space between each.
    pub fn normalized(&self) -> Result<String> {
        let tokens = self.tokens()?;
        Ok(tokens
            .iter()
            .filter(|(_, t)| *t != Token::Eol)
            .map(|(_, t)| t.to_string())
            .collect::<Vec<String>>()
            .join(" "))
    }

    fn located<T>(&self, r: Result<T>) -> Result<T> {
        match (r, self.number) {
            (Err(e), Some(number)) => Err(e.in_line_number(number)),
            (r, _) => r,
        }
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.number {
            Some(number) => write!(f, "{} {}", number, self.source),
            None => write!(f, "{}", self.source),
        }
    }
}
