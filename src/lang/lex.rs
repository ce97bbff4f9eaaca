use super::{token::*, Column, Error};

type Result<T> = std::result::Result<T, Error>;

/// Tokenize the statement text of one line. The result always ends
/// with `Token::Eol`.
pub fn lex(s: &str) -> Result<Vec<Token>> {
    BasicLexer::lex(s)
}

/// Tokenize like `lex` and also report the column each token occupies
/// in the source text. The trailing `Token::Eol` gets an empty column.
pub fn lex_columns(s: &str) -> Result<Vec<(Column, Token)>> {
    BasicLexer::lex_columns(s)
}

fn is_basic_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\r'
}

fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_basic_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_basic_alphanumeric(c: char) -> bool {
    is_basic_alphabetic(c) || is_basic_digit(c)
}

struct BasicLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    col: usize,
    line: usize,
    remark: bool,
}

impl<'a> BasicLexer<'a> {
    fn lex(s: &str) -> Result<Vec<Token>> {
        Ok(BasicLexer::lex_columns(s)?
            .into_iter()
            .map(|(_, token)| token)
            .collect())
    }

    fn lex_columns(s: &str) -> Result<Vec<(Column, Token)>> {
        let mut lexer = BasicLexer {
            chars: s.chars().peekable(),
            col: 0,
            line: 1,
            remark: false,
        };
        let mut tokens = vec![];
        while let Some(token) = lexer.token() {
            tokens.push(token?);
        }
        tokens.push((lexer.col..lexer.col, Token::Eol));
        Ok(tokens)
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        self.col += 1;
        Some(ch)
    }

    fn token(&mut self) -> Option<Result<(Column, Token)>> {
        self.whitespace();
        let pk = *self.chars.peek()?;
        let start = self.col;
        let token = if self.remark {
            let s: String = self.chars.by_ref().collect();
            self.col += s.chars().count();
            Ok(Token::Remark(s.trim_end().to_string()))
        } else if is_basic_digit(pk) {
            Ok(self.number())
        } else if is_basic_alphabetic(pk) {
            let token = self.alphabetic();
            if let Token::Word(Word::Rem, _) = token {
                self.remark = true;
            }
            Ok(token)
        } else if pk == '"' {
            self.string()
        } else {
            self.minutia()
        };
        Some(token.map(|t| (start..self.col, t)))
    }

    fn whitespace(&mut self) {
        while let Some(&pk) = self.chars.peek() {
            if pk == '\n' {
                self.line += 1;
            } else if !is_basic_whitespace(pk) {
                break;
            }
            self.next_char();
        }
    }

    fn number(&mut self) -> Token {
        let mut s = String::new();
        let mut decimal = false;
        while let Some(&pk) = self.chars.peek() {
            if is_basic_digit(pk) {
                s.push(pk);
                self.next_char();
                continue;
            }
            if pk == '.' && !decimal {
                let mut ahead = self.chars.clone();
                ahead.next();
                if let Some(&after) = ahead.peek() {
                    if is_basic_digit(after) {
                        decimal = true;
                        s.push(pk);
                        self.next_char();
                        continue;
                    }
                }
            }
            break;
        }
        let value = s.parse::<f64>().unwrap_or(f64::INFINITY);
        Token::Literal(Literal::Number(s, value))
    }

    fn string(&mut self) -> Result<Token> {
        let start = self.col;
        let mut s = String::new();
        self.next_char();
        loop {
            match self.next_char() {
                Some('"') => return Ok(Token::Literal(Literal::String(s))),
                Some(ch) => {
                    if ch == '\n' {
                        self.line += 1;
                    }
                    s.push(ch);
                }
                None => {
                    return Err(self.located(
                        error!(LexicalError, ..&(start..self.col)),
                        "UNTERMINATED STRING",
                    ))
                }
            }
        }
    }

    fn alphabetic(&mut self) -> Token {
        let mut s = String::new();
        while let Some(&pk) = self.chars.peek() {
            if !is_basic_alphanumeric(pk) {
                break;
            }
            s.push(pk);
            self.next_char();
        }
        match Word::from_keyword(&s) {
            Some(word) => Token::Word(word, s),
            None => Token::Ident(s),
        }
    }

    fn minutia(&mut self) -> Result<Token> {
        let start = self.col;
        let ch = match self.next_char() {
            Some(ch) => ch,
            None => return Err(error!(InternalError; "LEXER OUT OF INPUT")),
        };
        let token = match ch {
            '(' => Token::LParen,
            ')' => Token::RParen,
            '+' => Token::Operator(Operator::Plus),
            '-' => Token::Operator(Operator::Minus),
            '*' => Token::Operator(Operator::Multiply),
            '/' => Token::Operator(Operator::Divide),
            '%' => Token::Operator(Operator::Modulus),
            '=' => Token::Operator(Operator::Equal),
            '<' => match self.chars.peek() {
                Some('=') => {
                    self.next_char();
                    Token::Operator(Operator::LessEqual)
                }
                Some('>') => {
                    self.next_char();
                    Token::Operator(Operator::NotEqual)
                }
                _ => Token::Operator(Operator::Less),
            },
            '>' => match self.chars.peek() {
                Some('=') => {
                    self.next_char();
                    Token::Operator(Operator::GreaterEqual)
                }
                _ => Token::Operator(Operator::Greater),
            },
            _ => {
                let msg = format!("UNEXPECTED CHARACTER {:?}", ch);
                return Err(self.located(error!(LexicalError, ..&(start..self.col)), &msg));
            }
        };
        Ok(token)
    }

    fn located(&self, error: Error, msg: &str) -> Error {
        if self.line > 1 {
            error.message(&format!("{} ON SOURCE LINE {}", msg, self.line))
        } else {
            error.message(msg)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_lex_let() {
        let tokens = lex("LET X = 12.5").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Word(Word::Let, "LET".to_string()),
                Token::Ident("X".to_string()),
                Token::Operator(Operator::Equal),
                Token::Literal(Literal::Number("12.5".to_string(), 12.5)),
                Token::Eol,
            ]
        );
    }

    #[test]
    fn test_columns() {
        let tokens = lex_columns("A1 <= \"hi\"").unwrap();
        let cols: Vec<Column> = tokens.iter().map(|(c, _)| c.clone()).collect();
        assert_eq!(cols, vec![0..2, 3..5, 6..10, 10..10]);
    }

    #[test]
    fn test_dot_without_digit() {
        let e = lex("X = 12.").unwrap_err();
        assert_eq!(e.code(), ErrorCode::LexicalError);
        assert_eq!(e.column(), 6..7);
    }

    #[test]
    fn test_newline_counts_lines() {
        let e = lex("PRINT X\n  #").unwrap_err();
        assert_eq!(
            e.to_string(),
            "LEXICAL ERROR IN (10..11); UNEXPECTED CHARACTER '#' ON SOURCE LINE 2"
        );
    }

    #[test]
    fn test_remark_is_not_lexed() {
        let tokens = lex("rem it's #1, really  ").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Word(Word::Rem, "rem".to_string()),
                Token::Remark("it's #1, really".to_string()),
                Token::Eol,
            ]
        );
    }
}
