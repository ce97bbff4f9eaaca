use super::{ast::*, token::*, Column, Error, Target};

type Result<T> = std::result::Result<T, Error>;

/// Parse the tokens of one line, as produced by `lex_columns`, into a
/// single statement. Errors carry the column of the offending token.
pub fn parse(tokens: &[(Column, Token)]) -> Result<Statement> {
    Parser::parse(tokens)
}

struct Parser<'a> {
    token_stream: std::slice::Iter<'a, (Column, Token)>,
    peeked: Option<&'a (Column, Token)>,
    col: Column,
}

impl<'a> Parser<'a> {
    fn parse(tokens: &'a [(Column, Token)]) -> Result<Statement> {
        let mut parse = Parser {
            token_stream: tokens.iter(),
            peeked: None,
            col: 0..0,
        };
        match parse.statement() {
            Ok(statement) => Ok(statement),
            Err(e) => Err(e.in_column(&parse.col)),
        }
    }

    fn column(&self) -> Column {
        self.col.clone()
    }

    fn next(&mut self) -> Option<&'a Token> {
        let (col, token) = match self.peeked.take() {
            Some(pair) => pair,
            None => self.token_stream.next()?,
        };
        self.col = col.clone();
        Some(token)
    }

    fn peek(&mut self) -> Option<&'a Token> {
        if self.peeked.is_none() {
            self.peeked = self.token_stream.next();
        }
        self.peeked.map(|(_, token)| token)
    }

    fn statement(&mut self) -> Result<Statement> {
        let statement = match self.peek() {
            Some(Token::Ident(_)) => {
                let column = self.peek_column();
                Statement::r#let(self, column)
            }
            Some(Token::Word(word, _)) => {
                self.next();
                Statement::for_word(self, *word)
            }
            Some(Token::Eol) | None => return Ok(Statement::Empty(self.peek_column())),
            Some(_) => {
                self.next();
                Err(error!(SyntaxError; "EXPECTED STATEMENT"))
            }
        }?;
        self.end_of_line()?;
        Ok(statement)
    }

    fn peek_column(&mut self) -> Column {
        self.peek();
        match self.peeked {
            Some((col, _)) => col.clone(),
            None => self.column(),
        }
    }

    fn end_of_line(&mut self) -> Result<()> {
        match self.next() {
            Some(Token::Eol) | None => Ok(()),
            Some(_) => Err(error!(SyntaxError; "EXPECTED END OF LINE")),
        }
    }

    fn expression(&mut self) -> Result<Expression> {
        let first = self.operand()?;
        let mut rest = vec![];
        while let Some(Token::Operator(op)) = self.peek() {
            let arithmetic = match op {
                Operator::Plus => Arithmetic::Add,
                Operator::Minus => Arithmetic::Subtract,
                Operator::Multiply => Arithmetic::Multiply,
                Operator::Divide => Arithmetic::Divide,
                Operator::Modulus => Arithmetic::Modulus,
                _ => break,
            };
            self.next();
            let column = self.column();
            rest.push((column, arithmetic, self.operand()?));
        }
        Ok(Expression { first, rest })
    }

    fn operand(&mut self) -> Result<Operand> {
        match self.next() {
            Some(Token::LParen) => {
                let start = self.column().start;
                let expr = self.expression()?;
                self.expect_rparen()?;
                Ok(Operand::Paren(start..self.column().end, Box::new(expr)))
            }
            Some(Token::Ident(name)) => Ok(Operand::Var(Variable {
                column: self.column(),
                name: name.clone(),
            })),
            Some(Token::Literal(Literal::Number(_, val))) => {
                Ok(Operand::Number(self.column(), *val))
            }
            Some(Token::Operator(Operator::Minus)) => {
                let column = self.column();
                Ok(Operand::Negation(column, Box::new(self.operand()?)))
            }
            Some(Token::Operator(Operator::Plus)) => self.operand(),
            _ => Err(error!(SyntaxError; "EXPECTED EXPRESSION")),
        }
    }

    fn condition(&mut self) -> Result<Condition> {
        let lhs = self.expression()?;
        let comparator = match self.next() {
            Some(Token::Operator(op)) => match op {
                Operator::Equal => Comparator::Equal,
                Operator::NotEqual => Comparator::NotEqual,
                Operator::Less => Comparator::Less,
                Operator::LessEqual => Comparator::LessEqual,
                Operator::Greater => Comparator::Greater,
                Operator::GreaterEqual => Comparator::GreaterEqual,
                _ => return Err(error!(SyntaxError; "EXPECTED COMPARISON")),
            },
            _ => return Err(error!(SyntaxError; "EXPECTED COMPARISON")),
        };
        let rhs = self.expression()?;
        Ok(Condition {
            lhs,
            comparator,
            rhs,
        })
    }

    fn variable(&mut self) -> Result<Variable> {
        match self.next() {
            Some(Token::Ident(name)) => Ok(Variable {
                column: self.column(),
                name: name.clone(),
            }),
            _ => Err(error!(SyntaxError; "EXPECTED IDENTIFIER")),
        }
    }

    fn target(&mut self) -> Result<Target> {
        match self.next().and_then(Token::target) {
            Some(target) => Ok(target),
            None => Err(error!(SyntaxError; "INVALID LINE NUMBER")),
        }
    }

    fn expect_rparen(&mut self) -> Result<()> {
        match self.next() {
            Some(Token::RParen) => Ok(()),
            _ => Err(error!(SyntaxError; "EXPECTED RIGHT PARENTHESIS")),
        }
    }

    fn expect_word(&mut self, word: Word, msg: &str) -> Result<()> {
        match self.next() {
            Some(Token::Word(w, _)) if *w == word => Ok(()),
            _ => Err(error!(SyntaxError; msg)),
        }
    }
}

impl Statement {
    fn for_word(parse: &mut Parser, word: Word) -> Result<Statement> {
        let column = parse.column();
        use Word::*;
        match word {
            End => Ok(Statement::End(column)),
            Goto => Self::r#goto(parse, column),
            If => Self::r#if(parse, column),
            Let => Self::r#let(parse, column),
            Print => Self::r#print(parse, column),
            Rem => Self::r#rem(parse, column),
            Wend => Ok(Statement::Wend(column)),
            While => Self::r#while(parse, column),
            Input => Err(error!(SyntaxError; "STATEMENT NOT SUPPORTED")),
            Else | Endif | Then => Err(error!(SyntaxError; "EXPECTED STATEMENT")),
        }
    }

    fn r#let(parse: &mut Parser, column: Column) -> Result<Statement> {
        let var = parse.variable()?;
        match parse.next() {
            Some(Token::Operator(Operator::Equal)) => {}
            _ => return Err(error!(SyntaxError; "EXPECTED EQUALS SIGN")),
        }
        let expr = parse.expression()?;
        Ok(Statement::Let(column, var, expr))
    }

    fn r#print(parse: &mut Parser, column: Column) -> Result<Statement> {
        let printable = match parse.next() {
            Some(Token::Literal(Literal::String(s))) => Printable::String(parse.column(), s.clone()),
            Some(Token::Ident(name)) => Printable::Var(Variable {
                column: parse.column(),
                name: name.clone(),
            }),
            _ => return Err(error!(SyntaxError; "EXPECTED STRING OR VARIABLE")),
        };
        Ok(Statement::Print(column, printable))
    }

    fn r#if(parse: &mut Parser, column: Column) -> Result<Statement> {
        let condition = parse.condition()?;
        parse.expect_word(Word::Then, "EXPECTED THEN")?;
        let target = parse.target()?;
        Ok(Statement::If(column, condition, target))
    }

    fn r#goto(parse: &mut Parser, column: Column) -> Result<Statement> {
        Ok(Statement::Goto(column, parse.target()?))
    }

    fn r#while(parse: &mut Parser, column: Column) -> Result<Statement> {
        Ok(Statement::While(column, parse.condition()?))
    }

    fn r#rem(parse: &mut Parser, column: Column) -> Result<Statement> {
        if let Some(Token::Remark(_)) = parse.peek() {
            parse.next();
        }
        Ok(Statement::Rem(column))
    }
}
