use super::{Column, Target};

#[derive(Debug, PartialEq)]
pub enum Statement {
    Empty(Column),
    End(Column),
    Goto(Column, Target),
    If(Column, Condition, Target),
    Let(Column, Variable, Expression),
    Print(Column, Printable),
    Rem(Column),
    Wend(Column),
    While(Column, Condition),
}

#[derive(Debug, PartialEq, Clone)]
pub struct Variable {
    pub column: Column,
    pub name: String,
}

#[derive(Debug, PartialEq)]
pub enum Printable {
    String(Column, String),
    Var(Variable),
}

/// Relational test used by `IF` and `WHILE`.
#[derive(Debug, PartialEq)]
pub struct Condition {
    pub lhs: Expression,
    pub comparator: Comparator,
    pub rhs: Expression,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Comparator {
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

/// An expression is a first operand followed by any number of
/// `(operator, operand)` pairs. There is no precedence: the pairs are
/// folded strictly left to right.
#[derive(Debug, PartialEq)]
pub struct Expression {
    pub first: Operand,
    pub rest: Vec<(Column, Arithmetic, Operand)>,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Arithmetic {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulus,
}

#[derive(Debug, PartialEq)]
pub enum Operand {
    Number(Column, f64),
    Var(Variable),
    Paren(Column, Box<Expression>),
    Negation(Column, Box<Operand>),
}
