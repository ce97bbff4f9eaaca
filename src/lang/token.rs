use super::Target;

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Literal(Literal),
    Word(Word, String),
    Operator(Operator),
    Ident(String),
    Remark(String),
    LParen,
    RParen,
    Eol,
}

impl Token {
    pub fn word(&self) -> Option<&Word> {
        match self {
            Token::Word(word, _) => Some(word),
            _ => None,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Literal(s) => write!(f, "{}", s),
            Word(_, lexeme) => write!(f, "{}", lexeme),
            Operator(s) => write!(f, "{}", s),
            Ident(s) => write!(f, "{}", s),
            Remark(s) => write!(f, "{}", s),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
            Eol => Ok(()),
        }
    }
}

impl Token {
    /// The line named by `GOTO` or `THEN`. Any unsigned integer is taken;
    /// numbers too large for `u64` saturate and can never name a line.
    pub fn target(&self) -> Option<Target> {
        match self {
            Token::Literal(Literal::Number(s, _)) if s.chars().all(|c| c.is_ascii_digit()) => {
                Some(s.parse::<Target>().unwrap_or(Target::max_value()))
            }
            _ => None,
        }
    }
}

/// Number literals keep their source text next to the parsed value.
#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    Number(String, f64),
    String(String),
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Literal::*;
        match self {
            Number(s, _) => write!(f, "{}", s),
            String(s) => write!(f, "\"{}\"", s),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Word {
    Else,
    End,
    Endif,
    Goto,
    If,
    Input,
    Let,
    Print,
    Rem,
    Then,
    Wend,
    While,
}

impl Word {
    /// Case-insensitive keyword lookup.
    pub fn from_keyword(s: &str) -> Option<Word> {
        use Word::*;
        let word = match s.to_ascii_uppercase().as_str() {
            "ELSE" => Else,
            "END" => End,
            "ENDIF" => Endif,
            "GOTO" => Goto,
            "IF" => If,
            "INPUT" => Input,
            "LET" => Let,
            "PRINT" => Print,
            "REM" => Rem,
            "THEN" => Then,
            "WEND" => Wend,
            "WHILE" => While,
            _ => return None,
        };
        Some(word)
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            Else => write!(f, "ELSE"),
            End => write!(f, "END"),
            Endif => write!(f, "ENDIF"),
            Goto => write!(f, "GOTO"),
            If => write!(f, "IF"),
            Input => write!(f, "INPUT"),
            Let => write!(f, "LET"),
            Print => write!(f, "PRINT"),
            Rem => write!(f, "REM"),
            Then => write!(f, "THEN"),
            Wend => write!(f, "WEND"),
            While => write!(f, "WHILE"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Multiply,
    Divide,
    Modulus,
    Plus,
    Minus,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

impl Operator {
    pub fn is_arithmetic(&self) -> bool {
        use Operator::*;
        match self {
            Multiply | Divide | Modulus | Plus | Minus => true,
            Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual => false,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Modulus => write!(f, "%"),
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Equal => write!(f, "="),
            NotEqual => write!(f, "<>"),
            Less => write!(f, "<"),
            LessEqual => write!(f, "<="),
            Greater => write!(f, ">"),
            GreaterEqual => write!(f, ">="),
        }
    }
}
