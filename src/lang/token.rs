#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Unknown(String),
    Whitespace(usize),
    Number(String),
    Operator(Operator),
    LParen,
    RParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Unknown(s) => write!(f, "{}", s),
            Whitespace(u) => write!(f, "{s:>w$}", s = "", w = u),
            Number(s) => write!(f, "{}", s),
            Operator(s) => write!(f, "{}", s),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Caret,
    Multiply,
    Divide,
    Plus,
    Minus,
}

impl Operator {
    /// Accepts the ASCII operators and the display glyphs `×` and `÷`.
    pub fn from_char(ch: char) -> Option<Operator> {
        use Operator::*;
        match ch {
            '^' => Some(Caret),
            '*' | '×' => Some(Multiply),
            '/' | '÷' => Some(Divide),
            '+' => Some(Plus),
            '-' => Some(Minus),
            _ => None,
        }
    }

    /// Character shown on the expression display.
    pub fn glyph(self) -> char {
        use Operator::*;
        match self {
            Caret => '^',
            Multiply => '×',
            Divide => '÷',
            Plus => '+',
            Minus => '-',
        }
    }

    pub fn is_right_associative(self) -> bool {
        self == Operator::Caret
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Caret => write!(f, "^"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
        }
    }
}
