use crate::lang::token::Operator;

/// One discrete user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// `0..=9`; anything larger is ignored.
    Digit(u8),
    Decimal,
    /// `+ - * /`. A `^` here acts as `Power`.
    Operator(Operator),
    Power,
    Equals,
    Clear,
    Delete,
    OpenParen,
    CloseParen,
    Negate,
    Sin,
    Cos,
    Tan,
    Log,
    Ln,
    Square,
    Sqrt,
    Reciprocal,
    Pi,
    Ans,
    /// Starts the exponent of a number in scientific notation.
    Exponent,
    Mode,
    Shift,
    MemoryAdd,
    MemorySubtract,
    MemoryRecall,
    MemoryClear,
}

impl Key {
    /// Keyboard mapping for single characters.
    pub fn from_char(ch: char) -> Option<Key> {
        use Key::*;
        if let Some(d) = ch.to_digit(10) {
            return Some(Digit(d as u8));
        }
        if ch == '^' {
            return Some(Power);
        }
        if let Some(op) = crate::lang::token::Operator::from_char(ch) {
            return Some(Operator(op));
        }
        match ch {
            '.' => Some(Decimal),
            '=' | '\n' | '\r' => Some(Equals),
            'c' | 'C' | '\u{1b}' => Some(Clear),
            '\u{8}' | '\u{7f}' => Some(Delete),
            '(' => Some(OpenParen),
            ')' => Some(CloseParen),
            _ => None,
        }
    }

    /// Named keys, case-insensitive.
    pub fn from_name(name: &str) -> Option<Key> {
        use Key::*;
        let key = match name.to_ascii_lowercase().as_str() {
            "sin" => Sin,
            "cos" => Cos,
            "tan" => Tan,
            "log" => Log,
            "ln" => Ln,
            "sqr" | "square" => Square,
            "sqrt" => Sqrt,
            "inv" | "1/x" => Reciprocal,
            "neg" | "+/-" => Negate,
            "pi" => Pi,
            "ans" => Ans,
            "exp" => Exponent,
            "pow" => Power,
            "mode" => Mode,
            "shift" => Shift,
            "del" => Delete,
            "ac" | "clear" => Clear,
            "m+" => MemoryAdd,
            "m-" => MemorySubtract,
            "mr" => MemoryRecall,
            "mc" => MemoryClear,
            _ => {
                let mut chars = name.chars();
                return match (chars.next(), chars.next()) {
                    (Some(ch), None) => Key::from_char(ch),
                    _ => None,
                };
            }
        };
        Some(key)
    }
}
