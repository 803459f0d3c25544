use super::token::*;

pub fn lex(s: &str) -> Vec<Token> {
    CalcLexer::lex(s)
}

fn is_calc_whitespace(c: char) -> bool {
    c.is_whitespace()
}

fn is_calc_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_calc_minutia(c: char) -> bool {
    c == '(' || c == ')' || Operator::from_char(c).is_some()
}

trait Tokenizers<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>>;

    fn whitespace(&mut self) -> Option<Token> {
        let mut len = 0;
        while let Some(pk) = self.chars().peek() {
            if !is_calc_whitespace(*pk) {
                break;
            }
            self.chars().next();
            len += 1;
        }
        Some(Token::Whitespace(len))
    }

    /// Digits with at most one decimal point, then an optional
    /// exponent marker with optional sign. The exponent digits are
    /// not checked here; a bare marker is rejected by the parser.
    fn number(&mut self) -> Option<Token> {
        let mut s = String::new();
        let mut decimal = false;
        let mut exp = false;
        while let Some(pk) = self.chars().peek() {
            let ch = *pk;
            if is_calc_digit(ch) {
                s.push(ch);
            } else if ch == '.' && !decimal && !exp {
                decimal = true;
                s.push(ch);
            } else if (ch == 'e' || ch == 'E') && !exp {
                exp = true;
                s.push('E');
                self.chars().next();
                if let Some(sign) = self.chars().peek() {
                    if *sign == '+' || *sign == '-' {
                        s.push(*sign);
                        self.chars().next();
                    }
                }
                continue;
            } else {
                break;
            }
            self.chars().next();
        }
        Some(Token::Number(s))
    }

    fn minutia(&mut self) -> Option<Token> {
        let ch = self.chars().next()?;
        if let Some(op) = Operator::from_char(ch) {
            return Some(Token::Operator(op));
        }
        match ch {
            '(' => Some(Token::LParen),
            ')' => Some(Token::RParen),
            _ => {
                let mut s = ch.to_string();
                while let Some(pk) = self.chars().peek() {
                    if is_calc_whitespace(*pk) || is_calc_digit(*pk) || is_calc_minutia(*pk) {
                        break;
                    }
                    s.push(*pk);
                    self.chars().next();
                }
                Some(Token::Unknown(s))
            }
        }
    }
}

struct CalcLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> Tokenizers<'a> for CalcLexer<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>> {
        &mut self.chars
    }
}

impl<'a> Iterator for CalcLexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let pk = *self.chars.peek()?;
        if is_calc_whitespace(pk) {
            return self.whitespace();
        }
        if is_calc_digit(pk) || pk == '.' {
            return self.number();
        }
        self.minutia()
    }
}

impl<'a> CalcLexer<'a> {
    fn lex(s: &str) -> Vec<Token> {
        let mut tokens = CalcLexer {
            chars: s.chars().peekable(),
        }
        .collect();
        CalcLexer::insert_implicit_multiply(&mut tokens);
        tokens
    }

    /// `2(3)`, `(2)3` and `(2)(3)` multiply. Only direct adjacency
    /// counts; whitespace in between leaves the tokens alone.
    fn insert_implicit_multiply(tokens: &mut Vec<Token>) {
        let mut ins: Vec<usize> = vec![];
        for (index, tt) in tokens.windows(2).enumerate() {
            let implied = matches!(
                (&tt[0], &tt[1]),
                (Token::Number(_), Token::LParen)
                    | (Token::RParen, Token::Number(_))
                    | (Token::RParen, Token::LParen)
            );
            if implied {
                ins.push(index);
            }
        }
        while let Some(index) = ins.pop() {
            tokens.insert(index + 1, Token::Operator(Operator::Multiply));
        }
    }
}
