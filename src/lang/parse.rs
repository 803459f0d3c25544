use super::{ast::*, token::*, Column, Error};

type Result<T> = std::result::Result<T, Error>;

const UNARY_PRECEDENCE: usize = 35;
const MAX_NESTING: usize = 256;

pub fn parse(tokens: &[Token]) -> Result<Expression> {
    Parser::parse(tokens)
}

struct Parser<'a> {
    token_stream: std::slice::Iter<'a, Token>,
    peeked: Option<&'a Token>,
    col: Column,
    nesting: usize,
}

impl<'a> Parser<'a> {
    fn parse(tokens: &'a [Token]) -> Result<Expression> {
        Parser::unrecognized(tokens)?;
        let mut parse = Parser {
            token_stream: tokens.iter(),
            peeked: None,
            col: 0..0,
            nesting: 0,
        };
        let expr = parse.expression()?;
        match parse.next() {
            None => Ok(expr),
            Some(Token::RParen) => {
                Err(error!(SyntaxError, ..&parse.column(); "UNMATCHED RIGHT PARENTHESIS"))
            }
            Some(_) => Err(error!(SyntaxError, ..&parse.column(); "UNEXPECTED TOKEN")),
        }
    }

    fn unrecognized(tokens: &[Token]) -> Result<()> {
        let mut col: Column = 0..0;
        for t in tokens {
            col.start = col.end;
            col.end += t.to_string().chars().count();
            if let Token::Unknown(_) = t {
                return Err(error!(SyntaxError, ..&col; "UNRECOGNIZED CHARACTER"));
            }
        }
        Ok(())
    }

    fn column(&self) -> Column {
        self.col.clone()
    }

    fn next(&mut self) -> Option<&'a Token> {
        if self.peeked.is_some() {
            return self.peeked.take();
        }
        loop {
            self.col.start = self.col.end;
            let t = self.token_stream.next()?;
            self.col.end += t.to_string().chars().count();
            match t {
                Token::Whitespace(_) => continue,
                _ => return Some(t),
            }
        }
    }

    fn peek(&mut self) -> Option<&'a Token> {
        if self.peeked.is_none() {
            self.peeked = self.next();
        }
        self.peeked
    }

    fn expression(&mut self) -> Result<Expression> {
        fn parse(this: &mut Parser, precedence: usize) -> Result<Expression> {
            this.nesting += 1;
            if this.nesting > MAX_NESTING {
                return Err(error!(SyntaxError, ..&this.column(); "EXPRESSION TOO COMPLEX"));
            }
            let mut lhs = match this.next() {
                Some(Token::LParen) => {
                    let expr = this.expression()?;
                    this.expect(Token::RParen)?;
                    expr
                }
                Some(Token::Operator(Operator::Minus)) => {
                    let column = this.column();
                    let expr = parse(this, UNARY_PRECEDENCE)?;
                    Expression::Negation(column, Box::new(expr))
                }
                Some(Token::Operator(Operator::Plus)) => parse(this, UNARY_PRECEDENCE)?,
                Some(Token::Number(s)) => Expression::for_literal(this.column(), s)?,
                _ => return Err(error!(SyntaxError, ..&this.column(); "EXPECTED EXPRESSION")),
            };
            loop {
                let op = match this.peek() {
                    Some(Token::Operator(op)) => *op,
                    _ => break,
                };
                let op_precedence = Expression::op_precedence(op);
                if op_precedence < precedence {
                    break;
                }
                this.next();
                let column = this.column();
                let rhs = if op.is_right_associative() {
                    parse(this, op_precedence)?
                } else {
                    parse(this, op_precedence + 1)?
                };
                lhs = Expression::for_binary_op(column, op, lhs, rhs);
            }
            this.nesting -= 1;
            Ok(lhs)
        }
        parse(self, 0)
    }

    fn expect(&mut self, token: Token) -> Result<()> {
        if let Some(t) = self.next() {
            if *t == token {
                return Ok(());
            }
        }
        use Token::*;
        Err(error!(SyntaxError, ..&self.column();
            match token {
                Unknown(_) | Whitespace(_) => {"UNEXPECTED TOKEN"}
                Number(_) => {"EXPECTED NUMBER"}
                Operator(_) => {"EXPECTED OPERATOR"}
                LParen => {"EXPECTED LEFT PARENTHESIS"}
                RParen => {"EXPECTED RIGHT PARENTHESIS"}
            }
        ))
    }
}

impl Expression {
    fn for_binary_op(col: Column, op: Operator, lhs: Expression, rhs: Expression) -> Expression {
        use Operator::*;
        match op {
            Caret => Expression::Power(col, Box::new(lhs), Box::new(rhs)),
            Multiply => Expression::Multiply(col, Box::new(lhs), Box::new(rhs)),
            Divide => Expression::Divide(col, Box::new(lhs), Box::new(rhs)),
            Plus => Expression::Add(col, Box::new(lhs), Box::new(rhs)),
            Minus => Expression::Subtract(col, Box::new(lhs), Box::new(rhs)),
        }
    }

    fn op_precedence(op: Operator) -> usize {
        use Operator::*;
        match op {
            Plus | Minus => 10,
            Multiply | Divide => 20,
            Caret => 30,
        }
    }

    /// Scientific notation becomes an explicit `mantissa * 10 ^ exponent`.
    fn for_literal(col: Column, s: &str) -> Result<Expression> {
        fn number(col: &Column, s: &str) -> Result<f64> {
            s.parse::<f64>()
                .map_err(|_| error!(SyntaxError, ..col; "MALFORMED NUMBER"))
        }
        match s.split_once('E') {
            None => Ok(Expression::Number(col.clone(), number(&col, s)?)),
            Some((mantissa, exponent)) => {
                let mantissa = Expression::Number(col.clone(), number(&col, mantissa)?);
                let exponent = Expression::Number(col.clone(), number(&col, exponent)?);
                let scale = Expression::Power(
                    col.clone(),
                    Box::new(Expression::Number(col.clone(), 10.0)),
                    Box::new(exponent),
                );
                Ok(Expression::Multiply(col, Box::new(mantissa), Box::new(scale)))
            }
        }
    }
}
