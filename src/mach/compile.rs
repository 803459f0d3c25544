use super::{Opcode, Stack};
use crate::lang::ast::{self, AcceptVisitor};
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

pub fn compile(expr: &ast::Expression) -> Result<Stack<Opcode>> {
    Visitor::compile(expr)
}

struct Visitor {
    prog: Stack<Opcode>,
    error: Option<Error>,
}

impl Visitor {
    fn compile(expr: &ast::Expression) -> Result<Stack<Opcode>> {
        let mut this = Visitor {
            prog: Stack::new("EXPRESSION TOO LARGE"),
            error: None,
        };
        expr.accept(&mut this);
        match this.error {
            Some(error) => Err(error),
            None => Ok(this.prog),
        }
    }
}

impl ast::Visitor for Visitor {
    fn visit_expression(&mut self, expression: &ast::Expression) {
        if self.error.is_some() {
            return;
        }
        use ast::Expression::*;
        let op = match expression {
            Number(_, val) => Opcode::Literal(*val),
            Negation(..) => Opcode::Neg,
            Power(..) => Opcode::Pow,
            Multiply(..) => Opcode::Mul,
            Divide(..) => Opcode::Div,
            Add(..) => Opcode::Add,
            Subtract(..) => Opcode::Sub,
        };
        if let Err(error) = self.prog.push(op) {
            self.error = Some(error.in_column(&expression.column()));
        }
    }
}
