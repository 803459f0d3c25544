use super::{compile::compile, Opcode, Stack};
use crate::error;
use crate::lang::{Error, Line};
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, Error>;

/// Parse and compute a complete expression.
///
/// Accepts only numbers, `+ - * / ^` (or `×` and `÷`), parentheses and
/// whitespace. Zero division is not an error while computing, but a
/// final value that is not finite is rejected as a `DivisionError`.
pub fn evaluate(s: &str) -> Result<f64> {
    let line = Line::new(s);
    let ast = match line.ast() {
        Ok(ast) => ast,
        Err(error) => {
            debug!(expression = s, %error, "parse failed");
            return Err(error);
        }
    };
    let prog = compile(&ast)?;
    let value = finite(execute(&prog)?)?;
    trace!(expression = s, value, "evaluated");
    Ok(value)
}

pub(crate) fn finite(value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(error!(DivisionError; "RESULT IS NOT FINITE"))
    }
}

fn execute(prog: &Stack<Opcode>) -> Result<f64> {
    let mut stack: Stack<f64> = Stack::new("EXPRESSION TOO LARGE");
    for op in prog.iter() {
        match op {
            Opcode::Literal(val) => stack.push(*val)?,
            Opcode::Neg => {
                let val = stack.pop()?;
                stack.push(-val)?;
            }
            Opcode::Pow => {
                let (lhs, rhs) = stack.pop_2()?;
                stack.push(lhs.powf(rhs))?;
            }
            Opcode::Mul => {
                let (lhs, rhs) = stack.pop_2()?;
                stack.push(lhs * rhs)?;
            }
            Opcode::Div => {
                let (lhs, rhs) = stack.pop_2()?;
                stack.push(lhs / rhs)?;
            }
            Opcode::Add => {
                let (lhs, rhs) = stack.pop_2()?;
                stack.push(lhs + rhs)?;
            }
            Opcode::Sub => {
                let (lhs, rhs) = stack.pop_2()?;
                stack.push(lhs - rhs)?;
            }
        }
    }
    let value = stack.pop()?;
    if !stack.is_empty() {
        return Err(error!(InternalError; "UNBALANCED STACK"));
    }
    Ok(value)
}
