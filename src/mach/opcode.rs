/// ## Evaluator instruction set
///
/// The evaluator has no registers.
/// Every operation is performed on the stack.
///
/// For example: `2+3*4` compiles to `[Literal(2), Literal(3), Literal(4), Mul, Add]`
///
/// See <https://en.wikipedia.org/wiki/Reverse_Polish_notation>

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Opcode {
    /// Push literal value on to the stack.
    Literal(f64),
    Neg,
    Pow,
    Mul,
    Div,
    Add,
    Sub,
}
