/*!
## Rust Machine Module

This Rust module assembles keystrokes into expressions and evaluates them.
Expressions compile to a short reverse Polish program that runs on a
stack of `f64` values.

*/

mod angle;
mod calculator;
mod compile;
mod eval;
mod format;
mod function;
mod key;
mod opcode;
mod stack;

pub use angle::AngleMode;
pub use calculator::{Calculator, Display, Event, Phase, MATH_ERROR};
pub use compile::compile;
pub use eval::evaluate;
pub(crate) use eval::finite;
pub use format::format_result;
pub use function::Function;
pub use key::Key;
pub use opcode::Opcode;
pub use stack::Stack;
