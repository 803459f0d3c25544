//! # Desk Calculator
//!
//! A scientific desk calculator: an expression assembler that turns
//! keystrokes into an infix expression, and an evaluator that computes
//! it with the usual precedence rules.
//!
//! Install with `cargo install desk-calc` then run `deskcalc`.
//! Each line you type is a string of keys.
//! ```text
//!                  [DEG]
//! > 2+3*4=
//!
//!                       14
//! ```
//!
//! The same machine is available as a library.
//! ```
//! use deskcalc::mach::{Calculator, Event, Key};
//! use deskcalc::lang::token::Operator;
//!
//! let mut calc = Calculator::default();
//! calc.press(Key::Digit(3));
//! calc.press(Key::Operator(Operator::Plus));
//! calc.press(Key::Digit(4));
//! if let Event::Display(display) = calc.press(Key::Equals) {
//!     assert_eq!(display.operand, "7");
//! }
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
pub mod term;
