use super::{evaluate, finite, format_result, AngleMode, Function, Key};
use crate::error;
use crate::lang::token::Operator;
use crate::lang::Error;
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, Error>;

/// Operand text shown in the error state.
pub const MATH_ERROR: &str = "Math Error";

/// What the host should show after an action.
#[derive(Debug, Clone, PartialEq)]
pub struct Display {
    pub operand: String,
    /// The committed expression with `×` and `÷` glyphs.
    pub expression: String,
    pub error: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Display(Display),
    Mode(AngleMode),
    Shift(bool),
    /// The key had no effect in the current state.
    Unchanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Fresh entry with nothing pending.
    Idle,
    /// An operand is being typed.
    Accumulating,
    /// An operator is waiting for its right operand.
    PendingOperator,
    Error,
}

/// ## Expression assembler
///
/// One calculator session. Keys go in through [`Calculator::press`],
/// which always runs to completion and never fails: every error lands
/// in the `Math Error` display state.
///
/// The expression prefix is kept as text with ASCII operators, tokens
/// separated by single spaces. It is only ever `""` or ends with an
/// operator or an open parenthesis; a closed group is evaluated at
/// once and its value becomes the operand.
#[derive(Debug)]
pub struct Calculator {
    operand: String,
    prefix: String,
    awaiting_new_entry: bool,
    operand_entered: bool,
    paren_depth: usize,
    /// The operand is the value of a group closed just now.
    group_closed: bool,
    last_result: f64,
    angle_mode: AngleMode,
    memory: f64,
    shift: bool,
    error: bool,
}

impl Default for Calculator {
    fn default() -> Calculator {
        Calculator::new(AngleMode::default())
    }
}

impl Calculator {
    pub fn new(angle_mode: AngleMode) -> Calculator {
        Calculator {
            operand: "0".to_string(),
            prefix: String::new(),
            awaiting_new_entry: false,
            operand_entered: false,
            paren_depth: 0,
            group_closed: false,
            last_result: 0.0,
            angle_mode,
            memory: 0.0,
            shift: false,
            error: false,
        }
    }

    pub fn press(&mut self, key: Key) -> Event {
        trace!(?key, phase = ?self.phase(), "press");
        use Key::*;
        match key {
            Mode => {
                self.angle_mode = self.angle_mode.next();
                return Event::Mode(self.angle_mode);
            }
            Shift => {
                self.shift = !self.shift;
                return Event::Shift(self.shift);
            }
            Clear => self.clear(),
            Delete => self.delete(),
            Digit(d) if d > 9 => return Event::Unchanged,
            Digit(d) => self.digit(d),
            Decimal => self.decimal(),
            _ if self.error => return Event::Unchanged,
            Power | Operator(crate::lang::token::Operator::Caret) => self.power(),
            Operator(op) => self.operator(op),
            Equals => self.equals(),
            OpenParen => self.open_paren(),
            CloseParen => {
                if !self.close_paren() {
                    return Event::Unchanged;
                }
            }
            Exponent => {
                if !self.exponent() {
                    return Event::Unchanged;
                }
            }
            Negate => self.unary(Function::negate),
            Sin => {
                let mode = self.angle_mode;
                self.unary(|val| Function::sin(val, mode))
            }
            Cos => {
                let mode = self.angle_mode;
                self.unary(|val| Function::cos(val, mode))
            }
            Tan => {
                let mode = self.angle_mode;
                self.unary(|val| Function::tan(val, mode))
            }
            Log => self.unary(Function::log),
            Ln => self.unary(Function::ln),
            Square => self.unary(Function::square),
            Sqrt => self.unary(Function::sqrt),
            Reciprocal => self.unary(Function::reciprocal),
            Pi => self.recall(std::f64::consts::PI),
            Ans => self.recall(self.last_result),
            MemoryAdd => self.memory_update(|memory, val| memory + val),
            MemorySubtract => self.memory_update(|memory, val| memory - val),
            MemoryRecall => self.recall(self.memory),
            MemoryClear => self.memory = 0.0,
        }
        Event::Display(self.display())
    }

    pub fn display(&self) -> Display {
        Display {
            operand: self.operand.clone(),
            expression: self
                .prefix
                .chars()
                .map(|ch| match Operator::from_char(ch) {
                    Some(op) => op.glyph(),
                    None => ch,
                })
                .collect(),
            error: self.error,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.error {
            Phase::Error
        } else if !self.awaiting_new_entry && self.operand_entered {
            Phase::Accumulating
        } else if !self.prefix.is_empty() {
            Phase::PendingOperator
        } else {
            Phase::Idle
        }
    }

    pub fn operand(&self) -> &str {
        &self.operand
    }

    /// Committed expression text with ASCII operators.
    pub fn expression_prefix(&self) -> &str {
        &self.prefix
    }

    pub fn awaiting_new_entry(&self) -> bool {
        self.awaiting_new_entry
    }

    pub fn paren_depth(&self) -> usize {
        self.paren_depth
    }

    pub fn last_result(&self) -> f64 {
        self.last_result
    }

    pub fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    pub fn memory(&self) -> f64 {
        self.memory
    }

    pub fn is_shifted(&self) -> bool {
        self.shift
    }

    fn clear(&mut self) {
        self.operand = "0".to_string();
        self.prefix.clear();
        self.awaiting_new_entry = false;
        self.operand_entered = false;
        self.paren_depth = 0;
        self.group_closed = false;
        self.error = false;
    }

    fn delete(&mut self) {
        if self.awaiting_new_entry || self.error {
            self.clear();
            return;
        }
        self.operand.pop();
        if self.operand.is_empty() || self.operand == "-" {
            self.operand = "0".to_string();
        }
    }

    fn digit(&mut self, d: u8) {
        if self.error {
            self.clear();
        }
        self.implied_multiply();
        let ch = char::from(b'0' + d);
        if self.awaiting_new_entry || self.operand == "0" {
            self.operand = ch.to_string();
        } else {
            self.operand.push(ch);
        }
        self.awaiting_new_entry = false;
        self.operand_entered = true;
    }

    fn decimal(&mut self) {
        if self.error {
            self.clear();
        }
        self.implied_multiply();
        if self.awaiting_new_entry {
            self.operand = "0.".to_string();
        } else if !self.operand.contains('.') && !has_exponent(&self.operand) {
            self.operand.push('.');
        }
        self.awaiting_new_entry = false;
        self.operand_entered = true;
    }

    fn exponent(&mut self) -> bool {
        if has_exponent(&self.operand) {
            return false;
        }
        self.operand.push('E');
        self.group_closed = false;
        self.awaiting_new_entry = false;
        self.operand_entered = true;
        true
    }

    fn operator(&mut self, op: Operator) {
        // A typed right operand collapses the chain first. Inside an
        // open group the prefix cannot be evaluated yet.
        if !self.prefix.is_empty() && self.operand_entered && self.paren_depth == 0 {
            debug!(prefix = %self.prefix, operand = %self.operand, "collapsing chain");
            self.equals();
            if self.error {
                return;
            }
        }
        self.commit(op);
    }

    fn power(&mut self) {
        self.commit(Operator::Caret);
    }

    fn commit(&mut self, op: Operator) {
        if !self.operand_entered && ends_with_operator(&self.prefix) {
            self.prefix.truncate(self.prefix.len() - 2);
        } else {
            let operand = self.operand_text().to_string();
            self.prefix.push_str(&operand);
            self.prefix.push(' ');
        }
        self.prefix.push_str(&op.to_string());
        self.prefix.push(' ');
        self.group_closed = false;
        self.awaiting_new_entry = true;
        self.operand_entered = false;
    }

    /// A number or group typed right after `)` multiplies the group.
    fn implied_multiply(&mut self) {
        if !self.group_closed {
            return;
        }
        let operand = self.operand_text().to_string();
        self.prefix.push_str(&operand);
        self.prefix.push_str(" * ");
        self.group_closed = false;
    }

    fn equals(&mut self) {
        let expression = format!("{}{}", self.prefix, self.operand_text());
        match evaluate(&expression) {
            Ok(value) => {
                self.last_result = value;
                self.operand = format_result(value);
                self.prefix.clear();
                self.paren_depth = 0;
                self.group_closed = false;
                self.awaiting_new_entry = true;
                self.operand_entered = true;
            }
            Err(error) => self.fail(error),
        }
    }

    fn open_paren(&mut self) {
        if self.group_closed {
            self.implied_multiply();
        } else if !self.awaiting_new_entry && self.operand != "0" {
            let operand = self.operand_text().to_string();
            self.prefix.push_str(&operand);
            self.prefix.push_str(" * ");
        }
        self.prefix.push('(');
        self.paren_depth += 1;
        self.operand = "0".to_string();
        self.awaiting_new_entry = false;
        self.operand_entered = false;
    }

    fn close_paren(&mut self) -> bool {
        if self.paren_depth == 0 || !self.operand_entered {
            return false;
        }
        let start = match self.prefix.rfind('(') {
            Some(start) => start,
            None => {
                self.fail(error!(InternalError; "PARENTHESIS DEPTH MISMATCH"));
                return true;
            }
        };
        let group = format!("{}{})", &self.prefix[start..], self.operand_text());
        match evaluate(&group) {
            Ok(value) => {
                self.prefix.truncate(start);
                self.paren_depth -= 1;
                self.operand = format_result(value);
                self.group_closed = true;
                self.awaiting_new_entry = true;
                self.operand_entered = true;
            }
            Err(error) => self.fail(error),
        }
        true
    }

    fn unary<F>(&mut self, f: F)
    where
        F: FnOnce(f64) -> Result<f64>,
    {
        match self.operand_value().and_then(f).and_then(finite) {
            Ok(value) => self.recall(value),
            Err(error) => self.fail(error),
        }
    }

    fn recall(&mut self, value: f64) {
        self.operand = format_result(value);
        self.group_closed = false;
        self.awaiting_new_entry = true;
        self.operand_entered = true;
    }

    fn memory_update<F>(&mut self, f: F)
    where
        F: FnOnce(f64, f64) -> f64,
    {
        match self.operand_value() {
            Ok(value) => {
                self.memory = f(self.memory, value);
                self.group_closed = false;
                self.awaiting_new_entry = true;
                self.operand_entered = true;
            }
            Err(error) => self.fail(error),
        }
    }

    fn fail(&mut self, error: Error) {
        debug!(%error, prefix = %self.prefix, operand = %self.operand, "math error");
        self.operand = MATH_ERROR.to_string();
        self.prefix.clear();
        self.paren_depth = 0;
        self.group_closed = false;
        self.awaiting_new_entry = true;
        self.operand_entered = false;
        self.error = true;
    }

    /// Operand without a dangling exponent marker.
    fn operand_text(&self) -> &str {
        let s = self.operand.as_str();
        let trimmed = s.trim_end_matches(|c| c == '+' || c == '-');
        match trimmed.strip_suffix(|c| c == 'e' || c == 'E') {
            Some(mantissa) => mantissa,
            None => s,
        }
    }

    fn operand_value(&self) -> Result<f64> {
        match self.operand_text().parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(error!(SyntaxError; "OPERAND IS NOT A NUMBER")),
        }
    }
}

fn has_exponent(s: &str) -> bool {
    s.contains(|c| c == 'e' || c == 'E')
}

fn ends_with_operator(prefix: &str) -> bool {
    match prefix.trim_end().chars().last() {
        Some(ch) => Operator::from_char(ch).is_some(),
        None => false,
    }
}
