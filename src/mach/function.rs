use super::AngleMode;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Scientific keys. These work on a single operand and never
/// see the expression prefix.
pub struct Function {}

impl Function {
    pub fn sin(val: f64, mode: AngleMode) -> Result<f64> {
        Ok(mode.to_radians(val).sin())
    }
    pub fn cos(val: f64, mode: AngleMode) -> Result<f64> {
        Ok(mode.to_radians(val).cos())
    }
    pub fn tan(val: f64, mode: AngleMode) -> Result<f64> {
        Ok(mode.to_radians(val).tan())
    }
    pub fn log(val: f64) -> Result<f64> {
        if val <= 0.0 {
            return Err(error!(DomainError; "LOG OF NON-POSITIVE NUMBER"));
        }
        Ok(val.log10())
    }
    pub fn ln(val: f64) -> Result<f64> {
        if val <= 0.0 {
            return Err(error!(DomainError; "LN OF NON-POSITIVE NUMBER"));
        }
        Ok(val.ln())
    }
    pub fn square(val: f64) -> Result<f64> {
        Ok(val * val)
    }
    pub fn sqrt(val: f64) -> Result<f64> {
        if val < 0.0 {
            return Err(error!(DomainError; "SQUARE ROOT OF NEGATIVE NUMBER"));
        }
        Ok(val.sqrt())
    }
    pub fn reciprocal(val: f64) -> Result<f64> {
        if val == 0.0 {
            return Err(error!(DomainError; "RECIPROCAL OF ZERO"));
        }
        Ok(1.0 / val)
    }
    pub fn negate(val: f64) -> Result<f64> {
        Ok(-val)
    }
}
