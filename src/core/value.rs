//! Loosely typed player input and the validation utilities over it.
//!
//! Guesses and configuration values arrive from outside the engine and may
//! be anything: missing, a float, text that only looks like a number. A
//! [`Value`] carries whatever was supplied so that validation can reject it
//! with a precise reason instead of failing to parse.
//!
//! All functions here are total: they never panic, whatever the input.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::{GuessError, NotANumber};

/// An untyped input value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// No value was supplied.
    #[default]
    Missing,
    /// An integer.
    Int(i64),
    /// A floating point number, possibly NaN or infinite.
    Float(f64),
    /// Anything else, kept verbatim.
    Text(String),
}

impl Value {
    /// Interpret a line of raw text input.
    ///
    /// Blank input is [`Value::Missing`]. Integer literals become
    /// [`Value::Int`], other float literals (including `NaN` and `inf`)
    /// become [`Value::Float`], and everything else stays [`Value::Text`].
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Value::Missing;
        }
        if let Ok(i) = trimmed.parse::<i64>() {
            return Value::Int(i);
        }
        if let Ok(f) = trimmed.parse::<f64>() {
            return Value::Float(f);
        }
        Value::Text(trimmed.to_string())
    }

    /// Numeric view of the value, without any finiteness check.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::Missing | Value::Text(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Missing => write!(f, "nothing"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Missing, Into::into)
    }
}

/// True for integers and finite floats.
#[must_use]
pub fn is_number(value: &Value) -> bool {
    match value {
        Value::Int(_) => true,
        Value::Float(f) => f.is_finite(),
        Value::Missing | Value::Text(_) => false,
    }
}

/// True for numbers without a fractional part.
#[must_use]
pub fn is_integer(value: &Value) -> bool {
    match value {
        Value::Int(_) => true,
        Value::Float(f) => f.is_finite() && f.fract() == 0.0,
        Value::Missing | Value::Text(_) => false,
    }
}

/// Floor a number to an integer.
///
/// Fails for non-numbers and for floats whose floor does not fit in `i64`.
pub fn to_integer(value: &Value) -> Result<i64, NotANumber> {
    let not_a_number = || NotANumber { value: value.clone() };

    match value {
        Value::Int(i) => Ok(*i),
        Value::Float(f) if f.is_finite() => {
            let floored = f.floor();
            // i64::MIN is exactly -2^63; i64::MAX as f64 rounds up to 2^63.
            if floored >= i64::MIN as f64 && floored < i64::MAX as f64 {
                Ok(floored as i64)
            } else {
                Err(not_a_number())
            }
        }
        _ => Err(not_a_number()),
    }
}

/// Check a guess against `[1, max_number]`.
///
/// Returns the guess as an integer, or the first rule it breaks.
pub fn validate_guess(value: &Value, max_number: i64) -> Result<i64, GuessError> {
    if !is_integer(value) {
        return Err(GuessError::NotAnInteger { value: value.clone() });
    }

    match to_integer(value) {
        Ok(n) if n < 1 => Err(GuessError::BelowMinimum),
        Ok(n) if n > max_number => Err(GuessError::AboveMaximum { max_number }),
        Ok(n) => Ok(n),
        // Integral float beyond the i64 range.
        Err(_) if value.as_f64().is_some_and(|f| f < 0.0) => Err(GuessError::BelowMinimum),
        Err(_) => Err(GuessError::AboveMaximum { max_number }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bad_values() -> Vec<Value> {
        vec![
            Value::Missing,
            Value::Float(f64::NAN),
            Value::Float(f64::INFINITY),
            Value::Float(f64::NEG_INFINITY),
        ]
    }

    #[test]
    fn test_is_number() {
        for v in bad_values() {
            assert!(!is_number(&v), "{v:?} should not be a number");
        }
        assert!(!is_number(&Value::from("1")));

        for v in [Value::Int(0), Value::Int(1), Value::Float(1.5)] {
            assert!(is_number(&v), "{v:?} should be a number");
        }
    }

    #[test]
    fn test_is_integer() {
        for v in bad_values() {
            assert!(!is_integer(&v));
        }
        assert!(!is_integer(&Value::from("1")));
        assert!(!is_integer(&Value::Float(1.1)));

        assert!(is_integer(&Value::Int(0)));
        assert!(is_integer(&Value::Int(1)));
        assert!(is_integer(&Value::Float(2.0)));
    }

    #[test]
    fn test_to_integer() {
        assert!(to_integer(&Value::from("a")).is_err());
        assert!(to_integer(&Value::from("1")).is_err());
        assert_eq!(to_integer(&Value::Int(0)), Ok(0));
        assert_eq!(to_integer(&Value::Int(1)), Ok(1));
        assert_eq!(to_integer(&Value::Float(1.1)), Ok(1));
        assert_eq!(to_integer(&Value::Float(-1.5)), Ok(-2));
    }

    #[test]
    fn test_to_integer_out_of_range() {
        let err = to_integer(&Value::Float(1e300)).unwrap_err();
        assert_eq!(err.value, Value::Float(1e300));
        assert!(to_integer(&Value::Float(-1e300)).is_err());
    }

    #[test]
    fn test_parse() {
        assert_eq!(Value::parse("  "), Value::Missing);
        assert_eq!(Value::parse(" 42\n"), Value::Int(42));
        assert_eq!(Value::parse("-3"), Value::Int(-3));
        assert_eq!(Value::parse("2.5"), Value::Float(2.5));
        assert_eq!(Value::parse("x"), Value::Text("x".to_string()));
        assert!(matches!(Value::parse("NaN"), Value::Float(f) if f.is_nan()));
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(None::<i64>), Value::Missing);
        assert_eq!(Value::from(Some(5)), Value::Int(5));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Missing.to_string(), "nothing");
        assert_eq!(Value::Int(7).to_string(), "7");
        assert_eq!(Value::Float(1.5).to_string(), "1.5");
        assert_eq!(Value::from("abc").to_string(), "abc");
    }

    #[test]
    fn test_validate_guess() {
        assert_eq!(validate_guess(&Value::Int(1), 10), Ok(1));
        assert_eq!(validate_guess(&Value::Int(10), 10), Ok(10));
        assert_eq!(validate_guess(&Value::Float(4.0), 10), Ok(4));

        assert_eq!(validate_guess(&Value::Int(0), 10), Err(GuessError::BelowMinimum));
        assert_eq!(validate_guess(&Value::Int(-5), 10), Err(GuessError::BelowMinimum));
        assert_eq!(
            validate_guess(&Value::Int(11), 10),
            Err(GuessError::AboveMaximum { max_number: 10 })
        );
        assert_eq!(
            validate_guess(&Value::Float(2.5), 10),
            Err(GuessError::NotAnInteger { value: Value::Float(2.5) })
        );
        assert_eq!(
            validate_guess(&Value::Missing, 10),
            Err(GuessError::NotAnInteger { value: Value::Missing })
        );
    }

    #[test]
    fn test_validate_huge_floats() {
        assert_eq!(
            validate_guess(&Value::Float(1e300), 10),
            Err(GuessError::AboveMaximum { max_number: 10 })
        );
        assert_eq!(validate_guess(&Value::Float(-1e300), 10), Err(GuessError::BelowMinimum));
    }
}
