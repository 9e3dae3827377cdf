//! Untyped sample elements, for data that arrives as text
//!
//! Typed slices (`&[f64]`, `&[i32]`, ...) never need this module. It exists for
//! samples read from files or user input, where an element may turn out not to
//! be a number at all. Such elements survive parsing as [`Value::Text`] and are
//! rejected by [`validate`](crate::validate) before any arithmetic happens.

use std::{convert::Infallible, fmt, str::FromStr};

use num_traits::ToPrimitive;

/// A single element of an untyped sample
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A whole number
    Int(i64),
    /// A floating point number
    Float(f64),
    /// Anything that did not parse as a number
    Text(String),
}

impl FromStr for Value {
    type Err = Infallible;

    /// Integers win over floats, and anything else is kept as text
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(if let Ok(i) = s.parse::<i64>() {
            Value::Int(i)
        } else if let Ok(f) = s.parse::<f64>() {
            Value::Float(f)
        } else {
            Value::Text(s.to_owned())
        })
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl ToPrimitive for Value {
    fn to_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            Value::Float(x) => x.to_i64(),
            Value::Text(_) => None,
        }
    }

    fn to_u64(&self) -> Option<u64> {
        match self {
            Value::Int(i) => i.to_u64(),
            Value::Float(x) => x.to_u64(),
            Value::Text(_) => None,
        }
    }

    fn to_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => i.to_f64(),
            Value::Float(x) => Some(*x),
            Value::Text(_) => None,
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

/// Splits text on commas and whitespace into a sample of [`Value`]s
///
/// Empty tokens are skipped, so `"1, 2,,3"` yields three elements.
///
/// ```
/// use central_tendency::{parse_sample, Value};
///
/// let sample = parse_sample("1, 2.5 three");
/// assert_eq!(
///     sample,
///     vec![Value::Int(1), Value::Float(2.5), Value::Text("three".into())]
/// );
/// ```
pub fn parse_sample(input: &str) -> Vec<Value> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| match token.parse() {
            Ok(v) => v,
            Err(never) => match never {},
        })
        .collect()
}
