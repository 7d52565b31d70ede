//! Numeric element type
//!
//! Arrays and search targets hold [`Value`]s: finite `f64`s, so decimal input
//! such as `3.5` is accepted while `NaN` and the infinities are not. Negative
//! zero is folded into zero on construction. With both excluded the float
//! ordering is total, which gives `Value` `Eq` and `Ord` and lets runners use
//! plain `<`, `>` and `==`.

use serde::Deserialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(try_from = "f64")]
pub struct Value(f64);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("'{0}' is not a number")]
    Invalid(String),

    #[error("'{0}' is not a finite number")]
    NotFinite(String),
}

impl Value {
    /// `None` for `NaN` and the infinities
    pub fn new(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        Some(Value(if value == 0.0 { 0.0 } else { value }))
    }

    pub fn get(self) -> f64 {
        self.0
    }

    /// True when there is no fractional part
    pub fn is_integer(self) -> bool {
        self.0.fract() == 0.0
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value(f64::from(value))
    }
}

impl TryFrom<f64> for Value {
    type Error = ValueError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Value::new(value).ok_or_else(|| ValueError::NotFinite(value.to_string()))
    }
}

impl FromStr for Value {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let parsed = token
            .parse::<f64>()
            .map_err(|_| ValueError::Invalid(token.to_string()))?;
        Value::new(parsed).ok_or_else(|| ValueError::NotFinite(token.to_string()))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

// NaN is never stored
impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Whole numbers print without a fractional part: `3`, `3.5`, `-2`
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Lift integer literals into values
pub fn values(ints: &[i32]) -> Vec<Value> {
    ints.iter().copied().map(Value::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimals() {
        assert_eq!(" 3.5 ".parse::<Value>().unwrap().get(), 3.5);
        assert_eq!("-2".parse::<Value>().unwrap(), Value::from(-2));
        assert_eq!("1e2".parse::<Value>().unwrap(), Value::from(100));
    }

    #[test]
    fn test_rejects_non_finite() {
        assert_eq!(
            "NaN".parse::<Value>(),
            Err(ValueError::NotFinite("NaN".to_string()))
        );
        assert!("inf".parse::<Value>().is_err());
        assert!("x".parse::<Value>().is_err());
        assert!("".parse::<Value>().is_err());
        assert!(Value::try_from(f64::NAN).is_err());
    }

    #[test]
    fn test_display_matches_input() {
        assert_eq!(Value::from(4).to_string(), "4");
        assert_eq!("3.5".parse::<Value>().unwrap().to_string(), "3.5");
        assert_eq!("-0".parse::<Value>().unwrap().to_string(), "0");
        assert_eq!(format!("{:^5}", Value::from(2)), "  2  ");
    }

    #[test]
    fn test_ordering() {
        let mut items = vec![
            "2.5".parse::<Value>().unwrap(),
            Value::from(-1),
            Value::from(2),
        ];
        items.sort();
        assert_eq!(items.iter().map(|v| v.get()).collect::<Vec<_>>(), vec![-1.0, 2.0, 2.5]);
        assert!(Value::from(0) == "-0.0".parse::<Value>().unwrap());
        assert!(Value::from(2).is_integer());
        assert!(!"0.1".parse::<Value>().unwrap().is_integer());
    }
}
