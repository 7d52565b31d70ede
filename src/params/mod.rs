//! Parameter schemas and the input adapter
//!
//! Each algorithm declares an ordered list of [`ParamSpec`]s. The adapter,
//! [`parse_params`], turns raw text per field into typed [`Params`]:
//!
//! - [`ParamKind::NumberList`]: comma separated numbers, blank input is `[]`
//! - [`ParamKind::Number`]: a single number
//! - [`ParamKind::Range`]: a number within `min..=max` on a multiple of `step`
//!   counted from `min`
//!
//! Numbers may be decimal; `NaN` and the infinities are rejected.
//!
//! Malformed input is rejected here, before any runner is built. Runners then
//! only extract values and never re-validate them.

use crate::value::Value;
use rustc_hash::FxHashMap;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    NumberList,
    Number,
    Range { min: i64, max: i64, step: i64 },
}

impl ParamKind {
    /// Input kind name shown next to the field
    pub fn label(&self) -> &'static str {
        match self {
            ParamKind::NumberList => "list",
            ParamKind::Number => "number",
            ParamKind::Range { .. } => "range",
        }
    }
}

/// One input field of an algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub label: &'static str,
    pub id: &'static str,
    pub kind: ParamKind,
    pub default: &'static str,
}

impl ParamSpec {
    pub fn min(&self) -> Option<i64> {
        match self.kind {
            ParamKind::Range { min, .. } => Some(min),
            _ => None,
        }
    }

    pub fn max(&self) -> Option<i64> {
        match self.kind {
            ParamKind::Range { max, .. } => Some(max),
            _ => None,
        }
    }

    pub fn step(&self) -> Option<i64> {
        match self.kind {
            ParamKind::Range { step, .. } => Some(step),
            _ => None,
        }
    }

    /// Parse `raw` according to this field's kind
    pub fn parse(&self, raw: &str) -> Result<ParamValue, ParamError> {
        match self.kind {
            ParamKind::NumberList => parse_list(self.id, raw).map(ParamValue::List),
            ParamKind::Number => parse_number(self.id, raw).map(ParamValue::Number),
            ParamKind::Range { min, max, step } => {
                let value = parse_number(self.id, raw)?;
                let v = value.get();
                if v < min as f64 || v > max as f64 {
                    return Err(ParamError::OutOfRange {
                        param: self.id.to_string(),
                        value,
                        min,
                        max,
                    });
                }
                if step > 0 && ((v - min as f64) / step as f64).fract() != 0.0 {
                    return Err(ParamError::OffStep {
                        param: self.id.to_string(),
                        value,
                        step,
                    });
                }
                Ok(ParamValue::Number(value))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    List(Vec<Value>),
    Number(Value),
}

/// Errors from parsing or reading parameters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("missing parameter '{0}'")]
    Missing(String),

    #[error("parameter '{param}': '{token}' is not a number")]
    InvalidNumber { param: String, token: String },

    #[error("parameter '{param}': {value} is outside {min}..={max}")]
    OutOfRange {
        param: String,
        value: Value,
        min: i64,
        max: i64,
    },

    #[error("parameter '{param}': {value} is not a multiple of {step}")]
    OffStep {
        param: String,
        value: Value,
        step: i64,
    },

    #[error("parameter '{param}' should be a {expected}")]
    WrongKind {
        param: String,
        expected: &'static str,
    },
}

fn parse_number(param: &str, raw: &str) -> Result<Value, ParamError> {
    let token = raw.trim();
    token.parse::<Value>().map_err(|_| ParamError::InvalidNumber {
        param: param.to_string(),
        token: token.to_string(),
    })
}

fn parse_list(param: &str, raw: &str) -> Result<Vec<Value>, ParamError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    raw.split(',').map(|token| parse_number(param, token)).collect()
}

/// Typed parameters keyed by parameter id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    values: FxHashMap<String, ParamValue>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, value: ParamValue) {
        self.values.insert(id.into(), value);
    }

    pub fn with(mut self, id: impl Into<String>, value: ParamValue) -> Self {
        self.insert(id, value);
        self
    }

    pub fn get(&self, id: &str) -> Option<&ParamValue> {
        self.values.get(id)
    }

    pub fn list(&self, id: &str) -> Result<&[Value], ParamError> {
        match self.values.get(id) {
            Some(ParamValue::List(values)) => Ok(values),
            Some(ParamValue::Number(_)) => Err(ParamError::WrongKind {
                param: id.to_string(),
                expected: "list of numbers",
            }),
            None => Err(ParamError::Missing(id.to_string())),
        }
    }

    pub fn number(&self, id: &str) -> Result<Value, ParamError> {
        match self.values.get(id) {
            Some(ParamValue::Number(value)) => Ok(*value),
            Some(ParamValue::List(_)) => Err(ParamError::WrongKind {
                param: id.to_string(),
                expected: "number",
            }),
            None => Err(ParamError::Missing(id.to_string())),
        }
    }

    /// Delay in milliseconds read from `id`; absent or non-positive means unset
    pub fn speed(&self, id: &str) -> Option<Duration> {
        match self.values.get(id) {
            Some(ParamValue::Number(ms)) if ms.get() > 0.0 => {
                Duration::try_from_secs_f64(ms.get() / 1000.0).ok()
            }
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Build [`Params`] from raw text per field.
///
/// Fields missing from `raw` take the schema default.
pub fn parse_params(
    schema: &[ParamSpec],
    raw: &FxHashMap<String, String>,
) -> Result<Params, ParamError> {
    let mut params = Params::new();
    for spec in schema {
        let text = raw.get(spec.id).map_or(spec.default, String::as_str);
        params.insert(spec.id, spec.parse(text)?);
    }
    Ok(params)
}

/// Raw text of every field at its default
pub fn default_inputs(schema: &[ParamSpec]) -> FxHashMap<String, String> {
    schema
        .iter()
        .map(|spec| (spec.id.to_string(), spec.default.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::values;

    const ARRAY: ParamSpec = ParamSpec {
        label: "Array (comma separated)",
        id: "array",
        kind: ParamKind::NumberList,
        default: "2,6,-2,4,3,2",
    };
    const TARGET: ParamSpec = ParamSpec {
        label: "Target",
        id: "target",
        kind: ParamKind::Number,
        default: "-2",
    };
    const SPEED: ParamSpec = ParamSpec {
        label: "Speed (ms)",
        id: "speed",
        kind: ParamKind::Range {
            min: 100,
            max: 2000,
            step: 100,
        },
        default: "500",
    };

    fn raw(pairs: &[(&str, &str)]) -> FxHashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let params = parse_params(&[ARRAY, TARGET, SPEED], &FxHashMap::default()).unwrap();
        assert_eq!(params.list("array").unwrap(), values(&[2, 6, -2, 4, 3, 2]));
        assert_eq!(params.number("target").unwrap(), Value::from(-2));
        assert_eq!(params.speed("speed"), Some(Duration::from_millis(500)));
    }

    #[test]
    fn test_list_tokens_trimmed() {
        let params = parse_params(&[ARRAY], &raw(&[("array", " 4, -2 ,0 ")])).unwrap();
        assert_eq!(params.list("array").unwrap(), values(&[4, -2, 0]));
    }

    #[test]
    fn test_decimal_list_and_target() {
        let params = parse_params(
            &[ARRAY, TARGET],
            &raw(&[("array", "3.5,1,2"), ("target", "-0.25")]),
        )
        .unwrap();
        let list: Vec<f64> = params.list("array").unwrap().iter().map(|v| v.get()).collect();
        assert_eq!(list, vec![3.5, 1.0, 2.0]);
        assert_eq!(params.number("target").unwrap().get(), -0.25);
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = parse_params(&[ARRAY], &raw(&[("array", "1,NaN")])).unwrap_err();
        assert_eq!(
            err,
            ParamError::InvalidNumber {
                param: "array".to_string(),
                token: "NaN".to_string()
            }
        );
        assert!(parse_params(&[TARGET], &raw(&[("target", "inf")])).is_err());
    }

    #[test]
    fn test_blank_list_is_empty() {
        let params = parse_params(&[ARRAY], &raw(&[("array", "   ")])).unwrap();
        assert!(params.list("array").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_token() {
        let err = parse_params(&[ARRAY], &raw(&[("array", "1,x,3")])).unwrap_err();
        assert_eq!(
            err,
            ParamError::InvalidNumber {
                param: "array".to_string(),
                token: "x".to_string()
            }
        );
        assert!(parse_params(&[ARRAY], &raw(&[("array", "1,,3")])).is_err());
    }

    #[test]
    fn test_range_bounds() {
        let err = parse_params(&[SPEED], &raw(&[("speed", "5000")])).unwrap_err();
        assert!(matches!(err, ParamError::OutOfRange { value, .. } if value == Value::from(5000)));
        assert!(parse_params(&[SPEED], &raw(&[("speed", "2000")])).is_ok());
    }

    #[test]
    fn test_range_step() {
        let err = parse_params(&[SPEED], &raw(&[("speed", "150")])).unwrap_err();
        assert!(matches!(err, ParamError::OffStep { step: 100, .. }));
        assert!(parse_params(&[SPEED], &raw(&[("speed", "250.5")])).is_err());
        let params = parse_params(&[SPEED], &raw(&[("speed", "300")])).unwrap();
        assert_eq!(params.speed("speed"), Some(Duration::from_millis(300)));
    }

    #[test]
    fn test_kind_mismatch() {
        let params = Params::new().with("array", ParamValue::Number(Value::from(3)));
        assert!(matches!(
            params.list("array"),
            Err(ParamError::WrongKind { .. })
        ));
        assert_eq!(
            params.number("target"),
            Err(ParamError::Missing("target".to_string()))
        );
    }

    #[test]
    fn test_spec_bounds() {
        assert_eq!(SPEED.min(), Some(100));
        assert_eq!(SPEED.max(), Some(2000));
        assert_eq!(SPEED.step(), Some(100));
        assert_eq!(ARRAY.min(), None);
    }
}
