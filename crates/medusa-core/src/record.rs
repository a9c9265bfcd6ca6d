//! Records and scalar dimension values.

use std::cmp::Ordering;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A scalar attribute value: a number or a piece of text. JSON numbers and
/// strings map onto the variants directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DimValue {
    Number(f64),
    Text(String),
}

impl DimValue {
    /// The numeric value, when this is a number. Text is never coerced.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            DimValue::Number(n) => Some(*n),
            DimValue::Text(_) => None,
        }
    }

    /// The size weight this value contributes to a packing. Non-finite and
    /// negative numbers weigh nothing; numeric text is parsed, other text
    /// weighs nothing.
    pub fn weight(&self) -> f64 {
        let n = match self {
            DimValue::Number(n) => *n,
            DimValue::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        };
        if n.is_finite() && n > 0.0 { n } else { 0.0 }
    }

    /// Total order used for sorting: numbers before text, numbers by value
    /// (NaN last), text lexicographic.
    pub fn total_cmp(&self, other: &DimValue) -> Ordering {
        match (self, other) {
            (DimValue::Number(a), DimValue::Number(b)) => a.total_cmp(b),
            (DimValue::Number(_), DimValue::Text(_)) => Ordering::Less,
            (DimValue::Text(_), DimValue::Number(_)) => Ordering::Greater,
            (DimValue::Text(a), DimValue::Text(b)) => a.cmp(b),
        }
    }
}

impl fmt::Display for DimValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DimValue::Number(n) => {
                if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{n}")
                }
            }
            DimValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for DimValue {
    fn from(value: f64) -> Self {
        DimValue::Number(value)
    }
}

impl From<i64> for DimValue {
    fn from(value: i64) -> Self {
        DimValue::Number(value as f64)
    }
}

impl From<&str> for DimValue {
    fn from(value: &str) -> Self {
        DimValue::Text(value.to_string())
    }
}

impl From<String> for DimValue {
    fn from(value: String) -> Self {
        DimValue::Text(value)
    }
}

/// One data record: a unique id plus named scalar attributes. Flat JSON
/// objects (`{"id": "a", "valuation": 10, "sector": "fintech"}`) deserialize
/// directly; every key other than `id` becomes an attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    #[serde(flatten)]
    pub attrs: IndexMap<String, DimValue>,
}

impl Record {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attrs: IndexMap::new(),
        }
    }

    /// Builder-style attribute assignment, mostly for tests and examples.
    pub fn with(mut self, dim: impl Into<String>, value: impl Into<DimValue>) -> Self {
        self.attrs.insert(dim.into(), value.into());
        self
    }

    pub fn get(&self, dim: &str) -> Option<&DimValue> {
        self.attrs.get(dim)
    }

    pub fn has(&self, dim: &str) -> bool {
        self.attrs.contains_key(dim)
    }
}
