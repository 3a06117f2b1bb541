//! Runtime value representation
//!
//! This module defines the `Value` enum for candidate values and the
//! `PrimitiveKind` enum of underlying storage kinds. Every type descriptor
//! ultimately maps to exactly one kind.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The underlying storage kinds a descriptor can resolve to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveKind {
    /// Boolean values
    Boolean,
    /// Text values
    Text,
    /// Integral numbers with native 64-bit storage
    Int,
    /// Wide integral numbers (stored as i128)
    BigInt,
}

impl PrimitiveKind {
    /// Get the kind name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Text => "text",
            Self::Int => "int",
            Self::BigInt => "big",
        }
    }

    /// Check if this kind is numeric
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Int | Self::BigInt)
    }

    /// Check whether a value's storage matches this kind.
    ///
    /// A native `Int` value is accepted where `BigInt` is expected (every
    /// i64 is a valid big integer); the reverse is not.
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            Self::Boolean => matches!(value, Value::Bool(_)),
            Self::Text => matches!(value, Value::Text(_)),
            Self::Int => matches!(value, Value::Int(_)),
            Self::BigInt => matches!(value, Value::Int(_) | Value::BigInt(_)),
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A candidate value presented to the constraint engine
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    /// Boolean value
    Bool(bool),
    /// Text value
    Text(String),
    /// Integral number
    Int(i64),
    /// Wide integral number
    BigInt(i128),
}

impl Value {
    /// Get the storage kind of this value
    pub const fn kind(&self) -> PrimitiveKind {
        match self {
            Self::Bool(_) => PrimitiveKind::Boolean,
            Self::Text(_) => PrimitiveKind::Text,
            Self::Int(_) => PrimitiveKind::Int,
            Self::BigInt(_) => PrimitiveKind::BigInt,
        }
    }

    /// Unified numeric view of integral values
    pub const fn as_integral(&self) -> Option<i128> {
        match self {
            Self::Int(n) => Some(*n as i128),
            Self::BigInt(n) => Some(*n),
            _ => None,
        }
    }

    /// Text view, if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Length in chars, if this is a text value
    pub fn char_len(&self) -> Option<usize> {
        self.as_text().map(|s| s.chars().count())
    }

    /// Check if this value is integral
    pub const fn is_integral(&self) -> bool {
        matches!(self, Self::Int(_) | Self::BigInt(_))
    }

    /// Display form used in rejection messages
    pub fn display_form(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::Text(s) => format!("\"{}\"", s),
            Self::Int(n) => n.to_string(),
            Self::BigInt(n) => n.to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_form())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(n as i64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i128> for Value {
    fn from(n: i128) -> Self {
        Self::BigInt(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_kinds() {
        assert_eq!(Value::from(true).kind(), PrimitiveKind::Boolean);
        assert_eq!(Value::from("hi").kind(), PrimitiveKind::Text);
        assert_eq!(Value::from(42i64).kind(), PrimitiveKind::Int);
        assert_eq!(Value::from(42i128).kind(), PrimitiveKind::BigInt);
    }

    #[test]
    fn test_kind_accepts_widening() {
        let int = Value::from(7i64);
        let big = Value::from(7i128);
        assert!(PrimitiveKind::Int.accepts(&int));
        assert!(!PrimitiveKind::Int.accepts(&big));
        assert!(PrimitiveKind::BigInt.accepts(&int));
        assert!(PrimitiveKind::BigInt.accepts(&big));
    }

    #[test]
    fn test_char_len_counts_chars_not_bytes() {
        let v = Value::from("héllo");
        assert_eq!(v.char_len(), Some(5));
    }

    #[test]
    fn test_display_form() {
        assert_eq!(Value::from("a").display_form(), "\"a\"");
        assert_eq!(Value::from(-3i64).display_form(), "-3");
        assert_eq!(Value::from(false).display_form(), "false");
    }

    #[test]
    fn test_value_serde_round_trip() {
        let v = Value::from("zip");
        let json = serde_json::to_string(&v).unwrap();
        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}
