//! Constraint functions
//!
//! A constraint is a named, pure, deterministic predicate over a descriptor
//! and a candidate value. Constraints never mutate state; each one tests a
//! single rule and reports either acceptance or a human-readable rejection
//! reason. Descriptors compose behavior by concatenating constraint
//! sequences, so every rule here must be independently total over all value
//! kinds.

use crate::descriptor::TypeDescriptor;
use crate::value::Value;
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;
use tautype_diagnostics::{ErrorCode, TT0100, TT0101, TT0102, TT0103, TT0104, TT0105};

/// Outcome of evaluating one constraint against a candidate value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintOutcome {
    /// The value satisfies the rule
    Accepted,
    /// The value violates the rule, with a human-readable reason
    Rejected(String),
}

impl ConstraintOutcome {
    /// Create a rejection with a reason
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected(reason.into())
    }

    /// Check if the outcome is an acceptance
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Get the rejection reason, if any
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Accepted => None,
            Self::Rejected(reason) => Some(reason),
        }
    }
}

type CheckFn = dyn Fn(&TypeDescriptor, &Value) -> ConstraintOutcome + Send + Sync;

/// A named validation rule
#[derive(Clone)]
pub struct Constraint {
    name: String,
    code: ErrorCode,
    check: Arc<CheckFn>,
}

/// Short inline storage for constraint sequences; chains rarely exceed a
/// handful of rules.
pub type ConstraintChain = SmallVec<[Constraint; 4]>;

impl Constraint {
    /// Create a caller-defined constraint
    pub fn new(
        name: impl Into<String>,
        check: impl Fn(&TypeDescriptor, &Value) -> ConstraintOutcome + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            code: TT0105,
            check: Arc::new(check),
        }
    }

    fn builtin(
        name: impl Into<String>,
        code: ErrorCode,
        check: impl Fn(&TypeDescriptor, &Value) -> ConstraintOutcome + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            code,
            check: Arc::new(check),
        }
    }

    /// Get the rule name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the error code reported when this rule rejects
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Evaluate the rule against a candidate value
    pub fn evaluate(&self, descriptor: &TypeDescriptor, value: &Value) -> ConstraintOutcome {
        (self.check)(descriptor, value)
    }

    // === Built-in rules ===

    /// The default rule every root descriptor carries: the value's storage
    /// must match the descriptor's underlying kind.
    pub fn kind_matches() -> Self {
        Self::builtin("kind", TT0100, |descriptor, value| {
            if descriptor.kind().accepts(value) {
                ConstraintOutcome::Accepted
            } else {
                ConstraintOutcome::rejected(format!(
                    "expected {} storage, got {}",
                    descriptor.kind(),
                    value.kind()
                ))
            }
        })
    }

    /// The value must be an integral number
    pub fn integer() -> Self {
        Self::builtin("integer", TT0101, |_, value| {
            if value.is_integral() {
                ConstraintOutcome::Accepted
            } else {
                ConstraintOutcome::rejected("not an integer")
            }
        })
    }

    /// The value must be an integral number inside an inclusive range
    pub fn range(min: i128, max: i128) -> Self {
        Self::builtin(format!("range {}..={}", min, max), TT0102, move |_, value| {
            match value.as_integral() {
                Some(n) if n >= min && n <= max => ConstraintOutcome::Accepted,
                Some(n) => {
                    ConstraintOutcome::rejected(format!("{} is outside {}..={}", n, min, max))
                }
                None => ConstraintOutcome::rejected("not an integer"),
            }
        })
    }

    /// The value must be text of at most `max` chars
    pub fn max_length(max: u16) -> Self {
        Self::builtin(format!("max-length {}", max), TT0103, move |_, value| {
            match value.char_len() {
                Some(len) if len <= max as usize => ConstraintOutcome::Accepted,
                Some(_) => ConstraintOutcome::rejected(format!("length exceeds {}", max)),
                None => ConstraintOutcome::rejected("not text"),
            }
        })
    }

    /// The value must be text of exactly `len` chars
    pub fn exact_length(len: u8) -> Self {
        Self::builtin(format!("length {}", len), TT0103, move |_, value| {
            match value.char_len() {
                Some(actual) if actual == len as usize => ConstraintOutcome::Accepted,
                Some(actual) => {
                    ConstraintOutcome::rejected(format!("length {} is not {}", actual, len))
                }
                None => ConstraintOutcome::rejected("not text"),
            }
        })
    }

    /// The value must be an integral number that is zero or positive
    pub fn non_negative() -> Self {
        Self::builtin("non-negative", TT0104, |_, value| match value.as_integral() {
            Some(n) if n >= 0 => ConstraintOutcome::Accepted,
            Some(n) => ConstraintOutcome::rejected(format!("{} is negative", n)),
            None => ConstraintOutcome::rejected("not an integer"),
        })
    }
}

impl fmt::Debug for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constraint")
            .field("name", &self.name)
            .field("code", &self.code)
            .finish_non_exhaustive()
    }
}
