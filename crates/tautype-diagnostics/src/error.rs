//! tautype error types

use crate::ErrorCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Error - the requested operation cannot proceed
    Error,
    /// Warning - potential issue but can continue
    Warning,
    /// Information - informational message
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A diagnostic message with context
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity level
    pub severity: Severity,
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Additional context or help
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
            help: None,
        }
    }

    /// Create a new warning diagnostic
    pub fn warning(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
            help: None,
        }
    }

    /// Set help text
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} - {}", self.severity, self.code, self.message)?;
        if let Some(help) = &self.help {
            write!(f, " ({})", help)?;
        }
        Ok(())
    }
}

/// Main tautype error type
#[derive(Debug, Clone, Error)]
pub enum TautError {
    /// A magnitude or tier request outside the supported range
    #[error("{code}: {message}")]
    Domain {
        code: ErrorCode,
        message: String,
        /// The out-of-range magnitude that was requested
        requested: u32,
    },

    /// A candidate value failed one or more constraints
    #[error("{code}: value does not satisfy {type_name}: {message}")]
    Validation {
        code: ErrorCode,
        message: String,
        /// Name of the type the value was checked against
        type_name: String,
        /// Name of the rejecting rule
        rule: String,
        /// Display form of the offending value
        value: String,
    },

    /// A malformed type definition
    #[error("{code}: {message}")]
    Configuration {
        code: ErrorCode,
        message: String,
        /// Name of the type being defined
        type_name: String,
    },
}

impl TautError {
    /// Create a domain error
    pub fn domain(code: ErrorCode, message: impl Into<String>, requested: u32) -> Self {
        Self::Domain {
            code,
            message: message.into(),
            requested,
        }
    }

    /// Create a validation error
    pub fn validation(
        code: ErrorCode,
        message: impl Into<String>,
        type_name: impl Into<String>,
        rule: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::Validation {
            code,
            message: message.into(),
            type_name: type_name.into(),
            rule: rule.into(),
            value: value.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(
        code: ErrorCode,
        message: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        Self::Configuration {
            code,
            message: message.into(),
            type_name: type_name.into(),
        }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Domain { code, .. } => *code,
            Self::Validation { code, .. } => *code,
            Self::Configuration { code, .. } => *code,
        }
    }

    /// Get the name of the type involved, if any
    pub fn type_name(&self) -> Option<&str> {
        match self {
            Self::Validation { type_name, .. } => Some(type_name),
            Self::Configuration { type_name, .. } => Some(type_name),
            Self::Domain { .. } => None,
        }
    }

    /// Convert to a diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code(), self.to_string());
        if let Some(help) = self.code().info().help {
            diag = diag.with_help(help);
        }
        diag
    }
}
