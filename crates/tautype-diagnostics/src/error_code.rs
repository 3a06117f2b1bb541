//! tautype error codes following a structured numbering system
//!
//! Error code ranges:
//! - TT0001-TT0099: Domain errors (magnitude/tier requests outside the supported range)
//! - TT0100-TT0199: Validation errors (candidate value rejected by a constraint)
//! - TT0200-TT0299: Configuration errors (malformed type definitions)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }

    /// Check if this is a domain error (0001-0099)
    pub const fn is_domain_error(&self) -> bool {
        self.0 >= 1 && self.0 < 100
    }

    /// Check if this is a validation error (0100-0199)
    pub const fn is_validation_error(&self) -> bool {
        self.0 >= 100 && self.0 < 200
    }

    /// Check if this is a configuration error (0200-0299)
    pub const fn is_configuration_error(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TT{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

// Static error info storage
static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

use std::collections::HashMap;
use std::sync::LazyLock;

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Domain errors (0001-0099)
    map.insert(
        1,
        ErrorInfo::new("Length out of range")
            .with_help("Supported char lengths are 0 through 1023"),
    );
    map.insert(
        2,
        ErrorInfo::new("Width tier out of range")
            .with_help("Supported width tiers are 0 through 15"),
    );
    map.insert(
        3,
        ErrorInfo::new("Bit width out of range")
            .with_help("Supported bit widths are 0 through 4096"),
    );
    map.insert(
        4,
        ErrorInfo::new("Char precision out of range")
            .with_help("Precise fixed lengths cover 0 through 64 chars"),
    );

    // Validation errors (0100-0199)
    map.insert(100, ErrorInfo::new("Value kind mismatch"));
    map.insert(101, ErrorInfo::new("Value is not an integer"));
    map.insert(102, ErrorInfo::new("Value outside numeric range"));
    map.insert(103, ErrorInfo::new("Value exceeds length bound"));
    map.insert(104, ErrorInfo::new("Value violates sign rule"));
    map.insert(105, ErrorInfo::new("Value rejected by custom rule"));

    // Configuration errors (0200-0299)
    map.insert(
        200,
        ErrorInfo::new("Duplicate type name in parent chain")
            .with_help("A derived type may not reuse the name of any of its ancestors"),
    );
    map.insert(201, ErrorInfo::new("Empty type name"));
    map.insert(202, ErrorInfo::new("Malformed type definition"));

    map
});

// Domain error codes
pub const TT0001: ErrorCode = ErrorCode::new(1);
pub const TT0002: ErrorCode = ErrorCode::new(2);
pub const TT0003: ErrorCode = ErrorCode::new(3);
pub const TT0004: ErrorCode = ErrorCode::new(4);

// Validation error codes
pub const TT0100: ErrorCode = ErrorCode::new(100);
pub const TT0101: ErrorCode = ErrorCode::new(101);
pub const TT0102: ErrorCode = ErrorCode::new(102);
pub const TT0103: ErrorCode = ErrorCode::new(103);
pub const TT0104: ErrorCode = ErrorCode::new(104);
pub const TT0105: ErrorCode = ErrorCode::new(105);

// Configuration error codes
pub const TT0200: ErrorCode = ErrorCode::new(200);
pub const TT0201: ErrorCode = ErrorCode::new(201);
pub const TT0202: ErrorCode = ErrorCode::new(202);
