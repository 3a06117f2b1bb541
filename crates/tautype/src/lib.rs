//! Validated bounded primitive types with subtype inheritance
//!
//! tautype lets a program define families of bounded primitive types
//! (bounded integers, bounded-length text, fixed-width numeric variants)
//! validated at construction time and composing into a subtype lattice: a
//! narrower type is always safely usable where a wider one is expected,
//! never the reverse.
//!
//! ```
//! use tautype::prelude::*;
//!
//! let zipcode = TypeDescriptor::derive(
//!     "zipcode",
//!     tautype::catalog::text(),
//!     [Constraint::max_length(5)],
//! )?;
//!
//! let typed = zipcode.cast(Value::from("90210"))?;
//! assert_eq!(typed.value(), &Value::from("90210"));
//! assert!(zipcode.cast(Value::from("Too long!")).is_err());
//! # Ok::<(), tautype::TautError>(())
//! ```

pub use tautype_diagnostics::{
    Diagnostic, ErrorCode, ErrorInfo, Result, Severity, TautError,
};
pub use tautype_types::*;

/// Convenience re-exports for the common surface
pub mod prelude {
    pub use tautype_diagnostics::{Result, TautError};
    pub use tautype_types::{
        Constraint, ConstraintOutcome, PrimitiveKind, Tier, TypeDescriptor, TypeRef, TypeRefExt,
        TypedValue, Value, fixed_chars, resolve_length, resolve_width_tier, sized_int,
        sized_uint, varchar,
    };
}
