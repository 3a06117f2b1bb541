//! tautype core type engine
//!
//! This crate implements the bounded-type machinery:
//! - Tier tables and range approximation (widths in bits, lengths in chars)
//! - The constraint-composition engine and type descriptors
//! - The process-wide constructor cache for parameterized families
//! - The fixed catalog of pre-built named types

pub mod cache;
pub mod catalog;
pub mod constraint;
pub mod descriptor;
pub mod resolve;
pub mod tier;
pub mod value;

pub use tautype_diagnostics::TautError;

pub use cache::{ConstructorCache, Family, cache, fixed_chars, sized_int, sized_uint, varchar};
pub use constraint::{Constraint, ConstraintChain, ConstraintOutcome};
pub use descriptor::{TypeDescriptor, TypeRef, TypeRefExt, TypedValue};
pub use resolve::{
    CHAR_PRECISION_MAX, LENGTH_DOMAIN_MAX, LENGTH_EXACT_MAX, LengthFit, char_precision,
    resolve_length, resolve_width_bits, resolve_width_tier,
};
pub use tier::{LOW_TIER_COUNT, TIER_COUNT, Tier, char_step};
pub use value::{PrimitiveKind, Value};
