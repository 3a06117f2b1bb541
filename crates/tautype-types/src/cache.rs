//! Constructor cache
//!
//! Descriptor families parameterized by a simple key (a maximum length, a
//! width tier) are memoized process-wide: at most one descriptor exists per
//! distinct key, and repeated requests return the identical `Arc` instance.
//! Downstream identity comparisons rely on this, so the get-or-create path
//! re-checks under the write lock before inserting. The cache never evicts;
//! the key domains are small and finite.

use crate::catalog;
use crate::constraint::Constraint;
use crate::descriptor::{TypeDescriptor, TypeRef};
use crate::resolve::{char_precision, resolve_length, resolve_width_tier};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;
use tautype_diagnostics::Result;

/// The descriptor families served from the cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Bounded-length text, keyed by requested max chars
    Varchar,
    /// Exact-length short text, keyed by fixed chars
    FixedChars,
    /// Signed bounded integer, keyed by width tier
    SizedInt,
    /// Unsigned bounded integer, keyed by width tier
    SizedUint,
}

impl Family {
    /// Get the family name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Varchar => "varchar",
            Self::FixedChars => "char",
            Self::SizedInt => "int",
            Self::SizedUint => "uint",
        }
    }
}

/// Process-wide memo of parameterized descriptors
pub struct ConstructorCache {
    entries: RwLock<HashMap<(Family, u16), TypeRef>>,
}

impl ConstructorCache {
    fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Look up a key, building and inserting the descriptor on first
    /// request. Idempotent: the same key always yields the identical
    /// instance, even under concurrent first requests.
    pub fn get_or_create(
        &self,
        family: Family,
        key: u16,
        build: impl FnOnce() -> Result<TypeRef>,
    ) -> Result<TypeRef> {
        if let Some(found) = self.entries.read().get(&(family, key)) {
            return Ok(found.clone());
        }
        let mut entries = self.entries.write();
        // Another thread may have built the entry between the locks.
        if let Some(found) = entries.get(&(family, key)) {
            return Ok(found.clone());
        }
        let built = build()?;
        log::debug!(
            "built {} descriptor '{}' for key {}",
            family.name(),
            built.name(),
            key
        );
        entries.insert((family, key), built.clone());
        Ok(built)
    }

    /// Number of cached descriptors
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

static CACHE: Lazy<ConstructorCache> = Lazy::new(ConstructorCache::new);

/// Get the process-wide constructor cache
pub fn cache() -> &'static ConstructorCache {
    &CACHE
}

/// Bounded-length text of at most `max_chars` (resolved through the length
/// ladder, so capacities above the exact region may over-approximate).
pub fn varchar(max_chars: u16) -> Result<TypeRef> {
    let fit = resolve_length(max_chars)?;
    CACHE.get_or_create(Family::Varchar, max_chars, || {
        TypeDescriptor::derive(
            format!("varchar({})", max_chars),
            catalog::text(),
            [Constraint::max_length(fit.magnitude())],
        )
    })
}

/// Exact-length short text of `len` chars, within the precision span.
pub fn fixed_chars(len: u8) -> Result<TypeRef> {
    let len = char_precision(len)?;
    CACHE.get_or_create(Family::FixedChars, len as u16, || {
        TypeDescriptor::derive(
            format!("char({})", len),
            catalog::text(),
            [Constraint::exact_length(len)],
        )
    })
}

/// Signed range for a bit width. Width 54 uses the safe-integer convention;
/// widths of 128 bits and above are bounded by the storage representation
/// itself and carry no range rule.
fn signed_range(bits: u32) -> Option<(i128, i128)> {
    match bits {
        0 => Some((0, 0)),
        54 => {
            let max = (1i128 << 53) - 1;
            Some((-max, max))
        }
        bits if bits < 128 => {
            let max = (1i128 << (bits - 1)) - 1;
            Some((-max - 1, max))
        }
        _ => None,
    }
}

fn unsigned_range(bits: u32) -> Option<(i128, i128)> {
    match bits {
        0 => Some((0, 0)),
        54 => Some((0, (1i128 << 53) - 1)),
        bits if bits < 127 => Some((0, (1i128 << bits) - 1)),
        _ => None,
    }
}

/// Signed bounded integer at a width tier.
pub fn sized_int(tier_index: u8) -> Result<TypeRef> {
    let tier = resolve_width_tier(tier_index)?;
    CACHE.get_or_create(Family::SizedInt, tier.index() as u16, || {
        let parent = if tier.is_low() {
            catalog::int()
        } else {
            catalog::big()
        };
        let name = if tier.is_low() {
            format!("int{}", tier.width_bits())
        } else {
            format!("big{}", tier.width_bits())
        };
        let constraints = signed_range(tier.width_bits())
            .map(|(min, max)| Constraint::range(min, max))
            .into_iter();
        TypeDescriptor::derive(name, parent, constraints)
    })
}

/// Unsigned bounded integer at a width tier.
pub fn sized_uint(tier_index: u8) -> Result<TypeRef> {
    let tier = resolve_width_tier(tier_index)?;
    CACHE.get_or_create(Family::SizedUint, tier.index() as u16, || {
        let parent = if tier.is_low() {
            catalog::int()
        } else {
            catalog::big()
        };
        let mut constraints = vec![Constraint::non_negative()];
        if let Some((min, max)) = unsigned_range(tier.width_bits()) {
            constraints.push(Constraint::range(min, max));
        }
        let name = if tier.is_low() {
            format!("uint{}", tier.width_bits())
        } else {
            format!("ubig{}", tier.width_bits())
        };
        TypeDescriptor::derive(name, parent, constraints)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::TypeDescriptor;
    use crate::value::Value;

    #[test]
    fn test_varchar_identity() {
        let a = varchar(5).unwrap();
        let b = varchar(5).unwrap();
        assert!(TypeDescriptor::same(&a, &b));
        let c = varchar(6).unwrap();
        assert!(!TypeDescriptor::same(&a, &c));
    }

    #[test]
    fn test_varchar_bound() {
        let v5 = varchar(5).unwrap();
        assert!(v5.is(&Value::from("12345")));
        assert!(!v5.is(&Value::from("123456")));
        assert!(v5.is_descendant_of(catalog::text()));
    }

    #[test]
    fn test_varchar_domain_error_not_cached() {
        assert!(varchar(1024).is_err());
    }

    #[test]
    fn test_fixed_chars() {
        let c2 = fixed_chars(2).unwrap();
        assert!(c2.is(&Value::from("ab")));
        assert!(!c2.is(&Value::from("a")));
        assert!(fixed_chars(65).is_err());
    }

    #[test]
    fn test_sized_int_tier1_is_a_byte() {
        let byte = sized_int(1).unwrap();
        assert_eq!(byte.name(), "int8");
        assert!(byte.is(&Value::from(-128i64)));
        assert!(byte.is(&Value::from(127i64)));
        assert!(!byte.is(&Value::from(-129i64)));
        assert!(!byte.is(&Value::from(128i64)));
    }

    #[test]
    fn test_sized_int_zero_tier_admits_only_zero() {
        let zero = sized_int(0).unwrap();
        assert!(zero.is(&Value::from(0i64)));
        assert!(!zero.is(&Value::from(1i64)));
    }

    #[test]
    fn test_sized_int_safe_integer_width() {
        let int54 = sized_int(7).unwrap();
        let max = (1i64 << 53) - 1;
        assert!(int54.is(&Value::from(max)));
        assert!(!int54.is(&Value::from(max + 1)));
        assert!(int54.is(&Value::from(-max)));
        assert!(!int54.is(&Value::from(-max - 1)));
    }

    #[test]
    fn test_sized_int_high_tier_descends_from_big() {
        let big256 = sized_int(13).unwrap();
        assert_eq!(big256.name(), "big256");
        assert!(big256.is_descendant_of(catalog::big()));
        assert!(big256.is(&Value::from(i128::MAX)));
    }

    #[test]
    fn test_sized_uint() {
        let u8ty = sized_uint(1).unwrap();
        assert_eq!(u8ty.name(), "uint8");
        assert!(u8ty.is(&Value::from(0i64)));
        assert!(u8ty.is(&Value::from(255i64)));
        assert!(!u8ty.is(&Value::from(256i64)));
        assert!(!u8ty.is(&Value::from(-1i64)));
    }

    #[test]
    fn test_cache_holds_distinct_keys() {
        let _ = varchar(777).unwrap();
        assert!(!cache().is_empty());
        let a = varchar(778).unwrap();
        let b = varchar(778).unwrap();
        assert!(TypeDescriptor::same(&a, &b));
    }
}
