//! The fixed catalog of pre-built named types
//!
//! Thin consumer of the constraint engine: the four kind roots plus the
//! standard signed/unsigned integer widths, big-integer widths, and text
//! variants. Everything here is built once on first use and lives for the
//! process; catalog lookups hand out the shared descriptor instances.

use crate::cache::{sized_int, sized_uint};
use crate::constraint::Constraint;
use crate::descriptor::{TypeDescriptor, TypeRef};
use crate::tier::{LOW_TIER_COUNT, TIER_COUNT};
use crate::value::PrimitiveKind;
use indexmap::IndexMap;
use once_cell::sync::Lazy;

static BOOLEAN: Lazy<TypeRef> = Lazy::new(|| {
    TypeDescriptor::root("boolean", PrimitiveKind::Boolean)
        .expect("catalog definitions are statically valid")
});

static TEXT: Lazy<TypeRef> = Lazy::new(|| {
    TypeDescriptor::root("text", PrimitiveKind::Text)
        .expect("catalog definitions are statically valid")
});

static INT: Lazy<TypeRef> = Lazy::new(|| {
    TypeDescriptor::root("int", PrimitiveKind::Int)
        .expect("catalog definitions are statically valid")
});

static BIG: Lazy<TypeRef> = Lazy::new(|| {
    TypeDescriptor::root("big", PrimitiveKind::BigInt)
        .expect("catalog definitions are statically valid")
});

/// The boolean root type
pub fn boolean() -> &'static TypeRef {
    &BOOLEAN
}

/// The text root type
pub fn text() -> &'static TypeRef {
    &TEXT
}

/// The integral root type
pub fn int() -> &'static TypeRef {
    &INT
}

/// The big-integer root type
pub fn big() -> &'static TypeRef {
    &BIG
}

static REGISTRY: Lazy<IndexMap<String, TypeRef>> = Lazy::new(|| {
    let mut registry = IndexMap::new();

    for root in [boolean(), text(), int(), big()] {
        registry.insert(root.name().to_string(), root.clone());
    }

    // Signed and unsigned integers at the native widths (tier 0 is the
    // zero-width signaling tier and stays out of the catalog).
    for tier in 1..LOW_TIER_COUNT as u8 {
        let signed = sized_int(tier).expect("catalog definitions are statically valid");
        registry.insert(signed.name().to_string(), signed);
        let unsigned = sized_uint(tier).expect("catalog definitions are statically valid");
        registry.insert(unsigned.name().to_string(), unsigned);
    }

    // Big integers at the wide widths
    for tier in LOW_TIER_COUNT as u8..TIER_COUNT as u8 {
        let big = sized_int(tier).expect("catalog definitions are statically valid");
        registry.insert(big.name().to_string(), big);
    }

    // Text variants at the standard length bounds
    for (name, max_chars) in [("char", 64u16), ("varchar", 480), ("memo", 1023)] {
        let variant = TypeDescriptor::derive(name, text(), [Constraint::max_length(max_chars)])
            .expect("catalog definitions are statically valid");
        registry.insert(variant.name().to_string(), variant);
    }

    registry
});

/// Get the catalog registry, in insertion order
pub fn registry() -> &'static IndexMap<String, TypeRef> {
    &REGISTRY
}

/// Look up a catalog type by name
pub fn lookup(name: &str) -> Option<&'static TypeRef> {
    REGISTRY.get(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn test_roots_are_singletons() {
        assert!(TypeDescriptor::same(boolean(), boolean()));
        assert!(TypeDescriptor::same(text(), text()));
    }

    #[test]
    fn test_registry_contents() {
        let names: Vec<&str> = registry().keys().map(String::as_str).collect();
        for expected in [
            "boolean", "text", "int", "big", "int8", "uint8", "int54", "uint54", "big64",
            "big4096", "char", "varchar", "memo",
        ] {
            assert!(names.contains(&expected), "missing {}", expected);
        }
    }

    #[test]
    fn test_lookup_shares_instances() {
        let int8 = lookup("int8").unwrap();
        let again = sized_int(1).unwrap();
        assert!(TypeDescriptor::same(int8, &again));
        assert!(lookup("no-such-type").is_none());
    }

    #[test]
    fn test_text_variants() {
        let memo = lookup("memo").unwrap();
        assert!(memo.is(&Value::from("x".repeat(1023).as_str())));
        assert!(!memo.is(&Value::from("x".repeat(1024).as_str())));
        let char64 = lookup("char").unwrap();
        assert!(char64.is_descendant_of(text()));
    }

    #[test]
    fn test_big_types_accept_wide_values() {
        let big64 = lookup("big64").unwrap();
        assert!(big64.is(&Value::from(i64::MAX)));
        assert!(!big64.is(&Value::from(i128::from(i64::MAX) + 1)));
        let big128 = lookup("big128").unwrap();
        assert!(big128.is(&Value::from(i128::MAX)));
    }
}
