//! Type descriptors
//!
//! A descriptor is a named, validated type definition: a resolved storage
//! kind, an optional parent, and an ordered constraint sequence whose prefix
//! is exactly the parent's sequence followed by the descriptor's own
//! additions. Inheritance is sequence concatenation, not dynamic dispatch:
//! a child can only ever append rules, which is what makes narrowing
//! monotonic: every value a child accepts, its ancestors accept.
//!
//! Descriptors are immutable after construction and shared as `Arc`s;
//! identity comparisons are pointer comparisons.

use crate::constraint::{Constraint, ConstraintChain};
use crate::value::{PrimitiveKind, Value};
use smallvec::smallvec;
use std::fmt;
use std::sync::Arc;
use tautype_diagnostics::{Result, TT0200, TT0201, TautError};

/// Shared handle to an immutable descriptor
pub type TypeRef = Arc<TypeDescriptor>;

/// A named, validated type definition
#[derive(Debug)]
pub struct TypeDescriptor {
    name: String,
    kind: PrimitiveKind,
    parent: Option<TypeRef>,
    constraints: ConstraintChain,
}

impl TypeDescriptor {
    /// Define a root type for an underlying kind.
    ///
    /// The sole constraint of a root is the default kind-match rule.
    pub fn root(name: impl Into<String>, kind: PrimitiveKind) -> Result<TypeRef> {
        let name = name.into();
        if name.is_empty() {
            return Err(TautError::configuration(
                TT0201,
                "type name must not be empty",
                name,
            ));
        }
        Ok(Arc::new(Self {
            name,
            kind,
            parent: None,
            constraints: smallvec![Constraint::kind_matches()],
        }))
    }

    /// Define a type derived from a parent.
    ///
    /// The child inherits the parent's kind and its full constraint
    /// sequence, in order, followed by the new constraints. Reusing a name
    /// already present in the parent chain is a configuration error;
    /// unrelated chains may reuse names freely.
    pub fn derive(
        name: impl Into<String>,
        parent: &TypeRef,
        constraints: impl IntoIterator<Item = Constraint>,
    ) -> Result<TypeRef> {
        let name = name.into();
        if name.is_empty() {
            return Err(TautError::configuration(
                TT0201,
                "type name must not be empty",
                name,
            ));
        }
        let mut ancestor = Some(parent);
        while let Some(current) = ancestor {
            if current.name == name {
                return Err(TautError::configuration(
                    TT0200,
                    format!("name '{}' is already used by an ancestor", name),
                    name,
                ));
            }
            ancestor = current.parent.as_ref();
        }
        let mut chain = parent.constraints.clone();
        chain.extend(constraints);
        Ok(Arc::new(Self {
            name,
            kind: parent.kind,
            parent: Some(parent.clone()),
            constraints: chain,
        }))
    }

    /// Get the type name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the underlying storage kind
    pub const fn kind(&self) -> PrimitiveKind {
        self.kind
    }

    /// Get the parent descriptor, if any
    pub const fn parent(&self) -> Option<&TypeRef> {
        self.parent.as_ref()
    }

    /// Get the full constraint sequence
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Check whether two handles refer to the identical descriptor
    pub fn same(a: &TypeRef, b: &TypeRef) -> bool {
        Arc::ptr_eq(a, b)
    }

    /// Check whether this descriptor descends from `other` through its
    /// parent chain. A descriptor does not descend from itself.
    pub fn is_descendant_of(&self, other: &TypeRef) -> bool {
        let mut ancestor = self.parent.as_ref();
        while let Some(current) = ancestor {
            if Arc::ptr_eq(current, other) {
                return true;
            }
            ancestor = current.parent.as_ref();
        }
        false
    }

    /// Validate a candidate value.
    ///
    /// Runs every constraint in sequence and reports whether all accept.
    /// This is a pure query; it never errors.
    pub fn is(&self, value: &Value) -> bool {
        self.constraints
            .iter()
            .all(|rule| rule.evaluate(self, value).is_accepted())
    }

    /// Assert that a candidate value is valid.
    ///
    /// Stops at the first failing constraint and reports it, identifying
    /// the type, the rejecting rule, and the value's display form.
    pub fn check(&self, value: &Value) -> Result<()> {
        for rule in &self.constraints {
            if let Some(reason) = rule.evaluate(self, value).reason() {
                return Err(TautError::validation(
                    rule.code(),
                    reason,
                    &self.name,
                    rule.name(),
                    value.display_form(),
                ));
            }
        }
        Ok(())
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)
    }
}

/// Construction surface on shared descriptor handles
pub trait TypeRefExt {
    /// Validate a value and relabel it with this type.
    ///
    /// This is the sole path by which a value acquires a refined type:
    /// validation then relabeling, never data transformation.
    fn cast(&self, value: Value) -> Result<TypedValue>;
}

impl TypeRefExt for TypeRef {
    fn cast(&self, value: Value) -> Result<TypedValue> {
        self.check(&value)?;
        Ok(TypedValue {
            ty: self.clone(),
            value,
        })
    }
}

/// A value that has passed validation against a descriptor
#[derive(Debug, Clone)]
pub struct TypedValue {
    ty: TypeRef,
    value: Value,
}

impl TypedValue {
    /// Get the descriptor this value was validated against
    pub const fn type_def(&self) -> &TypeRef {
        &self.ty
    }

    /// Get the underlying value
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// Unwrap the underlying value
    pub fn into_inner(self) -> Value {
        self.value
    }
}

impl PartialEq for TypedValue {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.ty, &other.ty) && self.value == other.value
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.value, self.ty.name())
    }
}
