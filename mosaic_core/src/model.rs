//! Algebraic type descriptions consumed by generators.
//!
//! An algebraic type is a closed sum type: a fixed, ordered set of named
//! subtypes, each carrying its own ordered set of typed attributes. Order is
//! semantically significant everywhere — subtype order drives discriminant
//! values and output ordering, attribute order drives positional argument
//! order in generated handler invocations.

use crate::error::GenError;
use crate::objc::{BlockType, TypeRef};
use rustc_hash::FxHashSet;

// =============================================================================
// Type Description
// =============================================================================

/// A closed sum type description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlgebraicType {
    /// Type name, e.g. `Shape`.
    pub name: String,
    /// Ordered, non-empty subtype list. Declaration order is significant.
    pub subtypes: Vec<Subtype>,
}

/// One variant of an algebraic type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Subtype {
    /// Subtype name, e.g. `Circle`.
    pub name: String,
    /// Ordered attribute list. Declaration order is significant.
    pub attributes: Vec<Attribute>,
    /// Externally supplied handler block type for this subtype.
    ///
    /// `Some` is used verbatim by the handler-type synthesizer; `None` means
    /// the default is derived from `attributes`.
    pub callback_type: Option<BlockType>,
}

/// A named, typed attribute of a subtype.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute name, e.g. `radius`.
    pub name: String,
    /// Attribute type. Opaque to generators; carried through as a value.
    pub ty: TypeRef,
}

impl AlgebraicType {
    /// Create an algebraic type from its ordered subtypes.
    #[must_use]
    pub fn new(name: impl Into<String>, subtypes: Vec<Subtype>) -> Self {
        Self {
            name: name.into(),
            subtypes,
        }
    }
}

impl Subtype {
    /// Create a subtype from its ordered attributes.
    #[must_use]
    pub fn new(name: impl Into<String>, attributes: Vec<Attribute>) -> Self {
        Self {
            name: name.into(),
            attributes,
            callback_type: None,
        }
    }

    /// Attach an externally supplied handler block type.
    #[must_use]
    pub fn with_callback_type(mut self, callback_type: BlockType) -> Self {
        self.callback_type = Some(callback_type);
        self
    }
}

impl Attribute {
    /// Create an attribute.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

// =============================================================================
// Well-formedness
// =============================================================================

/// Check a type description for the invariants generators rely on.
///
/// Generators trust their input: they assume a non-empty subtype list and
/// unique subtype/attribute names, and their behavior on malformed input is
/// unspecified. Hosts call this gate before handing a description to any
/// generator. Returns every finding; empty means well-formed.
#[must_use]
pub fn validate(algebraic_type: &AlgebraicType) -> Vec<GenError> {
    let mut errors = Vec::new();

    if algebraic_type.subtypes.is_empty() {
        errors.push(GenError::empty_subtypes(&algebraic_type.name));
    }

    let mut seen_subtypes = FxHashSet::default();
    for subtype in &algebraic_type.subtypes {
        if !seen_subtypes.insert(subtype.name.as_str()) {
            errors.push(GenError::duplicate_subtype(
                &algebraic_type.name,
                &subtype.name,
            ));
        }

        let mut seen_attributes = FxHashSet::default();
        for attribute in &subtype.attributes {
            if !seen_attributes.insert(attribute.name.as_str()) {
                errors.push(GenError::duplicate_attribute(
                    &subtype.name,
                    &attribute.name,
                ));
            }
        }
    }

    errors
}
