//! Diagnostics reported by type-description validation.
//!
//! Generators themselves are total functions over well-formed input and
//! never fail; these errors are the currency of the upstream
//! well-formedness gate and of the plugin `validation_errors` hook.

use thiserror::Error;

/// A defect in an algebraic type description.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenError {
    /// A sum type with no variants has no usable signature or dispatch.
    #[error("algebraic type '{type_name}' declares no subtypes")]
    EmptySubtypes {
        /// Offending type name.
        type_name: String,
    },

    /// Duplicate subtype names would collide in selectors and enum cases.
    #[error("algebraic type '{type_name}' declares subtype '{subtype}' more than once")]
    DuplicateSubtype {
        /// Offending type name.
        type_name: String,
        /// Repeated subtype name.
        subtype: String,
    },

    /// Duplicate attribute names would collide in handler parameter lists.
    #[error("subtype '{subtype}' declares attribute '{attribute}' more than once")]
    DuplicateAttribute {
        /// Offending subtype name.
        subtype: String,
        /// Repeated attribute name.
        attribute: String,
    },
}

impl GenError {
    /// Create an empty-subtype-list finding.
    #[must_use]
    pub fn empty_subtypes(type_name: impl Into<String>) -> Self {
        Self::EmptySubtypes {
            type_name: type_name.into(),
        }
    }

    /// Create a duplicate-subtype finding.
    #[must_use]
    pub fn duplicate_subtype(type_name: impl Into<String>, subtype: impl Into<String>) -> Self {
        Self::DuplicateSubtype {
            type_name: type_name.into(),
            subtype: subtype.into(),
        }
    }

    /// Create a duplicate-attribute finding.
    #[must_use]
    pub fn duplicate_attribute(subtype: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::DuplicateAttribute {
            subtype: subtype.into(),
            attribute: attribute.into(),
        }
    }
}
