//! Function-matching generator.
//!
//! Synthesizes, for one algebraic type, a pattern-matching surface built
//! from plain blocks: one handler block type per subtype and a single
//! multi-part `match…` instance method that switches on the instance's
//! discriminant and invokes whichever handlers the caller supplied.
//! Unsupplied handlers silence their branch, so callers may match any
//! subset of subtypes.
//!
//! - `blocks` - Handler block type synthesis, one per subtype
//! - `signature` - Keyword list construction for the multi-part selector
//! - `dispatch` - Branch construction and switch-statement rendering
//!
//! The assembled [`Method`] is handed to the external emission pipeline
//! unrendered; this module produces descriptors only.

pub mod blocks;
pub mod dispatch;
pub mod signature;

pub use blocks::{block_type_for_subtype, block_types};
pub use dispatch::{
    DISCRIMINANT_ACCESSOR, DispatchBranch, dispatch_body, dispatch_body_with, dispatch_branches,
    internal_value_accessor, render_switch,
};
pub use signature::{handler_name, match_keywords};

use mosaic_core::model::{AlgebraicType, Attribute, Subtype};
use mosaic_core::objc::{BlockType, Method};
use mosaic_core::plugin::AlgebraicTypePlugin;

/// Runtime support facility the generated code requires wherever it is
/// compiled, surfaced to the build pipeline as a capability name.
pub const REQUIRED_INCLUDE: &str = "FunctionMatching";

/// Assemble the match method for an algebraic type with the default
/// instance-variable accessors.
#[must_use]
pub fn match_method(algebraic_type: &AlgebraicType) -> Method {
    match_method_with(
        algebraic_type,
        dispatch::DISCRIMINANT_ACCESSOR,
        dispatch::internal_value_accessor,
    )
}

/// Assemble the match method with explicit value accessors.
///
/// Keywords and body are both ordered by subtype declaration; the method
/// returns void, carries no documentation, belongs to no protocol, and has
/// no compiler attributes. The output is a pure function of the inputs.
#[must_use]
pub fn match_method_with<F>(
    algebraic_type: &AlgebraicType,
    discriminant: &str,
    accessor: F,
) -> Method
where
    F: Fn(&Subtype, &Attribute) -> String,
{
    Method {
        belongs_to_protocol: None,
        comments: Vec::new(),
        compiler_attributes: Vec::new(),
        keywords: signature::match_keywords(algebraic_type, &blocks::block_types(algebraic_type)),
        body: dispatch::dispatch_body_with(algebraic_type, discriminant, accessor),
        return_type: None,
    }
}

/// The function-matching generator.
///
/// Contributes the handler block typedefs, the match instance method, and
/// the runtime support requirement; every other hook keeps its neutral
/// default.
#[derive(Clone, Copy, Debug, Default)]
pub struct FunctionMatchingPlugin;

impl FunctionMatchingPlugin {
    /// Create the generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl AlgebraicTypePlugin for FunctionMatchingPlugin {
    fn block_types(&self, algebraic_type: &AlgebraicType) -> Vec<BlockType> {
        blocks::block_types(algebraic_type)
    }

    fn instance_methods(&self, algebraic_type: &AlgebraicType) -> Vec<Method> {
        vec![match_method(algebraic_type)]
    }

    fn required_includes(&self) -> Vec<&'static str> {
        vec![REQUIRED_INCLUDE]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mosaic_core::objc::TypeRef;

    fn shape() -> AlgebraicType {
        AlgebraicType::new(
            "Shape",
            vec![
                Subtype::new(
                    "Circle",
                    vec![Attribute::new("radius", TypeRef::scalar("CGFloat"))],
                ),
                Subtype::new(
                    "Square",
                    vec![Attribute::new("side", TypeRef::scalar("CGFloat"))],
                ),
            ],
        )
    }

    #[test]
    fn test_method_returns_void_with_bare_descriptor() {
        let method = match_method(&shape());

        assert!(method.return_type.is_none());
        assert!(method.belongs_to_protocol.is_none());
        assert!(method.comments.is_empty());
        assert!(method.compiler_attributes.is_empty());
    }

    #[test]
    fn test_method_combines_signature_and_body() {
        let method = match_method(&shape());

        assert_eq!(method.keywords.len(), 2);
        assert_eq!(method.keywords[0].name, "matchCircle");
        assert_eq!(method.body.first().unwrap(), "switch (_subtype) {");
        assert_eq!(method.body.last().unwrap(), "}");
    }

    #[test]
    fn test_plugin_contributes_blocks_method_and_requirement() {
        let plugin = FunctionMatchingPlugin::new();
        let adt = shape();

        assert_eq!(plugin.block_types(&adt).len(), 2);
        assert_eq!(plugin.instance_methods(&adt).len(), 1);
        assert_eq!(plugin.required_includes(), ["FunctionMatching"]);
    }

    #[test]
    fn test_plugin_keeps_all_other_hooks_neutral() {
        let plugin = FunctionMatchingPlugin::new();
        let adt = shape();

        assert!(plugin.additional_files(&adt).is_empty());
        assert!(plugin.class_methods(&adt).is_empty());
        assert!(plugin.enumerations(&adt).is_empty());
        assert!(plugin.file_type(&adt).is_none());
        assert!(plugin.forward_declarations(&adt).is_empty());
        assert!(plugin.functions(&adt).is_empty());
        assert!(plugin.header_comments(&adt).is_empty());
        assert!(plugin.implemented_protocols(&adt).is_empty());
        assert!(plugin.imports(&adt).is_empty());
        assert!(plugin.internal_properties(&adt).is_empty());
        assert!(plugin.static_constants(&adt).is_empty());
        assert!(plugin.validation_errors(&adt).is_empty());
        assert!(plugin.nullability(&adt).is_none());
        assert!(!plugin.subclassing_restricted(&adt));
    }

    #[test]
    fn test_custom_accessors_flow_into_body() {
        let method = match_method_with(&shape(), "[self tag]", |subtype, attribute| {
            format!("self.{}{}", subtype.name, attribute.name)
        });

        assert_eq!(method.body[0], "switch ([self tag]) {");
        assert!(
            method
                .body
                .contains(&"      circleMatchHandler(self.Circleradius);".to_string())
        );
    }
}
