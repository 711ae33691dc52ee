//! Match method signature construction.
//!
//! The signature carries one keyword per subtype, in declared order. The
//! first keyword is the composed form `match` + subtype name so the call
//! reads as one multi-part message beginning with `match…`; every later
//! keyword is the subtype's own name with its first letter lowered. A
//! multi-part selector needs its leading verb only on the first part, hence
//! the asymmetry.

use mosaic_core::model::{AlgebraicType, Subtype};
use mosaic_core::objc::{BlockType, Keyword, KeywordArgument};
use mosaic_core::strings::{lower_first, upper_first};

/// Name of the handler parameter variable for a subtype.
///
/// The dispatch body refers to handlers by this name, so it is a function of
/// the subtype alone, independent of keyword position: `Circle` yields
/// `circleMatchHandler`.
#[must_use]
pub fn handler_name(subtype: &Subtype) -> String {
    format!("{}MatchHandler", lower_first(&subtype.name))
}

/// The leading keyword of the match method.
#[must_use]
pub fn first_keyword(subtype: &Subtype, block: &BlockType) -> Keyword {
    Keyword {
        name: format!("match{}", upper_first(&subtype.name)),
        argument: Some(KeywordArgument {
            name: handler_name(subtype),
            ty: block.type_ref(),
        }),
    }
}

/// A non-leading keyword of the match method.
#[must_use]
pub fn keyword(subtype: &Subtype, block: &BlockType) -> Keyword {
    Keyword {
        name: lower_first(&subtype.name),
        argument: Some(KeywordArgument {
            name: handler_name(subtype),
            ty: block.type_ref(),
        }),
    }
}

/// The ordered keyword list of the match method, one per subtype.
///
/// `block_types` is the synthesized handler type list for the same algebraic
/// type, in the same order. Identical inputs always produce byte-identical
/// keyword sequences, so regeneration on unchanged descriptions is
/// diff-free.
#[must_use]
pub fn match_keywords(algebraic_type: &AlgebraicType, block_types: &[BlockType]) -> Vec<Keyword> {
    algebraic_type
        .subtypes
        .iter()
        .zip(block_types)
        .enumerate()
        .map(|(index, (subtype, block))| {
            if index == 0 {
                first_keyword(subtype, block)
            } else {
                keyword(subtype, block)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function_matching::blocks;
    use mosaic_core::model::Attribute;
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

    fn keywords_for(adt: &AlgebraicType) -> Vec<Keyword> {
        match_keywords(adt, &blocks::block_types(adt))
    }

    #[test]
    fn test_first_keyword_carries_match_verb() {
        let keywords = keywords_for(&shape());

        assert_eq!(keywords[0].name, "matchCircle");
        assert_eq!(keywords[1].name, "square");
    }

    #[test]
    fn test_one_keyword_per_subtype_in_order() {
        let adt = AlgebraicType::new(
            "Signal",
            vec![
                Subtype::new("Rise", vec![]),
                Subtype::new("Hold", vec![]),
                Subtype::new("Fall", vec![]),
            ],
        );
        let keywords = keywords_for(&adt);

        let names: Vec<&str> = keywords.iter().map(|k| k.name.as_str()).collect();
        assert_eq!(names, ["matchRise", "hold", "fall"]);
    }

    #[test]
    fn test_arguments_are_typed_by_handler_blocks() {
        let keywords = keywords_for(&shape());

        let argument = keywords[0].argument.as_ref().unwrap();
        assert_eq!(argument.name, "circleMatchHandler");
        assert_eq!(argument.ty, TypeRef::scalar("ShapeCircleMatchHandler"));

        let argument = keywords[1].argument.as_ref().unwrap();
        assert_eq!(argument.name, "squareMatchHandler");
        assert_eq!(argument.ty, TypeRef::scalar("ShapeSquareMatchHandler"));
    }

    #[test]
    fn test_handler_name_is_position_independent() {
        let circle = Subtype::new("Circle", vec![]);
        assert_eq!(handler_name(&circle), "circleMatchHandler");
    }

    #[test]
    fn test_sole_subtype_still_gets_match_verb() {
        let adt = AlgebraicType::new(
            "Geometry",
            vec![Subtype::new(
                "Point",
                vec![
                    Attribute::new("x", TypeRef::scalar("CGFloat")),
                    Attribute::new("y", TypeRef::scalar("CGFloat")),
                ],
            )],
        );
        let keywords = keywords_for(&adt);

        assert_eq!(keywords.len(), 1);
        assert_eq!(keywords[0].name, "matchPoint");
    }

    #[test]
    fn test_keyword_sequence_is_deterministic() {
        let adt = shape();
        assert_eq!(keywords_for(&adt), keywords_for(&adt.clone()));
    }
}
