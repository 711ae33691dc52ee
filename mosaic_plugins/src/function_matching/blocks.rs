//! Handler block type synthesis.
//!
//! Every subtype gets exactly one handler block type. A subtype may carry an
//! externally supplied block type, which is used verbatim; otherwise the
//! default is derived from the subtype's attributes: one parameter per
//! attribute in declared order, void return.

use mosaic_core::model::{AlgebraicType, Subtype};
use mosaic_core::objc::{BlockType, BlockTypeParameter};
use mosaic_core::strings::upper_first;

/// Typedef name of the derived handler block type for a subtype.
///
/// `Shape`/`Circle` yields `ShapeCircleMatchHandler`.
#[must_use]
pub fn block_name(algebraic_type: &AlgebraicType, subtype: &Subtype) -> String {
    format!(
        "{}{}MatchHandler",
        algebraic_type.name,
        upper_first(&subtype.name)
    )
}

/// The handler block type for one subtype.
///
/// An externally supplied `callback_type` wins verbatim; absent that, the
/// block's parameters mirror the subtype's attributes in declared order and
/// the return type is void.
#[must_use]
pub fn block_type_for_subtype(algebraic_type: &AlgebraicType, subtype: &Subtype) -> BlockType {
    if let Some(supplied) = &subtype.callback_type {
        return supplied.clone();
    }

    BlockType {
        name: block_name(algebraic_type, subtype),
        parameters: subtype
            .attributes
            .iter()
            .map(|attribute| BlockTypeParameter {
                name: attribute.name.clone(),
                ty: attribute.ty.clone(),
            })
            .collect(),
        return_type: None,
    }
}

/// One handler block type per subtype, in declared order.
#[must_use]
pub fn block_types(algebraic_type: &AlgebraicType) -> Vec<BlockType> {
    algebraic_type
        .subtypes
        .iter()
        .map(|subtype| block_type_for_subtype(algebraic_type, subtype))
        .collect()
}
