//! Dispatch body generation.
//!
//! The match method body is an exhaustive `switch` over the instance's
//! subtype discriminant, one branch per subtype in declared order. Each
//! branch guards on whether the caller supplied the handler for its subtype
//! and, if so, invokes it positionally with the stored attribute values.
//!
//! Branch construction and statement rendering are split: branches are
//! plain descriptors that can be inspected or walked directly, and the
//! renderer turns a branch list into statement lines.
//!
//! Two assumptions are baked into the emitted code and not re-checked here:
//! the discriminant value space enumerates the declared subtypes exactly, so
//! no `default` branch is emitted, and an out-of-range discriminant at match
//! time is undefined behavior of the generated code. An unsupplied handler
//! is legal and simply silences its branch.

use mosaic_core::model::{AlgebraicType, Attribute, Subtype};
use mosaic_core::strings::{indent, lower_first, upper_first};
use smallvec::SmallVec;

use super::signature;

/// Expression reading the discriminant off a matched instance.
pub const DISCRIMINANT_ACCESSOR: &str = "_subtype";

/// Accessor expressions for one branch.
///
/// Most subtypes carry at most a few attributes, so the arguments stay
/// inline in the common case.
pub type ArgumentList = SmallVec<[String; 4]>;

/// Discriminant enumeration case for a subtype.
///
/// `Shape`/`Circle` yields `ShapeSubtypesCircle`, matching the case names of
/// the generated subtype enumeration.
#[must_use]
pub fn enum_case(algebraic_type: &AlgebraicType, subtype: &Subtype) -> String {
    format!(
        "{}Subtypes{}",
        algebraic_type.name,
        upper_first(&subtype.name)
    )
}

/// Expression reading one stored attribute value off a matched instance.
///
/// Attribute storage is one backing instance variable per (subtype,
/// attribute) pair: `Circle`/`radius` yields `_circle_radius`.
#[must_use]
pub fn internal_value_accessor(subtype: &Subtype, attribute: &Attribute) -> String {
    format!("_{}_{}", lower_first(&subtype.name), attribute.name)
}

/// One branch of the dispatch switch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DispatchBranch {
    /// Discriminant case selecting this branch.
    pub case_label: String,
    /// Handler parameter variable guarded and invoked.
    pub handler: String,
    /// Invocation arguments, in the subtype's declared attribute order.
    pub arguments: ArgumentList,
}

/// One branch per subtype, in declared order.
///
/// `accessor` resolves a (subtype, attribute) pair to the expression that
/// reads the stored value off a matched instance; hosts with a different
/// storage layout pass their own.
#[must_use]
pub fn dispatch_branches<F>(algebraic_type: &AlgebraicType, accessor: F) -> Vec<DispatchBranch>
where
    F: Fn(&Subtype, &Attribute) -> String,
{
    algebraic_type
        .subtypes
        .iter()
        .map(|subtype| DispatchBranch {
            case_label: enum_case(algebraic_type, subtype),
            handler: signature::handler_name(subtype),
            arguments: subtype
                .attributes
                .iter()
                .map(|attribute| accessor(subtype, attribute))
                .collect(),
        })
        .collect()
}

/// Render a branch list as the statement lines of a `switch`.
///
/// Branches appear in list order. No `default` branch is emitted.
#[must_use]
pub fn render_switch(discriminant: &str, branches: &[DispatchBranch]) -> Vec<String> {
    let mut lines = Vec::with_capacity(branches.len() * 6 + 2);
    lines.push(format!("switch ({discriminant}) {{"));
    for branch in branches {
        lines.push(indent(2, &format!("case {}: {{", branch.case_label)));
        lines.push(indent(4, &format!("if ({}) {{", branch.handler)));
        lines.push(indent(
            6,
            &format!("{}({});", branch.handler, branch.arguments.join(", ")),
        ));
        lines.push(indent(4, "}"));
        lines.push(indent(4, "break;"));
        lines.push(indent(2, "}"));
    }
    lines.push("}".to_string());
    lines
}

/// The full dispatch body with the default discriminant accessor.
#[must_use]
pub fn dispatch_body<F>(algebraic_type: &AlgebraicType, accessor: F) -> Vec<String>
where
    F: Fn(&Subtype, &Attribute) -> String,
{
    dispatch_body_with(algebraic_type, DISCRIMINANT_ACCESSOR, accessor)
}

/// The full dispatch body with an explicit discriminant accessor.
#[must_use]
pub fn dispatch_body_with<F>(
    algebraic_type: &AlgebraicType,
    discriminant: &str,
    accessor: F,
) -> Vec<String>
where
    F: Fn(&Subtype, &Attribute) -> String,
{
    render_switch(discriminant, &dispatch_branches(algebraic_type, accessor))
}
