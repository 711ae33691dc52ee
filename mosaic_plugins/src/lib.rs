//! Code generators for mosaic algebraic value types.
//!
//! Each generator implements [`AlgebraicTypePlugin`](mosaic_core::plugin::AlgebraicTypePlugin)
//! and contributes declarations and methods for one algebraic type. This
//! crate currently ships the function-matching generator, which synthesizes
//! a handler block type per subtype and a single multi-part `match…` method
//! dispatching on the instance's subtype.
//!
//! # Architecture
//!
//! ```text
//! AlgebraicType → block types → signature keywords → dispatch body → Method
//! ```
//!
//! # Example
//!
//! ```
//! use mosaic_core::model::{AlgebraicType, Attribute, Subtype};
//! use mosaic_core::objc::TypeRef;
//! use mosaic_plugins::function_matching::match_method;
//!
//! let shape = AlgebraicType::new(
//!     "Shape",
//!     vec![
//!         Subtype::new("Circle", vec![Attribute::new("radius", TypeRef::scalar("CGFloat"))]),
//!         Subtype::new("Square", vec![Attribute::new("side", TypeRef::scalar("CGFloat"))]),
//!     ],
//! );
//!
//! let method = match_method(&shape);
//! assert_eq!(method.keywords.len(), 2);
//! assert_eq!(method.keywords[0].name, "matchCircle");
//! assert!(method.return_type.is_none());
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]

pub mod function_matching;

// Re-export main types
pub use function_matching::{
    FunctionMatchingPlugin, REQUIRED_INCLUDE, match_method, match_method_with,
};
