//! # Mosaic Core
//!
//! Core types and contracts for the mosaic Objective-C value-type generator.
//!
//! This crate provides the foundational building blocks shared across all
//! mosaic generators:
//!
//! - **Type Model**: Descriptions of closed sum types (`AlgebraicType`,
//!   `Subtype`, `Attribute`) and their well-formedness check
//! - **Target AST**: The Objective-C constructs generators produce
//!   (block types, multi-part method signatures, hook contributions)
//! - **Emission Descriptors**: File-level artifacts exchanged with the
//!   writer pipeline
//! - **Generator Contract**: The `AlgebraicTypePlugin` trait every
//!   generator implements
//! - **Diagnostics**: Error definitions reported by validation

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod code;
pub mod error;
pub mod model;
pub mod objc;
pub mod plugin;
pub mod strings;

pub use error::GenError;
pub use model::{AlgebraicType, Attribute, Subtype};
pub use plugin::AlgebraicTypePlugin;

/// Mosaic generator version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
