//! The contract between the generator host and individual generators.
//!
//! The host walks every registered generator once per algebraic type and
//! merges the contributions into one output file. The hook set is fixed;
//! generators override only the hooks they contribute through, and every
//! other hook keeps its neutral default — empty lists, identity file
//! transformation, no file-type or nullability preference.

use crate::code::{FileType, FileWriteRequest};
use crate::error::GenError;
use crate::model::AlgebraicType;
use crate::objc::{
    BlockType, CFunction, ClassNullability, Comment, Constant, Enumeration, ForwardDeclaration,
    Import, Method, Property, Protocol,
};

/// A code generator contributing to the output of one algebraic type.
///
/// Every hook is pure: contributions depend only on the type description
/// passed in, never on host state or prior invocations.
pub trait AlgebraicTypePlugin {
    /// Extra files to emit alongside the main output file.
    fn additional_files(&self, _algebraic_type: &AlgebraicType) -> Vec<FileWriteRequest> {
        Vec::new()
    }

    /// Block typedefs declared in the generated header.
    fn block_types(&self, _algebraic_type: &AlgebraicType) -> Vec<BlockType> {
        Vec::new()
    }

    /// Class methods added to the generated class.
    fn class_methods(&self, _algebraic_type: &AlgebraicType) -> Vec<Method> {
        Vec::new()
    }

    /// `NS_ENUM` declarations added to the generated header.
    fn enumerations(&self, _algebraic_type: &AlgebraicType) -> Vec<Enumeration> {
        Vec::new()
    }

    /// Rewrite an outgoing write request. Identity unless overridden.
    fn file_transformation(&self, request: FileWriteRequest) -> FileWriteRequest {
        request
    }

    /// Preferred output file type, if this generator imposes one.
    fn file_type(&self, _algebraic_type: &AlgebraicType) -> Option<FileType> {
        None
    }

    /// Forward declarations added to the generated header.
    fn forward_declarations(&self, _algebraic_type: &AlgebraicType) -> Vec<ForwardDeclaration> {
        Vec::new()
    }

    /// Free C functions added to the generated file.
    fn functions(&self, _algebraic_type: &AlgebraicType) -> Vec<CFunction> {
        Vec::new()
    }

    /// Comments emitted at the top of the generated file.
    fn header_comments(&self, _algebraic_type: &AlgebraicType) -> Vec<Comment> {
        Vec::new()
    }

    /// Protocols the generated class conforms to.
    fn implemented_protocols(&self, _algebraic_type: &AlgebraicType) -> Vec<Protocol> {
        Vec::new()
    }

    /// Imports added to the generated file.
    fn imports(&self, _algebraic_type: &AlgebraicType) -> Vec<Import> {
        Vec::new()
    }

    /// Instance methods added to the generated class.
    fn instance_methods(&self, _algebraic_type: &AlgebraicType) -> Vec<Method> {
        Vec::new()
    }

    /// Backing instance variables added to the generated class.
    fn internal_properties(&self, _algebraic_type: &AlgebraicType) -> Vec<Property> {
        Vec::new()
    }

    /// Runtime support facilities the generated code requires at compile
    /// time, surfaced to the build pipeline as capability names.
    fn required_includes(&self) -> Vec<&'static str> {
        Vec::new()
    }

    /// Static constants added to the generated file.
    fn static_constants(&self, _algebraic_type: &AlgebraicType) -> Vec<Constant> {
        Vec::new()
    }

    /// Diagnostics this generator raises against the type description.
    fn validation_errors(&self, _algebraic_type: &AlgebraicType) -> Vec<GenError> {
        Vec::new()
    }

    /// Class-level nullability posture, if this generator imposes one.
    fn nullability(&self, _algebraic_type: &AlgebraicType) -> Option<ClassNullability> {
        None
    }

    /// Whether the generated class forbids subclassing.
    fn subclassing_restricted(&self, _algebraic_type: &AlgebraicType) -> bool {
        false
    }
}
