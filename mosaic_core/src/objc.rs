//! Objective-C constructs produced by generators.
//!
//! Generators describe their output as plain data; a separate renderer turns
//! these descriptors into source text. Only the subset of the language that
//! generators actually contribute is modeled here: block types, multi-part
//! method signatures with statement-line bodies, and the per-class
//! contribution kinds a generator may hand to the host (imports, protocols,
//! enumerations, constants, properties).

// =============================================================================
// Types
// =============================================================================

/// Reference to an Objective-C type.
///
/// `name` is the bare type name; `reference` is the spelling used in
/// parameter and property positions, which differs for object pointers
/// (`NSString` vs `NSString *`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeRef {
    /// Bare type name.
    pub name: String,
    /// Spelling in parameter position.
    pub reference: String,
}

impl TypeRef {
    /// Create a type reference with distinct name and parameter spellings.
    #[must_use]
    pub fn new(name: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reference: reference.into(),
        }
    }

    /// Create a reference to a scalar type, spelled identically everywhere
    /// (`CGFloat`, `NSUInteger`, `BOOL`).
    #[must_use]
    pub fn scalar(name: impl Into<String>) -> Self {
        let name = name.into();
        let reference = name.clone();
        Self { name, reference }
    }

    /// Create a reference to an object type, spelled as a pointer in
    /// parameter position (`NSString` becomes `NSString *`).
    #[must_use]
    pub fn object(name: impl Into<String>) -> Self {
        let name = name.into();
        let reference = format!("{name} *");
        Self { name, reference }
    }
}

// =============================================================================
// Blocks
// =============================================================================

/// One parameter of a block type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockTypeParameter {
    /// Parameter name.
    pub name: String,
    /// Parameter type.
    pub ty: TypeRef,
}

/// A named block (handler) type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockType {
    /// Typedef name the block is declared under.
    pub name: String,
    /// Ordered parameter list.
    pub parameters: Vec<BlockTypeParameter>,
    /// Return type; `None` is void.
    pub return_type: Option<TypeRef>,
}

impl BlockType {
    /// The type reference used when this block type appears in a parameter
    /// position. Block typedefs are referenced by bare name.
    #[must_use]
    pub fn type_ref(&self) -> TypeRef {
        TypeRef::scalar(self.name.clone())
    }
}

// =============================================================================
// Methods
// =============================================================================

/// The argument attached to one keyword of a method signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeywordArgument {
    /// Parameter variable name.
    pub name: String,
    /// Parameter type.
    pub ty: TypeRef,
}

/// One labeled slot of a multi-part method signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keyword {
    /// Selector part, e.g. `matchCircle`.
    pub name: String,
    /// Argument for this part; `None` for argumentless selector parts.
    pub argument: Option<KeywordArgument>,
}

/// A method descriptor: signature keywords plus a statement-line body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Method {
    /// Protocol this method belongs to, if any.
    pub belongs_to_protocol: Option<String>,
    /// Documentation comments emitted above the method.
    pub comments: Vec<Comment>,
    /// Compiler attributes such as availability annotations.
    pub compiler_attributes: Vec<String>,
    /// Ordered signature keywords.
    pub keywords: Vec<Keyword>,
    /// Ordered body statement lines.
    pub body: Vec<String>,
    /// Return type; `None` is void.
    pub return_type: Option<TypeRef>,
}

// =============================================================================
// Host Contributions
// =============================================================================

/// A source comment line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comment {
    /// Comment text without delimiters.
    pub content: String,
}

/// An import contributed to the generated file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Import {
    /// File to import, e.g. `Shape.h`.
    pub file: String,
    /// Whether the import belongs in the public header.
    pub is_public: bool,
    /// Framework the file comes from, if not the current target.
    pub library: Option<String>,
}

/// A protocol conformance contributed to the generated class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Protocol {
    /// Protocol name.
    pub name: String,
}

/// A forward declaration contributed to the generated header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ForwardDeclaration {
    /// `@class Name;`
    Class {
        /// Declared class name.
        name: String,
    },
    /// `@protocol Name;`
    Protocol {
        /// Declared protocol name.
        name: String,
    },
}

/// An `NS_ENUM` declaration contributed to the generated header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enumeration {
    /// Enumeration name.
    pub name: String,
    /// Underlying integer type.
    pub underlying: TypeRef,
    /// Ordered case names; values are positional.
    pub values: Vec<String>,
}

/// A static constant contributed to the generated file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Constant {
    /// Constant type.
    pub ty: TypeRef,
    /// Constant name.
    pub name: String,
    /// Initializer expression.
    pub value: String,
}

/// One parameter of a C function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionParameter {
    /// Parameter name.
    pub name: String,
    /// Parameter type.
    pub ty: TypeRef,
}

/// A free C function contributed to the generated file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CFunction {
    /// Function name.
    pub name: String,
    /// Ordered parameter list.
    pub parameters: Vec<FunctionParameter>,
    /// Return type; `None` is void.
    pub return_type: Option<TypeRef>,
    /// Ordered body statement lines.
    pub body: Vec<String>,
}

/// An instance variable backing contributed to the generated class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Property {
    /// Property name.
    pub name: String,
    /// Property type.
    pub ty: TypeRef,
}

/// Class-level nullability posture a generator may impose.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassNullability {
    /// Wrap the interface in `NS_ASSUME_NONNULL` audit regions.
    AssumeNonnull,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_type_ref_spelling() {
        let ty = TypeRef::scalar("CGFloat");
        assert_eq!(ty.name, "CGFloat");
        assert_eq!(ty.reference, "CGFloat");
    }

    #[test]
    fn test_object_type_ref_spelling() {
        let ty = TypeRef::object("NSString");
        assert_eq!(ty.name, "NSString");
        assert_eq!(ty.reference, "NSString *");
    }

    #[test]
    fn test_block_type_ref_uses_bare_name() {
        let block = BlockType {
            name: "ShapeCircleMatchHandler".to_string(),
            parameters: vec![BlockTypeParameter {
                name: "radius".to_string(),
                ty: TypeRef::scalar("CGFloat"),
            }],
            return_type: None,
        };

        let ty = block.type_ref();
        assert_eq!(ty.name, "ShapeCircleMatchHandler");
        assert_eq!(ty.reference, "ShapeCircleMatchHandler");
    }

    #[test]
    fn test_type_ref_equality() {
        assert_eq!(TypeRef::scalar("BOOL"), TypeRef::new("BOOL", "BOOL"));
        assert_ne!(TypeRef::scalar("NSString"), TypeRef::object("NSString"));
    }
}
