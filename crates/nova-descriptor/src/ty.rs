//! Type model consumed by the encoders.
//!
//! The shapes mirror what a JVM code generator hands to the class-file
//! writer: primitives, arrays, classes referenced by their dotted name, and
//! generic type variables carrying bounds.

use serde::{Deserialize, Serialize};

pub const OBJECT: &str = "java.lang.Object";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
    Void,
}

impl PrimitiveType {
    pub const ALL: [PrimitiveType; 9] = [
        PrimitiveType::Boolean,
        PrimitiveType::Byte,
        PrimitiveType::Char,
        PrimitiveType::Short,
        PrimitiveType::Int,
        PrimitiveType::Long,
        PrimitiveType::Float,
        PrimitiveType::Double,
        PrimitiveType::Void,
    ];

    /// Java source keyword for this primitive (`int`, `void`, ...).
    pub fn keyword(self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Byte => "byte",
            PrimitiveType::Char => "char",
            PrimitiveType::Short => "short",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
            PrimitiveType::Void => "void",
        }
    }
}

/// Sign attached to a generic bound when it is rendered as a type argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BoundKind {
    /// Plain type argument, no sign (`Ljava/util/List<TE;>;`).
    #[default]
    Exact,
    /// `? extends X`, rendered as `+`.
    Extends,
    /// `? super X`, rendered as `-`.
    Super,
}

impl BoundKind {
    pub fn sign(self) -> &'static str {
        match self {
            BoundKind::Exact => "",
            BoundKind::Extends => "+",
            BoundKind::Super => "-",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bound {
    pub kind: BoundKind,
    pub ty: CodeType,
}

impl Bound {
    pub fn exact(ty: CodeType) -> Self {
        Self {
            kind: BoundKind::Exact,
            ty,
        }
    }

    pub fn extends(ty: CodeType) -> Self {
        Self {
            kind: BoundKind::Extends,
            ty,
        }
    }

    pub fn super_(ty: CodeType) -> Self {
        Self {
            kind: BoundKind::Super,
            ty,
        }
    }
}

/// A generic type usage: a type variable (`T`), a wildcard (`?`, `? extends X`)
/// or an already resolved, parameterized class (`List<E>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenericType {
    pub name: String,
    /// `name` already denotes a resolved class in signature form
    /// (`Ljava/util/List`), not a variable.
    pub is_type: bool,
    pub is_wildcard: bool,
    pub bounds: Vec<Bound>,
    /// Intrinsic type used when no generic scope binds `name`.
    pub erasure: Box<CodeType>,
}

impl GenericType {
    /// Type variable reference `T` erasing to `java.lang.Object`.
    pub fn var(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_type: false,
            is_wildcard: false,
            bounds: Vec::new(),
            erasure: Box::new(CodeType::object()),
        }
    }

    /// Unbounded wildcard `?`, rendered as `*`.
    pub fn wildcard() -> Self {
        Self {
            name: "*".to_string(),
            is_type: false,
            is_wildcard: true,
            bounds: Vec::new(),
            erasure: Box::new(CodeType::object()),
        }
    }

    /// Bounded wildcard (`? extends X` / `? super X`).
    pub fn wildcard_bounded(bound: Bound) -> Self {
        let erasure = match bound.kind {
            BoundKind::Super => CodeType::object(),
            BoundKind::Exact | BoundKind::Extends => bound.ty.clone(),
        };
        Self {
            name: "*".to_string(),
            is_type: false,
            is_wildcard: true,
            bounds: vec![bound],
            erasure: Box::new(erasure),
        }
    }

    /// Parameterized class usage such as `java.util.List<E>`.
    ///
    /// The name is stored in signature form (`Ljava/util/List`) so rendering
    /// only has to append the type arguments and the terminator.
    pub fn parameterized(class: impl Into<String>, arguments: Vec<Bound>) -> Self {
        let class = class.into();
        Self {
            name: format!("L{}", crate::descriptor::internal_name(&class)),
            is_type: true,
            is_wildcard: false,
            bounds: arguments,
            erasure: Box::new(CodeType::Class(class)),
        }
    }

    pub fn with_erasure(mut self, erasure: CodeType) -> Self {
        self.erasure = Box::new(erasure);
        self
    }

    pub fn with_bounds(mut self, bounds: Vec<Bound>) -> Self {
        self.bounds = bounds;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeType {
    Primitive(PrimitiveType),
    /// One level per dimension: `int[][]` is `Array(Array(Primitive(Int)))`.
    Array(Box<CodeType>),
    /// Fully qualified, dot separated class name (`java.lang.String`).
    Class(String),
    Generic(GenericType),
}

impl CodeType {
    pub fn class(name: impl Into<String>) -> Self {
        CodeType::Class(name.into())
    }

    pub fn object() -> Self {
        CodeType::Class(OBJECT.to_string())
    }

    pub fn array(component: CodeType) -> Self {
        CodeType::Array(Box::new(component))
    }

    /// Wrap `element` in `dims` array levels. `dims == 0` returns `element`.
    pub fn array_of(element: CodeType, dims: usize) -> Self {
        (0..dims).fold(element, |ty, _| CodeType::array(ty))
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, CodeType::Primitive(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, CodeType::Array(_))
    }

    pub fn as_generic(&self) -> Option<&GenericType> {
        match self {
            CodeType::Generic(generic) => Some(generic),
            _ => None,
        }
    }

    /// Number of array levels; `0` for non-array types.
    pub fn dimensions(&self) -> usize {
        let mut dims = 0;
        let mut ty = self;
        while let CodeType::Array(component) = ty {
            dims += 1;
            ty = component;
        }
        dims
    }

    /// Innermost non-array type.
    pub fn element(&self) -> &CodeType {
        let mut ty = self;
        while let CodeType::Array(component) = ty {
            ty = component;
        }
        ty
    }
}

impl From<PrimitiveType> for CodeType {
    fn from(value: PrimitiveType) -> Self {
        CodeType::Primitive(value)
    }
}

impl From<GenericType> for CodeType {
    fn from(value: GenericType) -> Self {
        CodeType::Generic(value)
    }
}
