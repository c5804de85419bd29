//! Declaration model: parameters, method type specs and generic scopes.

use serde::{Deserialize, Serialize};

use crate::ty::CodeType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub ty: CodeType,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: CodeType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Parameter types plus return type of a method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSpec {
    pub parameter_types: Vec<CodeType>,
    pub return_type: CodeType,
}

impl TypeSpec {
    pub fn new(return_type: CodeType, parameter_types: Vec<CodeType>) -> Self {
        Self {
            parameter_types,
            return_type,
        }
    }

    pub fn from_parameters(return_type: CodeType, parameters: &[Parameter]) -> Self {
        Self {
            parameter_types: parameters.iter().map(|p| p.ty.clone()).collect(),
            return_type,
        }
    }
}

/// A declared type parameter (`T extends Number & Comparable<T>`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeParameter {
    pub name: String,
    pub bounds: Vec<CodeType>,
    /// Every bound is an interface, so the class bound is left empty.
    #[serde(default)]
    pub interface_bounds_only: bool,
}

impl TypeParameter {
    pub fn new(name: impl Into<String>, bounds: Vec<CodeType>) -> Self {
        Self {
            name: name.into(),
            bounds,
            interface_bounds_only: false,
        }
    }

    /// `V extends Comparable<V>` where `Comparable` is an interface.
    pub fn interface_bounded(name: impl Into<String>, bounds: Vec<CodeType>) -> Self {
        Self {
            interface_bounds_only: true,
            ..Self::new(name, bounds)
        }
    }
}

/// Type parameters declared by a class or a method, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericSignature {
    pub type_parameters: Vec<TypeParameter>,
}

impl GenericSignature {
    pub fn new(type_parameters: Vec<TypeParameter>) -> Self {
        Self { type_parameters }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.type_parameters.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&TypeParameter> {
        self.type_parameters.iter().find(|tp| tp.name == name)
    }

    /// Type `name` erases to in this scope: its leftmost bound, or
    /// `java.lang.Object` when declared without bounds.
    ///
    /// Returns `None` when this scope does not declare `name`.
    pub fn bound_of(&self, name: &str) -> Option<CodeType> {
        let tp = self.get(name)?;
        Some(tp.bounds.first().cloned().unwrap_or_else(CodeType::object))
    }
}

/// Anything that owns a generic scope.
pub trait GenericDeclaration {
    fn generic_signature(&self) -> &GenericSignature;
}

impl GenericDeclaration for GenericSignature {
    fn generic_signature(&self) -> &GenericSignature {
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDeclaration {
    /// Fully qualified, dot separated name.
    pub name: String,
    pub generic_signature: GenericSignature,
}

impl TypeDeclaration {
    pub fn new(name: impl Into<String>, generic_signature: GenericSignature) -> Self {
        Self {
            name: name.into(),
            generic_signature,
        }
    }
}

impl GenericDeclaration for TypeDeclaration {
    fn generic_signature(&self) -> &GenericSignature {
        &self.generic_signature
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDeclaration {
    pub name: String,
    pub generic_signature: GenericSignature,
    pub parameters: Vec<Parameter>,
    pub return_type: CodeType,
}

impl MethodDeclaration {
    pub fn new(
        name: impl Into<String>,
        generic_signature: GenericSignature,
        parameters: Vec<Parameter>,
        return_type: CodeType,
    ) -> Self {
        Self {
            name: name.into(),
            generic_signature,
            parameters,
            return_type,
        }
    }

    pub fn type_spec(&self) -> TypeSpec {
        TypeSpec::from_parameters(self.return_type.clone(), &self.parameters)
    }
}

impl GenericDeclaration for MethodDeclaration {
    fn generic_signature(&self) -> &GenericSignature {
        &self.generic_signature
    }
}
