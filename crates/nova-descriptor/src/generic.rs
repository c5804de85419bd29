//! Generic signature fragments and scope-aware descriptor inference.

use crate::config::{DescriptorConfig, UnresolvedGenerics};
use crate::decl::{GenericDeclaration, GenericSignature, Parameter, TypeSpec};
use crate::descriptor::write_type_descriptor;
use crate::error::{Error, Result};
use crate::ty::{Bound, CodeType};

/// Tracing target for resolver events.
pub const LOG_TARGET: &str = "nova.descriptor";

/// Render `ty` as a generic signature fragment.
///
/// | shape                                   | output                    |
/// |-----------------------------------------|---------------------------|
/// | non-generic                             | field descriptor          |
/// | variable, no bounds                     | `TT;`                     |
/// | wildcard, no bounds                     | `*`                       |
/// | resolved class (`is_type`), no bounds   | `Ljava/lang/String;`      |
/// | named, with bounds                      | `Ljava/util/List<TE;>;`   |
/// | wildcard, with bounds                   | `+Ljava/lang/Number;`     |
pub fn generic_name(ty: &CodeType) -> String {
    let mut out = String::new();
    write_generic_name(&mut out, ty);
    fix_result(out)
}

/// Concatenated type-argument rendering of `bounds`, each prefixed by its sign.
pub fn bounds(bounds: &[Bound]) -> String {
    let mut out = String::new();
    write_bounds(&mut out, bounds);
    fix_result(out)
}

/// Collapse runs of `;` left behind by composing fragments that each carry
/// their own terminator.
pub fn fix_result(rendered: String) -> String {
    if !rendered.contains(";;") {
        return rendered;
    }
    let mut out = String::with_capacity(rendered.len());
    for c in rendered.chars() {
        if c == ';' && out.ends_with(';') {
            continue;
        }
        out.push(c);
    }
    out
}

/// Formal type parameter section of a class or method signature, e.g.
/// `<T:Ljava/lang/Number;U:Ljava/lang/Object;>`. Empty when nothing is declared.
///
/// Parameters bounded only by interfaces get an empty class bound:
/// `<V::Ljava/lang/Comparable<TV;>;>`.
pub fn type_parameters_signature(signature: &GenericSignature) -> String {
    if signature.is_empty() {
        return String::new();
    }
    let mut out = String::from("<");
    for tp in &signature.type_parameters {
        out.push_str(&tp.name);
        if tp.bounds.is_empty() {
            out.push_str(":Ljava/lang/Object;");
        } else if tp.interface_bounds_only {
            // Empty class bound.
            out.push(':');
        }
        for bound in &tp.bounds {
            out.push(':');
            write_generic_name(&mut out, bound);
        }
    }
    out.push('>');
    fix_result(out)
}

fn write_generic_name(out: &mut String, ty: &CodeType) {
    let CodeType::Generic(generic) = ty else {
        write_type_descriptor(out, ty);
        return;
    };

    if generic.bounds.is_empty() {
        if generic.is_type {
            out.push_str(&generic.name);
            out.push(';');
        } else if generic.is_wildcard {
            out.push_str(&generic.name);
        } else {
            out.push('T');
            out.push_str(&generic.name);
            out.push(';');
        }
        return;
    }

    if generic.is_wildcard {
        write_bounds(out, &generic.bounds);
    } else {
        out.push_str(&generic.name);
        out.push('<');
        write_bounds(out, &generic.bounds);
        out.push('>');
    }
    out.push(';');
}

fn write_bounds(out: &mut String, bounds: &[Bound]) {
    for bound in bounds {
        out.push_str(bound.kind.sign());
        write_generic_name(out, &bound.ty);
    }
}

/// Resolves type variables against an ordered list of generic scopes.
///
/// Earlier scopes shadow later ones: for a method the list is
/// `[method, owner]`, so a method type parameter wins over a class type
/// parameter of the same name. Substitution is single-level.
#[derive(Debug, Clone)]
pub struct GenericResolver<'a> {
    scopes: Vec<&'a GenericSignature>,
    config: DescriptorConfig,
}

impl<'a> GenericResolver<'a> {
    pub fn new(scopes: Vec<&'a GenericSignature>) -> Self {
        Self {
            scopes,
            config: DescriptorConfig::default(),
        }
    }

    /// Method scope first, then the declaring type's scope.
    pub fn for_method(
        owner: &'a dyn GenericDeclaration,
        method: &'a dyn GenericDeclaration,
    ) -> Self {
        Self::new(vec![method.generic_signature(), owner.generic_signature()])
    }

    pub fn with_config(mut self, config: DescriptorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn scopes(&self) -> &[&'a GenericSignature] {
        &self.scopes
    }

    pub fn config(&self) -> &DescriptorConfig {
        &self.config
    }

    /// Substitute a type variable with its bound from the first scope that
    /// declares it. Non-generic types and resolved classes (`is_type`) are
    /// returned as they are. Wildcards are looked up by name like variables.
    /// Array components are resolved in place (`T[]` -> `Number[]`).
    pub fn resolve(&self, ty: &CodeType) -> Result<CodeType> {
        let generic = match ty {
            CodeType::Generic(generic) => generic,
            CodeType::Array(component) => return Ok(CodeType::array(self.resolve(component)?)),
            CodeType::Primitive(_) | CodeType::Class(_) => return Ok(ty.clone()),
        };
        if generic.is_type {
            return Ok(ty.clone());
        }

        for (depth, scope) in self.scopes.iter().enumerate() {
            if let Some(bound) = scope.bound_of(&generic.name) {
                tracing::trace!(
                    target: LOG_TARGET,
                    name = %generic.name,
                    depth,
                    "type variable resolved from generic scope"
                );
                return Ok(bound);
            }
        }

        match self.config.unresolved_generics {
            UnresolvedGenerics::Erasure => {
                tracing::debug!(
                    target: LOG_TARGET,
                    name = %generic.name,
                    "type variable not declared in any scope; using its erasure"
                );
                Ok((*generic.erasure).clone())
            }
            UnresolvedGenerics::Strict => Err(Error::MissingGenericBound {
                name: generic.name.clone(),
            }),
        }
    }

    /// Method descriptor with every type variable substituted first.
    pub fn infer_descriptor(
        &self,
        parameters: &[Parameter],
        return_type: &CodeType,
    ) -> Result<String> {
        self.infer(parameters.iter().map(|p| &p.ty), return_type)
    }

    pub fn infer_type_spec(&self, spec: &TypeSpec) -> Result<String> {
        self.infer(&spec.parameter_types, &spec.return_type)
    }

    fn infer<'t>(
        &self,
        parameter_types: impl IntoIterator<Item = &'t CodeType>,
        return_type: &CodeType,
    ) -> Result<String> {
        let mut out = String::from("(");
        for ty in parameter_types {
            write_type_descriptor(&mut out, &self.resolve(ty)?);
        }
        out.push(')');
        write_type_descriptor(&mut out, &self.resolve(return_type)?);
        Ok(out)
    }
}

/// Descriptor of `parameters`/`return_type` with type variables looked up in
/// `method`'s scope, then `owner`'s, then falling back to their erasure.
pub fn infer_method_descriptor(
    owner: &dyn GenericDeclaration,
    method: &dyn GenericDeclaration,
    parameters: &[Parameter],
    return_type: &CodeType,
) -> Result<String> {
    GenericResolver::for_method(owner, method).infer_descriptor(parameters, return_type)
}
