//! Field and method descriptor encoding.
//!
//! Every function here is total: the plain descriptor path never fails.
//! Generic types that reach it are encoded as their erasure; use
//! [`crate::GenericResolver`] first when the surrounding scopes matter.

use crate::decl::{Parameter, TypeSpec};
use crate::ty::{CodeType, PrimitiveType};

pub fn primitive_descriptor(ty: PrimitiveType) -> char {
    match ty {
        PrimitiveType::Boolean => 'Z',
        PrimitiveType::Byte => 'B',
        PrimitiveType::Char => 'C',
        PrimitiveType::Short => 'S',
        PrimitiveType::Int => 'I',
        PrimitiveType::Long => 'J',
        PrimitiveType::Float => 'F',
        PrimitiveType::Double => 'D',
        PrimitiveType::Void => 'V',
    }
}

/// `java.lang.String` -> `java/lang/String`.
pub fn internal_name(name: &str) -> String {
    name.replace('.', "/")
}

/// Internal name of a class, the tag of a primitive, or the full descriptor
/// of an array (arrays have no separate internal-name form).
pub fn binary_name(ty: &CodeType) -> String {
    let mut out = String::new();
    write_binary_name(&mut out, ty);
    out
}

pub fn type_descriptor(ty: &CodeType) -> String {
    let mut out = String::new();
    write_type_descriptor(&mut out, ty);
    out
}

pub fn binary_names<'a>(types: impl IntoIterator<Item = &'a CodeType>) -> String {
    let mut out = String::new();
    for ty in types {
        write_binary_name(&mut out, ty);
    }
    out
}

pub fn type_descriptors<'a>(types: impl IntoIterator<Item = &'a CodeType>) -> String {
    let mut out = String::new();
    for ty in types {
        write_type_descriptor(&mut out, ty);
    }
    out
}

/// `(` parameter descriptors `)` return descriptor.
pub fn method_descriptor(spec: &TypeSpec) -> String {
    types_and_return_descriptor(&spec.parameter_types, &spec.return_type)
}

/// Same shape as [`method_descriptor`], with each element in binary-name form.
pub fn method_binary_name(spec: &TypeSpec) -> String {
    let mut out = String::from("(");
    for ty in &spec.parameter_types {
        write_binary_name(&mut out, ty);
    }
    out.push(')');
    write_binary_name(&mut out, &spec.return_type);
    out
}

pub fn parameters_descriptor(parameters: &[Parameter]) -> String {
    type_descriptors(parameters.iter().map(|p| &p.ty))
}

pub fn parameters_and_return_descriptor(
    parameters: &[Parameter],
    return_type: &CodeType,
) -> String {
    write_method_descriptor(parameters.iter().map(|p| &p.ty), return_type)
}

pub fn types_and_return_descriptor(
    parameter_types: &[CodeType],
    return_type: &CodeType,
) -> String {
    write_method_descriptor(parameter_types, return_type)
}

fn write_method_descriptor<'a>(
    parameter_types: impl IntoIterator<Item = &'a CodeType>,
    return_type: &CodeType,
) -> String {
    let mut out = String::from("(");
    for ty in parameter_types {
        write_type_descriptor(&mut out, ty);
    }
    out.push(')');
    write_type_descriptor(&mut out, return_type);
    out
}

pub fn write_binary_name(out: &mut String, ty: &CodeType) {
    match ty {
        CodeType::Primitive(prim) => out.push(primitive_descriptor(*prim)),
        CodeType::Class(name) => push_internal_name(out, name),
        CodeType::Array(_) => write_type_descriptor(out, ty),
        CodeType::Generic(generic) => write_binary_name(out, &generic.erasure),
    }
}

pub fn write_type_descriptor(out: &mut String, ty: &CodeType) {
    match ty {
        CodeType::Primitive(prim) => out.push(primitive_descriptor(*prim)),
        CodeType::Class(name) => {
            out.push('L');
            push_internal_name(out, name);
            out.push(';');
        }
        CodeType::Array(component) => {
            out.push('[');
            write_type_descriptor(out, component);
        }
        CodeType::Generic(generic) => write_type_descriptor(out, &generic.erasure),
    }
}

fn push_internal_name(out: &mut String, name: &str) {
    out.extend(name.chars().map(|c| if c == '.' { '/' } else { c }));
}
