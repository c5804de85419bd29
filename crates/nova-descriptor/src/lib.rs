//! JVM descriptor and generic signature encoding.
//!
//! Turns the in-memory [`CodeType`] model into the strings a class-file
//! writer needs: internal names, field and method descriptors, and generic
//! signature fragments. Nothing here parses or performs I/O.

#![forbid(unsafe_code)]

mod config;
mod decl;
mod descriptor;
mod error;
mod generic;
mod ty;

pub use crate::config::{DescriptorConfig, UnresolvedGenerics};
pub use crate::decl::{
    GenericDeclaration, GenericSignature, MethodDeclaration, Parameter, TypeDeclaration,
    TypeParameter, TypeSpec,
};
pub use crate::descriptor::{
    binary_name, binary_names, internal_name, method_binary_name, method_descriptor,
    parameters_and_return_descriptor, parameters_descriptor, primitive_descriptor,
    type_descriptor, type_descriptors, types_and_return_descriptor, write_binary_name,
    write_type_descriptor,
};
pub use crate::error::{Error, Result};
pub use crate::generic::{
    bounds, fix_result, generic_name, infer_method_descriptor, type_parameters_signature,
    GenericResolver, LOG_TARGET,
};
pub use crate::ty::{Bound, BoundKind, CodeType, GenericType, PrimitiveType, OBJECT};
