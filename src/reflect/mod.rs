//! Type reflection
//!
//! The generator never inspects user types directly. A [`ReflectionProvider`] resolves a script handle to a
//! [`TypeRef`] and reports the declared fields of that type; the pure classifier in `inspectorgen_core` does the
//! rest.
//!
//! ## Modules
//!
//! - `schema` - provider backed by a JSON type manifest

mod schema;

use std::path::PathBuf;

use inspectorgen_core::{FieldDescriptor, FieldMeta, TypeRef, classify};

pub use schema::{SchemaError, SchemaProvider, TypeEntry};

/// Source of field metadata for user types.
pub trait ReflectionProvider {
    /// Resolve a script handle to the type it declares.
    ///
    /// Returns `None` if the handle is unknown or does not currently compile.
    fn resolve_type(&self, script: &str) -> Option<TypeRef>;

    /// Declared instance fields of `ty`, in declaration order.
    fn fields(&self, ty: &TypeRef) -> Vec<FieldMeta>;

    /// Location of the script declaring `ty`, when known.
    fn script_path(&self, _ty: &TypeRef) -> Option<PathBuf> {
        None
    }
}

/// Classify the fields of the type declared by `script`.
///
/// An unresolvable script yields an empty list rather than an error; callers treat that as "no eligible fields".
#[tracing::instrument(skip(provider))]
pub fn classify_script(provider: &dyn ReflectionProvider, script: &str) -> Vec<FieldDescriptor> {
    match provider.resolve_type(script) {
        Some(ty) => classify_type(provider, &ty),
        None => {
            tracing::warn!("script does not resolve to a compiled type");
            Vec::new()
        }
    }
}

/// Classify the fields of an already resolved type.
pub fn classify_type(provider: &dyn ReflectionProvider, ty: &TypeRef) -> Vec<FieldDescriptor> {
    let fields = provider.fields(ty);
    let eligible = classify(&fields);
    tracing::debug!(ty = %ty, declared = fields.len(), eligible = eligible.len(), "classified fields");
    eligible
}
