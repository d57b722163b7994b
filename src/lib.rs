#![forbid(unsafe_code)]
//! inspectorgen: custom inspector editor generator
//!
//! Given field metadata for a user type, inspectorgen decides which fields the engine can serialize, lets a
//! caller pick a subset, and generates the source of an editor class that binds one property per picked field.
//! Generated editors are written to a new file or appended to an existing one.
//!
//! ## Pipeline
//!
//! 1. [`reflect`] resolves a script to a type and reports its declared fields
//! 2. `inspectorgen_core::classify` keeps the eligible ones, in declaration order
//! 3. [`session`] holds the user's selection for the current type
//! 4. [`codegen`] renders the editor text
//! 5. [`output`] writes it, merging into an existing file when there is one
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **Caller bugs**: generating without a type name trips a `debug_assert!`.

pub mod cli;
pub mod codegen;
pub mod output;
pub mod reflect;
pub mod session;
pub mod version;

pub use inspectorgen_core::{Accessibility, FieldDescriptor, FieldMeta, TypeDescriptor, TypeRef};

pub use codegen::{EditorGenerator, GenerationRequest, GeneratorConfig};
pub use output::{FileSystem, OsFileSystem, WriteOutcome, merge_into_existing, write_editor};
pub use reflect::{ReflectionProvider, SchemaError, SchemaProvider, classify_script};
pub use session::InspectorSession;
