//! JSON type manifest provider.
//!
//! A manifest lists the user types an editor may be generated for, with their declared fields:
//!
//! ```json
//! {
//!   "types": [
//!     {
//!       "script": "Assets/Scripts/Player.cs",
//!       "name": "Player",
//!       "namespace": "Game",
//!       "fields": [
//!         { "name": "speed", "type": { "kind": "value", "name": "float" } },
//!         { "name": "hp", "type": { "kind": "value", "name": "int" },
//!           "accessibility": "non_public", "attributes": ["SerializeField"] }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! ## Notes
//! - A script handle matches an entry by script path, qualified name or simple name, in that order of
//!   preference. Simple names are matched in manifest order.
//! - Entries with `"compiled": false` stand for scripts that currently fail to compile and never resolve.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use inspectorgen_core::{FieldMeta, TypeRef};
use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::Deserialize;
use thiserror::Error;

use super::ReflectionProvider;

/// Errors raised while loading a type manifest.
#[derive(Debug, Error, Diagnostic)]
pub enum SchemaError {
    #[error("cannot read type manifest '{}'", .path.display())]
    #[diagnostic(code(inspectorgen::schema::io))]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid type manifest: {message}")]
    #[diagnostic(
        code(inspectorgen::schema::syntax),
        help("the manifest is a JSON object with a `types` array; see `inspectorgen --help`")
    )]
    Syntax {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("type '{name}' is declared more than once")]
    #[diagnostic(code(inspectorgen::schema::duplicate_type))]
    DuplicateType { name: String },
}

/// One user type in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeEntry {
    /// Project-relative path of the declaring script
    #[serde(default)]
    pub script: Option<String>,
    pub name: String,
    #[serde(default)]
    pub namespace: String,
    /// `false` while the script has compile errors
    #[serde(default = "default_compiled")]
    pub compiled: bool,
    #[serde(default)]
    pub fields: Vec<FieldMeta>,
}

fn default_compiled() -> bool {
    true
}

impl TypeEntry {
    pub fn new(ty: TypeRef, fields: Vec<FieldMeta>) -> Self {
        Self {
            script: None,
            name: ty.name,
            namespace: ty.namespace,
            compiled: true,
            fields,
        }
    }

    pub fn with_script(mut self, script: impl Into<String>) -> Self {
        self.script = Some(script.into());
        self
    }

    pub fn uncompiled(mut self) -> Self {
        self.compiled = false;
        self
    }

    pub fn type_ref(&self) -> TypeRef {
        TypeRef::new(self.name.clone(), self.namespace.clone())
    }
}

#[derive(Debug, Deserialize)]
struct Manifest {
    types: Vec<TypeEntry>,
}

/// [`ReflectionProvider`] backed by a registered type manifest.
#[derive(Debug, Default, Clone)]
pub struct SchemaProvider {
    entries: Vec<TypeEntry>,
}

impl SchemaProvider {
    /// Build a provider from entries, rejecting duplicate qualified names.
    pub fn from_entries(entries: Vec<TypeEntry>) -> Result<Self, SchemaError> {
        for (i, entry) in entries.iter().enumerate() {
            let ty = entry.type_ref();
            if entries[..i].iter().any(|e| e.type_ref() == ty) {
                return Err(SchemaError::DuplicateType {
                    name: ty.qualified_name(),
                });
            }
        }
        Ok(Self { entries })
    }

    /// Parse a manifest from JSON text. `origin` names the source in diagnostics.
    pub fn from_json(origin: &str, text: &str) -> Result<Self, SchemaError> {
        let manifest: Manifest = serde_json::from_str(text).map_err(|e| SchemaError::Syntax {
            message: e.to_string(),
            span: (offset_of(text, e.line(), e.column()), 1).into(),
            src: NamedSource::new(origin, text.to_string()),
        })?;
        Self::from_entries(manifest.types)
    }

    /// Load a manifest file.
    #[tracing::instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, SchemaError> {
        let text = fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let provider = Self::from_json(&path.to_string_lossy(), &text)?;
        tracing::debug!(types = provider.entries.len(), "loaded type manifest");
        Ok(provider)
    }

    pub fn entries(&self) -> &[TypeEntry] {
        &self.entries
    }

    fn entry(&self, ty: &TypeRef) -> Option<&TypeEntry> {
        self.entries
            .iter()
            .find(|e| e.name == ty.name && e.namespace == ty.namespace)
    }

    fn lookup(&self, script: &str) -> Option<&TypeEntry> {
        self.entries
            .iter()
            .find(|e| e.script.as_deref() == Some(script))
            .or_else(|| self.entries.iter().find(|e| e.type_ref().qualified_name() == script))
            .or_else(|| self.entries.iter().find(|e| e.name == script))
    }
}

impl ReflectionProvider for SchemaProvider {
    fn resolve_type(&self, script: &str) -> Option<TypeRef> {
        self.lookup(script).filter(|e| e.compiled).map(TypeEntry::type_ref)
    }

    fn fields(&self, ty: &TypeRef) -> Vec<FieldMeta> {
        self.entry(ty)
            .map(|e| e.fields.iter().filter(|f| !f.is_static).cloned().collect())
            .unwrap_or_default()
    }

    fn script_path(&self, ty: &TypeRef) -> Option<PathBuf> {
        self.entry(ty).and_then(|e| e.script.as_ref()).map(PathBuf::from)
    }
}

/// Byte offset of a 1-based line/column position, clamped to the text.
fn offset_of(text: &str, line: usize, column: usize) -> usize {
    if line == 0 {
        return 0;
    }
    let line_start: usize = text.split_inclusive('\n').take(line - 1).map(str::len).sum();
    (line_start + column.saturating_sub(1)).min(text.len())
}
