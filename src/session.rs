//! Host-side selection state.
//!
//! An [`InspectorSession`] is what a front end (the CLI, or an editor window) holds between user actions: the
//! chosen script, its classified fields, one checkbox per field and the "include target reference" flag. Picking a
//! different script throws the old selection away and starts over with every field checked.

use std::io;
use std::path::{Path, PathBuf};

use inspectorgen_core::naming::editor_file_name;
use inspectorgen_core::{FieldDescriptor, TypeRef};

use crate::codegen::{EditorGenerator, GenerationRequest};
use crate::output::{FileSystem, WriteOutcome, write_editor};
use crate::reflect::{ReflectionProvider, classify_type};

/// Selection state for one inspected type.
#[derive(Debug, Default, Clone)]
pub struct InspectorSession {
    script: Option<String>,
    ty: Option<TypeRef>,
    fields: Vec<FieldDescriptor>,
    checks: Vec<bool>,
    include_target_reference: bool,
}

impl InspectorSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to `script`, rebuilding the field list and selection from scratch.
    ///
    /// An unresolvable script leaves the session with no type and no fields.
    pub fn set_script(&mut self, provider: &dyn ReflectionProvider, script: &str) {
        self.script = Some(script.to_string());
        self.ty = provider.resolve_type(script);
        self.fields = match &self.ty {
            Some(ty) => classify_type(provider, ty),
            None => {
                tracing::warn!(script, "script does not resolve to a compiled type");
                Vec::new()
            }
        };
        self.checks = vec![true; self.fields.len()];
    }

    /// Forget the current script.
    pub fn clear(&mut self) {
        self.script = None;
        self.ty = None;
        self.fields.clear();
        self.checks.clear();
    }

    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    pub fn type_ref(&self) -> Option<&TypeRef> {
        self.ty.as_ref()
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn checks(&self) -> &[bool] {
        &self.checks
    }

    pub fn is_checked(&self, index: usize) -> bool {
        self.checks.get(index).copied().unwrap_or(false)
    }

    /// Set one checkbox. Out-of-range indices are ignored.
    pub fn set_checked(&mut self, index: usize, checked: bool) {
        if let Some(check) = self.checks.get_mut(index) {
            *check = checked;
        }
    }

    pub fn toggle(&mut self, index: usize) {
        if let Some(check) = self.checks.get_mut(index) {
            *check = !*check;
        }
    }

    /// Set every checkbox for fields called `name`.
    ///
    /// ## Returns
    /// - `false` if no field has that name.
    pub fn set_checked_by_name(&mut self, name: &str, checked: bool) -> bool {
        let mut found = false;
        for (field, check) in self.fields.iter().zip(self.checks.iter_mut()) {
            if field.name == name {
                *check = checked;
                found = true;
            }
        }
        found
    }

    pub fn select_all(&mut self, checked: bool) {
        self.checks.iter_mut().for_each(|c| *c = checked);
    }

    pub fn include_target_reference(&self) -> bool {
        self.include_target_reference
    }

    pub fn set_include_target_reference(&mut self, include: bool) {
        self.include_target_reference = include;
    }

    /// Checked fields, in display order.
    pub fn selected_fields(&self) -> Vec<FieldDescriptor> {
        self.fields
            .iter()
            .zip(&self.checks)
            .filter(|(_, checked)| **checked)
            .map(|(field, _)| field.clone())
            .collect()
    }

    /// Snapshot the selection as a request. `None` while no type is resolved.
    pub fn build_request(&self) -> Option<GenerationRequest> {
        let ty = self.ty.clone()?;
        Some(GenerationRequest::new(
            ty,
            self.selected_fields(),
            self.include_target_reference,
        ))
    }

    /// Where the editor goes unless the user picks another path: next to the script, named `<Type>Editor.cs`.
    pub fn default_save_path(&self, provider: &dyn ReflectionProvider) -> Option<PathBuf> {
        let ty = self.ty.as_ref()?;
        let dir = provider
            .script_path(ty)
            .and_then(|p| p.parent().map(Path::to_path_buf))
            .unwrap_or_default();
        Some(dir.join(editor_file_name(ty)))
    }

    /// Generate the editor and write it to `path`.
    ///
    /// ## Returns
    /// - `Ok(None)` when there is nothing to do: the save prompt was cancelled (`path` is `None` or empty) or no
    ///   type is resolved.
    pub fn create(
        &self,
        fs: &dyn FileSystem,
        generator: &EditorGenerator,
        path: Option<&Path>,
    ) -> io::Result<Option<WriteOutcome>> {
        let Some(path) = path.filter(|p| !p.as_os_str().is_empty()) else {
            tracing::debug!("save path cancelled");
            return Ok(None);
        };
        let Some(request) = self.build_request() else {
            return Ok(None);
        };

        let text = generator.generate(&request);
        write_editor(fs, path, &text, &generator.config().guard_symbol).map(Some)
    }
}
