//! Emit the source of a custom inspector editor.
//!
//! The layout is fixed: the editor-framework import, an optional namespace block, and one class bound to the
//! inspected type with three member groups (handles, an `OnEnable` initializer, an `OnInspectorGUI` draw routine).
//!
//! ## Notes
//!
//! - Handles are named exactly like the source fields and looked up by the same name, so renaming a field in the
//!   inspected type means regenerating the editor.
//! - With no selected fields the draw routine falls back to the base implementation. The fallback and the
//!   per-field calls are mutually exclusive.

use inspectorgen_core::naming::{
    EDITOR_BASE_CLASS, EDITOR_IMPORT, SCRIPT_HANDLE_NAME, SCRIPT_PROPERTY_PATH, editor_class_name,
    target_field_name,
};
use inspectorgen_core::{FieldDescriptor, TypeRef};

use super::config::GeneratorConfig;
use super::writer::SourceWriter;

/// Everything needed to generate one editor. Built right before generation and only read during it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// The inspected type
    pub ty: TypeRef,
    /// Fields to bind, in display order
    pub selected_fields: Vec<FieldDescriptor>,
    /// Declare a typed reference to the inspected object
    pub include_target_reference: bool,
}

impl GenerationRequest {
    pub fn new(ty: TypeRef, selected_fields: Vec<FieldDescriptor>, include_target_reference: bool) -> Self {
        Self {
            ty,
            selected_fields,
            include_target_reference,
        }
    }
}

/// Generator for editor classes
#[derive(Debug, Default)]
pub struct EditorGenerator {
    config: GeneratorConfig,
}

impl EditorGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate the full text of the editor for `request`.
    ///
    /// ## Panics
    /// - In debug builds, if the request names no type (a caller bug).
    #[tracing::instrument(skip_all, fields(ty = %request.ty, field_count = request.selected_fields.len()))]
    pub fn generate(&self, request: &GenerationRequest) -> String {
        debug_assert!(!request.ty.name.is_empty(), "generation request without a type name");

        let mut w = SourceWriter::new(&self.config);
        w.line(EDITOR_IMPORT);
        w.blank_line();

        if request.ty.has_namespace() {
            w.block(&format!("namespace {}", request.ty.namespace), |w| emit_class(w, request));
        } else {
            emit_class(&mut w, request);
        }

        let text = w.finish();
        tracing::debug!(bytes = text.len(), "generated editor");
        text
    }
}

fn emit_class(w: &mut SourceWriter<'_>, request: &GenerationRequest) {
    let ty = &request.ty;
    w.line(&format!("[CustomEditor(typeof({}))]", ty.name));
    w.block(
        &format!("public class {} : {}", editor_class_name(ty), EDITOR_BASE_CLASS),
        |w| {
            emit_handles(w, request);
            w.blank_line();
            emit_on_enable(w, request);
            w.blank_line();
            emit_on_inspector_gui(w, request);
        },
    );
}

fn emit_handles(w: &mut SourceWriter<'_>, request: &GenerationRequest) {
    if request.include_target_reference {
        w.line(&format!("private {} {};", request.ty.name, target_field_name(&request.ty)));
        w.blank_line();
    }

    for field in &request.selected_fields {
        w.line(&format!("private SerializedProperty {};", field.name));
    }
    w.line(&format!("private SerializedProperty {};", SCRIPT_HANDLE_NAME));
}

fn emit_on_enable(w: &mut SourceWriter<'_>, request: &GenerationRequest) {
    w.block("private void OnEnable()", |w| {
        w.line(&find_property(SCRIPT_HANDLE_NAME, SCRIPT_PROPERTY_PATH));
        for field in &request.selected_fields {
            w.line(&find_property(&field.name, &field.name));
        }
        if request.include_target_reference {
            w.line(&format!(
                "{} = target as {};",
                target_field_name(&request.ty),
                request.ty.name
            ));
        }
    });
}

fn emit_on_inspector_gui(w: &mut SourceWriter<'_>, request: &GenerationRequest) {
    w.block("public override void OnInspectorGUI()", |w| {
        w.block("using (new EditorGUI.DisabledScope(true))", |w| {
            w.line(&property_field(SCRIPT_HANDLE_NAME, false));
        });

        if request.selected_fields.is_empty() {
            w.line("base.OnInspectorGUI();");
        } else {
            for field in &request.selected_fields {
                w.line(&property_field(&field.name, field.is_collection));
            }
        }
    });
}

fn find_property(handle: &str, path: &str) -> String {
    format!("{handle} = serializedObject.FindProperty(\"{path}\");")
}

fn property_field(handle: &str, include_children: bool) -> String {
    if include_children {
        format!("EditorGUILayout.PropertyField({handle}, true);")
    } else {
        format!("EditorGUILayout.PropertyField({handle});")
    }
}
