//! Identifier conventions for generated editors.
//!
//! The generated source targets the engine's editor framework, so the spellings below are fixed.

use crate::types::TypeRef;

/// Namespace of the editor framework.
pub const EDITOR_NAMESPACE: &str = "UnityEditor";

/// Import line emitted at the top of every generated editor.
pub const EDITOR_IMPORT: &str = "using UnityEditor;";

/// Prefix that marks an existing file as already importing the editor framework.
pub const EDITOR_IMPORT_MARKER: &str = "using UnityEditor";

/// Preprocessor symbol defined only when compiling for the editor.
pub const EDITOR_GUARD_SYMBOL: &str = "UNITY_EDITOR";

/// Base class of generated editors.
pub const EDITOR_BASE_CLASS: &str = "Editor";

/// Suffix appended to the inspected type's name.
pub const EDITOR_CLASS_SUFFIX: &str = "Editor";

/// Serialized backing name of the implicit script reference.
pub const SCRIPT_PROPERTY_PATH: &str = "m_Script";

/// Handle name for the implicit script reference.
pub const SCRIPT_HANDLE_NAME: &str = "_script";

/// File extension of generated sources.
pub const SOURCE_EXTENSION: &str = "cs";

/// Line prefixes that start a top-level declaration, checked in file order.
pub const DECLARATION_PREFIXES: &[&str] = &["namespace", "public", "internal"];

/// Lower-case the first character, leaving the rest untouched.
///
/// ## Examples
/// ```rust
/// use inspectorgen_core::naming::to_top_lower;
///
/// assert_eq!(to_top_lower("Player"), "player");
/// assert_eq!(to_top_lower("HUDPanel"), "hUDPanel");
/// assert_eq!(to_top_lower(""), "");
/// ```
pub fn to_top_lower(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `Player` -> `PlayerEditor`.
pub fn editor_class_name(ty: &TypeRef) -> String {
    format!("{}{}", ty.name, EDITOR_CLASS_SUFFIX)
}

/// `Player` -> `_player`.
pub fn target_field_name(ty: &TypeRef) -> String {
    format!("_{}", to_top_lower(&ty.name))
}

/// `Player` -> `PlayerEditor.cs`.
pub fn editor_file_name(ty: &TypeRef) -> String {
    format!("{}.{}", editor_class_name(ty), SOURCE_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_top_lower() {
        assert_eq!(to_top_lower("Player"), "player");
        assert_eq!(to_top_lower("player"), "player");
        assert_eq!(to_top_lower("P"), "p");
        assert_eq!(to_top_lower("Ébauche"), "ébauche");
    }

    #[test]
    fn test_editor_names() {
        let ty = TypeRef::new("Player", "Game");
        assert_eq!(editor_class_name(&ty), "PlayerEditor");
        assert_eq!(target_field_name(&ty), "_player");
        assert_eq!(editor_file_name(&ty), "PlayerEditor.cs");
    }
}
