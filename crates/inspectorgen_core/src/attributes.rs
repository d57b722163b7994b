//! Serialization attribute vocabulary.
//!
//! This registry defines the attribute spellings the classifier recognises on a field. Reflection providers hand
//! over raw attribute names; callers should resolve them through [`from_str`] instead of comparing strings.
//!
//! ## Notes
//! - Matching is **case-sensitive**.
//! - Every attribute accepts its `...Attribute` suffix form and its namespace-qualified form as aliases.
//!
//! ## Examples
//! ```rust
//! use inspectorgen_core::attributes::{self, AttributeId};
//!
//! assert_eq!(attributes::from_str("SerializeField"), Some(AttributeId::SerializeField));
//! assert_eq!(attributes::from_str("System.NonSerialized"), Some(AttributeId::NonSerialized));
//! assert_eq!(attributes::from_str("Header"), None);
//! ```

/// Stable identifier for a recognised attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeId {
    /// Excludes a field from serialization regardless of its accessibility.
    NonSerialized,
    /// Opts a non-public field into serialization.
    SerializeField,
}

/// Metadata for a recognised attribute.
#[derive(Debug, Clone, Copy)]
pub struct AttributeInfo {
    pub id: AttributeId,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
}

/// Registry of all recognised attributes.
pub const ATTRIBUTES: &[AttributeInfo] = &[
    AttributeInfo {
        id: AttributeId::NonSerialized,
        canonical: "NonSerialized",
        aliases: &[
            "NonSerializedAttribute",
            "System.NonSerialized",
            "System.NonSerializedAttribute",
        ],
        description: "Never serialize this field.",
    },
    AttributeInfo {
        id: AttributeId::SerializeField,
        canonical: "SerializeField",
        aliases: &[
            "SerializeFieldAttribute",
            "UnityEngine.SerializeField",
            "UnityEngine.SerializeFieldAttribute",
        ],
        description: "Serialize this field even though it is not public.",
    },
];

/// Resolve a spelling (canonical or alias) to an [`AttributeId`].
pub fn from_str(name: &str) -> Option<AttributeId> {
    ATTRIBUTES
        .iter()
        .find(|a| a.canonical == name || a.aliases.iter().any(|alias| *alias == name))
        .map(|a| a.id)
}

/// Return the canonical spelling for an attribute.
pub fn as_str(id: AttributeId) -> &'static str {
    info_for(id).canonical
}

/// Return the full metadata entry for an attribute.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: AttributeId) -> &'static AttributeInfo {
    ATTRIBUTES
        .iter()
        .find(|a| a.id == id)
        .expect("INVARIANT: every AttributeId has a registry entry")
}
