//! Field metadata records.
//!
//! [`FieldMeta`] is what a reflection provider reports for one declared field. [`FieldDescriptor`] is what the
//! classifier hands back for an eligible field: the same facts, with attribute spellings resolved and the
//! collection flag computed.

use crate::attributes::{self, AttributeId};
use crate::types::TypeDescriptor;

/// Field accessibility as far as serialization is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Accessibility {
    #[default]
    Public,
    /// Private, protected or internal.
    NonPublic,
}

impl Accessibility {
    pub fn is_public(self) -> bool {
        self == Accessibility::Public
    }
}

/// Raw metadata for one declared field, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldMeta {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub declared_type: TypeDescriptor,
    #[cfg_attr(feature = "serde", serde(default))]
    pub accessibility: Accessibility,
    /// Attribute names as written on the field (`SerializeField`, `System.NonSerialized`, ...).
    #[cfg_attr(feature = "serde", serde(default))]
    pub attributes: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default, rename = "static"))]
    pub is_static: bool,
}

impl FieldMeta {
    /// A public instance field with no attributes.
    pub fn new(name: impl Into<String>, declared_type: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            declared_type,
            accessibility: Accessibility::Public,
            attributes: Vec::new(),
            is_static: false,
        }
    }

    pub fn non_public(mut self) -> Self {
        self.accessibility = Accessibility::NonPublic;
        self
    }

    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attributes.push(attribute.into());
        self
    }

    pub fn static_field(mut self) -> Self {
        self.is_static = true;
        self
    }

    fn has_attribute(&self, id: AttributeId) -> bool {
        self.attributes.iter().any(|a| attributes::from_str(a) == Some(id))
    }

    pub fn has_non_serialized_marker(&self) -> bool {
        self.has_attribute(AttributeId::NonSerialized)
    }

    pub fn has_explicit_serialize_marker(&self) -> bool {
        self.has_attribute(AttributeId::SerializeField)
    }
}

/// An eligible field as reported by the classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldDescriptor {
    pub name: String,
    pub declared_type: TypeDescriptor,
    /// The declared type is an array or list; the inspector draws its children.
    pub is_collection: bool,
    pub accessibility: Accessibility,
    pub has_non_serialized_marker: bool,
    pub has_explicit_serialize_marker: bool,
}

impl FieldDescriptor {
    /// Describe `meta` without judging eligibility.
    pub fn describe(meta: &FieldMeta) -> Self {
        Self {
            name: meta.name.clone(),
            declared_type: meta.declared_type.clone(),
            is_collection: meta.declared_type.is_container(),
            accessibility: meta.accessibility,
            has_non_serialized_marker: meta.has_non_serialized_marker(),
            has_explicit_serialize_marker: meta.has_explicit_serialize_marker(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers_resolve_through_registry() {
        let meta = FieldMeta::new("hp", TypeDescriptor::value("int"))
            .non_public()
            .with_attribute("UnityEngine.SerializeField");
        assert!(meta.has_explicit_serialize_marker());
        assert!(!meta.has_non_serialized_marker());
    }

    #[test]
    fn test_unrelated_attributes_are_ignored() {
        let meta = FieldMeta::new("hp", TypeDescriptor::value("int"))
            .with_attribute("Range")
            .with_attribute("Tooltip");
        assert!(!meta.has_explicit_serialize_marker());
        assert!(!meta.has_non_serialized_marker());
    }

    #[test]
    fn test_describe_sets_collection_flag() {
        let meta = FieldMeta::new("items", TypeDescriptor::list_of(TypeDescriptor::engine_object("Item")));
        let desc = FieldDescriptor::describe(&meta);
        assert!(desc.is_collection);
        assert_eq!(desc.name, "items");
        assert!(desc.accessibility.is_public());
    }
}
