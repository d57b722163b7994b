//! Decide which fields an inspector can bind.
//!
//! ## Notes
//!
//! - A field is eligible iff it is not marked non-serialized, it is public or explicitly marked for
//!   serialization, and its declared type is eligible. The non-serialized check runs first and on its own, so a
//!   public field carrying that marker is excluded even though public fields skip the explicit-marker check.
//! - Type eligibility is recursive over containers. There is no depth limit; `List<int[]>` is evaluated by the
//!   same rule as `int[]`.
//! - Output order is declaration order. Nothing is sorted, renamed or deduplicated.

use crate::field::{FieldDescriptor, FieldMeta};
use crate::types::TypeDescriptor;

/// Check whether values of `ty` can be serialized by the engine.
///
/// ## Examples
/// ```rust
/// use inspectorgen_core::{is_type_eligible, TypeDescriptor};
///
/// assert!(is_type_eligible(&TypeDescriptor::list_of(TypeDescriptor::engine_object("Transform"))));
/// assert!(!is_type_eligible(&TypeDescriptor::list_of(TypeDescriptor::class("Inventory"))));
/// ```
pub fn is_type_eligible(ty: &TypeDescriptor) -> bool {
    match ty {
        TypeDescriptor::EngineObject { .. }
        | TypeDescriptor::Enum { .. }
        | TypeDescriptor::Value { .. }
        | TypeDescriptor::String => true,
        TypeDescriptor::Array { element } | TypeDescriptor::List { element } => is_type_eligible(element),
        TypeDescriptor::Class { .. } | TypeDescriptor::Generic { .. } => false,
    }
}

/// Element type of an eligible collection, `None` if `ty` is not an array or list.
pub fn collection_element(ty: &TypeDescriptor) -> Option<&TypeDescriptor> {
    ty.element_type()
}

/// Check whether a single field is exposed to the inspector.
pub fn is_field_eligible(field: &FieldMeta) -> bool {
    if field.has_non_serialized_marker() {
        return false;
    }

    if !field.accessibility.is_public() && !field.has_explicit_serialize_marker() {
        return false;
    }

    is_type_eligible(&field.declared_type)
}

/// Classify a type's declared instance fields.
///
/// ## Parameters
/// - `fields`: field metadata in declaration order.
///
/// ## Returns
/// - The eligible fields, in the same order. Static fields are never part of the result.
pub fn classify(fields: &[FieldMeta]) -> Vec<FieldDescriptor> {
    fields
        .iter()
        .filter(|f| !f.is_static)
        .filter(|f| is_field_eligible(f))
        .map(FieldDescriptor::describe)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TypeDescriptor as T;

    fn names(fields: &[FieldDescriptor]) -> Vec<&str> {
        fields.iter().map(|f| f.name.as_str()).collect()
    }

    // ========================================
    // Type eligibility
    // ========================================

    #[test]
    fn test_leaf_types() {
        assert!(is_type_eligible(&T::engine_object("Transform")));
        assert!(is_type_eligible(&T::enumeration("Mode")));
        assert!(is_type_eligible(&T::value("float")));
        assert!(is_type_eligible(&T::value("Vector3")));
        assert!(is_type_eligible(&T::String));
        assert!(!is_type_eligible(&T::class("Inventory")));
        assert!(!is_type_eligible(&T::generic("Dictionary", vec![T::String, T::value("int")])));
    }

    #[test]
    fn test_containers_follow_element() {
        assert!(is_type_eligible(&T::array_of(T::value("int"))));
        assert!(is_type_eligible(&T::list_of(T::String)));
        assert!(!is_type_eligible(&T::array_of(T::class("Inventory"))));
        assert!(!is_type_eligible(&T::list_of(T::generic("HashSet", vec![T::value("int")]))));
    }

    #[test]
    fn test_nested_containers() {
        assert!(is_type_eligible(&T::list_of(T::array_of(T::enumeration("Mode")))));
        assert!(!is_type_eligible(&T::list_of(T::list_of(T::class("Inventory")))));
    }

    #[test]
    fn test_collection_element() {
        let ty = T::array_of(T::String);
        assert_eq!(collection_element(&ty), Some(&T::String));
        assert_eq!(collection_element(&T::String), None);
    }

    // ========================================
    // Field eligibility
    // ========================================

    #[test]
    fn test_public_field_needs_no_marker() {
        assert!(is_field_eligible(&FieldMeta::new("speed", T::value("float"))));
    }

    #[test]
    fn test_non_public_field_needs_marker() {
        let hidden = FieldMeta::new("hp", T::value("int")).non_public();
        assert!(!is_field_eligible(&hidden));
        assert!(is_field_eligible(&hidden.with_attribute("SerializeField")));
    }

    #[test]
    fn test_non_serialized_wins_for_public_fields() {
        let field = FieldMeta::new("cache", T::value("int")).with_attribute("NonSerialized");
        assert!(!is_field_eligible(&field));
    }

    #[test]
    fn test_non_serialized_wins_over_serialize_field() {
        let field = FieldMeta::new("cache", T::value("int"))
            .non_public()
            .with_attribute("SerializeField")
            .with_attribute("System.NonSerialized");
        assert!(!is_field_eligible(&field));
    }

    #[test]
    fn test_marker_does_not_rescue_ineligible_type() {
        let field = FieldMeta::new("inventory", T::class("Inventory"))
            .non_public()
            .with_attribute("SerializeField");
        assert!(!is_field_eligible(&field));
    }

    // ========================================
    // classify
    // ========================================

    #[test]
    fn test_classify_preserves_declaration_order() {
        let fields = vec![
            FieldMeta::new("zeta", T::value("int")),
            FieldMeta::new("alpha", T::String),
            FieldMeta::new("inventory", T::class("Inventory")),
            FieldMeta::new("mid", T::enumeration("Mode")),
        ];
        assert_eq!(names(&classify(&fields)), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_classify_marks_collections() {
        let fields = vec![
            FieldMeta::new("targets", T::list_of(T::engine_object("Transform"))),
            FieldMeta::new("speed", T::value("float")),
        ];
        let out = classify(&fields);
        assert!(out[0].is_collection);
        assert!(!out[1].is_collection);
    }

    #[test]
    fn test_classify_skips_static_fields() {
        let fields = vec![
            FieldMeta::new("Instance", T::engine_object("GameManager")).static_field(),
            FieldMeta::new("score", T::value("int")),
        ];
        assert_eq!(names(&classify(&fields)), vec!["score"]);
    }

    #[test]
    fn test_classify_empty() {
        assert!(classify(&[]).is_empty());
    }

    #[test]
    fn test_classify_keeps_duplicate_names() {
        let fields = vec![FieldMeta::new("a", T::value("int")), FieldMeta::new("a", T::value("int"))];
        assert_eq!(classify(&fields).len(), 2);
    }
}
