//! Property-based tests for inspectorgen
//!
//! These tests use proptest to verify merge and generation invariants across many
//! randomly generated inputs, catching edge cases that hand-written tests might miss.

use inspectorgen::output::{guarded_import, has_editor_import};
use inspectorgen::{
    EditorGenerator, FieldDescriptor, FieldMeta, GenerationRequest, TypeDescriptor, TypeRef, merge_into_existing,
};
use proptest::prelude::*;

const GUARD: &str = "UNITY_EDITOR";

fn source_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("using UnityEngine;".to_string()),
        Just("using UnityEditor;".to_string()),
        Just("namespace Game".to_string()),
        Just("public class A : MonoBehaviour".to_string()),
        Just("internal struct B".to_string()),
        Just("{".to_string()),
        Just("}".to_string()),
        Just(String::new()),
        "[ \t]{0,2}[a-z ;]{0,12}",
    ]
}

fn existing_file() -> impl Strategy<Value = String> {
    prop::collection::vec(source_line(), 0..12).prop_map(|lines| lines.join("\n"))
}

fn request() -> impl Strategy<Value = GenerationRequest> {
    let fields = prop::collection::vec(("[a-z][a-zA-Z0-9]{0,8}", any::<bool>()), 0..6);
    ("[A-Z][a-zA-Z]{0,8}", "([A-Z][a-z]{0,5}(\\.[A-Z][a-z]{0,5})?)?", fields, any::<bool>()).prop_map(
        |(name, namespace, fields, target)| {
            let fields = fields
                .into_iter()
                .map(|(n, collection)| {
                    let ty = if collection {
                        TypeDescriptor::list_of(TypeDescriptor::value("int"))
                    } else {
                        TypeDescriptor::value("int")
                    };
                    FieldDescriptor::describe(&FieldMeta::new(n, ty))
                })
                .collect();
            GenerationRequest::new(TypeRef::new(name, namespace), fields, target)
        },
    )
}

proptest! {
    /// Property: the merged file always ends with the generated text, after exactly one separator newline.
    #[test]
    fn merge_appends_generated_text(existing in existing_file(), generated in "[a-z\n]{0,40}") {
        let (merged, inserted) = merge_into_existing(&existing, &generated, GUARD);
        let prefix_len = merged.len() - generated.len() - 1;
        prop_assert!(merged.ends_with(&generated));
        prop_assert_eq!(&merged[prefix_len..prefix_len + 1], "\n");

        let head = &merged[..prefix_len];
        if inserted {
            prop_assert_eq!(head.replacen(&guarded_import(GUARD), "", 1), existing);
        } else {
            prop_assert_eq!(head, existing.as_str());
        }
    }

    /// Property: an import is inserted only when none is present, and only once.
    #[test]
    fn merge_inserts_import_at_most_once(existing in existing_file()) {
        let lines: Vec<String> = existing.split('\n').map(str::to_string).collect();
        let already = has_editor_import(&lines);
        let (merged, inserted) = merge_into_existing(&existing, "", GUARD);
        prop_assert!(!(already && inserted));
        prop_assert_eq!(
            merged.matches("#if UNITY_EDITOR").count(),
            existing.matches("#if UNITY_EDITOR").count() + usize::from(inserted)
        );
    }

    /// Property: generated editors always have balanced braces and the script handle.
    #[test]
    fn generated_editor_is_well_formed(request in request()) {
        let text = EditorGenerator::new().generate(&request);
        prop_assert_eq!(text.matches('{').count(), text.matches('}').count());
        prop_assert!(text.starts_with("using UnityEditor;\n"));
        prop_assert!(text.contains("private SerializedProperty _script;"));
        prop_assert_eq!(
            text.contains("base.OnInspectorGUI();"),
            request.selected_fields.is_empty()
        );
    }

    /// Property: generation is a pure function of the request.
    #[test]
    fn generation_is_deterministic(request in request()) {
        let generator = EditorGenerator::new();
        prop_assert_eq!(generator.generate(&request), generator.generate(&request));
    }
}
