#![no_main]

use inspectorgen::merge_into_existing;
use libfuzzer_sys::fuzz_target;

const GENERATED: &str = "using UnityEditor;\n\npublic class AEditor : Editor\n{\n}\n";

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(existing) = std::str::from_utf8(data) {
        let (merged, _) = merge_into_existing(existing, GENERATED, "UNITY_EDITOR");
        assert!(merged.ends_with(GENERATED));
        assert!(merged.len() > existing.len());
    }
});
