// Integration tests for knnspec
use knnspec::prelude::*;
use knnspec::{ParameterValue, SchemaError};
use std::io::Write;
use std::sync::Arc;

fn method() -> KnnMethod {
    hnsw_method(&KnnSettings::default()).unwrap()
}

#[test]
fn test_end_to_end_flat() {
    let method = method();
    let ctx = MethodComponentContext::new("hnsw")
        .with_parameter("m", 32)
        .with_parameter("encoder", MethodComponentContext::new("flat"));

    let values = method.validate(&ctx).unwrap();
    let description = method.compile(&values);

    assert!(description.starts_with("HNSW"));
    assert!(description.contains("32"));
    assert!(!description.contains(','));
    assert_eq!(description, "HNSW32");
}

#[test]
fn test_empty_context_uses_every_default() {
    let method = method();
    let values = method.validate(&MethodComponentContext::default()).unwrap();

    assert_eq!(values.get("m").and_then(|v| v.as_integer()), Some(16));
    assert_eq!(values.get("ef_construction").and_then(|v| v.as_integer()), Some(100));
    assert_eq!(values.get("ef_search").and_then(|v| v.as_integer()), Some(100));
    assert_eq!(
        values.get("encoder").and_then(|v| v.as_component()).map(|e| e.name()),
        Some("flat")
    );
}

#[test]
fn test_compile_is_deterministic() {
    let method = method();
    let ctx = MethodComponentContext::new("hnsw")
        .with_parameter("m", 12)
        .with_parameter("encoder", MethodComponentContext::new("sq").with_parameter("clip", true));

    let values = method.validate(&ctx).unwrap();
    let first = method.compile(&values);
    let second = method.compile(&values);
    assert_eq!(first, second);

    // A freshly built method given the same input agrees byte for byte
    let rebuilt = hnsw_method(&KnnSettings::default()).unwrap();
    let again = rebuilt.compile(&rebuilt.validate(&ctx).unwrap());
    assert_eq!(first, again);
    assert_eq!(first, "HNSW12,SQfp16");
}

#[test]
fn test_unknown_encoder_and_parameter() {
    let method = method();

    let lsh = MethodComponentContext::new("hnsw")
        .with_parameter("encoder", MethodComponentContext::new("lsh"));
    assert!(matches!(
        method.validate(&lsh),
        Err(ValidationError::UnknownAlternative { ref name, .. }) if name == "lsh"
    ));

    let nlist = MethodComponentContext::new("hnsw").with_parameter("nlist", 16);
    assert!(matches!(
        method.validate(&nlist),
        Err(ValidationError::UnknownParameter { ref name }) if name == "nlist"
    ));
}

#[test]
fn test_rejects_non_positive_values() {
    let method = method();
    for name in ["m", "ef_construction", "ef_search"] {
        let zero = MethodComponentContext::new("hnsw").with_parameter(name, 0);
        let negative = MethodComponentContext::new("hnsw").with_parameter(name, -8);
        assert!(method.validate(&zero).is_err());
        assert!(method.validate(&negative).is_err());

        let one = MethodComponentContext::new("hnsw").with_parameter(name, 1);
        assert!(method.validate(&one).is_ok());
    }

    let as_string = MethodComponentContext::new("hnsw").with_parameter("m", "16");
    assert_eq!(
        method.validate(&as_string).unwrap_err(),
        ValidationError::InvalidParameterValue {
            parameter: "m".to_string(),
            value: ParameterValue::String("16".to_string()),
        }
    );
}

#[test]
fn test_supported_spaces_are_fixed() {
    let method = method();
    let first: Vec<_> = method.supported_spaces().to_vec();
    let second: Vec<_> = method.supported_spaces().to_vec();

    assert_eq!(first.len(), 4);
    assert_eq!(first, second);
    for space in ["undefined", "hamming", "l2", "innerproduct"] {
        assert!(method.is_space_supported(space.parse().unwrap()));
    }
    assert!(!method.is_space_supported(SpaceType::CosineSimilarity));
}

#[test]
fn test_method_document_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "name": "hnsw",
            "space_type": "innerproduct",
            "parameters": {{
                "m": 64,
                "ef_construction": 256,
                "encoder": {{ "name": "sq", "parameters": {{ "type": "bf16" }} }}
            }}
        }}"#
    )
    .unwrap();

    let document = MethodDocument::from_path(file.path()).unwrap();
    let compiled = compile_document(&method(), &document).unwrap();

    assert_eq!(compiled.space_type, SpaceType::InnerProduct);
    assert_eq!(compiled.index_description, "HNSW64,SQbf16");
    assert!(!compiled.training_required);
    assert_eq!(
        compiled.method,
        serde_json::json!({
            "name": "hnsw",
            "index_description": "HNSW64,SQbf16",
            "parameters": {
                "ef_construction": 256,
                "ef_search": 100,
                "encoder": { "name": "sq", "parameters": { "clip": false } }
            }
        })
    );
}

#[test]
fn test_missing_document_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = MethodDocument::from_path(dir.path().join("method.json"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_settings_file_feeds_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"algo_param_m": 8, "algo_param_ef_search": 32}}"#).unwrap();

    let settings = KnnSettings::from_path(file.path()).unwrap();
    let method = hnsw_method(&settings).unwrap();
    let values = method.validate(&MethodComponentContext::new("hnsw")).unwrap();

    assert_eq!(method.compile(&values), "HNSW8");
    assert_eq!(values.get("ef_search").and_then(|v| v.as_integer()), Some(32));
    assert_eq!(values.get("ef_construction").and_then(|v| v.as_integer()), Some(100));
}

#[test]
fn test_invalid_settings_fail_at_construction() {
    let settings = KnnSettings {
        algo_param_ef_search: -1,
        ..KnnSettings::default()
    };
    assert!(matches!(
        hnsw_method(&settings),
        Err(SchemaError::InvalidDefault { ref parameter }) if parameter == "ef_search"
    ));
}

#[test]
fn test_concurrent_validate_and_compile() {
    let method = Arc::new(method());

    let handles: Vec<_> = (1..=8)
        .map(|m| {
            let method = Arc::clone(&method);
            std::thread::spawn(move || {
                let ctx = MethodComponentContext::new("hnsw")
                    .with_parameter("m", m)
                    .with_parameter("encoder", MethodComponentContext::new("pq").with_parameter("m", m));
                let values = method.validate(&ctx).unwrap();
                method.compile(&values)
            })
        })
        .collect();

    for (m, handle) in (1..=8).zip(handles) {
        assert_eq!(handle.join().unwrap(), format!("HNSW{},PQ{}x8", m, m));
    }
}
