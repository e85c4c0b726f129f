use restgen::generator::build_model;
use restgen::registry::ParamsRegistry;
use restgen::required::BODY_ARG;
use restgen::{parse_spec, GenError, HttpMethod};

const SPLIT_SPEC: &str = r#"{
    "indices.split": {
        "documentation": "https://example.com/indices-split-index.html",
        "url": {
            "paths": [
                {"path": "/{index}/_split/{target}", "methods": ["PUT"]}
            ]
        },
        "params": {"timeout": {}, "wait_for_active_shards": {}},
        "body": {"required": true}
    }
}"#;

#[test]
fn split_example_model() {
    let spec = parse_spec(SPLIT_SPEC).unwrap();
    let mut registry = ParamsRegistry::new();
    let model = build_model(&spec, &mut registry).unwrap();

    assert_eq!(model.fqn, "indices.split");
    assert_eq!(model.namespace, vec!["indices".to_string()]);
    assert_eq!(model.method_name, "split");
    assert_eq!(model.http_method, HttpMethod::Put);
    assert_eq!(model.canonical_template(), "/{index}/_split/{target}");
    assert_eq!(
        model.required.names(),
        &[
            "index".to_string(),
            "target".to_string(),
            BODY_ARG.to_string()
        ]
    );
    assert!(registry.get("indices.split").unwrap().contains("timeout"));
}

#[test]
fn zero_placeholder_endpoint_requires_nothing() {
    let spec = parse_spec(
        r#"{
            "cluster.health": {
                "methods": ["GET"],
                "url": {"paths": ["/_cluster/health"]},
                "params": ["level"]
            }
        }"#,
    )
    .unwrap();
    let mut registry = ParamsRegistry::new();
    let model = build_model(&spec, &mut registry).unwrap();
    assert!(model.required.is_empty());
    assert_eq!(model.canonical_template(), "/_cluster/health");
}

#[test]
fn intersection_across_alternatives() {
    let spec = parse_spec(
        r#"{
            "indices.stats": {
                "methods": ["GET"],
                "url": {"paths": ["/_stats/{metric}", "/{index}/_stats/{metric}"]}
            }
        }"#,
    )
    .unwrap();
    let mut registry = ParamsRegistry::new();
    let model = build_model(&spec, &mut registry).unwrap();
    // `metric` occurs in both alternatives, `index` only in the second.
    assert_eq!(model.required.names(), &["metric".to_string()]);
    // First alternative's parts are a superset of the required set.
    assert_eq!(model.canonical, 0);
    assert_eq!(model.canonical_template(), "/_stats/{metric}");
}

#[test]
fn canonical_skips_non_superset_alternative() {
    let spec = parse_spec(
        r#"{
            "scroll": {
                "methods": ["GET"],
                "url": {"paths": ["/_search/scroll", "/_search/scroll/{scroll_id}"]}
            }
        }"#,
    )
    .unwrap();
    let mut registry = ParamsRegistry::new();
    let model = build_model(&spec, &mut registry).unwrap();
    // Intersection is empty, so the first alternative already qualifies.
    assert!(model.required.is_empty());
    assert_eq!(model.canonical, 0);
}

#[test]
fn required_name_colliding_with_param_is_a_conflict() {
    let spec = parse_spec(
        r#"{
            "bad.endpoint": {
                "methods": ["GET"],
                "url": {"paths": ["/{timeout}/x"]},
                "params": ["timeout"]
            }
        }"#,
    )
    .unwrap();
    let mut registry = ParamsRegistry::new();
    let err = build_model(&spec, &mut registry).unwrap_err();
    assert!(matches!(err, GenError::SpecConflict { ref name, .. } if name == "timeout"));
    // The endpoint aborted before registering.
    assert!(registry.is_empty());
}

#[test]
fn same_leaf_different_namespaces_register_independently() {
    let cluster = parse_spec(
        r#"{"cluster.stats": {"methods": ["GET"], "url": {"paths": ["/_cluster/stats"]}}}"#,
    )
    .unwrap();
    let indices = parse_spec(
        r#"{"indices.stats": {"methods": ["GET"], "url": {"paths": ["/_stats"]}}}"#,
    )
    .unwrap();
    let mut registry = ParamsRegistry::new();
    build_model(&cluster, &mut registry).unwrap();
    build_model(&indices, &mut registry).unwrap();
    assert_eq!(registry.len(), 2);
}

#[test]
fn second_registration_of_same_fqn_fails() {
    let spec = parse_spec(
        r#"{"indices.stats": {"methods": ["GET"], "url": {"paths": ["/_stats"]}}}"#,
    )
    .unwrap();
    let mut registry = ParamsRegistry::new();
    build_model(&spec, &mut registry).unwrap();
    let err = build_model(&spec, &mut registry).unwrap_err();
    assert!(matches!(err, GenError::DuplicateRegistration { .. }));
}
