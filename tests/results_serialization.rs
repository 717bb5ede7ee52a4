// Copyright 2025 Cowboy AI, LLC.

use hexaglue_classifier::{
    ClassificationConfig, FieldDescriptor, InMemoryApplicationGraph, SinglePassDriver, TypeKind,
    TypeNode,
};

#[test]
fn results_round_trip_through_json() {
    let order = TypeNode::new("com.example.Order", TypeKind::Class)
        .with_fields([FieldDescriptor::new("id", "java.lang.String")]);
    let graph = InMemoryApplicationGraph::new(vec![order.clone()]);
    let config = ClassificationConfig::default();
    let results = SinglePassDriver::default().classify(&graph, &config);
    let original = results.get(&order.id()).unwrap();

    let json = serde_json::to_string(original).expect("classification result must serialize");
    let restored: hexaglue_classifier::ClassificationResult =
        serde_json::from_str(&json).expect("classification result must deserialize");

    assert_eq!(restored, *original);
    assert!(json.contains("\"kind_name\""));
}
