use bns_core::BnError;
use bns_net::{network_from_json, NetworkBuilder, VariableDef};

fn code_of(result: Result<bns_net::DiscreteNetwork, BnError>) -> String {
    match result {
        Ok(_) => panic!("expected the builder to reject the network"),
        Err(BnError::Network(info)) => info.code,
        Err(other) => panic!("unexpected error family: {other}"),
    }
}

#[test]
fn rejects_duplicate_variable() {
    let result = NetworkBuilder::new()
        .variable("a", &["t", "f"], &[], vec![vec![0.5, 0.5]])
        .variable("a", &["t", "f"], &[], vec![vec![0.5, 0.5]])
        .build();
    assert_eq!(code_of(result), "duplicate-variable");
}

#[test]
fn rejects_empty_states() {
    let result = NetworkBuilder::new()
        .variable("a", &[], &[], vec![vec![]])
        .build();
    assert_eq!(code_of(result), "empty-states");
}

#[test]
fn rejects_duplicate_state() {
    let result = NetworkBuilder::new()
        .variable("a", &["t", "t"], &[], vec![vec![0.5, 0.5]])
        .build();
    assert_eq!(code_of(result), "duplicate-state");
}

#[test]
fn rejects_unknown_parent() {
    let result = NetworkBuilder::new()
        .variable("a", &["t", "f"], &["ghost"], vec![vec![0.5, 0.5]])
        .build();
    assert_eq!(code_of(result), "unknown-parent");
}

#[test]
fn rejects_self_parent() {
    let result = NetworkBuilder::new()
        .variable("a", &["t", "f"], &["a"], vec![vec![0.5, 0.5], vec![0.5, 0.5]])
        .build();
    assert_eq!(code_of(result), "self-parent");
}

#[test]
fn rejects_wrong_row_count() {
    let result = NetworkBuilder::new()
        .variable("a", &["t", "f"], &[], vec![vec![0.5, 0.5]])
        .variable("b", &["t", "f"], &["a"], vec![vec![0.5, 0.5]])
        .build();
    assert_eq!(code_of(result), "row-count");
}

#[test]
fn rejects_wrong_row_width() {
    let result = NetworkBuilder::new()
        .variable("a", &["t", "f", "u"], &[], vec![vec![0.5, 0.5]])
        .build();
    assert_eq!(code_of(result), "row-width");
}

#[test]
fn rejects_negative_probability() {
    let result = NetworkBuilder::new()
        .variable("a", &["t", "f"], &[], vec![vec![1.5, -0.5]])
        .build();
    assert_eq!(code_of(result), "invalid-probability");
}

#[test]
fn rejects_unnormalized_row() {
    let result = NetworkBuilder::new()
        .variable("a", &["t", "f"], &[], vec![vec![0.5, 0.6]])
        .build();
    let err = result.unwrap_err();
    assert_eq!(err.info().code, "row-not-normalized");
    assert_eq!(err.info().context.get("row").map(String::as_str), Some("0"));
}

#[test]
fn rejects_cycle() {
    let result = NetworkBuilder::new()
        .variable("a", &["t", "f"], &["b"], vec![vec![0.5, 0.5], vec![0.5, 0.5]])
        .variable("b", &["t", "f"], &["a"], vec![vec![0.5, 0.5], vec![0.5, 0.5]])
        .build();
    let err = result.unwrap_err();
    assert_eq!(err.info().code, "cycle");
    assert_eq!(
        err.info().context.get("variables").map(String::as_str),
        Some("a,b")
    );
}

#[test]
fn tolerates_rounding_in_rows() {
    let result = NetworkBuilder::new()
        .variable("a", &["x", "y", "z"], &[], vec![vec![0.1, 0.2, 0.7000000001]])
        .build();
    assert!(result.is_ok());
}

#[test]
fn rejects_parent_configurations_overflowing_row_count() {
    let mut builder = NetworkBuilder::new();
    let parents: Vec<String> = (0..64).map(|i| format!("p{i}")).collect();
    for name in &parents {
        builder.push(VariableDef::new(name, &["t", "f"], &[], vec![vec![0.5, 0.5]]));
    }
    builder.push(VariableDef {
        name: "child".to_string(),
        states: vec!["t".to_string(), "f".to_string()],
        parents: parents.clone(),
        table: Vec::new(),
    });
    let err = builder.build().unwrap_err();
    assert!(matches!(err, BnError::Network(_)));
    assert_eq!(err.info().code, "row-count");
    assert_eq!(
        err.info().context.get("variable").map(String::as_str),
        Some("child")
    );
}

#[test]
fn overflowing_json_document_is_rejected() {
    let roots: Vec<String> = (0..64)
        .map(|i| format!(r#"{{"name":"p{i}","states":["t","f"],"table":[[0.5,0.5]]}}"#))
        .collect();
    let parents: Vec<String> = (0..64).map(|i| format!(r#""p{i}""#)).collect();
    let json = format!(
        r#"{{"variables":[{},{{"name":"child","states":["t","f"],"parents":[{}],"table":[]}}]}}"#,
        roots.join(","),
        parents.join(",")
    );
    let err = network_from_json(&json).unwrap_err();
    assert_eq!(err.info().code, "row-count");
}
