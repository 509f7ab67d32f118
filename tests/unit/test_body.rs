use rezen_client::model::team::Team;
use rezen_client::transport::Body;
use serde_json::{Value, json};

#[test]
fn test_classifies_object() {
    let body = Body::from_value(json!({"id": "t-1"}));
    assert!(matches!(body, Body::Object(_)));
}

#[test]
fn test_classifies_array() {
    let body = Body::from_value(json!([1, 2, 3]));
    match body {
        Body::Array(items) => assert_eq!(items.len(), 3),
        other => panic!("expected array, got {other:?}"),
    }
}

#[test]
fn test_classifies_scalars() {
    for value in [json!("id-string"), json!(42), json!(true), Value::Null] {
        assert!(matches!(Body::from_value(value), Body::Scalar(_)));
    }
}

#[test]
fn test_empty_is_empty_object() {
    let body = Body::empty();
    assert!(body.is_empty_object());
    assert_eq!(body.into_value(), json!({}));
}

#[test]
fn test_as_str_only_for_string_scalars() {
    assert_eq!(Body::from_value(json!("abc")).as_str(), Some("abc"));
    assert_eq!(Body::from_value(json!(5)).as_str(), None);
    assert_eq!(Body::from_value(json!({"a": 1})).as_str(), None);
}

#[test]
fn test_decode_into_typed_model() {
    let body = Body::from_value(json!({
        "id": "7c1d9f40-0000-4000-8000-000000000001",
        "name": "Alpha Team",
        "teamType": "NORMAL",
        "status": "ACTIVE",
        "createdAt": 1700000000000i64
    }));
    let team: Team = body.decode().expect("decodes");
    assert_eq!(team.name.as_deref(), Some("Alpha Team"));
    assert_eq!(team.created_at, Some(1700000000000));
}

#[test]
fn test_decode_mismatch_is_typed_error() {
    let body = Body::from_value(json!(["not", "a", "team"]));
    let error = body.decode::<Team>().unwrap_err();
    assert!(error.to_string().starts_with("deserialization error"));
}

#[test]
fn test_round_trips_into_value() {
    let original = json!({"nested": {"k": [1, 2]}});
    assert_eq!(Body::from_value(original.clone()).into_value(), original);
}
