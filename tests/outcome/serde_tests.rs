use outcome_rail::Outcome;

#[test]
fn serializes_externally_tagged() {
    let ok: Outcome<i32, String> = Outcome::success(42);
    assert_eq!(serde_json::to_string(&ok).unwrap(), r#"{"Success":42}"#);

    let err: Outcome<i32, String> = Outcome::failure("boom".to_string());
    assert_eq!(serde_json::to_string(&err).unwrap(), r#"{"Failure":"boom"}"#);
}

#[test]
fn deserializes_both_states() {
    let ok: Outcome<Vec<u8>, String> = serde_json::from_str(r#"{"Success":[1,2]}"#).unwrap();
    assert_eq!(ok, Outcome::Success(vec![1, 2]));

    let err: Outcome<Vec<u8>, String> = serde_json::from_str(r#"{"Failure":"bad"}"#).unwrap();
    assert!(err.is_failure());
}
