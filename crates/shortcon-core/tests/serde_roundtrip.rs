use serde_json::json;
use shortcon_core::ConError;

#[test]
fn error_round_trips_json() {
    let err = ConError::mutually_exclusive(&["KING".to_string()], &["QUEEN".to_string()]);
    let text = serde_json::to_string_pretty(&err).expect("serialize");
    let decoded: ConError = serde_json::from_str(&text).expect("deserialize");
    assert_eq!(decoded, err);
}

#[test]
fn error_is_tagged_by_family() {
    let value = serde_json::to_value(ConError::missing_key("PAWN")).unwrap();
    assert_eq!(value["family"], "MissingKey");
    assert_eq!(value["detail"]["code"], "missing-key");
    assert_eq!(value["detail"]["context"], json!({"key": "PAWN"}));
    assert!(value["detail"].get("hint").is_none());
}
