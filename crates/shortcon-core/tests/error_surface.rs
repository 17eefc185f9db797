use serde_json::json;
use shortcon_core::errors::{
    ConError, ErrorInfo, ErrorKind, ERR_MULTIPLE, ERR_NONE, ERR_OVERFLOW, ERR_TYPE,
    ERR_UNREPRESENTABLE,
};

#[test]
fn mutually_exclusive_surface() {
    let err = ConError::mutually_exclusive(&["A B".to_string()], &["C".to_string()]);
    assert_eq!(err.code(), "mutually-exclusive-input");
    assert_eq!(err.kind(), ErrorKind::Type);
    assert_eq!(err.info().message, ERR_MULTIPLE);
    assert_eq!(err.info().context["names"], json!(["A B"]));
    assert_eq!(err.info().context["kws"], json!(["C"]));
}

#[test]
fn empty_surface() {
    let err = ConError::empty("");
    assert_eq!(err.code(), "empty-input");
    assert_eq!(err.kind(), ErrorKind::Value);
    assert_eq!(err.info().message, ERR_NONE);
}

#[test]
fn unsupported_surface() {
    let err = ConError::unsupported(123);
    assert_eq!(err.kind(), ErrorKind::Type);
    assert_eq!(err.info().message, ERR_TYPE);
    assert_eq!(err.info().context_value("attrs"), Some(&json!(123)));
}

#[test]
fn unknown_strategy_surface() {
    let err = ConError::unknown_strategy("fubb");
    assert_eq!(err.kind(), ErrorKind::Value);
    assert!(err.info().message.contains("fubb"));
    assert!(err.info().hint.is_some());
}

#[test]
fn missing_key_surface() {
    let err = ConError::missing_key("PAWN");
    assert_eq!(err.kind(), ErrorKind::Key);
    assert_eq!(err.info().context["key"], "PAWN");
}

#[test]
fn name_surfaces() {
    assert_eq!(ConError::invalid_name("1x", 0).kind(), ErrorKind::Value);
    let err = ConError::duplicate_name("A", 3);
    assert_eq!(err.kind(), ErrorKind::Value);
    assert_eq!(err.info().context["index"], 3);
}

#[test]
fn shadowed_surface() {
    let err = ConError::shadowed("keys");
    assert_eq!(err.kind(), ErrorKind::Type);
    assert_eq!(err.code(), "operation-shadowed");
}

#[test]
fn overflow_surface() {
    let err = ConError::enumeration_overflow(i64::MAX, 1, 1);
    assert_eq!(err.code(), "enumeration-overflow");
    assert_eq!(err.kind(), ErrorKind::Value);
    assert_eq!(err.info().message, ERR_OVERFLOW);
    assert_eq!(err.info().context["start"], json!(i64::MAX));
    assert_eq!(err.info().context["step"], 1);
    assert_eq!(err.info().context["index"], 1);
}

#[test]
fn unrepresentable_surface() {
    let err = ConError::unrepresentable("enum", "alloc::string::String", 3);
    assert_eq!(err.kind(), ErrorKind::Type);
    assert_eq!(err.info().message, ERR_UNREPRESENTABLE);
    assert_eq!(err.info().context["strategy"], "enum");
    assert_eq!(err.info().context["value"], 3);
    assert!(err.info().hint.is_some());
}

#[test]
fn display_lists_context_and_hint() {
    let info = ErrorInfo::new("X001", "broken")
        .with_context("b", 2)
        .with_context("a", "one")
        .with_hint("try again");
    assert_eq!(
        info.to_string(),
        r#"broken (code: X001) | context: [a="one", b=2] | hint: try again"#
    );
    let err = ConError::EmptyInput(info);
    assert!(err.to_string().starts_with("empty input: broken"));
}
