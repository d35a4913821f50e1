use std::collections::BTreeMap;

use control_core_error::{ErrorBuilder, ErrorValue, InfoValue, Rect};

#[test]
fn error_value_json_round_trip() {
    let cause = ErrorValue::new("Sim", 3, "timed out");
    let err = ErrorBuilder::new()
        .describe("failed to boot")
        .caused_by(cause)
        .in_domain("Boot")
        .code(-4)
        .extra_info("udid", "A1")
        .extra_info("retry", true)
        .extra_info("attempts", -2)
        .extra_info("load", 0.5)
        .extra_info("paths", vec!["/a", "/b"])
        .extra_info("env", BTreeMap::from([("HOME", "/tmp")]))
        .no_logging()
        .build();

    let json = serde_json::to_string(&err).unwrap();
    let back: ErrorValue = serde_json::from_str(&json).unwrap();

    assert_eq!(back, err);
    assert_eq!(back.cause().map(ErrorValue::domain), Some("Sim"));
    assert!(matches!(back.extra_info().get("paths"), Some(InfoValue::List(items)) if items.len() == 2));
}

#[test]
fn rect_serializes_as_plain_fields() {
    let json = serde_json::to_value(Rect::new(1.0, 2.0, 3.0, 4.0)).unwrap();
    assert_eq!(json, serde_json::json!({"x": 1.0, "y": 2.0, "width": 3.0, "height": 4.0}));
}
