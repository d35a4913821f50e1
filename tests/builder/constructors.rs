use control_core_error::traits::SentinelResultExt;
use control_core_error::{error_for_format, ErrorBuilder, ErrorValue, DEFAULT_DOMAIN};

fn cause() -> ErrorValue {
    ErrorValue::new("Sim", 3, "timed out")
}

#[test]
fn error_for_description_is_a_single_frame() {
    let err = ErrorBuilder::error_for_description("no booted simulator");

    assert_eq!(err.message(), "no booted simulator");
    assert_eq!(err.domain(), DEFAULT_DOMAIN);
    assert!(err.cause().is_none());
}

#[test]
fn error_for_format_renders_arguments() {
    let err = error_for_format!("{} of {} booted", 1, 4);
    assert_eq!(err.message(), "1 of 4 booted");

    let err = ErrorBuilder::error_for_format(format_args!("pid {}", 12));
    assert_eq!(err.message(), "pid 12");
}

#[test]
fn fail_bool_with_error_wraps_cause_in_default_domain() {
    let err = ErrorBuilder::fail_bool_with_error(cause()).unwrap_err();

    assert_eq!(err.domain(), DEFAULT_DOMAIN);
    assert_eq!(err.cause(), Some(&cause()));
    assert_eq!(err.message(), "timed out");
}

#[test]
fn fail_bool_with_error_described_adds_description() {
    let mut slot = None;
    let ok = ErrorBuilder::fail_bool_with_error_described(cause(), "shutting down").or_sentinel(&mut slot);

    assert!(!ok);
    let err = slot.unwrap();
    assert_eq!(err.message(), "shutting down\ntimed out");
    assert_eq!(err.cause(), Some(&cause()));
}

#[test]
fn fail_bool_with_error_message_has_no_cause() {
    let err = ErrorBuilder::fail_bool_with_error_message("bad state").unwrap_err();

    assert_eq!(err.message(), "bad state");
    assert!(err.cause().is_none());
}

#[test]
fn value_constructors_mirror_bool_ones() {
    let err = ErrorBuilder::fail_with_error_message::<String>("missing").unwrap_err();
    assert_eq!(err.message(), "missing");

    let err = ErrorBuilder::fail_with_error::<String, _>(cause()).unwrap_err();
    assert_eq!(err.cause(), Some(&cause()));

    let mut slot = None;
    let value = ErrorBuilder::fail_with_error_described::<u32, _>(&cause(), "reading plist")
        .or_sentinel(&mut slot);
    assert_eq!(value, None);
    assert_eq!(slot.unwrap().message(), "reading plist\ntimed out");
}

#[test]
fn pre_seeded_builders_stay_configurable() {
    let err = ErrorBuilder::from_description("outer").code(2).no_logging().build();
    assert_eq!((err.message(), err.code()), ("outer", 2));

    let err = ErrorBuilder::from_format(format_args!("device {}", "A1")).no_logging().build();
    assert_eq!(err.message(), "device A1");

    let err = ErrorBuilder::from_cause(None::<ErrorValue>).describe("no cause").no_logging().build();
    assert!(err.cause().is_none());
}
