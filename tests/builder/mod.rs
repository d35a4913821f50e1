use control_core_error::{
    describe, BuilderConfig, ErrorBuilder, ErrorValue, InfoValue, DEFAULT_CODE, DEFAULT_DOMAIN,
};

mod constructors;

fn quiet() -> ErrorBuilder {
    ErrorBuilder::new().no_logging()
}

fn timeout() -> ErrorValue {
    ErrorValue::new("Sim", 3, "timed out waiting for launchd")
}

#[test]
fn descriptions_appear_in_call_order() {
    let err = quiet().describe("first").describe("second").describe("third").build();

    assert_eq!(err.message(), "first\nsecond\nthird");
    assert_eq!(err.descriptions(), ["first", "second", "third"]);
}

#[test]
fn describe_format_renders_then_appends() {
    let count = 2;
    let err = describe!(quiet().describe("booting"), "{count} simulators busy").build();

    assert_eq!(err.message(), "booting\n2 simulators busy");
}

#[test]
fn none_cause_is_a_no_op() {
    let cause = timeout();
    let err = quiet().caused_by(&cause).caused_by(None::<ErrorValue>).build();

    assert_eq!(err.cause(), Some(&cause));
}

#[test]
fn later_cause_replaces_earlier_one() {
    let first = ErrorValue::new("a", 1, "first cause");
    let second = ErrorValue::new("b", 2, "second cause");
    let err = quiet().caused_by(first).caused_by(second.clone()).build();

    assert_eq!(err.cause(), Some(&second));
    assert_eq!(err.message(), "second cause");
}

#[test]
fn recursive_message_includes_cause_chain() {
    let inner = quiet().describe("launchd unreachable").build();
    let middle = quiet().describe("timed out").caused_by(inner).build();
    let err = quiet().describe("failed to boot").caused_by(middle).build();

    assert_eq!(err.message(), "failed to boot\ntimed out\nlaunchd unreachable");
}

#[test]
fn non_recursive_message_has_only_outer_descriptions() {
    let err = quiet().describe("failed to boot").caused_by(timeout()).no_recursive_description().build();

    assert_eq!(err.message(), "failed to boot");
    assert!(err.cause().is_some());
}

#[test]
fn recursive_flag_is_last_write_wins() {
    let err = quiet()
        .describe("outer")
        .caused_by(timeout())
        .no_recursive_description()
        .recursive_description()
        .build();

    assert!(err.message().ends_with("timed out waiting for launchd"));
}

#[test]
fn extra_info_last_write_wins_per_key() {
    let err = quiet().extra_info("udid", "A1").extra_info("pid", 42).extra_info("udid", "B2").build();

    assert_eq!(err.extra_info().get("udid"), Some(&InfoValue::from("B2")));
    assert_eq!(err.extra_info().get("pid"), Some(&InfoValue::Int(42)));
    assert_eq!(err.extra_info().len(), 2);
}

#[test]
fn domain_and_code_overrides() {
    let err = quiet().in_domain("X").code(5).build();
    assert_eq!(err.domain(), "X");
    assert_eq!(err.code(), 5);

    let err = quiet().in_domain("X").in_domain("Y").code(5).code(9).build();
    assert_eq!(err.domain(), "Y");
    assert_eq!(err.code(), 9);
}

#[test]
fn runtime_built_domains_are_accepted_by_reference() {
    let domain = format!("com.sim.{}", "boot");

    let err = quiet().in_domain(&domain).build();
    assert_eq!(err.domain(), "com.sim.boot");

    let config = BuilderConfig::quiet().with_domain(domain.as_str());
    let err = ErrorBuilder::with_config(config).describe("x").build();
    assert_eq!(err.domain(), domain);
}

#[test]
fn unset_domain_and_code_take_defaults() {
    let err = quiet().describe("plain").build();

    assert_eq!(err.domain(), DEFAULT_DOMAIN);
    assert_eq!(err.code(), DEFAULT_CODE);
}

#[test]
fn configuration_order_does_not_matter() {
    let a = quiet().code(7).describe("x").in_domain("Sim").extra_info("k", true).build();
    let b = quiet().extra_info("k", true).in_domain("Sim").describe("x").code(7).build();

    assert_eq!(a, b);
}

#[test]
fn config_presets_shape_the_message() {
    let single = ErrorBuilder::with_config(BuilderConfig::single_line().with_domain("Sim"))
        .no_logging()
        .describe("a")
        .caused_by(timeout())
        .build();
    assert_eq!(single.message(), "a | timed out waiting for launchd");
    assert_eq!(single.domain(), "Sim");

    let flat = ErrorBuilder::with_config(BuilderConfig::flat())
        .no_logging()
        .describe("a")
        .caused_by(timeout())
        .build();
    assert_eq!(flat.message(), "a");
}

#[test]
fn builder_exposes_state_before_termination() {
    let builder = quiet().describe("inspect").in_domain("Sim").code(4).caused_by(timeout());

    assert_eq!(builder.descriptions(), ["inspect"]);
    assert_eq!(builder.domain(), "Sim");
    assert_eq!(builder.error_code(), 4);
    assert_eq!(builder.cause(), Some(&timeout()));
}

#[test]
fn io_error_cause_is_converted() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "socket missing");
    let err = quiet().describe("connecting").caused_by(io).build();

    let cause = err.cause().unwrap();
    assert_eq!(cause.domain(), "std::io");
    assert_eq!(err.message(), "connecting\nsocket missing");
}
