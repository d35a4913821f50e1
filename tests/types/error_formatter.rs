use control_core_error::{ErrorBuilder, ErrorFormatConfig, ErrorValue};

fn sample() -> ErrorValue {
    let cause = ErrorValue::new("Sim", 3, "timed out");
    ErrorBuilder::new()
        .describe("failed to boot")
        .describe("simulator busy")
        .caused_by(cause)
        .in_domain("Boot")
        .code(7)
        .extra_info("udid", "A1")
        .no_logging()
        .build()
}

#[test]
fn default_formatting_joins_chain_with_arrows() {
    let output = sample().fmt().to_string();
    assert_eq!(output, "failed to boot -> simulator busy -> timed out (domain: Boot, code: 7)");
}

#[test]
fn custom_separator_without_code() {
    let output = format!("{}", sample().fmt().with_separator(" | ").show_code(false));
    assert_eq!(output, "failed to boot | simulator busy | timed out (domain: Boot)");
}

#[test]
fn non_recursive_rendering_stops_at_outer_error() {
    let output = sample().fmt().recursive(false).show_domain(false).show_code(false).to_string();
    assert_eq!(output, "failed to boot -> simulator busy");
}

#[test]
fn cascade_indents_each_cause_level() {
    let output = sample().fmt().cascade(true).show_domain(false).to_string();
    assert_eq!(output, "failed to boot\nsimulator busy\n  timed out (code: 7)");
}

#[test]
fn extra_info_inline_and_multiline() {
    let inline = sample().fmt().compact().show_extra(true).to_string();
    assert_eq!(inline, "failed to boot | simulator busy | timed out (domain: Boot, code: 7) {udid=A1}");

    let pretty = sample().fmt().pretty().to_string();
    assert!(pretty.ends_with("(domain: Boot, code: 7)\n  extra: udid=A1"));
}

#[test]
fn bare_config_renders_only_frames() {
    let output = ErrorFormatConfig::bare().render(&sample());
    assert_eq!(output, "failed to boot -> simulator busy -> timed out");
}

#[test]
fn empty_error_renders_suffix_only() {
    let err = ErrorBuilder::new().no_logging().build();
    assert_eq!(err.fmt().show_domain(false).to_string(), "(code: 0)");
}
