use std::sync::{Arc, Mutex};

use control_core_error::{BuilderConfig, ErrorBuilder, ErrorLogger, ErrorValue, NoopLogger};


/// Logger that keeps every message it receives.
#[derive(Default)]
pub struct RecordingLogger {
    messages: Mutex<Vec<String>>,
}

impl RecordingLogger {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl ErrorLogger for RecordingLogger {
    fn log(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_owned());
    }
}

#[test]
fn build_logs_rendered_message() {
    let sink = RecordingLogger::shared();
    let _ = ErrorBuilder::new()
        .describe("failed to boot")
        .caused_by(ErrorValue::new("Sim", 3, "timed out"))
        .with_logger(sink.clone())
        .build();

    assert_eq!(sink.messages(), ["failed to boot\ntimed out"]);
}

#[test]
fn no_logging_suppresses_custom_logger() {
    let sink = RecordingLogger::shared();
    let _ = ErrorBuilder::new().describe("expected").with_logger(sink.clone()).no_logging().build();

    assert!(sink.messages().is_empty());
}

#[test]
fn explicit_none_logger_suppresses_logging() {
    let sink = RecordingLogger::shared();
    let builder = ErrorBuilder::new().describe("quiet").with_logger(sink.clone()).logger(None);

    assert!(!builder.will_log());
    let _ = builder.build();
    assert!(sink.messages().is_empty());
}

#[test]
fn logger_can_be_swapped_back_in_after_none() {
    let sink = RecordingLogger::shared();
    let _ = ErrorBuilder::new()
        .describe("loud")
        .logger(None)
        .logger(Some(sink.clone() as Arc<dyn ErrorLogger>))
        .build();

    assert_eq!(sink.messages(), ["loud"]);
}

#[test]
fn every_build_call_logs_again() {
    let sink = RecordingLogger::shared();
    let builder = ErrorBuilder::new().describe("repeat").with_logger(sink.clone());

    let first = builder.build();
    let second = builder.build();

    assert_eq!(first, second);
    assert_eq!(sink.messages().len(), 2);
}

#[test]
fn into_error_follows_the_same_logging_switches_as_build() {
    let sink = RecordingLogger::shared();

    let _ = ErrorBuilder::new().describe("consumed").with_logger(sink.clone()).into_error();
    let _ = ErrorBuilder::new().describe("muted").with_logger(sink.clone()).no_logging().into_error();
    let _ = ErrorBuilder::new().describe("none").with_logger(sink.clone()).logger(None).into_error();

    assert_eq!(sink.messages(), ["consumed"]);
}

#[test]
fn fail_terminals_log_once() {
    let sink = RecordingLogger::shared();
    let _ = ErrorBuilder::new().describe("once").with_logger(sink.clone()).fail_uint();

    assert_eq!(sink.messages(), ["once"]);
}

#[test]
fn config_logger_and_quiet_preset() {
    let sink = RecordingLogger::shared();
    let config = BuilderConfig::default().with_logger(sink.clone());

    let _ = ErrorBuilder::with_config(config).describe("from config").build();
    let _ = ErrorBuilder::with_config(BuilderConfig::quiet()).describe("silent").build();

    assert_eq!(sink.messages(), ["from config"]);
}

#[test]
fn log_error_override_sees_structured_value() {
    #[derive(Default)]
    struct CodeLogger(Mutex<Vec<(String, i64)>>);

    impl ErrorLogger for CodeLogger {
        fn log(&self, _message: &str) {}

        fn log_error(&self, error: &ErrorValue) {
            self.0.lock().unwrap().push((error.domain().to_owned(), error.code()));
        }
    }

    let sink = Arc::new(CodeLogger::default());
    let _ = ErrorBuilder::new().in_domain("Sim").code(7).with_logger(sink.clone()).build();

    assert_eq!(sink.0.lock().unwrap().as_slice(), [("Sim".to_owned(), 7)]);
}

#[test]
fn noop_logger_accepts_everything() {
    let err = ErrorBuilder::new().describe("dropped").with_logger(NoopLogger).build();
    assert_eq!(err.message(), "dropped");
}
