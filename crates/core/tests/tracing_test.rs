//! Integration tests for the `tracing` feature.
//!
//! These tests verify that:
//! - Each misuse of an extraction emits exactly one debug event
//! - Correct extractions, `throw_error` and building faults emit nothing
//! - The event never carries the failure payload

#![cfg(feature = "tracing")]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::io;
use std::sync::{Arc, Mutex};

use outcome_core::{InvalidUnwrap, Outcome};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Leaked(&'static str);

impl std::fmt::Display for Leaked {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// In-memory sink for formatted events.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn lines(&self) -> Vec<String> {
        let bytes = self.0.lock().unwrap().clone();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with a DEBUG subscriber and return every line it logged.
fn capture(f: impl FnOnce()) -> Vec<String> {
    let sink = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(sink.clone())
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .without_time()
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    sink.lines()
}

/// # GIVEN
/// A failure
///
/// # WHEN
/// `unwrap` is called on it
///
/// # THEN
/// One event naming the operation is emitted, without the failure payload
#[test]
fn test_unwrap_on_failure_emits_one_event() {
    let lines = capture(|| {
        let result = Outcome::<i32, Leaked>::err(Leaked("secret-payload")).unwrap();
        assert_eq!(result, Err(InvalidUnwrap::unwrap_on_failure("secret-payload")));
    });

    assert_eq!(lines.len(), 1, "expected one event, got {lines:?}");
    let line = lines.first().unwrap();
    assert!(line.contains("DEBUG"));
    assert!(line.contains("outcome_core"));
    assert!(line.contains("operation=\"unwrap\""));
    assert!(!line.contains("secret-payload"));
}

#[test]
fn test_unwrap_error_on_success_emits_one_event() {
    let lines = capture(|| {
        assert!(Outcome::<i32, Leaked>::ok(1).unwrap_error().is_err());
    });

    assert_eq!(lines.len(), 1, "expected one event, got {lines:?}");
    assert!(lines.first().unwrap().contains("operation=\"unwrap_error\""));
}

/// # GIVEN
/// Extractions on the matching variant, `throw_error`, and faults built directly
///
/// # WHEN
/// They run under a subscriber
///
/// # THEN
/// Nothing is logged
#[test]
fn test_correct_use_is_silent() {
    let lines = capture(|| {
        assert_eq!(Outcome::<i32, Leaked>::ok(1).unwrap(), Ok(1));
        assert_eq!(
            Outcome::<i32, Leaked>::err(Leaked("kept")).unwrap_error(),
            Ok(Leaked("kept"))
        );
        assert_eq!(Outcome::<i32, Leaked>::ok(1).throw_error(), Ok(()));
        assert_eq!(
            Outcome::<i32, Leaked>::err(Leaked("kept")).throw_error(),
            Err(Leaked("kept"))
        );
        let _built = InvalidUnwrap::unwrap_on_failure("only comparing");
        let _also_built = InvalidUnwrap::unwrap_error_on_success();
    });

    assert!(lines.is_empty(), "expected no events, got {lines:?}");
}
