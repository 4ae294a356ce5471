//! Tests for the debug events emitted on empty folds.

#![cfg(feature = "arithmetic")]

use fpkit::arithmetic::{add, div, mult, pow, sub};
use fpkit::compose::{compose, pipe};
use rstest::rstest;
use std::io;
use std::sync::{Arc, Mutex, PoisonError};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct CapturedEvents(Arc<Mutex<Vec<u8>>>);

impl CapturedEvents {
    fn contents(&self) -> String {
        let buffer = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

impl io::Write for CapturedEvents {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedEvents {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture_debug_events(action: impl FnOnce()) -> String {
    let events = CapturedEvents::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(events.clone())
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, action);
    events.contents()
}

#[rstest]
#[case("add", || { let _ = add(Vec::<i32>::new()); })]
#[case("mult", || { let _ = mult(Vec::<i32>::new()); })]
#[case("sub", || { let _ = sub(Vec::<i32>::new()); })]
#[case("div", || { let _ = div(Vec::<i32>::new()); })]
#[case("pow", || { let _ = pow(Vec::<i32>::new()); })]
#[case("compose", || { let _ = compose::<i32>(Vec::new()); })]
#[case("pipe", || { let _ = pipe::<i32>(Vec::new()); })]
fn test_empty_fold_event_names_the_operation(
    #[case] operation: &str,
    #[case] action: fn(),
) {
    let output = capture_debug_events(action);
    assert!(
        output.contains(&format!("operation=\"{operation}\"")),
        "missing {operation} event in: {output}"
    );
}

#[test]
fn test_non_empty_fold_emits_no_empty_sequence_event() {
    let output = capture_debug_events(|| {
        let _ = add(vec![1, 2]);
    });
    assert!(!output.contains("fold over an empty sequence"));
}
