use std::{
    io,
    sync::{Arc, Mutex},
};

use midpoint_search::{BinarySearch, Mode, Termination, LOG_TARGET};
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt};

/// Writer handing formatted events to a buffer shared with the test.
#[derive(Clone, Default)]
struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

impl CaptureWriter {
    fn lines(&self) -> Vec<String> {
        let buf = self.0.lock().unwrap();
        String::from_utf8_lossy(&buf).lines().map(str::to_owned).collect()
    }
}

impl io::Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// Kept as the only test in this binary: the subscriber is scoped to the test thread and
// callsite interest is cached per process.
#[test]
fn search_logs_every_iteration_and_the_forever_loop() {
    let writer = CaptureWriter::default();
    let make_writer = writer.clone();

    let filter = filter::Targets::new().with_target(LOG_TARGET, tracing::Level::DEBUG);
    let _guard = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(move || make_writer.clone()),
        )
        .with(filter)
        .set_default();

    let seq: Vec<i64> = (1..=106).collect();
    let report = BinarySearch::with_default_width(Mode::OverflowProne).run(&seq, &100, seq.len());
    assert_eq!(report.termination, Termination::IterationCap { iterations: 106 });

    let lines = writer.lines();
    assert!(!lines.is_empty());
    assert!(lines.iter().all(|line| line.contains(LOG_TARGET)), "{lines:#?}");

    let iterations: Vec<_> = lines
        .iter()
        .filter(|line| line.contains("DEBUG") && line.contains("iteration="))
        .collect();
    assert_eq!(iterations.len(), report.trace.len());
    assert!(iterations[0].contains("iteration=1 low=0 high=105 mid=52"));
    assert!(iterations[1].contains("iteration=2 low=53 high=105 mid=-49"));

    let warnings: Vec<_> = lines.iter().filter(|line| line.contains("WARN")).collect();
    assert_eq!(warnings.len(), 1, "{warnings:#?}");
    assert!(warnings[0].contains("iteration cap reached"));
    assert!(warnings[0].contains("iterations=106"));

    // a search that stays in range logs no warning
    let before = writer.lines().len();
    let report = BinarySearch::with_default_width(Mode::OverflowSafe).run(&seq, &100, seq.len());
    assert_eq!(report.found(), Some(99));

    let lines = writer.lines();
    assert!(lines[before..].iter().all(|line| !line.contains("WARN")));
    assert_eq!(
        lines[before..].iter().filter(|line| line.contains("iteration=")).count(),
        4
    );
}
