//! tests/common/harness.rs
use std::sync::Once;
use std::time::{Duration, Instant};
use tcpclient::{
    config::Config,
    connection::Connection,
    tracker::ConnectionTracker,
};

/// Initializes tracing for tests, ensuring it's only done once.
pub fn init_tracing() {
    static TRACING_INIT: Once = Once::new();
    TRACING_INIT.call_once(|| {
        let filter = std::env::var("RUST_LOG")
            .unwrap_or_else(|_| "tcpclient=trace,lifecycle=info".to_string());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .init();
    });
}

/// The outcome a simulated dial should end with.
#[derive(Debug, Clone, Copy)]
pub enum DialOutcome {
    Established(Duration),
    EstablishedThenClosed(Duration),
    Errored(Duration),
    StillDialing,
}

/// Records one attempt the way a dialer would, against a fixed start instant.
pub fn simulate_dial(id: u64, outcome: DialOutcome, config: &Config) -> Connection {
    let start = Instant::now();
    let mut tracker = ConnectionTracker::new(id, config);
    tracker.start_dialing(start).unwrap();

    match outcome {
        DialOutcome::Established(after) => tracker.mark_established(start + after).unwrap(),
        DialOutcome::EstablishedThenClosed(after) => {
            tracker.mark_established(start + after).unwrap();
            tracker.mark_closed().unwrap();
        }
        DialOutcome::Errored(after) => tracker.mark_errored(start + after).unwrap(),
        DialOutcome::StillDialing => {}
    }

    tracker.into_connection()
}
