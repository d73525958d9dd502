//! Aggregate statistics over finished connection attempts.
//! 已完成连接尝试的汇总统计。

use crate::connection::{Connection, ConnectionPredicate, FormattedDuration};
use std::fmt;
use std::time::Duration;

/// Counts the connections for which `predicate` holds.
///
/// ```
/// use tcpclient::connection::{Connection, ConnectionStatus};
/// use tcpclient::stats::count_matching;
/// use std::time::Duration;
///
/// let conns = [
///     Connection::new(1, ConnectionStatus::Established, Duration::from_millis(10)),
///     Connection::new(2, ConnectionStatus::Error, Duration::from_millis(20)),
/// ];
/// assert_eq!(count_matching(&conns, Connection::with_error), 1);
/// ```
pub fn count_matching<'a, I>(connections: I, predicate: ConnectionPredicate) -> usize
where
    I: IntoIterator<Item = &'a Connection>,
{
    connections.into_iter().filter(|c| predicate(c)).count()
}

/// Classification totals and processing-time figures for a batch of attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConnectionStats {
    pub total: usize,
    pub pending: usize,
    pub established: usize,
    pub closed: usize,
    pub errored: usize,
    /// Fastest processing duration among attempts that went ok.
    pub min: Option<Duration>,
    /// Slowest processing duration among attempts that went ok.
    pub max: Option<Duration>,
    /// Mean processing duration among attempts that went ok.
    pub average: Option<Duration>,
}

impl ConnectionStats {
    pub fn collect<'a, I>(connections: I) -> Self
    where
        I: IntoIterator<Item = &'a Connection>,
    {
        let mut stats = Self::default();
        let mut sum = Duration::ZERO;
        let mut successes: usize = 0;

        for conn in connections {
            stats.total += 1;
            if conn.pending_to_process() {
                stats.pending += 1;
            } else if conn.is_ok() {
                stats.established += 1;
            } else if conn.went_ok() {
                stats.closed += 1;
            } else if conn.with_error() {
                stats.errored += 1;
            }

            if conn.went_ok() {
                let d = conn.processing_duration();
                stats.min = Some(stats.min.map_or(d, |m| m.min(d)));
                stats.max = Some(stats.max.map_or(d, |m| m.max(d)));
                sum = sum.saturating_add(d);
                successes += 1;
            }
        }

        stats.average = mean(sum, successes);
        stats
    }

    /// Attempts that went ok, whether still established or already closed.
    pub fn succeeded(&self) -> usize {
        self.established + self.closed
    }

    /// Share of attempts that errored, in percent. Zero for an empty batch.
    pub fn error_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.errored as f64 * 100.0 / self.total as f64
    }
}

/// Exact integer mean of `count` durations adding up to `sum`; `None` when `count` is zero.
fn mean(sum: Duration, count: usize) -> Option<Duration> {
    if count == 0 {
        return None;
    }
    let nanos = sum.as_nanos() / count as u128;
    // The mean never exceeds `sum`, so the seconds fit in a u64.
    Some(Duration::new(
        (nanos / 1_000_000_000) as u64,
        (nanos % 1_000_000_000) as u32,
    ))
}

impl fmt::Display for ConnectionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Connection statistics:")?;
        writeln!(
            f,
            "    Attempts: Total = {}, Pending = {}, Established = {}, Closed = {}, Errored = {} ({:.0}% errored)",
            self.total,
            self.pending,
            self.established,
            self.closed,
            self.errored,
            self.error_rate()
        )?;
        match (self.min, self.max, self.average) {
            (Some(min), Some(max), Some(avg)) => writeln!(
                f,
                "    Processing time: Minimum = {}, Maximum = {}, Average = {}",
                FormattedDuration(min),
                FormattedDuration(max),
                FormattedDuration(avg)
            ),
            _ => writeln!(f, "    Processing time: N/A"),
        }
    }
}
