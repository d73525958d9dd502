//! Timing record attached to a connection outcome.
//! 附加在连接结果上的计时记录。

use std::fmt;
use std::time::Duration;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Durations attributed to a connection attempt.
///
/// Only this crate builds one; callers read it through `Connection::metrics`.
///
/// ```compile_fail
/// let _ = tcpclient::ConnectionMetrics::default();
/// ```
// Packet loss and retransmission counters would live here too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionMetrics {
    established_duration: Duration,
    errored_duration: Duration,
}

impl ConnectionMetrics {
    /// Writes the same duration into both fields.
    pub(crate) fn uniform(proc_time: Duration) -> Self {
        Self {
            established_duration: proc_time,
            errored_duration: proc_time,
        }
    }

    pub(crate) fn set_established_duration(&mut self, elapsed: Duration) {
        self.established_duration = elapsed;
    }

    pub(crate) fn set_errored_duration(&mut self, elapsed: Duration) {
        self.errored_duration = elapsed;
    }

    /// Time spent until the connection became established.
    /// 连接建立所花费的时间。
    pub fn established_duration(&self) -> Duration {
        self.established_duration
    }

    /// Time spent until the attempt failed.
    /// 连接尝试失败所花费的时间。
    pub fn errored_duration(&self) -> Duration {
        self.errored_duration
    }
}

/// Renders a duration as `2h0m0s`, `1m30s`, `1.5s`, `150ms`, `1.5µs` or `0s`.
///
/// Below one second the largest fitting unit among `ms`, `µs` and `ns` is used;
/// from one second up the value is split into hours, minutes and fractional
/// seconds. Trailing zeros of the fraction are dropped.
///
/// 将时长渲染为 `1m30s`、`150ms` 等形式。
pub(crate) struct FormattedDuration(pub(crate) Duration);

impl fmt::Display for FormattedDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nanos = self.0.as_nanos();
        if nanos == 0 {
            return f.write_str("0s");
        }

        if nanos < NANOS_PER_SEC {
            let (prec, unit) = match nanos {
                n if n < 1_000 => (0, "ns"),
                n if n < 1_000_000 => (3, "µs"),
                _ => (6, "ms"),
            };
            let (int, frac) = split_fraction(nanos, prec);
            return write!(f, "{int}{frac}{unit}");
        }

        let (secs, frac) = split_fraction(nanos, 9);
        let (hours, minutes, seconds) = (secs / 3600, secs / 60 % 60, secs % 60);
        if hours > 0 {
            write!(f, "{hours}h{minutes}m")?;
        } else if minutes > 0 {
            write!(f, "{minutes}m")?;
        }
        write!(f, "{seconds}{frac}s")
    }
}

/// Splits `value` into its integer part and a `.ddd` fraction of at most
/// `prec` digits, empty when the fraction is zero.
fn split_fraction(value: u128, prec: u32) -> (u128, String) {
    let scale = 10u128.pow(prec);
    let int = value / scale;
    let mut frac = value % scale;
    if frac == 0 {
        return (int, String::new());
    }

    let mut digits = prec as usize;
    while frac % 10 == 0 {
        frac /= 10;
        digits -= 1;
    }
    (int, format!(".{frac:0digits$}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(d: Duration) -> String {
        FormattedDuration(d).to_string()
    }

    #[test]
    fn test_zero_renders_as_seconds() {
        assert_eq!(render(Duration::ZERO), "0s");
    }

    #[test]
    fn test_sub_second_units() {
        assert_eq!(render(Duration::from_nanos(1)), "1ns");
        assert_eq!(render(Duration::from_nanos(999)), "999ns");
        assert_eq!(render(Duration::from_nanos(1_500)), "1.5µs");
        assert_eq!(render(Duration::from_micros(250)), "250µs");
        assert_eq!(render(Duration::from_millis(150)), "150ms");
        assert_eq!(render(Duration::from_nanos(1_000_001)), "1.000001ms");
    }

    #[test]
    fn test_seconds_minutes_hours() {
        assert_eq!(render(Duration::from_millis(1_500)), "1.5s");
        assert_eq!(render(Duration::from_secs(1)), "1s");
        assert_eq!(render(Duration::from_secs(90)), "1m30s");
        assert_eq!(render(Duration::from_secs(7_200)), "2h0m0s");
        assert_eq!(render(Duration::new(3_661, 500_000_000)), "1h1m1.5s");
        assert_eq!(render(Duration::new(60, 1)), "1m0.000000001s");
    }
}
