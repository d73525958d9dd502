//! 定义了单个连接尝试及其结果分类。
//! Defines a single connection attempt and the classification of its outcome.

pub mod metrics;
pub mod status;


pub use metrics::ConnectionMetrics;
pub(crate) use metrics::FormattedDuration;
pub use status::ConnectionStatus;

use crate::error::Result;
use std::fmt;
use std::time::Duration;
use tracing::trace;

/// A classification function over a connection, e.g. `Connection::went_ok`.
///
/// 连接分类函数，例如 `Connection::went_ok`。
pub type ConnectionPredicate = fn(&Connection) -> bool;

/// One attempted network connection: its id, where it is in the lifecycle,
/// and the time spent getting there.
///
/// 一次网络连接尝试：标识、所处的生命周期阶段以及所花费的时间。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    id: u64,
    status: ConnectionStatus,
    metrics: ConnectionMetrics,
}

impl Connection {
    /// Builds a connection with both recorded durations set to `proc_time`.
    ///
    /// No validation is done on `id` or `proc_time`. Use
    /// [`Connection::initiate`] and the transition methods to record the two
    /// durations independently.
    ///
    /// 创建一个连接，两个时长都设置为 `proc_time`。
    pub fn new(id: u64, status: ConnectionStatus, proc_time: Duration) -> Self {
        Self {
            id,
            status,
            metrics: ConnectionMetrics::uniform(proc_time),
        }
    }

    /// Creates a connection that has not been dialed yet.
    /// 创建一个尚未拨号的连接。
    pub fn initiate(id: u64) -> Self {
        Self::new(id, ConnectionStatus::NotInitiated, Duration::ZERO)
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// 获取当前状态
    /// Gets the current status.
    pub fn status(&self) -> ConnectionStatus {
        self.status
    }

    pub fn metrics(&self) -> &ConnectionMetrics {
        &self.metrics
    }

    /// Returns the time spent processing the connection: the establishment time
    /// if it went ok, the error time otherwise.
    ///
    /// 返回处理该连接所花费的时间。
    pub fn processing_duration(&self) -> Duration {
        if self.went_ok() {
            self.metrics.established_duration()
        } else {
            self.metrics.errored_duration()
        }
    }

    /// Checks whether the current status is one of `statuses`.
    pub fn is_status_in(&self, statuses: &[ConnectionStatus]) -> bool {
        self.status.is_in(statuses)
    }

    /// True when the connection is `Established` or `Closed`.
    pub fn went_ok(&self) -> bool {
        self.is_status_in(&[ConnectionStatus::Established, ConnectionStatus::Closed])
    }

    /// True when the connection is `Established`.
    pub fn is_ok(&self) -> bool {
        self.is_status_in(&[ConnectionStatus::Established])
    }

    /// True when the connection is in the `Error` state.
    pub fn with_error(&self) -> bool {
        self.is_status_in(&[ConnectionStatus::Error])
    }

    /// True when the connection is `NotInitiated` or `Dialing`.
    pub fn pending_to_process(&self) -> bool {
        self.is_status_in(&[ConnectionStatus::NotInitiated, ConnectionStatus::Dialing])
    }

    /// 尝试转换到新状态
    /// Attempts to move the connection to `next`.
    ///
    /// Only forward lifecycle edges are accepted. On an illegal edge the
    /// connection is left untouched and `Error::InvalidTransition` is returned.
    pub fn transition_to(&mut self, next: ConnectionStatus) -> Result<()> {
        self.status.check_transition(next)?;
        let old_status = self.status;
        self.status = next;
        trace!(
            id = self.id,
            ?old_status,
            new_status = ?self.status,
            "Connection status transition successful"
        );
        Ok(())
    }

    /// `NotInitiated -> Dialing`.
    pub fn start_dialing(&mut self) -> Result<()> {
        self.transition_to(ConnectionStatus::Dialing)
    }

    /// `Dialing -> Established`, recording the time it took.
    /// 处理连接建立
    pub fn establish(&mut self, elapsed: Duration) -> Result<()> {
        self.transition_to(ConnectionStatus::Established)?;
        self.metrics.set_established_duration(elapsed);
        Ok(())
    }

    /// `Dialing -> Error`, recording the time until the failure.
    pub fn fail(&mut self, elapsed: Duration) -> Result<()> {
        self.transition_to(ConnectionStatus::Error)?;
        self.metrics.set_errored_duration(elapsed);
        Ok(())
    }

    /// `Established -> Closed`.
    pub fn close(&mut self) -> Result<()> {
        self.transition_to(ConnectionStatus::Closed)
    }
}

impl Default for Connection {
    fn default() -> Self {
        Self::initiate(0)
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            ConnectionStatus::Established => write!(
                f,
                "Connection {} has become {} after {}",
                self.id,
                self.status,
                FormattedDuration(self.metrics.established_duration())
            ),
            _ => write!(f, "Connection {} is {}", self.id, self.status),
        }
    }
}
