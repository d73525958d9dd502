//! 连接跟踪器 - 负责记录连接尝试的状态转换和耗时
//! Connection Tracker - Records the status transitions and timing of a connection attempt


use crate::config::{Config, TransitionPolicy};
use crate::connection::{Connection, ConnectionStatus};
use crate::error::{Error, Result};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// 连接跟踪器，负责驱动连接状态的转换并测量各阶段的耗时
/// Drives a connection through its lifecycle and measures how long each outcome took.
///
/// Times are supplied by the caller so that the dialer decides which clock to use.
#[derive(Debug, Clone)]
pub struct ConnectionTracker {
    /// 被跟踪的连接
    /// The tracked connection
    connection: Connection,
    /// 拨号开始的时间
    /// When dialing started
    dial_started_at: Option<Instant>,
    policy: TransitionPolicy,
}

impl ConnectionTracker {
    /// 创建新的连接跟踪器
    /// Creates a tracker for a connection that has not been dialed yet
    pub fn new(id: u64, config: &Config) -> Self {
        Self {
            connection: Connection::initiate(id),
            dial_started_at: None,
            policy: config.transition_policy,
        }
    }

    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    pub fn status(&self) -> ConnectionStatus {
        self.connection.status()
    }

    /// Consumes the tracker, handing the recorded connection to the caller.
    pub fn into_connection(self) -> Connection {
        self.connection
    }

    /// 处理拨号开始
    /// Handles the start of dialing
    pub fn start_dialing(&mut self, now: Instant) -> Result<()> {
        let result = self.connection.start_dialing();
        if result.is_ok() {
            self.dial_started_at = Some(now);
            debug!(id = self.connection.id(), "Dialing started");
        }
        self.apply_policy(result)
    }

    /// 处理连接建立
    /// Handles connection establishment
    pub fn mark_established(&mut self, now: Instant) -> Result<()> {
        let elapsed = self.elapsed_since_dial(now);
        let result = self.connection.establish(elapsed);
        if result.is_ok() {
            info!(id = self.connection.id(), ?elapsed, "Connection established");
        }
        self.apply_policy(result)
    }

    /// 处理连接失败
    /// Handles a failed attempt
    pub fn mark_errored(&mut self, now: Instant) -> Result<()> {
        let elapsed = self.elapsed_since_dial(now);
        let result = self.connection.fail(elapsed);
        if result.is_ok() {
            info!(id = self.connection.id(), ?elapsed, "Connection attempt errored");
        }
        self.apply_policy(result)
    }

    /// 处理连接关闭
    /// Handles a normal close of an established connection
    pub fn mark_closed(&mut self) -> Result<()> {
        let result = self.connection.close();
        if result.is_ok() {
            debug!(id = self.connection.id(), "Connection closed");
        }
        self.apply_policy(result)
    }

    fn elapsed_since_dial(&self, now: Instant) -> Duration {
        self.dial_started_at
            .map_or(Duration::ZERO, |started| now.saturating_duration_since(started))
    }

    fn apply_policy(&self, result: Result<()>) -> Result<()> {
        match result {
            Err(Error::InvalidTransition { from, to }) => {
                warn!(
                    id = self.connection.id(),
                    current_status = ?from,
                    attempted_status = ?to,
                    policy = ?self.policy,
                    "Invalid status transition attempted"
                );
                match self.policy {
                    TransitionPolicy::Reject => Err(Error::InvalidTransition { from, to }),
                    TransitionPolicy::Ignore => Ok(()),
                }
            }
            other => other,
        }
    }
}
