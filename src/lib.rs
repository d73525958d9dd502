#![deny(clippy::expect_used, clippy::unwrap_used)]

//! Lifecycle state and timing metrics for outbound connection attempts.
//! 出站连接尝试的生命周期状态与计时指标。
//!
//! A dialer records each attempt as a [`Connection`], either by building the
//! final value directly or by driving a [`ConnectionTracker`] as the dial
//! progresses. Reporting code then classifies the outcome through the
//! predicates on `Connection` and aggregates batches with [`ConnectionStats`].

pub mod config;
pub mod connection;
pub mod error;
pub mod stats;
pub mod tracker;

pub use config::{Config, TransitionPolicy};
pub use connection::{Connection, ConnectionMetrics, ConnectionPredicate, ConnectionStatus};
pub use error::{Error, Result};
pub use stats::ConnectionStats;
pub use tracker::ConnectionTracker;
