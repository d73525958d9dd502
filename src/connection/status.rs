//! Defines the lifecycle status of a connection attempt.
//!
//! 定义连接尝试的生命周期状态。

use crate::error::{Error, Result};
use std::fmt;

/// The status of a connection attempt.
/// 连接尝试的状态。
///
/// Variants carry their ordinal value, starting at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum ConnectionStatus {
    /// Nothing has been sent yet.
    /// 尚未发起连接。
    #[default]
    NotInitiated = 0,

    /// The dial is in flight.
    /// 正在拨号。
    Dialing = 1,

    /// The connection is live and usable.
    /// 连接已建立，可以使用。
    Established = 2,

    /// The connection was live and has since ended normally.
    /// 连接曾经建立，之后正常结束。
    Closed = 3,

    /// The attempt failed terminally.
    /// 连接尝试最终失败。
    Error = 4,
}

impl ConnectionStatus {
    /// All variants, in ordinal order.
    pub const ALL: [ConnectionStatus; 5] = [
        ConnectionStatus::NotInitiated,
        ConnectionStatus::Dialing,
        ConnectionStatus::Established,
        ConnectionStatus::Closed,
        ConnectionStatus::Error,
    ];

    /// The ordinal value of the variant.
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// The human-readable label used when rendering a connection.
    /// 渲染连接时使用的可读标签。
    pub fn label(self) -> &'static str {
        match self {
            ConnectionStatus::NotInitiated => "not initiated",
            ConnectionStatus::Dialing => "dialing",
            ConnectionStatus::Established => "established",
            ConnectionStatus::Closed => "closed",
            ConnectionStatus::Error => "errored",
        }
    }

    /// Checks whether this status is a member of `statuses`.
    ///
    /// Every classification predicate on `Connection` is expressed through
    /// this single membership test.
    ///
    /// 检查该状态是否属于 `statuses`。
    pub fn is_in(self, statuses: &[ConnectionStatus]) -> bool {
        statuses.contains(&self)
    }

    /// Whether no further transition can leave this status.
    pub fn is_terminal(self) -> bool {
        self.is_in(&[ConnectionStatus::Closed, ConnectionStatus::Error])
    }

    /// 检查状态转换是否有效
    /// Checks if a transition from this status to `next` is a legal lifecycle edge.
    pub fn can_transition_to(self, next: ConnectionStatus) -> bool {
        if self.is_terminal() {
            return false;
        }
        matches!(
            (self, next),
            (ConnectionStatus::NotInitiated, ConnectionStatus::Dialing)
                | (ConnectionStatus::Dialing, ConnectionStatus::Established)
                | (ConnectionStatus::Dialing, ConnectionStatus::Error)
                | (ConnectionStatus::Established, ConnectionStatus::Closed)
        )
    }

    /// Validates the edge `self -> next`, returning the error the caller should surface.
    pub(crate) fn check_transition(self, next: ConnectionStatus) -> Result<()> {
        if self.can_transition_to(next) {
            Ok(())
        } else {
            Err(Error::InvalidTransition {
                from: self,
                to: next,
            })
        }
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<u8> for ConnectionStatus {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(ConnectionStatus::NotInitiated),
            1 => Ok(ConnectionStatus::Dialing),
            2 => Ok(ConnectionStatus::Established),
            3 => Ok(ConnectionStatus::Closed),
            4 => Ok(ConnectionStatus::Error),
            other => Err(Error::UnknownStatus(other)),
        }
    }
}

impl From<ConnectionStatus> for u8 {
    fn from(status: ConnectionStatus) -> Self {
        status.ordinal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_start_at_zero() {
        for (expected, status) in ConnectionStatus::ALL.iter().enumerate() {
            assert_eq!(status.ordinal() as usize, expected);
            assert_eq!(ConnectionStatus::try_from(status.ordinal()).unwrap(), *status);
        }
        assert_eq!(ConnectionStatus::default(), ConnectionStatus::NotInitiated);
    }

    #[test]
    fn test_unknown_ordinal_is_rejected() {
        assert_eq!(
            ConnectionStatus::try_from(5u8),
            Err(Error::UnknownStatus(5))
        );
        assert_eq!(
            ConnectionStatus::try_from(u8::MAX),
            Err(Error::UnknownStatus(u8::MAX))
        );
    }

    #[test]
    fn test_labels() {
        let labels: Vec<String> = ConnectionStatus::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(
            labels,
            ["not initiated", "dialing", "established", "closed", "errored"]
        );
    }

    #[test]
    fn test_only_forward_edges_are_legal() {
        let legal = [
            (ConnectionStatus::NotInitiated, ConnectionStatus::Dialing),
            (ConnectionStatus::Dialing, ConnectionStatus::Established),
            (ConnectionStatus::Dialing, ConnectionStatus::Error),
            (ConnectionStatus::Established, ConnectionStatus::Closed),
        ];

        for from in ConnectionStatus::ALL {
            for to in ConnectionStatus::ALL {
                let expected = legal.contains(&(from, to));
                assert_eq!(
                    from.can_transition_to(to),
                    expected,
                    "edge {:?} -> {:?}",
                    from,
                    to
                );
            }
        }
    }

    #[test]
    fn test_only_closed_and_error_are_terminal() {
        let terminal: Vec<ConnectionStatus> = ConnectionStatus::ALL
            .into_iter()
            .filter(|s| s.is_terminal())
            .collect();
        assert_eq!(terminal, [ConnectionStatus::Closed, ConnectionStatus::Error]);
    }

    #[test]
    fn test_terminal_statuses_have_no_outgoing_edges() {
        for from in ConnectionStatus::ALL.into_iter().filter(|s| s.is_terminal()) {
            assert!(ConnectionStatus::ALL.iter().all(|to| !from.can_transition_to(*to)));
        }
    }
}
