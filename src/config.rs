//! 定义了连接状态跟踪的可配置参数。
//! Defines configurable parameters for connection state tracking.

/// How a tracker reacts to a lifecycle transition the state machine does not allow.
///
/// 跟踪器如何处理状态机不允许的生命周期转换。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPolicy {
    /// Return `Error::InvalidTransition` to the caller.
    /// 向调用者返回 `Error::InvalidTransition`。
    #[default]
    Reject,
    /// Log a warning and keep the current state.
    /// 记录警告并保持当前状态。
    Ignore,
}

/// A structure containing all configurable parameters for connection tracking.
///
/// 包含所有连接跟踪可配置参数的结构体。
#[derive(Debug, Clone)]
pub struct Config {
    /// The reaction to illegal transitions requested through a `ConnectionTracker`.
    /// 通过 `ConnectionTracker` 请求非法转换时的处理方式。
    pub transition_policy: TransitionPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            transition_policy: TransitionPolicy::Reject,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_rejects_invalid_transitions() {
        let config = Config::default();
        assert_eq!(config.transition_policy, TransitionPolicy::Reject);
        assert_eq!(TransitionPolicy::default(), TransitionPolicy::Reject);
    }
}
