//! 定义了库中所有可能的错误类型。
//! Defines all possible error types in the library.

use crate::connection::ConnectionStatus;
use thiserror::Error;

/// The primary error type for the connection state library.
/// 连接状态库的主要错误类型。
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A lifecycle transition was requested along an edge the state machine
    /// does not allow, e.g. `Closed -> Established`.
    ///
    /// 请求了状态机不允许的生命周期转换，例如 `Closed -> Established`。
    #[error("invalid connection status transition from {from} to {to}")]
    InvalidTransition {
        from: ConnectionStatus,
        to: ConnectionStatus,
    },

    /// A raw status ordinal outside the defined variants.
    /// 超出已定义变体范围的原始状态序号。
    #[error("unknown connection status value: {0}")]
    UnknownStatus(u8),
}

/// A specialized `Result` type for this library.
/// 本库专用的 `Result` 类型。
pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for std::io::Error {
    fn from(err: Error) -> Self {
        use std::io::ErrorKind;
        match err {
            Error::InvalidTransition { .. } => std::io::Error::new(ErrorKind::InvalidInput, err),
            Error::UnknownStatus(_) => std::io::Error::new(ErrorKind::InvalidData, err),
        }
    }
}
