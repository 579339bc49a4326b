//! 错误类型
//!
//! 库内所有可区分的失败情形，都通过 `InventoryError` 返回给调用方。

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("device not found: {address}")]
    DeviceNotFound { address: String },

    #[error("device {address} is not a switch")]
    NotASwitch { address: String },

    #[error("device {address} is not a router")]
    NotARouter { address: String },

    #[error("no route found for {destination}")]
    NoRoute { destination: String },

    #[error("invalid menu option: {0:?}")]
    InvalidMenuOption(String),

    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("terminal i/o error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl InventoryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// 是否为只需提示用户、可以继续交互的错误
    pub fn is_advisory(&self) -> bool {
        !matches!(self, Self::Io { .. } | Self::Terminal(_))
    }
}
