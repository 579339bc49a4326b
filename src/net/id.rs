//! 标识符类型
//!
//! 定义设备在注册表中的唯一标识符。

/// 设备标识符（注册表内部数组下标）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeviceId(pub usize);
