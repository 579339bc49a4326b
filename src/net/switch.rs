//! 交换机
//!
//! 交换机只记录已连接设备的标识符，设备本身始终由注册表持有。

use super::id::DeviceId;

/// `Switch::connect` 的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectOutcome {
    Connected,
    AlreadyConnected,
}

/// 交换机附加状态
#[derive(Debug, Clone, Default)]
pub struct Switch {
    /// 按连接顺序排列，不含重复
    connected_devices: Vec<DeviceId>,
}

impl Switch {
    /// 连接一个设备；已连接时保持不变
    pub fn connect(&mut self, peer: DeviceId) -> ConnectOutcome {
        if self.connected_devices.contains(&peer) {
            ConnectOutcome::AlreadyConnected
        } else {
            self.connected_devices.push(peer);
            ConnectOutcome::Connected
        }
    }

    pub fn connections(&self) -> &[DeviceId] {
        &self.connected_devices
    }

    pub fn is_connected(&self, peer: DeviceId) -> bool {
        self.connected_devices.contains(&peer)
    }
}
