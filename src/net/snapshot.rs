//! 注册表快照
//!
//! 可序列化的注册表视图，用于 `--json` 输出。

use serde::{Deserialize, Serialize};

use super::device::{Category, DeviceStatus};

/// 整个注册表的快照，类别按固定顺序排列
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventorySnapshot {
    pub categories: Vec<CategorySnapshot>,
}

impl InventorySnapshot {
    pub(crate) fn push(&mut self, category: Category, devices: Vec<DeviceSnapshot>) {
        self.categories.push(CategorySnapshot { category, devices });
    }

    pub fn device_count(&self) -> usize {
        self.categories.iter().map(|c| c.devices.len()).sum()
    }
}

/// 单个类别及其设备
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySnapshot {
    pub category: Category,
    #[serde(default)]
    pub devices: Vec<DeviceSnapshot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceSnapshot {
    pub name: String,
    pub ip_address: String,
    pub status: DeviceStatus,
    /// 已连接设备的地址（仅交换机）
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub connections: Vec<String>,
    /// 按转发顺序排列的路由（仅路由器）
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub routes: Vec<RouteSnapshot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteSnapshot {
    pub prefix: String,
    pub next_hop: String,
}
