//! 设备注册表
//!
//! 注册表持有全部设备，按类别分桶，并提供按地址查找。它是“有哪些设备存在”
//! 的唯一来源：交换机与路由器只通过 `DeviceId` 引用注册表中的设备。

use super::device::{Category, Device};
use super::id::DeviceId;
use super::snapshot::{DeviceSnapshot, InventorySnapshot, RouteSnapshot};
use super::switch::ConnectOutcome;
use crate::error::InventoryError;
use tracing::{debug, info, trace};

/// 设备注册表
#[derive(Debug, Default)]
pub struct Registry {
    devices: Vec<Device>,
    /// 按 `Category::index` 排列，桶内保持插入顺序
    buckets: [Vec<DeviceId>; 3],
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加设备。不检查地址唯一性：同一地址添加两次会得到两个设备。
    #[tracing::instrument(skip(self))]
    pub fn add_device(&mut self, kind: &str, name: &str, ip_address: &str) -> DeviceId {
        let category = Category::from_kind(kind);
        self.insert(category, name, ip_address)
    }

    /// 直接按类别插入设备
    pub(crate) fn insert(&mut self, category: Category, name: &str, ip_address: &str) -> DeviceId {
        let id = DeviceId(self.devices.len());
        self.devices
            .push(Device::new(id, category, name, ip_address));
        self.buckets[category.index()].push(id);
        info!(id = ?id, %category, name, ip_address, "➕ 设备已添加");
        id
    }

    /// 按固定类别顺序列出所有设备，空类别也会出现
    pub fn list_all(&self) -> Vec<(Category, Vec<&Device>)> {
        Category::ALL
            .iter()
            .map(|&c| (c, self.bucket(c).collect()))
            .collect()
    }

    /// 某个类别下的设备（插入顺序）
    pub fn bucket(&self, category: Category) -> impl Iterator<Item = &Device> {
        self.buckets[category.index()]
            .iter()
            .map(|id| &self.devices[id.0])
    }

    /// 按 Switch、Router、Other 的顺序扫描，返回第一个地址完全相同的设备
    pub fn find_by_address(&self, ip_address: &str) -> Option<DeviceId> {
        let found = Category::ALL
            .iter()
            .flat_map(|&c| self.buckets[c.index()].iter())
            .copied()
            .find(|id| self.devices[id.0].ip_address() == ip_address);
        trace!(ip_address, found = ?found, "按地址查找设备");
        found
    }

    pub fn device(&self, id: DeviceId) -> Option<&Device> {
        self.devices.get(id.0)
    }

    pub fn device_mut(&mut self, id: DeviceId) -> Option<&mut Device> {
        self.devices.get_mut(id.0)
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// 在交换机上记录一条到 `peer` 的连接
    #[tracing::instrument(skip(self))]
    pub fn connect(
        &mut self,
        switch: DeviceId,
        peer: DeviceId,
    ) -> Result<ConnectOutcome, InventoryError> {
        let peer_addr = self
            .device(peer)
            .map(|d| d.ip_address().to_string())
            .ok_or_else(|| InventoryError::DeviceNotFound {
                address: format!("{peer:?}"),
            })?;
        let dev = self
            .devices
            .get_mut(switch.0)
            .ok_or_else(|| InventoryError::DeviceNotFound {
                address: format!("{switch:?}"),
            })?;
        let addr = dev.ip_address().to_string();
        let sw = dev
            .as_switch_mut()
            .ok_or(InventoryError::NotASwitch { address: addr })?;
        let outcome = sw.connect(peer);
        debug!(outcome = ?outcome, peer_addr = %peer_addr, "🔌 交换机连接");
        Ok(outcome)
    }

    /// 交换机的已连接设备（连接顺序）
    pub fn connections(&self, switch: DeviceId) -> Result<Vec<&Device>, InventoryError> {
        let dev = self
            .device(switch)
            .ok_or_else(|| InventoryError::DeviceNotFound {
                address: format!("{switch:?}"),
            })?;
        let sw = dev.as_switch().ok_or_else(|| InventoryError::NotASwitch {
            address: dev.ip_address().to_string(),
        })?;
        Ok(sw
            .connections()
            .iter()
            .filter_map(|id| self.device(*id))
            .collect())
    }

    /// 生成可序列化的注册表视图
    pub fn snapshot(&self) -> InventorySnapshot {
        let mut snap = InventorySnapshot::default();
        for (category, devices) in self.list_all() {
            let entries = devices
                .into_iter()
                .map(|d| DeviceSnapshot {
                    name: d.name().to_string(),
                    ip_address: d.ip_address().to_string(),
                    status: d.status(),
                    connections: d
                        .as_switch()
                        .map(|sw| {
                            sw.connections()
                                .iter()
                                .filter_map(|id| self.device(*id))
                                .map(|p| p.ip_address().to_string())
                                .collect()
                        })
                        .unwrap_or_default(),
                    routes: d
                        .as_router()
                        .map(|r| {
                            r.routing_table()
                                .iter()
                                .map(|(prefix, next_hop)| RouteSnapshot {
                                    prefix: prefix.to_string(),
                                    next_hop: next_hop.to_string(),
                                })
                                .collect()
                        })
                        .unwrap_or_default(),
                })
                .collect();
            snap.push(category, entries);
        }
        snap
    }
}
