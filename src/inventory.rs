//! 设备清单
//!
//! 把注册表与持久化文件组合在一起，实现同时涉及两者的操作。
//! 加载只在显式调用 `load` 时发生，保存只在调用 `save` 时发生。

use crate::error::InventoryError;
use crate::net::{ConnectOutcome, DeviceId, Registry};
use crate::store::{LoadReport, Store};
use tracing::{debug, info};

/// 添加设备时是否写入设备文件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persist {
    Yes,
    No,
}

/// `Inventory::load` 的结果
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub devices: LoadReport,
    pub connections: LoadReport,
}

#[derive(Debug, Default)]
pub struct Inventory {
    registry: Registry,
    store: Store,
}

impl Inventory {
    pub fn new(store: Store) -> Self {
        Self {
            registry: Registry::new(),
            store,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// 添加设备，并按需追加到设备文件
    pub fn add_device(
        &mut self,
        kind: &str,
        name: &str,
        ip_address: &str,
        persist: Persist,
    ) -> Result<DeviceId, InventoryError> {
        let id = self.registry.add_device(kind, name, ip_address);
        if persist == Persist::Yes {
            self.store.append_device(kind, name, ip_address)?;
        }
        Ok(id)
    }

    /// 依次加载设备文件与连接文件
    pub fn load(&mut self) -> Result<LoadSummary, InventoryError> {
        let devices = self.store.load_devices(&mut self.registry)?;
        let connections = self.store.load_connections(&mut self.registry)?;
        info!(
            devices = devices.loaded,
            connections = connections.loaded,
            "📂 加载完成"
        );
        Ok(LoadSummary {
            devices,
            connections,
        })
    }

    /// 重写连接文件
    pub fn save(&self) -> Result<usize, InventoryError> {
        self.store.save_connections(&self.registry)
    }

    /// 按地址连接两个设备，第一个必须是交换机。出错时不修改任何连接。
    pub fn connect_by_address(
        &mut self,
        switch_ip: &str,
        peer_ip: &str,
    ) -> Result<ConnectOutcome, InventoryError> {
        let switch = self.resolve(switch_ip)?;
        let peer = self.resolve(peer_ip)?;
        self.registry.connect(switch, peer)
    }

    /// 给指定地址的路由器添加路由
    pub fn add_route(
        &mut self,
        router_ip: &str,
        prefix: &str,
        next_hop: &str,
    ) -> Result<(), InventoryError> {
        let id = self.resolve(router_ip)?;
        let router = self
            .registry
            .device_mut(id)
            .and_then(|d| d.as_router_mut())
            .ok_or_else(|| InventoryError::NotARouter {
                address: router_ip.to_string(),
            })?;
        router.add_route(prefix, next_hop);
        debug!(router_ip, prefix, next_hop, "添加路由");
        Ok(())
    }

    /// 通过指定地址的路由器转发，返回下一跳
    pub fn forward(&self, router_ip: &str, destination: &str) -> Result<String, InventoryError> {
        let id = self.resolve(router_ip)?;
        let router = self
            .registry
            .device(id)
            .and_then(|d| d.as_router())
            .ok_or_else(|| InventoryError::NotARouter {
                address: router_ip.to_string(),
            })?;
        router.forward(destination).map(str::to_string)
    }

    fn resolve(&self, ip_address: &str) -> Result<DeviceId, InventoryError> {
        self.registry
            .find_by_address(ip_address)
            .ok_or_else(|| InventoryError::DeviceNotFound {
                address: ip_address.to_string(),
            })
    }
}
