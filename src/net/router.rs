//! 路由器

use super::routing::RoutingTable;
use crate::error::InventoryError;
use tracing::{debug, trace};

/// 路由器附加状态
#[derive(Debug, Clone, Default)]
pub struct Router {
    routing_table: RoutingTable,
}

impl Router {
    /// 添加路由（同一前缀后写覆盖先写）
    pub fn add_route(&mut self, network_prefix: impl Into<String>, next_hop: impl Into<String>) {
        self.routing_table.insert(network_prefix, next_hop);
    }

    /// 为目的地址选择下一跳
    pub fn forward(&self, destination: &str) -> Result<&str, InventoryError> {
        trace!(destination, routes = self.routing_table.len(), "查找路由");
        match self.routing_table.lookup(destination) {
            Some((prefix, next_hop)) => {
                debug!(destination, prefix, next_hop, "📦 命中路由");
                Ok(next_hop)
            }
            None => Err(InventoryError::NoRoute {
                destination: destination.to_string(),
            }),
        }
    }

    pub fn routing_table(&self) -> &RoutingTable {
        &self.routing_table
    }
}
