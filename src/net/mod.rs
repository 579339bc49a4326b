//! 网络设备模块
//!
//! 此模块包含设备清单的核心组件，如设备、交换机、路由器和设备注册表。

// 子模块声明
mod id;
mod device;
mod switch;
mod routing;
mod router;
mod snapshot;
mod registry;

// 重新导出公共接口
pub use id::DeviceId;
pub use device::{Category, Device, DeviceKind, DeviceStatus};
pub use switch::{ConnectOutcome, Switch};
pub use routing::RoutingTable;
pub use router::Router;
pub use snapshot::{CategorySnapshot, DeviceSnapshot, InventorySnapshot, RouteSnapshot};
pub use registry::Registry;
