//! 设备类型
//!
//! 定义设备基础字段、设备类别以及按类别区分的附加状态（交换机、路由器、普通设备）。

use std::fmt;

use serde::{Deserialize, Serialize};

use super::id::DeviceId;
use super::router::Router;
use super::switch::Switch;

/// 设备类别（注册表分桶依据）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Switch,
    Router,
    Other,
}

impl Category {
    /// 固定的展示与查找顺序
    pub const ALL: [Category; 3] = [Category::Switch, Category::Router, Category::Other];

    /// 根据请求的设备类型字符串选择类别（大小写不敏感，未识别的归入 Other）
    pub fn from_kind(kind: &str) -> Self {
        if kind.eq_ignore_ascii_case("switch") {
            Category::Switch
        } else if kind.eq_ignore_ascii_case("router") {
            Category::Router
        } else {
            Category::Other
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Switch => "Switch",
            Category::Router => "Router",
            Category::Other => "Other",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            Category::Switch => "Switches",
            Category::Router => "Routers",
            Category::Other => "Others",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Category::Switch => 0,
            Category::Router => 1,
            Category::Other => 2,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 设备状态。目前只有 active，创建后不会变化。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceStatus {
    #[default]
    Active,
}

impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceStatus::Active => f.write_str("active"),
        }
    }
}

/// 按类别区分的附加状态
#[derive(Debug, Clone)]
pub enum DeviceKind {
    Switch(Switch),
    Router(Router),
    Generic,
}

impl DeviceKind {
    pub fn category(&self) -> Category {
        match self {
            DeviceKind::Switch(_) => Category::Switch,
            DeviceKind::Router(_) => Category::Router,
            DeviceKind::Generic => Category::Other,
        }
    }
}

/// 设备
#[derive(Debug, Clone)]
pub struct Device {
    id: DeviceId,
    name: String,
    ip_address: String,
    status: DeviceStatus,
    kind: DeviceKind,
}

impl Device {
    /// 创建指定类别的新设备
    pub fn new(
        id: DeviceId,
        category: Category,
        name: impl Into<String>,
        ip_address: impl Into<String>,
    ) -> Self {
        let kind = match category {
            Category::Switch => DeviceKind::Switch(Switch::default()),
            Category::Router => DeviceKind::Router(Router::default()),
            Category::Other => DeviceKind::Generic,
        };
        Self {
            id,
            name: name.into(),
            ip_address: ip_address.into(),
            status: DeviceStatus::Active,
            kind,
        }
    }

    pub fn id(&self) -> DeviceId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ip_address(&self) -> &str {
        &self.ip_address
    }

    pub fn status(&self) -> DeviceStatus {
        self.status
    }

    pub fn kind(&self) -> &DeviceKind {
        &self.kind
    }

    pub fn category(&self) -> Category {
        self.kind.category()
    }

    pub fn as_switch(&self) -> Option<&Switch> {
        match &self.kind {
            DeviceKind::Switch(sw) => Some(sw),
            _ => None,
        }
    }

    pub fn as_switch_mut(&mut self) -> Option<&mut Switch> {
        match &mut self.kind {
            DeviceKind::Switch(sw) => Some(sw),
            _ => None,
        }
    }

    pub fn as_router(&self) -> Option<&Router> {
        match &self.kind {
            DeviceKind::Router(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_router_mut(&mut self) -> Option<&mut Router> {
        match &mut self.kind {
            DeviceKind::Router(r) => Some(r),
            _ => None,
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.ip_address)
    }
}
