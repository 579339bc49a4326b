//! 文本文件持久化
//!
//! 两个相互独立的文件：
//! - 设备文件：只追加，每行 `Category,Name,Address`
//! - 连接文件：保存时整体重写，每行 `SwitchName,SwitchAddress,DeviceName,DeviceAddress`
//!
//! 字段之间用逗号分隔，不做转义。字段数不对或不是合法 UTF-8 的行直接跳过。
//! 每次操作都在函数内部打开并关闭文件。

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::InventoryError;
use crate::net::{Category, Registry};
use tracing::{debug, info, trace};

pub const DEFAULT_DEVICES_FILE: &str = "devices.txt";
pub const DEFAULT_CONNECTIONS_FILE: &str = "connections.txt";

/// 单个文件的加载统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    /// 成功处理的行数
    pub loaded: usize,
    /// 字段数不对、或引用的交换机不存在而被跳过的行数
    pub skipped: usize,
    /// 加载连接时临时补建的普通设备数
    pub fabricated: usize,
}

/// 两个持久化文件的位置
#[derive(Debug, Clone)]
pub struct Store {
    devices_path: PathBuf,
    connections_path: PathBuf,
}

impl Default for Store {
    fn default() -> Self {
        Self::new(DEFAULT_DEVICES_FILE, DEFAULT_CONNECTIONS_FILE)
    }
}

impl Store {
    pub fn new(devices_path: impl Into<PathBuf>, connections_path: impl Into<PathBuf>) -> Self {
        Self {
            devices_path: devices_path.into(),
            connections_path: connections_path.into(),
        }
    }

    pub fn devices_path(&self) -> &Path {
        &self.devices_path
    }

    pub fn connections_path(&self) -> &Path {
        &self.connections_path
    }

    /// 向设备文件追加一行
    #[tracing::instrument(skip(self), fields(path = %self.devices_path.display()))]
    pub fn append_device(&self, kind: &str, name: &str, ip_address: &str) -> Result<(), InventoryError> {
        let path = &self.devices_path;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| InventoryError::io(path, e))?;
        writeln!(file, "{},{},{}", capitalize(kind), name, ip_address)
            .map_err(|e| InventoryError::io(path, e))?;
        debug!("💾 设备已写入文件");
        Ok(())
    }

    /// 读取设备文件并逐行添加到注册表（不会再次写回文件）
    #[tracing::instrument(skip(self, registry), fields(path = %self.devices_path.display()))]
    pub fn load_devices(&self, registry: &mut Registry) -> Result<LoadReport, InventoryError> {
        let mut report = LoadReport::default();
        let Some(lines) = read_lines(&self.devices_path)? else {
            debug!("设备文件不存在，跳过");
            return Ok(report);
        };

        for line in lines {
            let Some(line) = line else {
                trace!("跳过非 UTF-8 的行");
                report.skipped += 1;
                continue;
            };
            let parts: Vec<&str> = line.trim().split(',').collect();
            let &[kind, name, ip_address] = parts.as_slice() else {
                trace!(line = %line, "跳过格式错误的行");
                report.skipped += 1;
                continue;
            };
            registry.add_device(kind, name, ip_address);
            report.loaded += 1;
        }

        info!(loaded = report.loaded, skipped = report.skipped, "📂 设备文件加载完成");
        Ok(report)
    }

    /// 重写连接文件：遍历所有交换机及其连接
    #[tracing::instrument(skip(self, registry), fields(path = %self.connections_path.display()))]
    pub fn save_connections(&self, registry: &Registry) -> Result<usize, InventoryError> {
        let path = &self.connections_path;
        let file = File::create(path).map_err(|e| InventoryError::io(path, e))?;
        let mut out = BufWriter::new(file);
        let mut written = 0usize;

        for switch in registry.bucket(Category::Switch) {
            let peers = registry.connections(switch.id())?;
            for peer in peers {
                writeln!(
                    out,
                    "{},{},{},{}",
                    switch.name(),
                    switch.ip_address(),
                    peer.name(),
                    peer.ip_address()
                )
                .map_err(|e| InventoryError::io(path, e))?;
                written += 1;
            }
        }
        out.flush().map_err(|e| InventoryError::io(path, e))?;

        info!(written, "💾 连接文件已保存");
        Ok(written)
    }

    /// 读取连接文件，按地址把每一行解析回注册表中的设备并建立连接
    #[tracing::instrument(skip(self, registry), fields(path = %self.connections_path.display()))]
    pub fn load_connections(&self, registry: &mut Registry) -> Result<LoadReport, InventoryError> {
        let mut report = LoadReport::default();
        let Some(lines) = read_lines(&self.connections_path)? else {
            debug!("连接文件不存在，跳过");
            return Ok(report);
        };

        for line in lines {
            let Some(line) = line else {
                trace!("跳过非 UTF-8 的行");
                report.skipped += 1;
                continue;
            };
            let parts: Vec<&str> = line.trim().split(',').collect();
            let &[_switch_name, switch_ip, device_name, device_ip] = parts.as_slice() else {
                trace!(line = %line, "跳过格式错误的行");
                report.skipped += 1;
                continue;
            };

            let switch = registry
                .find_by_address(switch_ip)
                .filter(|id| registry.device(*id).is_some_and(|d| d.as_switch().is_some()));
            let Some(switch) = switch else {
                trace!(switch_ip, "交换机不存在或不是交换机，跳过");
                report.skipped += 1;
                continue;
            };

            let peer = match registry.find_by_address(device_ip) {
                Some(id) => id,
                None => {
                    debug!(device_name, device_ip, "补建未注册的对端设备");
                    report.fabricated += 1;
                    registry.insert(Category::Other, device_name, device_ip)
                }
            };

            registry.connect(switch, peer)?;
            report.loaded += 1;
        }

        info!(
            loaded = report.loaded,
            skipped = report.skipped,
            fabricated = report.fabricated,
            "📂 连接文件加载完成"
        );
        Ok(report)
    }
}

/// 读取全部行；文件不存在时返回 `None`。不是合法 UTF-8 的行记为 `None`。
fn read_lines(path: &Path) -> Result<Option<Vec<Option<String>>>, InventoryError> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(InventoryError::io(path, e)),
    };
    let lines = BufReader::new(file)
        .split(b'\n')
        .map(|raw| raw.map(|bytes| String::from_utf8(bytes).ok()))
        .collect::<io::Result<Vec<_>>>()
        .map_err(|e| InventoryError::io(path, e))?;
    Ok(Some(lines))
}

/// 首字母大写，其余小写（`"FIREWALL"` -> `"Firewall"`）
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
