//! 交互式菜单
//!
//! 读取编号选项，检查前置条件，调用 `Inventory` 的操作并输出可读的结果。
//! 输入输出被抽象为 `BufRead` / `Write`，便于测试时用内存缓冲驱动。

use std::io::{self, BufRead, Write};

use crate::error::InventoryError;
use crate::inventory::{Inventory, Persist};
use crate::net::{Category, ConnectOutcome};
use crate::store::capitalize;
use tracing::{debug, warn};

const MENU: &str = "\
===== NETWORK MENU =====
1. Add a Device
2. Load
3. Show All Devices
4. Connect Two Devices by IP (Switch must be first)
5. Show All Switch Connections
6. Save and Exit
7. Add a Route to a Router
8. Forward a Packet";

/// 菜单中的一项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddDevice,
    Load,
    ShowDevices,
    Connect,
    ShowConnections,
    SaveAndExit,
    AddRoute,
    Forward,
}

impl MenuChoice {
    pub fn parse(raw: &str) -> Result<Self, InventoryError> {
        match raw.trim() {
            "1" => Ok(Self::AddDevice),
            "2" => Ok(Self::Load),
            "3" => Ok(Self::ShowDevices),
            "4" => Ok(Self::Connect),
            "5" => Ok(Self::ShowConnections),
            "6" => Ok(Self::SaveAndExit),
            "7" => Ok(Self::AddRoute),
            "8" => Ok(Self::Forward),
            other => Err(InventoryError::InvalidMenuOption(other.to_string())),
        }
    }
}

/// 一次菜单循环结束的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// 选择了保存并退出
    Saved,
    /// 输入结束，未保存
    EndOfInput,
}

pub struct Menu<R, W> {
    inventory: Inventory,
    input: R,
    output: W,
    json: bool,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(inventory: Inventory, input: R, output: W) -> Self {
        Self {
            inventory,
            input,
            output,
            json: false,
        }
    }

    /// “显示所有设备”时输出 JSON
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn into_inventory(self) -> Inventory {
        self.inventory
    }

    /// 运行菜单直到保存退出或输入结束。文件写入失败等 I/O 错误会直接返回。
    pub fn run(&mut self) -> Result<Exit, InventoryError> {
        loop {
            writeln!(self.output, "\n{MENU}")?;
            let Some(raw) = self.prompt("Choose an option (1-8): ")? else {
                debug!("输入结束，退出菜单");
                return Ok(Exit::EndOfInput);
            };

            let result = match MenuChoice::parse(&raw) {
                Ok(MenuChoice::SaveAndExit) => {
                    self.inventory.save()?;
                    writeln!(self.output, "Saving and exiting. Goodbye!")?;
                    return Ok(Exit::Saved);
                }
                Ok(choice) => self.dispatch(choice),
                Err(e) => Err(e),
            };

            match result {
                Ok(true) => {}
                Ok(false) => return Ok(Exit::EndOfInput),
                Err(e) if e.is_advisory() => self.report(&e)?,
                Err(e) => return Err(e),
            }
        }
    }

    /// 执行一个选项；返回 `false` 表示读取参数时输入已结束
    fn dispatch(&mut self, choice: MenuChoice) -> Result<bool, InventoryError> {
        debug!(choice = ?choice, "执行菜单选项");
        match choice {
            MenuChoice::AddDevice => self.add_device(),
            MenuChoice::Load => self.load().map(|_| true),
            MenuChoice::ShowDevices => self.show_devices().map(|_| true),
            MenuChoice::Connect => self.connect(),
            MenuChoice::ShowConnections => self.show_connections().map(|_| true),
            MenuChoice::AddRoute => self.add_route(),
            MenuChoice::Forward => self.forward(),
            MenuChoice::SaveAndExit => Ok(true),
        }
    }

    fn add_device(&mut self) -> Result<bool, InventoryError> {
        let Some([kind, name, ip]) = self.prompt_all([
            "Enter device type (switch/router/other): ",
            "Enter device name: ",
            "Enter IP address: ",
        ])?
        else {
            return Ok(false);
        };
        self.inventory.add_device(&kind, &name, &ip, Persist::Yes)?;
        writeln!(
            self.output,
            "{} '{}' added with IP {}.",
            capitalize(&kind),
            name,
            ip
        )?;
        Ok(true)
    }

    fn load(&mut self) -> Result<(), InventoryError> {
        let summary = self.inventory.load()?;
        writeln!(
            self.output,
            "Loaded {} device(s) and {} connection(s).",
            summary.devices.loaded, summary.connections.loaded
        )?;
        Ok(())
    }

    fn show_devices(&mut self) -> Result<(), InventoryError> {
        let registry = self.inventory.registry();
        if self.json {
            let snapshot = registry.snapshot();
            serde_json::to_writer_pretty(&mut self.output, &snapshot).map_err(io::Error::from)?;
            writeln!(self.output)?;
            return Ok(());
        }

        writeln!(self.output, "\n--- Current Network Devices ---")?;
        for (category, devices) in registry.list_all() {
            writeln!(self.output, "\n{}:", category.plural())?;
            if devices.is_empty() {
                writeln!(self.output, "  No devices.")?;
            }
            for d in devices {
                writeln!(self.output, "  - {d}")?;
            }
        }
        Ok(())
    }

    fn connect(&mut self) -> Result<bool, InventoryError> {
        let Some([switch_ip, peer_ip]) = self.prompt_all([
            "Enter IP of the switch: ",
            "Enter IP of the device to connect: ",
        ])?
        else {
            return Ok(false);
        };

        let outcome = self.inventory.connect_by_address(&switch_ip, &peer_ip)?;
        let registry = self.inventory.registry();
        let name_of = |ip: &str| {
            registry
                .find_by_address(ip)
                .and_then(|id| registry.device(id))
                .map(|d| d.name().to_string())
                .unwrap_or_default()
        };
        let switch_name = name_of(&switch_ip);
        let peer_name = name_of(&peer_ip);
        match outcome {
            ConnectOutcome::Connected => writeln!(
                self.output,
                "{switch_name}: Connected to {peer_name} ({peer_ip})"
            )?,
            ConnectOutcome::AlreadyConnected => {
                writeln!(self.output, "{switch_name}: Already connected to {peer_name}")?
            }
        }
        Ok(true)
    }

    fn show_connections(&mut self) -> Result<(), InventoryError> {
        let registry = self.inventory.registry();
        writeln!(self.output, "\n--- Switch Connections ---")?;
        let mut any = false;
        for switch in registry.bucket(Category::Switch) {
            any = true;
            writeln!(self.output, "\n{} connections:", switch.name())?;
            let peers = registry.connections(switch.id())?;
            if peers.is_empty() {
                writeln!(self.output, "  No devices connected.")?;
            }
            for p in peers {
                writeln!(self.output, "  - {p}")?;
            }
        }
        if !any {
            writeln!(self.output, "  No switches.")?;
        }
        Ok(())
    }

    fn add_route(&mut self) -> Result<bool, InventoryError> {
        let Some([router_ip, prefix, next_hop]) = self.prompt_all([
            "Enter IP of the router: ",
            "Enter network prefix: ",
            "Enter next hop: ",
        ])?
        else {
            return Ok(false);
        };
        match self.inventory.add_route(&router_ip, &prefix, &next_hop) {
            Ok(()) => writeln!(
                self.output,
                "Route {prefix} -> {next_hop} added to router {router_ip}."
            )?,
            Err(InventoryError::DeviceNotFound { address }) => {
                writeln!(self.output, "Router {address} not found.")?
            }
            Err(e) => return Err(e),
        }
        Ok(true)
    }

    fn forward(&mut self) -> Result<bool, InventoryError> {
        let Some([router_ip, destination]) = self.prompt_all([
            "Enter IP of the router: ",
            "Enter destination IP: ",
        ])?
        else {
            return Ok(false);
        };
        let router_name = self
            .inventory
            .registry()
            .find_by_address(&router_ip)
            .and_then(|id| self.inventory.registry().device(id))
            .map(|d| d.name().to_string())
            .unwrap_or_default();
        match self.inventory.forward(&router_ip, &destination) {
            Ok(next_hop) => writeln!(
                self.output,
                "{router_name}: Forwarding packet to {next_hop}"
            )?,
            Err(InventoryError::NoRoute { .. }) => writeln!(
                self.output,
                "{router_name}: No route found for {destination}"
            )?,
            Err(InventoryError::DeviceNotFound { address }) => {
                writeln!(self.output, "Router {address} not found.")?
            }
            Err(e) => return Err(e),
        }
        Ok(true)
    }

    fn report(&mut self, err: &InventoryError) -> Result<(), InventoryError> {
        warn!(error = %err, "操作失败");
        let msg = match err {
            InventoryError::DeviceNotFound { .. } => "One or both devices not found.".to_string(),
            InventoryError::NotASwitch { .. } => "The first device must be a Switch.".to_string(),
            InventoryError::NotARouter { address } => format!("Device {address} is not a Router."),
            InventoryError::InvalidMenuOption(_) => "Invalid option. Please try again.".to_string(),
            other => other.to_string(),
        };
        writeln!(self.output, "{msg}")?;
        Ok(())
    }

    /// 输出提示并读取一行（去掉行尾换行）；输入结束时返回 `None`
    fn prompt(&mut self, text: &str) -> Result<Option<String>, InventoryError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn prompt_all<const N: usize>(
        &mut self,
        prompts: [&str; N],
    ) -> Result<Option<[String; N]>, InventoryError> {
        let mut answers: [String; N] = std::array::from_fn(|_| String::new());
        for (slot, text) in answers.iter_mut().zip(prompts) {
            match self.prompt(text)? {
                Some(answer) => *slot = answer,
                None => return Ok(None),
            }
        }
        Ok(Some(answers))
    }
}
