//! 网络设备清单
//!
//! 交互式菜单：添加设备、加载文件、查看设备、连接交换机、保存退出。

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use netinv::menu::{Exit, Menu};
use netinv::store::{DEFAULT_CONNECTIONS_FILE, DEFAULT_DEVICES_FILE, Store};
use netinv::Inventory;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "netinv", about = "模拟网络设备清单（交换机/路由器/普通设备）")]
struct Args {
    /// 设备文件（只追加）
    #[arg(long, default_value = DEFAULT_DEVICES_FILE)]
    devices: PathBuf,
    /// 连接文件（保存时重写）
    #[arg(long, default_value = DEFAULT_CONNECTIONS_FILE)]
    connections: PathBuf,
    /// “显示所有设备”输出 JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    // 初始化 tracing，日志写到 stderr，避免和菜单输出混在一起
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();
    info!(devices = %args.devices.display(), connections = %args.connections.display(), "启动");

    let inventory = Inventory::new(Store::new(args.devices, args.connections));
    let stdin = io::stdin();
    let mut menu = Menu::new(inventory, stdin.lock(), io::stdout()).with_json(args.json);

    match menu.run() {
        Ok(Exit::Saved) => ExitCode::SUCCESS,
        Ok(Exit::EndOfInput) => {
            info!("输入结束，未保存连接");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "退出");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
