// File: crates/dashboard/src/config.rs
// Summary: Fixed server settings (data path, listen address, figure size).

use std::net::SocketAddr;
use std::path::PathBuf;

use launch_core::RenderOptions;

pub const DATA_FILE: &str = "spacex_launch_dash.csv";
pub const PORT: u16 = 1234;

#[derive(Clone, Debug)]
pub struct DashConfig {
    pub data_path: PathBuf,
    pub addr: SocketAddr,
    pub render: RenderOptions,
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DATA_FILE),
            addr: SocketAddr::from(([127, 0, 0, 1], PORT)),
            render: RenderOptions::default(),
        }
    }
}
