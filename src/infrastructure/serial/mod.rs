// Serial module - serialport-backed exchange links
pub mod client;

pub use client::{discover_ports, SerialClient, SerialConnector};
