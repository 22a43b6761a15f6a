use crate::core::exchange::{Connector, SerialLink};
use crate::domain::{config::ConnectionParameters, error::ExchangeError};
use serialport::{ClearBuffer, SerialPort};
use std::io::{self, Read, Write};
use tracing::{debug, info};

/// Serial link backed by an OS serial port
pub struct SerialClient {
    port: Box<dyn SerialPort>,
}

impl SerialClient {
    pub fn open(params: &ConnectionParameters) -> Result<Self, ExchangeError> {
        let port = serialport::new(params.port.as_str(), params.baud_rate.as_u32())
            .data_bits(serialport::DataBits::Eight)
            .stop_bits(serialport::StopBits::One)
            .parity(serialport::Parity::None)
            .flow_control(serialport::FlowControl::None)
            .timeout(params.read_timeout)
            .open()
            .map_err(|source| ExchangeError::PortOpen {
                port: params.port.clone(),
                source,
            })?;

        info!("Opened {} at {} baud", params.port, params.baud_rate);

        Ok(Self { port })
    }
}

impl SerialLink for SerialClient {
    fn discard_input(&mut self) -> io::Result<()> {
        self.port.clear(ClearBuffer::Input).map_err(io::Error::from)
    }

    fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        Write::write_all(&mut self.port, bytes)?;
        self.port.flush()?;
        debug!("Sent {} bytes over serial", bytes.len());
        Ok(())
    }

    fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.port.read(buf)
    }
}

impl Drop for SerialClient {
    fn drop(&mut self) {
        debug!("Releasing serial port {:?}", self.port.name());
    }
}

/// Opens [`SerialClient`]s
#[derive(Debug, Clone, Copy, Default)]
pub struct SerialConnector;

impl Connector for SerialConnector {
    fn open(&self, params: &ConnectionParameters) -> Result<Box<dyn SerialLink>, ExchangeError> {
        Ok(Box::new(SerialClient::open(params)?))
    }
}

/// Names of the serial ports the OS reports; empty when enumeration fails
pub fn discover_ports() -> Vec<String> {
    match serialport::available_ports() {
        Ok(ports) => ports.into_iter().map(|p| p.port_name).collect(),
        Err(e) => {
            debug!("Serial port enumeration failed: {}", e);
            Vec::new()
        }
    }
}
