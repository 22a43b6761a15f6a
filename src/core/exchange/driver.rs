use std::io;
use std::sync::Arc;

use tracing::{debug, error, info, info_span, warn};

use super::batch::CommandBatch;
use super::link::{Connector, Pacer, SerialLink};
use crate::domain::{
    config::{ConnectionParameters, TimingPolicy},
    error::{ExchangeError, ExchangeResult},
};

pub const LINE_TERMINATOR: &[u8] = b"\r\n";

/// Runs one open-write-read-close cycle against a switch console.
///
/// The switch never signals that a command has finished, so the driver waits
/// the fixed delays of its [`TimingPolicy`] and stops reading at the first
/// chunk that comes back empty. Slow output can be cut short.
pub struct ExchangeDriver {
    connector: Arc<dyn Connector>,
    pacer: Arc<dyn Pacer>,
    timing: TimingPolicy,
}

impl ExchangeDriver {
    pub fn new(connector: Arc<dyn Connector>, pacer: Arc<dyn Pacer>, timing: TimingPolicy) -> Self {
        Self {
            connector,
            pacer,
            timing,
        }
    }

    pub fn exchange(&self, params: &ConnectionParameters, batch: &CommandBatch) -> ExchangeResult {
        let exchange_id = uuid::Uuid::new_v4().simple().to_string();
        let span = info_span!(
            "exchange",
            id = %exchange_id,
            port = %params.port,
            baud = params.baud_rate.as_u32()
        );
        let _guard = span.enter();

        if batch.is_empty() {
            warn!("Empty command batch: only line terminators will be sent");
        }

        let mut link = self.connector.open(params).map_err(|e| {
            error!("{}", e);
            e
        })?;
        info!("Serial port opened");

        let captured = self.drive(link.as_mut(), batch);

        // The link is released on every path before the outcome is inspected.
        drop(link);
        info!("Serial port closed");

        let bytes = captured.map_err(|e| {
            warn!("Exchange failed: {}", e);
            e
        })?;

        let text = String::from_utf8(bytes).map_err(|source| {
            warn!("Discarding {} undecodable bytes", source.as_bytes().len());
            ExchangeError::Decode { source }
        })?;

        info!("Exchange finished with {} bytes of output", text.len());
        Ok(text)
    }

    fn drive(&self, link: &mut dyn SerialLink, batch: &CommandBatch) -> Result<Vec<u8>, ExchangeError> {
        self.pacer.pause(self.timing.settle_delay);

        link.discard_input()
            .map_err(|source| ExchangeError::Read { captured: 0, source })?;

        write_line(link, "")?;

        for command in batch.iter() {
            write_line(link, command)?;
            debug!("Sent command '{}'", command);
            self.pacer.pause(self.timing.command_delay);
        }

        write_line(link, "")?;

        self.drain(link)
    }

    fn drain(&self, link: &mut dyn SerialLink) -> Result<Vec<u8>, ExchangeError> {
        let mut output = Vec::new();
        let mut chunk = vec![0u8; self.timing.chunk_size.max(1)];

        loop {
            match link.read_chunk(&mut chunk) {
                Ok(0) => break,
                Ok(n) => {
                    debug!("Received {} bytes", n);
                    output.extend_from_slice(&chunk[..n]);
                }
                Err(ref e) if e.kind() == io::ErrorKind::TimedOut => break,
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(source) => {
                    return Err(ExchangeError::Read {
                        captured: output.len(),
                        source,
                    })
                }
            }
        }

        Ok(output)
    }
}

fn write_line(link: &mut dyn SerialLink, command: &str) -> Result<(), ExchangeError> {
    let mut line = Vec::with_capacity(command.len() + LINE_TERMINATOR.len());
    line.extend_from_slice(command.as_bytes());
    line.extend_from_slice(LINE_TERMINATOR);
    link.write_all(&line)
        .map_err(|source| ExchangeError::Write { source })
}
