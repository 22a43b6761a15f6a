use std::io;
use std::time::Duration;

use crate::domain::{config::ConnectionParameters, error::ExchangeError};

/// An open, byte-oriented serial channel.
///
/// Dropping the link closes it.
pub trait SerialLink: Send {
    /// Throw away whatever the device has already sent
    fn discard_input(&mut self) -> io::Result<()>;

    fn write_all(&mut self, bytes: &[u8]) -> io::Result<()>;

    /// Read up to `buf.len()` bytes. `Ok(0)` or a `TimedOut` error means the
    /// device sent nothing within the read timeout.
    fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<usize>;
}

/// Opens links for exchanges
pub trait Connector: Send + Sync {
    fn open(&self, params: &ConnectionParameters) -> Result<Box<dyn SerialLink>, ExchangeError>;
}

/// Fixed waits between exchange steps
pub trait Pacer: Send + Sync {
    fn pause(&self, duration: Duration);
}

/// Sleeps the calling thread
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}
