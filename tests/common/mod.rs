// Simulated switch console shared by the integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use switchcfg::core::exchange::{Connector, Pacer, SerialLink};
use switchcfg::{CommandBatch, ConnectionParameters, ExchangeError, ExchangeResult, ExchangeRunner};

/// Everything the fake device observed, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Opened(String, u32),
    Discarded,
    Wrote(Vec<u8>),
    Read(usize),
    /// A read that found nothing before the timeout
    ReadTimedOut,
    Paused(Duration),
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    /// Sends back every byte it receives
    Echo,
    /// Never sends anything
    Silent,
    /// Port cannot be opened
    Unavailable,
    /// Opens, then every write fails
    BrokenWrite,
    /// Opens, then flushing stale input fails
    BrokenDiscard,
}

pub type EventLog = Arc<Mutex<Vec<Event>>>;

pub struct FakeSwitch {
    pub behavior: Behavior,
    pub events: EventLog,
    pending: Arc<Mutex<VecDeque<u8>>>,
}

impl FakeSwitch {
    pub fn new(behavior: Behavior) -> Self {
        Self {
            behavior,
            events: Arc::new(Mutex::new(Vec::new())),
            pending: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn written(&self) -> Vec<u8> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Wrote(bytes) => Some(bytes),
                _ => None,
            })
            .flatten()
            .collect()
    }

    /// True once any read was attempted
    pub fn was_read(&self) -> bool {
        self.events()
            .iter()
            .any(|e| matches!(e, Event::Read(_) | Event::ReadTimedOut))
    }

    pub fn pacer(&self) -> RecordingPacer {
        RecordingPacer {
            events: Arc::clone(&self.events),
        }
    }
}

impl Connector for FakeSwitch {
    fn open(&self, params: &ConnectionParameters) -> Result<Box<dyn SerialLink>, ExchangeError> {
        if self.behavior == Behavior::Unavailable {
            return Err(ExchangeError::PortOpen {
                port: params.port.clone(),
                source: serialport::Error::new(serialport::ErrorKind::NoDevice, "No such device"),
            });
        }

        self.events
            .lock()
            .unwrap()
            .push(Event::Opened(params.port.clone(), params.baud_rate.as_u32()));

        Ok(Box::new(FakeLink {
            behavior: self.behavior,
            events: Arc::clone(&self.events),
            pending: Arc::clone(&self.pending),
        }))
    }
}

struct FakeLink {
    behavior: Behavior,
    events: EventLog,
    pending: Arc<Mutex<VecDeque<u8>>>,
}

impl SerialLink for FakeLink {
    fn discard_input(&mut self) -> io::Result<()> {
        if self.behavior == Behavior::BrokenDiscard {
            return Err(io::Error::new(io::ErrorKind::Other, "Input flush failed"));
        }
        self.pending.lock().unwrap().clear();
        self.events.lock().unwrap().push(Event::Discarded);
        Ok(())
    }

    fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        if self.behavior == Behavior::BrokenWrite {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "Cable unplugged"));
        }
        if self.behavior == Behavior::Echo {
            self.pending.lock().unwrap().extend(bytes.iter().copied());
        }
        self.events.lock().unwrap().push(Event::Wrote(bytes.to_vec()));
        Ok(())
    }

    fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut pending = self.pending.lock().unwrap();
        if pending.is_empty() {
            self.events.lock().unwrap().push(Event::ReadTimedOut);
            return Err(io::Error::new(io::ErrorKind::TimedOut, "Operation timed out"));
        }

        let n = buf.len().min(pending.len());
        for (slot, byte) in buf.iter_mut().zip(pending.drain(..n)) {
            *slot = byte;
        }
        self.events.lock().unwrap().push(Event::Read(n));
        Ok(n)
    }
}

impl Drop for FakeLink {
    fn drop(&mut self) {
        self.events.lock().unwrap().push(Event::Closed);
    }
}

pub struct RecordingPacer {
    events: EventLog,
}

impl Pacer for RecordingPacer {
    fn pause(&self, duration: Duration) {
        self.events.lock().unwrap().push(Event::Paused(duration));
    }
}

/// Runner that counts invocations and answers with a fixed text
pub struct CountingRunner {
    pub calls: AtomicUsize,
    pub reply: String,
}

impl CountingRunner {
    pub fn new(reply: &str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            reply: reply.to_string(),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ExchangeRunner for CountingRunner {
    async fn run(&self, _params: ConnectionParameters, batch: CommandBatch) -> ExchangeResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("{}{}", self.reply, batch.iter().collect::<Vec<_>>().join("|")))
    }
}
