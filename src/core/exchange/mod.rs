// Exchange module - One request/response cycle over a serial link
pub mod batch;
pub mod driver;
pub mod link;
pub mod runner;

pub use batch::CommandBatch;
pub use driver::{ExchangeDriver, LINE_TERMINATOR};
pub use link::{Connector, Pacer, SerialLink, ThreadPacer};
pub use runner::{BlockingRunner, ExchangeRunner};
