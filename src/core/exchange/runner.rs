use async_trait::async_trait;
use std::sync::Arc;
use tracing::error;

use super::{batch::CommandBatch, driver::ExchangeDriver};
use crate::domain::{
    config::ConnectionParameters,
    error::{ExchangeError, ExchangeResult},
};

/// Runs exchanges on behalf of the presentation shell
#[async_trait]
pub trait ExchangeRunner: Send + Sync {
    async fn run(&self, params: ConnectionParameters, batch: CommandBatch) -> ExchangeResult;
}

/// Runs the blocking driver on tokio's blocking pool
pub struct BlockingRunner {
    driver: Arc<ExchangeDriver>,
}

impl BlockingRunner {
    pub fn new(driver: ExchangeDriver) -> Self {
        Self {
            driver: Arc::new(driver),
        }
    }
}

#[async_trait]
impl ExchangeRunner for BlockingRunner {
    async fn run(&self, params: ConnectionParameters, batch: CommandBatch) -> ExchangeResult {
        let driver = Arc::clone(&self.driver);

        match tokio::task::spawn_blocking(move || driver.exchange(&params, &batch)).await {
            Ok(result) => result,
            Err(join_error) => {
                error!("Exchange task failed: {}", join_error);
                Err(ExchangeError::Read {
                    captured: 0,
                    source: std::io::Error::new(std::io::ErrorKind::Other, join_error.to_string()),
                })
            }
        }
    }
}
