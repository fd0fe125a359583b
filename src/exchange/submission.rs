use std::time::Duration;

use async_trait::async_trait;
use log::info;

use super::exchange_errors::ExchangeError;
use super::exchange_model::ExchangeOrder;

/// Executes a submitted exchange order.
///
/// There is no real settlement behind the form; the shipped
/// implementation just waits out a fixed delay. The trait exists so
/// tests can inject failures or complete instantly.
#[async_trait]
pub trait SubmissionHandler: Send + Sync {
    async fn execute(&self, order: &ExchangeOrder) -> Result<(), ExchangeError>;
}

/// Pretends to execute an order by sleeping for a fixed delay.
pub struct SimulatedSubmissionHandler {
    delay: Duration,
}

impl SimulatedSubmissionHandler {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl SubmissionHandler for SimulatedSubmissionHandler {
    async fn execute(&self, order: &ExchangeOrder) -> Result<(), ExchangeError> {
        info!(
            "executing simulated exchange: {} {} for {} {}",
            order.sell_amount, order.sell_currency, order.buy_amount, order.buy_currency
        );
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}
