use crate::domain::order::{Amount, Order};
use crate::domain::payment::PaymentResult;
use crate::domain::ports::{PaymentStrategy, PaymentStrategyBox};
use crate::error::Result;

/// Runs payments through whichever strategy is currently plugged in.
///
/// The context knows nothing about how a method charges; it only builds the
/// order for the bound strategy and hands it over.
pub struct PaymentContext {
    strategy: PaymentStrategyBox,
}

impl PaymentContext {
    pub fn new(strategy: PaymentStrategyBox) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> &dyn PaymentStrategy {
        self.strategy.as_ref()
    }

    /// Swaps the bound strategy.
    pub fn set_strategy(&mut self, strategy: PaymentStrategyBox) {
        self.strategy = strategy;
    }

    /// Delegates to the bound strategy and returns its result unmodified.
    pub async fn execute_payment(&self, amount: Amount) -> Result<PaymentResult> {
        let order = Order::new(self.strategy.method(), amount);
        tracing::debug!(method = %order.method(), amount = %amount, "Executing payment");
        self.strategy.process_payment(&order).await
    }
}
