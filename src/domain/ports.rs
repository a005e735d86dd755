use super::order::{Order, PaymentMethod};
use super::payment::{Payment, PaymentResult};
use crate::error::Result;
use async_trait::async_trait;

/// A pluggable way of charging an order.
#[async_trait]
pub trait PaymentStrategy: Send + Sync {
    /// The method this strategy handles.
    fn method(&self) -> PaymentMethod;

    async fn process_payment(&self, order: &Order) -> Result<PaymentResult>;
}

/// Persistence port for processed payments.
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    async fn save(&self, payment: Payment) -> Result<()>;
    /// All stored payments, in insertion order.
    async fn all(&self) -> Result<Vec<Payment>>;
}

pub type PaymentStrategyBox = Box<dyn PaymentStrategy>;
pub type PaymentRepositoryBox = Box<dyn PaymentRepository>;
pub type StrategyConstructor = Box<dyn Fn() -> PaymentStrategyBox + Send + Sync>;
