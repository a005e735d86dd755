use crate::domain::order::{Order, PaymentMethod};
use crate::domain::payment::{PaymentResult, PaymentStatus};
use crate::domain::ports::PaymentStrategy;
use crate::error::Result;
use async_trait::async_trait;

/// Instant transfer. Settles immediately.
#[derive(Debug, Default, Clone, Copy)]
pub struct PixStrategy;

#[async_trait]
impl PaymentStrategy for PixStrategy {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::Pix
    }

    async fn process_payment(&self, order: &Order) -> Result<PaymentResult> {
        Ok(PaymentResult::for_order(
            order,
            PaymentStatus::Approved,
            format!("Pix transfer of {} settled", order.amount()),
        ))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CreditCardStrategy;

#[async_trait]
impl PaymentStrategy for CreditCardStrategy {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::CreditCard
    }

    async fn process_payment(&self, order: &Order) -> Result<PaymentResult> {
        Ok(PaymentResult::for_order(
            order,
            PaymentStatus::Approved,
            format!("Credit card charge of {} authorised", order.amount()),
        ))
    }
}

/// Bank slip. The slip is issued and treated as paid.
#[derive(Debug, Default, Clone, Copy)]
pub struct BoletoStrategy;

#[async_trait]
impl PaymentStrategy for BoletoStrategy {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::Boleto
    }

    async fn process_payment(&self, order: &Order) -> Result<PaymentResult> {
        Ok(PaymentResult::for_order(
            order,
            PaymentStatus::Approved,
            format!("Boleto for {} issued", order.amount()),
        ))
    }
}
