//! Application layer containing the payment orchestration.
//!
//! The `PaymentStrategyFactory` turns a method identifier into a strategy,
//! `PaymentContext` runs a bound strategy, and `ProcessPaymentUseCase` ties a
//! factory-selected strategy to a payment repository.

pub mod context;
pub mod factory;
pub mod use_case;
