use super::order::{Amount, Order, PaymentMethod};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Approved,
    Declined,
    Pending,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Approved => "approved",
            PaymentStatus::Declined => "declined",
            PaymentStatus::Pending => "pending",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outcome a strategy reports for one order.
///
/// Echoes the method and amount of the order it was produced for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentResult {
    pub status: PaymentStatus,
    pub method: PaymentMethod,
    pub amount: Amount,
    pub message: String,
}

impl PaymentResult {
    pub fn for_order(order: &Order, status: PaymentStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            method: order.method(),
            amount: order.amount(),
            message: message.into(),
        }
    }
}

/// The record of a processed payment.
///
/// The status is fixed at construction; there are no setters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    method: PaymentMethod,
    status: PaymentStatus,
    amount: Amount,
}

impl Payment {
    pub fn new(method: PaymentMethod, status: PaymentStatus, amount: Amount) -> Self {
        Self {
            method,
            status,
            amount,
        }
    }

    pub fn method(&self) -> PaymentMethod {
        self.method
    }

    pub fn status(&self) -> PaymentStatus {
        self.status
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }
}
