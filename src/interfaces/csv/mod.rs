//! CSV input of payment orders and CSV output of stored payments.

pub mod order_reader;
pub mod payment_writer;
