//! Domain layer: payment entities and the ports the application depends on.

pub mod order;
pub mod payment;
pub mod ports;
