use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// One raw row of the orders file.
///
/// The method stays a string and the amount is not yet validated, so rejection
/// of either happens in the use case.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct OrderRecord {
    pub method: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
}

/// Reads payment orders from a CSV source with a `method,amount` header.
pub struct OrderReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> OrderReader<R> {
    /// Creates a new `OrderReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily reads and deserializes order rows.
    pub fn orders(self) -> impl Iterator<Item = Result<OrderRecord>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PaymentError::from))
    }
}
