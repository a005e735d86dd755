use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum PaymentError {
    #[error("Payment method '{0}' is not supported")]
    #[diagnostic(
        code(payments::unsupported_method),
        help("supported methods are: pix, credit_card, boleto")
    )]
    UnsupportedPaymentMethod(String),
    #[error("Validation error: {0}")]
    #[diagnostic(code(payments::validation))]
    ValidationError(String),
    #[error("Payment processing error: {0}")]
    #[diagnostic(code(payments::processing))]
    PaymentProcessingError(String),
    #[error("Storage error: {0}")]
    #[diagnostic(code(payments::storage))]
    StorageError(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(feature = "storage-rocksdb")]
impl From<rocksdb::Error> for PaymentError {
    fn from(err: rocksdb::Error) -> Self {
        PaymentError::StorageError(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, PaymentError>;
