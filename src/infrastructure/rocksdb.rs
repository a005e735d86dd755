use crate::domain::payment::Payment;
use crate::domain::ports::PaymentRepository;
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamily, ColumnFamilyDescriptor, DB, IteratorMode, Options};
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Column Family for storing payment records.
pub const CF_PAYMENTS: &str = "payments";

/// A persistent payment repository backed by RocksDB.
///
/// Records are keyed by a big-endian `u64` sequence number so that iteration
/// order matches insertion order. The next sequence number is recovered from
/// the last stored key when the database is opened.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>` and counter).
#[derive(Clone)]
pub struct RocksDBPaymentRepository {
    db: Arc<DB>,
    next_seq: Arc<AtomicU64>,
}

impl RocksDBPaymentRepository {
    /// Opens or creates a RocksDB instance at the specified path.
    ///
    /// # Arguments
    ///
    /// * `path` - The filesystem path where the database will be stored.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_payments = ColumnFamilyDescriptor::new(CF_PAYMENTS, Options::default());
        let db = DB::open_cf_descriptors(&opts, path, vec![cf_payments])?;

        let next_seq = {
            let cf = payments_cf(&db)?;
            match db.iterator_cf(cf, IteratorMode::End).next() {
                Some(item) => {
                    let (key, _value) = item?;
                    decode_key(&key)? + 1
                }
                None => 0,
            }
        };

        Ok(Self {
            db: Arc::new(db),
            next_seq: Arc::new(AtomicU64::new(next_seq)),
        })
    }
}

fn payments_cf(db: &DB) -> Result<&ColumnFamily> {
    db.cf_handle(CF_PAYMENTS).ok_or_else(|| {
        PaymentError::StorageError(Box::new(std::io::Error::other(
            "Payments column family not found",
        )))
    })
}

fn decode_key(key: &[u8]) -> Result<u64> {
    let bytes: [u8; 8] = key.try_into().map_err(|_| {
        PaymentError::StorageError(Box::new(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("Malformed payment key of {} bytes", key.len()),
        )))
    })?;
    Ok(u64::from_be_bytes(bytes))
}

#[async_trait]
impl PaymentRepository for RocksDBPaymentRepository {
    async fn save(&self, payment: Payment) -> Result<()> {
        let cf = payments_cf(&self.db)?;

        let value = serde_json::to_vec(&payment).map_err(|e| {
            PaymentError::StorageError(Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization error: {}", e),
            )))
        })?;
        let key = self.next_seq.fetch_add(1, Ordering::SeqCst).to_be_bytes();

        self.db.put_cf(cf, key, value)?;

        Ok(())
    }

    async fn all(&self) -> Result<Vec<Payment>> {
        let cf = payments_cf(&self.db)?;

        let mut payments = Vec::new();
        for item in self.db.iterator_cf(cf, IteratorMode::Start) {
            let (_key, value) = item?;
            let payment: Payment = serde_json::from_slice(&value).map_err(|e| {
                PaymentError::StorageError(Box::new(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    format!("Failed to deserialize payment: {}", e),
                )))
            })?;
            payments.push(payment);
        }

        Ok(payments)
    }
}
