//! Adapters for the domain ports: the built-in payment strategies and the
//! payment repositories.

pub mod in_memory;
#[cfg(feature = "storage-rocksdb")]
pub mod rocksdb;
pub mod strategies;
