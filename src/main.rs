use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use payment_strategies::application::use_case::ProcessPaymentUseCase;
use payment_strategies::domain::ports::{PaymentRepository, PaymentRepositoryBox};
use payment_strategies::infrastructure::in_memory::InMemoryPaymentRepository;
use payment_strategies::interfaces::csv::order_reader::OrderReader;
use payment_strategies::interfaces::csv::payment_writer::PaymentWriter;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input orders CSV file (`method,amount`)
    input: PathBuf,

    /// Path to persistent database (optional). If provided, uses RocksDB.
    #[arg(long, env = "PAYMENTS_DB_PATH")]
    db_path: Option<PathBuf>,

    /// Output format for the stored payments
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Log filter, e.g. `info` or `payment_strategies=debug`
    #[arg(long, env = "PAYMENTS_LOG", default_value = "warn")]
    log_level: String,
}

fn init_tracing(filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();
}

#[cfg(feature = "storage-rocksdb")]
fn open_repository(db_path: Option<PathBuf>) -> Result<PaymentRepositoryBox> {
    use payment_strategies::infrastructure::rocksdb::RocksDBPaymentRepository;

    match db_path {
        Some(path) => {
            let repo = RocksDBPaymentRepository::open(path).into_diagnostic()?;
            Ok(Box::new(repo))
        }
        None => Ok(Box::new(InMemoryPaymentRepository::new())),
    }
}

#[cfg(not(feature = "storage-rocksdb"))]
fn open_repository(db_path: Option<PathBuf>) -> Result<PaymentRepositoryBox> {
    if db_path.is_some() {
        tracing::warn!(
            "Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to in-memory storage."
        );
    }
    Ok(Box::new(InMemoryPaymentRepository::new()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let use_case = ProcessPaymentUseCase::new(open_repository(cli.db_path)?);

    let file = File::open(cli.input).into_diagnostic()?;
    let reader = OrderReader::new(file);
    for record in reader.orders() {
        match record {
            Ok(order) => {
                if let Err(e) = use_case.execute(order.amount, &order.method).await {
                    tracing::warn!("Error processing order: {}", e);
                }
            }
            Err(e) => {
                tracing::warn!("Error reading order: {}", e);
            }
        }
    }

    let payments = use_case.repository().all().await?;

    let stdout = io::stdout();
    match cli.format {
        OutputFormat::Csv => {
            PaymentWriter::new(stdout.lock()).write_payments(&payments)?;
        }
        OutputFormat::Json => {
            let mut out = stdout.lock();
            serde_json::to_writer_pretty(&mut out, &payments).into_diagnostic()?;
            writeln!(out).into_diagnostic()?;
        }
    }

    Ok(())
}
