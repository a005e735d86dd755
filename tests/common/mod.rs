use std::fs::File;
use std::io::Error;
use std::path::Path;

const METHODS: [&str; 3] = ["pix", "credit_card", "boleto"];

/// Writes `rows` orders cycling through the supported methods.
pub fn generate_orders_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["method", "amount"])?;

    for i in 0..rows {
        let amount = format!("{}.25", i % 1000 + 1);
        wtr.write_record([METHODS[i % METHODS.len()], amount.as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}
