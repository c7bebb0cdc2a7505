pub mod output;
pub mod snapshot;

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

pub use output::{create_writer, OutputFormat, OutputWriter};
pub use snapshot::{load_snapshot, parse_snapshot, SnapshotFormat};

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Open the output destination: a file when given, stdout otherwise.
pub fn open_destination(output: Option<&Path>) -> Result<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = fs::File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            Ok(Box::new(std::io::BufWriter::new(file)))
        }
        None => Ok(Box::new(std::io::stdout())),
    }
}
