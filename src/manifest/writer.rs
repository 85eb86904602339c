//! Serialise manifest records as `type,path` lines.

use std::fs;
use std::io::Write;
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::{GenerateError, GenerateResult};
use crate::models::Classification;

fn manifest_builder() -> WriterBuilder {
  let mut builder = WriterBuilder::new();
  builder
    .has_headers(false)
    .quote_style(QuoteStyle::Never)
    .terminator(Terminator::Any(b'\n'));
  builder
}

/// Write records to any sink, one unquoted `type,path` line each.
pub fn write_records<W: Write>(sink: W, records: &[Classification]) -> GenerateResult<()> {
  let mut writer = manifest_builder().from_writer(sink);
  for record in records {
    writer.serialize(record)?;
  }
  writer.flush().map_err(csv::Error::from)?;
  Ok(())
}

/// Write records to a manifest file, creating its parent directory when needed.
pub fn write_manifest(path: &Path, records: &[Classification]) -> GenerateResult<()> {
  if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
    fs::create_dir_all(parent).map_err(|err| GenerateError::io(parent, err))?;
  }

  let file = fs::File::create(path).map_err(|err| GenerateError::io(path, err))?;
  write_records(file, records)
}
