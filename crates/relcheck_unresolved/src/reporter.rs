use std::io::{self, Write};

use log::debug;

use crate::types::UnresolvedImport;

/// Prints one `file:line: Failed to resolve 'target'` line per record, or a
/// single "No import errors found." line when there are none.
pub fn print_report<W: Write>(writer: &mut W, errors: &[UnresolvedImport]) -> io::Result<()> {
    debug!("Printing report for {} errors", errors.len());
    if errors.is_empty() {
        writeln!(writer, "No import errors found.")?;
    }
    for error in errors {
        writeln!(writer, "{}", error)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn print_json_report<W: Write>(writer: &mut W, errors: &[UnresolvedImport]) -> io::Result<()> {
    debug!("Printing JSON report for {} errors", errors.len());
    serde_json::to_writer_pretty(&mut *writer, errors)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
