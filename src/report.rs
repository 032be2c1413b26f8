use std::io::{self, Write};

use crate::FetchResult;

/// Writes one line per result, in the order given.
pub fn write_report<W: Write>(out: &mut W, results: &[FetchResult]) -> io::Result<()> {
    for result in results {
        writeln!(out, "{result}")?;
    }
    out.flush()
}
