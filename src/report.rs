//! Houses the `exec` function, which writes one report block per input file.
//!
//! A block looks like this (note the space after every value):
//!
//! ```text
//! input01.txt: 23/6 = 3.83333
//! Sorted by descending denominator and numerator:
//! 1/3 1/2 3/1
//!
//! ```
use anyhow::Result;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::io::sequence_from_path;
use crate::sequence::RationalSequence;

/// Writes the report block for `sequence`, read from `source`.
pub fn write_block(mut out: impl Write, source: &str, sequence: &RationalSequence) -> Result<()> {
    let total = sequence.sum();
    writeln!(out, "{source}: {total} = {:.5}", total.to_decimal())?;
    writeln!(out, "Sorted by descending denominator and numerator:")?;
    for r in sequence {
        write!(out, "{r} ")?;
    }
    out.write_all(b"\n\n")?;
    debug!(source, %total, "wrote block");
    Ok(())
}

/// Reads each of `files` in turn and writes its block to `out`. The first
/// file that can't be read or parsed ends the run with an error.
pub fn exec(files: &[PathBuf], mut out: impl Write) -> Result<()> {
    info!(sources = files.len(), "summing input files");
    for path in files {
        let sequence = sequence_from_path(path)?;
        write_block(&mut out, &path.display().to_string(), &sequence)?;
    }
    out.flush()?;
    Ok(())
}
